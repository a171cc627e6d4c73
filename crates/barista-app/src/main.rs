use barista_lang_spanish::translator::EXAMPLE_INPUT;
use barista_lang_spanish::{SpanishConverter, SpanishPack};
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod controller;
pub mod events;
pub mod profile;
pub mod scheduler;
pub mod state;

#[cfg(test)]
mod tests;

use self::controller::AppController;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = profile::load_config()?;

    // Logs go to stderr; stdout is the display surface
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting barista...");

    let pack = SpanishPack::new();
    let converter = SpanishConverter::new(config.conversion.baseline)?;

    let controller = AppController::new(config);
    let state = controller.build_state(&pack, Box::new(converter))?;
    let mut tasks = controller.spawn_tasks(state, EXAMPLE_INPUT.to_string());

    tokio::select! {
        _ = signal::ctrl_c() => {
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::info!("task finished, shutting down"),
                Ok(Err(e)) => tracing::error!("task failed: {e:#}"),
                Err(e) => tracing::error!("task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    tasks.shutdown().await;

    Ok(())
}
