use std::io::BufRead;

use barista_config::ui::UiConfig;
use barista_types::{AppEvent, UiEvent};
use kanal::{AsyncReceiver, AsyncSender, Sender};

pub mod command;
pub mod events;
pub mod render;
pub mod state;
pub mod text;

use command::{Command, HELP};
use events::{Dispatch, handle_events, resolve_command};
use state::UiState;

/// Terminal front-end: prints panels as the backend updates them and turns typed lines
/// into UI events.
pub async fn ui_loop(
    app_to_ui_rx: AsyncReceiver<AppEvent>,
    ui_to_app_tx: AsyncSender<AppEvent>,
    config: UiConfig,
    example_input: String,
) -> anyhow::Result<()> {
    let mut state = UiState::new(example_input);

    if config.show_hints {
        println!("{HELP}\n");
    }

    // tokio's stdin read cannot be cancelled and would hold up runtime shutdown
    let (line_tx, line_rx) = kanal::bounded::<String>(16);
    let line_rx = line_rx.to_async();
    std::thread::spawn(move || read_lines(line_tx));

    loop {
        tokio::select! {
            event = app_to_ui_rx.recv() => {
                let Ok(event) = event else {
                    tracing::info!("[UI] Backend channel closed");
                    break;
                };

                if let Some(panel) = handle_events(event, &mut state) {
                    print!("{}", state.panel(panel));
                }
            }
            line = line_rx.recv() => {
                let Ok(line) = line else {
                    // stdin closed
                    ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
                    break;
                };

                if line.trim().is_empty() {
                    continue;
                }

                let command = match line.parse::<Command>() {
                    Ok(command) => command,
                    Err(e) => {
                        println!("{e}");
                        continue;
                    }
                };

                match resolve_command(command, &mut state) {
                    Dispatch::Send(event) => {
                        tracing::debug!("[UI] Sending {:?}", event);
                        ui_to_app_tx.send(AppEvent::UiEvent(event)).await?;
                    }
                    Dispatch::Print(text) => println!("{text}"),
                    Dispatch::Quit => {
                        ui_to_app_tx.send(AppEvent::UiEvent(UiEvent::Close)).await?;
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}

fn read_lines(line_tx: Sender<String>) {
    for line in std::io::stdin().lock().lines() {
        match line {
            Ok(line) => {
                if line_tx.send(line).is_err() {
                    break;
                }
            }
            Err(e) => {
                tracing::error!("Failed to read terminal input: {}", e);
                break;
            }
        }
    }
}
