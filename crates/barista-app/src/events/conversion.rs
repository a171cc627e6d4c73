use barista_types::AppEvent;

use super::EventContext;
use crate::state::AppState;

pub async fn handle_convert(
    state: &mut AppState,
    ctx: &EventContext,
    text: &str,
) -> anyhow::Result<()> {
    if text.trim().is_empty() {
        return Ok(());
    }

    let result = state.converter.convert(text);
    tracing::debug!("Conversion of '{}': {:?}", text, result);

    ctx.app_to_ui_tx
        .send(AppEvent::ShowConversion(result))
        .await?;
    Ok(())
}
