use barista_speech::RecognitionStart;
use barista_types::{AppEvent, RecognitionUpdate};
use barista_ui::render::RECOGNITION_UNAVAILABLE;

use super::EventContext;
use crate::state::AppState;

pub async fn handle_speak(
    state: &mut AppState,
    _ctx: &EventContext,
    text: &str,
) -> anyhow::Result<()> {
    // a busy synthesizer drops the request on its own; only platform failures land here
    if let Err(e) = state.speech.speak(text) {
        tracing::error!("Speech synthesis failed: {}", e);
    }
    Ok(())
}

pub async fn handle_start_recognition(
    state: &mut AppState,
    ctx: &EventContext,
) -> anyhow::Result<()> {
    match state.speech.start_recognition() {
        Ok(RecognitionStart::Started) => {
            ctx.app_to_ui_tx
                .send(AppEvent::ShowRecognized(state.speech.slot().clone()))
                .await?;
        }
        Ok(RecognitionStart::AlreadyListening) => {
            tracing::debug!("Recognition already listening");
        }
        Ok(RecognitionStart::Unavailable) => {
            ctx.app_to_ui_tx
                .send(AppEvent::Notice(RECOGNITION_UNAVAILABLE.to_string()))
                .await?;
        }
        Err(e) => {
            tracing::error!("Failed to start recognition: {}", e);
            ctx.app_to_ui_tx
                .send(AppEvent::Notice(e.to_string()))
                .await?;
        }
    }
    Ok(())
}

pub async fn handle_stop_recognition(
    state: &mut AppState,
    ctx: &EventContext,
) -> anyhow::Result<()> {
    match state.speech.stop_recognition() {
        Ok(true) => {
            ctx.app_to_ui_tx
                .send(AppEvent::ShowRecognized(state.speech.slot().clone()))
                .await?;
        }
        Ok(false) => {}
        Err(e) => {
            tracing::error!("Failed to stop recognition: {}", e);
        }
    }
    Ok(())
}

pub async fn handle_recognition_event(
    state: &mut AppState,
    ctx: &EventContext,
    update: RecognitionUpdate,
) -> anyhow::Result<()> {
    if state.speech.on_update(update) {
        ctx.app_to_ui_tx
            .send(AppEvent::ShowRecognized(state.speech.slot().clone()))
            .await?;
    }
    Ok(())
}
