use barista_types::{AppEvent, UiEvent};
use kanal::{AsyncReceiver, AsyncSender};

use crate::scheduler::Scheduler;
use crate::state::AppState;

pub mod conversion;
pub mod quiz;
pub mod speech;

use conversion::handle_convert;
use quiz::{handle_advance, handle_select_option, handle_show_score, handle_start_quiz};
use speech::{
    handle_recognition_event, handle_speak, handle_start_recognition, handle_stop_recognition,
};

/// Shared handles every handler needs
pub struct EventContext {
    pub app_to_ui_tx: AsyncSender<AppEvent>,
    pub scheduler: Scheduler,
}

/// App's main loop. All domain state is touched from here only.
pub async fn event_loop(
    mut state: AppState,
    ui_to_app_rx: AsyncReceiver<AppEvent>,
    ctx: EventContext,
) -> anyhow::Result<()> {
    ctx.app_to_ui_tx
        .send(AppEvent::ShowPhrases(state.catalog.entries().to_vec()))
        .await?;
    ctx.app_to_ui_tx
        .send(AppEvent::ShowQuiz(state.quiz.render_current()))
        .await?;
    ctx.app_to_ui_tx.send(AppEvent::BackendReady).await?;

    tracing::info!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = ui_to_app_rx.recv().await?;
        tracing::debug!("[EVENT_LOOP] Event received: {:?}", event);

        if let AppEvent::UiEvent(UiEvent::Close) = event {
            tracing::info!("[EVENT_LOOP] Close requested");
            break;
        }

        // one failing handler must not take the whole app down
        if let Err(e) = handle_events(&mut state, &ctx, event).await {
            tracing::error!("[EVENT_LOOP] Handler failed: {e:#}");
        }
    }

    Ok(())
}

pub async fn handle_events(
    state: &mut AppState,
    ctx: &EventContext,
    event: AppEvent,
) -> anyhow::Result<()> {
    match event {
        AppEvent::UiEvent(ui_event) => match ui_event {
            UiEvent::StartQuiz => handle_start_quiz(state, ctx).await?,
            UiEvent::ShowScore => handle_show_score(state, ctx).await?,
            UiEvent::SelectOption(index) => handle_select_option(state, ctx, index).await?,
            UiEvent::ConvertText(text) => handle_convert(state, ctx, &text).await?,
            UiEvent::StartRecognition => handle_start_recognition(state, ctx).await?,
            UiEvent::StopRecognition => handle_stop_recognition(state, ctx).await?,
            UiEvent::Speak(text) => handle_speak(state, ctx, &text).await?,
            UiEvent::Copy(_) => {
                // clipboard is handled by the front-end
            }
            UiEvent::Close => {}
        },
        AppEvent::AdvanceQuiz(ticket) => handle_advance(state, ctx, ticket).await?,
        AppEvent::Recognition(update) => handle_recognition_event(state, ctx, update).await?,
        AppEvent::ShowPhrases(_)
        | AppEvent::ShowQuiz(_)
        | AppEvent::ShowConversion(_)
        | AppEvent::ShowRecognized(_)
        | AppEvent::Notice(_)
        | AppEvent::BackendReady => {
            // UI-only events, ignore in backend
        }
    }

    Ok(())
}
