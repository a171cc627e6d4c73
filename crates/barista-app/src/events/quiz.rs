use std::time::Duration;

use barista_types::{AdvanceTicket, AppEvent};
use barista_ui::render::score_notice;

use super::EventContext;
use crate::state::AppState;

pub async fn handle_start_quiz(state: &mut AppState, ctx: &EventContext) -> anyhow::Result<()> {
    let view = state.quiz.start();
    ctx.app_to_ui_tx.send(AppEvent::ShowQuiz(view)).await?;
    Ok(())
}

pub async fn handle_select_option(
    state: &mut AppState,
    ctx: &EventContext,
    index: usize,
) -> anyhow::Result<()> {
    let Some(evaluation) = state.quiz.select_option(index) else {
        return Ok(());
    };

    ctx.app_to_ui_tx
        .send(AppEvent::ShowQuiz(evaluation.view))
        .await?;

    let delay = Duration::from_millis(state.config.quiz.advance_delay_ms);
    ctx.scheduler
        .schedule(delay, AppEvent::AdvanceQuiz(evaluation.ticket));

    Ok(())
}

pub async fn handle_advance(
    state: &mut AppState,
    ctx: &EventContext,
    ticket: AdvanceTicket,
) -> anyhow::Result<()> {
    if let Some(view) = state.quiz.advance(ticket) {
        ctx.app_to_ui_tx.send(AppEvent::ShowQuiz(view)).await?;
    }
    Ok(())
}

pub async fn handle_show_score(state: &mut AppState, ctx: &EventContext) -> anyhow::Result<()> {
    let notice = score_notice(state.quiz.current_score(), state.quiz.total());
    ctx.app_to_ui_tx.send(AppEvent::Notice(notice)).await?;
    Ok(())
}
