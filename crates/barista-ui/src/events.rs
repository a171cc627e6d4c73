use barista_types::{AppEvent, UiEvent};

use crate::command::{Command, HELP};
use crate::render::{Action, Element, Kind, render_phrases, render_quiz, render_recognized};
use crate::state::{Panel, UiState};

/// Apply a backend event to the surface. Returns the panel that changed.
pub fn handle_events(event: AppEvent, state: &mut UiState) -> Option<Panel> {
    match event {
        AppEvent::ShowPhrases(phrases) => {
            tracing::debug!("[UI] Showing {} phrases", phrases.len());
            state.phrases = render_phrases(&phrases);
            Some(Panel::Phrases)
        }
        AppEvent::ShowQuiz(view) => {
            state.quiz = render_quiz(&view);
            Some(Panel::Quiz)
        }
        AppEvent::ShowConversion(result) => {
            state.show_conversion(&result);
            Some(Panel::Conversion)
        }
        AppEvent::ShowRecognized(slot) => {
            state.recognized = render_recognized(&slot);
            Some(Panel::Recognized)
        }
        AppEvent::Notice(message) => {
            state.notice = Some(message);
            Some(Panel::Notice)
        }
        AppEvent::BackendReady => {
            tracing::debug!("[UI] Backend ready");
            state.ready = true;
            None
        }
        // backend-bound events
        AppEvent::UiEvent(_) | AppEvent::AdvanceQuiz(_) | AppEvent::Recognition(_) => None,
    }
}

/// What the UI loop should do with a parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    Send(UiEvent),
    Print(String),
    Quit,
}

pub const NOT_READY: &str = "La aplicación todavía se está iniciando.";

/// Backend-bound commands are held back until the backend has announced itself
pub fn resolve_command(command: Command, state: &mut UiState) -> Dispatch {
    match resolve(command, state) {
        Dispatch::Send(event) if !state.ready => {
            tracing::debug!("[UI] Backend not ready, dropping {:?}", event);
            Dispatch::Print(NOT_READY.to_string())
        }
        dispatch => dispatch,
    }
}

fn resolve(command: Command, state: &mut UiState) -> Dispatch {
    match command {
        Command::StartQuiz => Dispatch::Send(UiEvent::StartQuiz),
        Command::Score => Dispatch::Send(UiEvent::ShowScore),
        Command::Convert(text) => Dispatch::Send(UiEvent::ConvertText(text)),
        Command::Listen => Dispatch::Send(UiEvent::StartRecognition),
        Command::Stop => Dispatch::Send(UiEvent::StopRecognition),
        Command::Select(index) => {
            let action = state
                .quiz
                .actions()
                .find(|a| **a == Action::SelectOption(index))
                .cloned();
            match action {
                Some(action) => dispatch_action(action, state),
                None if state.quiz.actions().next().is_none() => {
                    Dispatch::Print("Primero empieza la prueba con 'start'.".to_string())
                }
                None => Dispatch::Print(format!("No hay opción {}.", index + 1)),
            }
        }
        Command::Play(index) => {
            let action = state
                .phrases
                .children
                .iter()
                .filter(|c| c.kind == Kind::Card)
                .nth(index)
                .and_then(first_speak);
            match action {
                Some(action) => dispatch_action(action, state),
                None => Dispatch::Print(format!("No existe la frase {}.", index + 1)),
            }
        }
        Command::Say => match first_speak(&state.conversion) {
            Some(action) => dispatch_action(action, state),
            None => Dispatch::Print("No hay sugerencia para escuchar.".to_string()),
        },
        Command::Copy => {
            let action = state
                .conversion
                .actions()
                .find(|a| matches!(a, Action::Copy(_)))
                .cloned();
            match action {
                Some(action) => dispatch_action(action, state),
                None => Dispatch::Print("No hay sugerencia para copiar.".to_string()),
            }
        }
        Command::Show => Dispatch::Print(state.render_all()),
        Command::Help => Dispatch::Print(HELP.to_string()),
        Command::Quit => Dispatch::Quit,
    }
}

fn first_speak(element: &Element) -> Option<Action> {
    element
        .actions()
        .find(|a| matches!(a, Action::Speak(_)))
        .cloned()
}

fn dispatch_action(action: Action, state: &mut UiState) -> Dispatch {
    match action.into_event() {
        // the clipboard belongs to the front-end
        UiEvent::Copy(text) => {
            let message = format!("Copiado: {text}");
            state.clipboard = Some(text);
            Dispatch::Print(message)
        }
        event => Dispatch::Send(event),
    }
}
