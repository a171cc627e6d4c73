use barista_types::{ConversionResult, QuizView, RecognitionSlot};

use crate::render::{
    Element, render_conversion, render_phrases, render_quiz, render_recognized,
};
use crate::text::framed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Phrases,
    Quiz,
    Conversion,
    Recognized,
    Notice,
}

/// Current render tree of every panel, owned by the UI loop
pub struct UiState {
    pub phrases: Element,
    pub quiz: Element,
    pub conversion: Element,
    pub recognized: Element,
    pub notice: Option<String>,
    /// Last text placed on the clipboard by a copy action
    pub clipboard: Option<String>,
    /// Set once the backend has published its first views
    pub ready: bool,
    example_input: String,
}

impl UiState {
    pub fn new(example_input: impl Into<String>) -> Self {
        Self {
            phrases: render_phrases(&[]),
            quiz: render_quiz(&QuizView::NotStarted),
            conversion: Element::panel("conversion"),
            recognized: render_recognized(&RecognitionSlot::Empty),
            notice: None,
            clipboard: None,
            ready: false,
            example_input: example_input.into(),
        }
    }

    pub fn show_conversion(&mut self, result: &ConversionResult) {
        self.conversion = render_conversion(result, &self.example_input);
    }

    pub fn panel(&self, panel: Panel) -> String {
        match panel {
            Panel::Phrases => framed("Frases", &self.phrases),
            Panel::Quiz => framed("Prueba", &self.quiz),
            Panel::Conversion => framed("Convertidor", &self.conversion),
            Panel::Recognized => framed("Pronunciación", &self.recognized),
            Panel::Notice => self
                .notice
                .as_deref()
                .map(|n| format!("» {n}\n"))
                .unwrap_or_default(),
        }
    }

    /// Every panel, top to bottom
    pub fn render_all(&self) -> String {
        [
            Panel::Phrases,
            Panel::Quiz,
            Panel::Conversion,
            Panel::Recognized,
        ]
        .into_iter()
        .map(|p| self.panel(p))
        .collect()
    }
}
