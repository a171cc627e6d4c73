//! Render tree for every panel of the display surface.
//!
//! Interactive elements carry a typed [`Action`]; front-ends dispatch on the action value
//! instead of attaching per-element callbacks.

use barista_types::{
    ConversionResult, OptionMark, PhraseEntry, QuestionView, QuizView, RecognitionSlot, UiEvent,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Panel,
    Card,
    Heading,
    Text,
    Strong,
    Small,
    Button,
    Choice,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Speak(String),
    SelectOption(usize),
    Copy(String),
}

impl Action {
    pub fn into_event(self) -> UiEvent {
        match self {
            Action::Speak(text) => UiEvent::Speak(text),
            Action::SelectOption(index) => UiEvent::SelectOption(index),
            Action::Copy(text) => UiEvent::Copy(text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub kind: Kind,
    pub classes: Vec<&'static str>,
    pub text: String,
    pub action: Option<Action>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(kind: Kind, text: impl Into<String>) -> Self {
        Self {
            kind,
            classes: Vec::new(),
            text: text.into(),
            action: None,
            children: Vec::new(),
        }
    }

    pub fn panel(class: &'static str) -> Self {
        Self::new(Kind::Panel, "").class(class)
    }

    pub fn class(mut self, class: &'static str) -> Self {
        self.classes.push(class);
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.action = Some(action);
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    /// Depth-first iterator over this element and all descendants
    pub fn walk(&self) -> impl Iterator<Item = &Element> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(next.children.iter().rev());
            Some(next)
        })
    }

    /// Actions in document order
    pub fn actions(&self) -> impl Iterator<Item = &Action> {
        self.walk().filter_map(|e| e.action.as_ref())
    }
}

pub const PLAY_LABEL: &str = "🔊 Escuchar";
pub const COPY_LABEL: &str = "Copiar";

pub fn render_phrases(phrases: &[PhraseEntry]) -> Element {
    phrases
        .iter()
        .fold(Element::panel("phrase-list"), |list, phrase| {
            list.child(
                Element::new(Kind::Card, "")
                    .class("phrase-card")
                    .child(Element::new(Kind::Text, &phrase.source))
                    .child(Element::new(Kind::Strong, &phrase.target))
                    .child(
                        Element::new(Kind::Button, PLAY_LABEL)
                            .class("play")
                            .action(Action::Speak(phrase.target.clone())),
                    ),
            )
        })
}

pub fn render_quiz(view: &QuizView) -> Element {
    match view {
        QuizView::NotStarted => Element::panel("quiz"),
        QuizView::Question(question) => render_question(question),
        QuizView::Summary { score, total } => Element::panel("quiz")
            .child(Element::new(Kind::Strong, "Prueba terminada ✔️"))
            .child(
                Element::new(Kind::Small, format!("Puntaje: {score} / {total}")).class("small"),
            ),
    }
}

fn render_question(question: &QuestionView) -> Element {
    let options = question
        .options
        .iter()
        .fold(Element::panel("options"), |list, option| {
            let choice = Element::new(Kind::Choice, &option.text)
                .class("option")
                .action(Action::SelectOption(option.index));
            let choice = match option.mark {
                OptionMark::Unmarked => choice,
                OptionMark::Correct => choice.class("correct"),
                OptionMark::Wrong => choice.class("wrong"),
            };
            list.child(choice)
        });

    Element::panel("quiz")
        .child(
            Element::new(
                Kind::Small,
                format!("Pregunta {} / {}", question.number, question.total),
            )
            .class("small"),
        )
        .child(Element::new(Kind::Heading, &question.prompt).class("quiz-question"))
        .child(options)
}

/// `example` is offered to the user when nothing could be converted
pub fn render_conversion(result: &ConversionResult, example: &str) -> Element {
    match result {
        ConversionResult::Translated { text } => Element::panel("conversion").child(
            Element::new(Kind::Card, "")
                .class("suggestion")
                .child(Element::new(Kind::Strong, "Inglés sugerido:"))
                .child(Element::new(Kind::Text, text).class("suggested-text"))
                .child(
                    Element::new(Kind::Button, PLAY_LABEL)
                        .class("play")
                        .action(Action::Speak(text.clone())),
                )
                .child(
                    Element::new(Kind::Button, COPY_LABEL)
                        .class("copy")
                        .action(Action::Copy(text.clone())),
                ),
        ),
        ConversionResult::LowConfidence => Element::panel("conversion").child(
            Element::new(
                Kind::Small,
                format!("No estoy segura. Prueba escribir: \"{example}\""),
            )
            .class("small"),
        ),
    }
}

pub fn render_recognized(slot: &RecognitionSlot) -> Element {
    let text = match slot {
        RecognitionSlot::Empty => String::new(),
        RecognitionSlot::Listening => "Escuchando...".to_string(),
        RecognitionSlot::Stopped => "Detenido".to_string(),
        RecognitionSlot::Transcript(text) => text.clone(),
        RecognitionSlot::Error(code) => format!("Error: {code}"),
    };

    Element::panel("recognized").child(Element::new(Kind::Text, text))
}

pub fn score_notice(score: u32, total: usize) -> String {
    format!("Puntaje actual: {score} / {total}")
}

pub const RECOGNITION_UNAVAILABLE: &str = "Reconocimiento no disponible en este dispositivo.";

#[cfg(test)]
mod tests {
    use barista_types::OptionView;

    use super::*;

    fn question(marks: [OptionMark; 3]) -> QuizView {
        QuizView::Question(QuestionView {
            number: 1,
            total: 4,
            prompt: "¿Algo más?".to_string(),
            options: marks
                .iter()
                .enumerate()
                .map(|(index, mark)| OptionView {
                    index,
                    text: format!("option {index}"),
                    mark: *mark,
                })
                .collect(),
            answered: marks.iter().any(|m| *m != OptionMark::Unmarked),
        })
    }

    #[test]
    fn one_card_per_phrase_with_speak_action() {
        let phrases = vec![
            PhraseEntry::new("¿Con leche?", "With milk?"),
            PhraseEntry::new("¿Con azúcar?", "With sugar?"),
        ];
        let tree = render_phrases(&phrases);

        assert_eq!(tree.children.len(), 2);
        let actions: Vec<_> = tree.actions().cloned().collect();
        assert_eq!(
            actions,
            vec![
                Action::Speak("With milk?".to_string()),
                Action::Speak("With sugar?".to_string()),
            ]
        );
    }

    #[test]
    fn rerender_replaces_output() {
        let phrases = vec![PhraseEntry::new("Hola", "Hello")];
        assert_eq!(render_phrases(&phrases), render_phrases(&phrases));
        assert!(render_phrases(&[]).children.is_empty());
    }

    #[test]
    fn options_carry_their_index() {
        let tree = render_quiz(&question([OptionMark::Unmarked; 3]));
        let actions: Vec<_> = tree.actions().cloned().collect();
        assert_eq!(
            actions,
            vec![
                Action::SelectOption(0),
                Action::SelectOption(1),
                Action::SelectOption(2),
            ]
        );
        assert!(tree.walk().all(|e| !e.has_class("correct") && !e.has_class("wrong")));
    }

    #[test]
    fn wrong_answer_shows_both_marks() {
        let tree = render_quiz(&question([
            OptionMark::Wrong,
            OptionMark::Unmarked,
            OptionMark::Correct,
        ]));
        let choices: Vec<_> = tree.walk().filter(|e| e.kind == Kind::Choice).collect();

        assert!(choices[0].has_class("wrong"));
        assert!(!choices[1].has_class("wrong") && !choices[1].has_class("correct"));
        assert!(choices[2].has_class("correct"));
    }

    #[test]
    fn summary_shows_score_and_total() {
        let tree = render_quiz(&QuizView::Summary { score: 3, total: 4 });
        assert!(tree.walk().any(|e| e.text == "Puntaje: 3 / 4"));
        assert_eq!(tree.actions().count(), 0);
    }

    #[test]
    fn conversion_panels() {
        let ok = render_conversion(
            &ConversionResult::Translated {
                text: "With sugar".to_string(),
            },
            "¿Me da un café con leche?",
        );
        let actions: Vec<_> = ok.actions().cloned().collect();
        assert_eq!(
            actions,
            vec![
                Action::Speak("With sugar".to_string()),
                Action::Copy("With sugar".to_string()),
            ]
        );

        let low = render_conversion(
            &ConversionResult::LowConfidence,
            "¿Me da un café con leche?",
        );
        let hint = "No estoy segura. Prueba escribir: \"¿Me da un café con leche?\"";
        assert!(low.walk().any(|e| e.text == hint));
    }

    #[test]
    fn recognition_error_is_shown_verbatim() {
        let tree = render_recognized(&RecognitionSlot::Error("not-allowed".to_string()));
        assert!(tree.walk().any(|e| e.text == "Error: not-allowed"));
    }
}
