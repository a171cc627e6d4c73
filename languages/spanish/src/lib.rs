pub mod phrases;
pub mod quiz;
pub mod translator;

use barista_core::{ConfigError, LanguagePack, QuizItem};
use barista_types::PhraseEntry;

pub use translator::SpanishConverter;

/// Café-service Spanish → English learning material
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanishPack;

impl SpanishPack {
    pub fn new() -> Self {
        Self
    }
}

impl LanguagePack for SpanishPack {
    fn target_language(&self) -> &str {
        "en"
    }

    fn source_language(&self) -> &str {
        "es"
    }

    fn phrases(&self) -> Vec<PhraseEntry> {
        phrases::PHRASES
            .iter()
            .map(|(es, en)| PhraseEntry::new(*es, *en))
            .collect()
    }

    fn quiz_items(&self) -> Result<Vec<QuizItem>, ConfigError> {
        quiz::QUIZ
            .iter()
            .map(|q| {
                QuizItem::new(
                    q.prompt,
                    q.options.iter().map(|o| o.to_string()).collect(),
                    q.answer,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use barista_core::{PhraseCatalog, QuizEngine};

    use super::*;

    #[test]
    fn shipped_tables_are_valid() {
        let pack = SpanishPack::new();

        let catalog = PhraseCatalog::new(pack.phrases()).unwrap();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.get(3).unwrap().target, "For here or to go?");

        let engine = QuizEngine::new(pack.quiz_items().unwrap()).unwrap();
        assert_eq!(engine.total(), 4);
    }
}
