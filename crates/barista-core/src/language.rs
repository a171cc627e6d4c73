use barista_types::PhraseEntry;

use crate::error::ConfigError;
use crate::quiz::QuizItem;

/// Static learning material for one source → target language pair
pub trait LanguagePack: Send + Sync {
    /// Language being learned (ISO 639-1)
    fn target_language(&self) -> &str;

    /// Learner's own language (ISO 639-1)
    fn source_language(&self) -> &str;

    /// Phrasebook entries, in display order
    fn phrases(&self) -> Vec<PhraseEntry>;

    /// Quiz questions, validated
    fn quiz_items(&self) -> Result<Vec<QuizItem>, ConfigError>;
}
