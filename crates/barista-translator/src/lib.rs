mod normalize;
mod rules;

pub use normalize::{capitalize, normalize};
pub use rules::{ConversionRule, RuleEngine};

use barista_types::ConversionResult;

pub type LanguageCode = String;

/// Phrase conversion provider interface
pub trait Converter: Send + Sync {
    /// Rewrite `text` into the target language, or report low confidence
    fn convert(&self, text: &str) -> ConversionResult;

    /// (source, target) pair this converter handles
    fn language_pair(&self) -> (LanguageCode, LanguageCode);
}

#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Rule {0} has an empty pattern")]
    EmptyPattern(usize),

    #[error("Rule list is empty")]
    EmptyRuleList,
}
