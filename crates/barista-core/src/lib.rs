pub mod catalog;
pub mod error;
pub mod language;
pub mod quiz;

pub use catalog::PhraseCatalog;
pub use error::ConfigError;
pub use language::LanguagePack;
pub use quiz::{Evaluation, QuizEngine, QuizItem, QuizPhase, QuizSession};
