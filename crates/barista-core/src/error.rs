/// Invalid static data, rejected before anything is rendered
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Quiz has no items")]
    EmptyQuiz,

    #[error("Quiz item '{prompt}' has {count} option(s), at least 2 required")]
    TooFewOptions { prompt: String, count: usize },

    #[error("Quiz item '{prompt}': correct index {index} out of range for {count} options")]
    CorrectIndexOutOfRange {
        prompt: String,
        index: usize,
        count: usize,
    },

    #[error("Phrase {0} has an empty side")]
    EmptyPhrase(usize),
}
