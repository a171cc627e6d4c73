#[derive(Debug, Clone)]
pub enum AppEvent {
    UiEvent(UiEvent),
    /// Deferred quiz advance, posted back by the delay timer
    AdvanceQuiz(AdvanceTicket),
    Recognition(RecognitionUpdate),
    ShowPhrases(Vec<PhraseEntry>),
    ShowQuiz(QuizView),
    ShowConversion(ConversionResult),
    ShowRecognized(RecognitionSlot),
    /// Transient one-line message for the user
    Notice(String),
    BackendReady,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    StartQuiz,
    ShowScore,
    SelectOption(usize),
    ConvertText(String),
    StartRecognition,
    StopRecognition,
    Speak(String),
    Copy(String),
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhraseEntry {
    /// Phrase in the learner's language
    pub source: String,
    /// Phrase in the language being learned
    pub target: String,
}

impl PhraseEntry {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Identifies one pending "advance to next question" for one quiz run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceTicket {
    pub generation: u64,
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizView {
    NotStarted,
    Question(QuestionView),
    Summary { score: u32, total: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionView {
    /// 1-based position shown to the user
    pub number: usize,
    pub total: usize,
    pub prompt: String,
    pub options: Vec<OptionView>,
    pub answered: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionView {
    pub index: usize,
    pub text: String,
    pub mark: OptionMark,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OptionMark {
    #[default]
    Unmarked,
    Correct,
    Wrong,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionResult {
    Translated { text: String },
    LowConfidence,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    Result(String),
    Error(String),
}

/// A recognition callback tagged with the attempt that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionUpdate {
    pub attempt: u64,
    pub event: RecognitionEvent,
}

/// The single "last recognized text" display slot
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RecognitionSlot {
    #[default]
    Empty,
    Listening,
    Stopped,
    Transcript(String),
    Error(String),
}
