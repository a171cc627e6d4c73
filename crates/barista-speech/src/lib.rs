use std::sync::Arc;

use barista_config::speech::SpeechConfig;
use barista_types::{RecognitionEvent, RecognitionUpdate};

mod adapter;
mod log_synth;
mod scripted;

pub use adapter::{RecognitionStart, RecognitionState, SpeakOutcome, SpeechAdapter};
pub use log_synth::LogSynthesizer;
pub use scripted::ScriptedRecognizer;

/// Platform text-to-speech
pub trait SpeechSynthesizer: Send {
    /// True while an utterance is being rendered
    fn is_speaking(&self) -> bool;

    fn speak(&mut self, text: &str, locale: &str) -> Result<(), SpeechError>;
}

/// Receives the single result or error of a recognition attempt
pub type RecognitionSink = Arc<dyn Fn(RecognitionEvent) + Send + Sync>;

/// Receives recognizer callbacks tagged with their attempt number
pub type UpdateSink = Arc<dyn Fn(RecognitionUpdate) + Send + Sync>;

/// Platform speech-to-text
pub trait SpeechRecognizer: Send {
    fn start(
        &mut self,
        options: &RecognitionOptions,
        sink: RecognitionSink,
    ) -> Result<(), SpeechError>;

    fn stop(&mut self) -> Result<(), SpeechError>;
}

/// Whether the host offers speech recognition at all
pub enum RecognitionCapability {
    Supported(Box<dyn SpeechRecognizer>),
    Unsupported,
}

impl RecognitionCapability {
    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Supported(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecognitionOptions {
    pub locale: String,
    pub interim_results: bool,
    pub max_alternatives: u32,
}

impl From<&SpeechConfig> for RecognitionOptions {
    fn from(config: &SpeechConfig) -> Self {
        Self {
            locale: config.locale.clone(),
            interim_results: config.interim_results,
            max_alternatives: config.max_alternatives,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SpeechError {
    #[error("Speech platform error: {0}")]
    Platform(String),

    #[error("No recognition session is active")]
    NotListening,
}
