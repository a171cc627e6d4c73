use std::time::{Duration, Instant};

use crate::{SpeechError, SpeechSynthesizer};

/// Synthesizer for hosts without audio output: logs the utterance and stays busy for as long
/// as it would take to say it.
pub struct LogSynthesizer {
    words_per_minute: u32,
    busy_until: Option<Instant>,
}

impl LogSynthesizer {
    pub fn new(words_per_minute: u32) -> Self {
        Self {
            words_per_minute: words_per_minute.max(1),
            busy_until: None,
        }
    }

    /// Estimated speaking time for `text`
    pub fn duration_of(&self, text: &str) -> Duration {
        let words = text.split_whitespace().count().max(1) as u64;
        Duration::from_millis(words * 60_000 / self.words_per_minute as u64)
    }
}

impl SpeechSynthesizer for LogSynthesizer {
    fn is_speaking(&self) -> bool {
        self.busy_until
            .is_some_and(|until| Instant::now() < until)
    }

    fn speak(&mut self, text: &str, locale: &str) -> Result<(), SpeechError> {
        let duration = self.duration_of(text);
        tracing::info!(locale, ?duration, "🔊 {}", text);
        self.busy_until = Some(Instant::now() + duration);
        Ok(())
    }
}
