use std::collections::VecDeque;

use barista_types::RecognitionEvent;

use crate::{RecognitionOptions, RecognitionSink, SpeechError, SpeechRecognizer};

/// Recognizer that replays canned results, one per start/stop cycle.
///
/// Used where no microphone is available and in tests. When the script runs out every
/// further attempt reports the `no-speech` error.
pub struct ScriptedRecognizer {
    script: VecDeque<RecognitionEvent>,
    sink: Option<RecognitionSink>,
}

impl ScriptedRecognizer {
    pub fn new(script: Vec<RecognitionEvent>) -> Self {
        Self {
            script: script.into(),
            sink: None,
        }
    }
}

impl SpeechRecognizer for ScriptedRecognizer {
    fn start(
        &mut self,
        options: &RecognitionOptions,
        sink: RecognitionSink,
    ) -> Result<(), SpeechError> {
        tracing::debug!(locale = %options.locale, "scripted recognition listening");
        self.sink = Some(sink);
        Ok(())
    }

    fn stop(&mut self) -> Result<(), SpeechError> {
        let sink = self.sink.take().ok_or(SpeechError::NotListening)?;
        let event = self
            .script
            .pop_front()
            .unwrap_or_else(|| RecognitionEvent::Error("no-speech".to_string()));

        sink(event);
        Ok(())
    }
}
