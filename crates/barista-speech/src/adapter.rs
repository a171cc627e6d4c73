use std::sync::Arc;

use barista_types::{RecognitionEvent, RecognitionSlot, RecognitionUpdate};

use crate::{
    RecognitionCapability, RecognitionOptions, RecognitionSink, SpeechError, SpeechSynthesizer,
    UpdateSink,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeakOutcome {
    Started,
    /// Synthesizer was busy; the request was dropped
    Dropped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionStart {
    Started,
    AlreadyListening,
    Unavailable,
}

/// Recognition session bookkeeping and the "last recognized text" slot
#[derive(Debug, Clone, Default)]
pub struct RecognitionState {
    pub listening: bool,
    /// A result or error is still owed for the latest attempt
    pub awaiting_result: bool,
    /// Number of the latest attempt; callbacks for any other attempt are stale
    pub attempts: u64,
    pub slot: RecognitionSlot,
}

/// Façade over the synthesizer and the (optional) recognizer
pub struct SpeechAdapter {
    synthesizer: Box<dyn SpeechSynthesizer>,
    recognition: RecognitionCapability,
    locale: String,
    options: RecognitionOptions,
    sink: UpdateSink,
    state: RecognitionState,
}

impl SpeechAdapter {
    pub fn new(
        synthesizer: Box<dyn SpeechSynthesizer>,
        recognition: RecognitionCapability,
        options: RecognitionOptions,
        sink: UpdateSink,
    ) -> Self {
        Self {
            synthesizer,
            recognition,
            locale: options.locale.clone(),
            options,
            sink,
            state: RecognitionState::default(),
        }
    }

    pub fn recognition_supported(&self) -> bool {
        self.recognition.is_supported()
    }

    pub fn state(&self) -> &RecognitionState {
        &self.state
    }

    pub fn slot(&self) -> &RecognitionSlot {
        &self.state.slot
    }

    /// Fire-and-forget synthesis. Never queues behind or interrupts an utterance in flight.
    pub fn speak(&mut self, text: &str) -> Result<SpeakOutcome, SpeechError> {
        if self.synthesizer.is_speaking() {
            tracing::warn!(text, "speech synthesis busy, request dropped");
            return Ok(SpeakOutcome::Dropped);
        }

        self.synthesizer.speak(text, &self.locale)?;
        Ok(SpeakOutcome::Started)
    }

    pub fn start_recognition(&mut self) -> Result<RecognitionStart, SpeechError> {
        let RecognitionCapability::Supported(recognizer) = &mut self.recognition else {
            tracing::warn!("speech recognition unavailable on this platform");
            return Ok(RecognitionStart::Unavailable);
        };

        if self.state.listening {
            return Ok(RecognitionStart::AlreadyListening);
        }

        let attempt = self.state.attempts + 1;
        let updates = self.sink.clone();
        let sink: RecognitionSink = Arc::new(move |event: RecognitionEvent| {
            updates(RecognitionUpdate { attempt, event })
        });
        recognizer.start(&self.options, sink)?;

        self.state.listening = true;
        self.state.awaiting_result = true;
        self.state.attempts = attempt;
        self.state.slot = RecognitionSlot::Listening;
        tracing::debug!(attempt = self.state.attempts, "recognition started");

        Ok(RecognitionStart::Started)
    }

    /// Returns false when nothing was listening
    pub fn stop_recognition(&mut self) -> Result<bool, SpeechError> {
        let RecognitionCapability::Supported(recognizer) = &mut self.recognition else {
            return Ok(false);
        };

        if !self.state.listening {
            return Ok(false);
        }

        recognizer.stop()?;

        self.state.listening = false;
        self.state.slot = RecognitionSlot::Stopped;
        tracing::debug!(attempt = self.state.attempts, "recognition stopped");

        Ok(true)
    }

    /// Apply a recognizer callback. Returns false when it was ignored.
    pub fn on_update(&mut self, update: RecognitionUpdate) -> bool {
        let slot = match update.event {
            RecognitionEvent::Result(text) => RecognitionSlot::Transcript(text),
            RecognitionEvent::Error(code) => RecognitionSlot::Error(code),
        };
        self.deliver(update.attempt, slot)
    }

    fn deliver(&mut self, attempt: u64, slot: RecognitionSlot) -> bool {
        if attempt != self.state.attempts {
            tracing::debug!(
                attempt,
                current = self.state.attempts,
                "stale recognition callback ignored"
            );
            return false;
        }

        if !self.state.awaiting_result {
            tracing::debug!(?slot, "recognition callback without pending attempt ignored");
            return false;
        }

        // The platform ends the session after its single result
        self.state.awaiting_result = false;
        self.state.listening = false;
        self.state.slot = slot;
        true
    }
}
