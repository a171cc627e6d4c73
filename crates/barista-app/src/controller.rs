use std::sync::Arc;
use std::time::Duration;

use barista_config::Config;
use barista_core::LanguagePack;
use barista_speech::{
    LogSynthesizer, RecognitionCapability, RecognitionOptions, ScriptedRecognizer, SpeechAdapter,
    UpdateSink,
};
use barista_translator::Converter;
use barista_types::{AppEvent, RecognitionEvent, RecognitionUpdate, UiEvent};
use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::events::{EventContext, event_loop};
use crate::scheduler::Scheduler;
use crate::state::AppState;

/// Centralized channel management
pub struct ChannelSet {
    pub app_to_ui: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
    pub ui_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            app_to_ui: kanal::bounded_async(64),
            ui_to_app: kanal::bounded_async(64), // commands, timers, recognition callbacks
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Sink that forwards recognition callbacks into the event loop
pub fn recognition_sink(event_tx: AsyncSender<AppEvent>) -> UpdateSink {
    Arc::new(move |update: RecognitionUpdate| {
        let tx = event_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tx.send(AppEvent::Recognition(update)).await {
                tracing::error!("Failed to forward recognition result: {}", e);
            }
        });
    })
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    config: Config,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(config: Config) -> Self {
        Self {
            channels: ChannelSet::new(),
            config,
            cancel_token: CancellationToken::new(),
        }
    }

    /// Speech adapter for a terminal host: utterances go to the log, and recognition is
    /// either absent or replays the phrasebook so the flow can be practised.
    pub fn speech_adapter(&self, pack: &dyn LanguagePack) -> SpeechAdapter {
        let speech = &self.config.speech;

        let recognition = if speech.recognition_enabled {
            let script = pack
                .phrases()
                .into_iter()
                .map(|p| RecognitionEvent::Result(p.target))
                .collect();
            RecognitionCapability::Supported(Box::new(ScriptedRecognizer::new(script)))
        } else {
            RecognitionCapability::Unsupported
        };

        SpeechAdapter::new(
            Box::new(LogSynthesizer::new(speech.words_per_minute)),
            recognition,
            RecognitionOptions::from(speech),
            recognition_sink(self.channels.ui_to_app.0.clone()),
        )
    }

    pub fn build_state(
        &self,
        pack: &dyn LanguagePack,
        converter: Box<dyn Converter>,
    ) -> anyhow::Result<AppState> {
        let speech = self.speech_adapter(pack);
        Ok(AppState::new(self.config.clone(), pack, converter, speech)?)
    }

    pub fn spawn_tasks(
        &self,
        state: AppState,
        example_input: String,
    ) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        let scheduler = Scheduler::new(
            self.channels.ui_to_app.0.clone(),
            self.cancel_token.child_token(),
        );

        // Welcome line, spoken once the surface is up
        let welcome = self.config.ui.welcome_message.clone();
        if !welcome.is_empty() {
            scheduler.schedule(
                Duration::from_millis(self.config.ui.welcome_delay_ms),
                AppEvent::UiEvent(UiEvent::Speak(welcome)),
            );
        }

        // Event loop
        tasks.spawn(event_loop(
            state,
            self.channels.ui_to_app.1.clone(),
            EventContext {
                app_to_ui_tx: self.channels.app_to_ui.0.clone(),
                scheduler,
            },
        ));

        // UI loop
        tasks.spawn(barista_ui::ui_loop(
            self.channels.app_to_ui.1.clone(),
            self.channels.ui_to_app.0.clone(),
            self.config.ui.clone(),
            example_input,
        ));

        tasks
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
