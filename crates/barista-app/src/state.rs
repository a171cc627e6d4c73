use barista_config::Config;
use barista_core::{ConfigError, LanguagePack, PhraseCatalog, QuizEngine};
use barista_speech::SpeechAdapter;
use barista_translator::Converter;

/// Everything the event loop mutates. Owned by that single task, so no locks.
pub struct AppState {
    pub config: Config,
    pub catalog: PhraseCatalog,
    pub quiz: QuizEngine,
    pub converter: Box<dyn Converter>,
    pub speech: SpeechAdapter,
}

impl AppState {
    /// Validates the language pack's tables; an unusable quiz is rejected here.
    pub fn new(
        config: Config,
        pack: &dyn LanguagePack,
        converter: Box<dyn Converter>,
        speech: SpeechAdapter,
    ) -> Result<Self, ConfigError> {
        let catalog = PhraseCatalog::new(pack.phrases())?;
        let quiz = QuizEngine::new(pack.quiz_items()?)?;

        tracing::info!(
            source = pack.source_language(),
            target = pack.target_language(),
            phrases = catalog.len(),
            questions = quiz.total(),
            "language pack loaded"
        );

        Ok(Self {
            config,
            catalog,
            quiz,
            converter,
            speech,
        })
    }
}
