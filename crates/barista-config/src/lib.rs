use std::env;

use serde::{Deserialize, Serialize};

use self::conversion::ConversionConfig;
use self::quiz::QuizConfig;
use self::speech::SpeechConfig;
use self::ui::UiConfig;

pub mod conversion;
pub mod quiz;
pub mod speech;
pub mod ui;

pub use conversion::Baseline;

fn default_log_filter() -> String {
    "info".to_string()
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config {
    pub speech: SpeechConfig,
    pub quiz: QuizConfig,
    pub conversion: ConversionConfig,
    pub ui: UiConfig,

    /// Fallback tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            speech: SpeechConfig::default(),
            quiz: QuizConfig::default(),
            conversion: ConversionConfig::default(),
            ui: UiConfig::default(),
            log_filter: default_log_filter(),
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_env();
        config
    }

    pub fn apply_env(&mut self) {
        if let Ok(locale) = env::var("BARISTA_LOCALE")
            && !locale.trim().is_empty()
        {
            self.speech.locale = locale.trim().to_string();
        }

        if let Some(delay) = env::var("BARISTA_ADVANCE_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.quiz.advance_delay_ms = delay;
        }

        if let Some(delay) = env::var("BARISTA_WELCOME_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
        {
            self.ui.welcome_delay_ms = delay;
        }

        if let Ok(filter) = env::var("BARISTA_LOG") {
            self.log_filter = filter;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_behavior() {
        let config = Config::default();
        assert_eq!(config.speech.locale, "en-US");
        assert!(!config.speech.interim_results);
        assert_eq!(config.speech.max_alternatives, 1);
        assert_eq!(config.quiz.advance_delay_ms, 900);
        assert_eq!(config.ui.welcome_delay_ms, 800);
        assert_eq!(config.conversion.baseline, Baseline::Lowercased);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let json = r#"{
            "quiz": { "advance_delay_ms": 10 },
            "conversion": { "baseline": "normalized" }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.quiz.advance_delay_ms, 10);
        assert_eq!(config.conversion.baseline, Baseline::Normalized);
        assert_eq!(config.speech.locale, "en-US");
        assert_eq!(config.log_filter, "info");
    }
}
