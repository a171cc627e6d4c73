use serde::{Deserialize, Serialize};

fn default_locale() -> String {
    "en-US".to_string()
}

fn default_max_alternatives() -> u32 {
    1
}

fn default_words_per_minute() -> u32 {
    150
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct SpeechConfig {
    /// Locale used for both synthesis and recognition
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default)]
    pub interim_results: bool,
    #[serde(default = "default_max_alternatives")]
    pub max_alternatives: u32,
    /// Speaking rate used to estimate how long an utterance keeps the synthesizer busy
    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: u32,
    #[serde(default)]
    pub recognition_enabled: bool,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            interim_results: false,
            max_alternatives: default_max_alternatives(),
            words_per_minute: default_words_per_minute(),
            recognition_enabled: false,
        }
    }
}
