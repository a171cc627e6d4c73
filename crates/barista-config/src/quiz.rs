use serde::{Deserialize, Serialize};

fn default_advance_delay_ms() -> u64 {
    900
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct QuizConfig {
    /// How long an evaluated answer stays visible before the next question
    #[serde(default = "default_advance_delay_ms")]
    pub advance_delay_ms: u64,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            advance_delay_ms: default_advance_delay_ms(),
        }
    }
}
