use serde::{Deserialize, Serialize};

fn default_welcome_message() -> String {
    "Welcome to Coffee English.".to_string()
}

fn default_welcome_delay_ms() -> u64 {
    800
}

fn default_show_hints() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct UiConfig {
    /// Spoken once after startup; empty disables it
    #[serde(default = "default_welcome_message")]
    pub welcome_message: String,
    #[serde(default = "default_welcome_delay_ms")]
    pub welcome_delay_ms: u64,
    /// Print the command list on startup
    #[serde(default = "default_show_hints")]
    pub show_hints: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            welcome_message: default_welcome_message(),
            welcome_delay_ms: default_welcome_delay_ms(),
            show_hints: default_show_hints(),
        }
    }
}
