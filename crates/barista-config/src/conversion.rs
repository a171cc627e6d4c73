use serde::{Deserialize, Serialize};

/// What the rewritten buffer is compared against to decide whether any rule fired
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Baseline {
    /// Lowercased input with punctuation kept
    #[default]
    Lowercased,
    /// Input after the full normalization pass
    Normalized,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct ConversionConfig {
    pub baseline: Baseline,
}
