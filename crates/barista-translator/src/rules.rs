use barista_config::Baseline;
use barista_types::ConversionResult;
use regex::Regex;

use crate::RuleError;
use crate::normalize::{capitalize, lowercase, normalize};

/// A single global pattern substitution
#[derive(Debug, Clone)]
pub struct ConversionRule {
    pattern: Regex,
    replacement: String,
}

impl ConversionRule {
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self, RuleError> {
        let pattern = Regex::new(pattern).map_err(|source| RuleError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            pattern,
            replacement: replacement.into(),
        })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// Replace every non-overlapping match in `text`
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, self.replacement.as_str())
            .into_owned()
    }
}

/// Ordered rewrite rules; each rule sees the output of the one before it
#[derive(Debug, Clone)]
pub struct RuleEngine {
    rules: Vec<ConversionRule>,
    baseline: Baseline,
}

impl RuleEngine {
    pub fn new(rules: Vec<ConversionRule>) -> Result<Self, RuleError> {
        if rules.is_empty() {
            return Err(RuleError::EmptyRuleList);
        }

        if let Some(pos) = rules.iter().position(|r| r.pattern().is_empty()) {
            return Err(RuleError::EmptyPattern(pos));
        }

        Ok(Self {
            rules,
            baseline: Baseline::default(),
        })
    }

    /// Build from `(pattern, replacement)` pairs
    pub fn from_table(table: &[(&str, &str)]) -> Result<Self, RuleError> {
        let rules = table
            .iter()
            .map(|(pattern, replacement)| ConversionRule::new(pattern, *replacement))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(rules)
    }

    pub fn with_baseline(mut self, baseline: Baseline) -> Self {
        self.baseline = baseline;
        self
    }

    pub fn rules(&self) -> &[ConversionRule] {
        &self.rules
    }

    pub fn convert(&self, input: &str) -> ConversionResult {
        let normalized = normalize(input);

        let rewritten = self
            .rules
            .iter()
            .fold(normalized.clone(), |buffer, rule| rule.apply(&buffer));

        let baseline = match self.baseline {
            Baseline::Lowercased => lowercase(input),
            Baseline::Normalized => normalized,
        };

        if rewritten.is_empty() || rewritten == baseline {
            tracing::debug!(input, "no conversion rule matched");
            return ConversionResult::LowConfidence;
        }

        let text = capitalize(&rewritten);
        tracing::debug!(input, output = %text, "converted");
        ConversionResult::Translated { text }
    }
}
