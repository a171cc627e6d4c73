use barista_config::Baseline;
use barista_translator::{Converter, LanguageCode, RuleEngine, RuleError};
use barista_types::ConversionResult;

/// Ordered café-order rewrites. Input is already lowercased with `¿?¡!` removed.
const RULES: &[(&str, &str)] = &[
    ("^me da ", "can i have "),
    ("^me das ", "can i have "),
    ("un café con leche", "a coffee with milk"),
    ("para aqu[ií]", "for here"),
    ("para llevar", "to go"),
    ("con azúcar", "with sugar"),
    ("sin azúcar", "without sugar"),
];

/// Known-good input offered when nothing matched
pub const EXAMPLE_INPUT: &str = "¿Me da un café con leche?";

#[derive(Debug, Clone)]
pub struct SpanishConverter {
    engine: RuleEngine,
}

impl SpanishConverter {
    pub fn new(baseline: Baseline) -> Result<Self, RuleError> {
        let engine = RuleEngine::from_table(RULES)?.with_baseline(baseline);
        tracing::debug!(rules = engine.rules().len(), "spanish converter ready");
        Ok(Self { engine })
    }
}

impl Converter for SpanishConverter {
    fn convert(&self, text: &str) -> ConversionResult {
        self.engine.convert(text)
    }

    fn language_pair(&self) -> (LanguageCode, LanguageCode) {
        ("es".to_string(), "en".to_string())
    }
}
