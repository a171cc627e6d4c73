use barista_types::PhraseEntry;

use crate::error::ConfigError;

/// Read-only ordered phrasebook
#[derive(Debug, Clone, Default)]
pub struct PhraseCatalog {
    entries: Vec<PhraseEntry>,
}

impl PhraseCatalog {
    pub fn new(entries: Vec<PhraseEntry>) -> Result<Self, ConfigError> {
        if let Some(pos) = entries
            .iter()
            .position(|e| e.source.trim().is_empty() || e.target.trim().is_empty())
        {
            return Err(ConfigError::EmptyPhrase(pos));
        }

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[PhraseEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&PhraseEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_order() {
        let catalog = PhraseCatalog::new(vec![
            PhraseEntry::new("Hola", "Hello"),
            PhraseEntry::new("¿Algo más?", "Anything else?"),
        ])
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get(1).unwrap().target, "Anything else?");
    }

    #[test]
    fn empty_catalog_is_allowed() {
        assert!(PhraseCatalog::new(Vec::new()).unwrap().is_empty());
    }

    #[test]
    fn rejects_blank_side() {
        let err = PhraseCatalog::new(vec![
            PhraseEntry::new("Hola", "Hello"),
            PhraseEntry::new("Gracias", "  "),
        ])
        .unwrap_err();

        assert_eq!(err, ConfigError::EmptyPhrase(1));
    }
}
