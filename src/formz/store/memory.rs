use super::DocumentStore;
use crate::error::Result;
use crate::model::Document;

/// In-memory store for tests. No persistence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    document: Document,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: Document) -> Self {
        Self { document }
    }
}

impl DocumentStore for InMemoryStore {
    fn load(&self) -> Result<Document> {
        Ok(self.document.clone())
    }

    fn save(&mut self, document: &Document) -> Result<()> {
        self.document = document.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SettingsPatch;
    use crate::transition::Transition;

    #[test]
    fn starts_with_the_default_document() {
        let store = InMemoryStore::new();
        assert_eq!(store.load().unwrap(), Document::default());
    }

    #[test]
    fn save_replaces_the_held_document() {
        let mut store = InMemoryStore::new();
        let doc = Document::default().apply(Transition::UpdateSettings {
            patch: SettingsPatch {
                title: Some("Saved".to_string()),
                ..SettingsPatch::default()
            },
        });
        store.save(&doc).unwrap();
        assert_eq!(store.load().unwrap().settings.title, "Saved");
    }
}
