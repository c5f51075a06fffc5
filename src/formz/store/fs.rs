use std::fs;
use std::path::{Path, PathBuf};

use super::DocumentStore;
use crate::error::{FormzError, Result};
use crate::model::Document;

/// File-backed document store: the whole working state as one pretty-printed
/// JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStore for FileStore {
    fn load(&self) -> Result<Document> {
        if !self.path.exists() {
            return Ok(Document::default());
        }
        let content = fs::read_to_string(&self.path).map_err(FormzError::Io)?;
        let document = serde_json::from_str(&content).map_err(FormzError::Serialization)?;
        Ok(document)
    }

    fn save(&mut self, document: &Document) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(FormzError::Io)?;
            }
        }
        let content = serde_json::to_string_pretty(document).map_err(FormzError::Serialization)?;
        fs::write(&self.path, content).map_err(FormzError::Io)?;
        Ok(())
    }
}
