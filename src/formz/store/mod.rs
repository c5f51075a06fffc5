//! Working-state persistence for the CLI client.
//!
//! The core never touches a filesystem; between invocations the current
//! [`Document`] lives behind the [`DocumentStore`] trait. `FileStore` keeps
//! it in a single JSON file, `InMemoryStore` backs tests.

use crate::error::Result;
use crate::model::Document;

pub mod fs;
pub mod memory;

/// Abstract interface for keeping the working document between edits.
pub trait DocumentStore {
    /// Load the current document. A store with no saved document yet yields
    /// the default empty form.
    fn load(&self) -> Result<Document>;

    /// Persist the document, replacing whatever was saved before.
    fn save(&mut self, document: &Document) -> Result<()>;
}
