//! The exchanged form-description format.
//!
//! A snapshot is the persisted/exported shape of a document: settings,
//! fields, a literal schema version, and an export timestamp. Loading
//! tolerates missing `version`/`exportedAt` and performs no structural
//! validation of the fields; the producer is responsible for well-formed
//! input.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Document, Field, FormSettings};

/// Schema generation written into every export. Consumers seeing another
/// version should warn or reject; there is no migration path yet.
pub const SCHEMA_VERSION: &str = "1.0.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSnapshot {
    #[serde(default)]
    pub form_settings: FormSettings,
    #[serde(default)]
    pub form_fields: Vec<Field>,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exported_at: Option<DateTime<Utc>>,
}

fn default_version() -> String {
    SCHEMA_VERSION.to_string()
}

impl FormSnapshot {
    /// Point-in-time read of a document, stamped with the current schema
    /// version and timestamp.
    pub fn capture(document: &Document) -> Self {
        Self {
            form_settings: document.settings.clone(),
            form_fields: document.fields.clone(),
            version: SCHEMA_VERSION.to_string(),
            exported_at: Some(Utc::now()),
        }
    }

    pub fn version_supported(&self) -> bool {
        self.version == SCHEMA_VERSION
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
