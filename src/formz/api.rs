//! Thin facade over the engine for UI clients.
//!
//! The facade loads the working document from a [`DocumentStore`], applies
//! exactly one transition through [`FormEngine`], persists the result, and
//! returns structured data. It normalizes user-facing field references
//! (1-based display positions or raw ids) to field ids, and keeps all
//! business logic out: that lives in the transition and validation modules.
//!
//! No I/O assumptions: nothing here writes to stdout or assumes a terminal.

use std::collections::{BTreeMap, HashMap};

use crate::engine::{FormEngine, SubmissionSink, SubmitOutcome};
use crate::error::{FormzError, Result};
use crate::model::{Document, Field, FieldId, FieldPatch, FormSettings, SettingsPatch};
use crate::registry::FieldType;
use crate::snapshot::FormSnapshot;
use crate::store::DocumentStore;
use crate::templates;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// A field paired with its 1-based display position and selection marker.
#[derive(Debug, Clone)]
pub struct DisplayField {
    pub position: usize,
    pub selected: bool,
    pub field: Field,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_fields: Vec<Field>,
    pub listed_fields: Vec<DisplayField>,
    pub settings: Option<FormSettings>,
    pub validation_errors: BTreeMap<FieldId, String>,
    pub exported: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_fields(mut self, fields: Vec<Field>) -> Self {
        self.affected_fields = fields;
        self
    }

    pub fn with_listed_fields(mut self, fields: Vec<DisplayField>) -> Self {
        self.listed_fields = fields;
        self
    }

    pub fn with_settings(mut self, settings: FormSettings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_exported(mut self, payload: String) -> Self {
        self.exported = Some(payload);
        self
    }
}

/// User input referencing a field: a 1-based display position or a raw id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSelector {
    Position(usize),
    Id(FieldId),
}

impl FieldSelector {
    /// Numeric input reads as a display position, anything else as an id.
    pub fn parse(input: &str) -> Self {
        match input.parse::<usize>() {
            Ok(n) => FieldSelector::Position(n),
            Err(_) => FieldSelector::Id(FieldId::from(input)),
        }
    }
}

impl std::fmt::Display for FieldSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FieldSelector::Position(n) => write!(f, "{}", n),
            FieldSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

fn index_fields(document: &Document) -> Vec<DisplayField> {
    document
        .fields
        .iter()
        .enumerate()
        .map(|(i, field)| DisplayField {
            position: i + 1,
            selected: document.selected_field.as_ref() == Some(&field.id),
            field: field.clone(),
        })
        .collect()
}

fn resolve(document: &Document, selector: &FieldSelector) -> Result<FieldId> {
    let found = match selector {
        FieldSelector::Position(n) => {
            if *n >= 1 {
                document.fields.get(n - 1).map(|f| f.id.clone())
            } else {
                None
            }
        }
        FieldSelector::Id(id) => document.field_by_id(id).map(|f| f.id.clone()),
    };
    found.ok_or_else(|| FormzError::FieldNotFound(selector.to_string()))
}

/// The main API facade. Generic over [`DocumentStore`] so the CLI runs
/// against files and tests run in memory.
pub struct FormzApi<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> FormzApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    fn edit<F>(&mut self, mutate: F) -> Result<Document>
    where
        F: FnOnce(&mut FormEngine),
    {
        let mut engine = FormEngine::from_document(self.store.load()?);
        mutate(&mut engine);
        let document = engine.into_document();
        self.store.save(&document)?;
        Ok(document)
    }

    pub fn add_field(
        &mut self,
        field_type: FieldType,
        overrides: FieldPatch,
    ) -> Result<CmdResult> {
        let document = self.edit(|engine| engine.add_field(field_type, overrides))?;

        let mut result = CmdResult::default();
        if let Some(field) = document.fields.last() {
            result.add_message(CmdMessage::success(format!(
                "Field added ({}): {}",
                document.fields.len(),
                field.label
            )));
            result.affected_fields.push(field.clone());
        }
        Ok(result)
    }

    pub fn list_fields(&self) -> Result<CmdResult> {
        let document = self.store.load()?;
        let mut result = CmdResult::default()
            .with_listed_fields(index_fields(&document))
            .with_settings(document.settings.clone());
        if document.preview_mode {
            result.add_message(CmdMessage::info("Preview mode is on."));
        }
        Ok(result)
    }

    pub fn update_field(
        &mut self,
        selector: &FieldSelector,
        patch: FieldPatch,
    ) -> Result<CmdResult> {
        let document = self.store.load()?;
        let id = resolve(&document, selector)?;
        let document = self.edit(|engine| engine.update_field(id.clone(), patch))?;

        let mut result = CmdResult::default();
        if let Some(field) = document.field_by_id(&id) {
            result.add_message(CmdMessage::success(format!(
                "Field updated ({}): {}",
                selector, field.label
            )));
            result.affected_fields.push(field.clone());
        }
        Ok(result)
    }

    pub fn remove_field(&mut self, selector: &FieldSelector) -> Result<CmdResult> {
        let document = self.store.load()?;
        let id = resolve(&document, selector)?;
        let label = document
            .field_by_id(&id)
            .map(|f| f.label.clone())
            .unwrap_or_default();
        self.edit(|engine| engine.remove_field(id))?;

        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Field removed ({}): {}",
            selector, label
        )));
        Ok(result)
    }

    pub fn duplicate_field(&mut self, selector: &FieldSelector) -> Result<CmdResult> {
        let document = self.store.load()?;
        let id = resolve(&document, selector)?;
        let document = self.edit(|engine| engine.duplicate_field(id))?;

        let mut result = CmdResult::default();
        if let Some(copy) = document.selected_field() {
            result.add_message(CmdMessage::success(format!(
                "Field duplicated: {}",
                copy.label
            )));
            result.affected_fields.push(copy.clone());
        }
        Ok(result)
    }

    /// Moves the field at 1-based position `from` to position `to`. Bounds
    /// are checked here: the model treats invalid indices as undefined and
    /// it is the client's job never to issue them.
    pub fn move_field(&mut self, from: usize, to: usize) -> Result<CmdResult> {
        let document = self.store.load()?;
        let len = document.fields.len();
        if from < 1 || from > len {
            return Err(FormzError::FieldNotFound(from.to_string()));
        }
        if to < 1 || to > len {
            return Err(FormzError::Api(format!(
                "Destination {} is out of range (1-{})",
                to, len
            )));
        }
        let document = self.edit(|engine| engine.reorder_fields(from - 1, to - 1))?;

        let mut result = CmdResult::default();
        if let Some(field) = document.fields.get(to - 1) {
            result.add_message(CmdMessage::success(format!(
                "Field moved to position {}: {}",
                to, field.label
            )));
        }
        Ok(result)
    }

    pub fn select_field(&mut self, selector: Option<&FieldSelector>) -> Result<CmdResult> {
        let document = self.store.load()?;
        let id = match selector {
            Some(sel) => Some(resolve(&document, sel)?),
            None => None,
        };
        let document = self.edit(|engine| engine.select_field(id))?;

        let mut result = CmdResult::default();
        match document.selected_field() {
            Some(field) => result.add_message(CmdMessage::success(format!(
                "Selected: {}",
                field.label
            ))),
            None => result.add_message(CmdMessage::info("Selection cleared.")),
        }
        Ok(result)
    }

    pub fn update_settings(&mut self, patch: SettingsPatch) -> Result<CmdResult> {
        let document = self.edit(|engine| engine.update_settings(patch))?;

        let mut result = CmdResult::default().with_settings(document.settings.clone());
        result.add_message(CmdMessage::success("Settings updated."));
        Ok(result)
    }

    pub fn set_preview(&mut self, preview: bool) -> Result<CmdResult> {
        self.edit(|engine| engine.set_preview_mode(preview))?;

        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(if preview {
            "Preview mode on."
        } else {
            "Preview mode off."
        }));
        Ok(result)
    }

    pub fn clear_form(&mut self) -> Result<CmdResult> {
        self.edit(|engine| engine.clear())?;

        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success("Form cleared."));
        Ok(result)
    }

    pub fn load_template(&mut self, id: &str) -> Result<CmdResult> {
        let template =
            templates::find(id).ok_or_else(|| FormzError::UnknownTemplate(id.to_string()))?;
        let name = template.name;
        let count = template.fields.len();
        self.edit(|engine| engine.load_template(template))?;

        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Template loaded: {} ({} fields)",
            name, count
        )));
        Ok(result)
    }

    pub fn export(&self, pretty: bool) -> Result<CmdResult> {
        let document = self.store.load()?;
        let snapshot = FormSnapshot::capture(&document);
        let payload = if pretty {
            snapshot.to_json_pretty()?
        } else {
            snapshot.to_json()?
        };
        Ok(CmdResult::default().with_exported(payload))
    }

    pub fn import(&mut self, json: &str) -> Result<CmdResult> {
        let snapshot = FormSnapshot::from_json(json)?;
        let mut result = CmdResult::default();
        if !snapshot.version_supported() {
            result.add_message(CmdMessage::warning(format!(
                "Snapshot version {} differs from supported {}; loading anyway.",
                snapshot.version,
                crate::snapshot::SCHEMA_VERSION
            )));
        }
        let count = snapshot.form_fields.len();
        self.edit(|engine| engine.load_snapshot(snapshot))?;

        result.add_message(CmdMessage::success(format!(
            "Form loaded ({} fields).",
            count
        )));
        Ok(result)
    }

    /// Full-form validation without submission.
    pub fn check(&self, values: &HashMap<FieldId, String>) -> Result<CmdResult> {
        let document = self.store.load()?;
        let errors = crate::validate::validate_form(&document.fields, values);

        let mut result = CmdResult::default().with_listed_fields(index_fields(&document));
        if errors.is_empty() {
            result.add_message(CmdMessage::success(format!(
                "All {} fields passed validation.",
                document.fields.len()
            )));
        } else {
            result.add_message(CmdMessage::error(format!(
                "{} field(s) failed validation.",
                errors.len()
            )));
        }
        result.validation_errors = errors;
        Ok(result)
    }

    /// Validates and, when clean, hands the values to the sink.
    pub fn submit(
        &self,
        values: &HashMap<FieldId, String>,
        sink: &mut dyn SubmissionSink,
    ) -> Result<CmdResult> {
        let document = self.store.load()?;
        let engine = FormEngine::from_document(document.clone());

        let mut result = CmdResult::default().with_listed_fields(index_fields(&document));
        match engine.submit(values, sink) {
            SubmitOutcome::Rejected(errors) => {
                result.add_message(CmdMessage::error(format!(
                    "{} field(s) failed validation.",
                    errors.len()
                )));
                result.validation_errors = errors;
            }
            SubmitOutcome::Accepted => {
                result.add_message(CmdMessage::success("Form submitted successfully!"));
            }
            SubmitOutcome::Failed(reason) => {
                result.add_message(CmdMessage::error(
                    "Failed to submit form. Please try again.",
                ));
                result.add_message(CmdMessage::info(reason));
            }
        }
        Ok(result)
    }
}
