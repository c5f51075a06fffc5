//! The state container owned by the composition root.
//!
//! `FormEngine` holds the current [`Document`] and funnels every mutation
//! through [`Document::apply`], one method per transition. Readers only ever
//! see complete snapshots; there is no partial state to observe and no
//! locking to do.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::error::Result;
use crate::model::{Document, Field, FieldId, FieldPatch, FormSettings, SettingsPatch};
use crate::registry::FieldType;
use crate::snapshot::FormSnapshot;
use crate::templates::Template;
use crate::transition::Transition;
use crate::validate::validate_form;

/// External collaborator that receives a clean submission. The engine hands
/// the value snapshot over synchronously and reports the outcome.
pub trait SubmissionSink {
    fn deliver(&mut self, submission: Submission<'_>) -> Result<()>;
}

/// What a sink receives: the form settings and the per-field values keyed by
/// field id.
#[derive(Debug)]
pub struct Submission<'a> {
    pub settings: &'a FormSettings,
    pub values: &'a HashMap<FieldId, String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; the map carries one message per offending field.
    Rejected(BTreeMap<FieldId, String>),
    Accepted,
    /// Validation passed but the sink reported an error.
    Failed(String),
}

#[derive(Debug, Default)]
pub struct FormEngine {
    document: Document,
}

impl FormEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_document(document: Document) -> Self {
        Self { document }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn into_document(self) -> Document {
        self.document
    }

    /// Applies one transition, replacing the held snapshot.
    pub fn apply(&mut self, transition: Transition) {
        debug!(op = transition.name(), "applying transition");
        self.document = self.document.apply(transition);
    }

    pub fn add_field(&mut self, field_type: FieldType, overrides: FieldPatch) {
        self.apply(Transition::AddField {
            field_type,
            overrides,
        });
    }

    pub fn remove_field(&mut self, id: FieldId) {
        self.apply(Transition::RemoveField { id });
    }

    pub fn update_field(&mut self, id: FieldId, patch: FieldPatch) {
        self.apply(Transition::UpdateField { id, patch });
    }

    pub fn reorder_fields(&mut self, source: usize, destination: usize) {
        self.apply(Transition::ReorderFields {
            source,
            destination,
        });
    }

    pub fn select_field(&mut self, id: Option<FieldId>) {
        self.apply(Transition::SelectField { id });
    }

    pub fn duplicate_field(&mut self, id: FieldId) {
        self.apply(Transition::DuplicateField { id });
    }

    pub fn update_settings(&mut self, patch: SettingsPatch) {
        self.apply(Transition::UpdateSettings { patch });
    }

    pub fn set_preview_mode(&mut self, preview: bool) {
        self.apply(Transition::SetPreviewMode { preview });
    }

    pub fn clear(&mut self) {
        self.apply(Transition::ClearForm);
    }

    pub fn load(&mut self, fields: Vec<Field>, settings: FormSettings) {
        self.apply(Transition::LoadForm { fields, settings });
    }

    pub fn load_snapshot(&mut self, snapshot: FormSnapshot) {
        self.load(snapshot.form_fields, snapshot.form_settings);
    }

    pub fn load_template(&mut self, template: Template) {
        // template selection replaces any in-progress form outright
        self.clear();
        self.load(template.fields, template.settings);
    }

    pub fn selected_field(&self) -> Option<&Field> {
        self.document.selected_field()
    }

    pub fn field_by_id(&self, id: &FieldId) -> Option<&Field> {
        self.document.field_by_id(id)
    }

    pub fn export(&self) -> FormSnapshot {
        FormSnapshot::capture(&self.document)
    }

    /// Full-form validation followed by hand-off to the sink. Synchronous:
    /// the outcome reports whatever the collaborator returned.
    pub fn submit(
        &self,
        values: &HashMap<FieldId, String>,
        sink: &mut dyn SubmissionSink,
    ) -> SubmitOutcome {
        let errors = validate_form(&self.document.fields, values);
        if !errors.is_empty() {
            return SubmitOutcome::Rejected(errors);
        }

        match sink.deliver(Submission {
            settings: &self.document.settings,
            values,
        }) {
            Ok(()) => SubmitOutcome::Accepted,
            Err(err) => SubmitOutcome::Failed(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormzError;
    use crate::templates;

    #[derive(Default)]
    struct RecordingSink {
        delivered: Vec<(String, usize)>,
        fail_with: Option<String>,
    }

    impl SubmissionSink for RecordingSink {
        fn deliver(&mut self, submission: Submission<'_>) -> Result<()> {
            if let Some(reason) = &self.fail_with {
                return Err(FormzError::Api(reason.clone()));
            }
            self.delivered
                .push((submission.settings.title.clone(), submission.values.len()));
            Ok(())
        }
    }

    #[test]
    fn mutations_flow_through_transitions() {
        let mut engine = FormEngine::new();
        engine.add_field(FieldType::Text, FieldPatch::default());
        engine.add_field(FieldType::Email, FieldPatch::default());

        assert_eq!(engine.document().fields.len(), 2);
        assert_eq!(
            engine.selected_field().map(|f| f.field_type),
            Some(FieldType::Email)
        );

        let first = engine.document().fields[0].id.clone();
        engine.remove_field(first);
        assert_eq!(engine.document().fields.len(), 1);
    }

    #[test]
    fn export_then_load_reproduces_the_form() {
        let mut engine = FormEngine::new();
        engine.add_field(FieldType::Text, FieldPatch::default().with_required(true));
        engine.update_settings(SettingsPatch {
            title: Some("Feedback".to_string()),
            ..SettingsPatch::default()
        });

        let snapshot = engine.export();
        let mut restored = FormEngine::new();
        restored.load_snapshot(snapshot);

        assert_eq!(restored.document().fields, engine.document().fields);
        assert_eq!(restored.document().settings, engine.document().settings);
        assert_eq!(restored.document().selected_field, None);
    }

    #[test]
    fn load_template_resets_then_loads() {
        let mut engine = FormEngine::new();
        engine.add_field(FieldType::Text, FieldPatch::default());

        let contact = templates::find("contact").unwrap();
        let expected_len = contact.fields.len();
        engine.load_template(contact);

        assert_eq!(engine.document().fields.len(), expected_len);
        assert_eq!(engine.document().settings.title, "Contact Us");
        assert_eq!(engine.document().selected_field, None);
    }

    #[test]
    fn submit_rejects_on_validation_errors() {
        let mut engine = FormEngine::new();
        engine.add_field(FieldType::Text, FieldPatch::default().with_required(true));

        let mut sink = RecordingSink::default();
        let outcome = engine.submit(&HashMap::new(), &mut sink);

        match outcome {
            SubmitOutcome::Rejected(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(
                    errors.values().next().map(String::as_str),
                    Some("This field is required")
                );
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert!(sink.delivered.is_empty());
    }

    #[test]
    fn submit_hands_clean_values_to_the_sink() {
        let mut engine = FormEngine::new();
        engine.add_field(FieldType::Text, FieldPatch::default().with_required(true));
        let id = engine.document().fields[0].id.clone();

        let mut values = HashMap::new();
        values.insert(id, "hello".to_string());

        let mut sink = RecordingSink::default();
        assert_eq!(engine.submit(&values, &mut sink), SubmitOutcome::Accepted);
        assert_eq!(sink.delivered.len(), 1);
        assert_eq!(sink.delivered[0].1, 1);
    }

    #[test]
    fn submit_surfaces_sink_failure() {
        let engine = FormEngine::new();
        let mut sink = RecordingSink {
            fail_with: Some("downstream unavailable".to_string()),
            ..RecordingSink::default()
        };

        match engine.submit(&HashMap::new(), &mut sink) {
            SubmitOutcome::Failed(reason) => {
                assert!(reason.contains("downstream unavailable"));
            }
            other => panic!("expected failure, got {:?}", other),
        }
    }
}
