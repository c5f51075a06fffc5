//! The exclusive mutation surface for the form document.
//!
//! Every edit is one [`Transition`] applied through [`Document::apply`],
//! which returns a new Document and leaves the input untouched. Transitions
//! are total: unknown ids degrade to no-ops and out-of-range indices are
//! clamped or ignored, so no operation can fail or panic.

use crate::model::{Document, Field, FieldId, FieldPatch, FormSettings, SettingsPatch};
use crate::registry::FieldType;

/// The closed set of edit operations. Adding a new operation is a
/// compile-time-checked change: `Document::apply` matches exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Append a new field of the given type, defaulted from the registry,
    /// with caller overrides layered on top. The new field becomes selected.
    AddField {
        field_type: FieldType,
        overrides: FieldPatch,
    },
    /// Drop the field with the given id; clears the selection if it pointed
    /// at that field.
    RemoveField { id: FieldId },
    /// Shallow-merge a patch into the matching field.
    UpdateField { id: FieldId, patch: FieldPatch },
    /// Move the field at `source` to `destination`, shifting the others.
    ReorderFields { source: usize, destination: usize },
    /// Set (or clear) the selection pointer. No existence check; readers
    /// treat a dangling pointer as "none selected".
    SelectField { id: Option<FieldId> },
    /// Insert a copy with a fresh id and a `" (Copy)"` label suffix
    /// immediately after the original, and select the copy.
    DuplicateField { id: FieldId },
    /// Shallow-merge top-level settings; a theme patch deep-merges.
    UpdateSettings { patch: SettingsPatch },
    /// Toggle preview. Entering preview clears the selection; leaving it
    /// does not restore one.
    SetPreviewMode { preview: bool },
    /// Reset to the initial document (default settings, default title).
    ClearForm,
    /// Replace fields and settings wholesale; selection is forced to none.
    /// No structural validation happens here: the producer of the snapshot
    /// is responsible for well-formed fields.
    LoadForm {
        fields: Vec<Field>,
        settings: FormSettings,
    },
}

impl Transition {
    pub fn name(&self) -> &'static str {
        match self {
            Transition::AddField { .. } => "add_field",
            Transition::RemoveField { .. } => "remove_field",
            Transition::UpdateField { .. } => "update_field",
            Transition::ReorderFields { .. } => "reorder_fields",
            Transition::SelectField { .. } => "select_field",
            Transition::DuplicateField { .. } => "duplicate_field",
            Transition::UpdateSettings { .. } => "update_settings",
            Transition::SetPreviewMode { .. } => "set_preview_mode",
            Transition::ClearForm => "clear_form",
            Transition::LoadForm { .. } => "load_form",
        }
    }
}

impl Document {
    /// Applies one transition, producing the next document state.
    pub fn apply(&self, transition: Transition) -> Document {
        let mut next = self.clone();
        match transition {
            Transition::AddField {
                field_type,
                overrides,
            } => {
                let mut field = Field::new(FieldId::generate(), field_type);
                field_type.default_attrs().apply_to(&mut field);
                overrides.apply_to(&mut field);
                next.selected_field = Some(field.id.clone());
                next.fields.push(field);
            }
            Transition::RemoveField { id } => {
                next.fields.retain(|f| f.id != id);
                if next.selected_field.as_ref() == Some(&id) {
                    next.selected_field = None;
                }
            }
            Transition::UpdateField { id, patch } => {
                if let Some(field) = next.fields.iter_mut().find(|f| f.id == id) {
                    patch.apply_to(field);
                }
            }
            Transition::ReorderFields {
                source,
                destination,
            } => {
                if source < next.fields.len() {
                    let field = next.fields.remove(source);
                    let destination = destination.min(next.fields.len());
                    next.fields.insert(destination, field);
                }
            }
            Transition::SelectField { id } => {
                next.selected_field = id;
            }
            Transition::DuplicateField { id } => {
                if let Some(pos) = next.fields.iter().position(|f| f.id == id) {
                    let mut copy = next.fields[pos].clone();
                    copy.id = FieldId::generate();
                    copy.label = format!("{} (Copy)", copy.label);
                    next.selected_field = Some(copy.id.clone());
                    next.fields.insert(pos + 1, copy);
                }
            }
            Transition::UpdateSettings { patch } => {
                patch.apply_to(&mut next.settings);
            }
            Transition::SetPreviewMode { preview } => {
                next.preview_mode = preview;
                if preview {
                    next.selected_field = None;
                }
            }
            Transition::ClearForm => {
                next = Document::default();
            }
            Transition::LoadForm { fields, settings } => {
                next.fields = fields;
                next.settings = settings;
                next.selected_field = None;
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldOption, ThemePatch, DEFAULT_FORM_TITLE};

    fn doc_with(types: &[FieldType]) -> Document {
        let mut doc = Document::default();
        for ty in types {
            doc = doc.apply(Transition::AddField {
                field_type: *ty,
                overrides: FieldPatch::default(),
            });
        }
        doc
    }

    fn ids(doc: &Document) -> Vec<FieldId> {
        doc.fields.iter().map(|f| f.id.clone()).collect()
    }

    #[test]
    fn add_field_appends_and_selects() {
        let doc = Document::default().apply(Transition::AddField {
            field_type: FieldType::Text,
            overrides: FieldPatch::default(),
        });

        assert_eq!(doc.fields.len(), 1);
        assert_eq!(doc.fields[0].label, "Text Field");
        assert_eq!(doc.fields[0].placeholder, "Enter text...");
        assert_eq!(doc.selected_field, Some(doc.fields[0].id.clone()));
    }

    #[test]
    fn add_field_overrides_win_over_registry_defaults() {
        let doc = Document::default().apply(Transition::AddField {
            field_type: FieldType::Email,
            overrides: FieldPatch::default().with_label("Work Email").with_required(true),
        });

        assert_eq!(doc.fields[0].label, "Work Email");
        assert!(doc.fields[0].required);
        // untouched defaults still come from the registry
        assert_eq!(doc.fields[0].placeholder, "Enter your email...");
    }

    #[test]
    fn add_and_duplicate_never_collide_ids() {
        let mut doc = doc_with(&[FieldType::Text, FieldType::Email, FieldType::Number]);
        for _ in 0..3 {
            let first = doc.fields[0].id.clone();
            doc = doc.apply(Transition::DuplicateField { id: first });
        }

        let mut seen = std::collections::HashSet::new();
        for id in ids(&doc) {
            assert!(seen.insert(id), "duplicate field id");
        }
    }

    #[test]
    fn input_document_is_left_untouched() {
        let before = doc_with(&[FieldType::Text]);
        let snapshot = before.clone();

        let _after = before.apply(Transition::RemoveField {
            id: before.fields[0].id.clone(),
        });

        assert_eq!(before, snapshot);
    }

    #[test]
    fn remove_field_clears_matching_selection() {
        let doc = doc_with(&[FieldType::Text, FieldType::Email]);
        let selected = doc.fields[1].id.clone();
        assert_eq!(doc.selected_field, Some(selected.clone()));

        let doc = doc.apply(Transition::RemoveField { id: selected });
        assert_eq!(doc.fields.len(), 1);
        assert_eq!(doc.selected_field, None);
    }

    #[test]
    fn remove_field_keeps_unrelated_selection() {
        let doc = doc_with(&[FieldType::Text, FieldType::Email]);
        let first = doc.fields[0].id.clone();
        let selected = doc.selected_field.clone();

        let doc = doc.apply(Transition::RemoveField { id: first });
        assert_eq!(doc.selected_field, selected);
    }

    #[test]
    fn remove_missing_id_is_a_noop() {
        let doc = doc_with(&[FieldType::Text, FieldType::Email]);
        let after = doc.apply(Transition::RemoveField {
            id: FieldId::from("missing"),
        });
        assert_eq!(after, doc);
    }

    #[test]
    fn update_field_merges_patch() {
        let doc = doc_with(&[FieldType::Text]);
        let id = doc.fields[0].id.clone();

        let doc = doc.apply(Transition::UpdateField {
            id,
            patch: FieldPatch::default().with_label("Renamed"),
        });

        assert_eq!(doc.fields[0].label, "Renamed");
        assert_eq!(doc.fields[0].placeholder, "Enter text...");
    }

    #[test]
    fn update_missing_id_is_a_noop() {
        let doc = doc_with(&[FieldType::Text]);
        let after = doc.apply(Transition::UpdateField {
            id: FieldId::from("missing"),
            patch: FieldPatch::default().with_label("Renamed"),
        });
        assert_eq!(after, doc);
    }

    #[test]
    fn update_replaces_options_wholesale() {
        let doc = doc_with(&[FieldType::Radio]);
        let id = doc.fields[0].id.clone();

        let doc = doc.apply(Transition::UpdateField {
            id,
            patch: FieldPatch::default().with_options(vec![FieldOption::new("only", "Only")]),
        });

        assert_eq!(doc.fields[0].options.len(), 1);
        assert_eq!(doc.fields[0].options[0].value, "only");
    }

    #[test]
    fn reorder_matches_remove_then_insert() {
        let doc = doc_with(&[
            FieldType::Text,
            FieldType::Email,
            FieldType::Number,
            FieldType::Date,
        ]);

        let reordered = doc.apply(Transition::ReorderFields {
            source: 0,
            destination: 2,
        });

        let mut manual = ids(&doc);
        let moved = manual.remove(0);
        manual.insert(2, moved);
        assert_eq!(ids(&reordered), manual);
    }

    #[test]
    fn reorder_is_a_permutation() {
        let doc = doc_with(&[FieldType::Text, FieldType::Email, FieldType::Number]);
        let reordered = doc.apply(Transition::ReorderFields {
            source: 2,
            destination: 0,
        });

        assert_eq!(reordered.fields.len(), doc.fields.len());
        let mut before = ids(&doc);
        let mut after = ids(&reordered);
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn reorder_out_of_range_source_is_a_noop() {
        let doc = doc_with(&[FieldType::Text, FieldType::Email]);
        let after = doc.apply(Transition::ReorderFields {
            source: 5,
            destination: 0,
        });
        assert_eq!(after, doc);
    }

    #[test]
    fn select_field_does_not_check_existence() {
        let doc = Document::default().apply(Transition::SelectField {
            id: Some(FieldId::from("dangling")),
        });
        assert_eq!(doc.selected_field, Some(FieldId::from("dangling")));
        assert!(doc.selected_field().is_none());
    }

    #[test]
    fn duplicate_inserts_copy_after_original() {
        let doc = doc_with(&[FieldType::Text, FieldType::Email]);
        let first = doc.fields[0].id.clone();

        let doc = doc.apply(Transition::DuplicateField { id: first.clone() });

        assert_eq!(doc.fields.len(), 3);
        assert_eq!(doc.fields[1].label, "Text Field (Copy)");
        assert_ne!(doc.fields[1].id, first);
        assert_eq!(doc.selected_field, Some(doc.fields[1].id.clone()));
        // the copy carries everything but id and label
        assert_eq!(doc.fields[1].placeholder, doc.fields[0].placeholder);
        assert_eq!(doc.fields[1].field_type, doc.fields[0].field_type);
    }

    #[test]
    fn duplicate_missing_id_is_a_noop() {
        let doc = doc_with(&[FieldType::Text]);
        let after = doc.apply(Transition::DuplicateField {
            id: FieldId::from("missing"),
        });
        assert_eq!(after, doc);
    }

    #[test]
    fn settings_patch_merges_and_theme_deep_merges() {
        let doc = Document::default().apply(Transition::UpdateSettings {
            patch: SettingsPatch {
                title: Some("Signup".to_string()),
                theme: Some(ThemePatch {
                    primary_color: Some("#000".to_string()),
                    ..ThemePatch::default()
                }),
                ..SettingsPatch::default()
            },
        });

        assert_eq!(doc.settings.title, "Signup");
        assert_eq!(doc.settings.submit_button_text, "Submit");
        assert_eq!(doc.settings.theme.primary_color, "#000");
        assert_eq!(doc.settings.theme.background_color, "#ffffff");
    }

    #[test]
    fn entering_preview_clears_selection() {
        let doc = doc_with(&[FieldType::Text]);
        assert!(doc.selected_field.is_some());

        let doc = doc.apply(Transition::SetPreviewMode { preview: true });
        assert!(doc.preview_mode);
        assert_eq!(doc.selected_field, None);
    }

    #[test]
    fn leaving_preview_does_not_restore_selection() {
        let doc = doc_with(&[FieldType::Text])
            .apply(Transition::SetPreviewMode { preview: true })
            .apply(Transition::SetPreviewMode { preview: false });

        assert!(!doc.preview_mode);
        assert_eq!(doc.selected_field, None);
    }

    #[test]
    fn clear_form_resets_to_default_title() {
        let doc = doc_with(&[FieldType::Text]).apply(Transition::UpdateSettings {
            patch: SettingsPatch {
                title: Some("Custom".to_string()),
                ..SettingsPatch::default()
            },
        });

        let cleared = doc.apply(Transition::ClearForm);
        assert!(cleared.fields.is_empty());
        assert_eq!(cleared.settings.title, DEFAULT_FORM_TITLE);
    }

    #[test]
    fn clear_form_is_idempotent() {
        let doc = doc_with(&[FieldType::Text, FieldType::Email]);
        let once = doc.apply(Transition::ClearForm);
        let twice = once.apply(Transition::ClearForm);
        assert_eq!(once, twice);
    }

    #[test]
    fn load_form_replaces_wholesale_and_clears_selection() {
        let doc = doc_with(&[FieldType::Text]);
        let incoming = vec![Field::new(FieldId::from("name"), FieldType::Text)];
        let settings = FormSettings {
            title: "Loaded".to_string(),
            ..FormSettings::default()
        };

        let doc = doc.apply(Transition::LoadForm {
            fields: incoming,
            settings,
        });

        assert_eq!(doc.fields.len(), 1);
        assert_eq!(doc.fields[0].id, FieldId::from("name"));
        assert_eq!(doc.settings.title, "Loaded");
        assert_eq!(doc.selected_field, None);
    }

    #[test]
    fn load_form_preserves_preview_flag() {
        let doc = Document::default()
            .apply(Transition::SetPreviewMode { preview: true })
            .apply(Transition::LoadForm {
                fields: Vec::new(),
                settings: FormSettings::default(),
            });
        assert!(doc.preview_mode);
    }
}
