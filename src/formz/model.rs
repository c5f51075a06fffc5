use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::registry::FieldType;

/// Title a freshly created (or cleared) form starts with.
pub const DEFAULT_FORM_TITLE: &str = "Untitled Form";

/// Opaque identifier for a field, unique within an editing session.
///
/// Generated ids combine a time-derived component with a randomness-derived
/// component, both base-36 encoded. Template bundles and imported snapshots
/// may carry semantic ids ("email", "firstName") instead; the model treats
/// both the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldId(String);

impl FieldId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Generates a fresh id. Uniqueness only needs to hold within one
    /// editing session, so clock millis plus 48 bits of entropy is enough.
    pub fn generate() -> Self {
        let millis = Utc::now().timestamp_millis().unsigned_abs() as u128;
        let entropy = Uuid::new_v4().as_u128() & 0xffff_ffff_ffff;
        Self(format!("{}{}", base36(millis), base36(entropy)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FieldId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl From<String> for FieldId {
    fn from(raw: String) -> Self {
        Self(raw)
    }
}

fn base36(mut n: u128) -> String {
    const DIGITS: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    if n == 0 {
        return "0".to_string();
    }
    let mut out = Vec::new();
    while n > 0 {
        out.push(DIGITS[(n % 36) as usize]);
        n /= 36;
    }
    out.iter().rev().map(|&b| b as char).collect()
}

/// One entry of a choice field (radio, select, multiselect).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

impl FieldOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Declared constraints evaluated by the validation engine. Only meaningful
/// on text-like fields; an empty record means "no declared constraints".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationRules {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Message shown when `pattern` does not match, instead of the generic one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ValidationRules {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One form element: an input, a choice control, or a layout decoration.
///
/// Type-specific attributes are optional and only populated for the variants
/// that use them (`rows` for textareas, `min`/`max`/`step` for numeric
/// inputs, and so on). `max` doubles as the star count for rating fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub id: FieldId,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub options: Vec<FieldOption>,
    #[serde(default)]
    pub validation: ValidationRules,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rows: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

impl Field {
    /// A minimally valid field: id, type, and the fallback `"<type> Field"`
    /// label. Registry defaults and caller overrides are layered on top via
    /// [`FieldPatch::apply_to`].
    pub fn new(id: FieldId, field_type: FieldType) -> Self {
        Self {
            id,
            field_type,
            label: format!("{} Field", field_type),
            placeholder: String::new(),
            help_text: None,
            required: false,
            options: Vec::new(),
            validation: ValidationRules::default(),
            rows: None,
            min: None,
            max: None,
            step: None,
            accept: None,
            multiple: None,
            level: None,
            text: None,
            height: None,
            src: None,
            alt: None,
            width: None,
            style: None,
        }
    }
}

/// Partial update for a field. `None` means "leave as-is"; `options` and
/// `validation` replace wholesale when present (the caller constructs the
/// full nested value).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldPatch {
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub help_text: Option<String>,
    pub required: Option<bool>,
    pub options: Option<Vec<FieldOption>>,
    pub validation: Option<ValidationRules>,
    pub rows: Option<u32>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub accept: Option<String>,
    pub multiple: Option<bool>,
    pub level: Option<u8>,
    pub text: Option<String>,
    pub height: Option<u32>,
    pub src: Option<String>,
    pub alt: Option<String>,
    pub width: Option<String>,
    pub style: Option<String>,
}

impl FieldPatch {
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn with_options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_validation(mut self, validation: ValidationRules) -> Self {
        self.validation = Some(validation);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// The single shallow-merge point for field updates.
    pub fn apply_to(&self, field: &mut Field) {
        if let Some(v) = &self.label {
            field.label = v.clone();
        }
        if let Some(v) = &self.placeholder {
            field.placeholder = v.clone();
        }
        if let Some(v) = &self.help_text {
            field.help_text = Some(v.clone());
        }
        if let Some(v) = self.required {
            field.required = v;
        }
        if let Some(v) = &self.options {
            field.options = v.clone();
        }
        if let Some(v) = &self.validation {
            field.validation = v.clone();
        }
        if let Some(v) = self.rows {
            field.rows = Some(v);
        }
        if let Some(v) = self.min {
            field.min = Some(v);
        }
        if let Some(v) = self.max {
            field.max = Some(v);
        }
        if let Some(v) = self.step {
            field.step = Some(v);
        }
        if let Some(v) = &self.accept {
            field.accept = Some(v.clone());
        }
        if let Some(v) = self.multiple {
            field.multiple = Some(v);
        }
        if let Some(v) = self.level {
            field.level = Some(v);
        }
        if let Some(v) = &self.text {
            field.text = Some(v.clone());
        }
        if let Some(v) = self.height {
            field.height = Some(v);
        }
        if let Some(v) = &self.src {
            field.src = Some(v.clone());
        }
        if let Some(v) = &self.alt {
            field.alt = Some(v.clone());
        }
        if let Some(v) = &self.width {
            field.width = Some(v.clone());
        }
        if let Some(v) = &self.style {
            field.style = Some(v.clone());
        }
    }
}

/// Vertical rhythm of the rendered form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spacing {
    Compact,
    #[default]
    Medium,
    Spacious,
}

impl Spacing {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "compact" => Some(Spacing::Compact),
            "medium" => Some(Spacing::Medium),
            "spacious" => Some(Spacing::Spacious),
            _ => None,
        }
    }
}

impl std::fmt::Display for Spacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Spacing::Compact => "compact",
            Spacing::Medium => "medium",
            Spacing::Spacious => "spacious",
        };
        write!(f, "{}", s)
    }
}

/// Visual theme. Always fully populated; partial updates deep-merge via
/// [`ThemePatch`] rather than replacing the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormTheme {
    pub primary_color: String,
    pub background_color: String,
    pub text_color: String,
    pub border_radius: String,
    pub spacing: Spacing,
}

impl Default for FormTheme {
    fn default() -> Self {
        Self {
            primary_color: "#3b82f6".to_string(),
            background_color: "#ffffff".to_string(),
            text_color: "#1f2937".to_string(),
            border_radius: "6px".to_string(),
            spacing: Spacing::Medium,
        }
    }
}

/// Global document metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormSettings {
    pub title: String,
    pub description: String,
    pub submit_button_text: String,
    pub theme: FormTheme,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_FORM_TITLE.to_string(),
            description: String::new(),
            submit_button_text: "Submit".to_string(),
            theme: FormTheme::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemePatch {
    pub primary_color: Option<String>,
    pub background_color: Option<String>,
    pub text_color: Option<String>,
    pub border_radius: Option<String>,
    pub spacing: Option<Spacing>,
}

impl ThemePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(&self, theme: &mut FormTheme) {
        if let Some(v) = &self.primary_color {
            theme.primary_color = v.clone();
        }
        if let Some(v) = &self.background_color {
            theme.background_color = v.clone();
        }
        if let Some(v) = &self.text_color {
            theme.text_color = v.clone();
        }
        if let Some(v) = &self.border_radius {
            theme.border_radius = v.clone();
        }
        if let Some(v) = self.spacing {
            theme.spacing = v;
        }
    }
}

/// Partial settings update. Top-level strings merge shallowly; the theme
/// patch merges into the existing theme instead of replacing it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub submit_button_text: Option<String>,
    pub theme: Option<ThemePatch>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply_to(&self, settings: &mut FormSettings) {
        if let Some(v) = &self.title {
            settings.title = v.clone();
        }
        if let Some(v) = &self.description {
            settings.description = v.clone();
        }
        if let Some(v) = &self.submit_button_text {
            settings.submit_button_text = v.clone();
        }
        if let Some(patch) = &self.theme {
            patch.apply_to(&mut settings.theme);
        }
    }
}

/// The complete in-memory form description: fields, settings, selection
/// pointer, and preview flag.
///
/// A Document is never mutated in place. Every edit goes through
/// [`Document::apply`](crate::transition) and yields a new value, so prior
/// snapshots stay valid for diffing and tests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    pub fields: Vec<Field>,
    pub settings: FormSettings,
    pub selected_field: Option<FieldId>,
    pub preview_mode: bool,
}

impl Document {
    pub fn field_by_id(&self, id: &FieldId) -> Option<&Field> {
        self.fields.iter().find(|f| &f.id == id)
    }

    /// The currently selected field. A selection pointer referencing an id
    /// that no longer exists reads as "none selected".
    pub fn selected_field(&self) -> Option<&Field> {
        self.selected_field
            .as_ref()
            .and_then(|id| self.field_by_id(id))
    }

    pub fn position_of(&self, id: &FieldId) -> Option<usize> {
        self.fields.iter().position(|f| &f.id == id)
    }
}
