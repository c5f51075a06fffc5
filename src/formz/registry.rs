//! Static catalog of field types: wire names, display metadata, and the
//! default attribute set a freshly added field of each type starts with.
//!
//! The catalog is pure data. Lookups are total functions with no error path;
//! default resolution lives here (and in the validation engine) instead of
//! being scattered across consumers.

use serde::{Deserialize, Serialize};

use crate::model::{FieldOption, FieldPatch};

/// The fixed enumeration of field kinds. Wire names follow the exported
/// snapshot format ("datetime-local", "multiselect").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Email,
    Password,
    Textarea,
    Number,
    Tel,
    Url,
    Date,
    Time,
    #[serde(rename = "datetime-local")]
    DateTimeLocal,
    Month,
    Week,
    Checkbox,
    Radio,
    Select,
    MultiSelect,
    File,
    Range,
    Color,
    Rating,
    Signature,
    Heading,
    Paragraph,
    Divider,
    Spacer,
    Image,
}

/// Sidebar grouping for the type catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldCategory {
    Basic,
    DateTime,
    Selection,
    Advanced,
    Layout,
}

impl FieldCategory {
    pub const ALL: [FieldCategory; 5] = [
        FieldCategory::Basic,
        FieldCategory::DateTime,
        FieldCategory::Selection,
        FieldCategory::Advanced,
        FieldCategory::Layout,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldCategory::Basic => "Basic",
            FieldCategory::DateTime => "Date & Time",
            FieldCategory::Selection => "Selection",
            FieldCategory::Advanced => "Advanced",
            FieldCategory::Layout => "Layout",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "basic" => Some(FieldCategory::Basic),
            "datetime" => Some(FieldCategory::DateTime),
            "selection" => Some(FieldCategory::Selection),
            "advanced" => Some(FieldCategory::Advanced),
            "layout" => Some(FieldCategory::Layout),
            _ => None,
        }
    }
}

impl FieldType {
    pub const ALL: [FieldType; 26] = [
        FieldType::Text,
        FieldType::Email,
        FieldType::Password,
        FieldType::Textarea,
        FieldType::Number,
        FieldType::Tel,
        FieldType::Url,
        FieldType::Date,
        FieldType::Time,
        FieldType::DateTimeLocal,
        FieldType::Month,
        FieldType::Week,
        FieldType::Checkbox,
        FieldType::Radio,
        FieldType::Select,
        FieldType::MultiSelect,
        FieldType::File,
        FieldType::Range,
        FieldType::Color,
        FieldType::Rating,
        FieldType::Signature,
        FieldType::Heading,
        FieldType::Paragraph,
        FieldType::Divider,
        FieldType::Spacer,
        FieldType::Image,
    ];

    /// The identifier used in snapshots and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Password => "password",
            FieldType::Textarea => "textarea",
            FieldType::Number => "number",
            FieldType::Tel => "tel",
            FieldType::Url => "url",
            FieldType::Date => "date",
            FieldType::Time => "time",
            FieldType::DateTimeLocal => "datetime-local",
            FieldType::Month => "month",
            FieldType::Week => "week",
            FieldType::Checkbox => "checkbox",
            FieldType::Radio => "radio",
            FieldType::Select => "select",
            FieldType::MultiSelect => "multiselect",
            FieldType::File => "file",
            FieldType::Range => "range",
            FieldType::Color => "color",
            FieldType::Rating => "rating",
            FieldType::Signature => "signature",
            FieldType::Heading => "heading",
            FieldType::Paragraph => "paragraph",
            FieldType::Divider => "divider",
            FieldType::Spacer => "spacer",
            FieldType::Image => "image",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == s)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            FieldType::Text => "Text Input",
            FieldType::Email => "Email",
            FieldType::Password => "Password",
            FieldType::Textarea => "Textarea",
            FieldType::Number => "Number",
            FieldType::Tel => "Phone",
            FieldType::Url => "URL",
            FieldType::Date => "Date",
            FieldType::Time => "Time",
            FieldType::DateTimeLocal => "Date & Time",
            FieldType::Month => "Month",
            FieldType::Week => "Week",
            FieldType::Checkbox => "Checkbox",
            FieldType::Radio => "Radio Buttons",
            FieldType::Select => "Dropdown",
            FieldType::MultiSelect => "Multi-Select",
            FieldType::File => "File Upload",
            FieldType::Range => "Range Slider",
            FieldType::Color => "Color Picker",
            FieldType::Rating => "Star Rating",
            FieldType::Signature => "Signature",
            FieldType::Heading => "Heading",
            FieldType::Paragraph => "Paragraph",
            FieldType::Divider => "Divider",
            FieldType::Spacer => "Spacer",
            FieldType::Image => "Image",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            FieldType::Text => "Single line text input",
            FieldType::Email => "Email address input",
            FieldType::Password => "Password input field",
            FieldType::Textarea => "Multi-line text input",
            FieldType::Number => "Numeric input field",
            FieldType::Tel => "Phone number input",
            FieldType::Url => "Website URL input",
            FieldType::Date => "Date picker",
            FieldType::Time => "Time picker",
            FieldType::DateTimeLocal => "Date and time picker",
            FieldType::Month => "Month and year picker",
            FieldType::Week => "Week picker",
            FieldType::Checkbox => "Single checkbox",
            FieldType::Radio => "Multiple choice (single select)",
            FieldType::Select => "Dropdown selection",
            FieldType::MultiSelect => "Multiple selection dropdown",
            FieldType::File => "File upload input",
            FieldType::Range => "Range slider input",
            FieldType::Color => "Color selection input",
            FieldType::Rating => "Star rating component",
            FieldType::Signature => "Digital signature pad",
            FieldType::Heading => "Section heading",
            FieldType::Paragraph => "Text paragraph",
            FieldType::Divider => "Section divider",
            FieldType::Spacer => "Empty space",
            FieldType::Image => "Display image",
        }
    }

    pub fn category(self) -> FieldCategory {
        match self {
            FieldType::Text
            | FieldType::Email
            | FieldType::Password
            | FieldType::Textarea
            | FieldType::Number
            | FieldType::Tel
            | FieldType::Url => FieldCategory::Basic,
            FieldType::Date
            | FieldType::Time
            | FieldType::DateTimeLocal
            | FieldType::Month
            | FieldType::Week => FieldCategory::DateTime,
            FieldType::Checkbox | FieldType::Radio | FieldType::Select | FieldType::MultiSelect => {
                FieldCategory::Selection
            }
            FieldType::File
            | FieldType::Range
            | FieldType::Color
            | FieldType::Rating
            | FieldType::Signature => FieldCategory::Advanced,
            FieldType::Heading
            | FieldType::Paragraph
            | FieldType::Divider
            | FieldType::Spacer
            | FieldType::Image => FieldCategory::Layout,
        }
    }

    /// Layout-only variants carry no value; `required` is ignored for them
    /// and they never produce validation errors.
    pub fn is_layout(self) -> bool {
        matches!(
            self,
            FieldType::Heading
                | FieldType::Paragraph
                | FieldType::Divider
                | FieldType::Spacer
                | FieldType::Image
        )
    }

    pub fn is_choice(self) -> bool {
        matches!(
            self,
            FieldType::Radio | FieldType::Select | FieldType::MultiSelect
        )
    }

    /// Default attribute set for a freshly added field of this type.
    pub fn default_attrs(self) -> FieldPatch {
        let mut patch = FieldPatch::default().with_label(self.default_label());
        match self {
            FieldType::Text => patch.placeholder = Some("Enter text...".to_string()),
            FieldType::Email => patch.placeholder = Some("Enter your email...".to_string()),
            FieldType::Password => patch.placeholder = Some("Enter password...".to_string()),
            FieldType::Textarea => {
                patch.placeholder = Some("Enter your message...".to_string());
                patch.rows = Some(4);
            }
            FieldType::Number => patch.placeholder = Some("Enter number...".to_string()),
            FieldType::Tel => patch.placeholder = Some("Enter phone number...".to_string()),
            FieldType::Url => patch.placeholder = Some("https://example.com".to_string()),
            FieldType::Radio => {
                patch.options = Some(vec![
                    FieldOption::new("option1", "Option 1"),
                    FieldOption::new("option2", "Option 2"),
                    FieldOption::new("option3", "Option 3"),
                ]);
            }
            FieldType::Select => {
                patch.options = Some(vec![
                    FieldOption::new("", "Choose..."),
                    FieldOption::new("option1", "Option 1"),
                    FieldOption::new("option2", "Option 2"),
                    FieldOption::new("option3", "Option 3"),
                ]);
            }
            FieldType::MultiSelect => {
                patch.options = Some(vec![
                    FieldOption::new("option1", "Option 1"),
                    FieldOption::new("option2", "Option 2"),
                    FieldOption::new("option3", "Option 3"),
                ]);
            }
            FieldType::File => patch.accept = Some("*".to_string()),
            FieldType::Range => {
                patch.min = Some(0.0);
                patch.max = Some(100.0);
                patch.step = Some(1.0);
            }
            FieldType::Rating => patch.max = Some(5.0),
            FieldType::Heading => {
                patch.level = Some(2);
                patch.text = Some("Heading Text".to_string());
            }
            FieldType::Paragraph => {
                patch.text = Some(
                    "This is a paragraph of text that provides information to users.".to_string(),
                );
            }
            FieldType::Divider => patch.style = Some("solid".to_string()),
            FieldType::Spacer => patch.height = Some(20),
            FieldType::Image => {
                patch.src = Some(String::new());
                patch.alt = Some("Image description".to_string());
                patch.width = Some("100%".to_string());
            }
            FieldType::Date
            | FieldType::Time
            | FieldType::DateTimeLocal
            | FieldType::Month
            | FieldType::Week
            | FieldType::Checkbox
            | FieldType::Color
            | FieldType::Signature => {}
        }
        patch
    }

    fn default_label(self) -> &'static str {
        match self {
            FieldType::Text => "Text Field",
            FieldType::Email => "Email Address",
            FieldType::Password => "Password",
            FieldType::Textarea => "Message",
            FieldType::Number => "Number",
            FieldType::Tel => "Phone Number",
            FieldType::Url => "Website URL",
            FieldType::Date => "Date",
            FieldType::Time => "Time",
            FieldType::DateTimeLocal => "Date & Time",
            FieldType::Month => "Month",
            FieldType::Week => "Week",
            FieldType::Checkbox => "I agree to the terms and conditions",
            FieldType::Radio => "Choose an option",
            FieldType::Select => "Select an option",
            FieldType::MultiSelect => "Multi-Select",
            FieldType::File => "Upload File",
            FieldType::Range => "Range",
            FieldType::Color => "Choose Color",
            FieldType::Rating => "Rate this",
            FieldType::Signature => "Your Signature",
            FieldType::Heading => "Section Heading",
            FieldType::Paragraph => "Paragraph",
            FieldType::Divider => "Divider",
            FieldType::Spacer => "Spacer",
            FieldType::Image => "Image",
        }
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for ty in FieldType::ALL {
            assert_eq!(FieldType::parse(ty.name()), Some(ty));
        }
        assert_eq!(FieldType::parse("datetime-local"), Some(FieldType::DateTimeLocal));
        assert_eq!(FieldType::parse("multiselect"), Some(FieldType::MultiSelect));
        assert_eq!(FieldType::parse("not-a-type"), None);
    }

    #[test]
    fn serde_names_match_catalog_names() {
        for ty in FieldType::ALL {
            let json = serde_json::to_value(ty).unwrap();
            assert_eq!(json, serde_json::Value::String(ty.name().to_string()));
        }
    }

    #[test]
    fn textarea_defaults() {
        let patch = FieldType::Textarea.default_attrs();
        assert_eq!(patch.label.as_deref(), Some("Message"));
        assert_eq!(patch.placeholder.as_deref(), Some("Enter your message..."));
        assert_eq!(patch.rows, Some(4));
    }

    #[test]
    fn range_defaults() {
        let patch = FieldType::Range.default_attrs();
        assert_eq!(patch.min, Some(0.0));
        assert_eq!(patch.max, Some(100.0));
        assert_eq!(patch.step, Some(1.0));
    }

    #[test]
    fn select_defaults_start_with_empty_choice() {
        let patch = FieldType::Select.default_attrs();
        let options = patch.options.unwrap();
        assert_eq!(options.len(), 4);
        assert_eq!(options[0].value, "");
        assert_eq!(options[0].label, "Choose...");
    }

    #[test]
    fn rating_uses_max_for_star_count() {
        assert_eq!(FieldType::Rating.default_attrs().max, Some(5.0));
    }

    #[test]
    fn layout_variants() {
        assert!(FieldType::Heading.is_layout());
        assert!(FieldType::Spacer.is_layout());
        assert!(!FieldType::Text.is_layout());
        assert!(!FieldType::Checkbox.is_layout());
    }

    #[test]
    fn choice_variants() {
        assert!(FieldType::Radio.is_choice());
        assert!(FieldType::MultiSelect.is_choice());
        assert!(!FieldType::Checkbox.is_choice());
    }

    #[test]
    fn every_type_has_a_category() {
        // exercised for exhaustiveness; the match itself is compile-checked
        for ty in FieldType::ALL {
            let _ = ty.category();
            assert!(!ty.display_name().is_empty());
            assert!(!ty.description().is_empty());
        }
    }
}
