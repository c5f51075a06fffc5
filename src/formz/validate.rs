//! Field-level validation, evaluated at submission time.
//!
//! Rules run in a fixed order and the first hit wins. The engine never
//! fails: a pattern that does not compile is logged and skipped (the only
//! recoverable-by-design error class in the core).

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;
use url::Url;

use crate::model::{Field, FieldId};
use crate::registry::FieldType;

// Single-address shape: local part, @, domain with at least one dot.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email shape regex"));

/// Checks one field's current value against its declared and implicit
/// constraints. Returns the error message to surface next to the field, or
/// `None` when the value passes.
pub fn validate_field(field: &Field, value: Option<&str>) -> Option<String> {
    // Layout decorations carry no value; `required` is ignored for them.
    if field.field_type.is_layout() {
        return None;
    }

    let value = value.unwrap_or("");
    let blank = value.trim().is_empty();

    if field.required && blank {
        return Some("This field is required".to_string());
    }
    if blank {
        return None;
    }

    let rules = &field.validation;

    if let Some(min) = rules.min_length {
        if (value.chars().count() as u32) < min {
            return Some(format!("Minimum length is {} characters", min));
        }
    }

    if let Some(max) = rules.max_length {
        if (value.chars().count() as u32) > max {
            return Some(format!("Maximum length is {} characters", max));
        }
    }

    if let Some(pattern) = &rules.pattern {
        match Regex::new(pattern) {
            Ok(re) => {
                if !re.is_match(value) {
                    return Some(
                        rules
                            .message
                            .clone()
                            .unwrap_or_else(|| "Invalid format".to_string()),
                    );
                }
            }
            Err(err) => {
                warn!(pattern = %pattern, error = %err, "skipping unparseable validation pattern");
            }
        }
    }

    match field.field_type {
        FieldType::Email => {
            if !EMAIL_RE.is_match(value) {
                return Some("Please enter a valid email address".to_string());
            }
        }
        FieldType::Url => {
            if Url::parse(value).is_err() {
                return Some("Please enter a valid URL".to_string());
            }
        }
        FieldType::Number | FieldType::Range => match value.trim().parse::<f64>() {
            Err(_) => return Some("Please enter a valid number".to_string()),
            Ok(n) if n.is_nan() => return Some("Please enter a valid number".to_string()),
            Ok(n) => {
                if let Some(min) = field.min {
                    if n < min {
                        return Some(format!("Minimum value is {}", min));
                    }
                }
                if let Some(max) = field.max {
                    if n > max {
                        return Some(format!("Maximum value is {}", max));
                    }
                }
            }
        },
        _ => {}
    }

    None
}

/// Runs [`validate_field`] over every field and collects an id → message map
/// for the failures. Submission may proceed only when the map is empty.
pub fn validate_form(
    fields: &[Field],
    values: &HashMap<FieldId, String>,
) -> BTreeMap<FieldId, String> {
    let mut errors = BTreeMap::new();
    for field in fields {
        if let Some(message) = validate_field(field, values.get(&field.id).map(String::as_str)) {
            errors.insert(field.id.clone(), message);
        }
    }
    errors
}
