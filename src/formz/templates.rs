//! Built-in template bundles: named field/settings pairs conforming to the
//! document shapes. Loading one is equivalent to a clear followed by a
//! wholesale form load.

use serde::{Deserialize, Serialize};

use crate::model::{Field, FieldId, FieldOption, FormSettings};
use crate::registry::FieldType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateCategory {
    Business,
    Survey,
    Event,
}

impl TemplateCategory {
    pub fn label(self) -> &'static str {
        match self {
            TemplateCategory::Business => "Business",
            TemplateCategory::Survey => "Survey",
            TemplateCategory::Event => "Event",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Template {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: TemplateCategory,
    pub fields: Vec<Field>,
    pub settings: FormSettings,
}

pub fn all() -> Vec<Template> {
    vec![
        contact(),
        survey(),
        registration(),
        job_application(),
        feedback(),
    ]
}

pub fn find(id: &str) -> Option<Template> {
    all().into_iter().find(|t| t.id == id)
}

fn text_field(id: &str, label: &str, placeholder: &str, required: bool) -> Field {
    Field {
        label: label.to_string(),
        placeholder: placeholder.to_string(),
        required,
        ..Field::new(FieldId::from(id), FieldType::Text)
    }
}

fn settings(title: &str, description: &str, submit: &str) -> FormSettings {
    FormSettings {
        title: title.to_string(),
        description: description.to_string(),
        submit_button_text: submit.to_string(),
        ..FormSettings::default()
    }
}

fn opts(pairs: &[(&str, &str)]) -> Vec<FieldOption> {
    pairs
        .iter()
        .map(|(value, label)| FieldOption::new(*value, *label))
        .collect()
}

fn contact() -> Template {
    Template {
        id: "contact",
        name: "Contact Form",
        description: "Basic contact form with name, email, and message",
        category: TemplateCategory::Business,
        fields: vec![
            text_field("name", "Full Name", "Enter your full name", true),
            Field {
                label: "Email Address".to_string(),
                placeholder: "Enter your email".to_string(),
                required: true,
                ..Field::new(FieldId::from("email"), FieldType::Email)
            },
            Field {
                label: "Phone Number".to_string(),
                placeholder: "Enter your phone number".to_string(),
                ..Field::new(FieldId::from("phone"), FieldType::Tel)
            },
            Field {
                label: "Subject".to_string(),
                required: true,
                options: opts(&[
                    ("", "Select a subject"),
                    ("general", "General Inquiry"),
                    ("support", "Support Request"),
                    ("sales", "Sales Question"),
                ]),
                ..Field::new(FieldId::from("subject"), FieldType::Select)
            },
            Field {
                label: "Message".to_string(),
                placeholder: "Enter your message here...".to_string(),
                required: true,
                rows: Some(5),
                ..Field::new(FieldId::from("message"), FieldType::Textarea)
            },
        ],
        settings: settings(
            "Contact Us",
            "We'd love to hear from you. Send us a message and we'll respond as soon as possible.",
            "Send Message",
        ),
    }
}

fn survey() -> Template {
    Template {
        id: "survey",
        name: "Customer Survey",
        description: "Customer satisfaction survey with ratings and feedback",
        category: TemplateCategory::Survey,
        fields: vec![
            text_field("name", "Your Name", "Enter your name", true),
            Field {
                label: "How satisfied are you with our service?".to_string(),
                required: true,
                options: opts(&[
                    ("very-satisfied", "Very Satisfied"),
                    ("satisfied", "Satisfied"),
                    ("neutral", "Neutral"),
                    ("dissatisfied", "Dissatisfied"),
                    ("very-dissatisfied", "Very Dissatisfied"),
                ]),
                ..Field::new(FieldId::from("satisfaction"), FieldType::Radio)
            },
            Field {
                label: "Rate your overall experience".to_string(),
                required: true,
                max: Some(5.0),
                ..Field::new(FieldId::from("rating"), FieldType::Rating)
            },
            Field {
                label: "Would you recommend us to others?".to_string(),
                required: true,
                options: opts(&[
                    ("yes", "Yes, definitely"),
                    ("maybe", "Maybe"),
                    ("no", "No, probably not"),
                ]),
                ..Field::new(FieldId::from("recommend"), FieldType::Radio)
            },
            Field {
                label: "What could we improve?".to_string(),
                placeholder: "Share your suggestions...".to_string(),
                rows: Some(4),
                ..Field::new(FieldId::from("improvements"), FieldType::Textarea)
            },
        ],
        settings: settings(
            "Customer Satisfaction Survey",
            "Help us improve by sharing your feedback",
            "Submit Survey",
        ),
    }
}

fn registration() -> Template {
    Template {
        id: "registration",
        name: "Event Registration",
        description: "Event registration form with personal details and preferences",
        category: TemplateCategory::Event,
        fields: vec![
            text_field("firstName", "First Name", "Enter your first name", true),
            text_field("lastName", "Last Name", "Enter your last name", true),
            Field {
                label: "Email Address".to_string(),
                placeholder: "Enter your email".to_string(),
                required: true,
                ..Field::new(FieldId::from("email"), FieldType::Email)
            },
            Field {
                label: "Phone Number".to_string(),
                placeholder: "Enter your phone number".to_string(),
                required: true,
                ..Field::new(FieldId::from("phone"), FieldType::Tel)
            },
            text_field("company", "Company/Organization", "Enter your company name", false),
            Field {
                label: "Dietary Restrictions".to_string(),
                options: opts(&[
                    ("vegetarian", "Vegetarian"),
                    ("vegan", "Vegan"),
                    ("gluten-free", "Gluten-free"),
                    ("dairy-free", "Dairy-free"),
                    ("nut-allergy", "Nut Allergy"),
                ]),
                ..Field::new(FieldId::from("dietaryRestrictions"), FieldType::MultiSelect)
            },
            Field {
                label: "T-Shirt Size".to_string(),
                required: true,
                options: opts(&[
                    ("", "Select size"),
                    ("xs", "XS"),
                    ("s", "S"),
                    ("m", "M"),
                    ("l", "L"),
                    ("xl", "XL"),
                    ("xxl", "XXL"),
                ]),
                ..Field::new(FieldId::from("tshirtSize"), FieldType::Select)
            },
            Field {
                label: "I agree to the terms and conditions".to_string(),
                required: true,
                ..Field::new(FieldId::from("terms"), FieldType::Checkbox)
            },
        ],
        settings: settings(
            "Event Registration",
            "Register for our upcoming event",
            "Register Now",
        ),
    }
}

fn job_application() -> Template {
    Template {
        id: "job-application",
        name: "Job Application",
        description: "Comprehensive job application form",
        category: TemplateCategory::Business,
        fields: vec![
            Field {
                label: "Personal Information".to_string(),
                level: Some(2),
                text: Some("Personal Information".to_string()),
                ..Field::new(FieldId::from("personalInfo"), FieldType::Heading)
            },
            text_field("fullName", "Full Name", "Enter your full name", true),
            Field {
                label: "Email Address".to_string(),
                placeholder: "Enter your email".to_string(),
                required: true,
                ..Field::new(FieldId::from("email"), FieldType::Email)
            },
            Field {
                label: "Phone Number".to_string(),
                placeholder: "Enter your phone number".to_string(),
                required: true,
                ..Field::new(FieldId::from("phone"), FieldType::Tel)
            },
            Field {
                label: "Address".to_string(),
                placeholder: "Enter your full address".to_string(),
                required: true,
                rows: Some(3),
                ..Field::new(FieldId::from("address"), FieldType::Textarea)
            },
            Field {
                label: "Divider".to_string(),
                ..Field::new(FieldId::from("divider1"), FieldType::Divider)
            },
            Field {
                label: "Job Information".to_string(),
                level: Some(2),
                text: Some("Job Information".to_string()),
                ..Field::new(FieldId::from("jobInfo"), FieldType::Heading)
            },
            Field {
                label: "Position Applied For".to_string(),
                required: true,
                options: opts(&[
                    ("", "Select position"),
                    ("frontend", "Frontend Developer"),
                    ("backend", "Backend Developer"),
                    ("fullstack", "Full Stack Developer"),
                    ("designer", "UI/UX Designer"),
                    ("manager", "Project Manager"),
                ]),
                ..Field::new(FieldId::from("position"), FieldType::Select)
            },
            Field {
                label: "Years of Experience".to_string(),
                required: true,
                options: opts(&[
                    ("0-1", "0-1 years"),
                    ("2-3", "2-3 years"),
                    ("4-5", "4-5 years"),
                    ("6-10", "6-10 years"),
                    ("10+", "10+ years"),
                ]),
                ..Field::new(FieldId::from("experience"), FieldType::Radio)
            },
            Field {
                label: "Expected Salary (in thousands)".to_string(),
                required: true,
                min: Some(30.0),
                max: Some(200.0),
                step: Some(5.0),
                ..Field::new(FieldId::from("salary"), FieldType::Range)
            },
            Field {
                label: "Upload Resume".to_string(),
                required: true,
                accept: Some(".pdf,.doc,.docx".to_string()),
                ..Field::new(FieldId::from("resume"), FieldType::File)
            },
            Field {
                label: "Cover Letter".to_string(),
                placeholder: "Tell us why you're perfect for this role...".to_string(),
                rows: Some(6),
                ..Field::new(FieldId::from("coverLetter"), FieldType::Textarea)
            },
        ],
        settings: settings(
            "Job Application Form",
            "Apply for exciting opportunities at our company",
            "Submit Application",
        ),
    }
}

fn feedback() -> Template {
    Template {
        id: "feedback",
        name: "Product Feedback",
        description: "Collect detailed product feedback and suggestions",
        category: TemplateCategory::Survey,
        fields: vec![
            Field {
                label: "Which product are you reviewing?".to_string(),
                required: true,
                options: opts(&[
                    ("", "Select product"),
                    ("product-a", "Product A"),
                    ("product-b", "Product B"),
                    ("product-c", "Product C"),
                ]),
                ..Field::new(FieldId::from("product"), FieldType::Select)
            },
            Field {
                label: "How long have you been using this product?".to_string(),
                required: true,
                options: opts(&[
                    ("less-week", "Less than a week"),
                    ("week-month", "1 week to 1 month"),
                    ("month-6months", "1-6 months"),
                    ("more-6months", "More than 6 months"),
                ]),
                ..Field::new(FieldId::from("usage"), FieldType::Radio)
            },
            Field {
                label: "Which features do you use most?".to_string(),
                options: opts(&[
                    ("feature1", "Feature 1"),
                    ("feature2", "Feature 2"),
                    ("feature3", "Feature 3"),
                    ("feature4", "Feature 4"),
                ]),
                ..Field::new(FieldId::from("features"), FieldType::MultiSelect)
            },
            Field {
                label: "Overall Rating".to_string(),
                required: true,
                max: Some(5.0),
                ..Field::new(FieldId::from("rating"), FieldType::Rating)
            },
            Field {
                label: "What improvements would you suggest?".to_string(),
                placeholder: "Share your ideas for making this product better...".to_string(),
                rows: Some(4),
                ..Field::new(FieldId::from("improvements"), FieldType::Textarea)
            },
            Field {
                label: "I would recommend this product to others".to_string(),
                ..Field::new(FieldId::from("recommend"), FieldType::Checkbox)
            },
        ],
        settings: settings(
            "Product Feedback Form",
            "Your feedback helps us improve our products",
            "Submit Feedback",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_ids_are_unique() {
        let templates = all();
        let mut seen = std::collections::HashSet::new();
        for t in &templates {
            assert!(seen.insert(t.id), "duplicate template id {}", t.id);
        }
        assert_eq!(templates.len(), 5);
    }

    #[test]
    fn find_by_id() {
        assert_eq!(find("contact").map(|t| t.name), Some("Contact Form"));
        assert_eq!(find("job-application").map(|t| t.fields.len()), Some(12));
        assert!(find("nope").is_none());
    }

    #[test]
    fn field_ids_are_unique_within_each_template() {
        for template in all() {
            let mut seen = std::collections::HashSet::new();
            for field in &template.fields {
                assert!(
                    seen.insert(field.id.clone()),
                    "duplicate field id in {}",
                    template.id
                );
            }
        }
    }

    #[test]
    fn choice_fields_always_carry_options() {
        for template in all() {
            for field in &template.fields {
                if field.field_type.is_choice() {
                    assert!(
                        !field.options.is_empty(),
                        "choice field {} in {} has no options",
                        field.id,
                        template.id
                    );
                }
            }
        }
    }

    #[test]
    fn templates_ship_with_fully_populated_themes() {
        for template in all() {
            assert!(!template.settings.theme.primary_color.is_empty());
            assert!(!template.settings.title.is_empty());
        }
    }
}
