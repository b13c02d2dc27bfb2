//! Stored form templates and fill-in responses
//!
//! A [`FormTemplate`] is what the form service returns for a published form.
//! Its field types are kept as raw strings since the service may hold types
//! this build does not know; [`FieldWidget`] decides how each one is filled.

use formula_core::ElementType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Form as returned by `GET /public/forms/id/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormTemplate {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub fields: Vec<TemplateField>,
}

/// One stored field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateField {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl TemplateField {
    /// Parsed element type, if known
    pub fn element_type(&self) -> Option<ElementType> {
        self.field_type.parse().ok()
    }

    /// Options, empty when the field has none
    pub fn options(&self) -> &[String] {
        self.options.as_deref().unwrap_or_default()
    }

    /// How this field is presented in the fill-form view
    pub fn widget(&self) -> FieldWidget {
        self.element_type()
            .map(FieldWidget::for_type)
            .unwrap_or(FieldWidget::LabelOnly)
    }
}

/// Input presented for a field when filling a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldWidget {
    /// Label rendered as a heading, no input
    Heading,
    /// Label rendered as italic text, no input
    Note,
    TextInput,
    TextArea,
    DateInput,
    TimeInput,
    FilePicker,
    Radio,
    Checkboxes,
    /// Type not fillable yet
    Placeholder,
    /// Label without any input
    LabelOnly,
}

impl FieldWidget {
    pub fn for_type(element_type: ElementType) -> Self {
        match element_type {
            ElementType::Heading => FieldWidget::Heading,
            ElementType::Paragraph => FieldWidget::Note,
            ElementType::FullName
            | ElementType::Email
            | ElementType::Phone
            | ElementType::Address
            | ElementType::ShortText => FieldWidget::TextInput,
            ElementType::LongText => FieldWidget::TextArea,
            ElementType::DatePicker => FieldWidget::DateInput,
            ElementType::Time | ElementType::Appointment => FieldWidget::TimeInput,
            ElementType::FileUpload => FieldWidget::FilePicker,
            ElementType::SingleChoice => FieldWidget::Radio,
            ElementType::MultipleChoice => FieldWidget::Checkboxes,
            ElementType::StarRating
            | ElementType::ScaleRating
            | ElementType::Spinner
            | ElementType::InputTable => FieldWidget::Placeholder,
            _ => FieldWidget::LabelOnly,
        }
    }

    /// Whether the label is shown above an input (as opposed to being the content)
    pub fn has_label(self) -> bool {
        !matches!(self, FieldWidget::Heading | FieldWidget::Note)
    }
}

// ============================================================================
// Responses
// ============================================================================

/// Answer to one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseValue {
    Text(String),
    Choices(Vec<String>),
}

/// Answers keyed by field id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormResponses(BTreeMap<String, ResponseValue>);

impl FormResponses {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the answer of a field with a single value
    pub fn set_text(&mut self, field_id: &str, value: impl Into<String>) {
        self.0
            .insert(field_id.to_string(), ResponseValue::Text(value.into()));
    }

    /// Add `option` to a multi-choice answer, or take it out
    ///
    /// Checked options are kept in the order they were checked.
    pub fn toggle_choice(&mut self, field_id: &str, option: &str, checked: bool) {
        let entry = self
            .0
            .entry(field_id.to_string())
            .or_insert_with(|| ResponseValue::Choices(Vec::new()));
        if let ResponseValue::Text(_) = entry {
            *entry = ResponseValue::Choices(Vec::new());
        }
        if let ResponseValue::Choices(values) = entry {
            if checked {
                if !values.iter().any(|v| v == option) {
                    values.push(option.to_string());
                }
            } else {
                values.retain(|v| v != option);
            }
        }
    }

    pub fn get(&self, field_id: &str) -> Option<&ResponseValue> {
        self.0.get(field_id)
    }

    /// Whether a choice is currently part of a field's answer
    pub fn is_chosen(&self, field_id: &str, option: &str) -> bool {
        match self.0.get(field_id) {
            Some(ResponseValue::Choices(values)) => values.iter().any(|v| v == option),
            Some(ResponseValue::Text(value)) => value == option,
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_template() -> FormTemplate {
        serde_json::from_str(
            r#"{
                "title": "Feedback",
                "description": "Tell us",
                "fields": [
                    {"id": "a", "label": "Welcome", "type": "heading", "required": false},
                    {"id": "b", "label": "Colour", "type": "single_choice", "required": false, "options": ["Red", "Blue"]},
                    {"id": "c", "label": "Mystery", "type": "hologram"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_template_parses() {
        let template = sample_template();
        assert_eq!(template.title, "Feedback");
        assert_eq!(template.fields.len(), 3);
        assert_eq!(template.fields[1].options(), &["Red", "Blue"]);
        assert!(template.fields[0].options().is_empty());
    }

    #[test]
    fn test_field_widgets() {
        let template = sample_template();
        let widgets: Vec<_> = template.fields.iter().map(TemplateField::widget).collect();
        assert_eq!(
            widgets,
            vec![FieldWidget::Heading, FieldWidget::Radio, FieldWidget::LabelOnly]
        );
        assert!(!FieldWidget::Heading.has_label());
        assert!(FieldWidget::Radio.has_label());
    }

    #[test]
    fn test_widget_per_type() {
        assert_eq!(FieldWidget::for_type(ElementType::Phone), FieldWidget::TextInput);
        assert_eq!(FieldWidget::for_type(ElementType::LongText), FieldWidget::TextArea);
        assert_eq!(FieldWidget::for_type(ElementType::Appointment), FieldWidget::TimeInput);
        assert_eq!(FieldWidget::for_type(ElementType::InputTable), FieldWidget::Placeholder);
        assert_eq!(FieldWidget::for_type(ElementType::Divider), FieldWidget::LabelOnly);
    }

    #[test]
    fn test_set_text_replaces() {
        let mut responses = FormResponses::new();
        responses.set_text("a", "first");
        responses.set_text("a", "second");
        assert_eq!(responses.len(), 1);
        assert_eq!(
            responses.get("a"),
            Some(&ResponseValue::Text("second".to_string()))
        );
    }

    #[test]
    fn test_toggle_choice() {
        let mut responses = FormResponses::new();
        responses.toggle_choice("q", "B", true);
        responses.toggle_choice("q", "A", true);
        responses.toggle_choice("q", "A", true);
        assert_eq!(
            responses.get("q"),
            Some(&ResponseValue::Choices(vec!["B".to_string(), "A".to_string()]))
        );

        responses.toggle_choice("q", "B", false);
        assert!(!responses.is_chosen("q", "B"));
        assert!(responses.is_chosen("q", "A"));
    }

    #[test]
    fn test_responses_serialize_flat() {
        let mut responses = FormResponses::new();
        responses.set_text("name", "Ada");
        responses.toggle_choice("langs", "Rust", true);
        let json = serde_json::to_value(&responses).unwrap();
        assert_eq!(json, serde_json::json!({"langs": ["Rust"], "name": "Ada"}));
    }
}
