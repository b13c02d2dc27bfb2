//! Submission payload
//!
//! The JSON body sent to the form service when a page is submitted. Built
//! from the current page only, at submit time.

use crate::element::Element;
use crate::page::FormPage;
use formula_core::{ElementId, ElementType};
use serde::{Deserialize, Serialize};

/// Title sent with every submitted form
pub const FORM_TITLE: &str = "Untitled Form";

/// Description sent with every submitted form
pub const FORM_DESCRIPTION: &str = "Form created with Formula";

/// Label used for fields without a title
pub const UNTITLED_LABEL: &str = "Untitled";

/// Body of `POST /public/forms`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub title: String,
    pub description: String,
    #[serde(rename = "ownerId")]
    pub owner_id: String,
    pub fields: Vec<PayloadField>,
}

/// One submitted field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadField {
    pub id: ElementId,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: ElementType,
    pub required: bool,
    /// Only present for choice types
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

impl From<&Element> for PayloadField {
    fn from(element: &Element) -> Self {
        let options = element
            .element_type
            .is_choice()
            .then(|| element.content.options().unwrap_or_default().to_vec());

        Self {
            id: element.id,
            label: element
                .content
                .title()
                .unwrap_or(UNTITLED_LABEL)
                .to_string(),
            field_type: element.element_type,
            required: false,
            options,
        }
    }
}

impl SubmissionPayload {
    /// Build the payload for a page on behalf of `owner_id`
    pub fn from_page(page: &FormPage, owner_id: impl Into<String>) -> Self {
        Self {
            title: FORM_TITLE.to_string(),
            description: FORM_DESCRIPTION.to_string(),
            owner_id: owner_id.into(),
            fields: page.elements.iter().map(PayloadField::from).collect(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementPatch;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_choice_and_heading_payload() {
        let mut page = FormPage::new();
        let mut choice = Element::new(ElementType::SingleChoice);
        choice.apply(ElementPatch::content(
            choice
                .content
                .clone()
                .with_title("Pick")
                .with_options(vec!["A".to_string(), "B".to_string()]),
        ));
        let heading = Element::new(ElementType::Heading);
        let (choice_id, heading_id) = (choice.id, heading.id);
        page.push(choice);
        page.push(heading);

        let payload = SubmissionPayload::from_page(&page, "user-1");
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(
            value,
            json!({
                "title": FORM_TITLE,
                "description": FORM_DESCRIPTION,
                "ownerId": "user-1",
                "fields": [
                    {
                        "id": choice_id.to_string(),
                        "label": "Pick",
                        "type": "single_choice",
                        "required": false,
                        "options": ["A", "B"],
                    },
                    {
                        "id": heading_id.to_string(),
                        "label": "Heading",
                        "type": "heading",
                        "required": false,
                    },
                ],
            })
        );
    }

    #[test]
    fn test_untitled_label_fallback() {
        let mut page = FormPage::new();
        page.push(Element::new(ElementType::Email));
        page.push(Element::new(ElementType::Divider));

        let payload = SubmissionPayload::from_page(&page, "owner");
        let labels: Vec<_> = payload.fields.iter().map(|f| f.label.as_str()).collect();
        assert_eq!(labels, vec!["Untitled", "Untitled"]);
    }

    #[test]
    fn test_empty_options_still_sent_for_choice() {
        let mut page = FormPage::new();
        let mut dropdown = Element::new(ElementType::Dropdown);
        dropdown.content = dropdown.content.clone().with_options(Vec::new());
        page.push(dropdown);

        let payload = SubmissionPayload::from_page(&page, "owner");
        assert_eq!(payload.fields[0].options, Some(Vec::new()));
    }

    #[test]
    fn test_required_always_false() {
        let mut page = FormPage::new();
        let mut element = Element::new(ElementType::ShortText);
        element.apply(ElementPatch::required(true));
        page.push(element);

        let payload = SubmissionPayload::from_page(&page, "owner");
        assert!(!payload.fields[0].required);
        assert!(payload.fields[0].options.is_none());
    }

    #[test]
    fn test_empty_page() {
        let payload = SubmissionPayload::from_page(&FormPage::new(), "owner");
        assert!(payload.fields.is_empty());
    }
}
