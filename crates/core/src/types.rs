//! Core types used throughout Formula
//!
//! This module contains the identifier aliases and the closed enumeration of
//! form element types shared by the document model, the API client and the UI.

use crate::error::FormError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Unique Identifiers
// ============================================================================

/// Type alias for element unique identifiers
pub type ElementId = uuid::Uuid;

/// Type alias for page unique identifiers
pub type PageId = uuid::Uuid;

/// Type alias for table column/row identifiers
pub type CellId = uuid::Uuid;

// ============================================================================
// Element Type
// ============================================================================

/// Every kind of element that can be placed on a form page
///
/// Serialized as the snake_case tag (`"short_text"`, `"input_table"`, ...),
/// which is also the `type` value sent to the form API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    Heading,
    ShortText,
    LongText,
    Paragraph,
    Dropdown,
    SingleChoice,
    MultipleChoice,
    Image,
    FileUpload,
    Divider,
    StarRating,
    SectionCollapse,
    InputTable,
    FullName,
    Email,
    Address,
    Phone,
    DatePicker,
    Appointment,
    Time,
    Captcha,
    Spinner,
    ScaleRating,
    PageBreak,
    Signature,
}

impl ElementType {
    /// All element types, in declaration order
    pub const ALL: [ElementType; 25] = [
        ElementType::Heading,
        ElementType::ShortText,
        ElementType::LongText,
        ElementType::Paragraph,
        ElementType::Dropdown,
        ElementType::SingleChoice,
        ElementType::MultipleChoice,
        ElementType::Image,
        ElementType::FileUpload,
        ElementType::Divider,
        ElementType::StarRating,
        ElementType::SectionCollapse,
        ElementType::InputTable,
        ElementType::FullName,
        ElementType::Email,
        ElementType::Address,
        ElementType::Phone,
        ElementType::DatePicker,
        ElementType::Appointment,
        ElementType::Time,
        ElementType::Captcha,
        ElementType::Spinner,
        ElementType::ScaleRating,
        ElementType::PageBreak,
        ElementType::Signature,
    ];

    /// The wire tag for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            ElementType::Heading => "heading",
            ElementType::ShortText => "short_text",
            ElementType::LongText => "long_text",
            ElementType::Paragraph => "paragraph",
            ElementType::Dropdown => "dropdown",
            ElementType::SingleChoice => "single_choice",
            ElementType::MultipleChoice => "multiple_choice",
            ElementType::Image => "image",
            ElementType::FileUpload => "file_upload",
            ElementType::Divider => "divider",
            ElementType::StarRating => "star_rating",
            ElementType::SectionCollapse => "section_collapse",
            ElementType::InputTable => "input_table",
            ElementType::FullName => "full_name",
            ElementType::Email => "email",
            ElementType::Address => "address",
            ElementType::Phone => "phone",
            ElementType::DatePicker => "date_picker",
            ElementType::Appointment => "appointment",
            ElementType::Time => "time",
            ElementType::Captcha => "captcha",
            ElementType::Spinner => "spinner",
            ElementType::ScaleRating => "scale_rating",
            ElementType::PageBreak => "page_break",
            ElementType::Signature => "signature",
        }
    }

    /// Human-readable name, e.g. `"Short Text"` for `short_text`
    pub fn display_name(&self) -> String {
        self.as_str()
            .split('_')
            .map(capitalize)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether this type carries an ordered list of options
    pub fn is_choice(&self) -> bool {
        matches!(
            self,
            ElementType::Dropdown | ElementType::SingleChoice | ElementType::MultipleChoice
        )
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ElementType {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ElementType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FormError::UnknownElementType(s.to_string()))
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ============================================================================
// Element Category
// ============================================================================

/// Sidebar tab an element type is listed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementCategory {
    /// Form fields and text blocks
    #[default]
    Basic,
    /// Media, ratings, tables and layout helpers
    Widgets,
}

impl ElementCategory {
    /// All sidebar categories in tab order
    pub const ALL: [ElementCategory; 2] = [ElementCategory::Basic, ElementCategory::Widgets];

    /// Tab label
    pub fn label(&self) -> &'static str {
        match self {
            ElementCategory::Basic => "BASIC",
            ElementCategory::Widgets => "WIDGETS",
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_element_type_round_trips_through_str() {
        for ty in ElementType::ALL {
            assert_eq!(ty.as_str().parse::<ElementType>().unwrap(), ty);
        }
    }

    #[test]
    fn test_unknown_element_type() {
        let err = "number".parse::<ElementType>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown element type: 'number'");
    }

    #[test]
    fn test_serde_uses_snake_case_tag() {
        let json = serde_json::to_string(&ElementType::InputTable).unwrap();
        assert_eq!(json, "\"input_table\"");

        let ty: ElementType = serde_json::from_str("\"single_choice\"").unwrap();
        assert_eq!(ty, ElementType::SingleChoice);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(ElementType::ShortText.display_name(), "Short Text");
        assert_eq!(ElementType::Time.display_name(), "Time");
        assert_eq!(ElementType::SectionCollapse.display_name(), "Section Collapse");
    }

    #[test]
    fn test_choice_types() {
        let choices: Vec<_> = ElementType::ALL.iter().filter(|t| t.is_choice()).collect();
        assert_eq!(
            choices,
            vec![
                &ElementType::Dropdown,
                &ElementType::SingleChoice,
                &ElementType::MultipleChoice
            ]
        );
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(ElementCategory::Basic.label(), "BASIC");
        assert_eq!(ElementCategory::Widgets.label(), "WIDGETS");
        assert_eq!(ElementCategory::default(), ElementCategory::Basic);
    }
}
