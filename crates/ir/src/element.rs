//! Form elements and their typed content
//!
//! Each element pairs an [`ElementType`] with an [`ElementContent`] variant
//! that declares exactly the fields that type uses. New elements get their
//! content from [`ElementContent::default_for`]; edits produce a new content
//! value which is committed wholesale through an [`ElementPatch`].

use chrono::NaiveDate;
use formula_core::{CellId, ElementId, ElementType};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Defaults
// ============================================================================

/// Number of stars offered by a star rating
pub const MAX_RATING: u8 = 5;

/// Appointment slots offered once a date is picked
pub const APPOINTMENT_SLOTS: [&str; 6] = [
    "9:00 AM", "10:00 AM", "11:00 AM", "2:00 PM", "3:00 PM", "4:00 PM",
];

/// Column headers of a freshly added input table
pub const DEFAULT_TABLE_COLUMNS: [&str; 4] = [
    "Not Satisfied",
    "Somewhat Satisfied",
    "Satisfied",
    "Any thoughts?",
];

/// Row labels of a freshly added input table
pub const DEFAULT_TABLE_ROWS: [&str; 4] = [
    "Service Quality",
    "Cleanliness",
    "Responsiveness",
    "Friendliness",
];

const PARAGRAPH_BODY: &str = "This is a paragraph text block where you can add longer text content. Edit this to provide instructions or information to your form users.";

const SECTION_BODY: &str = "Section content goes here. You can add any information that should be collapsed by default.";

/// Label given to the option appended at position `index` (zero-based)
pub fn default_option_label(index: usize) -> String {
    format!("Option {}", index + 1)
}

/// Title shown when an element has no title of its own
pub fn default_title(element_type: ElementType) -> String {
    let title = match element_type {
        ElementType::Heading => "Heading",
        ElementType::ShortText => "Short Text",
        ElementType::LongText => "Long Text",
        ElementType::Paragraph => "Paragraph Heading",
        ElementType::Dropdown => "Select an option",
        ElementType::SingleChoice => "Select one option",
        ElementType::MultipleChoice => "Select multiple options",
        ElementType::FileUpload => "File Upload",
        ElementType::Image => "Image",
        ElementType::StarRating => "Rate your experience",
        ElementType::InputTable => "Type a question",
        ElementType::SectionCollapse => "Collapsible Section",
        ElementType::Appointment => "Appointment",
        ElementType::FullName => "Full Name",
        ElementType::Email => "Email",
        ElementType::Address => "Address",
        ElementType::Phone => "Phone Number",
        ElementType::DatePicker => "Date",
        other => return other.display_name(),
    };
    title.to_string()
}

/// Subheader/body shown when a text block has none of its own
pub fn default_subheader(element_type: ElementType) -> &'static str {
    match element_type {
        ElementType::Heading => "Type a subheader",
        ElementType::Paragraph => PARAGRAPH_BODY,
        ElementType::SectionCollapse => SECTION_BODY,
        _ => "",
    }
}

/// Placeholder shown in the decorative input of a text-like element
pub fn default_placeholder(element_type: ElementType) -> &'static str {
    match element_type {
        ElementType::ShortText => "Enter text here",
        ElementType::LongText => "Enter detailed text here",
        ElementType::FullName => "Enter your full name",
        ElementType::Email => "Enter your email",
        ElementType::Phone => "(000) 000-0000",
        ElementType::Address => "Street Address",
        _ => "",
    }
}

/// Placeholder image URL derived from a picked file name
///
/// No upload happens; the URL only carries the name so the builder has
/// something to show.
pub fn placeholder_image_url(file_name: &str) -> String {
    format!(
        "https://via.placeholder.com/800x400?text={}",
        urlencoding::encode(file_name)
    )
}

// ============================================================================
// Table Cells
// ============================================================================

/// Column of an input table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableColumn {
    pub id: CellId,
    pub header: String,
}

impl TableColumn {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            header: header.into(),
        }
    }
}

/// Row of an input table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub id: CellId,
    pub label: String,
}

impl TableRow {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
        }
    }
}

// ============================================================================
// Element Content
// ============================================================================

/// Type-dependent content of an element
///
/// `None` text fields fall back to the per-type defaults at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElementContent {
    /// Heading and paragraph blocks
    TextBlock {
        title: Option<String>,
        subheader: Option<String>,
    },
    /// Single or multi-line inputs and contact fields
    Input {
        title: Option<String>,
        placeholder: Option<String>,
    },
    /// Dropdown, single and multiple choice
    Choice {
        title: Option<String>,
        options: Vec<String>,
    },
    /// Picked image, shown through a placeholder URL
    Image {
        title: Option<String>,
        image_url: Option<String>,
    },
    /// Picked file, stored by name only
    File {
        title: Option<String>,
        file_url: Option<String>,
    },
    /// Star rating, `0..=MAX_RATING`
    Rating { title: Option<String>, rating: u8 },
    /// Collapsible section with a body
    Section {
        title: Option<String>,
        subheader: Option<String>,
        expanded: bool,
    },
    /// Matrix question with columns and rows
    Table {
        title: Option<String>,
        columns: Vec<TableColumn>,
        rows: Vec<TableRow>,
    },
    /// Date picker and appointment
    Schedule {
        title: Option<String>,
        selected_date: Option<NaiveDate>,
        selected_time: Option<String>,
    },
    /// Everything without dedicated content
    Plain { title: Option<String> },
}

impl ElementContent {
    /// Content a freshly added element of `element_type` starts with
    pub fn default_for(element_type: ElementType) -> Self {
        let title = Some(default_title(element_type));
        match element_type {
            ElementType::Heading | ElementType::Paragraph => ElementContent::TextBlock {
                title,
                subheader: Some(default_subheader(element_type).to_string()),
            },
            ElementType::ShortText | ElementType::LongText => ElementContent::Input {
                title,
                placeholder: Some(default_placeholder(element_type).to_string()),
            },
            ElementType::FullName
            | ElementType::Email
            | ElementType::Address
            | ElementType::Phone => ElementContent::Input {
                title: None,
                placeholder: None,
            },
            ElementType::Dropdown | ElementType::SingleChoice | ElementType::MultipleChoice => {
                ElementContent::Choice {
                    title,
                    options: (0..3).map(default_option_label).collect(),
                }
            }
            ElementType::Image => ElementContent::Image {
                title,
                image_url: None,
            },
            ElementType::FileUpload => ElementContent::File {
                title,
                file_url: None,
            },
            ElementType::StarRating => ElementContent::Rating { title, rating: 0 },
            ElementType::SectionCollapse => ElementContent::Section {
                title,
                subheader: Some("Click to expand or collapse this section".to_string()),
                expanded: false,
            },
            ElementType::InputTable => ElementContent::Table {
                title,
                columns: DEFAULT_TABLE_COLUMNS.iter().map(|h| TableColumn::new(*h)).collect(),
                rows: DEFAULT_TABLE_ROWS.iter().map(|l| TableRow::new(*l)).collect(),
            },
            ElementType::Appointment => ElementContent::Schedule {
                title,
                selected_date: None,
                selected_time: None,
            },
            ElementType::DatePicker => ElementContent::Schedule {
                title: None,
                selected_date: None,
                selected_time: None,
            },
            _ => ElementContent::Plain { title: None },
        }
    }

    /// Stored title, treating an empty string as absent
    pub fn title(&self) -> Option<&str> {
        let title = match self {
            ElementContent::TextBlock { title, .. }
            | ElementContent::Input { title, .. }
            | ElementContent::Choice { title, .. }
            | ElementContent::Image { title, .. }
            | ElementContent::File { title, .. }
            | ElementContent::Rating { title, .. }
            | ElementContent::Section { title, .. }
            | ElementContent::Table { title, .. }
            | ElementContent::Schedule { title, .. }
            | ElementContent::Plain { title } => title,
        };
        title.as_deref().filter(|t| !t.is_empty())
    }

    /// Stored subheader, treating an empty string as absent
    pub fn subheader(&self) -> Option<&str> {
        match self {
            ElementContent::TextBlock { subheader, .. }
            | ElementContent::Section { subheader, .. } => {
                subheader.as_deref().filter(|s| !s.is_empty())
            }
            _ => None,
        }
    }

    /// Stored placeholder, treating an empty string as absent
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            ElementContent::Input { placeholder, .. } => {
                placeholder.as_deref().filter(|p| !p.is_empty())
            }
            _ => None,
        }
    }

    /// Options of a choice element
    pub fn options(&self) -> Option<&[String]> {
        match self {
            ElementContent::Choice { options, .. } => Some(options),
            _ => None,
        }
    }

    // ========================================================================
    // Edits (each returns the edited copy; mismatched variants are unchanged)
    // ========================================================================

    /// Replace the title
    pub fn with_title(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        match &mut self {
            ElementContent::TextBlock { title, .. }
            | ElementContent::Input { title, .. }
            | ElementContent::Choice { title, .. }
            | ElementContent::Image { title, .. }
            | ElementContent::File { title, .. }
            | ElementContent::Rating { title, .. }
            | ElementContent::Section { title, .. }
            | ElementContent::Table { title, .. }
            | ElementContent::Schedule { title, .. }
            | ElementContent::Plain { title } => *title = Some(value),
        }
        self
    }

    /// Replace the subheader of a text block or section
    pub fn with_subheader(mut self, value: impl Into<String>) -> Self {
        if let ElementContent::TextBlock { subheader, .. } | ElementContent::Section { subheader, .. } =
            &mut self
        {
            *subheader = Some(value.into());
        }
        self
    }

    /// Replace the whole option list of a choice element
    pub fn with_options(mut self, value: Vec<String>) -> Self {
        if let ElementContent::Choice { options, .. } = &mut self {
            *options = value;
        }
        self
    }

    /// Set the star rating, capped at [`MAX_RATING`]
    pub fn with_rating(mut self, value: u8) -> Self {
        if let ElementContent::Rating { rating, .. } = &mut self {
            *rating = value.min(MAX_RATING);
        }
        self
    }

    /// Flip the expanded flag of a collapsible section
    pub fn toggle_expanded(mut self) -> Self {
        if let ElementContent::Section { expanded, .. } = &mut self {
            *expanded = !*expanded;
        }
        self
    }

    /// Record a picked file: images get a placeholder URL and take the file
    /// name as title, uploads keep the file name
    pub fn with_picked_file(mut self, file_name: &str) -> Self {
        match &mut self {
            ElementContent::Image { title, image_url } => {
                *image_url = Some(placeholder_image_url(file_name));
                *title = Some(file_name.to_string());
            }
            ElementContent::File { file_url, .. } => {
                *file_url = Some(file_name.to_string());
            }
            _ => {}
        }
        self
    }

    /// Forget the picked image or file
    pub fn without_picked_file(mut self) -> Self {
        match &mut self {
            ElementContent::Image { image_url, .. } => *image_url = None,
            ElementContent::File { file_url, .. } => *file_url = None,
            _ => {}
        }
        self
    }

    /// Set the picked date of a schedule element
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        if let ElementContent::Schedule { selected_date, .. } = &mut self {
            *selected_date = Some(date);
        }
        self
    }

    /// Set the picked appointment slot
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        if let ElementContent::Schedule { selected_time, .. } = &mut self {
            *selected_time = Some(time.into());
        }
        self
    }

    /// Append a column labelled from the current count
    pub fn with_added_column(mut self) -> Self {
        if let ElementContent::Table { columns, .. } = &mut self {
            let header = format!("Column {}", columns.len() + 1);
            columns.push(TableColumn::new(header));
        }
        self
    }

    /// Remove a column, keeping the order of the rest
    pub fn without_column(mut self, id: CellId) -> Self {
        if let ElementContent::Table { columns, .. } = &mut self {
            columns.retain(|c| c.id != id);
        }
        self
    }

    /// Rename a column in place
    pub fn with_column_header(mut self, id: CellId, header: impl Into<String>) -> Self {
        if let ElementContent::Table { columns, .. } = &mut self {
            if let Some(column) = columns.iter_mut().find(|c| c.id == id) {
                column.header = header.into();
            }
        }
        self
    }

    /// Append a row labelled from the current count
    pub fn with_added_row(mut self) -> Self {
        if let ElementContent::Table { rows, .. } = &mut self {
            let label = format!("Row {}", rows.len() + 1);
            rows.push(TableRow::new(label));
        }
        self
    }

    /// Remove a row, keeping the order of the rest
    pub fn without_row(mut self, id: CellId) -> Self {
        if let ElementContent::Table { rows, .. } = &mut self {
            rows.retain(|r| r.id != id);
        }
        self
    }

    /// Rename a row in place
    pub fn with_row_label(mut self, id: CellId, label: impl Into<String>) -> Self {
        if let ElementContent::Table { rows, .. } = &mut self {
            if let Some(row) = rows.iter_mut().find(|r| r.id == id) {
                row.label = label.into();
            }
        }
        self
    }
}

// ============================================================================
// Element
// ============================================================================

/// One field or decorative unit on a form page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Unique identifier, fixed at creation
    pub id: ElementId,

    /// Element type
    #[serde(rename = "type")]
    pub element_type: ElementType,

    /// Type-dependent content
    pub content: ElementContent,

    /// Declared but not enforced anywhere
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl Element {
    /// Create an element with the default content for its type
    pub fn new(element_type: ElementType) -> Self {
        Self {
            id: Uuid::new_v4(),
            element_type,
            content: ElementContent::default_for(element_type),
            required: None,
        }
    }

    /// Title to display (stored title or the per-type default)
    pub fn display_title(&self) -> String {
        self.content
            .title()
            .map(str::to_string)
            .unwrap_or_else(|| default_title(self.element_type))
    }

    /// Subheader to display (stored subheader or the per-type default)
    pub fn display_subheader(&self) -> &str {
        self.content
            .subheader()
            .unwrap_or_else(|| default_subheader(self.element_type))
    }

    /// Placeholder to display (stored placeholder or the per-type default)
    pub fn display_placeholder(&self) -> &str {
        self.content
            .placeholder()
            .unwrap_or_else(|| default_placeholder(self.element_type))
    }

    /// Apply a patch, replacing each field it carries
    pub fn apply(&mut self, patch: ElementPatch) {
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(required) = patch.required {
            self.required = Some(required);
        }
    }
}

// ============================================================================
// Element Patch
// ============================================================================

/// Explicit top-level update of an element
///
/// Content is replaced wholesale: callers build the complete new content
/// (usually through the `ElementContent::with_*` edits on a clone of the
/// current content) rather than sending individual keys.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementPatch {
    pub content: Option<ElementContent>,
    pub required: Option<bool>,
}

impl ElementPatch {
    /// Patch replacing the content
    pub fn content(content: ElementContent) -> Self {
        Self {
            content: Some(content),
            required: None,
        }
    }

    /// Patch setting the required flag
    pub fn required(required: bool) -> Self {
        Self {
            content: None,
            required: Some(required),
        }
    }

    /// Whether the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.required.is_none()
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
    fn test_heading_defaults() {
        let element = Element::new(ElementType::Heading);
        assert_eq!(
            element.content,
            ElementContent::TextBlock {
                title: Some("Heading".to_string()),
                subheader: Some("Type a subheader".to_string()),
            }
        );
    }

    #[test]
    fn test_choice_defaults() {
        for ty in [
            ElementType::Dropdown,
            ElementType::SingleChoice,
            ElementType::MultipleChoice,
        ] {
            let element = Element::new(ty);
            assert_eq!(
                element.content.options().unwrap(),
                &["Option 1", "Option 2", "Option 3"]
            );
        }
        assert_eq!(
            Element::new(ElementType::SingleChoice).display_title(),
            "Select one option"
        );
    }

    #[test]
    fn test_table_defaults() {
        let element = Element::new(ElementType::InputTable);
        let ElementContent::Table { columns, rows, .. } = &element.content else {
            panic!("expected table content");
        };
        let headers: Vec<_> = columns.iter().map(|c| c.header.as_str()).collect();
        let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(headers, DEFAULT_TABLE_COLUMNS);
        assert_eq!(labels, DEFAULT_TABLE_ROWS);
    }

    #[test]
    fn test_added_column_label_follows_count() {
        let content = Element::new(ElementType::InputTable).content.with_added_column();
        let ElementContent::Table { columns, .. } = &content else {
            panic!("expected table content");
        };
        assert_eq!(columns.len(), 5);
        assert_eq!(columns[4].header, "Column 5");
    }

    #[test]
    fn test_removed_then_added_row_reuses_label() {
        let content = Element::new(ElementType::InputTable).content;
        let ElementContent::Table { rows, .. } = &content else {
            panic!("expected table content");
        };
        let second = rows[1].id;

        let content = content.without_row(second).with_added_row();
        let ElementContent::Table { rows, .. } = &content else {
            panic!("expected table content");
        };
        let labels: Vec<_> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Service Quality", "Responsiveness", "Friendliness", "Row 4"]
        );
    }

    #[test]
    fn test_rename_column_in_place() {
        let content = Element::new(ElementType::InputTable).content;
        let ElementContent::Table { columns, .. } = &content else {
            panic!("expected table content");
        };
        let first = columns[0].id;

        let content = content.with_column_header(first, "Unhappy");
        let ElementContent::Table { columns, .. } = &content else {
            panic!("expected table content");
        };
        assert_eq!(columns[0].header, "Unhappy");
        assert_eq!(columns[1].header, "Somewhat Satisfied");
    }

    #[test]
    fn test_display_fallbacks() {
        let element = Element::new(ElementType::FullName);
        assert_eq!(element.display_title(), "Full Name");
        assert_eq!(element.display_placeholder(), "Enter your full name");

        let mut element = Element::new(ElementType::Heading);
        element.content = element.content.clone().with_title("");
        assert_eq!(element.display_title(), "Heading");

        let element = Element::new(ElementType::Captcha);
        assert_eq!(element.display_title(), "Captcha");
    }

    #[test]
    fn test_rating_is_capped() {
        let content = Element::new(ElementType::StarRating).content.with_rating(9);
        assert_eq!(
            content,
            ElementContent::Rating {
                title: Some("Rate your experience".to_string()),
                rating: MAX_RATING,
            }
        );
    }

    #[test]
    fn test_toggle_expanded() {
        let content = Element::new(ElementType::SectionCollapse).content;
        let content = content.toggle_expanded();
        assert!(matches!(content, ElementContent::Section { expanded: true, .. }));
        let content = content.toggle_expanded();
        assert!(matches!(content, ElementContent::Section { expanded: false, .. }));
    }

    #[test]
    fn test_picked_image_gets_placeholder_url() {
        let content = Element::new(ElementType::Image)
            .content
            .with_picked_file("my photo.png");
        assert_eq!(
            content,
            ElementContent::Image {
                title: Some("my photo.png".to_string()),
                image_url: Some(
                    "https://via.placeholder.com/800x400?text=my%20photo.png".to_string()
                ),
            }
        );

        let cleared = content.without_picked_file();
        assert!(matches!(cleared, ElementContent::Image { image_url: None, .. }));
    }

    #[test]
    fn test_picked_file_keeps_name() {
        let content = Element::new(ElementType::FileUpload)
            .content
            .with_picked_file("report.pdf");
        assert_eq!(
            content,
            ElementContent::File {
                title: Some("File Upload".to_string()),
                file_url: Some("report.pdf".to_string()),
            }
        );
    }

    #[test]
    fn test_mismatched_edit_is_ignored() {
        let content = Element::new(ElementType::Heading).content;
        assert_eq!(content.clone().with_rating(3), content);
        assert_eq!(content.clone().with_options(vec!["A".into()]), content);
    }

    #[test]
    fn test_schedule_edits() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 14).unwrap();
        let content = Element::new(ElementType::Appointment)
            .content
            .with_date(date)
            .with_time(APPOINTMENT_SLOTS[3]);
        assert_eq!(
            content,
            ElementContent::Schedule {
                title: Some("Appointment".to_string()),
                selected_date: Some(date),
                selected_time: Some("2:00 PM".to_string()),
            }
        );
    }

    #[test]
    fn test_apply_patch() {
        let mut element = Element::new(ElementType::ShortText);
        assert!(ElementPatch::default().is_empty());

        element.apply(ElementPatch::required(true));
        assert_eq!(element.required, Some(true));

        let content = element.content.clone().with_title("Your name");
        element.apply(ElementPatch::content(content));
        assert_eq!(element.display_title(), "Your name");
        assert_eq!(element.display_placeholder(), "Enter text here");
    }

    #[test]
    fn test_element_serializes_type_tag() {
        let element = Element::new(ElementType::Divider);
        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["type"], "divider");
        assert_eq!(json["content"]["kind"], "plain");
        assert!(json.get("required").is_none());
    }
}
