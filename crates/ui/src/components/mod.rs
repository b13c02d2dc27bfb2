//! # UI Components
//!
//! Dioxus components for the Formula form builder.
//!
//! - **FormPageView**: the current page card with its submit button
//! - **FormElementView**: one element, dispatched to a per-type view
//! - **Sidebar**: the element palette
//! - **Inputs**: text, select and switch inputs shared by the views above
//!
//! ## Component Hierarchy
//!
//! ```text
//! FormPageView
//! └── FormElementView (multiple)
//!     ├── TextBlockView | InputFieldView | ChoiceView | ImageView
//!     ├── FileUploadView | StarRatingView | SectionView
//!     ├── InputTableView | ScheduleView
//!     ├── UnsupportedElement (fallback)
//!     └── ControlCluster (selected, editing)
//!
//! Sidebar
//! └── palette entries from the element catalog
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod choice_editor;
pub mod form_element;
pub mod form_page;
pub mod input_field;
pub mod input_table;
pub mod inputs;
pub mod media_upload;
pub mod schedule;
pub mod section;
pub mod sidebar;
pub mod star_rating;
pub mod text_block;

// ============================================================================
// Re-exports
// ============================================================================

pub use form_element::{FormElementView, UnsupportedElement, edit_content};
pub use form_page::FormPageView;
pub use inputs::{InputVariant, Select, SelectOption, Switch, TextArea, TextInput};
pub use sidebar::Sidebar;
pub use text_block::ElementViewProps;
