//! # Formula IR
//!
//! The in-memory model of a form under construction and the shapes it takes
//! on the wire.
//!
//! ## Core Concepts
//!
//! - **Element**: one field or decorative block, with typed content per kind
//! - **FormPage**: an ordered list of elements
//! - **FormDocument**: the pages plus editor state (current page, selection,
//!   sidebar, preview mode)
//! - **SubmissionPayload**: what gets posted to the form service
//! - **FormTemplate**: what the form service hands back for filling in
//! - **ConditionSet**: show/hide rule descriptors
//!

pub mod conditions;
pub mod document;
pub mod element;
pub mod page;
pub mod payload;
pub mod template;

pub use conditions::{
    ACTION_OPTIONS, AVAILABLE_FIELDS, ConditionField, ConditionFieldType, ConditionRule,
    ConditionSet, RuleKey,
};
pub use document::{EditorMode, FormDocument};
pub use element::{
    APPOINTMENT_SLOTS, Element, ElementContent, ElementPatch, MAX_RATING, TableColumn, TableRow,
};
pub use page::FormPage;
pub use payload::{PayloadField, SubmissionPayload};
pub use template::{FieldWidget, FormResponses, FormTemplate, ResponseValue, TemplateField};

// Re-export core types that are commonly used with IR
pub use formula_core::{ElementCategory, ElementId, ElementType, FormError, FormResult};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient re-exports for common usage
pub mod prelude {
    pub use crate::{
        EditorMode, Element, ElementContent, ElementId, ElementPatch, ElementType, FormDocument,
        FormError, FormPage, FormResult, SubmissionPayload,
    };
}
