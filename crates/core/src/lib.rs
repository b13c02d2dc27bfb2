//! # Formula Core
//!
//! Core types, the element catalog, and error handling for Formula.
//!
//! This crate provides the foundational building blocks used throughout
//! the workspace:
//!
//! - **Types**: Element type enumeration, categories, identifier aliases
//! - **Catalog**: Static palette of element types with icons and categories
//! - **Errors**: Unified error handling with `FormError` and `FormResult`
//!

pub mod catalog;
pub mod error;
pub mod types;

// Re-export commonly used items at crate root
pub use catalog::{CATALOG, CatalogEntry};
pub use error::{FormError, FormResult, ResultExt};
pub use types::{CellId, ElementCategory, ElementId, ElementType, PageId};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
