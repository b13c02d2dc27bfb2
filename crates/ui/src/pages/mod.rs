//! Page Components for Formula
//!
//! Each page is one top-level view of the application.
//!
//! ## Available Pages
//!
//! - **LandingPage**: Sign-in status, entry to the builder, open a form by id
//! - **BuilderPage**: The form builder with palette, page and navigator
//! - **ConditionsPage**: Show/hide rule editor
//! - **FillFormPage**: Fill in a stored form
//!

pub mod builder;
pub mod conditions;
pub mod fill_form;
pub mod landing;

// Re-export page components for convenience
pub use builder::BuilderPage;
pub use conditions::ConditionsPage;
pub use fill_form::FillFormPage;
pub use landing::LandingPage;
