//! # Formula UI
//!
//! Dioxus Desktop UI for Formula.
//!
//! This crate provides the form builder itself and the views around it.
//!
//! ## Features
//!
//! - Element palette with BASIC and WIDGETS tabs
//! - Inline editing of the selected element, multi-page forms, preview mode
//! - Submission of the current page to the form service
//! - Show/hide rule editor
//! - Filling in a stored form by id
//!

// ============================================================================
// Modules
// ============================================================================

pub mod app;
pub mod components;
pub mod file_ops;
pub mod pages;
pub mod state;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use formula_client;
pub use formula_core;
pub use formula_ir;

// Re-export main components
pub use app::App;
pub use file_ops::{PickKind, pick_file_name};
pub use pages::{BuilderPage, ConditionsPage, FillFormPage, LandingPage};
pub use state::{
    APP_STATE, AppState, AppView, BuilderTab, Notice, StatusLevel, StatusMessage, UiState,
};

// Re-export components
pub use components::{
    FormElementView, FormPageView, Select, SelectOption, Sidebar, Switch, TextArea, TextInput,
};

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Formula";

/// Application display title
pub const TITLE: &str = "Formula - Form Builder";

/// CSS styles for the application, embedded at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Formula desktop application
///
/// # Example
///
/// ```rust,ignore
/// fn main() {
///     formula_ui::launch();
/// }
/// ```
pub fn launch() {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    // Build custom head with embedded CSS
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(TITLE)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 860.0))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(800.0, 600.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .launch(App);
}

// ============================================================================
// Tests
// ============================================================================
