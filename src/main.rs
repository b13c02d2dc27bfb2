//! Formula
//!
//! Drag-and-drop form builder.
//!
//! This is the main entry point for the Dioxus Desktop application.

use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() {
    // Initialize logging, honouring RUST_LOG
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::info!("Formula v{}", formula_ui::VERSION);

    // Launch the Dioxus desktop application
    formula_ui::launch();
}
