//! Main Application Component for Formula
//!
//! The root Dioxus component: the active view, the status line and the
//! modal notice overlay.

use dioxus::prelude::*;

use crate::pages::{BuilderPage, ConditionsPage, FillFormPage, LandingPage};
use crate::state::{APP_STATE, AppView, StatusLevel, use_current_view};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    use_effect(|| {
        tracing::info!("Formula UI initialized");
    });

    let window_title = APP_STATE.read().window_title();

    rsx! {
        document::Title { "{window_title}" }

        div {
            class: "fm-app",

            // Active view
            MainContent {}

            // Status line
            StatusLine {}

            // Modal notice (if any)
            NoticeOverlay {}
        }
    }
}

// ============================================================================
// Main Content Area
// ============================================================================

/// Renders the view selected in the UI state
#[component]
fn MainContent() -> Element {
    let view = use_current_view();

    rsx! {
        main {
            class: "fm-main",
            match view {
                AppView::Landing => rsx! { LandingPage {} },
                AppView::Builder => rsx! { BuilderPage {} },
                AppView::Conditions => rsx! { ConditionsPage {} },
                AppView::FillForm(form_id) => rsx! {
                    FillFormPage { key: "{form_id}", form_id: form_id.clone() }
                },
            }
        }
    }
}

// ============================================================================
// Status Line
// ============================================================================

/// Bottom status line
#[component]
fn StatusLine() -> Element {
    let state = APP_STATE.read();
    let status = state.ui.status_message.clone();
    let view_name = state.ui.active_view.display_name();
    let preview = state.ui.active_view == AppView::Builder && state.document.preview_mode();
    drop(state);

    rsx! {
        footer {
            class: "fm-status",

            if let Some(msg) = status {
                span {
                    class: level_class(msg.level),
                    "{msg.text}"
                }
                button {
                    class: "fm-status-dismiss",
                    title: "Dismiss",
                    onclick: move |_| APP_STATE.write().ui.clear_status(),
                    "✕"
                }
            } else {
                span { "Ready" }
            }

            div { class: "fm-spacer" }

            span { class: "fm-status-view", "{view_name}" }
            if preview {
                span { class: "fm-status-view", "Preview" }
            }
        }
    }
}

fn level_class(level: StatusLevel) -> &'static str {
    match level {
        StatusLevel::Info => "fm-level-info",
        StatusLevel::Success => "fm-level-success",
        StatusLevel::Warning => "fm-level-warning",
        StatusLevel::Error => "fm-level-error",
    }
}

// ============================================================================
// Notice Overlay
// ============================================================================

/// Modal notice that blocks until acknowledged
#[component]
fn NoticeOverlay() -> Element {
    let notice = APP_STATE.read().ui.notice.clone();

    let Some(notice) = notice else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "fm-overlay",

            // Backdrop
            div {
                class: "fm-backdrop",
                onclick: move |_| APP_STATE.write().ui.dismiss_notice(),
            }

            // Notice content
            div {
                class: "fm-modal",
                role: "alertdialog",
                onclick: move |e| e.stop_propagation(),

                h2 {
                    class: "fm-modal-title {level_class(notice.level)}",
                    "{notice.title}"
                }
                p { class: "fm-modal-text", "{notice.text}" }

                div {
                    class: "fm-modal-actions",
                    button {
                        class: "fm-btn fm-btn-primary",
                        onclick: move |_| APP_STATE.write().ui.dismiss_notice(),
                        "OK"
                    }
                }
            }
        }
    }
}
