//! Builder Page Component
//!
//! The form builder shell: header, tab bar and preview switch around the
//! element palette and the current page. In preview mode the header, tabs,
//! palette and every editing affordance disappear, leaving the page and an
//! "Exit Preview" button.

use dioxus::prelude::*;

use crate::components::{FormPageView, Sidebar, Switch};
use crate::state::{APP_STATE, AppView, BuilderTab, StatusLevel, use_preview_mode};

/// Form builder view
#[component]
pub fn BuilderPage() -> Element {
    let preview_mode = use_preview_mode();

    rsx! {
        div {
            class: if preview_mode { "fm-builder fm-builder-preview" } else { "fm-builder" },

            if !preview_mode {
                BuilderHeader {}
                BuilderTabs { active: BuilderTab::Build }
            }

            div {
                class: "fm-builder-main",

                if preview_mode {
                    div {
                        class: "fm-preview-bar",
                        button {
                            class: "fm-btn fm-btn-primary",
                            onclick: move |_| APP_STATE.write().document.toggle_preview_mode(),
                            "Exit Preview"
                        }
                    }
                }

                div {
                    class: "fm-builder-row",

                    if !preview_mode {
                        div {
                            class: "fm-builder-actions",
                            button {
                                class: "fm-btn fm-btn-dark",
                                onclick: move |_| APP_STATE.write().document.toggle_sidebar(),
                                "+ Add Element"
                            }
                        }
                    }

                    div {
                        class: "fm-builder-canvas",

                        if !preview_mode {
                            div { class: "fm-logo-slot", "+ ADD YOUR LOGO" }
                        }

                        FormPageView {}

                        if !preview_mode {
                            button {
                                class: "fm-add-page",
                                onclick: move |_| APP_STATE.write().document.add_page(),
                                "+ ADD NEW PAGE HERE"
                            }
                        }

                        PageNavigator {}
                    }
                }
            }

            Sidebar {}
        }
    }
}

// ============================================================================
// Header & Tabs
// ============================================================================

/// Brand bar with save time and secondary actions
#[component]
fn BuilderHeader() -> Element {
    let saved_at = chrono::Local::now().format("%H:%M").to_string();
    let greeting = APP_STATE
        .read()
        .session
        .display_name()
        .map(str::to_string);

    rsx! {
        header {
            class: "fm-header",

            div {
                class: "fm-header-brand",
                button {
                    class: "fm-brand",
                    onclick: move |_| APP_STATE.write().navigate(AppView::Landing),
                    "Formula"
                }
            }

            div {
                class: "fm-header-actions",
                span { class: "fm-header-note", "All changes saved at {saved_at}" }
                if let Some(name) = greeting {
                    span { class: "fm-header-note", "{name}" }
                }
                button {
                    class: "fm-btn fm-btn-outline",
                    onclick: move |_| {
                        APP_STATE
                            .write()
                            .ui
                            .set_status("Collaborators are not available yet", StatusLevel::Info);
                    },
                    "Add Collaborators"
                }
                button {
                    class: "fm-btn fm-btn-outline",
                    onclick: move |_| {
                        APP_STATE.write().ui.set_status(
                            "Pick elements with Add Element, click one to edit it",
                            StatusLevel::Info,
                        );
                    },
                    "Help"
                }
            }
        }
    }
}

/// BUILD / USE CONDITIONS / PUBLISH tabs plus the preview switch
#[component]
pub fn BuilderTabs(active: BuilderTab) -> Element {
    let preview_mode = use_preview_mode();
    let show_switch = active == BuilderTab::Build;

    rsx! {
        nav {
            class: "fm-tabbar",

            for tab in BuilderTab::ALL {
                button {
                    key: "{tab.label()}",
                    class: if tab == active { "fm-tabbar-tab fm-tabbar-tab-active" } else { "fm-tabbar-tab" },
                    onclick: move |_| match tab.view() {
                        Some(view) => APP_STATE.write().navigate(view),
                        None => APP_STATE
                            .write()
                            .ui
                            .set_status("Publishing is not available yet", StatusLevel::Info),
                    },
                    "{tab.label()}"
                }
            }

            if show_switch {
                div {
                    class: "fm-tabbar-end",
                    Switch {
                        checked: preview_mode,
                        label: "Preview Form".to_string(),
                        on_change: move |_| APP_STATE.write().document.toggle_preview_mode(),
                    }
                }
            }
        }
    }
}

// ============================================================================
// Page Navigator
// ============================================================================

/// Back / "Page i of n" / delete / Next, shown with more than one page
#[component]
fn PageNavigator() -> Element {
    let state = APP_STATE.read();
    let document = &state.document;
    let page_count = document.page_count();
    let current = document.current_page_index();
    let preview_mode = document.preview_mode();
    let has_previous = document.has_previous_page();
    let has_next = document.has_next_page();
    drop(state);

    if page_count <= 1 {
        return rsx! {};
    }

    rsx! {
        div {
            class: "fm-page-nav",

            button {
                class: "fm-btn fm-btn-secondary",
                disabled: !has_previous,
                onclick: move |_| APP_STATE.write().document.previous_page(),
                "Back"
            }

            div {
                class: "fm-page-nav-center",
                span { "Page {current + 1} of {page_count}" }
                if !preview_mode {
                    button {
                        class: "fm-icon-btn fm-icon-btn-danger",
                        title: "Delete page",
                        onclick: move |_| APP_STATE.write().document.delete_page(current),
                        "🗑"
                    }
                }
            }

            button {
                class: "fm-btn fm-btn-secondary",
                disabled: !has_next,
                onclick: move |_| APP_STATE.write().document.next_page(),
                "Next"
            }
        }
    }
}
