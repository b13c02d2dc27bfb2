//! # Element Palette Sidebar
//!
//! Lists the element catalog under BASIC / WIDGETS tabs. Picking an entry
//! adds that element to the current page. Only rendered while open and not
//! previewing.

use dioxus::prelude::*;
use formula_core::{ElementCategory, catalog};

use crate::state::APP_STATE;

/// Element palette
#[component]
pub fn Sidebar() -> Element {
    let state = APP_STATE.read();
    let visible = state.document.sidebar_open() && !state.document.preview_mode();
    let active_tab = state.ui.sidebar_tab;
    drop(state);

    if !visible {
        return rsx! {};
    }

    rsx! {
        aside {
            class: "fm-sidebar",

            div {
                class: "fm-sidebar-header",
                h2 { class: "fm-sidebar-title", "Form Elements" }
                button {
                    class: "fm-icon-btn",
                    title: "Close",
                    onclick: move |_| APP_STATE.write().document.toggle_sidebar(),
                    "✕"
                }
            }

            div {
                class: "fm-sidebar-tabs",
                for category in ElementCategory::ALL {
                    button {
                        key: "{category.label()}",
                        class: if category == active_tab { "fm-tab fm-tab-active" } else { "fm-tab" },
                        onclick: move |_| APP_STATE.write().ui.sidebar_tab = category,
                        "{category.label()}"
                    }
                }
            }

            div {
                class: "fm-palette",
                for entry in catalog::by_category(active_tab) {
                    button {
                        key: "{entry.element_type}",
                        class: "fm-palette-item",
                        onclick: move |_| {
                            APP_STATE.write().document.add_element(entry.element_type);
                        },
                        span { class: "fm-palette-icon", "{entry.icon}" }
                        span { class: "fm-palette-label", "{entry.label()}" }
                    }
                }
            }
        }
    }
}
