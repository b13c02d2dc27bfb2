//! # Form Element Component
//!
//! Renders one element of the current page. A selected element outside
//! preview mode shows its editable view plus the control cluster; every other
//! element shows its static view.
//!
//! Dispatch is a closed `match` over [`ElementContent`]. Types without a
//! dedicated view fall through to [`UnsupportedElement`], which never fails.

use dioxus::prelude::*;
use formula_core::{ElementId, ElementType, catalog};
use formula_ir::{Element as FormElement, ElementContent, ElementPatch};

use crate::components::choice_editor::ChoiceView;
use crate::components::input_field::InputFieldView;
use crate::components::input_table::InputTableView;
use crate::components::media_upload::{FileUploadView, ImageView};
use crate::components::schedule::ScheduleView;
use crate::components::section::SectionView;
use crate::components::star_rating::StarRatingView;
use crate::components::text_block::TextBlockView;
use crate::state::APP_STATE;

/// Edit an element's committed content in place
///
/// `edit` receives the content currently held by the document, so handlers
/// never write back a stale copy.
pub fn edit_content(id: ElementId, edit: impl FnOnce(ElementContent) -> ElementContent) {
    let mut state = APP_STATE.write();
    let Some(current) = state.document.element(id).map(|e| e.content.clone()) else {
        tracing::debug!("Edit for element {} not on the current page, ignored", id);
        return;
    };
    state
        .document
        .update_element(id, ElementPatch::content(edit(current)));
}

// ============================================================================
// Form Element
// ============================================================================

/// Properties for the FormElementView component
#[derive(Props, Clone, PartialEq)]
pub struct FormElementViewProps {
    /// Element to render
    pub element: FormElement,

    /// Whether this element is the selected one
    #[props(default = false)]
    pub is_selected: bool,

    /// Whether the form is being previewed
    #[props(default = false)]
    pub preview_mode: bool,
}

/// One element card on the page
#[component]
pub fn FormElementView(props: FormElementViewProps) -> Element {
    let editing = props.is_selected && !props.preview_mode;
    let element = props.element.clone();

    let mut card_class = String::from("fm-element");
    if editing {
        card_class.push_str(" fm-element-selected");
    }
    if props.preview_mode {
        card_class.push_str(" fm-element-preview");
    }

    let select_target = element.clone();

    rsx! {
        div {
            class: "{card_class}",
            onclick: move |_| {
                APP_STATE.write().document.select_element(Some(&select_target));
            },

            div {
                class: "fm-element-body",
                {render_content(&element, editing)}

                if element.required == Some(true) {
                    span { class: "fm-required-badge", "Required" }
                }
            }

            if editing {
                ControlCluster {
                    id: element.id,
                    required: element.required.unwrap_or(false),
                }
            }
        }
    }
}

/// Pick the view for an element's content
fn render_content(element: &FormElement, editing: bool) -> Element {
    match &element.content {
        ElementContent::TextBlock { .. } => rsx! {
            TextBlockView { element: element.clone(), editing }
        },
        ElementContent::Input { .. } => rsx! {
            InputFieldView { element: element.clone(), editing }
        },
        ElementContent::Choice { .. } => rsx! {
            ChoiceView { element: element.clone(), editing }
        },
        ElementContent::Image { .. } => rsx! {
            ImageView { element: element.clone(), editing }
        },
        ElementContent::File { .. } => rsx! {
            FileUploadView { element: element.clone(), editing }
        },
        ElementContent::Rating { .. } => rsx! {
            StarRatingView { element: element.clone(), editing }
        },
        ElementContent::Section { .. } => rsx! {
            SectionView { element: element.clone(), editing }
        },
        ElementContent::Table { .. } => rsx! {
            InputTableView { element: element.clone(), editing }
        },
        ElementContent::Schedule { .. } => rsx! {
            ScheduleView { element: element.clone(), editing }
        },
        ElementContent::Plain { .. } if element.element_type == ElementType::Divider => rsx! {
            hr { class: "fm-divider" }
        },
        ElementContent::Plain { .. } => rsx! {
            UnsupportedElement { element_type: element.element_type }
        },
    }
}

// ============================================================================
// Fallback
// ============================================================================

/// Placeholder for types without a dedicated view
#[component]
pub fn UnsupportedElement(element_type: ElementType) -> Element {
    let icon = catalog::icon_for(element_type);
    let label = fallback_label(element_type);

    rsx! {
        div {
            class: "fm-element-fallback",
            span { class: "fm-element-fallback-icon", "{icon}" }
            span { "{label}" }
        }
    }
}

/// "<Type name> Element", e.g. "Signature Element"
pub fn fallback_label(element_type: ElementType) -> String {
    format!("{} Element", element_type.display_name())
}

// ============================================================================
// Control Cluster
// ============================================================================

#[derive(Props, Clone, PartialEq)]
struct ControlClusterProps {
    id: ElementId,
    required: bool,
}

/// Settings, delete and drag handle shown on the selected element
#[component]
fn ControlCluster(props: ControlClusterProps) -> Element {
    let id = props.id;
    let required = props.required;
    let settings_title = if required {
        "Mark as optional"
    } else {
        "Mark as required"
    };

    rsx! {
        div {
            class: "fm-element-controls",

            button {
                class: "fm-icon-btn",
                title: "{settings_title}",
                onclick: move |e| {
                    e.stop_propagation();
                    APP_STATE
                        .write()
                        .document
                        .update_element(id, ElementPatch::required(!required));
                },
                "⚙"
            }

            button {
                class: "fm-icon-btn fm-icon-btn-danger",
                title: "Delete element",
                onclick: move |e| {
                    e.stop_propagation();
                    APP_STATE.write().document.remove_element(id);
                },
                "🗑"
            }

            span {
                class: "fm-drag-handle",
                title: "Drag to reorder",
                "⋮⋮"
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_label() {
        assert_eq!(fallback_label(ElementType::Signature), "Signature Element");
        assert_eq!(fallback_label(ElementType::PageBreak), "Page Break Element");
    }

    #[test]
    fn test_every_plain_type_has_an_icon() {
        for element_type in ElementType::ALL {
            if matches!(
                ElementContent::default_for(element_type),
                ElementContent::Plain { .. }
            ) {
                assert!(!catalog::icon_for(element_type).is_empty());
            }
        }
    }
}
