//! Heading and paragraph blocks

use dioxus::prelude::*;
use formula_core::ElementType;
use formula_ir::Element as FormElement;

use crate::components::form_element::edit_content;
use crate::components::inputs::{InputVariant, TextArea, TextInput};

/// Shared properties of the per-type element views
#[derive(Props, Clone, PartialEq)]
pub struct ElementViewProps {
    /// Element to render
    pub element: FormElement,
    /// Editable view when true, static view otherwise
    pub editing: bool,
}

/// Heading with subheader, or paragraph heading with body text
#[component]
pub fn TextBlockView(props: ElementViewProps) -> Element {
    let element = props.element;
    let id = element.id;
    let is_paragraph = element.element_type == ElementType::Paragraph;
    let title = element.display_title();
    let subheader = element.display_subheader().to_string();

    if !props.editing {
        return rsx! {
            div {
                class: "fm-text-block",
                if is_paragraph {
                    h3 { class: "fm-paragraph-title", "{title}" }
                    p { class: "fm-paragraph-body", "{subheader}" }
                } else {
                    h2 { class: "fm-heading", "{title}" }
                    p { class: "fm-subheader", "{subheader}" }
                }
            }
        };
    }

    let title_variant = if is_paragraph {
        InputVariant::Title
    } else {
        InputVariant::Heading
    };

    rsx! {
        div {
            class: "fm-text-block",

            TextInput {
                value: title,
                variant: title_variant,
                on_change: move |v: String| edit_content(id, |c| c.with_title(v)),
            }

            if is_paragraph {
                TextArea {
                    value: subheader,
                    rows: 3,
                    on_change: move |v: String| edit_content(id, |c| c.with_subheader(v)),
                }
            } else {
                TextInput {
                    value: subheader,
                    variant: InputVariant::Muted,
                    on_change: move |v: String| edit_content(id, |c| c.with_subheader(v)),
                }
            }
        }
    }
}
