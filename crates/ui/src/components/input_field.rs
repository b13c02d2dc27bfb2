//! Text inputs and contact fields
//!
//! Only the title is editable. The inputs under it are decorative: they show
//! the placeholder and are never bound to the document.

use dioxus::prelude::*;
use formula_core::ElementType;

use crate::components::form_element::edit_content;
use crate::components::inputs::{InputVariant, TextInput};
use crate::components::text_block::ElementViewProps;

/// Short text, long text, full name, email, address and phone
#[component]
pub fn InputFieldView(props: ElementViewProps) -> Element {
    let element = props.element;
    let id = element.id;
    let element_type = element.element_type;
    let title = element.display_title();
    let placeholder = element.display_placeholder().to_string();

    rsx! {
        div {
            class: "fm-input-field",

            if props.editing {
                TextInput {
                    value: title,
                    variant: InputVariant::Title,
                    on_change: move |v: String| edit_content(id, |c| c.with_title(v)),
                }
            } else {
                label { class: "fm-field-label", "{title}" }
            }

            {decorative_inputs(element_type, &placeholder)}
        }
    }
}

/// Read-only inputs shown under the title
fn decorative_inputs(element_type: ElementType, placeholder: &str) -> Element {
    match element_type {
        ElementType::LongText => rsx! {
            textarea {
                class: "fm-input fm-textarea",
                rows: "3",
                placeholder: "{placeholder}",
                readonly: true,
            }
        },
        ElementType::Address => rsx! {
            div {
                class: "fm-address",
                input { class: "fm-input", placeholder: "{placeholder}", readonly: true }
                div {
                    class: "fm-address-row",
                    input { class: "fm-input", placeholder: "City", readonly: true }
                    input { class: "fm-input", placeholder: "State / Province", readonly: true }
                }
                input { class: "fm-input", placeholder: "Postal / Zip Code", readonly: true }
            }
        },
        ElementType::Phone => rsx! {
            input { class: "fm-input", r#type: "tel", placeholder: "{placeholder}", readonly: true }
            p { class: "fm-hint", "Please enter a valid phone number." }
        },
        ElementType::Email => rsx! {
            input { class: "fm-input", r#type: "email", placeholder: "{placeholder}", readonly: true }
        },
        _ => rsx! {
            input { class: "fm-input", r#type: "text", placeholder: "{placeholder}", readonly: true }
        },
    }
}
