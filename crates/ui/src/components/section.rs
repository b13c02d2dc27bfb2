//! Collapsible section element

use dioxus::prelude::*;
use formula_ir::ElementContent;

use crate::components::form_element::edit_content;
use crate::components::inputs::{InputVariant, TextArea, TextInput};
use crate::components::text_block::ElementViewProps;

/// Section whose body shows only while expanded
#[component]
pub fn SectionView(props: ElementViewProps) -> Element {
    let element = props.element;
    let id = element.id;
    let title = element.display_title();
    let subheader = element.display_subheader().to_string();
    let expanded = matches!(element.content, ElementContent::Section { expanded: true, .. });
    let chevron = if expanded { "▲" } else { "▼" };

    rsx! {
        div {
            class: "fm-section",

            div {
                class: "fm-section-header",
                onclick: move |_| edit_content(id, ElementContent::toggle_expanded),

                if props.editing {
                    TextInput {
                        value: title,
                        variant: InputVariant::Title,
                        on_change: move |v: String| edit_content(id, |c| c.with_title(v)),
                    }
                } else {
                    h3 { class: "fm-section-title", "{title}" }
                }

                span { class: "fm-section-chevron", "{chevron}" }
            }

            if expanded {
                div {
                    class: "fm-section-body",
                    if props.editing {
                        TextArea {
                            value: subheader,
                            rows: 3,
                            on_change: move |v: String| edit_content(id, |c| c.with_subheader(v)),
                        }
                    } else {
                        p { "{subheader}" }
                    }
                }
            }
        }
    }
}
