//! Dropdown, single choice and multiple choice
//!
//! The options live in a local working copy while the element is on screen.
//! Every edit updates the copy and commits the whole list to the document.

use dioxus::prelude::*;
use formula_core::{ElementId, ElementType};
use formula_ir::element::default_option_label;

use crate::components::form_element::edit_content;
use crate::components::inputs::{InputVariant, TextInput};
use crate::components::text_block::ElementViewProps;

/// Choice element with editable option list
#[component]
pub fn ChoiceView(props: ElementViewProps) -> Element {
    let element = props.element;
    let id = element.id;
    let element_type = element.element_type;
    let title = element.display_title();
    let initial = element.content.options().unwrap_or_default().to_vec();
    let options = use_signal(move || initial);

    if !props.editing {
        return rsx! {
            div {
                class: "fm-choice",
                label { class: "fm-field-label", "{title}" }
                {static_choices(element_type, id.to_string(), &options.read())}
            }
        };
    }

    rsx! {
        div {
            class: "fm-choice",

            TextInput {
                value: title,
                variant: InputVariant::Title,
                on_change: move |v: String| edit_content(id, |c| c.with_title(v)),
            }

            div {
                class: "fm-option-list",
                for (index, option) in options.read().iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "fm-option-row",

                        TextInput {
                            value: option.clone(),
                            on_change: move |v: String| {
                                let mut next = options.peek().clone();
                                if let Some(slot) = next.get_mut(index) {
                                    *slot = v;
                                }
                                save_options(id, options, next);
                            },
                        }

                        button {
                            class: "fm-icon-btn",
                            title: "Remove option",
                            onclick: move |e| {
                                e.stop_propagation();
                                let mut next = options.peek().clone();
                                if index < next.len() {
                                    next.remove(index);
                                }
                                save_options(id, options, next);
                            },
                            "✕"
                        }
                    }
                }
            }

            button {
                class: "fm-btn fm-btn-link",
                onclick: move |e| {
                    e.stop_propagation();
                    let mut next = options.peek().clone();
                    next.push(default_option_label(next.len()));
                    save_options(id, options, next);
                },
                "+ Add Option"
            }
        }
    }
}

/// Update the working copy and commit the whole list
fn save_options(id: ElementId, mut options: Signal<Vec<String>>, next: Vec<String>) {
    options.set(next.clone());
    edit_content(id, |c| c.with_options(next));
}

/// Non-editable rendering of the options
fn static_choices(element_type: ElementType, group: String, options: &[String]) -> Element {
    match element_type {
        ElementType::Dropdown => rsx! {
            select {
                class: "fm-input fm-select",
                option { value: "", "Choose an option..." }
                for (i, opt) in options.iter().enumerate() {
                    option { key: "{i}", value: "{opt}", "{opt}" }
                }
            }
        },
        ElementType::SingleChoice => rsx! {
            div {
                class: "fm-choice-group",
                for (i, opt) in options.iter().enumerate() {
                    label {
                        key: "{i}",
                        class: "fm-choice-item",
                        input { r#type: "radio", name: "{group}", value: "{opt}" }
                        span { "{opt}" }
                    }
                }
            }
        },
        _ => rsx! {
            div {
                class: "fm-choice-group",
                for (i, opt) in options.iter().enumerate() {
                    label {
                        key: "{i}",
                        class: "fm-choice-item",
                        input { r#type: "checkbox", value: "{opt}" }
                        span { "{opt}" }
                    }
                }
            }
        },
    }
}
