//! Star rating element

use dioxus::prelude::*;
use formula_ir::{ElementContent, MAX_RATING};

use crate::components::form_element::edit_content;
use crate::components::inputs::{InputVariant, TextInput};
use crate::components::text_block::ElementViewProps;

/// Five clickable stars; stars up to the rating are filled
#[component]
pub fn StarRatingView(props: ElementViewProps) -> Element {
    let element = props.element;
    let id = element.id;
    let title = element.display_title();
    let rating = match element.content {
        ElementContent::Rating { rating, .. } => rating,
        _ => 0,
    };

    rsx! {
        div {
            class: "fm-rating",

            if props.editing {
                TextInput {
                    value: title,
                    variant: InputVariant::Title,
                    on_change: move |v: String| edit_content(id, |c| c.with_title(v)),
                }
            } else {
                label { class: "fm-field-label", "{title}" }
            }

            div {
                class: "fm-stars",
                for position in 1..=MAX_RATING {
                    button {
                        key: "{position}",
                        class: if is_filled(position, rating) { "fm-star fm-star-filled" } else { "fm-star" },
                        r#type: "button",
                        title: "{position} of {MAX_RATING}",
                        onclick: move |e| {
                            e.stop_propagation();
                            edit_content(id, |c| c.with_rating(position));
                        },
                        "★"
                    }
                }
            }
        }
    }
}

/// Whether the star at `position` (1-based) is filled
pub fn is_filled(position: u8, rating: u8) -> bool {
    position <= rating
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_filled() {
        assert!(!is_filled(1, 0));
        assert!(is_filled(3, 3));
        assert!(!is_filled(4, 3));
        assert!(is_filled(5, MAX_RATING));
    }
}
