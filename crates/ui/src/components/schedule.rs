//! Date picker and appointment elements
//!
//! Both commit the picked date. An appointment additionally offers a fixed
//! set of mutually exclusive slots once a date is picked.

use chrono::NaiveDate;
use dioxus::prelude::*;
use formula_core::ElementType;
use formula_ir::{APPOINTMENT_SLOTS, ElementContent};

use crate::components::form_element::edit_content;
use crate::components::inputs::{InputVariant, TextInput};
use crate::components::text_block::ElementViewProps;

/// Value format of `<input type="date">`
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Date picker, plus time slots for appointments
#[component]
pub fn ScheduleView(props: ElementViewProps) -> Element {
    let element = props.element;
    let id = element.id;
    let is_appointment = element.element_type == ElementType::Appointment;
    let title = element.display_title();
    let (selected_date, selected_time) = match &element.content {
        ElementContent::Schedule {
            selected_date,
            selected_time,
            ..
        } => (*selected_date, selected_time.clone()),
        _ => (None, None),
    };
    let date_value = selected_date
        .map(|d| d.format(DATE_INPUT_FORMAT).to_string())
        .unwrap_or_default();

    rsx! {
        div {
            class: "fm-schedule",

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
                class: "fm-date-picker",
                span { class: "fm-date-icon", "📅" }
                input {
                    class: "fm-input",
                    r#type: "date",
                    value: "{date_value}",
                    title: "Select date",
                    onclick: move |e| e.stop_propagation(),
                    onchange: move |e| {
                        match parse_date_input(&e.value()) {
                            Some(date) => edit_content(id, |c| c.with_date(date)),
                            None => tracing::debug!("Ignoring unparsable date '{}'", e.value()),
                        }
                    },
                }
            }

            if is_appointment {
                if let Some(date) = selected_date {
                    div {
                        class: "fm-slots",
                        p { class: "fm-slots-date", "{long_date(date)}" }
                        div {
                            class: "fm-slot-grid",
                            for slot in APPOINTMENT_SLOTS {
                                button {
                                    key: "{slot}",
                                    r#type: "button",
                                    class: if selected_time.as_deref() == Some(slot) { "fm-slot fm-slot-selected" } else { "fm-slot" },
                                    onclick: move |e| {
                                        e.stop_propagation();
                                        edit_content(id, |c| c.with_time(slot));
                                    },
                                    "{slot}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Parse the value of a date input; empty or malformed values yield `None`
pub fn parse_date_input(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_INPUT_FORMAT).ok()
}

/// "Monday, March 3, 2025"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_input() {
        assert_eq!(
            parse_date_input("2025-03-03"),
            NaiveDate::from_ymd_opt(2025, 3, 3)
        );
        assert_eq!(parse_date_input(""), None);
        assert_eq!(parse_date_input("03/03/2025"), None);
    }

    #[test]
    fn test_long_date() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        assert_eq!(long_date(date), "Monday, March 3, 2025");
    }
}
