//! # Form Page Component
//!
//! Renders the current page of the document and submits it to the form
//! service. Only the current page is ever rendered.

use dioxus::prelude::*;
use formula_core::FormError;
use formula_ir::SubmissionPayload;

use crate::components::form_element::FormElementView;
use crate::state::{APP_STATE, StatusLevel};

/// The current page card
#[component]
pub fn FormPageView() -> Element {
    let state = APP_STATE.read();
    let document = &state.document;
    let page_index = document.current_page_index();
    let preview_mode = document.preview_mode();
    let elements: Vec<_> = document
        .current_page()
        .elements
        .iter()
        .map(|e| (e.clone(), document.is_selected(e.id)))
        .collect();
    drop(state);

    let card_class = if preview_mode {
        "fm-page fm-page-preview"
    } else {
        "fm-page"
    };

    rsx! {
        div {
            class: "{card_class}",

            if page_index > 0 && !preview_mode {
                div { class: "fm-page-number", "Page {page_index + 1}" }
            }

            if !preview_mode {
                div {
                    class: "fm-page-header",
                    h1 { class: "fm-page-title", "FormMate" }
                }
            }

            div {
                class: "fm-page-body",
                if elements.is_empty() {
                    if !preview_mode {
                        DropTarget {}
                    }
                } else {
                    for (element, is_selected) in elements.iter().cloned() {
                        FormElementView {
                            key: "{element.id}",
                            element,
                            is_selected,
                            preview_mode,
                        }
                    }
                }
            }

            if !elements.is_empty() {
                div {
                    class: "fm-page-footer",
                    button {
                        class: "fm-btn fm-btn-primary",
                        onclick: move |_| submit_current_page(),
                        "Submit"
                    }
                }
            }
        }
    }
}

/// Empty page placeholder shown while editing
#[component]
fn DropTarget() -> Element {
    rsx! {
        div {
            class: "fm-drop-target",
            onclick: move |_| {
                let mut state = APP_STATE.write();
                if !state.document.sidebar_open() {
                    state.document.toggle_sidebar();
                }
            },
            div { class: "fm-drop-target-icon", "⧉" }
            p { "Drag your first question here from the left." }
        }
    }
}

/// Build the payload for the current page and post it
///
/// Each click spawns its own request; nothing is de-duplicated or retried.
/// Both outcomes end in a modal notice.
fn submit_current_page() {
    let prepared = {
        let state = APP_STATE.peek();
        state
            .submission_payload()
            .and_then(|payload| Ok((state.api_client()?, payload)))
    };

    let (client, payload) = match prepared {
        Ok(prepared) => prepared,
        Err(e) => {
            report_submit_failure(&e);
            return;
        }
    };

    spawn(async move {
        match client.create_form(&payload).await {
            Ok(created) => {
                tracing::info!(
                    "Form submitted with {} field(s), id {:?}",
                    payload.fields.len(),
                    created.id
                );
                APP_STATE.write().ui.show_notice(
                    "Form submitted",
                    success_text(&payload, created.id.as_deref()),
                    StatusLevel::Success,
                );
            }
            Err(e) => report_submit_failure(&e),
        }
    });
}

fn report_submit_failure(error: &FormError) {
    tracing::error!("Error submitting form: {}", error);
    APP_STATE.write().ui.show_notice(
        "Submission failed",
        format!("Failed to submit form: {}", error),
        StatusLevel::Error,
    );
}

fn success_text(payload: &SubmissionPayload, form_id: Option<&str>) -> String {
    match form_id {
        Some(id) => format!(
            "Form submitted successfully! {} field(s) saved as form {}.",
            payload.fields.len(),
            id
        ),
        None => format!(
            "Form submitted successfully! {} field(s) saved.",
            payload.fields.len()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formula_core::ElementType;
    use formula_ir::{Element as FormElement, FormPage};

    fn payload_with(count: usize) -> SubmissionPayload {
        let mut page = FormPage::new();
        for _ in 0..count {
            page.push(FormElement::new(ElementType::ShortText));
        }
        SubmissionPayload::from_page(&page, "owner")
    }

    #[test]
    fn test_success_text_with_id() {
        let text = success_text(&payload_with(2), Some("f-9"));
        assert_eq!(text, "Form submitted successfully! 2 field(s) saved as form f-9.");
    }

    #[test]
    fn test_success_text_without_id() {
        let text = success_text(&payload_with(1), None);
        assert_eq!(text, "Form submitted successfully! 1 field(s) saved.");
    }
}
