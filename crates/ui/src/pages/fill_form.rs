//! Fill Form Page Component
//!
//! Loads a stored form by id and lets the user answer it. Answers stay in a
//! local [`FormResponses`] signal; submitting logs them and confirms with a
//! notice.

use dioxus::prelude::*;
use formula_core::{FormResult, ResultExt};
use formula_ir::{FieldWidget, FormResponses, FormTemplate, ResponseValue, TemplateField};

use crate::file_ops::{PickKind, pick_file_name};
use crate::state::{APP_STATE, AppView, StatusLevel};

/// Fill-form view for the stored form `form_id`
#[component]
pub fn FillFormPage(form_id: String) -> Element {
    let responses = use_signal(FormResponses::new);

    let template = use_resource(move || load_form(form_id.clone()));

    let body = match &*template.read() {
        None => rsx! {
            p { class: "fm-loading", "Loading form..." }
        },
        Some(Err(e)) => {
            let message = if e.is_not_found() {
                "This form does not exist.".to_string()
            } else {
                format!("Could not load the form: {}", e)
            };
            rsx! {
                div {
                    class: "fm-load-error",
                    p { "{message}" }
                    button {
                        class: "fm-btn fm-btn-secondary",
                        onclick: move |_| APP_STATE.write().navigate(AppView::Landing),
                        "Back"
                    }
                }
            }
        }
        Some(Ok(form)) => rsx! {
            FilledForm { form: form.clone(), responses }
        },
    };

    rsx! {
        div {
            class: "fm-fill",
            {body}
        }
    }
}

async fn load_form(form_id: String) -> FormResult<FormTemplate> {
    let client = APP_STATE
        .peek()
        .api_client()
        .with_context("Opening form")?;
    let result = client.fetch_form(&form_id).await;
    match &result {
        Ok(form) => tracing::info!("Loaded form '{}' with {} field(s)", form.title, form.fields.len()),
        Err(e) => tracing::error!("Error fetching form {}: {}", form_id, e),
    }
    result
}

#[derive(Props, Clone, PartialEq)]
struct FilledFormProps {
    form: FormTemplate,
    responses: Signal<FormResponses>,
}

/// The loaded form with its inputs
#[component]
fn FilledForm(props: FilledFormProps) -> Element {
    let form = props.form;
    let responses = props.responses;

    rsx! {
        div {
            class: "fm-page",
            div {
                class: "fm-page-header",
                h1 { class: "fm-page-title", "{form.title}" }
                if !form.description.is_empty() {
                    p { class: "fm-subheader", "{form.description}" }
                }
            }

            form {
                class: "fm-page-body fm-fill-fields",
                onsubmit: move |e| {
                    e.prevent_default();
                    submit_responses(&responses.read());
                },

                for field in form.fields.iter().cloned() {
                    FillField { key: "{field.id}", field, responses }
                }

                div {
                    class: "fm-page-footer",
                    button { class: "fm-btn fm-btn-primary", r#type: "submit", "Submit" }
                }
            }
        }
    }
}

fn submit_responses(responses: &FormResponses) {
    match serde_json::to_string(responses) {
        Ok(json) => tracing::info!("Form responses: {}", json),
        Err(e) => tracing::error!("Could not serialize responses: {}", e),
    }
    APP_STATE.write().ui.show_notice(
        "Thank you",
        "Form submitted successfully!",
        StatusLevel::Success,
    );
}

#[derive(Props, Clone, PartialEq)]
struct FillFieldProps {
    field: TemplateField,
    responses: Signal<FormResponses>,
}

/// One field, rendered by its widget
#[component]
fn FillField(props: FillFieldProps) -> Element {
    let field = props.field;
    let mut responses = props.responses;
    let widget = field.widget();
    let field_id = field.id.clone();
    let text_value = match responses.read().get(&field.id) {
        Some(ResponseValue::Text(v)) => v.clone(),
        _ => String::new(),
    };

    let input = match widget {
        FieldWidget::Heading => rsx! {
            h2 { class: "fm-heading", "{field.label}" }
        },
        FieldWidget::Note => rsx! {
            p { class: "fm-paragraph-body fm-italic", "{field.label}" }
        },
        FieldWidget::TextInput | FieldWidget::DateInput | FieldWidget::TimeInput => {
            let input_type = match widget {
                FieldWidget::DateInput => "date",
                FieldWidget::TimeInput => "time",
                _ => "text",
            };
            rsx! {
                input {
                    class: "fm-input",
                    r#type: "{input_type}",
                    required: field.required,
                    value: "{text_value}",
                    oninput: move |e| responses.write().set_text(&field_id, e.value()),
                }
            }
        }
        FieldWidget::TextArea => rsx! {
            textarea {
                class: "fm-input fm-textarea",
                rows: "4",
                required: field.required,
                value: "{text_value}",
                oninput: move |e| responses.write().set_text(&field_id, e.value()),
            }
        },
        FieldWidget::FilePicker => rsx! {
            div {
                class: "fm-fill-file",
                button {
                    class: "fm-btn fm-btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        let field_id = field_id.clone();
                        let mut responses = responses;
                        spawn(async move {
                            match pick_file_name(PickKind::Document).await {
                                Ok(name) => responses.write().set_text(&field_id, name),
                                Err(e) => tracing::debug!("No file picked: {}", e),
                            }
                        });
                    },
                    "Choose File"
                }
                if !text_value.is_empty() {
                    span { class: "fm-file-name", "{text_value}" }
                }
            }
        },
        FieldWidget::Radio => {
            let group = field.id.clone();
            rsx! {
                div {
                    class: "fm-choice-group",
                    for option in field.options().iter().cloned() {
                        label {
                            key: "{option}",
                            class: "fm-choice-item",
                            input {
                                r#type: "radio",
                                name: "{group}",
                                value: "{option}",
                                checked: responses.read().is_chosen(&field.id, &option),
                                onchange: {
                                    let field_id = field.id.clone();
                                    let option = option.clone();
                                    move |_| responses.write().set_text(&field_id, option.clone())
                                },
                            }
                            span { "{option}" }
                        }
                    }
                }
            }
        }
        FieldWidget::Checkboxes => rsx! {
            div {
                class: "fm-choice-group",
                for option in field.options().iter().cloned() {
                    label {
                        key: "{option}",
                        class: "fm-choice-item",
                        input {
                            r#type: "checkbox",
                            value: "{option}",
                            checked: responses.read().is_chosen(&field.id, &option),
                            onchange: {
                                let field_id = field.id.clone();
                                let option = option.clone();
                                move |_| {
                                    let chosen = responses.peek().is_chosen(&field_id, &option);
                                    responses.write().toggle_choice(&field_id, &option, !chosen);
                                }
                            },
                        }
                        span { "{option}" }
                    }
                }
            }
        },
        FieldWidget::Placeholder => rsx! {
            p { class: "fm-hint", "Placeholder for {field.field_type} (to be implemented)" }
        },
        FieldWidget::LabelOnly => rsx! {},
    };

    rsx! {
        div {
            class: "fm-fill-field",
            if widget.has_label() {
                label {
                    class: "fm-field-label",
                    "{field.label}"
                    if field.required {
                        span { class: "fm-required-mark", " *" }
                    }
                }
            }
            {input}
        }
    }
}
