//! Landing Page Component
//!
//! Shown at startup. Tells the user whether a session was handed over by the
//! identity provider, leads signed-in users into the builder, and opens a
//! stored form by id for filling in.

use dioxus::prelude::*;

use crate::components::TextInput;
use crate::state::{APP_STATE, AppView, StatusLevel};

/// Landing view
#[component]
pub fn LandingPage() -> Element {
    let state = APP_STATE.read();
    let signed_in_as = state.session.display_name().map(str::to_string);
    drop(state);

    let mut form_id = use_signal(String::new);

    let open_form = move || match normalize_form_id(&form_id.read()) {
        Some(id) => APP_STATE.write().navigate(AppView::FillForm(id)),
        None => APP_STATE
            .write()
            .ui
            .set_status("Enter a form id to open", StatusLevel::Warning),
    };

    rsx! {
        div {
            class: "fm-landing",

            header {
                class: "fm-landing-header",
                div { class: "fm-brand-text", "Formula" }
                if let Some(name) = &signed_in_as {
                    span { class: "fm-landing-user", "Signed in as {name}" }
                } else {
                    span { class: "fm-landing-user", "Not signed in" }
                }
            }

            main {
                class: "fm-landing-main",

                section {
                    class: "fm-hero",
                    h1 {
                        "Create beautiful forms in minutes with "
                        span { class: "fm-accent", "Formula" }
                    }
                    p {
                        class: "fm-hero-text",
                        "Build professional forms, surveys and questionnaires without any technical knowledge."
                    }

                    if signed_in_as.is_some() {
                        button {
                            class: "fm-btn fm-btn-primary fm-btn-large",
                            onclick: move |_| APP_STATE.write().navigate(AppView::Builder),
                            "Build Form"
                        }
                    } else {
                        div {
                            class: "fm-signin-hint",
                            p { "Sign in with your identity provider to build forms." }
                            p {
                                class: "fm-hint",
                                "The session is read from FORMULA_USER_SUB, FORMULA_USER_EMAIL, FORMULA_USER_NAME and FORMULA_TOKEN."
                            }
                        }
                    }
                }

                section {
                    class: "fm-open-form",
                    h2 { "Fill in a form" }
                    div {
                        class: "fm-open-form-row",
                        TextInput {
                            value: form_id.read().clone(),
                            placeholder: "Form id".to_string(),
                            on_change: move |v: String| form_id.set(v),
                            on_enter: move |_| open_form(),
                        }
                        button {
                            class: "fm-btn fm-btn-secondary",
                            onclick: move |_| open_form(),
                            "Open Form"
                        }
                    }
                }
            }
        }
    }
}

/// Trimmed form id, or `None` when blank
fn normalize_form_id(raw: &str) -> Option<String> {
    let id = raw.trim();
    (!id.is_empty()).then(|| id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_form_id() {
        assert_eq!(normalize_form_id("  abc123 "), Some("abc123".to_string()));
        assert_eq!(normalize_form_id("   "), None);
        assert_eq!(normalize_form_id(""), None);
    }
}
