//! # Input Components
//!
//! Reusable inputs for the Formula UI:
//! - **TextInput**: Single-line text input
//! - **TextArea**: Multi-line text input
//! - **Select**: Dropdown selection
//! - **Switch**: On/off pill, used for the preview toggle
//!
//! Editing inputs report every keystroke through `on_change`; callers commit
//! the new value to the document straight away.
//!

use dioxus::prelude::*;

// ============================================================================
// Text Input Component
// ============================================================================

/// Properties for TextInput component
#[derive(Props, Clone, PartialEq)]
pub struct TextInputProps {
    /// Input value
    pub value: String,

    /// Label text (optional)
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Whether the input is disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Input type (text, email, date, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,

    /// Visual emphasis
    #[props(default)]
    pub variant: InputVariant,

    /// Additional CSS classes
    #[props(default)]
    pub class: Option<String>,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,

    /// Enter key handler
    #[props(default)]
    pub on_enter: EventHandler<String>,
}

/// Text size of an editing input
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum InputVariant {
    #[default]
    Normal,
    /// Bold label-sized text for element titles
    Title,
    /// Large heading text
    Heading,
    /// Muted text for subheaders
    Muted,
}

impl InputVariant {
    fn class(self) -> &'static str {
        match self {
            InputVariant::Normal => "",
            InputVariant::Title => "fm-input-title",
            InputVariant::Heading => "fm-input-heading",
            InputVariant::Muted => "fm-input-muted",
        }
    }
}

/// Single-line text input component
#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let input_class = build_input_class(props.variant, props.disabled, &props.class);

    rsx! {
        div {
            class: "fm-input-group",

            if let Some(label) = &props.label {
                label { class: "fm-label", "{label}" }
            }

            input {
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                // Keep clicks on the input from re-selecting the element card
                onclick: move |e| e.stop_propagation(),
                oninput: move |e| props.on_change.call(e.value()),
                onkeydown: move |e| {
                    if e.key() == Key::Enter {
                        props.on_enter.call(props.value.clone());
                    }
                },
            }
        }
    }
}

// ============================================================================
// Text Area Component
// ============================================================================

/// Properties for TextArea component
#[derive(Props, Clone, PartialEq)]
pub struct TextAreaProps {
    /// Input value
    pub value: String,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,

    /// Number of visible rows
    #[props(default = 4)]
    pub rows: usize,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Additional CSS classes
    #[props(default)]
    pub class: Option<String>,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Multi-line text input component
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let mut class = build_input_class(InputVariant::Normal, props.disabled, &props.class);
    class.push_str(" fm-textarea");

    rsx! {
        div {
            class: "fm-input-group",

            if let Some(label) = &props.label {
                label { class: "fm-label", "{label}" }
            }

            textarea {
                class: "{class}",
                rows: "{props.rows}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                disabled: props.disabled,
                onclick: move |e| e.stop_propagation(),
                oninput: move |e| props.on_change.call(e.value()),
            }
        }
    }
}

// ============================================================================
// Select Component
// ============================================================================

/// Option for Select component
#[derive(Clone, PartialEq, Debug)]
pub struct SelectOption {
    /// Option value
    pub value: String,
    /// Display label
    pub label: String,
}

impl SelectOption {
    /// Create a new select option
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Option whose label is its value
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}

/// Properties for Select component
#[derive(Props, Clone, PartialEq)]
pub struct SelectProps {
    /// Selected value
    pub value: String,

    /// Available options
    pub options: Vec<SelectOption>,

    /// Label text
    #[props(default)]
    pub label: Option<String>,

    /// Placeholder (shown when no selection)
    #[props(default)]
    pub placeholder: Option<String>,

    /// Whether disabled
    #[props(default = false)]
    pub disabled: bool,

    /// Change handler
    #[props(default)]
    pub on_change: EventHandler<String>,
}

/// Dropdown select component
#[component]
pub fn Select(props: SelectProps) -> Element {
    let class = build_input_class(InputVariant::Normal, props.disabled, &None);

    rsx! {
        div {
            class: "fm-input-group",

            if let Some(label) = &props.label {
                label { class: "fm-label", "{label}" }
            }

            select {
                class: "{class} fm-select",
                disabled: props.disabled,
                onclick: move |e| e.stop_propagation(),
                onchange: move |e| props.on_change.call(e.value()),

                if let Some(placeholder) = &props.placeholder {
                    option {
                        value: "",
                        selected: props.value.is_empty(),
                        "{placeholder}"
                    }
                }

                for (i, option) in props.options.iter().enumerate() {
                    option {
                        key: "{i}",
                        value: "{option.value}",
                        selected: props.value == option.value,
                        "{option.label}"
                    }
                }
            }
        }
    }
}

// ============================================================================
// Switch Component
// ============================================================================

/// Properties for Switch component
#[derive(Props, Clone, PartialEq)]
pub struct SwitchProps {
    /// Whether on
    pub checked: bool,

    /// Label shown before the switch
    #[props(default)]
    pub label: Option<String>,

    /// Change handler, called with the new state
    #[props(default)]
    pub on_change: EventHandler<bool>,
}

/// Pill-shaped on/off switch
#[component]
pub fn Switch(props: SwitchProps) -> Element {
    let track_class = if props.checked {
        "fm-switch fm-switch-on"
    } else {
        "fm-switch"
    };

    rsx! {
        div {
            class: "fm-switch-wrapper",

            if let Some(label) = &props.label {
                span { class: "fm-switch-label", "{label}" }
            }

            button {
                class: "{track_class}",
                r#type: "button",
                role: "switch",
                aria_checked: "{props.checked}",
                onclick: move |_| props.on_change.call(!props.checked),
                div { class: "fm-switch-thumb" }
            }
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Build input class string
fn build_input_class(variant: InputVariant, disabled: bool, extra: &Option<String>) -> String {
    let mut classes = vec!["fm-input"];

    let variant_class = variant.class();
    if !variant_class.is_empty() {
        classes.push(variant_class);
    }

    if disabled {
        classes.push("fm-input-disabled");
    }

    let mut result = classes.join(" ");
    if let Some(extra) = extra {
        result.push(' ');
        result.push_str(extra);
    }

    result
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_input_class() {
        let class = build_input_class(InputVariant::Normal, false, &None);
        assert_eq!(class, "fm-input");
    }

    #[test]
    fn test_build_input_class_variant_and_extra() {
        let class = build_input_class(InputVariant::Heading, false, &Some("wide".to_string()));
        assert_eq!(class, "fm-input fm-input-heading wide");
    }

    #[test]
    fn test_build_input_class_disabled() {
        let class = build_input_class(InputVariant::Title, true, &None);
        assert!(class.contains("fm-input-title"));
        assert!(class.contains("fm-input-disabled"));
    }

    #[test]
    fn test_select_option_plain() {
        let opt = SelectOption::plain("Hide");
        assert_eq!(opt.value, "Hide");
        assert_eq!(opt.label, "Hide");
    }

    #[test]
    fn test_select_option_new() {
        let opt = SelectOption::new("name", "Name");
        assert_eq!(opt.value, "name");
        assert_eq!(opt.label, "Name");
    }
}
