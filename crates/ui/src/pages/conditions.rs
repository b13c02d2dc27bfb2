//! Conditions Page Component
//!
//! Editor for show/hide rule descriptors. Each rule reads
//! IF <field> <state> <value> DO <action> <target field>. Rules are kept with
//! the document while the editor is open; nothing evaluates them.

use dioxus::prelude::*;
use formula_ir::{ACTION_OPTIONS, AVAILABLE_FIELDS, ConditionRule, RuleKey};

use crate::components::{Select, SelectOption, TextInput};
use crate::pages::builder::BuilderTabs;
use crate::state::{APP_STATE, BuilderTab, StatusLevel};

/// USE CONDITIONS view
#[component]
pub fn ConditionsPage() -> Element {
    let rules: Vec<ConditionRule> = APP_STATE.read().conditions.rules().to_vec();

    rsx! {
        div {
            class: "fm-builder",

            BuilderTabs { active: BuilderTab::UseConditions }

            div {
                class: "fm-conditions",
                h2 { class: "fm-conditions-title", "SHOW/HIDE FIELD" }

                for (index, rule) in rules.into_iter().enumerate() {
                    RuleCard { key: "{index}", index, rule }
                }

                button {
                    class: "fm-btn fm-btn-success",
                    onclick: move |_| save_rules(),
                    "SAVE"
                }
            }
        }
    }
}

/// Field choices shared by the IF and FIELD selects
fn field_options() -> Vec<SelectOption> {
    AVAILABLE_FIELDS
        .iter()
        .map(|f| SelectOption::new(f.value, f.label))
        .collect()
}

fn update(index: usize, key: RuleKey, value: String) {
    APP_STATE.write().conditions.update_rule(index, key, value);
}

/// Record the rules in the log and confirm on the status line
fn save_rules() {
    let state = APP_STATE.peek();
    let count = state.conditions.len();
    match serde_json::to_string(state.conditions.rules()) {
        Ok(json) => tracing::info!("Saved {} condition rule(s): {}", count, json),
        Err(e) => tracing::error!("Could not serialize condition rules: {}", e),
    }
    drop(state);

    APP_STATE
        .write()
        .ui
        .set_status(format!("Saved {} condition rule(s)", count), StatusLevel::Success);
}

#[derive(Props, Clone, PartialEq)]
struct RuleCardProps {
    index: usize,
    rule: ConditionRule,
}

/// One rule with its five inputs and the add-rule button
#[component]
fn RuleCard(props: RuleCardProps) -> Element {
    let index = props.index;
    let rule = props.rule;
    let state_options: Vec<SelectOption> = rule
        .state_options()
        .iter()
        .map(|s| SelectOption::plain(*s))
        .collect();
    let action_options: Vec<SelectOption> =
        ACTION_OPTIONS.iter().map(|a| SelectOption::plain(*a)).collect();

    rsx! {
        div {
            class: "fm-rule",

            Select {
                label: "IF".to_string(),
                value: rule.field.clone(),
                options: field_options(),
                placeholder: "Select field".to_string(),
                on_change: move |v: String| update(index, RuleKey::Field, v),
            }

            Select {
                label: "STATE".to_string(),
                value: rule.state.clone(),
                options: state_options,
                placeholder: "Select field state".to_string(),
                on_change: move |v: String| update(index, RuleKey::State, v),
            }

            TextInput {
                label: "VALUE".to_string(),
                value: rule.value.clone(),
                placeholder: "Please type a value here".to_string(),
                on_change: move |v: String| update(index, RuleKey::Value, v),
            }

            Select {
                label: "DO".to_string(),
                value: rule.action.clone(),
                options: action_options,
                placeholder: "Select action".to_string(),
                on_change: move |v: String| update(index, RuleKey::Action, v),
            }

            Select {
                label: "FIELD".to_string(),
                value: rule.target_field.clone(),
                options: field_options(),
                placeholder: "Select field".to_string(),
                on_change: move |v: String| update(index, RuleKey::TargetField, v),
            }

            button {
                class: "fm-btn fm-btn-primary",
                title: "Add rule",
                onclick: move |_| APP_STATE.write().conditions.add_rule(),
                "+"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_options() {
        let options = field_options();
        assert_eq!(options.len(), 4);
        assert_eq!(options[0], SelectOption::new("name", "Name"));
        assert_eq!(options[3].value, "question");
    }
}
