//! Show/hide condition rules
//!
//! Rules are descriptors edited on the "USE CONDITIONS" tab. Nothing in the
//! application evaluates them.

use serde::{Deserialize, Serialize};

/// Kind of value a condition can test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConditionFieldType {
    Text,
    Date,
    MultipleChoice,
    SingleChoice,
    Email,
}

impl ConditionFieldType {
    /// States offered for a field of this type
    pub fn state_options(self) -> &'static [&'static str] {
        match self {
            ConditionFieldType::Text => &["Is Equal To", "Is Not Equal To", "Is Empty", "Is Filled"],
            ConditionFieldType::Date => &[
                "Is Empty",
                "Is Filled",
                "Before",
                "After",
                "Is Equal to Date",
                "Not Equal to Date",
            ],
            ConditionFieldType::MultipleChoice | ConditionFieldType::SingleChoice => {
                &["Is Equal To", "Is Not Equal To"]
            }
            ConditionFieldType::Email => &[
                "Contains",
                "Does not Contain",
                "Starts With",
                "Doesn't Start With",
                "Ends With",
                "Doesn't End With",
                "Is Empty",
                "Is Filled",
            ],
        }
    }
}

/// A field a rule can refer to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionField {
    pub label: &'static str,
    pub value: &'static str,
    pub field_type: ConditionFieldType,
}

/// Fields offered in the IF and FIELD selectors
pub const AVAILABLE_FIELDS: [ConditionField; 4] = [
    ConditionField {
        label: "Name",
        value: "name",
        field_type: ConditionFieldType::Text,
    },
    ConditionField {
        label: "Email",
        value: "email",
        field_type: ConditionFieldType::Email,
    },
    ConditionField {
        label: "Date",
        value: "date",
        field_type: ConditionFieldType::Date,
    },
    ConditionField {
        label: "Question",
        value: "question",
        field_type: ConditionFieldType::MultipleChoice,
    },
];

/// Actions offered in the DO selector
pub const ACTION_OPTIONS: [&str; 4] = ["Hide", "Show", "Hide Multiple", "Show Multiple"];

/// Type of an available field, by its value
pub fn field_type_of(value: &str) -> Option<ConditionFieldType> {
    AVAILABLE_FIELDS
        .iter()
        .find(|f| f.value == value)
        .map(|f| f.field_type)
}

/// States offered for the field named `value` (empty for unknown fields)
pub fn state_options_for(value: &str) -> &'static [&'static str] {
    field_type_of(value)
        .map(ConditionFieldType::state_options)
        .unwrap_or(&[])
}

/// Which part of a rule an edit targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKey {
    Field,
    State,
    Value,
    Action,
    TargetField,
}

/// One IF/STATE/VALUE/DO/FIELD rule; empty strings mean "not chosen yet"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionRule {
    pub field: String,
    pub state: String,
    pub value: String,
    pub action: String,
    pub target_field: String,
}

impl ConditionRule {
    pub fn set(&mut self, key: RuleKey, value: impl Into<String>) {
        let slot = match key {
            RuleKey::Field => &mut self.field,
            RuleKey::State => &mut self.state,
            RuleKey::Value => &mut self.value,
            RuleKey::Action => &mut self.action,
            RuleKey::TargetField => &mut self.target_field,
        };
        *slot = value.into();
    }

    /// States offered for the currently chosen field
    pub fn state_options(&self) -> &'static [&'static str] {
        state_options_for(&self.field)
    }
}

/// Ordered list of rules, never empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionSet {
    rules: Vec<ConditionRule>,
}

impl Default for ConditionSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ConditionSet {
    /// A set holding one blank rule
    pub fn new() -> Self {
        Self {
            rules: vec![ConditionRule::default()],
        }
    }

    pub fn rules(&self) -> &[ConditionRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Append a blank rule
    pub fn add_rule(&mut self) {
        self.rules.push(ConditionRule::default());
    }

    /// Edit one part of a rule; out-of-range indices are ignored
    pub fn update_rule(&mut self, index: usize, key: RuleKey, value: impl Into<String>) {
        match self.rules.get_mut(index) {
            Some(rule) => rule.set(key, value),
            None => tracing::debug!("Ignoring edit of missing rule {}", index),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_starts_with_blank_rule() {
        let set = ConditionSet::new();
        assert_eq!(set.len(), 1);
        assert_eq!(set.rules()[0], ConditionRule::default());
    }

    #[test]
    fn test_update_rule() {
        let mut set = ConditionSet::new();
        set.add_rule();
        set.update_rule(1, RuleKey::Field, "email");
        set.update_rule(1, RuleKey::State, "Contains");
        set.update_rule(1, RuleKey::TargetField, "date");
        set.update_rule(9, RuleKey::Value, "ignored");

        let rule = &set.rules()[1];
        assert_eq!(rule.field, "email");
        assert_eq!(rule.state, "Contains");
        assert_eq!(rule.target_field, "date");
        assert_eq!(set.rules()[0], ConditionRule::default());
    }

    #[test]
    fn test_state_options_follow_field() {
        assert_eq!(state_options_for("name").len(), 4);
        assert_eq!(state_options_for("email").len(), 8);
        assert_eq!(state_options_for("date")[2], "Before");
        assert_eq!(
            state_options_for("question"),
            &["Is Equal To", "Is Not Equal To"]
        );
        assert!(state_options_for("").is_empty());
        assert!(state_options_for("unknown").is_empty());
    }

    #[test]
    fn test_rule_serializes_camel_case() {
        let mut rule = ConditionRule::default();
        rule.set(RuleKey::Action, ACTION_OPTIONS[0]);
        let json = serde_json::to_value(&rule).unwrap();
        assert_eq!(json["action"], "Hide");
        assert_eq!(json["targetField"], "");
    }
}
