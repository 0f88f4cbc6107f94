//! JSON rule trees for composite team filters.
//!
//! A board may want a scoped view that no single cohort describes, such as
//! "official undergraduate teams" or "everyone except vocational teams":
//!
//! ```json
//! {"and": [{"spec": "official"}, {"not": {"spec": "vocational"}}]}
//! ```
//!
//! Parameterised filters take an `arg`:
//! `{"spec": "organization", "arg": "Lakeside College"}`. Trees are turned
//! into filters by a [`SpecRegistry`](crate::registry::SpecRegistry).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RuleConfig {
    /// A registered filter by name
    Spec {
        spec: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        arg: Option<String>,
    },
    And { and: Vec<RuleConfig> },
    Or { or: Vec<RuleConfig> },
    Not { not: Box<RuleConfig> },
}

impl RuleConfig {
    pub fn spec(name: impl Into<String>) -> Self {
        RuleConfig::Spec {
            spec: name.into(),
            arg: None,
        }
    }

    pub fn spec_with_arg(name: impl Into<String>, arg: impl Into<String>) -> Self {
        RuleConfig::Spec {
            spec: name.into(),
            arg: Some(arg.into()),
        }
    }

    pub fn and(rules: Vec<RuleConfig>) -> Self {
        RuleConfig::And { and: rules }
    }

    pub fn or(rules: Vec<RuleConfig>) -> Self {
        RuleConfig::Or { or: rules }
    }

    pub fn not(rule: RuleConfig) -> Self {
        RuleConfig::Not {
            not: Box::new(rule),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_tree_from_json() {
        let parsed: RuleConfig = serde_json::from_str(
            r#"{"or": [{"spec": "girl"}, {"not": {"spec": "label", "arg": "star"}}]}"#,
        )
        .unwrap();

        assert_eq!(
            parsed,
            RuleConfig::or(vec![
                RuleConfig::spec("girl"),
                RuleConfig::not(RuleConfig::spec_with_arg("label", "star")),
            ])
        );
    }

    #[test]
    fn test_rule_tree_writes_compact_json() {
        let rule = RuleConfig::and(vec![RuleConfig::spec("official")]);
        assert_eq!(
            serde_json::to_string(&rule).unwrap(),
            r#"{"and":[{"spec":"official"}]}"#
        );
    }

    #[test]
    fn test_rejects_unknown_shape() {
        assert!(serde_json::from_str::<RuleConfig>(r#"{"xor": []}"#).is_err());
        assert!(serde_json::from_str::<RuleConfig>(r#""girl""#).is_err());
    }
}
