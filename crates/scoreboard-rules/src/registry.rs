//! Named team filters.
//!
//! Plain group names ("girl") resolve through [`group_spec`]; rule trees
//! resolve through a [`SpecRegistry`], usually the one from
//! [`group_registry`].

use crate::config::RuleConfig;
use crate::rules::{Cohort, HasLabel, OrganizationIs};
use crate::specification::{AllOf, AlwaysTrue, AnyOf, BoxedSpec, Not, Specification};
use scoreboard_common::{groups, Team};
use std::collections::BTreeMap;
use std::sync::Arc;
use thiserror::Error;

/// Why a rule tree could not be built.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleError {
    #[error("unknown filter {name:?}, expected one of: {known}")]
    Unknown { name: String, known: String },

    #[error("filter {0:?} needs an arg")]
    MissingArg(String),

    #[error("filter {0:?} takes no arg")]
    UnexpectedArg(String),

    #[error("empty and/or list")]
    Empty,
}

enum Factory<Ctx: 'static> {
    Plain(BoxedSpec<Ctx>),
    WithArg(Box<dyn Fn(&str) -> BoxedSpec<Ctx> + Send + Sync>),
}

/// Filters by name, for building [`RuleConfig`] trees.
pub struct SpecRegistry<Ctx: 'static> {
    factories: BTreeMap<String, Factory<Ctx>>,
}

impl<Ctx: 'static> Default for SpecRegistry<Ctx> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Ctx: 'static> SpecRegistry<Ctx> {
    pub fn new() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Register a filter used as `{"spec": name}`.
    pub fn register(&mut self, name: impl Into<String>, spec: BoxedSpec<Ctx>) {
        self.factories.insert(name.into(), Factory::Plain(spec));
    }

    /// Register a filter used as `{"spec": name, "arg": ...}`.
    pub fn register_with_arg<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(&str) -> BoxedSpec<Ctx> + Send + Sync + 'static,
    {
        self.factories
            .insert(name.into(), Factory::WithArg(Box::new(factory)));
    }

    /// Registered names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    pub fn build(&self, config: &RuleConfig) -> Result<BoxedSpec<Ctx>, RuleError> {
        match config {
            RuleConfig::Spec { spec, arg } => self.create(spec, arg.as_deref()),
            RuleConfig::And { and } => Ok(Arc::new(AllOf::new(self.build_all(and)?))),
            RuleConfig::Or { or } => Ok(Arc::new(AnyOf::new(self.build_all(or)?))),
            RuleConfig::Not { not } => Ok(Arc::new(Not(self.build(not)?))),
        }
    }

    fn create(&self, name: &str, arg: Option<&str>) -> Result<BoxedSpec<Ctx>, RuleError> {
        let factory = self.factories.get(name).ok_or_else(|| RuleError::Unknown {
            name: name.to_string(),
            known: self.names().collect::<Vec<_>>().join(", "),
        })?;
        match (factory, arg) {
            (Factory::Plain(spec), None) => Ok(Arc::clone(spec)),
            (Factory::Plain(_), Some(_)) => Err(RuleError::UnexpectedArg(name.to_string())),
            (Factory::WithArg(make), Some(arg)) => Ok(make(arg)),
            (Factory::WithArg(_), None) => Err(RuleError::MissingArg(name.to_string())),
        }
    }

    fn build_all(&self, rules: &[RuleConfig]) -> Result<Vec<BoxedSpec<Ctx>>, RuleError> {
        if rules.is_empty() {
            return Err(RuleError::Empty);
        }
        rules.iter().map(|rule| self.build(rule)).collect()
    }
}

/// Every team filter: `all`, the five cohorts, `label` and `organization`.
pub fn group_registry() -> SpecRegistry<Team> {
    let mut registry = SpecRegistry::new();

    registry.register(groups::ALL, Arc::new(AlwaysTrue));
    for cohort in Cohort::ALL {
        registry.register(cohort.name(), Arc::new(cohort));
    }
    registry.register_with_arg("label", |label| Arc::new(HasLabel::new(label)));
    registry.register_with_arg("organization", |name| Arc::new(OrganizationIs::new(name)));

    registry
}

/// Resolve a group name into a team filter.
///
/// `""` and `"all"` match every team. Unknown names also match every team:
/// callers should read them as "no filter", not as an error.
pub fn group_spec(group: &str) -> BoxedSpec<Team> {
    match Cohort::from_name(group) {
        Some(cohort) => Arc::new(cohort),
        None => Arc::new(AlwaysTrue),
    }
}

/// Check whether `team` belongs to the named group.
pub fn belongs_to_group(team: &Team, group: &str) -> bool {
    group_spec(group).is_satisfied_by(team)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(flags: impl FnOnce(&mut Team)) -> Team {
        let mut team = Team {
            team_id: "t".to_string(),
            organization: "Lakeside College".to_string(),
            ..Default::default()
        };
        flags(&mut team);
        team
    }

    #[test]
    fn test_all_and_empty_match_everyone() {
        let plain = team(|_| {});
        assert!(belongs_to_group(&plain, ""));
        assert!(belongs_to_group(&plain, "all"));
    }

    #[test]
    fn test_unknown_group_is_permissive() {
        let plain = team(|_| {});
        assert!(belongs_to_group(&plain, "postgraduate"));
    }

    #[test]
    fn test_named_cohorts() {
        let girls = team(|t| t.girl = true);
        assert!(belongs_to_group(&girls, "girl"));
        assert!(!belongs_to_group(&girls, "official"));

        let labelled = team(|t| t.group = vec!["vocational".to_string()]);
        assert!(belongs_to_group(&labelled, "vocational"));
        assert!(!belongs_to_group(&labelled, "undergraduate"));
    }

    #[test]
    fn test_cohorts_are_not_exclusive() {
        let both = team(|t| {
            t.official = true;
            t.unofficial = true;
            t.group = vec!["undergraduate".to_string()];
        });
        assert!(belongs_to_group(&both, "official"));
        assert!(belongs_to_group(&both, "unofficial"));
        assert!(belongs_to_group(&both, "undergraduate"));
    }

    #[test]
    fn test_official_but_not_girl() {
        let registry = group_registry();
        let rule = RuleConfig::and(vec![
            RuleConfig::spec("official"),
            RuleConfig::not(RuleConfig::spec("girl")),
        ]);
        let spec = registry.build(&rule).unwrap();

        assert!(spec.is_satisfied_by(&team(|t| t.official = true)));
        assert!(!spec.is_satisfied_by(&team(|t| {
            t.official = true;
            t.girl = true;
        })));
        assert!(!spec.is_satisfied_by(&team(|_| {})));
    }

    #[test]
    fn test_label_or_organization() {
        let registry = group_registry();
        let spec = registry
            .build(&RuleConfig::or(vec![
                RuleConfig::spec_with_arg("label", "star"),
                RuleConfig::spec_with_arg("organization", "Hill Institute"),
            ]))
            .unwrap();

        assert!(spec.is_satisfied_by(&team(|t| t.group = vec!["star".to_string()])));
        assert!(spec.is_satisfied_by(&team(|t| t.organization = "Hill Institute".to_string())));
        assert!(!spec.is_satisfied_by(&team(|_| {})));
    }

    #[test]
    fn test_build_errors() {
        let registry = group_registry();

        let err = registry.build(&RuleConfig::spec("martian")).err().unwrap();
        assert_eq!(
            err.to_string(),
            "unknown filter \"martian\", expected one of: all, girl, label, official, \
             organization, undergraduate, unofficial, vocational"
        );
        assert_eq!(
            registry.build(&RuleConfig::spec("label")).err(),
            Some(RuleError::MissingArg("label".to_string()))
        );
        assert_eq!(
            registry
                .build(&RuleConfig::spec_with_arg("girl", "yes"))
                .err(),
            Some(RuleError::UnexpectedArg("girl".to_string()))
        );
        assert_eq!(
            registry
                .build(&RuleConfig::not(RuleConfig::or(vec![])))
                .err(),
            Some(RuleError::Empty)
        );
    }
}
