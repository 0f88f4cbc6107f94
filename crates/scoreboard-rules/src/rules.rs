//! Team cohort rules and submission-listing predicates.

use scoreboard_common::groups;
use scoreboard_common::{Team, TeamId};

use crate::context::RunContext;
use crate::specification::{BoxedSpec, Specification};

// =============================================================================
// Team cohorts
// =============================================================================

/// A named cohort of teams.
///
/// Membership is the team's boolean flag OR the cohort name in its group
/// labels, so one team can belong to several cohorts at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cohort {
    Girl,
    Official,
    Unofficial,
    Undergraduate,
    Vocational,
}

impl Cohort {
    pub const ALL: [Cohort; 5] = [
        Cohort::Girl,
        Cohort::Official,
        Cohort::Unofficial,
        Cohort::Undergraduate,
        Cohort::Vocational,
    ];

    /// Look up a cohort by its group name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            groups::GIRL => Some(Cohort::Girl),
            groups::OFFICIAL => Some(Cohort::Official),
            groups::UNOFFICIAL => Some(Cohort::Unofficial),
            groups::UNDERGRADUATE => Some(Cohort::Undergraduate),
            groups::VOCATIONAL => Some(Cohort::Vocational),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Cohort::Girl => groups::GIRL,
            Cohort::Official => groups::OFFICIAL,
            Cohort::Unofficial => groups::UNOFFICIAL,
            Cohort::Undergraduate => groups::UNDERGRADUATE,
            Cohort::Vocational => groups::VOCATIONAL,
        }
    }

    fn flag(&self, team: &Team) -> bool {
        match self {
            Cohort::Girl => team.girl,
            Cohort::Official => team.official,
            Cohort::Unofficial => team.unofficial,
            Cohort::Undergraduate => team.undergraduate,
            Cohort::Vocational => team.vocational,
        }
    }
}

impl std::fmt::Display for Cohort {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Specification<Team> for Cohort {
    fn is_satisfied_by(&self, team: &Team) -> bool {
        self.flag(team) || team.has_label(self.name())
    }
}

/// Check if the team carries an arbitrary group label.
pub struct HasLabel {
    pub label: String,
}

impl HasLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl Specification<Team> for HasLabel {
    fn is_satisfied_by(&self, team: &Team) -> bool {
        team.has_label(&self.label)
    }
}

/// Check if the team belongs to the given organization.
pub struct OrganizationIs {
    pub organization: String,
}

impl OrganizationIs {
    pub fn new(organization: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
        }
    }
}

impl Specification<Team> for OrganizationIs {
    fn is_satisfied_by(&self, team: &Team) -> bool {
        team.organization == self.organization
    }
}

// =============================================================================
// Submission listing
// =============================================================================
//
// An empty filter value means "no filter", matching the query-string
// convention of the listing endpoint.

/// The run was submitted at or before the cutoff (milliseconds).
pub struct NotAfter(pub i64);

impl<'a> Specification<RunContext<'a>> for NotAfter {
    fn is_satisfied_by(&self, ctx: &RunContext<'a>) -> bool {
        ctx.run.timestamp <= self.0
    }
}

/// The submitting team satisfies a team-level rule (usually a cohort).
pub struct InGroup(pub BoxedSpec<Team>);

impl<'a> Specification<RunContext<'a>> for InGroup {
    fn is_satisfied_by(&self, ctx: &RunContext<'a>) -> bool {
        self.0.is_satisfied_by(ctx.team)
    }
}

/// The submitting team's organization matches exactly.
pub struct SchoolIs(pub String);

impl<'a> Specification<RunContext<'a>> for SchoolIs {
    fn is_satisfied_by(&self, ctx: &RunContext<'a>) -> bool {
        self.0.is_empty() || ctx.team.organization == self.0
    }
}

/// The run belongs to the given team.
pub struct TeamIs(pub TeamId);

impl<'a> Specification<RunContext<'a>> for TeamIs {
    fn is_satisfied_by(&self, ctx: &RunContext<'a>) -> bool {
        self.0.is_empty() || ctx.team.team_id == self.0
    }
}

/// The run was written in the given language.
pub struct LanguageIs(pub String);

impl<'a> Specification<RunContext<'a>> for LanguageIs {
    fn is_satisfied_by(&self, ctx: &RunContext<'a>) -> bool {
        self.0.is_empty() || ctx.run.language == self.0
    }
}

/// The run carries the given raw verdict string.
pub struct StatusIs(pub String);

impl<'a> Specification<RunContext<'a>> for StatusIs {
    fn is_satisfied_by(&self, ctx: &RunContext<'a>) -> bool {
        self.0.is_empty() || ctx.run.status == self.0
    }
}
