//! Board request and report models

use scoreboard_engine::{Standings, Statistics};
use scoreboard_rules::RuleConfig;
use serde::{Deserialize, Serialize};

/// Scope of a standings, statistics or submission computation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BoardQuery {
    /// Cohort name; empty or `all` for every team
    #[serde(default)]
    pub group: String,
    /// Cutoff in milliseconds; the whole contest when absent
    #[serde(default)]
    pub cutoff_ms: Option<i64>,
    /// Without an explicit cutoff, stop at the freeze instead of the end
    #[serde(default)]
    pub frozen: bool,
    /// Extra team filter, applied on top of the cohort
    #[serde(default)]
    pub filter: Option<RuleConfig>,
}

/// Standings of one cohort.
#[derive(Debug, Clone, Serialize)]
pub struct GroupStandings {
    pub group: String,
    pub standings: Standings,
}

/// Every cohort's standings plus contest-wide statistics, computed at one
/// cutoff.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub contest: String,
    pub cutoff_ms: i64,
    pub statistics: Statistics,
    pub groups: Vec<GroupStandings>,
}
