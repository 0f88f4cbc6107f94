//! Common types shared by the engine and its callers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::flex;

/// Team ID type
pub type TeamId = String;

/// Roster as stored on disk: team id -> team.
///
/// A `BTreeMap` keeps iteration order stable, which in turn keeps the
/// residual tie order of the standings stable across runs.
pub type TeamList = BTreeMap<TeamId, Team>;

/// Submission log as stored on disk.
pub type RunList = Vec<Run>;

/// Penalty charged per rejected submission when the contest does not say otherwise
pub const DEFAULT_PENALTY_MINUTES: i64 = 20;

/// Milliseconds in one contest minute
pub const MILLIS_PER_MINUTE: i64 = 60 * 1000;

/// Cohort names understood by the group filter
pub mod groups {
    pub const ALL: &str = "all";
    pub const GIRL: &str = "girl";
    pub const OFFICIAL: &str = "official";
    pub const UNOFFICIAL: &str = "unofficial";
    pub const UNDERGRADUATE: &str = "undergraduate";
    pub const VOCATIONAL: &str = "vocational";

    /// Every named cohort (excluding `all`)
    pub const COHORTS: &[&str] = &[GIRL, OFFICIAL, UNOFFICIAL, UNDERGRADUATE, VOCATIONAL];
}

/// Verdict strings the engine treats specially
pub mod verdicts {
    pub const ACCEPTED: &str = "ACCEPTED";
    pub const COMPILATION_ERROR: &str = "COMPILATION_ERROR";
}

/// A participating team.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    #[serde(default, deserialize_with = "flex::string")]
    pub team_id: TeamId,
    #[serde(default, deserialize_with = "flex::string")]
    pub name: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub coach: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub members: Vec<String>,
    /// Free-form group labels, ORed with the boolean flags below
    #[serde(default)]
    pub group: Vec<String>,
    #[serde(default, deserialize_with = "flex::boolean")]
    pub official: bool,
    #[serde(default, deserialize_with = "flex::boolean")]
    pub unofficial: bool,
    #[serde(default, deserialize_with = "flex::boolean")]
    pub girl: bool,
    #[serde(default, deserialize_with = "flex::boolean")]
    pub undergraduate: bool,
    #[serde(default, deserialize_with = "flex::boolean")]
    pub vocational: bool,
}

impl Team {
    /// Check whether the team carries a group label
    pub fn has_label(&self, label: &str) -> bool {
        self.group.iter().any(|g| g == label)
    }

    /// Check if the team competes out of competition
    pub fn is_unofficial(&self) -> bool {
        self.unofficial || self.has_label(groups::UNOFFICIAL)
    }
}

/// How the scoring core reads a verdict string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunStatus {
    /// Problem solved
    Accepted,
    /// Never scored in standings, counted as a rejection in statistics
    CompilationError,
    /// Any other verdict, including ones the engine has never heard of
    Rejected,
}

impl RunStatus {
    /// Classify a raw verdict string. Unknown strings are rejections.
    pub fn classify(status: &str) -> Self {
        match status {
            verdicts::ACCEPTED => RunStatus::Accepted,
            verdicts::COMPILATION_ERROR => RunStatus::CompilationError,
            _ => RunStatus::Rejected,
        }
    }
}

/// A judged submission ("run").
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    #[serde(default)]
    pub status: String,
    #[serde(default, deserialize_with = "flex::string")]
    pub team_id: TeamId,
    /// 0-based problem index (A = 0)
    #[serde(default)]
    pub problem_id: i64,
    /// Milliseconds since contest start
    #[serde(default)]
    pub timestamp: i64,
    #[serde(default)]
    pub language: String,
    #[serde(default, deserialize_with = "flex::string")]
    pub submission_id: String,
}

impl Run {
    /// Contest minute of the submission, rounded down
    pub fn minute(&self) -> i64 {
        self.timestamp / MILLIS_PER_MINUTE
    }

    pub fn verdict(&self) -> RunStatus {
        RunStatus::classify(&self.status)
    }

    /// Problem letter (A, B, ..., Z, AA, ...)
    pub fn problem_label(&self) -> String {
        usize::try_from(self.problem_id)
            .map(problem_label)
            .unwrap_or_else(|_| self.problem_id.to_string())
    }
}

/// Render a 0-based problem index as a spreadsheet-style letter.
pub fn problem_label(index: usize) -> String {
    let mut label = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        label.push(b'A' + (n % 26) as u8);
        n /= 26;
    }
    label.reverse();
    String::from_utf8_lossy(&label).into_owned()
}

/// Contest parameters as exported with the board.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContestConfig {
    #[serde(default)]
    pub contest_name: String,
    /// Unix seconds
    #[serde(default)]
    pub start_time: i64,
    /// Unix seconds
    #[serde(default)]
    pub end_time: i64,
    /// Seconds before the end at which the public board freezes
    #[serde(default)]
    pub frozen_time: i64,
    /// Penalty per rejected submission, in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalty: Option<i64>,
    #[serde(default)]
    pub problem_quantity: i64,
    #[serde(default)]
    pub problem_id: Vec<String>,
    /// Group label -> display name
    #[serde(default)]
    pub group: BTreeMap<String, String>,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub medal: Medal,
    #[serde(default)]
    pub link: Link,
    #[serde(default)]
    pub options: Options,
}

impl ContestConfig {
    /// Number of problems, rejecting non-positive counts.
    pub fn problem_count(&self) -> EngineResult<usize> {
        if self.problem_quantity <= 0 {
            return Err(EngineError::Configuration(format!(
                "problem_quantity must be positive, got {}",
                self.problem_quantity
            )));
        }
        usize::try_from(self.problem_quantity).map_err(|_| {
            EngineError::Configuration(format!(
                "problem_quantity {} does not fit in memory",
                self.problem_quantity
            ))
        })
    }

    /// Penalty per rejection in minutes.
    ///
    /// Falls back to [`DEFAULT_PENALTY_MINUTES`] when the contest does not
    /// configure one.
    pub fn penalty_minutes(&self) -> i64 {
        match self.penalty {
            Some(seconds) if seconds > 0 => seconds / 60,
            _ => DEFAULT_PENALTY_MINUTES,
        }
    }

    /// Contest length in milliseconds, 0 if unknown
    pub fn duration_ms(&self) -> i64 {
        self.end_time
            .saturating_sub(self.start_time)
            .max(0)
            .saturating_mul(1000)
    }

    /// Display label for problem `index`
    pub fn problem_name(&self, index: usize) -> String {
        self.problem_id
            .get(index)
            .cloned()
            .unwrap_or_else(|| problem_label(index))
    }
}

/// Medal configuration.
///
/// Boards either name a preset (`"medal": "ccpc"`) or spell out the quotas.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MedalRepr")]
pub struct Medal {
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    #[serde(default)]
    pub official: OfficialMedal,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MedalRepr {
    Preset(String),
    Full {
        #[serde(rename = "type", default)]
        kind: String,
        #[serde(default)]
        official: OfficialMedal,
    },
}

impl From<MedalRepr> for Medal {
    fn from(repr: MedalRepr) -> Self {
        match repr {
            MedalRepr::Preset(kind) => Medal {
                kind,
                official: OfficialMedal::default(),
            },
            MedalRepr::Full { kind, official } => Medal { kind, official },
        }
    }
}

impl Medal {
    pub fn is_enabled(&self) -> bool {
        !self.kind.trim().is_empty()
    }
}

/// Medal quotas for official teams
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficialMedal {
    #[serde(default)]
    pub gold: u32,
    #[serde(default)]
    pub silver: u32,
    #[serde(default)]
    pub bronze: u32,
}

/// Related links
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub homepage: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub registration: String,
}

/// Miscellaneous board options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub calculation_of_penalty: String,
}
