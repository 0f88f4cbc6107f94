//! Contest index model

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use scoreboard_common::ContestConfig;
use serde::{Deserialize, Serialize};

/// Top level of `contest_list.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContestList {
    /// Training camps: organization -> year -> contest
    #[serde(default)]
    pub camp: BTreeMap<String, YearGroup>,
    #[serde(default, rename = "provincial-contest")]
    pub provincial_contest: YearGroup,
    #[serde(default)]
    pub ccpc: YearGroup,
    #[serde(default)]
    pub icpc: YearGroup,
}

/// Year -> contest group
pub type YearGroup = BTreeMap<String, ContestGroup>;

/// Contest key -> contest
pub type ContestGroup = BTreeMap<String, ContestEntry>;

/// One contest of the index.
///
/// `config` is required and unknown keys are rejected, so a list nested one
/// level too deep fails to load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContestEntry {
    #[serde(default)]
    pub board_link: String,
    pub config: ContestConfig,
}

impl ContestList {
    /// Every contest of the index, camps first, then provincial, CCPC and
    /// ICPC contests, each in key order.
    pub fn walk(&self) -> Vec<&ContestEntry> {
        let years = self
            .camp
            .values()
            .chain([&self.provincial_contest, &self.ccpc, &self.icpc]);

        years
            .flat_map(|year| year.values())
            .flat_map(|group| group.values())
            .collect()
    }
}

impl ContestEntry {
    /// Get the status of the contest at `now`
    pub fn status(&self, now: DateTime<Utc>) -> ContestStatus {
        let now = now.timestamp();
        if now < self.config.start_time {
            ContestStatus::Upcoming
        } else if now < self.config.end_time {
            ContestStatus::Ongoing
        } else {
            ContestStatus::Ended
        }
    }
}

/// Contest status enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContestStatus {
    Upcoming,
    Ongoing,
    Ended,
}

impl std::fmt::Display for ContestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Upcoming => write!(f, "upcoming"),
            Self::Ongoing => write!(f, "ongoing"),
            Self::Ended => write!(f, "ended"),
        }
    }
}
