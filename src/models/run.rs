//! Submission listing models

use serde::{Deserialize, Serialize};

/// Filters for the submission listing. Empty strings match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RunQuery {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub team_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub language: String,
    /// Cutoff in milliseconds; the whole contest when absent
    #[serde(default)]
    pub cutoff_ms: Option<i64>,
    /// 1-based
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub page_size: usize,
}

/// One listed submission joined with its team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunRecord {
    pub id: String,
    pub team_id: String,
    /// Problem letter
    pub problem_id: String,
    pub team: String,
    pub organization: String,
    pub girl: bool,
    pub unofficial: bool,
    pub language: String,
    pub status: String,
    /// Milliseconds since contest start
    pub timestamp: i64,
    /// `timestamp` as `H:MM:SS`
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    pub team_id: String,
    pub team: String,
}

/// A page of the submission listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunPage {
    /// Matching submissions before pagination
    pub total: usize,
    /// Newest first
    pub data: Vec<RunRecord>,
    /// Every organization of the roster, sorted
    pub schools: Vec<String>,
    pub participants: Vec<Participant>,
}
