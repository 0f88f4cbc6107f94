//! Contest model

use std::collections::HashMap;

use scoreboard_common::{ContestConfig, Run, Team};
use serde::Serialize;

/// One contest loaded from the data directory.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Contest {
    /// Path of the contest directory relative to the data root
    pub path: String,
    pub config: ContestConfig,
    /// Roster in team id order
    pub teams: Vec<Team>,
    /// Runs in ascending timestamp order
    pub runs: Vec<Run>,
}

impl Contest {
    /// Cutoff used when the caller does not give one: the whole contest,
    /// or every run when the contest length is unknown.
    pub fn default_cutoff(&self) -> i64 {
        match self.config.duration_ms() {
            0 => i64::MAX,
            duration => duration,
        }
    }

    /// Cutoff at which the public board froze, if the contest freezes
    pub fn frozen_cutoff(&self) -> Option<i64> {
        let duration = self.config.duration_ms();
        let frozen = self.config.frozen_time.saturating_mul(1000);
        (duration > 0 && frozen > 0 && frozen < duration).then(|| duration - frozen)
    }

    /// Roster keyed by team id
    pub fn roster(&self) -> HashMap<&str, &Team> {
        self.teams
            .iter()
            .map(|team| (team.team_id.as_str(), team))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contest(start: i64, end: i64, frozen: i64) -> Contest {
        Contest {
            config: ContestConfig {
                start_time: start,
                end_time: end,
                frozen_time: frozen,
                problem_quantity: 1,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_default_cutoff() {
        assert_eq!(contest(1000, 1000 + 5 * 3600, 0).default_cutoff(), 5 * 3600 * 1000);
        assert_eq!(contest(0, 0, 0).default_cutoff(), i64::MAX);
    }

    #[test]
    fn test_frozen_cutoff() {
        assert_eq!(
            contest(0, 5 * 3600, 3600).frozen_cutoff(),
            Some(4 * 3600 * 1000)
        );
        assert_eq!(contest(0, 5 * 3600, 0).frozen_cutoff(), None);
        assert_eq!(contest(0, 0, 3600).frozen_cutoff(), None);
        assert_eq!(contest(0, 5 * 3600, i64::MAX).frozen_cutoff(), None);
    }

    #[test]
    fn test_roster() {
        let mut contest = contest(0, 3600, 0);
        contest.teams = ["b", "a"]
            .into_iter()
            .map(|id| Team {
                team_id: id.to_string(),
                name: id.to_uppercase(),
                ..Default::default()
            })
            .collect();

        let roster = contest.roster();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster["a"].name, "A");
        assert!(!roster.contains_key("c"));
    }
}
