//! Fixture builders for the engine tests.

use scoreboard_common::{ContestConfig, Run, Team, MILLIS_PER_MINUTE};

/// A team with no flags or labels.
pub fn team(id: &str, organization: &str) -> Team {
    Team {
        team_id: id.to_string(),
        name: format!("Team {id}"),
        organization: organization.to_string(),
        ..Default::default()
    }
}

/// A run submitted at the start of `minute`.
pub fn run(team_id: &str, problem: i64, status: &str, minute: i64) -> Run {
    run_at(team_id, problem, status, minute * MILLIS_PER_MINUTE)
}

/// A run submitted at an exact millisecond offset.
pub fn run_at(team_id: &str, problem: i64, status: &str, timestamp: i64) -> Run {
    Run {
        status: status.to_string(),
        team_id: team_id.to_string(),
        problem_id: problem,
        timestamp,
        language: "C++".to_string(),
        submission_id: format!("{team_id}-{problem}-{timestamp}"),
    }
}

/// A contest with `problems` problems and the default penalty.
pub fn contest(problems: i64) -> ContestConfig {
    ContestConfig {
        contest_name: "Fixture Cup".to_string(),
        problem_quantity: problems,
        ..Default::default()
    }
}

/// Cutoff that admits every run.
pub const NO_CUTOFF: i64 = i64::MAX;
