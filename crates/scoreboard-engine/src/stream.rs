//! Helpers shared by the builders for walking the submission log.

use std::collections::HashMap;

use scoreboard_common::{EngineError, EngineResult, Run, Team};

/// Borrow the runs in ascending timestamp order.
///
/// The sort is stable, so runs sharing a timestamp keep their log order.
/// The caller's slice is never reordered.
pub(crate) fn chronological(runs: &[Run]) -> Vec<&Run> {
    let mut ordered: Vec<&Run> = runs.iter().collect();
    if !ordered.is_sorted_by_key(|run| run.timestamp) {
        ordered.sort_by_key(|run| run.timestamp);
    }
    ordered
}

/// Validate a run's problem index against the contest's problem count.
pub(crate) fn problem_index(run: &Run, problem_count: usize) -> EngineResult<usize> {
    usize::try_from(run.problem_id)
        .ok()
        .filter(|&index| index < problem_count)
        .ok_or_else(|| {
            EngineError::Data(format!(
                "run {:?} of team {:?} references problem {} outside [0, {})",
                run.submission_id, run.team_id, run.problem_id, problem_count
            ))
        })
}

/// Team id -> position in `teams`.
pub(crate) fn roster_index<'a>(teams: &[&'a Team]) -> HashMap<&'a str, usize> {
    teams
        .iter()
        .enumerate()
        .map(|(position, team)| (team.team_id.as_str(), position))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{run, team};

    #[test]
    fn test_chronological_is_stable_and_non_mutating() {
        let runs = vec![
            run("b", 0, "ACCEPTED", 10),
            run("a", 0, "WRONG_ANSWER", 5),
            run("c", 0, "ACCEPTED", 10),
        ];
        let ordered = chronological(&runs);
        let teams: Vec<&str> = ordered.iter().map(|r| r.team_id.as_str()).collect();
        assert_eq!(teams, vec!["a", "b", "c"]);
        assert_eq!(runs[0].team_id, "b");
    }

    #[test]
    fn test_problem_index_bounds() {
        assert_eq!(problem_index(&run("a", 2, "ACCEPTED", 1), 3), Ok(2));
        assert!(matches!(
            problem_index(&run("a", 3, "ACCEPTED", 1), 3),
            Err(EngineError::Data(_))
        ));
        assert!(matches!(
            problem_index(&run("a", -1, "ACCEPTED", 1), 3),
            Err(EngineError::Data(_))
        ));
    }

    #[test]
    fn test_roster_index() {
        let roster = [team("x", "Org"), team("y", "Org")];
        let refs: Vec<&Team> = roster.iter().collect();
        let index = roster_index(&refs);
        assert_eq!(index["x"], 0);
        assert_eq!(index["y"], 1);
    }
}
