//! Trend tracker: one team's place over the course of the contest.

use std::cmp::Ordering;

use scoreboard_common::{ContestConfig, EngineError, EngineResult, Run, Team};
use serde::{Deserialize, Serialize};

use crate::cell::{CellUpdate, ProblemCell};
use crate::stream::{chronological, problem_index, roster_index};

/// The target's place from `time` (ms) until the next point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub place: usize,
    pub time: i64,
}

/// (solved, penalty) of one team.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Score {
    solved: u32,
    penalty: i64,
}

impl Score {
    /// More solved, or as many with less penalty. Ties are not better.
    fn beats(self, other: Score) -> bool {
        match self.solved.cmp(&other.solved) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => self.penalty < other.penalty,
        }
    }
}

/// A validated run: who, which problem.
struct Event<'a> {
    run: &'a Run,
    team: usize,
    problem: usize,
}

/// Lazy replay of the submission log yielding the target's place changes.
///
/// The first point is always place 1 at time 0. A new point is produced
/// only when the place differs from the previous one.
pub struct TrendReplay<'a> {
    events: Vec<Event<'a>>,
    cursor: usize,
    problem_count: usize,
    penalty_per_rejection: i64,
    cells: Vec<ProblemCell>,
    scores: Vec<Score>,
    target: usize,
    /// Teams currently strictly better than the target
    ahead: usize,
    place: Option<usize>,
}

impl<'a> TrendReplay<'a> {
    /// Prepare a replay for `target_team_id`.
    ///
    /// Problem indices of roster teams' runs are checked up front, so the
    /// iterator itself cannot fail. Runs of teams outside the roster are
    /// ignored.
    pub fn new(
        teams: &'a [Team],
        runs: &'a [Run],
        config: &ContestConfig,
        target_team_id: &str,
    ) -> EngineResult<Self> {
        let problem_count = config.problem_count()?;

        let roster: Vec<&Team> = teams.iter().collect();
        let index = roster_index(&roster);
        let target = *index
            .get(target_team_id)
            .ok_or_else(|| EngineError::NotFound(format!("team {target_team_id:?}")))?;

        let events = chronological(runs)
            .into_iter()
            .filter_map(|run| {
                let team = *index.get(run.team_id.as_str())?;
                Some(problem_index(run, problem_count).map(|problem| Event { run, team, problem }))
            })
            .collect::<EngineResult<Vec<_>>>()?;

        Ok(Self {
            events,
            cursor: 0,
            problem_count,
            penalty_per_rejection: config.penalty_minutes(),
            cells: vec![ProblemCell::default(); roster.len() * problem_count],
            scores: vec![Score::default(); roster.len()],
            target,
            ahead: 0,
            place: None,
        })
    }

    fn recount(&mut self) {
        let target = self.scores[self.target];
        self.ahead = self
            .scores
            .iter()
            .enumerate()
            .filter(|&(team, score)| team != self.target && score.beats(target))
            .count();
    }
}

impl Iterator for TrendReplay<'_> {
    type Item = TrendPoint;

    fn next(&mut self) -> Option<TrendPoint> {
        if self.place.is_none() {
            self.place = Some(1);
            return Some(TrendPoint { place: 1, time: 0 });
        }

        while let Some(event) = self.events.get(self.cursor) {
            self.cursor += 1;
            let (team, time) = (event.team, event.run.timestamp);

            let cell = &mut self.cells[team * self.problem_count + event.problem];
            let update = cell.record(
                event.run.verdict(),
                event.run.minute(),
                self.penalty_per_rejection,
            );
            if update != CellUpdate::Accepted {
                continue;
            }

            let before = self.scores[team];
            let after = Score {
                solved: before.solved + 1,
                penalty: before.penalty + cell.penalty,
            };
            self.scores[team] = after;

            if team == self.target {
                self.recount();
            } else {
                let target = self.scores[self.target];
                match (before.beats(target), after.beats(target)) {
                    (false, true) => self.ahead += 1,
                    (true, false) => self.ahead -= 1,
                    _ => {}
                }
            }

            let place = self.ahead + 1;
            if self.place != Some(place) {
                self.place = Some(place);
                return Some(TrendPoint { place, time });
            }
        }

        None
    }
}

/// Collect the whole trend of `target_team_id`.
///
/// # Errors
///
/// - `NotFound` if the team is not on the roster
/// - `Configuration` if the contest has no problems
/// - `Data` if a roster team's run references a problem outside the contest
pub fn build_trend(
    teams: &[Team],
    runs: &[Run],
    config: &ContestConfig,
    target_team_id: &str,
) -> EngineResult<Vec<TrendPoint>> {
    let trend: Vec<TrendPoint> = TrendReplay::new(teams, runs, config, target_team_id)?.collect();
    tracing::debug!(team = target_team_id, points = trend.len(), "Trend built");
    Ok(trend)
}
