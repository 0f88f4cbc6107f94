//! Standings builder: the ranked scoreboard table.

use std::collections::HashMap;

use scoreboard_common::{ContestConfig, EngineResult, Run, Team, TeamId};
use scoreboard_rules::{group_spec, specification::Specification};
use serde::{Deserialize, Serialize};

use crate::cell::{CellUpdate, ProblemCell};
use crate::stream::{chronological, problem_index, roster_index};

/// One ranked team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team_id: TeamId,
    /// Display name
    pub team: String,
    pub organization: String,
    pub girl: bool,
    pub official: bool,
    pub unofficial: bool,
    pub undergraduate: bool,
    pub vocational: bool,
    /// 1-based position in the table
    pub place: usize,
    /// Place of the team's organization among organizations
    pub org_place: usize,
    pub solved: u32,
    /// Minutes, summed over solved problems only
    pub penalty: i64,
    /// Rejections / runs, over solved problems only
    pub dirty: f64,
    pub problems: Vec<ProblemCell>,
}

impl StandingsRow {
    fn new(team: &Team, problem_count: usize) -> Self {
        Self {
            team_id: team.team_id.clone(),
            team: team.name.clone(),
            organization: team.organization.clone(),
            girl: team.girl,
            official: team.official,
            unofficial: team.unofficial,
            undergraduate: team.undergraduate,
            vocational: team.vocational,
            place: 0,
            org_place: 0,
            solved: 0,
            penalty: 0,
            dirty: 0.0,
            problems: vec![ProblemCell::default(); problem_count],
        }
    }
}

/// A scoreboard snapshot: ranked rows plus per-problem aggregates.
///
/// Every per-problem vector has one entry per problem, indexed like
/// `StandingsRow::problems`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standings {
    pub rows: Vec<StandingsRow>,
    /// Counted runs
    pub submitted: Vec<u32>,
    /// Counted runs on cells that ended up solved
    pub attempted: Vec<u32>,
    /// Teams that solved the problem
    pub accepted: Vec<u32>,
    /// Rejections before acceptance, over solved cells
    pub dirt: Vec<u32>,
    /// `dirt / attempted`, 0 when nothing was attempted
    pub dirty: Vec<f64>,
    /// Minute of the first acceptance, `None` if unsolved
    pub first_solved: Vec<Option<i64>>,
    /// Minute of the latest acceptance, `None` if unsolved
    pub last_solved: Vec<Option<i64>>,
}

impl Standings {
    fn empty(problem_count: usize) -> Self {
        Self {
            rows: Vec::new(),
            submitted: vec![0; problem_count],
            attempted: vec![0; problem_count],
            accepted: vec![0; problem_count],
            dirt: vec![0; problem_count],
            dirty: vec![0.0; problem_count],
            first_solved: vec![None; problem_count],
            last_solved: vec![None; problem_count],
        }
    }

    /// Look up a team's row
    pub fn row(&self, team_id: &str) -> Option<&StandingsRow> {
        self.rows.iter().find(|row| row.team_id == team_id)
    }
}

/// Build the standings as of `cutoff_ms` for the teams in `group`.
///
/// Runs later than the cutoff are excluded entirely. `group` is a cohort
/// name; `""`, `"all"` and unknown names select every team.
///
/// # Errors
///
/// - `Configuration` if the contest has no problems
/// - `Data` if an admitted run references a problem outside the contest
pub fn build_standings(
    teams: &[Team],
    runs: &[Run],
    config: &ContestConfig,
    cutoff_ms: i64,
    group: &str,
) -> EngineResult<Standings> {
    let filter = group_spec(group);
    build_standings_with(teams, runs, config, cutoff_ms, filter.as_ref())
}

/// [`build_standings`] with an arbitrary team filter.
pub fn build_standings_with(
    teams: &[Team],
    runs: &[Run],
    config: &ContestConfig,
    cutoff_ms: i64,
    filter: &dyn Specification<Team>,
) -> EngineResult<Standings> {
    let problem_count = config.problem_count()?;
    let penalty_per_rejection = config.penalty_minutes();

    let members: Vec<&Team> = teams
        .iter()
        .filter(|team| filter.is_satisfied_by(team))
        .collect();
    let index = roster_index(&members);

    let mut standings = Standings::empty(problem_count);
    let mut rows: Vec<StandingsRow> = members
        .iter()
        .map(|team| StandingsRow::new(team, problem_count))
        .collect();

    let mut skipped = 0usize;
    for run in chronological(runs) {
        if run.timestamp > cutoff_ms {
            continue;
        }
        let Some(&position) = index.get(run.team_id.as_str()) else {
            skipped += 1;
            continue;
        };
        let problem = problem_index(run, problem_count)?;

        let minute = run.minute();
        let row = &mut rows[position];
        let cell = &mut row.problems[problem];
        if cell.record(run.verdict(), minute, penalty_per_rejection) != CellUpdate::Accepted {
            continue;
        }

        row.solved += 1;
        row.penalty += cell.penalty;

        standings.last_solved[problem] = Some(minute);
        if standings.first_solved[problem].is_none() {
            standings.first_solved[problem] = Some(minute);
            cell.first_solved = true;
        }
    }

    if skipped > 0 {
        tracing::debug!(
            skipped,
            "Skipped runs from teams outside the roster or the selected group"
        );
    }

    aggregate(&mut standings, &mut rows);
    rank(&mut rows);
    standings.rows = rows;

    tracing::debug!(
        teams = standings.rows.len(),
        runs = runs.len(),
        problems = problem_count,
        "Standings built"
    );

    Ok(standings)
}

/// Fill the per-problem counters and each team's error rate.
fn aggregate(standings: &mut Standings, rows: &mut [StandingsRow]) {
    for row in rows.iter_mut() {
        let mut dirt = 0u32;
        let mut submitted = 0u32;

        for (problem, cell) in row.problems.iter().enumerate() {
            standings.submitted[problem] += cell.submitted;
            if cell.solved {
                standings.accepted[problem] += 1;
                standings.attempted[problem] += cell.submitted;
                standings.dirt[problem] += cell.dirt;

                dirt += cell.dirt;
                submitted += cell.submitted;
            }
        }

        row.dirty = ratio(dirt, submitted);
    }

    for (problem, dirty) in standings.dirty.iter_mut().enumerate() {
        *dirty = ratio(standings.dirt[problem], standings.attempted[problem]);
    }
}

/// Order rows and assign overall and organization places.
///
/// Solved count descending, then penalty ascending; the sort is stable so
/// remaining ties keep roster order. An organization's place is taken from
/// its best-placed team and shared by all of its teams.
fn rank(rows: &mut [StandingsRow]) {
    rows.sort_by(|a, b| b.solved.cmp(&a.solved).then(a.penalty.cmp(&b.penalty)));

    let mut org_places: HashMap<String, usize> = HashMap::new();
    let mut next_org_place = 1;
    for (position, row) in rows.iter_mut().enumerate() {
        row.place = position + 1;
        row.org_place = *org_places
            .entry(row.organization.clone())
            .or_insert_with(|| {
                let place = next_org_place;
                next_org_place += 1;
                place
            });
    }
}

fn ratio(numerator: u32, denominator: u32) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        f64::from(numerator) / f64::from(denominator)
    }
}
