//! Statistics aggregator: contest-wide and per-problem activity.
//!
//! Unlike the standings, every admitted run counts here. A run is either
//! accepted or rejected, and compile errors are rejections.

use std::collections::{BTreeMap, HashMap, HashSet};

use scoreboard_common::{ContestConfig, EngineError, EngineResult, Run, RunStatus, Team};
use scoreboard_rules::{group_spec, specification::Specification};
use serde::{Deserialize, Serialize};

use crate::stream::{problem_index, roster_index};

/// How heatmap timestamps are grouped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeatmapResolution {
    /// One item per distinct submission timestamp
    #[default]
    Exact,
    /// This many near equal-width buckets spanning `[0, cutoff]`
    Buckets(usize),
}

impl HeatmapResolution {
    /// `0` means exact timestamps.
    pub fn from_bucket_count(buckets: usize) -> Self {
        match buckets {
            0 => Self::Exact,
            n => Self::Buckets(n),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatisticsOptions {
    pub resolution: HeatmapResolution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeatmapItem {
    /// Milliseconds from contest start; the bucket start when bucketed
    pub timestamp: i64,
    pub count: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunHeatmap {
    pub accepted: Vec<HeatmapItem>,
    pub rejected: Vec<HeatmapItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub problem_count: usize,
    /// Roster teams in the selected group
    pub team_count: usize,
    pub run_count: u32,
    pub accepted_count: u32,
    pub rejected_count: u32,
    /// `accepted_count / run_count`, 0 without runs
    pub accepted_rate: f64,
    pub run_heatmap: RunHeatmap,
    pub problem_run_heatmap: Vec<RunHeatmap>,
    pub problem_run_count: Vec<u32>,
    pub problem_accepted_count: Vec<u32>,
    pub problem_rejected_count: Vec<u32>,
    /// Entry `k` is the number of teams that solved exactly `k` problems
    pub accepted_team_count: Vec<usize>,
}

/// Build contest statistics as of `cutoff_ms` for the teams in `group`.
///
/// # Errors
///
/// - `Configuration` if the contest has no problems or `Buckets(0)` is
///   requested
/// - `Data` if an admitted run references a problem outside the contest
pub fn build_statistics(
    teams: &[Team],
    runs: &[Run],
    config: &ContestConfig,
    cutoff_ms: i64,
    group: &str,
    options: &StatisticsOptions,
) -> EngineResult<Statistics> {
    let filter = group_spec(group);
    build_statistics_with(teams, runs, config, cutoff_ms, filter.as_ref(), options)
}

/// [`build_statistics`] with an arbitrary team filter.
pub fn build_statistics_with(
    teams: &[Team],
    runs: &[Run],
    config: &ContestConfig,
    cutoff_ms: i64,
    filter: &dyn Specification<Team>,
    options: &StatisticsOptions,
) -> EngineResult<Statistics> {
    let problem_count = config.problem_count()?;
    let bins = Bins::new(options.resolution, cutoff_ms)?;

    let members: Vec<&Team> = teams
        .iter()
        .filter(|team| filter.is_satisfied_by(team))
        .collect();
    let index = roster_index(&members);

    let mut run_count = 0u32;
    let mut accepted_count = 0u32;
    let mut problem_run_count = vec![0u32; problem_count];
    let mut problem_accepted_count = vec![0u32; problem_count];
    let mut overall = bins.tally();
    let mut per_problem: Vec<Tally> = (0..problem_count).map(|_| bins.tally()).collect();
    let mut solved_by_team: HashMap<&str, HashSet<usize>> = HashMap::new();

    for run in runs {
        if run.timestamp > cutoff_ms || !index.contains_key(run.team_id.as_str()) {
            continue;
        }
        let problem = problem_index(run, problem_count)?;

        let accepted = run.verdict() == RunStatus::Accepted;
        let slot = bins.slot(run.timestamp);

        run_count += 1;
        problem_run_count[problem] += 1;
        overall.add(slot, accepted);
        per_problem[problem].add(slot, accepted);

        if accepted {
            accepted_count += 1;
            problem_accepted_count[problem] += 1;
            solved_by_team
                .entry(run.team_id.as_str())
                .or_default()
                .insert(problem);
        }
    }

    let mut accepted_team_count = vec![0usize; problem_count + 1];
    accepted_team_count[0] = members.len() - solved_by_team.len();
    for solved in solved_by_team.values() {
        accepted_team_count[solved.len()] += 1;
    }

    let problem_rejected_count = problem_run_count
        .iter()
        .zip(&problem_accepted_count)
        .map(|(runs, accepted)| runs - accepted)
        .collect();

    let accepted_rate = if run_count == 0 {
        0.0
    } else {
        f64::from(accepted_count) / f64::from(run_count)
    };

    tracing::debug!(
        teams = members.len(),
        runs = run_count,
        accepted = accepted_count,
        "Statistics built"
    );

    Ok(Statistics {
        problem_count,
        team_count: members.len(),
        run_count,
        accepted_count,
        rejected_count: run_count - accepted_count,
        accepted_rate,
        run_heatmap: overall.into_heatmap(),
        problem_run_heatmap: per_problem.into_iter().map(Tally::into_heatmap).collect(),
        problem_run_count,
        problem_accepted_count,
        problem_rejected_count,
        accepted_team_count,
    })
}

/// Maps timestamps to heatmap keys.
///
/// Buckets split `[0, cutoff]` proportionally, so every bucket starts at or
/// before the cutoff. There are never more buckets than milliseconds.
#[derive(Debug, Clone, Copy)]
enum Bins {
    Exact,
    Buckets { count: i128, span: i128 },
}

impl Bins {
    fn new(resolution: HeatmapResolution, cutoff_ms: i64) -> EngineResult<Self> {
        match resolution {
            HeatmapResolution::Exact => Ok(Self::Exact),
            HeatmapResolution::Buckets(0) => Err(EngineError::Configuration(
                "heatmap bucket count must be positive".to_string(),
            )),
            HeatmapResolution::Buckets(count) => {
                let span = i128::from(cutoff_ms.max(0)) + 1;
                let count = i128::try_from(count).unwrap_or(i128::MAX).min(span);
                Ok(Self::Buckets { count, span })
            }
        }
    }

    /// Heatmap key of a timestamp: itself, or its bucket's start.
    fn slot(&self, timestamp: i64) -> i64 {
        match *self {
            Self::Exact => timestamp,
            Self::Buckets { count, span } => {
                let bucket = (i128::from(timestamp.max(0)) * count / span).min(count - 1);
                Self::start(bucket, count, span)
            }
        }
    }

    fn start(bucket: i128, count: i128, span: i128) -> i64 {
        i64::try_from(bucket * span / count).unwrap_or(i64::MAX)
    }

    /// An empty tally; bucketed tallies list every bucket up front.
    fn tally(&self) -> Tally {
        let mut tally = Tally::default();
        if let Self::Buckets { count, span } = *self {
            for bucket in 0..count {
                let start = Self::start(bucket, count, span);
                tally.accepted.insert(start, 0);
                tally.rejected.insert(start, 0);
            }
        }
        tally
    }
}

#[derive(Debug, Default)]
struct Tally {
    accepted: BTreeMap<i64, u32>,
    rejected: BTreeMap<i64, u32>,
}

impl Tally {
    fn add(&mut self, slot: i64, accepted: bool) {
        let side = if accepted {
            &mut self.accepted
        } else {
            &mut self.rejected
        };
        *side.entry(slot).or_default() += 1;
    }

    fn into_heatmap(self) -> RunHeatmap {
        let items = |map: BTreeMap<i64, u32>| {
            map.into_iter()
                .map(|(timestamp, count)| HeatmapItem { timestamp, count })
                .collect()
        };
        RunHeatmap {
            accepted: items(self.accepted),
            rejected: items(self.rejected),
        }
    }
}
