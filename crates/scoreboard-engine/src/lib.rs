//! Standings computation engine.
//!
//! Turns a team roster, a judged submission log and contest parameters into
//! the three views a scoreboard needs:
//!
//! - [`build_standings`]: ranked rows with per-problem cells and
//!   per-problem aggregates
//! - [`build_statistics`]: contest and per-problem counters and activity
//!   heatmaps
//! - [`build_trend`]: one team's place over time
//!
//! Every operation borrows its inputs immutably, allocates its working
//! state per call and keeps nothing between calls, so any number of them
//! can run concurrently over the same loaded contest.
//!
//! Scoring follows ICPC rules. The first `ACCEPTED` run on a problem
//! solves it and everything after is ignored; each earlier rejection costs
//! the contest's penalty (20 minutes unless configured) once the problem is
//! solved; `COMPILATION_ERROR` runs are invisible to the standings. The
//! statistics view is activity-oriented instead and counts compile errors
//! as rejections.

mod cell;
mod stream;

pub mod standings;
pub mod statistics;
pub mod trend;

#[cfg(test)]
mod testing;

pub use cell::ProblemCell;
pub use standings::{build_standings, build_standings_with, Standings, StandingsRow};
pub use statistics::{
    build_statistics, build_statistics_with, HeatmapItem, HeatmapResolution, RunHeatmap,
    Statistics, StatisticsOptions,
};
pub use trend::{build_trend, TrendPoint, TrendReplay};
