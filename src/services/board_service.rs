//! Board service: standings, statistics and trends over a loaded contest

use std::sync::Arc;

use scoreboard_common::{groups, Team};
use scoreboard_engine::{
    build_standings_with, build_statistics_with, build_trend, HeatmapResolution, Standings,
    Statistics, StatisticsOptions, TrendPoint,
};
use scoreboard_rules::{
    group_registry, group_spec,
    prelude::{AllOf, BoxedSpec},
};

use crate::{
    config::BoardConfig,
    error::AppResult,
    models::{BoardQuery, Contest, GroupStandings, Report},
};

/// Board service for business logic
pub struct BoardService;

impl BoardService {
    /// Ranked standings of the query's group at the query's cutoff
    pub fn standings(contest: &Contest, query: &BoardQuery) -> AppResult<Standings> {
        let cutoff = Self::cutoff(contest, query);
        let filter = Self::team_filter(query)?;
        Ok(build_standings_with(
            &contest.teams,
            &contest.runs,
            &contest.config,
            cutoff,
            filter.as_ref(),
        )?)
    }

    pub fn statistics(
        contest: &Contest,
        query: &BoardQuery,
        board: &BoardConfig,
    ) -> AppResult<Statistics> {
        let cutoff = Self::cutoff(contest, query);
        let filter = Self::team_filter(query)?;
        let options = StatisticsOptions {
            resolution: HeatmapResolution::from_bucket_count(board.heatmap_buckets),
        };
        Ok(build_statistics_with(
            &contest.teams,
            &contest.runs,
            &contest.config,
            cutoff,
            filter.as_ref(),
            &options,
        )?)
    }

    /// Place history of one team over the whole run log
    pub fn trend(contest: &Contest, team_id: &str) -> AppResult<Vec<TrendPoint>> {
        Ok(build_trend(
            &contest.teams,
            &contest.runs,
            &contest.config,
            team_id,
        )?)
    }

    /// Statistics plus the standings of every group, computed concurrently
    /// on the blocking pool.
    pub async fn report(
        contest: Arc<Contest>,
        query: BoardQuery,
        board: BoardConfig,
    ) -> AppResult<Report> {
        let cutoff = Self::cutoff(&contest, &query);
        let names = std::iter::once(groups::ALL).chain(groups::COHORTS.iter().copied());

        let tasks: Vec<_> = names
            .map(|group| {
                let contest = Arc::clone(&contest);
                let query = BoardQuery {
                    group: group.to_string(),
                    cutoff_ms: Some(cutoff),
                    frozen: false,
                    filter: query.filter.clone(),
                };
                tokio::task::spawn_blocking(move || {
                    Self::standings(&contest, &query).map(|standings| GroupStandings {
                        group: query.group,
                        standings,
                    })
                })
            })
            .collect();

        let statistics = {
            let contest = Arc::clone(&contest);
            let query = BoardQuery {
                group: query.group.clone(),
                cutoff_ms: Some(cutoff),
                frozen: false,
                filter: query.filter.clone(),
            };
            tokio::task::spawn_blocking(move || Self::statistics(&contest, &query, &board))
        };

        let mut groups = Vec::with_capacity(tasks.len());
        for task in tasks {
            groups.push(task.await??);
        }
        let statistics = statistics.await??;

        tracing::info!(
            contest = %contest.path,
            cutoff,
            groups = groups.len(),
            "Report computed"
        );

        Ok(Report {
            contest: contest.path.clone(),
            cutoff_ms: cutoff,
            statistics,
            groups,
        })
    }

    /// The query's cohort, narrowed by its rule tree when one is given
    fn team_filter(query: &BoardQuery) -> AppResult<BoxedSpec<Team>> {
        let cohort = group_spec(&query.group);
        match &query.filter {
            None => Ok(cohort),
            Some(rule) => {
                let extra = group_registry().build(rule)?;
                Ok(Arc::new(AllOf::new(vec![cohort, extra])))
            }
        }
    }

    /// Explicit cutoff, else the freeze when asked for and configured,
    /// else the end of the contest
    fn cutoff(contest: &Contest, query: &BoardQuery) -> i64 {
        query
            .cutoff_ms
            .or_else(|| query.frozen.then(|| contest.frozen_cutoff()).flatten())
            .unwrap_or_else(|| contest.default_cutoff())
    }
}
