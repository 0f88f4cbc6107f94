//! Command-line front end
//!
//! Every command prints one JSON document on stdout.

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use scoreboard_rules::RuleConfig;
use serde::Serialize;
use serde_json::Value;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{BoardQuery, RunQuery},
    services::{BoardService, ContestService, RunService},
    store::ContestStore,
};

/// ICPC/CCPC contest boards computed from exported submission logs
#[derive(Debug, Parser)]
#[command(name = "scoreboard", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Ranked standings
    Rank(BoardArgs),
    /// Submission, acceptance and heatmap statistics
    Stat(BoardArgs),
    /// A team's place over the whole contest
    Trend {
        /// Contest directory, relative to the data root
        contest: String,
        #[arg(long)]
        team: String,
    },
    /// Submissions, newest first
    Runs(RunArgs),
    /// Contest config with medal quotas filled in
    Config {
        /// Contest directory, relative to the data root
        contest: String,
    },
    /// Contests of the index, latest first
    Contests {
        /// Only contests whose name contains this
        #[arg(long, default_value = "")]
        name: String,
    },
    /// Statistics plus every group's standings
    Report(BoardArgs),
}

/// Scope of a board computation
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct BoardArgs {
    /// Contest directory, relative to the data root
    pub contest: String,
    /// Cohort: girl, official, unofficial, undergraduate or vocational
    #[arg(long, default_value = "")]
    pub group: String,
    /// Cutoff in milliseconds since contest start
    #[arg(short = 't', long = "cutoff", value_name = "MS")]
    pub cutoff_ms: Option<i64>,
    /// Without a cutoff, stop at the board freeze instead of the contest end
    #[arg(long)]
    pub frozen: bool,
    /// Extra team filter as a JSON rule tree,
    /// e.g. '{"and": [{"spec": "official"}, {"not": {"spec": "girl"}}]}'
    #[arg(long, value_name = "JSON", value_parser = parse_rule)]
    pub filter: Option<RuleConfig>,
}

impl BoardArgs {
    fn into_query(self) -> (String, BoardQuery) {
        let query = BoardQuery {
            group: self.group,
            cutoff_ms: self.cutoff_ms,
            frozen: self.frozen,
            filter: self.filter,
        };
        (self.contest, query)
    }
}

/// Filters and page of a submission listing
#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct RunArgs {
    /// Contest directory, relative to the data root
    pub contest: String,
    #[arg(long, default_value = "")]
    pub group: String,
    /// Cutoff in milliseconds since contest start
    #[arg(short = 't', long = "cutoff", value_name = "MS")]
    pub cutoff_ms: Option<i64>,
    #[arg(long, default_value = "")]
    pub school: String,
    #[arg(long, default_value = "")]
    pub team: String,
    #[arg(long, default_value = "")]
    pub language: String,
    #[arg(long, default_value = "")]
    pub status: String,
    /// 1-based
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    /// Defaults to DEFAULT_PAGE_SIZE
    #[arg(long)]
    pub page_size: Option<usize>,
}

impl RunArgs {
    fn into_query(self) -> (String, RunQuery) {
        let query = RunQuery {
            group: self.group,
            school: self.school,
            team_id: self.team,
            status: self.status,
            language: self.language,
            cutoff_ms: self.cutoff_ms,
            page: self.page,
            page_size: self.page_size.unwrap_or(0),
        };
        (self.contest, query)
    }
}

fn parse_rule(value: &str) -> Result<RuleConfig, String> {
    serde_json::from_str(value).map_err(|e| format!("not a rule tree: {e}"))
}

impl Command {
    /// Run the command and return its JSON output
    pub async fn execute(self, store: &ContestStore, config: &Config) -> AppResult<Value> {
        match self {
            Self::Rank(args) => {
                let (contest, query) = args.into_query();
                let contest = store.load_contest(&contest).await?;
                to_json(&BoardService::standings(&contest, &query)?)
            }
            Self::Stat(args) => {
                let (contest, query) = args.into_query();
                let contest = store.load_contest(&contest).await?;
                to_json(&BoardService::statistics(&contest, &query, &config.board)?)
            }
            Self::Trend { contest, team } => {
                let contest = store.load_contest(&contest).await?;
                to_json(&BoardService::trend(&contest, &team)?)
            }
            Self::Runs(args) => {
                let (contest, query) = args.into_query();
                let contest = store.load_contest(&contest).await?;
                to_json(&RunService::query_runs(
                    &contest,
                    &query,
                    config.board.default_page_size,
                ))
            }
            Self::Config { contest } => {
                to_json(&ContestService::contest_config(store, &contest).await?)
            }
            Self::Contests { name } => {
                to_json(&ContestService::list_contests(store, &name, chrono::Utc::now()).await?)
            }
            Self::Report(args) => {
                let (contest, query) = args.into_query();
                let contest = Arc::new(store.load_contest(&contest).await?);
                to_json(&BoardService::report(contest, query, config.board.clone()).await?)
            }
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> AppResult<Value> {
    serde_json::to_value(value).map_err(|e| AppError::Serialization(e.to_string()))
}
