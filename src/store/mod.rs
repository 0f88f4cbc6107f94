//! Read access to the exported contest data.
//!
//! Layout under the data root:
//!
//! ```text
//! contest_list.json
//! <contest path>/config.json
//! <contest path>/team.json
//! <contest path>/run.json
//! ```
//!
//! Contest paths may be nested (`icpc/2023/nanjing`) but never leave the
//! data root.

use std::path::{Component, Path, PathBuf};

use scoreboard_common::{ContestConfig, Run, Team, TeamList};
use serde::de::DeserializeOwned;

use crate::constants::files;
use crate::error::{AppError, AppResult};
use crate::models::{Contest, ContestList};

/// Loader rooted at the data directory
#[derive(Debug, Clone)]
pub struct ContestStore {
    root: PathBuf,
}

impl ContestStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load a contest's config, roster and runs
    pub async fn load_contest(&self, contest: &str) -> AppResult<Contest> {
        let dir = self.contest_dir(contest)?;

        let (config_path, teams_path, runs_path) = (
            dir.join(files::CONFIG),
            dir.join(files::TEAMS),
            dir.join(files::RUNS),
        );
        let (config, teams, runs) = tokio::try_join!(
            read_json::<ContestConfig>(&config_path),
            read_json::<TeamList>(&teams_path),
            read_json::<Vec<Run>>(&runs_path),
        )?;

        let teams = roster(teams);
        let runs = chronological(runs);

        tracing::info!(
            contest,
            teams = teams.len(),
            runs = runs.len(),
            "Contest loaded"
        );

        Ok(Contest {
            path: contest.to_string(),
            config,
            teams,
            runs,
        })
    }

    pub async fn load_config(&self, contest: &str) -> AppResult<ContestConfig> {
        read_json(&self.contest_dir(contest)?.join(files::CONFIG)).await
    }

    /// Roster in team id order
    pub async fn load_teams(&self, contest: &str) -> AppResult<Vec<Team>> {
        let teams: TeamList = read_json(&self.contest_dir(contest)?.join(files::TEAMS)).await?;
        Ok(roster(teams))
    }

    pub async fn load_contest_list(&self) -> AppResult<ContestList> {
        read_json(&self.root.join(files::CONTEST_LIST)).await
    }

    /// Resolve a contest path, refusing anything that could escape the root.
    fn contest_dir(&self, contest: &str) -> AppResult<PathBuf> {
        let relative = Path::new(contest);
        let safe = !contest.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
        if !safe {
            return Err(AppError::InvalidInput(format!(
                "invalid contest path {contest:?}"
            )));
        }
        Ok(self.root.join(relative))
    }
}

/// Flatten the keyed roster, filling missing ids from the keys.
fn roster(teams: TeamList) -> Vec<Team> {
    teams
        .into_iter()
        .map(|(key, mut team)| {
            if team.team_id.is_empty() {
                team.team_id = key;
            }
            team
        })
        .collect()
}

fn chronological(mut runs: Vec<Run>) -> Vec<Run> {
    runs.sort_by_key(|run| run.timestamp);
    runs
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(AppError::NotFound(path.display().to_string()));
        }
        Err(e) => return Err(AppError::Io(format!("{}: {e}", path.display()))),
    };

    serde_json::from_slice(&bytes)
        .map_err(|e| AppError::Serialization(format!("{}: {e}", path.display())))
}
