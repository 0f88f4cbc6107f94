//! Contest service

use chrono::{DateTime, Utc};
use scoreboard_common::{ContestConfig, Team};
use serde::Serialize;

use crate::{
    constants::medal_ratios,
    error::AppResult,
    models::{ContestEntry, ContestStatus},
    store::ContestStore,
    utils::{format_duration, format_unix_seconds},
};

/// Contest service for business logic
pub struct ContestService;

/// A contest as shown in the contest list
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContestSummary {
    pub contest_name: String,
    pub board_link: String,
    pub status: ContestStatus,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub duration: String,
    pub config: ContestConfig,
}

impl ContestService {
    /// List contests whose name contains `name`, latest start first
    pub async fn list_contests(
        store: &ContestStore,
        name: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Vec<ContestSummary>> {
        let list = store.load_contest_list().await?;

        let mut contests: Vec<&ContestEntry> = list
            .walk()
            .into_iter()
            .filter(|entry| name.is_empty() || entry.config.contest_name.contains(name))
            .collect();
        contests.sort_by(|a, b| b.config.start_time.cmp(&a.config.start_time));

        tracing::debug!(filter = name, matched = contests.len(), "Contest list filtered");

        Ok(contests
            .into_iter()
            .map(|entry| Self::to_summary(entry, now))
            .collect())
    }

    /// Load a contest's config, filling medal quotas when medals are enabled
    pub async fn contest_config(store: &ContestStore, contest: &str) -> AppResult<ContestConfig> {
        let mut config = store.load_config(contest).await?;

        if config.medal.is_enabled() {
            let teams = store.load_teams(contest).await?;
            Self::apply_medal_quotas(&mut config, &teams);
        }

        Ok(config)
    }

    /// Gold, silver and bronze go to 10%, 20% and 30% of the official
    /// teams, rounded up
    pub fn apply_medal_quotas(config: &mut ContestConfig, teams: &[Team]) {
        let official = teams.iter().filter(|team| team.official).count();
        let quota = |ratio: f64| (official as f64 * ratio).ceil() as u32;

        config.medal.official.gold = quota(medal_ratios::GOLD);
        config.medal.official.silver = quota(medal_ratios::SILVER);
        config.medal.official.bronze = quota(medal_ratios::BRONZE);

        tracing::debug!(
            official,
            gold = config.medal.official.gold,
            silver = config.medal.official.silver,
            bronze = config.medal.official.bronze,
            "Medal quotas computed"
        );
    }

    fn to_summary(entry: &ContestEntry, now: DateTime<Utc>) -> ContestSummary {
        let duration = chrono::Duration::milliseconds(entry.config.duration_ms());
        ContestSummary {
            contest_name: entry.config.contest_name.clone(),
            board_link: entry.board_link.clone(),
            status: entry.status(now),
            start_time: format_unix_seconds(entry.config.start_time),
            end_time: format_unix_seconds(entry.config.end_time),
            duration: format_duration(duration),
            config: entry.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoreboard_common::Medal;
    use std::fs;

    fn official(n: usize, unofficial: usize) -> Vec<Team> {
        (0..n + unofficial)
            .map(|i| Team {
                team_id: i.to_string(),
                official: i < n,
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_medal_quotas_round_up() {
        let mut config = ContestConfig::default();
        ContestService::apply_medal_quotas(&mut config, &official(95, 10));
        assert_eq!(config.medal.official.gold, 10);
        assert_eq!(config.medal.official.silver, 19);
        assert_eq!(config.medal.official.bronze, 29);

        ContestService::apply_medal_quotas(&mut config, &official(0, 3));
        assert_eq!(config.medal.official.gold, 0);
    }

    #[tokio::test]
    async fn test_contest_config_with_medals() {
        let dir = tempfile::tempdir().unwrap();
        let contest = dir.path().join("ccpc/2024/final");
        fs::create_dir_all(&contest).unwrap();
        fs::write(
            contest.join("config.json"),
            r#"{"contest_name": "CCPC Final", "problem_quantity": 12, "medal": "ccpc"}"#,
        )
        .unwrap();
        fs::write(
            contest.join("team.json"),
            r#"{"a": {"official": true}, "b": {"official": 1}, "c": {"unofficial": true}}"#,
        )
        .unwrap();

        let store = ContestStore::new(dir.path());
        let config = ContestService::contest_config(&store, "ccpc/2024/final")
            .await
            .unwrap();
        assert_eq!(config.medal.kind, "ccpc");
        assert_eq!(
            (config.medal.official.gold, config.medal.official.silver, config.medal.official.bronze),
            (1, 1, 1)
        );
    }

    #[tokio::test]
    async fn test_contest_config_without_medals() {
        let dir = tempfile::tempdir().unwrap();
        let contest = dir.path().join("camp");
        fs::create_dir_all(&contest).unwrap();
        fs::write(contest.join("config.json"), r#"{"problem_quantity": 5}"#).unwrap();

        // no team.json needed when medals are off
        let store = ContestStore::new(dir.path());
        let config = ContestService::contest_config(&store, "camp").await.unwrap();
        assert_eq!(config.medal, Medal::default());
    }

    #[tokio::test]
    async fn test_list_contests_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("contest_list.json"),
            r#"{
                "ccpc": {"2023": {"harbin": {"board_link": "/ccpc/2023/harbin", "config": {"contest_name": "CCPC Harbin", "start_time": 1000, "end_time": 19000}}}},
                "icpc": {
                    "2023": {"jinan": {"board_link": "/icpc/2023/jinan", "config": {"contest_name": "ICPC Jinan", "start_time": 3000, "end_time": 21000}}},
                    "2022": {"xian": {"board_link": "/icpc/2022/xian", "config": {"contest_name": "ICPC Xian", "start_time": 500, "end_time": 18500}}}
                }
            }"#,
        )
        .unwrap();
        let store = ContestStore::new(dir.path());
        let now = DateTime::<Utc>::from_timestamp(2000, 0).unwrap();

        let all = ContestService::list_contests(&store, "", now).await.unwrap();
        let names: Vec<&str> = all.iter().map(|c| c.contest_name.as_str()).collect();
        assert_eq!(names, vec!["ICPC Jinan", "CCPC Harbin", "ICPC Xian"]);
        assert_eq!(all[0].status, ContestStatus::Upcoming);
        assert_eq!(all[1].status, ContestStatus::Ongoing);
        assert_eq!(all[2].duration, "5h");

        let icpc = ContestService::list_contests(&store, "ICPC", now).await.unwrap();
        assert_eq!(icpc.len(), 2);
    }
}
