//! Submission listing service

use std::collections::BTreeSet;

use scoreboard_common::Team;
use scoreboard_rules::{
    group_spec,
    prelude::{InGroup, LanguageIs, NotAfter, RunContext, SchoolIs, Spec, StatusIs, TeamIs},
    specification::Specification,
};

use crate::{
    models::{Contest, Participant, RunPage, RunQuery, RunRecord},
    utils::{format_contest_time, paginate},
};

/// Run service for business logic
pub struct RunService;

impl RunService {
    /// List a contest's submissions matching `query`, newest first.
    ///
    /// Runs of teams missing from the roster are kept and shown with an
    /// empty team; they only survive filters that accept such a team.
    pub fn query_runs(contest: &Contest, query: &RunQuery, default_page_size: usize) -> RunPage {
        let cutoff = query.cutoff_ms.unwrap_or_else(|| contest.default_cutoff());
        let filter = Spec(NotAfter(cutoff))
            & Spec(InGroup(group_spec(&query.group)))
            & Spec(SchoolIs(query.school.clone()))
            & Spec(TeamIs(query.team_id.clone()))
            & Spec(LanguageIs(query.language.clone()))
            & Spec(StatusIs(query.status.clone()));

        let unknown = Team::default();
        let roster = contest.roster();
        let mut data: Vec<RunRecord> = contest
            .runs
            .iter()
            .filter_map(|run| {
                let team = roster.get(run.team_id.as_str()).copied().unwrap_or(&unknown);
                filter
                    .is_satisfied_by(&RunContext::new(team, run))
                    .then(|| RunRecord {
                        id: run.submission_id.clone(),
                        team_id: run.team_id.clone(),
                        problem_id: usize::try_from(run.problem_id)
                            .map(|index| contest.config.problem_name(index))
                            .unwrap_or_else(|_| run.problem_label()),
                        team: team.name.clone(),
                        organization: team.organization.clone(),
                        girl: team.girl,
                        unofficial: team.is_unofficial(),
                        language: run.language.clone(),
                        status: run.status.clone(),
                        timestamp: run.timestamp,
                        time: format_contest_time(run.timestamp),
                    })
            })
            .collect();

        // newest first; equal timestamps keep log order
        data.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let total = data.len();
        let page = paginate(query.page, query.page_size, default_page_size, total);
        let data: Vec<RunRecord> = data.drain(page).collect();

        let schools: BTreeSet<&str> = contest
            .teams
            .iter()
            .map(|team| team.organization.as_str())
            .collect();

        tracing::debug!(contest = %contest.path, total, "Submissions queried");

        RunPage {
            total,
            data,
            schools: schools.into_iter().map(str::to_string).collect(),
            participants: contest
                .teams
                .iter()
                .map(|team| Participant {
                    team_id: team.team_id.clone(),
                    team: team.name.clone(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scoreboard_common::{ContestConfig, Run};

    fn team(id: &str, org: &str, girl: bool) -> Team {
        Team {
            team_id: id.to_string(),
            name: format!("Team {id}"),
            organization: org.to_string(),
            girl,
            ..Default::default()
        }
    }

    fn run(id: &str, team_id: &str, problem: i64, status: &str, lang: &str, ts: i64) -> Run {
        Run {
            status: status.to_string(),
            team_id: team_id.to_string(),
            problem_id: problem,
            timestamp: ts,
            language: lang.to_string(),
            submission_id: id.to_string(),
        }
    }

    fn contest() -> Contest {
        Contest {
            path: "fixture".to_string(),
            config: ContestConfig {
                start_time: 0,
                end_time: 3600,
                problem_quantity: 3,
                ..Default::default()
            },
            teams: vec![
                team("1", "Zeta U", false),
                team("2", "Alpha U", true),
                team("3", "Alpha U", false),
            ],
            runs: vec![
                run("r1", "1", 0, "WRONG_ANSWER", "C++", 1_000),
                run("r2", "2", 1, "ACCEPTED", "Java", 2_000),
                run("r3", "3", 2, "ACCEPTED", "C++", 3_000),
                run("r4", "1", 0, "ACCEPTED", "C++", 4_000),
                run("r5", "ghost", 0, "ACCEPTED", "C++", 5_000),
                run("late", "2", 0, "ACCEPTED", "C++", 3_600_001),
            ],
        }
    }

    fn ids(page: &RunPage) -> Vec<&str> {
        page.data.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_newest_first_within_contest() {
        let page = RunService::query_runs(&contest(), &RunQuery::default(), 10);
        assert_eq!(page.total, 5);
        assert_eq!(ids(&page), vec!["r5", "r4", "r3", "r2", "r1"]);
        assert_eq!(page.data[3].problem_id, "B");
        assert_eq!(page.data[3].team, "Team 2");
        assert_eq!(page.data[3].time, "0:00:02");
        assert!(page.data[3].girl);
        assert_eq!(page.schools, vec!["Alpha U", "Zeta U"]);
        assert_eq!(page.participants.len(), 3);
    }

    #[test]
    fn test_filters_combine() {
        let query = RunQuery {
            school: "Alpha U".to_string(),
            language: "C++".to_string(),
            ..Default::default()
        };
        let page = RunService::query_runs(&contest(), &query, 10);
        assert_eq!(ids(&page), vec!["r3"]);

        let query = RunQuery {
            group: "girl".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&RunService::query_runs(&contest(), &query, 10)), vec!["r2"]);

        let query = RunQuery {
            team_id: "1".to_string(),
            status: "ACCEPTED".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&RunService::query_runs(&contest(), &query, 10)), vec!["r4"]);
    }

    #[test]
    fn test_explicit_cutoff() {
        let query = RunQuery {
            cutoff_ms: Some(i64::MAX),
            ..Default::default()
        };
        let page = RunService::query_runs(&contest(), &query, 10);
        assert_eq!(page.total, 6);
        assert_eq!(page.data[0].id, "late");

        let query = RunQuery {
            cutoff_ms: Some(2_000),
            ..Default::default()
        };
        assert_eq!(ids(&RunService::query_runs(&contest(), &query, 10)), vec!["r2", "r1"]);
    }

    #[test]
    fn test_pagination() {
        let query = RunQuery {
            page: 2,
            page_size: 2,
            ..Default::default()
        };
        let page = RunService::query_runs(&contest(), &query, 10);
        assert_eq!(page.total, 5);
        assert_eq!(ids(&page), vec!["r3", "r2"]);

        let query = RunQuery {
            page: 0,
            ..Default::default()
        };
        let page = RunService::query_runs(&contest(), &query, 3);
        assert_eq!(ids(&page), vec!["r5", "r4", "r3"]);

        let query = RunQuery {
            page: 9,
            ..Default::default()
        };
        let page = RunService::query_runs(&contest(), &query, 3);
        assert_eq!(page.total, 5);
        assert!(page.data.is_empty());
    }
}
