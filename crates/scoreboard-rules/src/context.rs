//! Context types for specification evaluation.

use scoreboard_common::{Run, Team};

/// A submission together with the team that made it.
///
/// Used by the submission-listing predicates, which need to look at both
/// sides at once (e.g. "runs in C++ from this school").
#[derive(Debug, Clone, Copy)]
pub struct RunContext<'a> {
    pub team: &'a Team,
    pub run: &'a Run,
}

impl<'a> RunContext<'a> {
    pub fn new(team: &'a Team, run: &'a Run) -> Self {
        Self { team, run }
    }
}
