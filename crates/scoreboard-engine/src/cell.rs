//! Per-team, per-problem scoring state.

use scoreboard_common::RunStatus;
use serde::{Deserialize, Serialize};

/// One cell of the scoreboard: a team's state on one problem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemCell {
    /// This cell holds the first accepted run on the problem
    pub first_solved: bool,
    pub solved: bool,
    /// At least one counted run exists
    pub attempted: bool,
    /// Reserved for boards that expose pending verdicts; the engine scores
    /// every non-accepted verdict as a rejection and never sets it
    pub pending: bool,
    /// Counted runs (compile errors and runs after acceptance excluded)
    pub submitted: u32,
    /// Minutes charged: rejections so far plus the accepted minute
    pub penalty: i64,
    /// Contest minute of the last counted run
    pub timestamp: i64,
    /// Rejections before acceptance, only set once solved
    pub dirt: u32,
}

/// What a run did to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CellUpdate {
    /// Compile error, or the problem was already solved
    Ignored,
    Rejected,
    Accepted,
}

impl ProblemCell {
    /// Fold one run into the cell.
    pub(crate) fn record(
        &mut self,
        verdict: RunStatus,
        minute: i64,
        penalty_per_rejection: i64,
    ) -> CellUpdate {
        if self.solved {
            return CellUpdate::Ignored;
        }

        let update = match verdict {
            RunStatus::CompilationError => return CellUpdate::Ignored,
            RunStatus::Accepted => {
                self.solved = true;
                self.penalty += minute;
                self.dirt = self.submitted;
                CellUpdate::Accepted
            }
            RunStatus::Rejected => {
                self.penalty += penalty_per_rejection;
                CellUpdate::Rejected
            }
        };

        self.timestamp = minute;
        self.attempted = true;
        self.submitted += 1;
        update
    }
}
