//! Domain models
//!
//! Scoring types live in `scoreboard-common`; this module holds what the
//! application layer adds around them.

pub mod board;
pub mod contest;
pub mod contest_list;
pub mod run;

pub use board::*;
pub use contest::*;
pub use contest_list::*;
pub use run::*;
