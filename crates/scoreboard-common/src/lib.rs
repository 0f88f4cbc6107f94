//! Shared data model for the scoreboard engine.
//!
//! Rosters, submissions and contest parameters as they are loaded from the
//! contest JSON files, plus the error type returned by every engine
//! operation.

pub mod error;
pub mod flex;
pub mod types;

pub use error::{EngineError, EngineResult};
pub use types::*;
