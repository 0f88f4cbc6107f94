//! Scoreboard - ICPC/CCPC Contest Boards
//!
//! This library serves exported contest data: it loads rosters, submission
//! logs and contest parameters from the data directory and computes
//! standings, statistics, rank trends and submission listings from them.
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **CLI**: argument parsing and output (thin layer)
//! - **Services**: board, contest and submission logic
//! - **Store**: JSON loading from the data directory
//! - **Models**: application-level types around the engine's
//!
//! Scoring itself lives in the `scoreboard-engine` crate, team and
//! submission filtering in `scoreboard-rules`.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use store::ContestStore;
