//! Business logic services

pub mod board_service;
pub mod contest_service;
pub mod run_service;

pub use board_service::BoardService;
pub use contest_service::{ContestService, ContestSummary};
pub use run_service::RunService;
