//! Utility functions

pub mod paginate;
pub mod time;

pub use paginate::paginate;
pub use time::{format_contest_time, format_duration, format_unix_seconds};
