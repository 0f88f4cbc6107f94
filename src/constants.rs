//! Application-wide constants
//!
//! Defaults for configuration values and the fixed layout of the data
//! directory.

// =============================================================================
// CONFIGURATION DEFAULTS
// =============================================================================

/// Default root of the exported contest data
pub const DEFAULT_DATA_PATH: &str = "data";

/// Default tracing filter when neither `RUST_LOG` nor `.env` set one
pub const DEFAULT_RUST_LOG: &str = "info";

/// Default heatmap bucket count (0 = one item per timestamp)
pub const DEFAULT_HEATMAP_BUCKETS: usize = 0;

// =============================================================================
// PAGINATION
// =============================================================================

/// Default page size for the submission listing
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Maximum page size for the submission listing
pub const MAX_PAGE_SIZE: usize = 500;

// =============================================================================
// DATA LAYOUT
// =============================================================================

/// File names inside the data directory
pub mod files {
    /// Contest parameters, one per contest directory
    pub const CONFIG: &str = "config.json";
    /// Roster keyed by team id
    pub const TEAMS: &str = "team.json";
    /// Judged submissions
    pub const RUNS: &str = "run.json";
    /// Nested index of every contest, at the data root
    pub const CONTEST_LIST: &str = "contest_list.json";
}

// =============================================================================
// MEDALS
// =============================================================================

/// Share of official teams receiving each medal (rounded up)
pub mod medal_ratios {
    pub const GOLD: f64 = 0.1;
    pub const SILVER: f64 = 0.2;
    pub const BRONZE: f64 = 0.3;
}
