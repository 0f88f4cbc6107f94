//! Time utilities

use chrono::{DateTime, Duration, Utc};

/// Render Unix seconds as RFC 3339, or `None` for 0 / out-of-range values
pub fn format_unix_seconds(seconds: i64) -> Option<String> {
    if seconds == 0 {
        return None;
    }
    DateTime::<Utc>::from_timestamp(seconds, 0).map(|dt| dt.to_rfc3339())
}

/// Format a duration as a human-readable string
pub fn format_duration(duration: Duration) -> String {
    let total_seconds = duration.num_seconds();

    if total_seconds < 0 {
        return "0s".to_string();
    }

    let days = total_seconds / 86400;
    let hours = (total_seconds % 86400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut parts = Vec::new();

    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    if seconds > 0 || parts.is_empty() {
        parts.push(format!("{}s", seconds));
    }

    parts.join(" ")
}

/// Contest-relative milliseconds as `H:MM:SS`, the way boards print
/// submission times
pub fn format_contest_time(ms: i64) -> String {
    let total = Duration::milliseconds(ms.max(0)).num_seconds();
    format!("{}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
}
