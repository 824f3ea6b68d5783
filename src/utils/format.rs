//! Format - Formatting Utilities

use chrono::{DateTime, Local};

/// Longest cell text drawn before it is cut with an ellipsis
pub const MAX_CELL_CHARS: usize = 80;

/// Format just the time portion
pub fn format_time(dt: &DateTime<Local>) -> String {
    dt.format("%H:%M:%S").to_string()
}

/// Truncate a string to max characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    }
}
