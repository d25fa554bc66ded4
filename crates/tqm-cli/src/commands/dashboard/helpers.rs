//! Dashboard helper functions
//!
//! Shared utilities for dashboard commands.

/// Truncate string to max characters with ellipsis
pub fn truncate(s: &str, max_chars: usize) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= max_chars {
        s.to_string()
    } else {
        let keep = max_chars.saturating_sub(3);
        let truncated: String = chars[..keep].iter().collect();
        format!("{}...", truncated)
    }
}

/// Render a horizontal bar of `len` cells
pub fn bar(len: usize) -> String {
    "█".repeat(len)
}
