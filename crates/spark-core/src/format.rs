// File: crates/spark-core/src/format.rs
// Summary: Label/value formatting helpers for table cells and annotations.

use chrono::NaiveTime;

/// Round a value to `decimals` places for display ("7.25", 1 -> "7.2").
pub fn round_to(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Keep at most `max_chars` characters of a label. Counts chars, not bytes,
/// so multibyte labels never split mid-codepoint.
pub fn truncate_label(label: &str, max_chars: usize) -> String {
    if label.chars().count() <= max_chars {
        label.to_string()
    } else {
        label.chars().take(max_chars).collect()
    }
}

/// Compact hour label in the "3pm" style used by the hourly table.
pub fn hour_label(t: NaiveTime) -> String {
    t.format("%-I%P").to_string()
}
