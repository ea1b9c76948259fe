//! Duration and timestamp formatting shared by the views and exporter.

use chrono::{DateTime, Local, SecondsFormat, Utc};

/// Current wall-clock time in epoch milliseconds.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Formats milliseconds as `HH:MM:SS`.
///
/// Negative durations are treated as 0. Hours are not capped at 24.
pub fn format_hms(ms: i64) -> String {
    let total_seconds = ms.max(0) / 1000;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Renders an epoch-millisecond timestamp as ISO 8601 UTC with
/// millisecond precision, e.g. `2024-01-15T10:30:00.000Z`.
///
/// Out-of-range timestamps fall back to the raw millisecond value.
pub fn iso_utc(ms: i64) -> String {
    DateTime::from_timestamp_millis(ms).map_or_else(
        || ms.to_string(),
        |dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true),
    )
}

/// Renders an epoch-millisecond timestamp as a local calendar
/// timestamp, e.g. `2024-01-15 10:30:00`.
pub fn local_timestamp(ms: i64) -> String {
    DateTime::from_timestamp_millis(ms).map_or_else(
        || ms.to_string(),
        |dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string(),
    )
}
