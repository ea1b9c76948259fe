//! Table command: entries grouped by task with aggregate durations.
//!
//! When a timer is running, a live pseudo-row for it is injected ahead
//! of the completed entries, its end shown as `...` and its duration as
//! the elapsed time so far.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;

use stint_core::{TimeEntry, format_hms, group_entries, local_timestamp, now_ms};
use stint_store::{Snapshot, Storage, Tracker};

/// Formats the grouped table for the given wall-clock instant.
pub fn format_table(snapshot: &Snapshot, now_ms: i64) -> String {
    // Live preview row for the running timer, grouped like any entry.
    let live: Option<TimeEntry> = snapshot.running.as_ref().map(|r| r.complete_at(now_ms));
    let live_id = live.as_ref().map(|e| e.id);

    let rows: Vec<&TimeEntry> = live.iter().chain(snapshot.entries.iter()).collect();
    if rows.is_empty() {
        return "No entries yet.\n".to_string();
    }

    let mut output = String::new();
    for group in group_entries(rows.iter().copied()) {
        writeln!(output, "{}  [total {}]", group.task, format_hms(group.total_ms)).unwrap();
        for entry in group.entries {
            let end = if live_id == Some(entry.id) {
                "...".to_string()
            } else {
                local_timestamp(entry.end_time)
            };
            writeln!(
                output,
                "  {}  {} -> {}",
                format_hms(entry.duration),
                local_timestamp(entry.start_time),
                end,
            )
            .unwrap();
        }
    }
    output
}

pub async fn run<S: Storage, W: Write>(writer: &mut W, tracker: &Tracker<S>) -> Result<()> {
    let snapshot = tracker.snapshot().await?;
    write!(writer, "{}", format_table(&snapshot, now_ms()))?;
    Ok(())
}
