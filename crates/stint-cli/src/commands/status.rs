//! Status command: the one-shot view of the running timer.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;

use stint_core::{format_hms, local_timestamp, now_ms};
use stint_store::{Snapshot, Storage, Tracker};

/// Formats the status view for the given wall-clock instant.
pub fn format_status(snapshot: &Snapshot, now_ms: i64) -> String {
    let mut output = String::new();
    match &snapshot.running {
        Some(running) => {
            writeln!(output, "Tracking \"{}\"", running.task_name).unwrap();
            writeln!(output, "Elapsed: {}", format_hms(running.elapsed_at(now_ms))).unwrap();
            writeln!(output, "Started: {}", local_timestamp(running.start_time)).unwrap();
        }
        None => writeln!(output, "No timer running.").unwrap(),
    }
    writeln!(output, "Entries: {}", snapshot.entries.len()).unwrap();
    writeln!(output, "Known tasks: {}", snapshot.suggestions.len()).unwrap();
    output
}

pub async fn run<S: Storage, W: Write>(writer: &mut W, tracker: &Tracker<S>) -> Result<()> {
    let snapshot = tracker.snapshot().await?;
    write!(writer, "{}", format_status(&snapshot, now_ms()))?;
    Ok(())
}
