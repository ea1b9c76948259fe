//! Log command: the flat newest-first entry list.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;

use stint_core::{EntryStore, format_hms, local_timestamp};
use stint_store::{Storage, Tracker};

/// Formats the flat entry list, newest first.
pub fn format_log(entries: &EntryStore) -> String {
    if entries.is_empty() {
        return "No entries yet.\n".to_string();
    }
    let mut output = String::new();
    for entry in entries.iter() {
        writeln!(
            output,
            "{}  {}  {} -> {}  {}",
            entry.id,
            format_hms(entry.duration),
            local_timestamp(entry.start_time),
            local_timestamp(entry.end_time),
            entry.task_name,
        )
        .unwrap();
    }
    output
}

pub async fn run<S: Storage, W: Write>(writer: &mut W, tracker: &Tracker<S>) -> Result<()> {
    let entries = tracker.entries().await?;
    write!(writer, "{}", format_log(&entries))?;
    Ok(())
}
