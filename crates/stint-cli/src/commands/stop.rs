//! Stop command.

use std::io::Write;

use anyhow::Result;

use stint_core::format_hms;
use stint_store::{Storage, Tracker};

pub async fn run<S: Storage, W: Write>(writer: &mut W, tracker: &Tracker<S>) -> Result<()> {
    match tracker.stop().await? {
        Some(entry) => {
            writeln!(
                writer,
                "Stopped \"{}\" after {}.",
                entry.task_name,
                format_hms(entry.duration)
            )?;
        }
        None => writeln!(writer, "No timer running.")?,
    }
    Ok(())
}
