//! Start command.

use std::io::Write;

use anyhow::Result;

use stint_core::{StartOutcome, local_timestamp};
use stint_store::{Storage, Tracker};

pub async fn run<S: Storage, W: Write>(
    writer: &mut W,
    tracker: &Tracker<S>,
    task: &str,
) -> Result<()> {
    match tracker.start(task).await? {
        StartOutcome::Started(entry) => {
            writeln!(
                writer,
                "Started \"{}\" at {}.",
                entry.task_name,
                local_timestamp(entry.start_time)
            )?;
        }
        StartOutcome::AlreadyRunning(existing) => {
            writeln!(
                writer,
                "A timer for \"{}\" is already running; start ignored.",
                existing.task_name
            )?;
        }
    }
    Ok(())
}
