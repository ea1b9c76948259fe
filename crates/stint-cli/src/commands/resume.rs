//! Resume command.
//!
//! Stops any running timer before starting the new one; the stop's
//! storage write completes before the start reads state.

use std::io::Write;

use anyhow::{Result, bail};

use stint_core::format_hms;
use stint_store::{Storage, Tracker};

pub async fn run<S: Storage, W: Write>(
    writer: &mut W,
    tracker: &Tracker<S>,
    task: Option<&str>,
) -> Result<()> {
    let task = match task {
        Some(task) => task.to_string(),
        // Without an explicit task, resume the latest completed entry.
        None => {
            let entries = tracker.entries().await?;
            match entries.latest() {
                Some(entry) => entry.task_name.as_str().to_string(),
                None => bail!("no completed entry to resume; pass a task name"),
            }
        }
    };

    let (stopped, _outcome) = tracker.resume(&task).await?;
    if let Some(entry) = stopped {
        writeln!(
            writer,
            "Stopped \"{}\" after {}.",
            entry.task_name,
            format_hms(entry.duration)
        )?;
    }
    writeln!(writer, "Started \"{}\".", task.trim())?;
    Ok(())
}
