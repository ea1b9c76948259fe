//! Edit command.

use std::io::Write;

use anyhow::Result;

use stint_core::EditOutcome;
use stint_store::{Storage, Tracker};

pub async fn run<S: Storage, W: Write>(
    writer: &mut W,
    tracker: &Tracker<S>,
    id: i64,
    task: &str,
) -> Result<()> {
    match tracker.edit_entry(id, task).await? {
        EditOutcome::Edited(name) => writeln!(writer, "Renamed entry {id} to \"{name}\".")?,
        EditOutcome::Unchanged => {
            writeln!(writer, "New name is empty; entry {id} left unchanged.")?;
        }
        EditOutcome::NotFound => writeln!(writer, "No entry with id {id}.")?,
    }
    Ok(())
}
