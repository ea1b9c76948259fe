//! Suggest command: the filtered task-name list.

use std::io::Write;

use anyhow::Result;

use stint_store::{Storage, Tracker};

pub async fn run<S: Storage, W: Write>(
    writer: &mut W,
    tracker: &Tracker<S>,
    pattern: Option<&str>,
) -> Result<()> {
    let registry = tracker.suggestions().await?;
    let mut matched = false;
    for name in registry.filter(pattern.unwrap_or("")) {
        writeln!(writer, "{name}")?;
        matched = true;
    }
    if !matched {
        writeln!(writer, "No matching task names.")?;
    }
    Ok(())
}
