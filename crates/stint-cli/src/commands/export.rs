//! Export command: the CSV artifact.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use stint_core::csv;
use stint_store::{Storage, Tracker};

pub async fn run<S: Storage, W: Write>(
    writer: &mut W,
    tracker: &Tracker<S>,
    output: Option<&Path>,
) -> Result<()> {
    let entries = tracker.entries().await?;
    // An empty store produces no artifact.
    if entries.is_empty() {
        writeln!(writer, "No entries to export.")?;
        return Ok(());
    }

    let rendered = csv::render(&entries);
    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            writeln!(
                writer,
                "Exported {} entries to {}.",
                entries.len(),
                path.display()
            )?;
        }
        None => writeln!(writer, "{rendered}")?,
    }
    Ok(())
}
