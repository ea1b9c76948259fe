//! Theme command: the dark-mode preference toggle.

use std::io::Write;

use anyhow::Result;

use stint_store::{Storage, Tracker};

pub async fn run<S: Storage, W: Write>(writer: &mut W, tracker: &Tracker<S>) -> Result<()> {
    let dark = tracker.toggle_dark_mode().await?;
    writeln!(
        writer,
        "Dark mode {}.",
        if dark { "enabled" } else { "disabled" }
    )?;
    Ok(())
}
