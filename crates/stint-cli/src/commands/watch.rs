//! Watch command: the auto-refresh table surface.
//!
//! Re-reads storage once per second and re-renders the table and
//! status until Ctrl-C. Each tick is an independent read; a concurrent
//! edit from another invocation simply shows up on the next refresh
//! (last writer wins, per the storage contract). The interval is
//! dropped when the loop exits, so the poll never outlives the surface.

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};

use stint_core::now_ms;
use stint_store::{Storage, Tracker};

use super::{status, table};

const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// Clears the terminal and moves the cursor home.
const CLEAR: &str = "\x1b[2J\x1b[H";

pub async fn run<S: Storage>(tracker: &Tracker<S>) -> Result<()> {
    let mut stdout = std::io::stdout();
    let mut ticker = tokio::time::interval(REFRESH_INTERVAL);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let snapshot = tracker.snapshot().await?;
                let now = now_ms();
                let mut frame = String::from(CLEAR);
                frame.push_str(&table::format_table(&snapshot, now));
                frame.push('\n');
                frame.push_str(&status::format_status(&snapshot, now));
                stdout
                    .write_all(frame.as_bytes())
                    .context("failed to write watch frame")?;
                stdout.flush().context("failed to flush watch frame")?;
            }
            result = &mut ctrl_c => {
                result.context("failed to listen for ctrl-c")?;
                break;
            }
        }
    }

    writeln!(stdout)?;
    Ok(())
}
