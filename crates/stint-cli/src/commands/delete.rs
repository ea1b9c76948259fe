//! Delete command.

use std::io::Write;

use anyhow::Result;

use stint_store::{Storage, Tracker};

pub async fn run<S: Storage, W: Write>(
    writer: &mut W,
    tracker: &Tracker<S>,
    id: i64,
) -> Result<()> {
    if tracker.delete_entry(id).await? {
        writeln!(writer, "Deleted entry {id}.")?;
    } else {
        writeln!(writer, "No entry with id {id}; nothing deleted.")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use stint_store::MemoryStorage;

    #[tokio::test]
    async fn delete_twice_reports_noop_the_second_time() {
        let tracker = Tracker::new(MemoryStorage::new());
        tracker.start("A").await.unwrap();
        let entry = tracker.stop().await.unwrap().unwrap();

        let mut output = Vec::new();
        run(&mut output, &tracker, entry.id).await.unwrap();
        run(&mut output, &tracker, entry.id).await.unwrap();
        let output = String::from_utf8(output).unwrap();
        assert_eq!(
            output,
            format!(
                "Deleted entry {id}.\nNo entry with id {id}; nothing deleted.\n",
                id = entry.id
            )
        );
    }
}
