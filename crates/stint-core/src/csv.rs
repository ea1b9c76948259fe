//! CSV serialization of completed entries.

use crate::entry::TimeEntry;
use crate::format::{format_hms, iso_utc};

/// Renders entries as CSV text.
///
/// Header `Task,Start,End,Duration`, one row per entry in input order.
/// The task column is always double-quoted with internal quotes
/// doubled; start and end are ISO 8601 UTC; duration is `HH:MM:SS`.
/// Lines are joined with `\n` and there is no trailing newline.
pub fn render<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a TimeEntry>,
{
    let mut lines = vec!["Task,Start,End,Duration".to_string()];
    for entry in entries {
        let task = entry.task_name.as_str().replace('"', "\"\"");
        lines.push(format!(
            "\"{task}\",{},{},{}",
            iso_utc(entry.start_time),
            iso_utc(entry.end_time),
            format_hms(entry.duration),
        ));
    }
    lines.join("\n")
}
