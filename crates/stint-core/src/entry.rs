//! The two records of the data model: the single in-progress timer and
//! completed intervals.
//!
//! Both serialize with camelCase field names to match the persisted
//! key-value layout (`taskName`, `startTime`, ...).

use serde::{Deserialize, Serialize};

use crate::task::TaskName;

/// The single in-progress timer, if any.
///
/// At most one instance exists at a time; the [`Timer`](crate::Timer)
/// state machine enforces this by holding it as an `Option`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunningEntry {
    /// Entry identity; the creation timestamp in epoch milliseconds.
    pub id: i64,
    /// The task being timed.
    pub task_name: TaskName,
    /// When the timer started, epoch milliseconds. Equals `id`.
    pub start_time: i64,
}

impl RunningEntry {
    /// Starts a new running entry at the given wall-clock time.
    ///
    /// Identity and start time are both the creation timestamp.
    pub const fn start(task_name: TaskName, now_ms: i64) -> Self {
        Self {
            id: now_ms,
            task_name,
            start_time: now_ms,
        }
    }

    /// Milliseconds elapsed since the timer started, clamped at zero.
    pub const fn elapsed_at(&self, now_ms: i64) -> i64 {
        let elapsed = now_ms - self.start_time;
        if elapsed < 0 { 0 } else { elapsed }
    }

    /// Converts this running entry into a completed [`TimeEntry`].
    ///
    /// A stop within the same millisecond yields duration 0. If the wall
    /// clock went backwards the end time is clamped to the start time so
    /// `duration == end_time - start_time` holds and is never negative.
    pub fn complete_at(&self, now_ms: i64) -> TimeEntry {
        if now_ms < self.start_time {
            tracing::warn!(
                id = self.id,
                start_time = self.start_time,
                now_ms,
                "wall clock went backwards during stop, clamping duration to 0"
            );
        }
        let end_time = now_ms.max(self.start_time);
        TimeEntry {
            id: self.id,
            task_name: self.task_name.clone(),
            start_time: self.start_time,
            end_time,
            duration: end_time - self.start_time,
        }
    }
}

/// A completed timed interval.
///
/// Immutable once created, except for `task_name` which may be edited
/// post-hoc through the entry store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    /// Entry identity; the creation timestamp of the originating start.
    pub id: i64,
    /// The task this interval was spent on.
    pub task_name: TaskName,
    /// Interval start, epoch milliseconds.
    pub start_time: i64,
    /// Interval end, epoch milliseconds. Always `>= start_time`.
    pub end_time: i64,
    /// `end_time - start_time`, milliseconds.
    pub duration: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(s: &str) -> TaskName {
        TaskName::new(s).unwrap()
    }

    #[test]
    fn start_sets_id_equal_to_start_time() {
        let running = RunningEntry::start(name("Email"), 2000);
        assert_eq!(running.id, 2000);
        assert_eq!(running.start_time, 2000);
    }

    #[test]
    fn complete_computes_duration_from_endpoints() {
        let running = RunningEntry::start(name("Write report"), 1000);
        let entry = running.complete_at(5000);
        assert_eq!(entry.id, 1000);
        assert_eq!(entry.task_name.as_str(), "Write report");
        assert_eq!(entry.start_time, 1000);
        assert_eq!(entry.end_time, 5000);
        assert_eq!(entry.duration, 4000);
    }

    #[test]
    fn same_millisecond_stop_yields_zero_duration() {
        let running = RunningEntry::start(name("Email"), 1000);
        let entry = running.complete_at(1000);
        assert_eq!(entry.duration, 0);
        assert_eq!(entry.end_time, entry.start_time);
    }

    #[test]
    fn clock_regression_clamps_to_zero_duration() {
        let running = RunningEntry::start(name("Email"), 5000);
        let entry = running.complete_at(4000);
        assert_eq!(entry.end_time, 5000);
        assert_eq!(entry.duration, 0);
    }

    #[test]
    fn elapsed_is_clamped_at_zero() {
        let running = RunningEntry::start(name("Email"), 5000);
        assert_eq!(running.elapsed_at(7500), 2500);
        assert_eq!(running.elapsed_at(4000), 0);
    }

    #[test]
    fn time_entry_serializes_with_camel_case_layout() {
        let entry = RunningEntry::start(name("Write report"), 1000).complete_at(5000);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1000,
                "taskName": "Write report",
                "startTime": 1000,
                "endTime": 5000,
                "duration": 4000,
            })
        );
    }
}
