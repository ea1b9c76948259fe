//! The timer state machine.
//!
//! Two states: idle and running, held as `Option<RunningEntry>`. All
//! transitions are pure functions of caller-supplied wall-clock time so
//! tests can pin exact timestamps.

use crate::entry::{RunningEntry, TimeEntry};
use crate::task::{TaskName, ValidationError};

/// Result of a start transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// The timer was idle and is now running this entry.
    Started(RunningEntry),
    /// A timer was already running; the call was a no-op and the
    /// existing entry is untouched.
    AlreadyRunning(RunningEntry),
}

/// The single-active-timer state machine.
///
/// Invariant: at most one running entry exists. Starting while running
/// and stopping while idle are silent no-ops by construction.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Timer {
    running: Option<RunningEntry>,
}

impl Timer {
    /// Builds a timer from previously persisted state.
    pub const fn new(running: Option<RunningEntry>) -> Self {
        Self { running }
    }

    /// The in-progress entry, if any.
    pub const fn running(&self) -> Option<&RunningEntry> {
        self.running.as_ref()
    }

    pub const fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Consumes the timer, yielding the state to persist.
    pub fn into_running(self) -> Option<RunningEntry> {
        self.running
    }

    /// Starts a timer for `name` at the given wall-clock time.
    ///
    /// Fails with [`ValidationError`] if `name` trims to empty. If a
    /// timer is already running the existing entry is kept untouched
    /// (accidental double-start must not lose in-progress time).
    pub fn start_at(&mut self, name: &str, now_ms: i64) -> Result<StartOutcome, ValidationError> {
        let task_name = TaskName::new(name)?;
        if let Some(existing) = &self.running {
            tracing::debug!(
                task = %existing.task_name,
                requested = %task_name,
                "start ignored, a timer is already running"
            );
            return Ok(StartOutcome::AlreadyRunning(existing.clone()));
        }
        let entry = RunningEntry::start(task_name, now_ms);
        tracing::debug!(task = %entry.task_name, start_time = entry.start_time, "timer started");
        self.running = Some(entry.clone());
        Ok(StartOutcome::Started(entry))
    }

    /// Stops the running timer at the given wall-clock time.
    ///
    /// Returns the completed entry, or `None` when idle (callers chain
    /// regardless; idle stop is not an error).
    pub fn stop_at(&mut self, now_ms: i64) -> Option<TimeEntry> {
        let running = self.running.take()?;
        let entry = running.complete_at(now_ms);
        tracing::debug!(
            task = %entry.task_name,
            duration_ms = entry.duration,
            "timer stopped"
        );
        Some(entry)
    }

    /// Stops any running timer, then starts one for `name`, both at the
    /// same wall-clock instant.
    ///
    /// The name is validated before the stop so an invalid name never
    /// tears down the active timer. Returns the entry completed by the
    /// stop phase (if any) together with the new running entry.
    pub fn resume_at(
        &mut self,
        name: &str,
        now_ms: i64,
    ) -> Result<(Option<TimeEntry>, RunningEntry), ValidationError> {
        let task_name = TaskName::new(name)?;
        let stopped = self.stop_at(now_ms);
        let entry = RunningEntry::start(task_name, now_ms);
        tracing::debug!(task = %entry.task_name, start_time = entry.start_time, "timer resumed");
        self.running = Some(entry.clone());
        Ok((stopped, entry))
    }

    /// Milliseconds elapsed on the running timer, or `None` when idle.
    pub fn elapsed_at(&self, now_ms: i64) -> Option<i64> {
        self.running.as_ref().map(|r| r.elapsed_at(now_ms))
    }
}
