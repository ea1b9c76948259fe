//! Core domain logic for the stint time tracker.
//!
//! This crate contains the fundamental types and logic for:
//! - Timer: the single-active-timer state machine (start/stop/resume)
//! - Entry store: the newest-first collection of completed entries
//! - Suggestions: the deduplicated task-name autocomplete list
//! - Formatting and CSV export of completed entries
//!
//! Everything here is pure: wall-clock time is always supplied by the
//! caller as epoch milliseconds, and persistence lives in `stint-store`.

pub mod csv;
mod entry;
mod format;
mod store;
mod suggest;
mod task;
mod timer;

pub use entry::{RunningEntry, TimeEntry};
pub use format::{format_hms, iso_utc, local_timestamp, now_ms};
pub use store::{EditOutcome, EntryStore, TaskGroup, group_entries};
pub use suggest::SuggestionRegistry;
pub use task::{TaskName, ValidationError};
pub use timer::{StartOutcome, Timer};
