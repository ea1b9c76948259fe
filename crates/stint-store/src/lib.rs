//! Storage layer for the stint time tracker.
//!
//! Provides an async key-value [`Storage`] abstraction over a fixed set
//! of top-level keys, plus [`Tracker`], the service that drives every
//! user operation as read relevant keys, compute via `stint-core`,
//! write back.
//!
//! # Consistency
//!
//! The backend offers no transactions and no locking. Every mutation is
//! a caller-orchestrated read-modify-write of whole keys. Sequencing
//! within one logical operation is guaranteed by `await` ordering
//! (resume's stop-write strictly precedes its start-read), but two
//! concurrent surfaces mutating the same key can lose an update, e.g. a
//! delete racing an edit. That race is a documented property of the
//! storage contract, not something this layer papers over with locks.
//!
//! The one multi-key mutation, stop, goes through [`Storage::set_many`]
//! so clearing `runningEntry` and extending `timeEntries` land in a
//! single write and a crash cannot record the same interval as both
//! running and completed.

use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

mod file;
mod memory;
mod tracker;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;
pub use tracker::{Snapshot, Tracker, TrackerError};

/// The fixed top-level storage keys.
pub mod keys {
    /// The in-progress timer: `RunningEntry` or null.
    pub const RUNNING_ENTRY: &str = "runningEntry";
    /// Completed entries, newest first.
    pub const TIME_ENTRIES: &str = "timeEntries";
    /// Registered task-name suggestions, first-insertion order.
    pub const TASK_NAMES: &str = "taskNames";
    /// Dark-mode preference flag.
    pub const DARK_MODE: &str = "darkMode";
}

/// Storage adapter errors.
///
/// These propagate unchanged through the tracker; the core never
/// assumes a write succeeded without the adapter's completion.
#[derive(Debug, Error)]
pub enum StorageError {
    /// An I/O error from the backing file.
    #[error("storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The stored state could not be (de)serialized.
    #[error("invalid stored state: {0}")]
    Json(#[from] serde_json::Error),
}

/// Async key-value storage over JSON values.
///
/// Keys are the fixed set in [`keys`]. A missing key reads as `None`;
/// callers supply defaults. See the [module docs](self) for the
/// consistency contract.
pub trait Storage: Send + Sync {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<Value>, StorageError>> + Send;

    /// Writes `value` under `key`.
    fn set(&self, key: &str, value: Value)
    -> impl Future<Output = Result<(), StorageError>> + Send;

    /// Writes several keys in one batched write.
    fn set_many(
        &self,
        entries: Vec<(String, Value)>,
    ) -> impl Future<Output = Result<(), StorageError>> + Send;
}
