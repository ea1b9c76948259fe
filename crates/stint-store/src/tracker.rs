//! The tracker service: user operations as read-compute-write flows.

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use stint_core::{
    EditOutcome, EntryStore, RunningEntry, StartOutcome, SuggestionRegistry, TimeEntry, Timer,
    ValidationError, now_ms,
};

use crate::{Storage, StorageError, keys};

/// Errors surfaced by tracker operations.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// The user supplied an empty task name. The only user-facing
    /// error; everything else tolerated by the design is a no-op.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The storage adapter failed; propagated unchanged.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// One-shot read of all four storage keys, feeding a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub running: Option<RunningEntry>,
    pub entries: EntryStore,
    pub suggestions: SuggestionRegistry,
    pub dark_mode: bool,
}

/// Drives every user operation against a [`Storage`] backend.
///
/// Each operation reads the relevant keys, computes new state through
/// `stint-core`, and writes back. Sequencing within one operation is
/// guaranteed; see the crate docs for what is not.
#[derive(Debug)]
pub struct Tracker<S> {
    storage: S,
}

impl<S: Storage> Tracker<S> {
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    async fn load<T>(&self, key: &str) -> Result<T, TrackerError>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        match self.storage.get(key).await? {
            None | Some(Value::Null) => Ok(T::default()),
            Some(value) => Ok(serde_json::from_value(value).map_err(StorageError::from)?),
        }
    }

    async fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), TrackerError> {
        let value = serde_json::to_value(value).map_err(StorageError::from)?;
        self.storage.set(key, value).await?;
        Ok(())
    }

    /// Appends `name` to the suggestion list if novel; writes only when
    /// the registry actually changed.
    async fn register_suggestion(&self, name: &str) -> Result<(), TrackerError> {
        let mut registry: SuggestionRegistry = self.load(keys::TASK_NAMES).await?;
        if registry.register(name) {
            self.save(keys::TASK_NAMES, &registry).await?;
        }
        Ok(())
    }

    /// Starts a timer for `name`.
    ///
    /// A timer already running is left untouched and returned as
    /// [`StartOutcome::AlreadyRunning`]; nothing is written in that
    /// case.
    pub async fn start(&self, name: &str) -> Result<StartOutcome, TrackerError> {
        let mut timer = Timer::new(self.load(keys::RUNNING_ENTRY).await?);
        let outcome = timer.start_at(name, now_ms())?;
        if let StartOutcome::Started(entry) = &outcome {
            self.save(keys::RUNNING_ENTRY, entry).await?;
            self.register_suggestion(entry.task_name.as_str()).await?;
        }
        Ok(outcome)
    }

    /// Stops the running timer, if any, prepending the completed entry.
    ///
    /// Clearing `runningEntry` and extending `timeEntries` go through
    /// one batched write. The task name is re-registered afterwards so
    /// a post-edit rename still lands in the suggestions.
    pub async fn stop(&self) -> Result<Option<TimeEntry>, TrackerError> {
        let mut timer = Timer::new(self.load(keys::RUNNING_ENTRY).await?);
        let Some(completed) = timer.stop_at(now_ms()) else {
            return Ok(None);
        };

        let mut entries: EntryStore = self.load(keys::TIME_ENTRIES).await?;
        entries.insert(completed.clone());
        self.storage
            .set_many(vec![
                (keys::RUNNING_ENTRY.to_string(), Value::Null),
                (
                    keys::TIME_ENTRIES.to_string(),
                    serde_json::to_value(&entries).map_err(StorageError::from)?,
                ),
            ])
            .await?;
        self.register_suggestion(completed.task_name.as_str())
            .await?;
        Ok(Some(completed))
    }

    /// Stops any running timer, then starts one for `name`.
    ///
    /// The stop is fully awaited, storage write included, before the
    /// start reads state, so the composition cannot lose the stopped
    /// interval. The name is validated up front so a bad name never
    /// tears down the active timer.
    pub async fn resume(
        &self,
        name: &str,
    ) -> Result<(Option<TimeEntry>, StartOutcome), TrackerError> {
        stint_core::TaskName::new(name)?;
        let stopped = self.stop().await?;
        let outcome = self.start(name).await?;
        Ok((stopped, outcome))
    }

    /// Deletes the entry with the given id. Idempotent; returns whether
    /// anything was removed. Nothing is written when the id is absent.
    pub async fn delete_entry(&self, id: i64) -> Result<bool, TrackerError> {
        let mut entries: EntryStore = self.load(keys::TIME_ENTRIES).await?;
        if !entries.delete(id) {
            return Ok(false);
        }
        self.save(keys::TIME_ENTRIES, &entries).await?;
        Ok(true)
    }

    /// Renames the entry with the given id.
    ///
    /// Absent ids and empty names are tolerated per [`EditOutcome`];
    /// storage is written and the name re-registered only on a real
    /// change.
    pub async fn edit_entry(&self, id: i64, new_name: &str) -> Result<EditOutcome, TrackerError> {
        let mut entries: EntryStore = self.load(keys::TIME_ENTRIES).await?;
        let outcome = entries.edit(id, new_name);
        if let EditOutcome::Edited(name) = &outcome {
            self.save(keys::TIME_ENTRIES, &entries).await?;
            self.register_suggestion(name.as_str()).await?;
        }
        Ok(outcome)
    }

    /// Flips the dark-mode flag and returns the new value.
    pub async fn toggle_dark_mode(&self) -> Result<bool, TrackerError> {
        let current: bool = self.load(keys::DARK_MODE).await?;
        let toggled = !current;
        self.save(keys::DARK_MODE, &toggled).await?;
        Ok(toggled)
    }

    /// The completed entries, newest first.
    pub async fn entries(&self) -> Result<EntryStore, TrackerError> {
        self.load(keys::TIME_ENTRIES).await
    }

    /// The registered task-name suggestions.
    pub async fn suggestions(&self) -> Result<SuggestionRegistry, TrackerError> {
        self.load(keys::TASK_NAMES).await
    }

    /// Reads all four keys at once for the render layer.
    pub async fn snapshot(&self) -> Result<Snapshot, TrackerError> {
        Ok(Snapshot {
            running: self.load(keys::RUNNING_ENTRY).await?,
            entries: self.load(keys::TIME_ENTRIES).await?,
            suggestions: self.load(keys::TASK_NAMES).await?,
            dark_mode: self.load(keys::DARK_MODE).await?,
        })
    }
}
