//! The newest-first collection of completed entries.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::entry::TimeEntry;
use crate::task::TaskName;

/// Result of an edit request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// The entry's name was changed to this canonical form.
    Edited(TaskName),
    /// The new name trimmed to empty; treated as "no change requested"
    /// and the original name retained.
    Unchanged,
    /// No entry with the requested id exists.
    NotFound,
}

/// Ordered sequence of completed entries, newest first.
///
/// Insertion order is reverse chronological by construction; the store
/// never re-sorts. Persists as a plain JSON array.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryStore {
    entries: VecDeque<TimeEntry>,
}

impl EntryStore {
    /// Prepends a completed entry. Existing entries keep their order.
    pub fn insert(&mut self, entry: TimeEntry) {
        self.entries.push_front(entry);
    }

    /// Removes the entry with the given id.
    ///
    /// Idempotent: returns `false` (not an error) when absent.
    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() != before
    }

    /// Renames the entry with the given id.
    ///
    /// An absent id and an empty (post-trim) name are both tolerated
    /// silently; see [`EditOutcome`].
    pub fn edit(&mut self, id: i64, new_name: &str) -> EditOutcome {
        let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) else {
            return EditOutcome::NotFound;
        };
        match TaskName::new(new_name) {
            Ok(name) => {
                entry.task_name = name.clone();
                EditOutcome::Edited(name)
            }
            Err(_) => EditOutcome::Unchanged,
        }
    }

    /// Entries in store order (newest first).
    pub fn iter(&self) -> impl Iterator<Item = &TimeEntry> {
        self.entries.iter()
    }

    /// The most recently completed entry.
    pub fn latest(&self) -> Option<&TimeEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Groups the stored entries by task; see [`group_entries`].
    pub fn group_by_task(&self) -> Vec<TaskGroup<'_>> {
        group_entries(self.iter())
    }
}

impl<'a> IntoIterator for &'a EntryStore {
    type Item = &'a TimeEntry;
    type IntoIter = std::collections::vec_deque::Iter<'a, TimeEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Entries sharing one task name, with their aggregate duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskGroup<'a> {
    pub task: &'a TaskName,
    /// Sum of member durations, milliseconds.
    pub total_ms: i64,
    /// Members in input order.
    pub entries: Vec<&'a TimeEntry>,
}

/// Partitions entries by task name, preserving first-seen task order.
///
/// A free function rather than a store method so the table view can
/// inject a live pseudo-row for the running timer before grouping.
pub fn group_entries<'a, I>(entries: I) -> Vec<TaskGroup<'a>>
where
    I: IntoIterator<Item = &'a TimeEntry>,
{
    let mut groups: Vec<TaskGroup<'a>> = Vec::new();
    for entry in entries {
        match groups.iter_mut().find(|g| g.task == &entry.task_name) {
            Some(group) => {
                group.total_ms += entry.duration;
                group.entries.push(entry);
            }
            None => groups.push(TaskGroup {
                task: &entry.task_name,
                total_ms: entry.duration,
                entries: vec![entry],
            }),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::RunningEntry;

    fn entry(task: &str, start: i64, end: i64) -> TimeEntry {
        RunningEntry::start(TaskName::new(task).unwrap(), start).complete_at(end)
    }

    #[test]
    fn insert_prepends_newest_first() {
        let mut store = EntryStore::default();
        store.insert(entry("A", 1000, 2000));
        store.insert(entry("B", 3000, 4000));
        let ids: Vec<i64> = store.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![3000, 1000]);
        assert_eq!(store.latest().unwrap().task_name.as_str(), "B");
    }

    #[test]
    fn delete_is_idempotent() {
        let mut store = EntryStore::default();
        store.insert(entry("A", 1000, 2000));
        assert!(store.delete(1000));
        let after_first = store.clone();
        assert!(!store.delete(1000));
        assert_eq!(store, after_first);
        assert!(store.is_empty());
    }

    #[test]
    fn delete_of_unknown_id_leaves_store_untouched() {
        let mut store = EntryStore::default();
        store.insert(entry("A", 1000, 2000));
        assert!(!store.delete(999));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn edit_trims_and_updates_name() {
        let mut store = EntryStore::default();
        store.insert(entry("Old", 1000, 2000));
        let outcome = store.edit(1000, "  New  ");
        assert_eq!(outcome, EditOutcome::Edited(TaskName::new("New").unwrap()));
        assert_eq!(store.latest().unwrap().task_name.as_str(), "New");
    }

    #[test]
    fn edit_to_empty_keeps_original_name() {
        let mut store = EntryStore::default();
        store.insert(entry("Old", 1000, 2000));
        assert_eq!(store.edit(1000, "   "), EditOutcome::Unchanged);
        assert_eq!(store.latest().unwrap().task_name.as_str(), "Old");
    }

    #[test]
    fn edit_of_unknown_id_is_a_noop() {
        let mut store = EntryStore::default();
        store.insert(entry("Old", 1000, 2000));
        assert_eq!(store.edit(999, "New"), EditOutcome::NotFound);
        assert_eq!(store.latest().unwrap().task_name.as_str(), "Old");
    }

    #[test]
    fn grouping_preserves_first_seen_order_and_sums_durations() {
        let mut store = EntryStore::default();
        store.insert(entry("A", 1000, 2000)); // 1000ms
        store.insert(entry("B", 3000, 3500)); // 500ms
        store.insert(entry("A", 4000, 6000)); // 2000ms

        let groups = store.group_by_task();
        assert_eq!(groups.len(), 2);
        // Newest first, so A's 4000 entry is seen before B.
        assert_eq!(groups[0].task.as_str(), "A");
        assert_eq!(groups[0].total_ms, 3000);
        assert_eq!(groups[0].entries.len(), 2);
        assert_eq!(groups[1].task.as_str(), "B");
        assert_eq!(groups[1].total_ms, 500);
    }

    #[test]
    fn group_aggregate_is_order_independent() {
        let a = entry("A", 1000, 2000);
        let b = entry("A", 3000, 3500);
        let forward = group_entries([&a, &b]);
        let reverse = group_entries([&b, &a]);
        assert_eq!(forward[0].total_ms, reverse[0].total_ms);
        assert_eq!(forward[0].total_ms, 1500);
    }

    #[test]
    fn store_serializes_as_plain_array() {
        let mut store = EntryStore::default();
        store.insert(entry("A", 1000, 2000));
        let json = serde_json::to_value(&store).unwrap();
        assert!(json.is_array());
        let parsed: EntryStore = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, store);
    }
}
