// File: src/store.rs
use crate::model::{BoardGroup, TaskRecord};
use serde::Serialize;
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BoardCounts {
    pub todo: usize,
    pub in_progress: usize,
    pub done: usize,
}

impl BoardCounts {
    pub fn total(&self) -> usize {
        self.todo + self.in_progress + self.done
    }
}

/// In-memory owner of the three board groups.
///
/// Every successful mutation publishes the new sequence of each touched
/// group on that group's watch channel. Ignored calls (blank titles, unknown
/// uids) publish nothing.
#[derive(Debug)]
pub struct TaskBoardStore {
    groups: [Vec<TaskRecord>; 3],
    channels: [watch::Sender<Vec<TaskRecord>>; 3],
    revision: u64,
}

impl Default for TaskBoardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskBoardStore {
    pub fn new() -> Self {
        Self {
            groups: [Vec::new(), Vec::new(), Vec::new()],
            channels: [
                watch::channel(Vec::new()).0,
                watch::channel(Vec::new()).0,
                watch::channel(Vec::new()).0,
            ],
            revision: 0,
        }
    }

    /// Appends a new record to `Todo`. Blank titles are ignored.
    pub fn add(
        &mut self,
        title: &str,
        is_urgent: bool,
        start_label: Option<&str>,
        deadline_label: Option<&str>,
    ) -> Option<TaskRecord> {
        let Some(record) = TaskRecord::new(title, is_urgent, start_label, deadline_label) else {
            log::debug!("Ignoring add with blank title");
            return None;
        };

        self.groups[BoardGroup::Todo.index()].push(record.clone());
        self.publish(&[BoardGroup::Todo]);
        Some(record)
    }

    /// Moves the record `uid` from `from` to the end of `to`, recomputing its
    /// emphasis. Returns the updated record, or `None` if `from` does not hold
    /// it or `from == to`. Groups never reorder in place.
    pub fn move_task(&mut self, uid: &str, from: BoardGroup, to: BoardGroup) -> Option<TaskRecord> {
        if from == to {
            log::debug!("Move of {} within {:?} ignored", uid, from);
            return None;
        }
        let mut record = self.take(uid, from)?;
        record.enter(to);
        self.groups[to.index()].push(record.clone());
        self.publish(&[from, to]);
        Some(record)
    }

    pub fn delete_task(&mut self, uid: &str, from: BoardGroup) -> Option<TaskRecord> {
        let record = self.take(uid, from)?;
        self.publish(&[from]);
        Some(record)
    }

    /// Copy of the current sequence of `group`.
    pub fn snapshot(&self, group: BoardGroup) -> Vec<TaskRecord> {
        self.groups[group.index()].clone()
    }

    /// Push-on-change view of `group`. The receiver starts out holding the
    /// current sequence, marked as already seen.
    pub fn subscribe(&self, group: BoardGroup) -> watch::Receiver<Vec<TaskRecord>> {
        self.channels[group.index()].subscribe()
    }

    pub fn counts(&self) -> BoardCounts {
        BoardCounts {
            todo: self.groups[BoardGroup::Todo.index()].len(),
            in_progress: self.groups[BoardGroup::InProgress.index()].len(),
            done: self.groups[BoardGroup::Done.index()].len(),
        }
    }

    pub fn find(&self, uid: &str) -> Option<(BoardGroup, TaskRecord)> {
        use strum::IntoEnumIterator;

        BoardGroup::iter().find_map(|group| {
            self.groups[group.index()]
                .iter()
                .find(|r| r.uid == uid)
                .map(|r| (group, r.clone()))
        })
    }

    /// Number of successful mutations since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // --- Core Logic Helpers ---

    fn take(&mut self, uid: &str, from: BoardGroup) -> Option<TaskRecord> {
        let list = &mut self.groups[from.index()];
        match list.iter().position(|r| r.uid == uid) {
            Some(idx) => Some(list.remove(idx)),
            None => {
                log::debug!("No record {} in {:?}; ignoring", uid, from);
                None
            }
        }
    }

    fn publish(&mut self, touched: &[BoardGroup]) {
        self.revision += 1;
        for group in touched {
            let current = self.groups[group.index()].clone();
            self.channels[group.index()].send_replace(current);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Emphasis, Priority};

    #[test]
    fn add_appends_to_todo_only() {
        let mut store = TaskBoardStore::new();
        store.add("First", false, None, None).unwrap();
        let second = store.add("Second", true, Some("11/1"), None).unwrap();

        let todo = store.snapshot(BoardGroup::Todo);
        assert_eq!(todo.len(), 2);
        assert_eq!(todo[1], second);
        assert_eq!(second.priority, Priority::Urgent);
        assert_eq!(second.emphasis, Emphasis::Highlighted);
        assert!(store.snapshot(BoardGroup::InProgress).is_empty());
        assert!(store.snapshot(BoardGroup::Done).is_empty());
    }

    #[test]
    fn revision_counts_only_effective_mutations() {
        let mut store = TaskBoardStore::new();
        let r = store.add("Task", false, None, None).unwrap();
        store.add("   ", false, None, None);
        store.move_task(&r.uid, BoardGroup::Done, BoardGroup::Todo);
        store.delete_task("missing", BoardGroup::Todo);
        assert_eq!(store.revision(), 1);

        store.move_task(&r.uid, BoardGroup::Todo, BoardGroup::Done);
        store.delete_task(&r.uid, BoardGroup::Done);
        assert_eq!(store.revision(), 3);
    }

    #[test]
    fn move_within_same_group_keeps_order() {
        let mut store = TaskBoardStore::new();
        let a = store.add("A", false, None, None).unwrap();
        let b = store.add("B", false, None, None).unwrap();
        let rev = store.revision();

        assert_eq!(store.move_task(&a.uid, BoardGroup::Todo, BoardGroup::Todo), None);

        let uids: Vec<_> = store
            .snapshot(BoardGroup::Todo)
            .into_iter()
            .map(|r| r.uid)
            .collect();
        assert_eq!(uids, vec![a.uid, b.uid]);
        assert_eq!(store.revision(), rev);
    }

    #[test]
    fn snapshot_is_detached() {
        let mut store = TaskBoardStore::new();
        store.add("Task", false, None, None);

        let mut snap = store.snapshot(BoardGroup::Todo);
        snap[0].title = "Changed".to_string();
        snap.clear();

        assert_eq!(store.snapshot(BoardGroup::Todo)[0].title, "Task");
    }
}
