// File: src/controller.rs
//! Shared entry point for board mutations.
//! Front ends that can raise events from more than one thread (the mobile
//! binding, the CLI runtime) go through this controller so every mutation
//! runs under the same lock and the store keeps a single writer.
use crate::config::{Config, Language};
use crate::model::{BoardGroup, TaskDraft, TaskRecord};
use crate::store::{BoardCounts, TaskBoardStore};
use std::sync::Arc;
use strum::IntoEnumIterator;
use tokio::sync::{Mutex, watch};
use tokio::task::JoinHandle;

/// Demo content loaded when `load_sample_data` is enabled.
const SAMPLE_TASKS: &[(&str, bool, &str, &str, BoardGroup)] = &[
    ("Book venue", true, "11/1 10:00", "11/10 18:00", BoardGroup::InProgress),
    ("Design flyer", false, "11/3 09:00", "11/15 17:00", BoardGroup::Todo),
    ("Confirm guest speakers", true, "11/5 13:00", "11/12 12:00", BoardGroup::Todo),
    ("Open ticket sales", false, "10/20 10:00", "10/25 23:59", BoardGroup::Done),
];

#[derive(Clone, Default)]
pub struct BoardController {
    pub store: Arc<Mutex<TaskBoardStore>>,
}

impl BoardController {
    pub fn new(store: Arc<Mutex<TaskBoardStore>>) -> Self {
        Self { store }
    }

    pub async fn add_task(
        &self,
        title: &str,
        is_urgent: bool,
        start_label: Option<&str>,
        deadline_label: Option<&str>,
    ) -> Option<TaskRecord> {
        let record = self
            .store
            .lock()
            .await
            .add(title, is_urgent, start_label, deadline_label);
        if let Some(r) = &record {
            log::debug!("Added task {} ('{}') to {:?}", r.uid, r.title, BoardGroup::Todo);
        }
        record
    }

    /// Submits a new-task form. `false` means the title was blank and the
    /// form stays open.
    pub async fn submit_draft(&self, draft: &TaskDraft) -> bool {
        let mut store = self.store.lock().await;
        let created = draft.submit(&mut store);
        if created {
            log::debug!("Submitted draft '{}' to {:?}", draft.title.trim(), BoardGroup::Todo);
        } else {
            log::debug!("Draft with blank title kept open");
        }
        created
    }

    pub async fn move_task(
        &self,
        uid: &str,
        from: BoardGroup,
        to: BoardGroup,
    ) -> Option<TaskRecord> {
        let moved = self.store.lock().await.move_task(uid, from, to);
        match &moved {
            Some(r) => log::debug!("Moved task {} {:?} -> {:?} ({:?})", uid, from, to, r.emphasis),
            None => log::debug!("Move of {} from {:?} ignored: not found", uid, from),
        }
        moved
    }

    pub async fn delete_task(&self, uid: &str, from: BoardGroup) -> Option<TaskRecord> {
        let deleted = self.store.lock().await.delete_task(uid, from);
        match &deleted {
            Some(_) => log::debug!("Deleted task {} from {:?}", uid, from),
            None => log::debug!("Delete of {} from {:?} ignored: not found", uid, from),
        }
        deleted
    }

    pub async fn snapshot(&self, group: BoardGroup) -> Vec<TaskRecord> {
        self.store.lock().await.snapshot(group)
    }

    /// All groups in board order, read under one lock.
    pub async fn board(&self) -> Vec<(BoardGroup, Vec<TaskRecord>)> {
        let store = self.store.lock().await;
        BoardGroup::iter().map(|g| (g, store.snapshot(g))).collect()
    }

    pub async fn counts(&self) -> BoardCounts {
        self.store.lock().await.counts()
    }

    pub async fn subscribe(&self, group: BoardGroup) -> watch::Receiver<Vec<TaskRecord>> {
        self.store.lock().await.subscribe(group)
    }

    /// Spawns a task that calls `on_change` with the current contents of
    /// `group` and again after every change. The language is read from
    /// `config` on each call, so a settings change applies to the next push.
    pub async fn forward_changes<F>(
        &self,
        group: BoardGroup,
        config: Arc<Mutex<Config>>,
        on_change: F,
    ) -> JoinHandle<()>
    where
        F: Fn(Language, Vec<TaskRecord>) + Send + 'static,
    {
        let mut rx = self.subscribe(group).await;
        tokio::spawn(async move {
            loop {
                let lang = config.lock().await.language;
                let tasks = rx.borrow_and_update().clone();
                on_change(lang, tasks);

                if rx.changed().await.is_err() {
                    log::debug!("Board dropped; stopping {:?} forwarder", group);
                    break;
                }
            }
        })
    }

    /// Adds the demo tasks through the regular add/move path.
    pub async fn load_sample(&self) {
        let mut store = self.store.lock().await;
        for (title, urgent, start, due, group) in SAMPLE_TASKS {
            if let Some(r) = store.add(title, *urgent, Some(*start), Some(*due))
                && *group != BoardGroup::Todo
            {
                store.move_task(&r.uid, BoardGroup::Todo, *group);
            }
        }
        log::info!("Loaded {} sample tasks", SAMPLE_TASKS.len());
    }
}
