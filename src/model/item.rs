// File: ./src/model/item.rs
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator};
use uuid::Uuid;

fn default_uid() -> String {
    Uuid::new_v4().to_string()
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    #[default]
    Normal,
    Urgent,
}

impl Priority {
    pub fn from_urgent(is_urgent: bool) -> Self {
        if is_urgent {
            Self::Urgent
        } else {
            Self::Normal
        }
    }

    pub fn is_urgent(&self) -> bool {
        matches!(self, Self::Urgent)
    }
}

/// Display intensity of a task card's side bar.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Emphasis {
    Highlighted,
    Neutral,
    Muted,
}

impl Emphasis {
    /// Emphasis a record with `priority` takes on when it lands in `group`.
    pub fn derive(priority: Priority, group: BoardGroup) -> Self {
        if group == BoardGroup::Done {
            return Self::Muted;
        }
        match priority {
            Priority::Urgent => Self::Highlighted,
            Priority::Normal => Self::Neutral,
        }
    }
}

#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize, EnumIter,
)]
pub enum BoardGroup {
    Todo,
    InProgress,
    Done,
}

impl BoardGroup {
    /// Groups a card in `self` can be moved to, in board order.
    pub fn move_targets(self) -> Vec<BoardGroup> {
        BoardGroup::iter().filter(|g| *g != self).collect()
    }

    pub fn index(self) -> usize {
        match self {
            BoardGroup::Todo => 0,
            BoardGroup::InProgress => 1,
            BoardGroup::Done => 2,
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    #[serde(default = "default_uid")]
    pub uid: String,
    pub title: String,
    pub priority: Priority,
    pub start_label: Option<String>,
    pub deadline_label: Option<String>,
    pub emphasis: Emphasis,
}

impl TaskRecord {
    /// Builds a fresh `Todo` record. Returns `None` when the title is blank.
    pub fn new(
        title: &str,
        is_urgent: bool,
        start_label: Option<&str>,
        deadline_label: Option<&str>,
    ) -> Option<Self> {
        let title = title.trim();
        if title.is_empty() {
            return None;
        }

        let priority = Priority::from_urgent(is_urgent);
        Some(Self {
            uid: default_uid(),
            title: title.to_string(),
            priority,
            start_label: clean_label(start_label),
            deadline_label: clean_label(deadline_label),
            emphasis: Emphasis::derive(priority, BoardGroup::Todo),
        })
    }

    /// Recomputes emphasis for a record entering `group`.
    pub fn enter(&mut self, group: BoardGroup) {
        self.emphasis = Emphasis::derive(self.priority, group);
    }
}

fn clean_label(label: Option<&str>) -> Option<String> {
    label
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
}
