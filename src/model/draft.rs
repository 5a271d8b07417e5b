// File: ./src/model/draft.rs
//! New-task form state, as collected before it reaches the store.
use crate::store::TaskBoardStore;
use chrono::{Datelike, NaiveDateTime, Timelike};

/// `M/D HH:MM`, the label the date and time pickers produce.
pub fn format_schedule_label(dt: NaiveDateTime) -> String {
    format!(
        "{}/{} {:02}:{:02}",
        dt.month(),
        dt.day(),
        dt.hour(),
        dt.minute()
    )
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub is_urgent: bool,
    pub start: Option<NaiveDateTime>,
    pub deadline: Option<NaiveDateTime>,
}

impl TaskDraft {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Self::default()
        }
    }

    pub fn toggle_urgent(&mut self) {
        self.is_urgent = !self.is_urgent;
    }

    /// Hands the draft to the store. Returns `true` when a record was
    /// created and the form can close; a blank title leaves the form open.
    pub fn submit(&self, store: &mut TaskBoardStore) -> bool {
        let start = self.start.map(format_schedule_label);
        let deadline = self.deadline.map(format_schedule_label);
        store
            .add(
                &self.title,
                self.is_urgent,
                start.as_deref(),
                deadline.as_deref(),
            )
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BoardGroup;
    use chrono::NaiveDate;

    fn at(month: u32, day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, month, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn label_pads_time_but_not_date() {
        assert_eq!(format_schedule_label(at(11, 1, 9, 5)), "11/1 09:05");
        assert_eq!(format_schedule_label(at(3, 14, 18, 30)), "3/14 18:30");
    }

    #[test]
    fn submit_formats_labels() {
        let mut store = TaskBoardStore::new();
        let mut draft = TaskDraft::new("Book venue");
        draft.toggle_urgent();
        draft.start = Some(at(11, 1, 10, 0));

        assert!(draft.submit(&mut store));
        let todo = store.snapshot(BoardGroup::Todo);
        assert_eq!(todo[0].start_label.as_deref(), Some("11/1 10:00"));
        assert_eq!(todo[0].deadline_label, None);
        assert!(todo[0].priority.is_urgent());
    }

    #[test]
    fn blank_draft_keeps_form_open() {
        let mut store = TaskBoardStore::new();
        assert!(!TaskDraft::new("   ").submit(&mut store));
        assert_eq!(store.counts().total(), 0);
    }
}
