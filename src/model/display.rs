// File: ./src/model/display.rs
use crate::config::Language;
use crate::model::item::{BoardGroup, Priority, TaskRecord};
use rust_i18n::t;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub trait TaskDisplay {
    fn tag_label(&self, lang: Language) -> String;
    fn schedule_line(&self, lang: Language) -> String;
    fn side_bar_symbol(&self) -> &'static str;
}

impl TaskDisplay for TaskRecord {
    fn tag_label(&self, lang: Language) -> String {
        priority_label(self.priority, lang)
    }

    fn schedule_line(&self, lang: Language) -> String {
        t!(
            "schedule_line",
            locale = lang.locale(),
            start = self.start_label.as_deref().unwrap_or("-"),
            due = self.deadline_label.as_deref().unwrap_or("-")
        )
        .to_string()
    }

    fn side_bar_symbol(&self) -> &'static str {
        use crate::model::Emphasis;
        match self.emphasis {
            Emphasis::Highlighted => "┃",
            Emphasis::Neutral => " ",
            Emphasis::Muted => "╎",
        }
    }
}

pub fn priority_label(priority: Priority, lang: Language) -> String {
    let locale = lang.locale();
    match priority {
        Priority::Urgent => t!("priority_urgent", locale = locale),
        Priority::Normal => t!("priority_normal", locale = locale),
    }
    .to_string()
}

pub fn group_label(group: BoardGroup, lang: Language) -> String {
    let locale = lang.locale();
    match group {
        BoardGroup::Todo => t!("group_todo", locale = locale),
        BoardGroup::InProgress => t!("group_in_progress", locale = locale),
        BoardGroup::Done => t!("group_done", locale = locale),
    }
    .to_string()
}

/// Label of the "move to" menu entry for `group`.
pub fn move_action_label(group: BoardGroup, lang: Language) -> String {
    t!(
        "move_to",
        locale = lang.locale(),
        group = group_label(group, lang)
    )
    .to_string()
}

/// Cuts `text` to at most `max_cols` terminal columns, ending with `…` when
/// something was dropped. Wide (CJK) characters count as two columns.
pub fn truncate_to_width(text: &str, max_cols: usize) -> String {
    if text.width() <= max_cols {
        return text.to_string();
    }
    if max_cols == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_cols - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Right-pads `text` with spaces to `cols` terminal columns.
pub fn pad_to_width(text: &str, cols: usize) -> String {
    let w = text.width();
    if w >= cols {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(cols - w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_language() {
        assert_eq!(priority_label(Priority::Urgent, Language::Japanese), "緊急");
        assert_eq!(group_label(BoardGroup::InProgress, Language::English), "In Progress");
        assert_eq!(
            move_action_label(BoardGroup::Done, Language::Japanese),
            "完了へ移動"
        );
        assert_eq!(
            move_action_label(BoardGroup::InProgress, Language::English),
            "Move to In Progress"
        );
    }

    #[test]
    fn schedule_line_marks_missing_labels() {
        let r = TaskRecord::new("Book venue", false, Some("11/1 09:00"), None).unwrap();
        assert_eq!(
            r.schedule_line(Language::English),
            "Start: 11/1 09:00  Due: -"
        );
        assert_eq!(r.schedule_line(Language::Japanese), "開始: 11/1 09:00  期限: -");
    }

    #[test]
    fn truncation_counts_wide_characters() {
        assert_eq!(truncate_to_width("会場予約", 8), "会場予約");
        assert_eq!(truncate_to_width("会場予約", 6), "会場…");
        assert_eq!(truncate_to_width("Book venue", 5), "Book…");
        assert_eq!(pad_to_width("会場", 6), "会場  ");
    }
}
