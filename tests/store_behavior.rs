// File: tests/store_behavior.rs
use event_architect::model::{BoardGroup, Emphasis, Priority};
use event_architect::store::TaskBoardStore;

fn make_store() -> TaskBoardStore {
    TaskBoardStore::new()
}

#[test]
fn test_add_appends_one_record_to_todo() {
    let mut store = make_store();

    let normal = store.add("Print badges", false, None, None).unwrap();
    assert_eq!(normal.priority, Priority::Normal);
    assert_eq!(normal.emphasis, Emphasis::Neutral);

    let urgent = store
        .add("Book venue", true, Some("11/1"), Some("11/10"))
        .unwrap();
    assert_eq!(urgent.priority, Priority::Urgent);
    assert_eq!(urgent.emphasis, Emphasis::Highlighted);

    let todo = store.snapshot(BoardGroup::Todo);
    assert_eq!(todo.len(), 2);
    assert_eq!(todo.last(), Some(&urgent));
    assert!(store.snapshot(BoardGroup::InProgress).is_empty());
    assert!(store.snapshot(BoardGroup::Done).is_empty());
}

#[test]
fn test_blank_titles_are_ignored() {
    let mut store = make_store();
    store.add("Existing", false, None, None);

    assert!(store.add("", true, Some("11/1"), None).is_none());
    assert!(store.add("   ", false, None, None).is_none());

    assert_eq!(store.counts().todo, 1);
    assert_eq!(store.counts().total(), 1);
}

#[test]
fn test_delete_is_idempotent() {
    let mut store = make_store();
    let a = store.add("A", false, None, None).unwrap();
    let b = store.add("B", false, None, None).unwrap();

    let removed = store.delete_task(&a.uid, BoardGroup::Todo);
    assert_eq!(removed.as_ref().map(|r| r.uid.as_str()), Some(a.uid.as_str()));
    assert!(store.delete_task(&a.uid, BoardGroup::Todo).is_none());

    let todo = store.snapshot(BoardGroup::Todo);
    assert_eq!(todo.len(), 1);
    assert_eq!(todo[0].uid, b.uid);
}

#[test]
fn test_delete_from_wrong_group_is_noop() {
    let mut store = make_store();
    let a = store.add("A", false, None, None).unwrap();

    assert!(store.delete_task(&a.uid, BoardGroup::Done).is_none());
    assert_eq!(store.counts().todo, 1);
}

#[test]
fn test_find_reports_current_group() {
    let mut store = make_store();
    let a = store.add("A", true, None, None).unwrap();
    assert_eq!(store.find(&a.uid).map(|(g, _)| g), Some(BoardGroup::Todo));

    store.move_task(&a.uid, BoardGroup::Todo, BoardGroup::Done);
    let (group, record) = store.find(&a.uid).unwrap();
    assert_eq!(group, BoardGroup::Done);
    assert_eq!(record.emphasis, Emphasis::Muted);

    store.delete_task(&a.uid, BoardGroup::Done);
    assert!(store.find(&a.uid).is_none());
}

#[test]
fn test_book_venue_walkthrough() {
    let mut store = make_store();

    let r = store
        .add("Book venue", true, Some("11/1"), Some("11/10"))
        .unwrap();
    let todo = store.snapshot(BoardGroup::Todo);
    assert_eq!(todo.len(), 1);
    assert_eq!(todo[0].title, "Book venue");
    assert_eq!(todo[0].priority, Priority::Urgent);
    assert_eq!(todo[0].emphasis, Emphasis::Highlighted);

    store.move_task(&r.uid, BoardGroup::Todo, BoardGroup::InProgress);
    assert!(store.snapshot(BoardGroup::Todo).is_empty());
    let in_progress = store.snapshot(BoardGroup::InProgress);
    assert_eq!(in_progress.len(), 1);
    assert_eq!(in_progress[0].emphasis, Emphasis::Highlighted);

    store.move_task(&r.uid, BoardGroup::InProgress, BoardGroup::Done);
    assert!(store.snapshot(BoardGroup::InProgress).is_empty());
    let done = store.snapshot(BoardGroup::Done);
    assert_eq!(done.len(), 1);
    assert_eq!(done[0].title, "Book venue");
    assert_eq!(done[0].priority, Priority::Urgent);
    assert_eq!(done[0].emphasis, Emphasis::Muted);
}
