use chrono::NaiveDate;
use cyberbot::store::TaskStore;

#[test]
fn test_summary_plain_title() {
    let mut store = TaskStore::new();
    let task = store.add("Backup Files", "", None);
    assert_eq!(task.summary(), "Backup Files");
}

#[test]
fn test_summary_completed_with_details() {
    let mut store = TaskStore::new();
    let due = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap().and_hms_opt(9, 0, 0).unwrap();
    store.add("Backup Files", "weekly", Some(due));
    store.mark_completed("backup files").unwrap();
    assert_eq!(
        store.list()[0].summary(),
        "✅ Backup Files - weekly (Reminder: Tuesday, 01 July 2025 09:00)"
    );
}
