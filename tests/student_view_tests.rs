mod common;
use chrono::NaiveDate;
use classroll::core::StudentView;
use classroll::models::{AttendanceMap, AttendanceStatus};
use common::{draft, memory_stores};

#[test]
fn test_view_sees_only_own_classes() {
    let (store, mut classes, mut notifications) = memory_stores();
    classes
        .create(&draft("Physics", "2025-03-11", &["Imran Mahmud"]), &mut notifications)
        .unwrap();
    classes
        .create(&draft("Chemistry", "2025-03-12", &["Nusrat Jahan"]), &mut notifications)
        .unwrap();

    let view = StudentView::open(store, "Imran Mahmud").unwrap();
    assert_eq!(view.student(), "Imran Mahmud");
    assert_eq!(view.classes().len(), 1);
    assert_eq!(view.classes()[0].subject, "Physics");
    // the notification log is shared by all students
    assert_eq!(view.notifications().len(), 2);
    assert_eq!(view.unread_count(), 2);
}

#[test]
fn test_refresh_picks_up_teacher_writes() {
    let (store, mut classes, mut notifications) = memory_stores();
    let mut view = StudentView::open(store, "Imran Mahmud").unwrap();
    assert!(view.classes().is_empty());
    assert!(!view.refresh().unwrap());

    let r = classes
        .create(&draft("Physics", "2025-03-11", &["Imran Mahmud"]), &mut notifications)
        .unwrap();
    assert!(view.refresh().unwrap());
    assert_eq!(view.classes().len(), 1);
    assert_eq!(view.unread_count(), 1);
    assert!(!view.refresh().unwrap());

    let mut sheet = AttendanceMap::new();
    sheet.insert("Imran Mahmud".into(), AttendanceStatus::Present);
    classes.save_attendance(r.id, sheet).unwrap();

    assert!(view.refresh().unwrap());
    assert_eq!(view.attendance_rate(), 100);
    assert_eq!(view.counts().present, 1);

    classes.delete(r.id).unwrap();
    assert!(view.refresh().unwrap());
    assert!(view.classes().is_empty());
    assert_eq!(view.attendance_rate(), 0);
}

#[test]
fn test_view_mark_all_read() {
    let (store, mut classes, mut notifications) = memory_stores();
    classes
        .create(&draft("Physics", "2025-03-11", &["Imran Mahmud"]), &mut notifications)
        .unwrap();

    let mut view = StudentView::open(store, "Imran Mahmud").unwrap();
    assert_eq!(view.mark_all_read().unwrap(), 1);
    assert_eq!(view.unread_count(), 0);
    assert_eq!(notifications.unread_count().unwrap(), 0);
    assert_eq!(view.mark_all_read().unwrap(), 0);
}

#[test]
fn test_view_summary() {
    let (store, mut classes, mut notifications) = memory_stores();
    let r = classes
        .create(&draft("Physics", "2025-03-09", &["Imran Mahmud"]), &mut notifications)
        .unwrap();
    classes
        .create(&draft("Chemistry", "2025-03-12", &["Imran Mahmud"]), &mut notifications)
        .unwrap();
    let mut sheet = AttendanceMap::new();
    sheet.insert("Imran Mahmud".into(), AttendanceStatus::Absent);
    classes.save_attendance(r.id, sheet).unwrap();

    let view = StudentView::open(store, "Imran Mahmud").unwrap();
    let s = view.summary(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap());
    assert_eq!(s.total_classes, 2);
    assert_eq!(s.completed_classes, 1);
    assert_eq!(s.missed, 1);
    assert_eq!(s.attendance_rate, 0);
    assert_eq!(s.upcoming_classes, 1);
}
