use chrono::{NaiveDate, NaiveTime, Utc};
use classroll::core::notification_store::new_class_message;
use classroll::core::{ClassCreated, ClassEventSink, NotificationStore};
use classroll::db::{KeyValueStore, KvRepository, MemoryStore};
use classroll::models::{NotificationKind, NotificationRecord};

fn event(id: i64, subject: &str) -> ClassCreated {
    ClassCreated {
        class_id: id,
        subject: subject.into(),
        date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
        time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
    }
}

#[test]
fn test_new_class_events_are_prepended() {
    let mut log = NotificationStore::new(KvRepository::new(MemoryStore::new()));

    log.class_created(&event(1, "Physics")).unwrap();
    log.class_created(&event(2, "Chemistry")).unwrap();

    let all = log.list().unwrap();
    assert_eq!(all.len(), 2);
    assert!(all[0].message.contains("Chemistry"));
    assert!(all[1].message.contains("Physics"));
    assert!(all.iter().all(|n| n.kind == NotificationKind::NewClass && !n.read));
    assert_ne!(all[0].id, all[1].id);
    assert_eq!(log.unread_count().unwrap(), 2);
}

#[test]
fn test_mark_all_read_is_idempotent() {
    let store = MemoryStore::new();
    let mut log = NotificationStore::new(KvRepository::new(store.clone()));
    log.class_created(&event(1, "Physics")).unwrap();
    log.class_created(&event(2, "Chemistry")).unwrap();

    assert_eq!(log.mark_all_read().unwrap(), 2);
    assert_eq!(log.unread_count().unwrap(), 0);
    let rev = store.revision("student_notifications").unwrap();

    assert_eq!(log.mark_all_read().unwrap(), 0);
    assert_eq!(log.unread_count().unwrap(), 0);
    assert_eq!(store.revision("student_notifications").unwrap(), rev);
    assert_eq!(log.list().unwrap().len(), 2);
}

#[test]
fn test_mark_all_read_on_empty_log() {
    let mut log = NotificationStore::new(KvRepository::new(MemoryStore::new()));
    assert_eq!(log.mark_all_read().unwrap(), 0);
    assert!(log.list().unwrap().is_empty());
}

#[test]
fn test_append_keeps_existing_entries() {
    let mut log = NotificationStore::new(KvRepository::new(MemoryStore::new()));
    log.class_created(&event(1, "Physics")).unwrap();
    log.mark_all_read().unwrap();

    log.append(NotificationRecord::new_class(7, "Hello".into(), Utc::now()))
        .unwrap();

    let all = log.list().unwrap();
    assert_eq!(all[0].id, 7);
    assert!(!all[0].read);
    assert!(all[1].read);
    assert_eq!(log.unread_count().unwrap(), 1);
}

#[test]
fn test_message_format() {
    assert_eq!(
        new_class_message(
            "Advanced Mathematics",
            NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            NaiveTime::from_hms_opt(8, 5, 0).unwrap(),
        ),
        "New class added: \"Advanced Mathematics\" on 2025-01-05 at 08:05."
    );
}

#[test]
fn test_record_json_shape() {
    let n = NotificationRecord::new_class(3, "Hi".into(), Utc::now());
    let json = serde_json::to_value(&n).unwrap();
    assert_eq!(json["type"], "new_class");
    assert_eq!(json["read"], false);

    // `read` may be missing from older records
    let raw = r#"[{"id":1,"type":"new_class","message":"m","timestamp":"2025-03-10T09:00:00Z"}]"#;
    let parsed: Vec<NotificationRecord> = serde_json::from_str(raw).unwrap();
    assert!(!parsed[0].read);
}
