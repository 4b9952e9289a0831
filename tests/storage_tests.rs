mod common;
use classroll::core::{ClassCreated, ClassStore};
use classroll::db::pool::DbPool;
use classroll::db::{ClassRepository, KeyValueStore, KvRepository, MemoryStore, SqliteStore};
use classroll::errors::AppError;
use common::{draft, sample_directory, setup_test_db};

#[test]
fn test_memory_store_quota_is_a_persistence_error() {
    let store = MemoryStore::with_quota(64);
    let mut classes = ClassStore::new(KvRepository::new(store.clone()), sample_directory());
    let mut sink: Vec<ClassCreated> = Vec::new();

    let err = classes
        .create(&draft("Physics", "2025-03-11", &["Imran Mahmud"]), &mut sink)
        .unwrap_err();

    assert!(err.is_persistence(), "{err:?}");
    assert!(matches!(err, AppError::Persistence(_)));
    assert!(sink.is_empty());
    assert_eq!(store.get("teacher_classes").unwrap(), None);
    assert_eq!(store.get("student_classes").unwrap(), None);
}

#[test]
fn test_memory_store_clones_share_data() {
    let mut a = MemoryStore::new();
    let b = a.clone();

    assert_eq!(b.revision("k").unwrap(), 0);
    a.set("k", "1".into()).unwrap();
    a.set("k", "2".into()).unwrap();

    assert_eq!(b.get("k").unwrap().as_deref(), Some("2"));
    assert_eq!(b.revision("k").unwrap(), 2);
}

#[test]
fn test_sqlite_store_counts_revisions() {
    let mut store = SqliteStore::from_pool(DbPool::in_memory().unwrap()).unwrap();

    assert_eq!(store.get("k").unwrap(), None);
    assert_eq!(store.revision("k").unwrap(), 0);

    store.set("k", "[]".into()).unwrap();
    store
        .set_many(&[("k", "[1]".into()), ("other", "x".into())])
        .unwrap();

    assert_eq!(store.get("k").unwrap().as_deref(), Some("[1]"));
    assert_eq!(store.revision("k").unwrap(), 2);
    assert_eq!(store.revision("other").unwrap(), 1);
}

#[test]
fn test_sqlite_file_is_shared_between_connections() {
    let db_path = setup_test_db("storage_shared");

    let mut teacher = ClassStore::new(
        KvRepository::new(SqliteStore::open(&db_path).unwrap()),
        sample_directory(),
    );
    let record = teacher
        .create(&draft("Physics", "2025-03-11", &["Imran Mahmud"]), &mut Vec::<ClassCreated>::new())
        .unwrap();

    let other = KvRepository::new(SqliteStore::open(&db_path).unwrap());
    assert_eq!(other.load_classes().unwrap(), vec![record.clone()]);
    assert_eq!(other.load_student_classes().unwrap(), vec![record]);
    assert_eq!(other.student_revisions().unwrap(), (1, 0));
}

#[test]
fn test_corrupt_document_is_a_persistence_error() {
    let mut store = MemoryStore::new();
    store.set("teacher_classes", "not json".into()).unwrap();

    let repo = KvRepository::new(store);
    let err = repo.load_classes().unwrap_err();
    assert!(err.is_persistence());
}

#[test]
fn test_stored_json_layout() {
    let store = MemoryStore::new();
    let mut classes = ClassStore::new(KvRepository::new(store.clone()), sample_directory());
    classes
        .create(&draft("Physics", "2025-03-11", &["Imran Mahmud"]), &mut Vec::<ClassCreated>::new())
        .unwrap();

    let raw = store.get("teacher_classes").unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let first = &json[0];
    assert_eq!(first["date"], "2025-03-11");
    assert_eq!(first["time"], "09:30");
    assert_eq!(first["status"], "scheduled");
    assert_eq!(first["students"][0], "Imran Mahmud");
    assert!(first["attendance"].as_object().unwrap().is_empty());
}

#[test]
fn test_marks_for_students_not_enrolled_are_rejected_on_load() {
    let mut store = MemoryStore::new();
    let edited = r#"[{"id":1,"subject":"Physics","date":"2025-03-11","time":"09:30",
        "duration":60,"location":"Lab","students":["Imran Mahmud"],"status":"completed",
        "attendance":{"Imran Mahmud":"present","Ghost":"absent"}}]"#;
    store.set("teacher_classes", edited.into()).unwrap();
    store.set("student_classes", edited.into()).unwrap();

    let repo = KvRepository::new(store);
    let err = repo.load_classes().unwrap_err();
    assert!(matches!(err, AppError::Persistence(_)), "{err:?}");
    assert!(repo.load_student_classes().unwrap_err().is_persistence());
}

#[test]
fn test_high_water_mark_is_saved_with_classes() {
    let store = MemoryStore::new();
    let mut classes = ClassStore::new(KvRepository::new(store.clone()), sample_directory());
    let r = classes
        .create(&draft("Physics", "2025-03-11", &["Imran Mahmud"]), &mut Vec::<ClassCreated>::new())
        .unwrap();
    classes.delete(r.id).unwrap();

    assert_eq!(store.get("teacher_classes").unwrap().as_deref(), Some("[]"));
    assert_eq!(classes.repository().highest_issued_id().unwrap(), r.id);
}
