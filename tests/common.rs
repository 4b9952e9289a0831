#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use classroll::core::{ClassStore, NotificationStore};
use classroll::db::{ClassRepository, KvRepository, MemoryStore, SqliteStore};
use classroll::models::{
    ClassDraft, ClassRecord, RosterSelection, StudentDirectory, StudentDirectoryEntry,
};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn croll() -> Command {
    let mut cmd = cargo_bin_cmd!("classroll");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_classroll.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn init_db(db_path: &str) {
    croll()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Schedule a class through the CLI for the given students.
pub fn add_class(db_path: &str, subject: &str, date: &str, students: &[&str]) {
    let mut args = vec!["--db", db_path, "add", subject, date, "10:00", "Room 101"];
    for s in students {
        args.push("--student");
        args.push(s);
    }
    croll().args(&args).assert().success();
}

/// Classes as stored in the database file.
pub fn stored_classes(db_path: &str) -> Vec<ClassRecord> {
    let store = SqliteStore::open(db_path).expect("open db");
    KvRepository::new(store).load_classes().expect("load classes")
}

/// Small directory with a gap in the rolls (1369 is missing).
pub fn sample_directory() -> StudentDirectory {
    StudentDirectory::new(vec![
        StudentDirectoryEntry { name: "Imran Mahmud".into(), roll: 1366 },
        StudentDirectoryEntry { name: "Nusrat Jahan".into(), roll: 1367 },
        StudentDirectoryEntry { name: "Tanvir Ahmed".into(), roll: 1368 },
        StudentDirectoryEntry { name: "Rakib Hasan".into(), roll: 1370 },
    ])
}

pub type MemClassStore = ClassStore<KvRepository<MemoryStore>>;
pub type MemNotifications = NotificationStore<KvRepository<MemoryStore>>;

/// Class store and notification log sharing one in-memory storage area.
pub fn memory_stores() -> (MemoryStore, MemClassStore, MemNotifications) {
    let store = MemoryStore::new();
    let classes = ClassStore::new(KvRepository::new(store.clone()), sample_directory());
    let notifications = NotificationStore::new(KvRepository::new(store.clone()));
    (store, classes, notifications)
}

pub fn draft(subject: &str, date: &str, students: &[&str]) -> ClassDraft {
    ClassDraft::new(
        subject,
        date,
        "09:30",
        "Room 204",
        RosterSelection::names(students.iter().copied()),
    )
}
