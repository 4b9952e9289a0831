mod common;
use common::{add_class, croll, init_db, setup_test_db, stored_classes, temp_out};
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    croll()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(Path::new(&db_path).exists());
}

#[test]
fn test_add_and_list_classes() {
    let db_path = setup_test_db("cli_add_list");
    init_db(&db_path);

    croll()
        .args([
            "--db",
            &db_path,
            "add",
            "Advanced Mathematics",
            "2025-03-10",
            "09:30",
            "Room 204",
            "--duration",
            "90",
            "--from",
            "1366",
            "--to",
            "1368",
        ])
        .assert()
        .success()
        .stdout(contains("for 3 students"));

    add_class(&db_path, "Physics", "2025-03-12", &["Imran Mahmud"]);

    croll()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Advanced Mathematics"))
        .stdout(contains("1h 30m").or(contains("90")))
        .stdout(contains("Physics"));

    croll()
        .args(["--db", &db_path, "list", "--date", "2025-03-12"])
        .assert()
        .success()
        .stdout(contains("Physics"))
        .stdout(contains("Advanced Mathematics").not());

    croll()
        .args(["--db", &db_path, "list", "--student", "Tanvir Ahmed"])
        .assert()
        .success()
        .stdout(contains("Advanced Mathematics"))
        .stdout(contains("Physics").not());

    let classes = stored_classes(&db_path);
    assert_eq!(classes.len(), 2);
    assert_eq!(classes[0].students.len(), 3);
}

#[test]
fn test_add_rejects_invalid_input() {
    let db_path = setup_test_db("cli_add_invalid");
    init_db(&db_path);

    croll()
        .args([
            "--db", &db_path, "add", "Physics", "2025-03-10", "09:30", "Lab", "--from", "5",
            "--to", "2",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid range"));

    croll()
        .args(["--db", &db_path, "add", "Physics", "2025-03-10", "09:30", "Lab"])
        .assert()
        .failure()
        .stderr(contains("No students"));

    croll()
        .args([
            "--db", &db_path, "add", "Physics", "2025-03-10", "09:30", "Lab", "-d", "5", "-s",
            "Imran Mahmud",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid duration"));

    croll()
        .args([
            "--db", &db_path, "add", "", "2025-03-10", "09:30", "Lab", "-s", "Imran Mahmud",
        ])
        .assert()
        .failure()
        .stderr(contains("Missing required field: subject"));

    assert!(stored_classes(&db_path).is_empty());

    croll()
        .args(["--db", &db_path, "notifications"])
        .assert()
        .success()
        .stdout(contains("No notifications"));
}

#[test]
fn test_attendance_and_stats() {
    let db_path = setup_test_db("cli_attendance_stats");
    init_db(&db_path);
    add_class(&db_path, "Physics", "2025-03-10", &["Imran Mahmud", "Nusrat Jahan"]);
    let id = stored_classes(&db_path)[0].id.to_string();

    croll()
        .args([
            "--db",
            &db_path,
            "attendance",
            &id,
            "-m",
            "Imran Mahmud=p",
            "--mark",
            "Nusrat Jahan=absent",
        ])
        .assert()
        .success()
        .stdout(contains("Attendance saved: 2 of 2 marked, 1 present"))
        .stdout(contains("IM"));

    let class = &stored_classes(&db_path)[0];
    assert!(class.is_completed());

    croll()
        .args(["--db", &db_path, "stats", "--all"])
        .assert()
        .success()
        .stdout(contains("Completed classes  : 1"))
        .stdout(contains("50%"));

    croll()
        .args(["--db", &db_path, "stats", "--student", "Imran Mahmud"])
        .assert()
        .success()
        .stdout(contains("Attended           : 1"))
        .stdout(contains("100%"));

    croll()
        .args(["--db", &db_path, "stats", "--student", "Nusrat Jahan"])
        .assert()
        .success()
        .stdout(contains("Missed             : 1"))
        .stdout(contains("0%"))
        .stdout(contains("Attendance alert").not());
}

#[test]
fn test_stats_low_attendance_alert() {
    let db_path = setup_test_db("cli_low_attendance");
    init_db(&db_path);
    add_class(&db_path, "Physics", "2025-03-10", &["Imran Mahmud"]);
    add_class(&db_path, "Chemistry", "2025-03-11", &["Imran Mahmud"]);
    let classes = stored_classes(&db_path);
    let (first, second) = (classes[0].id.to_string(), classes[1].id.to_string());

    croll()
        .args(["--db", &db_path, "attendance", &first, "-m", "Imran Mahmud=present"])
        .assert()
        .success();
    croll()
        .args(["--db", &db_path, "attendance", &second, "-m", "Imran Mahmud=absent"])
        .assert()
        .success();

    croll()
        .args(["--db", &db_path, "stats", "--student", "Imran Mahmud"])
        .assert()
        .success()
        .stdout(contains("Attendance alert: 50% is below the required 75%."));
}

#[test]
fn test_attendance_errors() {
    let db_path = setup_test_db("cli_attendance_errors");
    init_db(&db_path);
    add_class(&db_path, "Physics", "2025-03-10", &["Imran Mahmud"]);
    let id = stored_classes(&db_path)[0].id.to_string();

    croll()
        .args(["--db", &db_path, "attendance", &id, "-m", "Stranger=present"])
        .assert()
        .failure()
        .stderr(contains("not enrolled"));

    croll()
        .args(["--db", &db_path, "attendance", &id, "-m", "Imran Mahmud=maybe"])
        .assert()
        .failure()
        .stderr(contains("Invalid attendance status"));

    croll()
        .args(["--db", &db_path, "attendance", "1", "--all-present"])
        .assert()
        .failure()
        .stderr(contains("Class not found: 1"));

    assert!(!stored_classes(&db_path)[0].is_completed());

    croll()
        .args(["--db", &db_path, "attendance", &id, "--all-present"])
        .assert()
        .success()
        .stdout(contains("1 present"));
}

#[test]
fn test_delete_class() {
    let db_path = setup_test_db("cli_delete");
    init_db(&db_path);
    add_class(&db_path, "Physics", "2025-03-10", &["Imran Mahmud"]);
    let id = stored_classes(&db_path)[0].id.to_string();

    croll()
        .args(["--db", &db_path, "del", "12345", "--yes"])
        .assert()
        .failure()
        .stderr(contains("Class not found"));

    croll()
        .args(["--db", &db_path, "del", &id, "--yes"])
        .assert()
        .success()
        .stdout(contains("has been removed"));

    croll()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No classes found"));

    // the notification about the class is kept
    croll()
        .args(["--db", &db_path, "notifications"])
        .assert()
        .success()
        .stdout(contains("Physics"));
}

#[test]
fn test_notifications_read() {
    let db_path = setup_test_db("cli_notifications");
    init_db(&db_path);
    add_class(&db_path, "Physics", "2025-03-10", &["Imran Mahmud"]);
    add_class(&db_path, "Chemistry", "2025-03-11", &["Imran Mahmud"]);

    croll()
        .args(["--db", &db_path, "notifications", "--read"])
        .assert()
        .success()
        .stdout(contains("New class added: \"Chemistry\" on 2025-03-11 at 10:00."))
        .stdout(contains("2 notifications, 2 unread"))
        .stdout(contains("2 notifications marked as read"));

    croll()
        .args(["--db", &db_path, "notifications", "--read"])
        .assert()
        .success()
        .stdout(contains("2 notifications, 0 unread"))
        .stdout(contains("0 notifications marked as read"));
}

#[test]
fn test_export_csv_and_json() {
    let db_path = setup_test_db("cli_export");
    init_db(&db_path);
    add_class(&db_path, "Physics", "2025-03-10", &["Imran Mahmud", "Nusrat Jahan"]);
    let id = stored_classes(&db_path)[0].id.to_string();
    croll()
        .args(["--db", &db_path, "attendance", &id, "-m", "Imran Mahmud=late"])
        .assert()
        .success();

    let csv_out = temp_out("cli_export", "csv");
    croll()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &csv_out, "--force"])
        .assert()
        .success();

    let content = fs::read_to_string(&csv_out).expect("read exported csv");
    assert!(content.starts_with("class_id,subject,date"));
    assert!(content.contains("Imran Mahmud,late"));
    assert!(content.contains("Nusrat Jahan,not-marked"));

    let json_out = temp_out("cli_export", "json");
    croll()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "json",
            "--file",
            &json_out,
            "--student",
            "Nusrat Jahan",
            "--force",
        ])
        .assert()
        .success();

    let rows: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).expect("read json")).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["attendance"], "not-marked");
    assert_eq!(rows[0]["class_status"], "completed");

    croll()
        .args(["--db", &db_path, "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("absolute"));
}

#[test]
fn test_students_log_and_backup() {
    let db_path = setup_test_db("cli_misc");
    init_db(&db_path);
    add_class(&db_path, "Physics", "2025-03-10", &["Imran Mahmud"]);

    croll()
        .args(["--db", &db_path, "students"])
        .assert()
        .success()
        .stdout(contains("1366"))
        .stdout(contains("Imran Mahmud"))
        .stdout(contains("30 students"));

    croll()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("add"))
        .stdout(contains("notify"));

    let backup = temp_out("cli_backup", "sqlite");
    croll()
        .args(["--db", &db_path, "backup", "--file", &backup, "--force"])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(Path::new(&backup).exists());
}
