use predicates::prelude::*;

mod common;
use common::{init_db_with_data, qrc, setup_test_db};

const TEST_SECRET: &str = "integration-test-secret";

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    qrc()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_clock_in_and_out() {
    let db_path = setup_test_db("clock_in_out");

    qrc()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    qrc()
        .args([
            "--db",
            &db_path,
            "clock",
            "in",
            "--date",
            "2025-06-02",
            "--at",
            "09:00",
            "--employee",
            "alice",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entrance recorded"));

    qrc()
        .args([
            "--db",
            &db_path,
            "clock",
            "out",
            "--date",
            "2025-06-02",
            "--at",
            "17:00",
            "--employee",
            "alice",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exit recorded"));
}

#[test]
fn test_clock_rejects_unknown_kind() {
    let db_path = setup_test_db("clock_bad_kind");

    qrc()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    qrc()
        .args(["--db", &db_path, "clock", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid event kind"));
}

#[test]
fn test_week_shows_paired_interval_and_total() {
    let db_path = setup_test_db("week_pair");
    init_db_with_data(&db_path);

    qrc()
        .args([
            "--db",
            &db_path,
            "week",
            "--date",
            "2025-06-04",
            "--employee",
            "alice",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("09:00 - 17:00"))
        .stdout(predicate::str::contains("8.00"))
        .stdout(predicate::str::contains("Week 23"));
}

#[test]
fn test_week_shows_placeholder_for_empty_days() {
    let db_path = setup_test_db("week_empty");
    init_db_with_data(&db_path);

    // only Monday has data; the other six days show the placeholder
    let output = qrc()
        .args([
            "--db",
            &db_path,
            "week",
            "--date",
            "2025-06-04",
            "--employee",
            "alice",
        ])
        .output()
        .expect("failed to run week");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let placeholders = stdout.matches('—').count();
    assert_eq!(placeholders, 6, "expected 6 empty days:\n{}", stdout);
}

#[test]
fn test_week_shows_open_entrance_as_question_mark() {
    let db_path = setup_test_db("week_open");

    qrc()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    qrc()
        .args([
            "--db",
            &db_path,
            "clock",
            "in",
            "--date",
            "2025-06-03",
            "--at",
            "09:30",
            "--employee",
            "alice",
        ])
        .assert()
        .success();

    qrc()
        .args([
            "--db",
            &db_path,
            "week",
            "--date",
            "2025-06-03",
            "--employee",
            "alice",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("09:30 - ?"))
        .stdout(predicate::str::contains("Total: 0.00 h"));
}

#[test]
fn test_adjust_inserts_manual_pair() {
    let db_path = setup_test_db("adjust_pair");
    init_db_with_data(&db_path);

    qrc()
        .args([
            "--db",
            &db_path,
            "adjust",
            "2025-06-03",
            "--in",
            "10:00",
            "--out",
            "12:30",
            "--employee",
            "alice",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Manual pair recorded"));

    qrc()
        .args([
            "--db",
            &db_path,
            "week",
            "--date",
            "2025-06-04",
            "--employee",
            "alice",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("10:00 - 12:30"))
        .stdout(predicate::str::contains("Total: 10.50 h"));

    qrc()
        .args(["--db", &db_path, "list", "--employee", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("source=manual"));
}

#[test]
fn test_adjust_rejects_inverted_times() {
    let db_path = setup_test_db("adjust_inverted");

    qrc()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    qrc()
        .args([
            "--db",
            &db_path,
            "adjust",
            "2025-06-03",
            "--in",
            "12:00",
            "--out",
            "09:00",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time"));
}

#[test]
fn test_list_shows_events_newest_first() {
    let db_path = setup_test_db("list_events");
    init_db_with_data(&db_path);

    let output = qrc()
        .args(["--db", &db_path, "list", "--employee", "alice"])
        .output()
        .expect("failed to list");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let out_pos = stdout.find("| out |").expect("missing out event");
    let in_pos = stdout.find("| in |").expect("missing in event");
    assert!(out_pos < in_pos, "expected newest (out) first:\n{}", stdout);
}

#[test]
fn test_qr_show_and_check_round_trip() {
    let db_path = setup_test_db("qr_round_trip");

    let output = qrc()
        .args(["--db", &db_path, "qr", "--show"])
        .env("QRCLOCK_SECRET", TEST_SECRET)
        .output()
        .expect("failed to run qr --show");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload = stdout
        .lines()
        .find_map(|l| l.trim().strip_prefix("Payload: "))
        .expect("missing payload line")
        .trim()
        .to_string();
    assert!(payload.starts_with("FICHAJE:"));

    qrc()
        .args(["--db", &db_path, "qr", "--check", &payload])
        .env("QRCLOCK_SECRET", TEST_SECRET)
        .assert()
        .success()
        .stdout(predicate::str::contains("Payload accepted"));

    // a tampered payload is rejected, but the process still succeeds
    qrc()
        .args(["--db", &db_path, "qr", "--check", "FICHAJE:tampered00000"])
        .env("QRCLOCK_SECRET", TEST_SECRET)
        .assert()
        .success()
        .stdout(predicate::str::contains("Payload rejected"));

    // a different secret yields a different valid set
    qrc()
        .args(["--db", &db_path, "qr", "--check", &payload])
        .env("QRCLOCK_SECRET", "some-other-secret")
        .assert()
        .success()
        .stdout(predicate::str::contains("Payload rejected"));
}

#[test]
fn test_qr_requires_a_secret() {
    let db_path = setup_test_db("qr_no_secret");

    qrc()
        .args(["--db", &db_path, "qr", "--show"])
        .env_remove("QRCLOCK_SECRET")
        .assert()
        .failure()
        .stderr(predicate::str::contains("QR secret is not configured"));
}

#[test]
fn test_clock_in_with_valid_qr_payload() {
    let db_path = setup_test_db("clock_qr");

    qrc()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let output = qrc()
        .args(["--db", &db_path, "qr", "--show"])
        .env("QRCLOCK_SECRET", TEST_SECRET)
        .output()
        .expect("failed to run qr --show");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let payload = stdout
        .lines()
        .find_map(|l| l.trim().strip_prefix("Payload: "))
        .expect("missing payload line")
        .trim()
        .to_string();

    qrc()
        .args([
            "--db",
            &db_path,
            "clock",
            "in",
            "--employee",
            "alice",
            "--qr-payload",
            &payload,
        ])
        .env("QRCLOCK_SECRET", TEST_SECRET)
        .assert()
        .success()
        .stdout(predicate::str::contains("Entrance recorded"));

    qrc()
        .args(["--db", &db_path, "list", "--employee", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("source=qr"));
}

#[test]
fn test_clock_in_with_invalid_qr_payload_is_rejected() {
    let db_path = setup_test_db("clock_qr_bad");

    qrc()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    qrc()
        .args([
            "--db",
            &db_path,
            "clock",
            "in",
            "--employee",
            "alice",
            "--qr-payload",
            "FICHAJE:forged000000",
        ])
        .env("QRCLOCK_SECRET", TEST_SECRET)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Presence token rejected"));

    // nothing was recorded
    qrc()
        .args(["--db", &db_path, "list", "--employee", "alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No events for alice"));
}

#[test]
fn test_log_records_clock_operations() {
    let db_path = setup_test_db("audit_log");
    init_db_with_data(&db_path);

    qrc()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(predicate::str::contains("clock"))
        .stdout(predicate::str::contains("alice"));
}
