//! End-to-end CLI tests.
//!
//! These run the actual binary against fixture exports and check the report
//! output, the record export, and the failure modes.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const FIXTURE: &str = "\
1/2/23, 10:00 am - Messages to this group are secured\n\
1/2/23, 10:01 am - Alice: good morning all\n\
1/2/23, 10:02 am - Bob: morning Alice\n\
1/2/23, 10:30 am - Alice: <Media omitted>\n\
4/2/23, 9:00 am - Bob: weekend plans?\n\
4/2/23, 9:05 am - Alice: hiking trip\n";

fn setup() -> TempDir {
    let dir = TempDir::new().expect("failed to create temp dir");
    fs::write(dir.path().join("chat.txt"), FIXTURE).unwrap();
    dir
}

fn chatlens() -> Command {
    Command::cargo_bin("chatlens").expect("binary builds")
}

// ============================================================================
// Report output
// ============================================================================

#[test]
fn test_basic_report() {
    let dir = setup();

    chatlens()
        .arg(dir.path().join("chat.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Top statistics"))
        .stdout(predicate::str::contains("Messages:       6"))
        .stdout(predicate::str::contains("Media shared:   1"))
        .stdout(predicate::str::contains("Busiest participants"))
        .stdout(predicate::str::contains("Monthly timeline"))
        .stdout(predicate::str::contains("February-2023"));
}

#[test]
fn test_user_filter() {
    let dir = setup();

    chatlens()
        .arg(dir.path().join("chat.txt"))
        .args(["--user", "Bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Participant:    Bob"))
        .stdout(predicate::str::contains("Messages:       2"))
        // Per-user reports omit the group-level ranking.
        .stdout(predicate::str::contains("Busiest participants").not());
}

#[test]
fn test_unknown_user_warns_but_succeeds() {
    let dir = setup();

    chatlens()
        .arg(dir.path().join("chat.txt"))
        .args(["--user", "Mallory"])
        .assert()
        .success()
        .stderr(predicate::str::contains("never appears"))
        .stdout(predicate::str::contains("Messages:       0"));
}

#[test]
fn test_heatmap_flag() {
    let dir = setup();

    chatlens()
        .arg(dir.path().join("chat.txt"))
        .arg("--heatmap")
        .assert()
        .success()
        .stdout(predicate::str::contains("heatmap"))
        .stdout(predicate::str::contains("Wednesday"))
        .stdout(predicate::str::contains("Sunday"));
}

#[test]
fn test_stopwords_file() {
    let dir = setup();
    fs::write(dir.path().join("stop.txt"), "morning all the").unwrap();

    chatlens()
        .arg(dir.path().join("chat.txt"))
        .args(["--stopwords"])
        .arg(dir.path().join("stop.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Most common words"));
}

#[test]
fn test_empty_file_reports_no_messages() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("empty.txt"), "").unwrap();

    chatlens()
        .arg(dir.path().join("empty.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No messages found"));
}

// ============================================================================
// Record export
// ============================================================================

#[test]
fn test_export_csv() {
    let dir = setup();
    let out = dir.path().join("records.csv");

    chatlens()
        .arg(dir.path().join("chat.txt"))
        .args(["--export"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 6 records"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("Timestamp;Sender;Body"));
    assert!(content.contains("Alice;good morning all"));
}

#[test]
fn test_export_json() {
    let dir = setup();
    let out = dir.path().join("records.json");

    chatlens()
        .arg(dir.path().join("chat.txt"))
        .args(["--export"])
        .arg(&out)
        .args(["--format", "json"])
        .assert()
        .success();

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.trim_start().starts_with('['));
    assert!(content.contains("\"sender\": \"Alice\""));
    assert!(content.contains("\"period\": \"10-11\""));
}

// ============================================================================
// Failure modes
// ============================================================================

#[test]
fn test_missing_file_fails() {
    chatlens()
        .arg("does-not-exist.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_unknown_grammar_fails() {
    let dir = setup();

    chatlens()
        .arg(dir.path().join("chat.txt"))
        .args(["--grammar", "iso-8601"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown timestamp grammar"));
}

#[test]
fn test_month_first_grammar_flag() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("us.txt"),
        "2/25/23, 4:05 pm - Alice: hi there\n",
    )
    .unwrap();

    chatlens()
        .arg(dir.path().join("us.txt"))
        .args(["--grammar", "month-first-12h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Messages:       1"));
}
