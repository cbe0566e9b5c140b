use assert_cmd::Command;
use predicates::prelude::*;

fn tally(data_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("tally").unwrap();
    cmd.env("TALLY_DATA_DIR", data_dir);
    cmd.env_remove("GEMINI_API_KEY");
    cmd
}

fn write_data(dir: &std::path::Path, json: &str) {
    std::fs::write(dir.join("transactions.json"), json).unwrap();
}

fn read_data(dir: &std::path::Path) -> serde_json::Value {
    let content = std::fs::read_to_string(dir.join("transactions.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

#[test]
fn list_shows_seed_fixtures_when_no_data_file() {
    let dir = tempfile::tempdir().unwrap();
    tally(dir.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Electric Bill"))
        .stdout(predicate::str::contains("Rent"));
    // Reading alone must not create the file
    assert!(!dir.path().join("transactions.json").exists());
}

#[test]
fn add_prepends_and_persists() {
    let dir = tempfile::tempdir().unwrap();
    tally(dir.path())
        .args([
            "add",
            "--description",
            "Coffee",
            "--amount",
            "3.5",
            "--date",
            "2024-05-01",
            "--category",
            "Other",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added Coffee"));

    let data = read_data(dir.path());
    let records = data.as_array().unwrap();
    // Seeds plus the new record, newest first
    assert_eq!(records.len(), 5);
    assert_eq!(records[0]["description"], "Coffee");
    assert_eq!(records[0]["type"], "expense");
    assert_eq!(records[1]["description"], "Salary");
}

#[test]
fn add_rejects_bad_date() {
    let dir = tempfile::tempdir().unwrap();
    tally(dir.path())
        .args([
            "add",
            "--description",
            "Coffee",
            "--amount",
            "3.5",
            "--date",
            "05/01/2024",
            "--category",
            "Other",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn edit_replaces_record_in_place() {
    let dir = tempfile::tempdir().unwrap();
    write_data(
        dir.path(),
        r#"[
            {"id":"a1","date":"2024-01-02","description":"Lunch","amount":12.0,"type":"expense","category":"Other"},
            {"id":"b2","date":"2024-01-01","description":"Pay","amount":900.0,"type":"income","category":"Salary"}
        ]"#,
    );
    tally(dir.path())
        .args([
            "edit",
            "a1",
            "--description",
            "Team lunch",
            "--amount",
            "18",
            "--date",
            "2024-01-02",
            "--type",
            "expense",
            "--category",
            "Entertainment",
        ])
        .assert()
        .success();

    let data = read_data(dir.path());
    let records = data.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["id"], "a1");
    assert_eq!(records[0]["description"], "Team lunch");
    assert_eq!(records[0]["amount"], 18.0);
    assert_eq!(records[1]["description"], "Pay");
}

#[test]
fn edit_unknown_id_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    tally(dir.path())
        .args([
            "edit",
            "no-such-id",
            "--description",
            "x",
            "--amount",
            "1",
            "--date",
            "2024-01-01",
            "--type",
            "expense",
            "--category",
            "Other",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No transaction with id"));
}

#[test]
fn delete_removes_only_the_matching_record() {
    let dir = tempfile::tempdir().unwrap();
    write_data(
        dir.path(),
        r#"[
            {"id":"a1","date":"2024-01-02","description":"Lunch","amount":12.0,"type":"expense","category":"Other"},
            {"id":"b2","date":"2024-01-01","description":"Pay","amount":900.0,"type":"income","category":"Salary"}
        ]"#,
    );
    tally(dir.path()).args(["delete", "a1"]).assert().success();

    let data = read_data(dir.path());
    let records = data.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["id"], "b2");

    tally(dir.path())
        .args(["delete", "a1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No transaction with id"));
}

#[test]
fn summary_reports_monthly_net() {
    let dir = tempfile::tempdir().unwrap();
    let month = chrono::Local::now().format("%Y-%m").to_string();
    write_data(
        dir.path(),
        &format!(
            r#"[
                {{"id":"1","date":"{month}-03","description":"Salary","amount":5000.0,"type":"income","category":"Salary"}},
                {{"id":"2","date":"{month}-05","description":"Groceries","amount":150.0,"type":"expense","category":"Groceries"}},
                {{"id":"3","date":"{month}-06","description":"Electric","amount":75.0,"type":"expense","category":"Utilities"}}
            ]"#
        ),
    );
    tally(dir.path())
        .args(["summary", "--period", "monthly"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$5,000.00"))
        .stdout(predicate::str::contains("$225.00"))
        .stdout(predicate::str::contains("$4,775.00"));
}

#[test]
fn breakdown_groups_expense_categories() {
    let dir = tempfile::tempdir().unwrap();
    write_data(
        dir.path(),
        r#"[
            {"id":"1","date":"2024-01-03","description":"Salary","amount":5000.0,"type":"income","category":"Salary"},
            {"id":"2","date":"2024-01-05","description":"Groceries","amount":150.0,"type":"expense","category":"Groceries"},
            {"id":"3","date":"2024-01-06","description":"Electric","amount":75.0,"type":"expense","category":"Utilities"}
        ]"#,
    );
    let assert = tally(dir.path()).arg("breakdown").assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(output.contains("Groceries"));
    assert!(output.contains("Utilities"));
    assert!(output.contains("$225.00"));
    // Income categories never show up in the breakdown rows
    assert!(!output.contains("$5,000.00"));
}

#[test]
fn advice_without_key_prints_localized_fallback() {
    let dir = tempfile::tempdir().unwrap();
    tally(dir.path())
        .arg("advice")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "API key is not configured. Please check the setup.",
        ));

    tally(dir.path())
        .args(["advice", "--lang", "ar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("مفتاح API غير مهيأ"));
}

#[test]
fn list_localizes_headers_in_arabic() {
    let dir = tempfile::tempdir().unwrap();
    tally(dir.path())
        .args(["list", "--lang", "ar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("الوصف"))
        .stdout(predicate::str::contains("الفئة"));
}

#[test]
fn malformed_data_file_is_a_startup_failure() {
    let dir = tempfile::tempdir().unwrap();
    write_data(dir.path(), "{ not json");
    tally(dir.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed"));
}

#[test]
fn status_reports_record_count_and_range() {
    let dir = tempfile::tempdir().unwrap();
    write_data(
        dir.path(),
        r#"[
            {"id":"1","date":"2024-01-03","description":"Salary","amount":5000.0,"type":"income","category":"Salary"},
            {"id":"2","date":"2024-02-05","description":"Groceries","amount":150.0,"type":"expense","category":"Groceries"}
        ]"#,
    );
    tally(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Transactions:  2"))
        .stdout(predicate::str::contains("2024-01-03 to 2024-02-05"));
}

#[test]
fn unsupported_language_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    tally(dir.path())
        .args(["list", "--lang", "fr"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported language"));
}
