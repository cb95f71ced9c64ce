use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{init_db_with_data, rbl, setup_test_db, temp_out};

#[test]
fn test_init_is_idempotent() {
    let db_path = setup_test_db("init_idempotent");

    rbl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    // A second init must not fail or wipe the schema
    rbl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));
}

#[test]
fn test_add_reports_bmi_and_category() {
    let db_path = setup_test_db("add_reports");

    rbl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rbl()
        .args(["--db", &db_path, "add", "Ann", "70", "1.75"])
        .assert()
        .success()
        .stdout(contains("Ann: BMI 22.86 (Normal weight)"));
}

#[test]
fn test_add_and_list_round_trip() {
    let db_path = setup_test_db("add_list_round_trip");

    rbl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rbl()
        .args(["--db", &db_path, "add", "Ann", "70", "1.75"])
        .assert()
        .success();

    rbl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Ann"))
        .stdout(contains("22.86"))
        .stdout(contains("Normal weight"))
        .stdout(contains("1 record(s)."));
}

#[test]
fn test_add_rejects_non_numeric_weight() {
    let db_path = setup_test_db("reject_non_numeric");

    rbl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rbl()
        .args(["--db", &db_path, "add", "Bob", "abc", "1.75"])
        .assert()
        .failure()
        .stderr(contains("Invalid numeric value: abc"));

    // Nothing was stored
    rbl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No records found."));
}

#[test]
fn test_add_rejects_zero_weight() {
    let db_path = setup_test_db("reject_zero_weight");

    rbl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rbl()
        .args(["--db", &db_path, "add", "Bob", "0", "1.75"])
        .assert()
        .failure()
        .stderr(contains("Value must be a positive number: 0"));

    rbl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No records found."));
}

#[test]
fn test_add_rejects_zero_height() {
    let db_path = setup_test_db("reject_zero_height");

    rbl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rbl()
        .args(["--db", &db_path, "add", "Bob", "70", "0"])
        .assert()
        .failure()
        .stderr(contains("Value must be a positive number: 0"));

    rbl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No records found."));
}

#[test]
fn test_ids_are_unique_and_sequential() {
    let db_path = setup_test_db("ids_sequential");
    init_db_with_data(&db_path);

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let records = rbmilogger::db::queries::load_all_measurements(&conn).expect("load");

    let ids: Vec<i64> = records.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_append_then_load_preserves_fields() {
    let db_path = setup_test_db("append_load_fields");

    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    rbmilogger::db::initialize::init_db(&conn).expect("init db");

    let m = rbmilogger::models::measurement::Measurement::new("Ann", 70.0, 1.75);
    let id = rbmilogger::db::queries::insert_measurement(&conn, &m).expect("insert");

    let records = rbmilogger::db::queries::load_all_measurements(&conn).expect("load");
    assert_eq!(records.len(), 1);

    let stored = &records[0];
    assert_eq!(stored.id, id);
    assert_eq!(stored.subject_name, m.subject_name);
    assert_eq!(stored.weight_kg, m.weight_kg);
    assert_eq!(stored.height_m, m.height_m);
    assert_eq!(stored.bmi, m.bmi);
    assert_eq!(stored.category, m.category);
}

#[test]
fn test_log_print_records_operations() {
    let db_path = setup_test_db("log_print");
    init_db_with_data(&db_path);

    rbl()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("Recorded BMI"));
}

#[test]
fn test_config_print_shows_database() {
    let db_path = setup_test_db("config_print");

    rbl()
        .args(["--db", &db_path, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("database:"))
        .stdout(contains("export_file:"));
}

#[test]
fn test_config_check_reports_missing_db() {
    let db_path = setup_test_db("config_check_missing");

    rbl()
        .args(["--db", &db_path, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Database not found"));
}

#[test]
fn test_config_check_counts_measurements() {
    let db_path = setup_test_db("config_check_counts");
    init_db_with_data(&db_path);

    rbl()
        .args(["--db", &db_path, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Stored measurements: 3"));
}

#[test]
fn test_backup_creates_copy() {
    let db_path = setup_test_db("backup_copy");
    init_db_with_data(&db_path);

    let out = temp_out("backup_copy", "bak");

    rbl()
        .args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(Path::new(&out).exists());
}

#[test]
fn test_backup_compress_produces_zip() {
    let db_path = setup_test_db("backup_zip");
    init_db_with_data(&db_path);

    let out = temp_out("backup_zip", "bak");
    let zip = temp_out("backup_zip", "zip");

    rbl()
        .args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed"));

    assert!(Path::new(&zip).exists());
    // The uncompressed copy is removed after zipping
    assert!(!Path::new(&out).exists());
}

#[test]
fn test_ann_end_to_end() {
    let db_path = setup_test_db("ann_end_to_end");

    rbl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rbl()
        .args(["--db", &db_path, "add", "Ann", "70", "1.75"])
        .assert()
        .success()
        .stdout(contains("22.86"))
        .stdout(contains("Normal weight"));

    rbl()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Ann"))
        .stdout(contains("Obesity").not());

    let out = temp_out("ann_end_to_end", "csv");

    rbl()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("ID,User Name,Weight (kg),Height (m),BMI,Category"));
    assert!(content.contains("Ann,70,1.75,22.857142857142"));
    assert!(content.contains("Normal weight"));
}
