use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{init_db_with_data, rbl, setup_test_db, temp_out};

#[test]
fn test_export_csv_header_and_rows() {
    let db_path = setup_test_db("export_csv_header");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv_header", "csv");

    rbl()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();

    assert_eq!(
        lines.next(),
        Some("ID,User Name,Weight (kg),Height (m),BMI,Category")
    );
    assert!(content.contains("Ann"));
    assert!(content.contains("Bob"));
    // One data row per stored measurement
    assert_eq!(content.lines().count(), 4);
}

#[test]
fn test_export_json_contains_fields() {
    let db_path = setup_test_db("export_json_fields");
    init_db_with_data(&db_path);

    let out = temp_out("export_json_fields", "json");

    rbl()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    assert!(content.contains("\"subject_name\": \"Ann\""));
    assert!(content.contains("\"subject_name\": \"Bob\""));
    assert!(content.contains("\"category\": \"Normal weight\""));

    // Must be valid JSON with one element per record
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(parsed.as_array().map(|a| a.len()), Some(3));
}

#[test]
fn test_export_empty_db_writes_nothing() {
    let db_path = setup_test_db("export_empty");

    rbl()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let out = temp_out("export_empty", "csv");

    rbl()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("No records to export."));

    assert!(!Path::new(&out).exists());
}

#[test]
fn test_export_existing_file_requires_force() {
    let db_path = setup_test_db("export_force");
    init_db_with_data(&db_path);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "old content").expect("seed existing file");

    // No --force and no interactive confirmation: the export is cancelled
    rbl()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out,
        ])
        .assert()
        .failure()
        .stderr(contains("cancelled"));

    assert_eq!(fs::read_to_string(&out).unwrap(), "old content");

    // --force overwrites without asking
    rbl()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("ID,User Name"));
}

#[test]
fn test_export_xlsx_smoke() {
    let db_path = setup_test_db("export_xlsx_smoke");
    init_db_with_data(&db_path);

    let out = temp_out("export_xlsx_smoke", "xlsx");

    rbl()
        .args([
            "--db", &db_path, "export", "--format", "xlsx", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("XLSX export completed"));

    let meta = fs::metadata(&out).expect("exported xlsx exists");
    assert!(meta.len() > 0);
}

#[test]
fn test_export_pdf_smoke() {
    let db_path = setup_test_db("export_pdf_smoke");
    init_db_with_data(&db_path);

    let out = temp_out("export_pdf_smoke", "pdf");

    rbl()
        .args([
            "--db", &db_path, "export", "--format", "pdf", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("PDF export completed"));

    let bytes = fs::read(&out).expect("exported pdf exists");
    assert!(bytes.starts_with(b"%PDF"));
}
