use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{create_sales_db, sc, setup_test_db, temp_out};

#[test]
fn test_backup_copies_database_file() {
    let db_path = setup_test_db("backup_copy");
    create_sales_db(&db_path);
    let dest = temp_out("backup_copy", "db");

    sc().args(["--db", &db_path, "backup", "--file", &dest])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let src_bytes = fs::read(&db_path).expect("read source");
    let dest_bytes = fs::read(&dest).expect("read backup");
    assert_eq!(src_bytes, dest_bytes);
}

#[test]
fn test_backup_compress_leaves_only_zip() {
    let db_path = setup_test_db("backup_zip");
    create_sales_db(&db_path);
    let dest = temp_out("backup_zip", "db");

    let zip_path = Path::new(&dest).with_extension("zip");
    fs::remove_file(&zip_path).ok();

    sc().args(["--db", &db_path, "backup", "--file", &dest, "--compress"])
        .assert()
        .success()
        .stdout(contains("Compressed:"));

    assert!(zip_path.exists());
    assert!(!Path::new(&dest).exists());
}

#[test]
fn test_backup_missing_db_fails() {
    let db_path = setup_test_db("backup_missing");
    let dest = temp_out("backup_missing", "db");

    sc().args(["--db", &db_path, "backup", "--file", &dest])
        .assert()
        .failure()
        .stderr(contains("Database not found"));
}
