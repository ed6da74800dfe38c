use predicates::str::{contains, is_match};

mod common;
use common::{create_sales_db, sc, setup_test_db};

#[test]
fn test_tables_lists_every_table() {
    let db_path = setup_test_db("tables_list");
    create_sales_db(&db_path);

    sc().args(["--db", &db_path, "tables"])
        .assert()
        .success()
        .stdout(contains("TABLE"))
        .stdout(contains("ROWS"))
        .stdout(contains("Orders"))
        .stdout(contains("OrderItems"))
        .stdout(contains("__EFMigrationsHistory"));
}

#[test]
fn test_tables_shows_row_counts() {
    let db_path = setup_test_db("tables_counts");
    create_sales_db(&db_path);

    sc().args(["--db", &db_path, "tables"])
        .assert()
        .success()
        .stdout(is_match(r"(?m)^Orders\s+2\b").expect("Invalid regex"))
        .stdout(is_match(r"(?m)^OrderItems\s+2\b").expect("Invalid regex"))
        .stdout(is_match(r"(?m)^__EFMigrationsHistory\s+3\b").expect("Invalid regex"));
}

#[test]
fn test_tables_missing_db_fails() {
    let db_path = setup_test_db("tables_missing");

    sc().args(["--db", &db_path, "tables"])
        .assert()
        .failure()
        .stderr(contains("Database not found"));
}
