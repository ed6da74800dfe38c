#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rusqlite::Connection;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn sc() -> Command {
    cargo_bin_cmd!("salescheck")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_salescheck.sqlite", name));
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

/// Build a small sales database with the EF-style schema and a few rows.
pub fn create_sales_db(db_path: &str) {
    let conn = Connection::open(db_path).expect("open db");
    conn.execute_batch(
        r#"
        CREATE TABLE "Orders" (
            "Id" INTEGER NOT NULL CONSTRAINT "PK_Orders" PRIMARY KEY AUTOINCREMENT,
            "CustomerName" TEXT NOT NULL,
            "Status" TEXT NOT NULL DEFAULT 'Pending',
            "TotalPrice" REAL NOT NULL,
            "CreatedAt" TEXT NOT NULL
        );

        CREATE TABLE "OrderItems" (
            "OrderItemID" INTEGER NOT NULL CONSTRAINT "PK_OrderItems" PRIMARY KEY AUTOINCREMENT,
            "OrderId" INTEGER NOT NULL,
            "VehicleId" INTEGER NOT NULL,
            "Quantity" INTEGER NOT NULL,
            "UnitPrice" REAL NOT NULL,
            CONSTRAINT "FK_OrderItems_Orders_OrderId" FOREIGN KEY ("OrderId")
                REFERENCES "Orders" ("Id") ON DELETE CASCADE
        );

        CREATE TABLE "__EFMigrationsHistory" (
            "MigrationId" TEXT NOT NULL CONSTRAINT "PK___EFMigrationsHistory" PRIMARY KEY,
            "ProductVersion" TEXT NOT NULL
        );

        INSERT INTO "Orders" ("CustomerName", "Status", "TotalPrice", "CreatedAt")
        VALUES ('Alice Martin', 'Confirmed', 42999.5, '2026-08-01T10:00:00'),
               ('Bob Chen', 'Pending', 38500.0, '2026-08-02T11:30:00');

        INSERT INTO "OrderItems" ("OrderId", "VehicleId", "Quantity", "UnitPrice")
        VALUES (1, 7, 1, 42999.5),
               (2, 3, 2, 19250.0);

        -- inserted out of order on purpose: reads must sort by MigrationId
        INSERT INTO "__EFMigrationsHistory" ("MigrationId", "ProductVersion")
        VALUES ('20251124161203_AddOrderItemsAndNewOrderFields', '8.0.11'),
               ('20220101093000_InitialCreate', '6.0.1'),
               ('20230101120000_AddOrderStatus', '7.0.5');
        "#,
    )
    .expect("create schema");
}

/// Drop a table from an existing fixture database.
pub fn drop_table(db_path: &str, table: &str) {
    let conn = Connection::open(db_path).expect("open db");
    conn.execute_batch(&format!(r#"DROP TABLE "{table}";"#))
        .expect("drop table");
}

/// Remove every row from a table in an existing fixture database.
pub fn clear_table(db_path: &str, table: &str) {
    let conn = Connection::open(db_path).expect("open db");
    conn.execute_batch(&format!(r#"DELETE FROM "{table}";"#))
        .expect("clear table");
}
