//! Read-only introspection queries against the sales database.

use crate::db::models::{ColumnInfo, MigrationEntry, SampleRow};
use crate::errors::AppResult;
use rusqlite::Connection;
use rusqlite::types::ValueRef;
use serde_json::Value;

/// The tables the default inspection run dumps, in order.
pub const INSPECTED_TABLES: [&str; 2] = ["Orders", "OrderItems"];

/// EF Core's schema bookkeeping table.
pub const MIGRATIONS_TABLE: &str = "__EFMigrationsHistory";

/// How many rows a table dump samples.
pub const SAMPLE_LIMIT: usize = 5;

/// Column metadata for a table, in ordinal order.
///
/// `PRAGMA table_info` on a missing table yields zero rows rather than an
/// error; absence is detected by the subsequent row query.
pub fn table_columns(conn: &Connection, table: &str) -> AppResult<Vec<ColumnInfo>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;

    let rows = stmt.query_map([], |row| {
        Ok(ColumnInfo {
            cid: row.get(0)?,
            name: row.get(1)?,
            decl_type: row.get(2)?,
            notnull: row.get::<_, i64>(3)? != 0,
            dflt_value: row.get(4)?,
            pk: row.get(5)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Up to `limit` rows from a table, keyed by column name.
///
/// No ORDER BY: row order is whatever the engine returns.
pub fn sample_rows(conn: &Connection, table: &str, limit: usize) -> AppResult<Vec<SampleRow>> {
    let mut stmt = conn.prepare(&format!("SELECT * FROM '{table}' LIMIT {limit}"))?;

    let names: Vec<String> = stmt.column_names().iter().map(|n| n.to_string()).collect();

    let mut rows = stmt.query([])?;
    let mut out = Vec::new();

    while let Some(row) = rows.next()? {
        let mut obj = SampleRow::new();
        for (i, name) in names.iter().enumerate() {
            obj.insert(name.clone(), value_to_json(row.get_ref(i)?));
        }
        out.push(obj);
    }

    Ok(out)
}

/// The full migration history, ordered by migration id ascending.
pub fn migration_history(conn: &Connection) -> AppResult<Vec<MigrationEntry>> {
    let mut stmt = conn.prepare(
        "SELECT MigrationId, ProductVersion FROM __EFMigrationsHistory ORDER BY MigrationId",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(MigrationEntry {
            migration_id: row.get(0)?,
            product_version: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Every table in the database, internal bookkeeping tables included.
pub fn list_tables(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")?;

    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn table_row_count(conn: &Connection, table: &str) -> AppResult<i64> {
    let count = conn.query_row(&format!("SELECT COUNT(*) FROM '{table}'"), [], |row| {
        row.get(0)
    })?;
    Ok(count)
}

/// Map a SQLite value to its JSON representation.
///
/// BLOBs become arrays of byte values; non-finite REALs become null
/// (JSON has no NaN/Infinity).
fn value_to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => serde_json::Number::from_f64(f)
            .map(Value::Number)
            .unwrap_or(Value::Null),
        ValueRef::Text(t) => Value::String(String::from_utf8_lossy(t).into_owned()),
        ValueRef::Blob(b) => Value::Array(b.iter().map(|&byte| Value::from(byte)).collect()),
    }
}
