use crate::db::models::{ColumnInfo, MigrationEntry, SampleRow};
use serde::Serialize;

/// Snapshot of one inspected table.
#[derive(Debug, Serialize)]
pub struct TableReport {
    pub table: String,
    pub columns: Vec<ColumnInfo>,
    pub rows: Vec<SampleRow>,
}

/// The full inspection report written by `export`.
#[derive(Debug, Serialize)]
pub struct InspectionReport {
    pub database: String,
    pub generated_at: String,
    pub tables: Vec<TableReport>,
    pub migrations: Vec<MigrationEntry>,
}
