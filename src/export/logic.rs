// src/export/logic.rs

use crate::config::Config;
use crate::db::inspect::{self, INSPECTED_TABLES, SAMPLE_LIMIT};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::model::{InspectionReport, TableReport};
use crate::export::{ExportFormat, notify_export_success};
use crate::ui::messages::warning;

use chrono::Local;
use std::io;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Write the inspection report to `file`.
    ///
    /// - `format`: "csv" | "json"
    /// - `file`: absolute output path
    /// - `force`: overwrite without confirmation
    pub fn export(
        pool: &DbPool,
        cfg: &Config,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let report = build_report(pool, cfg)?;

        match format {
            ExportFormat::Csv => super::csv::write_csv(path, &report)?,
            ExportFormat::Json => super::json::write_json(path, &report)?,
        }

        notify_export_success(format.as_str(), path);
        Ok(())
    }
}

/// Collect columns and sample rows for the fixed tables plus the ordered
/// migration history. Unreadable sections are skipped with a warning, the
/// same isolation the inspection run applies.
fn build_report(pool: &DbPool, cfg: &Config) -> AppResult<InspectionReport> {
    let mut tables = Vec::new();

    for table in INSPECTED_TABLES {
        match read_table(pool, table) {
            Ok(report) => tables.push(report),
            Err(e) => warning(format!("Skipping table {table}: {e}")),
        }
    }

    let migrations = match inspect::migration_history(&pool.conn) {
        Ok(entries) => entries,
        Err(e) => {
            warning(format!("Skipping migration history: {e}"));
            Vec::new()
        }
    };

    Ok(InspectionReport {
        database: cfg.database.display().to_string(),
        generated_at: Local::now().to_rfc3339(),
        tables,
        migrations,
    })
}

fn read_table(pool: &DbPool, table: &str) -> AppResult<TableReport> {
    let columns = inspect::table_columns(&pool.conn, table)?;
    let rows = inspect::sample_rows(&pool.conn, table, SAMPLE_LIMIT)?;

    Ok(TableReport {
        table: table.to_string(),
        columns,
        rows,
    })
}
