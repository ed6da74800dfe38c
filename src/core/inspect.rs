//! The default inspection run: dump schema and sample rows for the fixed
//! tables, then the migration history.
//!
//! Output format is a compatibility contract with the original diagnostic
//! script; everything here prints plain uncolored text.

use crate::config::Config;
use crate::db::inspect::{self, INSPECTED_TABLES, MIGRATIONS_TABLE, SAMPLE_LIMIT};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use rusqlite::Connection;

pub struct InspectLogic;

impl InspectLogic {
    pub fn run(cfg: &Config) -> AppResult<()> {
        println!("DB path: {}", cfg.database.display());

        // Fatal: without the file there is nothing to inspect.
        if !cfg.database.exists() {
            println!("ERROR: DB not found");
            std::process::exit(1);
        }

        let pool = DbPool::open(&cfg.database)?;

        // A failure in one table must not prevent inspection of the
        // others or of the migration history.
        for table in INSPECTED_TABLES {
            println!("\n--- TABLE: {} ---", table);
            if let Err(e) = print_table(&pool.conn, table) {
                println!("  ERROR reading table {} {}", table, e);
            }
        }

        println!("\n--- {} ---", MIGRATIONS_TABLE);
        if let Err(e) = print_migrations(&pool.conn) {
            println!("  ERROR reading {} {}", MIGRATIONS_TABLE, e);
        }

        Ok(())
    }
}

fn print_table(conn: &Connection, table: &str) -> AppResult<()> {
    let columns = inspect::table_columns(conn, table)?;

    println!("Columns:");
    for c in &columns {
        println!("  {} {} {} pk={}", c.cid, c.name, c.decl_type, c.pk);
    }

    let rows = inspect::sample_rows(conn, table, SAMPLE_LIMIT)?;

    println!("Sample rows (up to {}):", SAMPLE_LIMIT);
    println!("{}", serde_json::to_string_pretty(&rows)?);

    Ok(())
}

fn print_migrations(conn: &Connection) -> AppResult<()> {
    let entries = inspect::migration_history(conn)?;
    println!("{}", serde_json::to_string_pretty(&entries)?);
    Ok(())
}
