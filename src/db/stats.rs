use crate::db::inspect;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;
use std::path::Path;

pub fn print_db_info(pool: &DbPool, db_path: &Path) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!(
        "{}• File:{} {}{}{}",
        CYAN,
        RESET,
        YELLOW,
        db_path.display(),
        RESET
    );
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) TABLES
    //
    let tables = inspect::list_tables(&pool.conn)?;
    println!(
        "{}• Tables:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        tables.len(),
        RESET
    );

    //
    // 3) MIGRATIONS
    //
    // The history table may be absent on a database that was never
    // migrated; that is not an error for an info dump.
    match inspect::migration_history(&pool.conn) {
        Ok(migrations) => {
            println!(
                "{}• Applied migrations:{} {}{}{}",
                CYAN,
                RESET,
                GREEN,
                migrations.len(),
                RESET
            );

            let latest = migrations
                .last()
                .map(|m| m.migration_id.clone())
                .unwrap_or_else(|| format!("{GREY}--{RESET}"));
            println!("    latest: {}", latest);
        }
        Err(_) => {
            println!("{}• Applied migrations:{} {GREY}--{RESET}", CYAN, RESET);
        }
    }

    println!();
    Ok(())
}
