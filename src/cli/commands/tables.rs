use crate::config::Config;
use crate::db::inspect;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};
use unicode_width::UnicodeWidthStr;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = DbPool::open(&cfg.database)?;

    let names = inspect::list_tables(&pool.conn)?;

    if names.is_empty() {
        info("No tables found.");
        return Ok(());
    }

    println!("📋 Tables in {}:\n", cfg.database.display());

    let name_w = names
        .iter()
        .map(|n| n.width())
        .max()
        .unwrap_or(0)
        .max("TABLE".width());

    let mut table = Table::new(vec![
        Column {
            header: "TABLE".to_string(),
            width: name_w,
        },
        Column {
            header: "ROWS".to_string(),
            width: 8,
        },
    ]);

    for name in &names {
        // A count can fail on a corrupted table; show a placeholder
        // instead of aborting the listing.
        let rows = match inspect::table_row_count(&pool.conn, name) {
            Ok(n) => n.to_string(),
            Err(_) => "--".to_string(),
        };
        table.add_row(vec![name.clone(), rows]);
    }

    print!("{}", table.render());
    Ok(())
}
