//! Runtime configuration: which database file the tool operates on.

use crate::utils::path;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub database: PathBuf,
}

impl Config {
    /// Resolve the database path for this run.
    ///
    /// The default location is the fixed relative layout of the dealer
    /// management checkout: the directory containing the executable, two
    /// levels up, joined with `SalesService/sales.db`. A `--db` override
    /// from the command line wins over the default.
    pub fn resolve(db_override: Option<&str>) -> Self {
        let database = match db_override {
            Some(p) => path::expand_tilde(p),
            None => path::default_database(),
        };

        Self { database }
    }
}
