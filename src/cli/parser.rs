use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for salescheck
/// Diagnostic CLI for the SalesService SQLite database
#[derive(Parser)]
#[command(
    name = "salescheck",
    version = env!("CARGO_PKG_VERSION"),
    about = "Inspect the SalesService SQLite database: schema, sample rows, and migration history",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Inspect the Orders and OrderItems tables plus the migration history (default)
    Inspect,

    /// List every table in the database with its row count
    Tables,

    /// Check the database (integrity, basic information)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Export the inspection report to a file
    Export {
        /// Export format: csv, json
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup into a .zip archive
        #[arg(long)]
        compress: bool,
    },
}
