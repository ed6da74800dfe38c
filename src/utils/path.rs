//! Path utilities: resolve the default database location, expand ~.

use std::env;
use std::path::PathBuf;

/// Default database location.
///
/// The fixed relative layout of the dealer management checkout: the
/// directory containing the executable, two levels up, joined with
/// `SalesService/sales.db`.
pub fn default_database() -> PathBuf {
    let exe = env::current_exe().unwrap_or_else(|_| PathBuf::from("."));

    let base = exe
        .parent()
        .and_then(|dir| dir.parent())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    base.join("SalesService").join("sales.db")
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}
