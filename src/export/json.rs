use crate::errors::AppResult;
use crate::export::model::InspectionReport;
use std::fs;
use std::path::Path;

/// Write the full report as pretty-printed JSON.
pub fn write_json(path: &Path, report: &InspectionReport) -> AppResult<()> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}
