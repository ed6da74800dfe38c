use crate::errors::AppResult;
use crate::export::model::InspectionReport;
use csv::Writer;
use std::path::Path;

/// Write the column inventory as CSV, one record per column.
pub fn write_csv(path: &Path, report: &InspectionReport) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["table", "cid", "name", "type", "notnull", "pk"])?;

    for table in &report.tables {
        for col in &table.columns {
            wtr.write_record(&[
                table.table.clone(),
                col.cid.to_string(),
                col.name.clone(),
                col.decl_type.clone(),
                (col.notnull as i64).to_string(),
                col.pk.to_string(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
