use serde::Serialize;

/// One column descriptor as reported by `PRAGMA table_info`.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnInfo {
    pub cid: i64,
    pub name: String,
    /// Declared type; empty for untyped columns.
    #[serde(rename = "type")]
    pub decl_type: String,
    pub notnull: bool,
    pub dflt_value: Option<String>,
    /// 0 when the column is not part of the primary key, otherwise its
    /// 1-based position within the key.
    pub pk: i64,
}

/// One row of the EF Core migration bookkeeping table.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationEntry {
    #[serde(rename = "MigrationId")]
    pub migration_id: String,

    #[serde(rename = "ProductVersion")]
    pub product_version: String,
}

/// A sampled row, keyed by column name in declaration order.
pub type SampleRow = serde_json::Map<String, serde_json::Value>;
