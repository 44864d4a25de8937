//! CSV export (flat key/value row per record).

use std::path::Path;

use csv::Writer;

use crate::export::ExportError;
use crate::models::{FieldId, Record};

/// Timestamp format used in exports, e.g. `2026-08-27 14:03:59`.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Writes records to a CSV file.
///
/// The header row is the first record's field set (records within a run are
/// structurally uniform), with `scraped_at` as the final column. Returns the
/// number of rows written; an empty record set writes nothing.
pub fn export_csv(records: &[Record], path: &Path) -> Result<usize, ExportError> {
    let Some(first) = records.first() else {
        log::warn!("No records to save; skipping CSV export");
        return Ok(0);
    };

    let columns: Vec<FieldId> = first.field_ids().collect();
    let mut writer = Writer::from_path(path)?;

    let mut header: Vec<&str> = columns.iter().map(|field| field.key()).collect();
    header.push("scraped_at");
    writer.write_record(&header)?;

    for record in records {
        let mut row: Vec<String> = columns
            .iter()
            .map(|&field| record.get(field).unwrap_or_default().to_string())
            .collect();
        row.push(record.scraped_at.format(TIMESTAMP_FORMAT).to_string());
        writer.write_record(&row)?;
    }
    writer.flush()?;

    Ok(records.len())
}
