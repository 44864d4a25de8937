//! JSON export (array of flat field maps).

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde_json::{Map, Value};

use crate::export::csv::TIMESTAMP_FORMAT;
use crate::export::ExportError;
use crate::models::Record;

fn record_to_value(record: &Record) -> Value {
    let mut map = Map::new();
    for field in record.field_ids() {
        map.insert(
            field.key().to_string(),
            Value::String(record.get(field).unwrap_or_default().to_string()),
        );
    }
    map.insert(
        "scraped_at".to_string(),
        Value::String(record.scraped_at.format(TIMESTAMP_FORMAT).to_string()),
    );
    Value::Object(map)
}

/// Writes records to a pretty-printed JSON array.
///
/// Returns the number of records written. Unlike CSV, an empty record set
/// still produces a valid (empty) array.
pub fn export_json(records: &[Record], path: &Path) -> Result<usize, ExportError> {
    let values: Vec<Value> = records.iter().map(record_to_value).collect();
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), &values)?;
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FieldId;
    use chrono::Utc;
    use std::collections::BTreeMap;

    #[test]
    fn records_serialize_as_flat_maps() {
        let mut values = BTreeMap::new();
        values.insert(FieldId::Title, "Laptop".to_string());
        values.insert(FieldId::SoldCount, "12".to_string());
        let record = Record {
            values,
            scraped_at: Utc::now(),
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        assert_eq!(export_json(&[record], &path).unwrap(), 1);

        let parsed: Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let entry = &parsed.as_array().unwrap()[0];
        assert_eq!(entry["title"], "Laptop");
        assert_eq!(entry["sold_count"], "12");
        assert!(entry["scraped_at"].is_string());
    }

    #[test]
    fn empty_record_set_is_an_empty_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        assert_eq!(export_json(&[], &path).unwrap(), 0);
        let parsed: Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, Value::Array(vec![]));
    }
}
