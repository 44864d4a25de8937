//! Export of scraped records to row-oriented (CSV) and tree-structured
//! (JSON) artifacts.
//!
//! The pipeline itself performs no file I/O; these writers consume the final
//! record sequence after post-processing.

pub(crate) mod csv;
mod json;

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use thiserror::Error;

pub use self::csv::export_csv;
pub use self::json::export_json;

use crate::config::{DEFAULT_CSV_PATH, DEFAULT_JSON_PATH};
use crate::models::Record;

/// Which artifact(s) to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Row-oriented CSV only
    Csv,
    /// JSON array only
    Json,
    /// Both CSV and JSON
    Both,
}

/// Errors produced while writing export artifacts.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Filesystem failure creating or writing an output file.
    #[error("export I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failure.
    #[error("CSV write error: {0}")]
    Csv(#[from] ::csv::Error),

    /// JSON serialization failure.
    #[error("JSON write error: {0}")]
    Json(#[from] serde_json::Error),
}

fn path_for(stem: Option<&Path>, default: &str, extension: &str) -> PathBuf {
    match stem {
        Some(stem) => stem.with_extension(extension),
        None => PathBuf::from(default),
    }
}

/// Writes the selected export artifact(s) and returns the paths written.
///
/// `stem` overrides the default output location; the per-format extension is
/// always applied, so `--output results` yields `results.csv` / `results.json`.
pub fn write_exports(
    records: &[Record],
    format: ExportFormat,
    stem: Option<&Path>,
) -> Result<Vec<PathBuf>, ExportError> {
    let mut written = Vec::new();

    if matches!(format, ExportFormat::Csv | ExportFormat::Both) {
        let path = path_for(stem, DEFAULT_CSV_PATH, "csv");
        let count = export_csv(records, &path)?;
        if count > 0 {
            log::info!("Saved {} record(s) to {}", count, path.display());
            written.push(path);
        }
    }

    if matches!(format, ExportFormat::Json | ExportFormat::Both) {
        let path = path_for(stem, DEFAULT_JSON_PATH, "json");
        let count = export_json(records, &path)?;
        log::info!("Saved {} record(s) to {}", count, path.display());
        written.push(path);
    }

    Ok(written)
}
