//! Configuration types and CLI options.
//!
//! This module defines the command-line surface of the scraper. All knobs the
//! original interactive flow prompted for (query, fields, price bounds, sort,
//! page count, condition filter, export format) are plain flags here, so the
//! configuration source can be swapped without touching the pipeline.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{DEFAULT_MAX_PAGES, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
use crate::export::ExportFormat;
use crate::models::{FieldId, RequestError, SearchRequest, SortOrder};

/// Logging level for the application.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line configuration for a scrape run.
#[derive(Debug, Clone, Parser)]
#[command(name = "listing_harvest", about = "Scrape eBay search results into CSV/JSON")]
pub struct Config {
    /// Search term, e.g. "laptop" or "iphone 15"
    pub query: String,

    /// Result ordering
    #[arg(long, value_enum, default_value_t = SortOrder::BestMatch)]
    pub sort: SortOrder,

    /// Minimum price filter
    #[arg(long)]
    pub min_price: Option<f64>,

    /// Maximum price filter
    #[arg(long)]
    pub max_price: Option<f64>,

    /// Number of result pages to scrape (1-5)
    #[arg(long, default_value_t = DEFAULT_MAX_PAGES)]
    pub max_pages: u32,

    /// Fields to extract (comma-separated); all fields when omitted
    #[arg(long, value_enum, value_delimiter = ',')]
    pub fields: Vec<FieldId>,

    /// Keep only records whose condition contains this text (e.g. "new", "used")
    #[arg(long)]
    pub condition: Option<String>,

    /// Export format
    #[arg(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Output path stem; extension is added per format (defaults to ebay_products.*)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Enable diagnostic mode (dump blocked/empty response bodies, verbose page logs)
    #[arg(long)]
    pub debug: bool,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Config {
    /// Builds the validated, immutable [`SearchRequest`] for this run.
    ///
    /// An omitted `--fields` flag selects every field, matching the
    /// original's "0 = select all" behavior.
    pub fn search_request(&self) -> Result<SearchRequest, RequestError> {
        let fields = if self.fields.is_empty() {
            FieldId::all()
        } else {
            self.fields.iter().copied().collect()
        };
        SearchRequest::new(
            self.query.clone(),
            self.sort,
            self.min_price,
            self.max_price,
            self.max_pages,
            fields,
        )
    }
}
