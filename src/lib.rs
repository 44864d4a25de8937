//! listing_harvest library: listing acquisition pipeline
//!
//! Retrieves product listings from eBay search-results pages, extracts
//! structured records from unstable markup via per-field fallback selector
//! chains, and post-processes them (condition filtering, price statistics).
//!
//! # Example
//!
//! ```no_run
//! use clap::Parser;
//! use listing_harvest::{run_scrape, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::parse_from(["listing_harvest", "laptop", "--max-pages", "2"]);
//! let report = run_scrape(config).await?;
//! println!("Scraped {} records from {} page(s)",
//!          report.records.len(), report.pages_fetched);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. The pipeline is strictly
//! sequential by design: no two page fetches are ever in flight at once, and
//! a mandatory randomized delay separates them. Concurrent fetching would
//! defeat the politeness contract with the target site.

#![warn(missing_docs)]

pub mod config;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod initialization;
pub mod models;
pub mod pagination;
pub mod postprocess;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use export::ExportFormat;
pub use fetch::{BlockReason, FetchOutcome};
pub use models::{FieldId, Record, SearchRequest, SortOrder};
pub use pagination::{ScrapeResult, StopReason};
pub use postprocess::PriceStats;
pub use run::{run_scrape, ScrapeReport};

// Internal run module (ties the pipeline stages together)
mod run {
    use std::path::PathBuf;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::info;

    use crate::config::Config;
    use crate::export::write_exports;
    use crate::fetch::PageFetcher;
    use crate::initialization::init_client;
    use crate::models::Record;
    use crate::pagination::{PaginationController, StopReason, UniformDelay};
    use crate::postprocess::{filter_by_condition, price_statistics, PriceStats};

    /// Results of a completed scrape run.
    #[derive(Debug, Clone)]
    pub struct ScrapeReport {
        /// Final records, after condition filtering.
        pub records: Vec<Record>,
        /// Number of result pages actually attempted.
        pub pages_fetched: u32,
        /// Whether pagination stopped before the requested page count.
        pub stopped_early: bool,
        /// Why pagination stopped early, when it did.
        pub stop_reason: Option<StopReason>,
        /// Price statistics over the final records, when any price parsed.
        pub price_stats: Option<PriceStats>,
        /// Export artifacts written.
        pub exported_paths: Vec<PathBuf>,
        /// Elapsed time in seconds.
        pub elapsed_seconds: f64,
    }

    /// Runs a scrape with the provided configuration.
    ///
    /// This is the main entry point for the library: it validates the
    /// configuration into a `SearchRequest`, walks the result pages, applies
    /// the condition filter, computes price statistics, and writes the
    /// selected export artifacts.
    ///
    /// # Errors
    ///
    /// Fails on invalid configuration, HTTP client construction failure, or
    /// export I/O errors. Fetch-level failures do *not* error: they surface
    /// as `stop_reason` data on the report.
    pub async fn run_scrape(config: Config) -> Result<ScrapeReport> {
        let request = config
            .search_request()
            .context("Invalid search configuration")?;

        let client = init_client(&config.user_agent, config.timeout_seconds)
            .context("Failed to initialize HTTP client")?;
        let fetcher = PageFetcher::new(client, config.debug);
        let controller =
            PaginationController::new(fetcher, UniformDelay::politeness_window(), config.debug);

        let started = Instant::now();
        info!(
            "Starting scrape: query='{}', sort={}, pages={}",
            request.query, request.sort, request.max_pages
        );
        let result = controller.run(&request).await;

        let scraped_count = result.records.len();
        let records = filter_by_condition(result.records, config.condition.as_deref());
        if let Some(condition) = config.condition.as_deref().filter(|c| !c.trim().is_empty()) {
            info!(
                "Condition filter '{}' kept {} of {} record(s)",
                condition,
                records.len(),
                scraped_count
            );
        }

        let price_stats = price_statistics(&records);

        let exported_paths = write_exports(&records, config.format, config.output.as_deref())
            .context("Failed to write export artifacts")?;

        Ok(ScrapeReport {
            records,
            pages_fetched: result.pages_fetched,
            stopped_early: result.stopped_early,
            stop_reason: result.stop_reason,
            price_stats,
            exported_paths,
            elapsed_seconds: started.elapsed().as_secs_f64(),
        })
    }
}
