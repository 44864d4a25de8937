//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `listing_harvest` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing summary output
//!
//! All pipeline functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use std::process;

use listing_harvest::initialization::init_logger_with;
use listing_harvest::{run_scrape, Config, ScrapeReport, StopReason};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_scrape(config).await {
        Ok(report) => {
            print_summary(&report);
            if report.records.is_empty() {
                print_troubleshooting(report.stop_reason.as_ref());
                process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {:#}", "Scrape failed:".red(), e);
            process::exit(1);
        }
    }
}

/// Prints the end-of-run summary: totals, price statistics, and a sample of
/// the first few records.
fn print_summary(report: &ScrapeReport) {
    println!();
    println!("{}", "Scraping summary".bold());
    println!("  Records: {}", report.records.len());
    println!(
        "  Pages fetched: {}{}",
        report.pages_fetched,
        if report.stopped_early {
            " (stopped early)"
        } else {
            ""
        }
    );
    if let Some(reason) = &report.stop_reason {
        println!("  Stop reason: {}", reason.to_string().yellow());
    }
    if let Some(stats) = &report.price_stats {
        println!("  Average price: ${:.2}", stats.avg);
        println!("  Price range: ${:.2} - ${:.2}", stats.min, stats.max);
    }
    for path in &report.exported_paths {
        println!("  Wrote {}", path.display());
    }
    println!("  Elapsed: {:.1}s", report.elapsed_seconds);

    if !report.records.is_empty() {
        println!();
        println!("Sample records (first {}):", report.records.len().min(3));
        for (i, record) in report.records.iter().take(3).enumerate() {
            println!("  {}.", i + 1);
            for field in record.field_ids() {
                let value = record.get(field).unwrap_or_default();
                let shown: String = if value.chars().count() > 100 {
                    format!("{}...", value.chars().take(100).collect::<String>())
                } else {
                    value.to_string()
                };
                println!("     {}: {}", field.key(), shown);
            }
        }
    }
}

/// Prints actionable hints when a run produced nothing.
fn print_troubleshooting(stop_reason: Option<&StopReason>) {
    eprintln!();
    eprintln!("{}", "No records scraped.".yellow());
    match stop_reason {
        Some(StopReason::Blocked(_)) => {
            eprintln!("The site refused the requests. Try again later, use a proxy or VPN,");
            eprintln!("or consider the site's official API for reliable access.");
        }
        Some(StopReason::TransportError(_)) => {
            eprintln!("Network failure. Check connectivity and retry.");
        }
        Some(StopReason::HttpError(_)) => {
            eprintln!("The site returned an error response. Retry later.");
        }
        Some(StopReason::EmptyFirstPage) | None => {
            eprintln!("Try a different search term, or rerun with --debug to save the");
            eprintln!("response body and inspect whether the markup changed.");
        }
    }
}
