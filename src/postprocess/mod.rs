//! Post-processing over accumulated records.
//!
//! Two operations run after the pagination loop: condition filtering and
//! numeric price aggregation. Both treat malformed data as a normal case,
//! never an error.

use crate::models::{FieldId, Record};

/// Summary statistics over the parseable prices of a record set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceStats {
    /// Mean of the parsed prices.
    pub avg: f64,
    /// Lowest parsed price.
    pub min: f64,
    /// Highest parsed price.
    pub max: f64,
}

/// Keeps records whose condition contains `condition`, case-insensitively.
///
/// An empty or absent filter is the identity. Records that carry no condition
/// value at all pass through unfiltered; only a present, non-matching
/// condition excludes a record.
pub fn filter_by_condition(records: Vec<Record>, condition: Option<&str>) -> Vec<Record> {
    let Some(needle) = condition
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_lowercase)
    else {
        return records;
    };

    records
        .into_iter()
        .filter(|record| match record.get(FieldId::Condition) {
            Some(value) => value.to_lowercase().contains(&needle),
            None => true,
        })
        .collect()
}

/// Parses one displayed price into a number.
///
/// Strips the known currency symbols and thousand separators; for range
/// prices ("$10.00 to $20.00") uses the lower bound.
fn parse_price(raw: &str) -> Option<f64> {
    let cleaned = raw.replace(['$', '£', '€', ','], "");
    let lower = if cleaned.contains("to") {
        cleaned.split("to").next().unwrap_or_default()
    } else {
        cleaned.as_str()
    };
    lower.trim().parse().ok()
}

/// Computes average/min/max over every record price that parses.
///
/// Unparseable prices (sentinels, free-text) are silently excluded from the
/// statistic; they do not zero it out and they do not filter the records
/// themselves. Returns `None` when no price parses at all.
pub fn price_statistics(records: &[Record]) -> Option<PriceStats> {
    let prices: Vec<f64> = records
        .iter()
        .filter_map(|record| record.get(FieldId::Price))
        .filter_map(parse_price)
        .collect();

    if prices.is_empty() {
        return None;
    }

    let sum: f64 = prices.iter().sum();
    let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
    let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(PriceStats {
        avg: sum / prices.len() as f64,
        min,
        max,
    })
}
