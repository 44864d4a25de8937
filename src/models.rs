//! Core data model for the listing acquisition pipeline.
//!
//! This module defines the types shared across the pipeline stages:
//! - [`SearchRequest`]: validated, immutable description of one scrape run
//! - [`FieldId`]: the set of extractable listing fields
//! - [`SortOrder`]: result ordering, with its fixed site-protocol codes
//! - [`Record`]: one extracted listing

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use strum_macros::{Display as DisplayMacro, EnumIter as EnumIterMacro};
use thiserror::Error;

/// Listing fields that can be requested for extraction.
///
/// The selected subset determines which selector chains run and which keys
/// appear in output records. Fields that are not selected are never computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, ValueEnum, EnumIterMacro)]
pub enum FieldId {
    /// Product title (mandatory anchor field; a listing without one is rejected)
    Title,
    /// Listed price, as displayed (currency symbol included)
    Price,
    /// Item condition (New / Used / Pre-Owned etc.)
    Condition,
    /// Shipping cost or shipping info text
    Shipping,
    /// Seller location
    Location,
    /// Product page URL
    Url,
    /// Primary listing image URL
    ImageUrl,
    /// Number of items sold
    SoldCount,
}

impl FieldId {
    /// Returns the output key for this field, as used in CSV headers and JSON maps.
    pub fn key(self) -> &'static str {
        match self {
            FieldId::Title => "title",
            FieldId::Price => "price",
            FieldId::Condition => "condition",
            FieldId::Shipping => "shipping",
            FieldId::Location => "location",
            FieldId::Url => "url",
            FieldId::ImageUrl => "image_url",
            FieldId::SoldCount => "sold_count",
        }
    }

    /// Returns the sentinel value stored when a selector chain finds nothing.
    ///
    /// Sold count defaults to `"0"` rather than `"N/A"`: an absent quantity
    /// badge means nothing has sold, not that the data is missing.
    pub fn sentinel(self) -> &'static str {
        match self {
            FieldId::SoldCount => "0",
            _ => "N/A",
        }
    }

    /// All fields, in output-column order.
    pub fn all() -> BTreeSet<FieldId> {
        use strum::IntoEnumIterator;
        FieldId::iter().collect()
    }
}

/// Result ordering for the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, DisplayMacro, EnumIterMacro)]
pub enum SortOrder {
    /// Site relevance ranking (default)
    BestMatch,
    /// Price + shipping, lowest first
    PriceAsc,
    /// Price + shipping, highest first
    PriceDesc,
    /// Newly listed first
    Newest,
}

impl SortOrder {
    /// Returns the numeric sort code used in the site's `_sop` query parameter.
    ///
    /// These codes are an external protocol owned by the target site and are
    /// preserved verbatim for compatibility.
    pub fn code(self) -> u32 {
        match self {
            SortOrder::BestMatch => 12,
            SortOrder::PriceAsc => 15,
            SortOrder::PriceDesc => 16,
            SortOrder::Newest => 10,
        }
    }
}

/// Errors produced when constructing an invalid [`SearchRequest`].
#[derive(Error, Debug, PartialEq)]
pub enum RequestError {
    /// The search query was empty or whitespace-only.
    #[error("search query must not be empty")]
    EmptyQuery,

    /// No extraction fields were selected.
    #[error("at least one field must be selected")]
    NoFields,

    /// Page count outside the supported range.
    #[error("max pages must be between {min} and {max}, got {got}")]
    PageCountOutOfRange {
        /// Lowest allowed page count
        min: u32,
        /// Highest allowed page count
        max: u32,
        /// The rejected value
        got: u32,
    },

    /// Minimum price was negative.
    #[error("minimum price must be >= 0, got {0}")]
    NegativeMinPrice(f64),

    /// Maximum price was below the minimum.
    #[error("price range is inverted: min {min} > max {max}")]
    InvertedPriceRange {
        /// The configured minimum price
        min: f64,
        /// The configured maximum price
        max: f64,
    },
}

/// Lowest allowed `max_pages` value.
pub const MIN_PAGES: u32 = 1;
/// Highest allowed `max_pages` value.
pub const MAX_PAGES: u32 = 5;

/// A validated, immutable description of one scrape run.
///
/// Construct via [`SearchRequest::new`], which enforces the invariants
/// (non-empty query, non-empty field set, page count in range, coherent
/// price bounds). The pipeline never mutates a request after construction.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Search term, e.g. `"laptop"`.
    pub query: String,
    /// Result ordering.
    pub sort: SortOrder,
    /// Optional lower price bound, in the site's display currency.
    pub min_price: Option<f64>,
    /// Optional upper price bound.
    pub max_price: Option<f64>,
    /// Number of result pages to walk, in `[1, 5]`.
    pub max_pages: u32,
    /// Fields to extract per listing.
    pub fields: BTreeSet<FieldId>,
}

impl SearchRequest {
    /// Builds a request, validating all invariants.
    pub fn new(
        query: impl Into<String>,
        sort: SortOrder,
        min_price: Option<f64>,
        max_price: Option<f64>,
        max_pages: u32,
        fields: BTreeSet<FieldId>,
    ) -> Result<Self, RequestError> {
        let query = query.into();
        if query.trim().is_empty() {
            return Err(RequestError::EmptyQuery);
        }
        if fields.is_empty() {
            return Err(RequestError::NoFields);
        }
        if !(MIN_PAGES..=MAX_PAGES).contains(&max_pages) {
            return Err(RequestError::PageCountOutOfRange {
                min: MIN_PAGES,
                max: MAX_PAGES,
                got: max_pages,
            });
        }
        if let Some(min) = min_price {
            if min < 0.0 {
                return Err(RequestError::NegativeMinPrice(min));
            }
        }
        if let (Some(min), Some(max)) = (min_price, max_price) {
            if max < min {
                return Err(RequestError::InvertedPriceRange { min, max });
            }
        }
        Ok(Self {
            query,
            sort,
            min_price,
            max_price,
            max_pages,
            fields,
        })
    }
}

/// One extracted listing.
///
/// Invariant: a `Record` always carries at least one field beyond the
/// timestamp; the extractor rejects degenerate nodes rather than emitting
/// timestamp-only records.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Extracted field values, keyed by field. Fields that were requested but
    /// not found hold their sentinel value instead of being omitted, so output
    /// records stay structurally uniform.
    pub values: BTreeMap<FieldId, String>,
    /// When this record was extracted.
    pub scraped_at: DateTime<Utc>,
}

impl Record {
    /// Returns the value for a field, if present on this record.
    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// The fields present on this record, in stable output order.
    pub fn field_ids(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.values.keys().copied()
    }
}
