//! Resilient field extraction from search-results markup.
//!
//! This module turns one page of raw HTML into records:
//! - [`chains`]: per-field ordered fallback selectors
//! - [`record`]: per-node extraction and rejection rules
//! - [`extract_page`]: parse, enumerate listing nodes, extract each one
//!
//! The parsed document and its listing nodes live only for the duration of a
//! single page's extraction pass; nothing here is retained across pages.

pub mod chains;
pub mod record;

use std::collections::BTreeSet;

use scraper::{Html, Selector};

pub use chains::{chain_for, SelectorChain};
pub use record::{extract_record, TITLE_REJECTIONS};

use crate::models::{FieldId, Record};

// Listing-node selectors: the primary wrapper, plus the known alternate
// wrapper the site serves on some page variants.
const PRIMARY_NODE_SELECTOR_STR: &str = "li.s-item";
const ALTERNATE_NODE_SELECTOR_STR: &str = "div.s-item__wrapper";

static PRIMARY_NODE_SELECTOR: std::sync::LazyLock<Selector> = std::sync::LazyLock::new(|| {
    Selector::parse(PRIMARY_NODE_SELECTOR_STR).expect("primary node selector parses")
});

static ALTERNATE_NODE_SELECTOR: std::sync::LazyLock<Selector> = std::sync::LazyLock::new(|| {
    Selector::parse(ALTERNATE_NODE_SELECTOR_STR).expect("alternate node selector parses")
});

/// Parses a results page and extracts a record per accepted listing node.
///
/// Node enumeration first tries the primary wrapper selector; when that
/// yields zero nodes it retries with the documented alternate wrapper.
/// Rejected nodes are skipped silently (debug-logged only).
pub fn extract_page(html: &str, fields: &BTreeSet<FieldId>) -> Vec<Record> {
    let document = Html::parse_document(html);

    let mut nodes: Vec<_> = document.select(&PRIMARY_NODE_SELECTOR).collect();
    if nodes.is_empty() {
        nodes = document.select(&ALTERNATE_NODE_SELECTOR).collect();
        if !nodes.is_empty() {
            log::debug!(
                "Primary node selector matched nothing; alternate wrapper yielded {} nodes",
                nodes.len()
            );
        }
    }
    log::debug!("Found {} listing node(s)", nodes.len());

    nodes
        .into_iter()
        .filter_map(|node| extract_record(node, fields))
        .collect()
}
