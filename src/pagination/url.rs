//! Search URL construction.
//!
//! The query grammar (`_nkw`, `_sop`, `_ipg`, `_udlo`, `_udhi`, `_pgn`) is a
//! fixed external contract with the target site. Changes to the site's
//! grammar are an expected source of breakage and are isolated to this file.

use url::Url;

use crate::config::{BASE_URL, RESULTS_PER_PAGE};
use crate::models::SearchRequest;

/// Builds the deterministic search URL for one page of a request.
pub fn build_page_url(request: &SearchRequest, page: u32) -> String {
    let mut url = Url::parse(BASE_URL).expect("BASE_URL constant parses");
    {
        let mut pairs = url.query_pairs_mut();
        pairs
            .append_pair("_nkw", &request.query)
            .append_pair("_sop", &request.sort.code().to_string())
            .append_pair("_ipg", &RESULTS_PER_PAGE.to_string());
        if let Some(min) = request.min_price {
            pairs.append_pair("_udlo", &min.to_string());
        }
        if let Some(max) = request.max_price {
            pairs.append_pair("_udhi", &max.to_string());
        }
        pairs.append_pair("_pgn", &page.to_string());
    }
    url.into()
}
