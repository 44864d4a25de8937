//! Configuration constants.
//!
//! Fixed operational parameters for the scrape pipeline: the target site's
//! search endpoint, timeouts, page sizing, and the inter-page delay window.

use std::time::Duration;

/// Search results endpoint of the target site.
pub const BASE_URL: &str = "https://www.ebay.com/sch/i.html";

/// Fixed page-size parameter sent with every search request (`_ipg`).
pub const RESULTS_PER_PAGE: u32 = 60;

/// Default number of result pages to walk.
pub const DEFAULT_MAX_PAGES: u32 = 2;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Lower bound of the randomized delay between successful page fetches.
///
/// The delay is a politeness/rate-limiting contract with the target site, not
/// a tunable: concurrent or back-to-back fetches get runs blocked quickly.
pub const PAGE_DELAY_MIN: Duration = Duration::from_secs(2);

/// Upper bound of the randomized inter-page delay.
pub const PAGE_DELAY_MAX: Duration = Duration::from_secs(4);

/// Default output path for CSV export.
pub const DEFAULT_CSV_PATH: &str = "ebay_products.csv";

/// Default output path for JSON export.
pub const DEFAULT_JSON_PATH: &str = "ebay_products.json";

/// Where diagnostic mode persists a raw response body for manual inspection.
pub const DEBUG_BODY_PATH: &str = "debug_response.html";

/// Default User-Agent string for HTTP requests.
///
/// A current desktop Chrome UA. Users can override it via `--user-agent`
/// when the default starts aging out of the site's accepted range.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";
