//! Pagination: the fetch → parse → accumulate loop.
//!
//! Drives page fetches strictly sequentially (never two in flight), owns the
//! mandatory inter-page delay, and converts fetch failures into an early stop
//! with a structured reason. Records accumulated before a failure are always
//! preserved.

mod delay;
mod url;

pub use delay::{DelayPolicy, NoDelay, UniformDelay};
pub use self::url::build_page_url;

use std::fmt;

use crate::extract::extract_page;
use crate::fetch::{persist_debug_body, BlockReason, Fetch, FetchOutcome};
use crate::models::{Record, SearchRequest};

/// Why a run stopped before reaching `max_pages`.
#[derive(Debug, Clone, PartialEq)]
pub enum StopReason {
    /// The site's defenses refused the request.
    Blocked(BlockReason),
    /// A non-2xx response other than the blocked statuses.
    HttpError(u16),
    /// Connection or timeout failure.
    TransportError(String),
    /// Page 1 yielded zero records. A failed first page almost always means
    /// blocking or a broken selector set, so further pages are assumed
    /// equally futile. Later pages going empty do not stop the run: a query
    /// may legitimately run out of results.
    EmptyFirstPage,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::Blocked(reason) => write!(f, "blocked by target site ({reason})"),
            StopReason::HttpError(status) => write!(f, "HTTP error {status}"),
            StopReason::TransportError(message) => write!(f, "network error: {message}"),
            StopReason::EmptyFirstPage => write!(f, "first page returned no records"),
        }
    }
}

/// Outcome of a full pagination run.
#[derive(Debug, Clone)]
pub struct ScrapeResult {
    /// All records accumulated across pages, in page order.
    pub records: Vec<Record>,
    /// Number of pages actually attempted.
    pub pages_fetched: u32,
    /// Whether the loop ended before `max_pages`.
    pub stopped_early: bool,
    /// Why it stopped early, when it did.
    pub stop_reason: Option<StopReason>,
}

/// Drives the paginated fetch loop for one request.
pub struct PaginationController<F: Fetch, D: DelayPolicy> {
    fetcher: F,
    delay: D,
    debug_dump: bool,
}

impl<F: Fetch, D: DelayPolicy> PaginationController<F, D> {
    /// Creates a controller. With `debug_dump` set, a zero-record first page
    /// gets its raw body persisted for manual inspection.
    pub fn new(fetcher: F, delay: D, debug_dump: bool) -> Self {
        Self {
            fetcher,
            delay,
            debug_dump,
        }
    }

    /// Walks pages `1..=max_pages`, accumulating accepted records.
    ///
    /// Stops early on any fetch failure or on a zero-record first page; the
    /// stop is reported as data in the result, never raised. Enforces the
    /// randomized politeness delay between successful fetches.
    pub async fn run(&self, request: &SearchRequest) -> ScrapeResult {
        let mut records: Vec<Record> = Vec::new();
        let mut pages_fetched = 0;
        let mut stop_reason = None;

        for page in 1..=request.max_pages {
            if page > 1 {
                // Reaching here implies the previous fetch succeeded.
                let pause = self.delay.next_delay();
                log::debug!("Pausing {:?} before page {}", pause, page);
                tokio::time::sleep(pause).await;
            }

            let url = build_page_url(request, page);
            log::debug!("Page {} URL: {}", page, url);
            log::info!("Scraping page {}/{}...", page, request.max_pages);
            pages_fetched = page;

            match self.fetcher.fetch(&url).await {
                FetchOutcome::Success(body) => {
                    let page_records = extract_page(&body, &request.fields);
                    log::info!("Page {}: found {} item(s)", page, page_records.len());

                    if page_records.is_empty() && page == 1 {
                        log::warn!("No products found on the first page. Possible reasons:");
                        log::warn!("  - the site is blocking the request");
                        log::warn!("  - the search query returned no results");
                        log::warn!("  - the site changed its HTML structure");
                        if self.debug_dump {
                            persist_debug_body(&body);
                        }
                        stop_reason = Some(StopReason::EmptyFirstPage);
                        break;
                    }
                    records.extend(page_records);
                }
                FetchOutcome::Blocked(reason) => {
                    log::error!("Page {} blocked: {}", page, reason);
                    stop_reason = Some(StopReason::Blocked(reason));
                    break;
                }
                FetchOutcome::HttpError(status) => {
                    log::error!("Page {} failed with HTTP {}", page, status);
                    stop_reason = Some(StopReason::HttpError(status));
                    break;
                }
                FetchOutcome::TransportError(message) => {
                    log::error!("Page {} transport failure: {}", page, message);
                    stop_reason = Some(StopReason::TransportError(message));
                    break;
                }
            }
        }

        ScrapeResult {
            records,
            pages_fetched,
            stopped_early: stop_reason.is_some(),
            stop_reason,
        }
    }
}
