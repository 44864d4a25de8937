//! Page fetching and outcome classification.
//!
//! One bounded HTTP GET per call, on a client reused across the run, with the
//! static browser header set applied. The HTTP/transport result is classified
//! into a [`FetchOutcome`]; no retries happen here. Retry and stop policy
//! belong to the pagination controller.

use async_trait::async_trait;
use strum_macros::Display as DisplayMacro;

use crate::config::{BrowserHeaders, DEBUG_BODY_PATH};

/// Why the target site refused a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplayMacro)]
pub enum BlockReason {
    /// HTTP 429: request frequency tripped the site's rate limiter.
    #[strum(serialize = "rate limited")]
    RateLimited,
    /// The response body carried a captcha/robot-check interstitial.
    #[strum(serialize = "captcha challenge")]
    Captcha,
    /// HTTP 403: the request was rejected outright (bot fingerprint).
    #[strum(serialize = "forbidden")]
    Forbidden,
}

/// Classified result of one page fetch.
///
/// Created per page fetch and consumed immediately by the pagination
/// controller; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// 2xx response; carries the raw page body.
    Success(String),
    /// Non-2xx response other than the blocked statuses.
    HttpError(u16),
    /// Connection or timeout failure before a response was obtained.
    TransportError(String),
    /// The site's automated-client defenses triggered.
    Blocked(BlockReason),
}

/// Case-insensitive body markers indicating a robot-check interstitial.
const CAPTCHA_MARKERS: &[&str] = &["captcha", "robot"];

enum Classified {
    Ok,
    Blocked(BlockReason),
    Http(u16),
}

/// Status/body classification shared by [`classify_response`] and the
/// fetcher's diagnostic path.
///
/// The captcha marker scan applies to non-2xx bodies only: a 200 response
/// containing the word "robot" is far more likely a listing for a robot
/// vacuum than an interstitial, and a 200 challenge page yields zero listing
/// nodes anyway, which the first-page stop rule catches.
fn classify(status: u16, body: &str) -> Classified {
    match status {
        200..=299 => Classified::Ok,
        403 => Classified::Blocked(BlockReason::Forbidden),
        429 => Classified::Blocked(BlockReason::RateLimited),
        _ => {
            let lower = body.to_lowercase();
            if CAPTCHA_MARKERS.iter().any(|marker| lower.contains(marker)) {
                Classified::Blocked(BlockReason::Captcha)
            } else {
                Classified::Http(status)
            }
        }
    }
}

/// Classifies an HTTP status and body into a [`FetchOutcome`].
pub fn classify_response(status: u16, body: String) -> FetchOutcome {
    match classify(status, &body) {
        Classified::Ok => FetchOutcome::Success(body),
        Classified::Blocked(reason) => FetchOutcome::Blocked(reason),
        Classified::Http(status) => FetchOutcome::HttpError(status),
    }
}

/// The fetch seam of the pipeline.
///
/// The pagination controller is generic over this trait so tests can script
/// per-page outcomes without a network.
#[async_trait]
pub trait Fetch {
    /// Performs one bounded fetch of `url` and classifies the result.
    async fn fetch(&self, url: &str) -> FetchOutcome;
}

/// Real HTTP fetcher backed by a shared `reqwest::Client`.
///
/// The client carries the timeout and User-Agent (see
/// `initialization::init_client`); this type adds the per-request browser
/// headers, classification, and the diagnostic body dump.
pub struct PageFetcher {
    client: std::sync::Arc<reqwest::Client>,
    debug_dump: bool,
}

impl PageFetcher {
    /// Creates a fetcher. With `debug_dump` set, blocked responses are
    /// persisted to [`DEBUG_BODY_PATH`] for manual inspection.
    pub fn new(client: std::sync::Arc<reqwest::Client>, debug_dump: bool) -> Self {
        Self { client, debug_dump }
    }
}

/// Persists a raw response body to [`DEBUG_BODY_PATH`].
///
/// Debugging aid only; failures to write are logged and otherwise ignored.
pub fn persist_debug_body(body: &str) {
    match std::fs::write(DEBUG_BODY_PATH, body) {
        Ok(()) => log::info!("Saved response body to '{}' for inspection", DEBUG_BODY_PATH),
        Err(e) => log::warn!("Could not save debug response body: {}", e),
    }
}

#[async_trait]
impl Fetch for PageFetcher {
    async fn fetch(&self, url: &str) -> FetchOutcome {
        let request = BrowserHeaders::apply_to_request_builder(self.client.get(url));

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                let message = if e.is_timeout() {
                    format!("request timed out: {e}")
                } else {
                    format!("request failed: {e}")
                };
                return FetchOutcome::TransportError(message);
            }
        };

        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return FetchOutcome::TransportError(format!("failed to read body: {e}"));
            }
        };

        match classify(status, &body) {
            Classified::Ok => FetchOutcome::Success(body),
            Classified::Blocked(reason) => {
                if self.debug_dump {
                    persist_debug_body(&body);
                }
                FetchOutcome::Blocked(reason)
            }
            Classified::Http(status) => FetchOutcome::HttpError(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_statuses_carry_the_body() {
        for status in [200, 204, 299] {
            match classify_response(status, "<html>listings</html>".into()) {
                FetchOutcome::Success(body) => assert_eq!(body, "<html>listings</html>"),
                other => panic!("expected Success for {status}, got {other:?}"),
            }
        }
    }

    #[test]
    fn forbidden_and_rate_limit_statuses_are_blocks() {
        assert_eq!(
            classify_response(403, String::new()),
            FetchOutcome::Blocked(BlockReason::Forbidden)
        );
        assert_eq!(
            classify_response(429, String::new()),
            FetchOutcome::Blocked(BlockReason::RateLimited)
        );
    }

    #[test]
    fn captcha_markers_in_failed_responses_are_blocks() {
        for body in [
            "Please solve this CAPTCHA to continue",
            "Are you a robot?",
        ] {
            assert_eq!(
                classify_response(503, body.to_string()),
                FetchOutcome::Blocked(BlockReason::Captcha)
            );
        }
    }

    #[test]
    fn other_failures_keep_their_status_code() {
        assert_eq!(
            classify_response(500, "internal error".into()),
            FetchOutcome::HttpError(500)
        );
        assert_eq!(
            classify_response(404, String::new()),
            FetchOutcome::HttpError(404)
        );
    }

    #[test]
    fn marker_scan_does_not_apply_to_successful_pages() {
        // A 200 page legitimately containing "robot" is a success; challenge
        // interstitials are caught by the zero-node first-page rule instead.
        let outcome = classify_response(200, "robot vacuum cleaner listings".into());
        assert!(matches!(outcome, FetchOutcome::Success(_)));
    }
}
