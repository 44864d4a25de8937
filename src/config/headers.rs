//! Realistic browser request headers.
//!
//! Modern bot detection systems analyze request headers to identify automated
//! clients. Sending the header set a desktop Chrome would send reduces the
//! likelihood of trivial fingerprint rejection. The set is static and applied
//! identically to every request in a run, so the client presents a consistent
//! browser fingerprint.

/// Static browser-like request headers.
///
/// Applied to every page fetch. TLS-level fingerprinting can still identify
/// the client; these headers only address header-based detection, which
/// combined with the mandatory inter-page delay covers the common case.
pub(crate) struct BrowserHeaders;

impl BrowserHeaders {
    /// Applies the standard header set to a `reqwest::RequestBuilder`.
    pub(crate) fn apply_to_request_builder(
        builder: reqwest::RequestBuilder,
    ) -> reqwest::RequestBuilder {
        builder
            .header(
                reqwest::header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "en-US,en;q=0.9")
            // Accept-Encoding is left to the client: reqwest advertises the
            // codings it can decode and decompresses transparently, but only
            // as long as the header is not set manually.
            .header(reqwest::header::DNT, "1")
            .header(reqwest::header::UPGRADE_INSECURE_REQUESTS, "1")
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-dest"),
                "document",
            )
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-mode"),
                "navigate",
            )
            .header(
                reqwest::header::HeaderName::from_static("sec-fetch-site"),
                "none",
            )
            .header(reqwest::header::CACHE_CONTROL, "max-age=0")
    }
}
