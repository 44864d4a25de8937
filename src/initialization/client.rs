//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

/// Initializes the shared HTTP client for a run.
///
/// One client serves every page fetch so the underlying connection is reused
/// across calls, which both speeds up the run and looks more like a browser
/// session to the target site. Configured with:
/// - the User-Agent from configuration
/// - the per-request timeout
/// - cookie store enabled (the site sets session cookies on the first page)
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(
    user_agent: &str,
    timeout_seconds: u64,
) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(user_agent.to_string())
        .cookie_store(true)
        .build()?;
    Ok(Arc::new(client))
}
