//! Configuration: CLI options, constants, and request headers.

pub mod constants;
mod headers;
mod types;

pub use constants::{
    BASE_URL, DEBUG_BODY_PATH, DEFAULT_CSV_PATH, DEFAULT_JSON_PATH, DEFAULT_MAX_PAGES,
    DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, PAGE_DELAY_MAX, PAGE_DELAY_MIN, RESULTS_PER_PAGE,
};
pub(crate) use headers::BrowserHeaders;
pub use types::{Config, LogFormat, LogLevel};
