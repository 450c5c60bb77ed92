// src/net/mod.rs
pub mod rate_limit;
pub mod retry;
pub mod session;

pub use rate_limit::RateLimiter;
pub use retry::RetryPolicy;
pub use session::{SessionConfig, SessionManager};

use url::Url;

/// True when `candidate` parses as an absolute http(s) URL with a host.
pub fn validate_url(candidate: &str) -> bool {
    match Url::parse(candidate) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}

/// Collapse runs of whitespace to single spaces and trim the ends.
/// Scraped text arrives full of layout whitespace and entities rendered
/// as newlines; this normalizes it for storage and comparison.
pub fn sanitize_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
