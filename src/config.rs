//! Application configuration
//!
//! The only required configuration value is the API base URL. It is
//! baked into the binary from the `API_BASE_URL` compile-time
//! environment variable; when it is absent every data operation fails
//! with a configuration error instead of attempting a request.

use std::sync::OnceLock;

static API_BASE: OnceLock<String> = OnceLock::new();

/// Initialize the API base URL. Call this at startup.
pub fn init_api_base(url: impl Into<String>) {
    API_BASE.set(url.into()).ok();
}

/// Seed configuration from compile-time environment.
pub fn init_from_env() {
    if let Some(url) = option_env!("API_BASE_URL") {
        init_api_base(url.trim_end_matches('/'));
    }
}

/// The configured API base URL, if any.
pub fn api_base() -> Option<&'static str> {
    API_BASE.get().map(|s| s.as_str())
}
