//! Credential access
//!
//! The bearer token lives in a shared session store owned by the login
//! flow, not by this view. It is read fresh on every API call so that
//! logins and logouts in other tabs take effect without a reload.

/// Storage key the login flow writes the bearer token under.
#[cfg(feature = "web")]
const TOKEN_KEY: &str = "token";

/// Read the bearer token from browser local storage.
///
/// Whitespace-only values count as absent.
#[cfg(feature = "web")]
pub fn read_token() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let token = storage.get_item(TOKEN_KEY).ok()??;
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Read the bearer token from the process environment.
///
/// Non-web builds have no browser session store; tests and native
/// tooling supply the credential via `BOOKMART_TOKEN`.
#[cfg(not(feature = "web"))]
pub fn read_token() -> Option<String> {
    std::env::var("BOOKMART_TOKEN")
        .ok()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}
