//! Backend base-URL selection.
//!
//! The target is fixed at compile time: a `CLINIC_API_URL` build-time
//! override wins, otherwise debug builds talk to the local backend and
//! release builds to the hosted one.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const PROD_API_URL: &str = "https://psychiatric-center-backend.onrender.com";
pub const LOCAL_API_URL: &str = "http://localhost:3000";

/// Base URL of the REST backend for this build.
pub fn api_base_url() -> &'static str {
    if let Some(url) = option_env!("CLINIC_API_URL") {
        return url;
    }
    if cfg!(debug_assertions) {
        LOCAL_API_URL
    } else {
        PROD_API_URL
    }
}

/// Join an absolute API path onto the configured base URL.
pub fn api_url(path: &str) -> String {
    format!("{}{path}", api_base_url())
}
