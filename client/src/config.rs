//! Build-time configuration.
//!
//! Values come from environment variables read by `option_env!` when the
//! WASM bundle is compiled; a blank or missing variable falls back to the
//! local development default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001/api";
pub const DEFAULT_TOKEN_KEY: &str = "token";

/// Base URL every REST path is appended to, without a trailing slash.
pub fn api_base_url() -> &'static str {
    resolve(option_env!("API_BASE_URL"), DEFAULT_API_BASE_URL).trim_end_matches('/')
}

/// `localStorage` key holding the bearer token.
pub fn token_key() -> &'static str {
    resolve(option_env!("TOKEN_STORAGE_KEY"), DEFAULT_TOKEN_KEY)
}

pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info }
}

fn resolve(value: Option<&'static str>, default: &'static str) -> &'static str {
    value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(default)
}
