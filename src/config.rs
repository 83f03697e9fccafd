//! Runtime configuration for econ-pulse.

use std::env;

use serde::Deserialize;

/// Application configuration resolved from `.env` and defaults.
///
/// Loaded once at startup and treated as read-only afterwards. Missing key
/// material defaults to empty strings, which makes the inbound auth check
/// fail closed and upstream calls come back as upstream auth errors.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Signing secret for session cookies.
    pub secret_key: String,
    /// Inbound key clients must present in `X-API-Key`.
    pub api_key: String,
    /// FRED (St. Louis Fed) API key.
    pub fred_api_key: String,
    /// BLS registration key.
    pub bls_api_key: String,
    /// NewsAPI key.
    pub news_api_key: String,
    /// FRED base URL, overridable for tests.
    pub fred_base_url: String,
    /// BLS base URL, overridable for tests.
    pub bls_base_url: String,
    /// NewsAPI base URL, overridable for tests.
    pub news_base_url: String,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Ok(Self {
            secret_key: env::var("SECRET_KEY").unwrap_or_default(),
            api_key: env::var("API_KEY").unwrap_or_default(),
            fred_api_key: env::var("FRED_API_KEY").unwrap_or_default(),
            bls_api_key: env::var("BLS_API_KEY").unwrap_or_default(),
            news_api_key: env::var("NEWS_API_KEY").unwrap_or_default(),
            fred_base_url: env::var("FRED_BASE_URL")
                .unwrap_or_else(|_| "https://api.stlouisfed.org/fred".to_string()),
            bls_base_url: env::var("BLS_BASE_URL")
                .unwrap_or_else(|_| "https://api.bls.gov/publicAPI/v2".to_string()),
            news_base_url: env::var("NEWS_BASE_URL")
                .unwrap_or_else(|_| "https://newsapi.org/v2".to_string()),
        })
    }
}
