//! Upstream data providers.

pub mod bls;
pub mod fred;
pub mod news;

use thiserror::Error;

/// Failure modes shared by all upstream calls.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Transport-level failure (connect, TLS, timeout) or body decode error.
    #[error("request to {service} failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },
    /// The upstream answered with a non-200 status.
    #[error("{service} returned status {status}")]
    Status { service: &'static str, status: u16 },
    /// The upstream answered 200 but reported a failure in its payload.
    #[error("{0}")]
    Rejected(String),
}

impl UpstreamError {
    pub(crate) fn transport(service: &'static str, source: reqwest::Error) -> Self {
        Self::Transport { service, source }
    }
}
