//! Error types for the remote API client.

use serde_json::Value;
use thiserror::Error;

/// Result type for remote API calls.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors produced by a single remote call.
///
/// Transport failures, rejected requests and malformed response bodies are
/// kept distinct so a malformed remote response is never mistaken for a
/// genuine absence of data.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never completed (connection refused, DNS failure, ...).
    #[error("request failed: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The remote answered with a non-2xx status.
    #[error("remote returned HTTP {status}: {message}")]
    Status {
        status: u16,
        message: String,
        /// Structured error body, when the remote supplied one.
        detail: Option<Value>,
    },

    /// The remote answered 2xx but the body did not match the contract.
    #[error("malformed remote response: {0}")]
    Decode(String),
}

impl ApiError {
    pub(crate) fn transport(source: reqwest::Error) -> Self {
        Self::Transport { source }
    }

    /// Structured error detail carried by the remote response, if any.
    pub fn detail(&self) -> Option<&Value> {
        match self {
            Self::Status { detail, .. } => detail.as_ref(),
            _ => None,
        }
    }
}
