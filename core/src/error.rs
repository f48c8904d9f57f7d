//! Error types for the amphibians client.
//!
//! # Design
//! The state machine collapses every failure into a single `Error` state, but
//! the variants stay distinct so logs can say whether the network, the server
//! status, or the payload shape was at fault. `ApiError` is `Clone` so test
//! repositories can hand the same failure out more than once.

use thiserror::Error;

/// Errors returned by `AmphibiansClient::parse_*` and `AmphibiansApi`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response: connectivity, DNS, timeout, or
    /// the blocking request task itself failed.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with something other than 200.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),
}

impl ApiError {
    pub fn is_decode(&self) -> bool {
        matches!(self, ApiError::DeserializationError(_))
    }

    /// HTTP status of the failed response, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors raised while validating a `ClientConfig`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid base URL {0:?}: expected an http:// or https:// URL")]
    InvalidBaseUrl(String),

    #[error("timeout must be at least one second")]
    InvalidTimeout,
}
