//! Error types for the posts API client.
//!
//! # Design
//! Three kinds cover every failure of an operation: the server answered with
//! a non-2xx status (`HttpStatus`), no status was obtained at all
//! (`Transport`), or a 2xx body did not fit the expected shape (`Decode`).
//! A 404 is an `HttpStatus` like any other; `is_not_found` exists for callers
//! that branch on it.

use std::time::Duration;

use thiserror::Error;

use crate::http::HttpMethod;

/// Errors returned by `PostsClient` parse methods and `PostsService`
/// operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// The request never produced a status.
    #[error("transport failed: {0}")]
    Transport(#[from] TransportError),

    /// A JSON payload could not be encoded or a 2xx body could not be decoded.
    #[error("decode failed: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// The HTTP status for `HttpStatus` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Transport(TransportError::Timeout(_)))
    }
}

/// Failures raised by a `Transport` before any status was obtained.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// DNS, connect, TLS or I/O failure.
    #[error("connection failed: {0}")]
    Connection(String),

    /// A mock transport received a request it has no route for.
    #[error("no mock response configured for {method} {path}")]
    Unmatched { method: HttpMethod, path: String },

    /// The blocking task executing the request panicked or was cancelled.
    #[error("request task aborted: {0}")]
    Aborted(String),
}

/// Errors raised while loading `ClientConfig` from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid environment configuration: {0}")]
    Env(#[from] envy::Error),

    #[error("request timeout must be greater than zero")]
    ZeroTimeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_is_exposed_only_for_http_errors() {
        let err = ApiError::HttpStatus {
            status: 404,
            body: "{}".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert!(err.is_not_found());

        let err = ApiError::from(TransportError::Connection("refused".to_string()));
        assert_eq!(err.status(), None);
        assert!(!err.is_not_found());
    }

    #[test]
    fn timeout_is_recognised_through_the_wrapper() {
        let err = ApiError::from(TransportError::Timeout(Duration::from_secs(15)));
        assert!(err.is_timeout());
        assert_eq!(err.to_string(), "transport failed: request timed out after 15s");
    }

    #[test]
    fn unmatched_names_the_request() {
        let err = TransportError::Unmatched {
            method: HttpMethod::Delete,
            path: "/non-existent".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "no mock response configured for DELETE /non-existent"
        );
    }
}
