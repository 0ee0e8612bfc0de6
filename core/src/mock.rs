//! In-memory `Transport` for tests.
//!
//! # Design
//! Routes are matched on `(method, path)` and answer with a canned
//! `MockResponse`. Every request, matched or not, is appended to an ordered
//! log that tests query afterwards (`times_received`, `assert_received`).
//! A request without a route never falls through to a network; it fails with
//! `TransportError::Unmatched`.
//!
//! Locks are released before any `.await`, so one mock can serve concurrent
//! operations.

use std::time::Duration;

use parking_lot::Mutex;
use tracing::debug;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::transport::Transport;

/// A canned response for one `(method, path)` route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub content_type: Option<String>,
    /// Held before answering; lets tests exercise timeouts.
    pub delay: Option<Duration>,
}

impl MockResponse {
    /// A JSON response with `content-type: application/json`.
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            content_type: Some("application/json".to_string()),
            delay: None,
        }
    }

    /// A response with no body and no content type.
    pub fn status(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
            content_type: None,
            delay: None,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    fn to_response(&self) -> HttpResponse {
        let headers = self
            .content_type
            .iter()
            .map(|ct| ("content-type".to_string(), ct.clone()))
            .collect();
        HttpResponse {
            status: self.status,
            headers,
            body: self.body.clone(),
        }
    }
}

/// One observed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<String>,
}

#[derive(Debug, Clone)]
struct Route {
    method: HttpMethod,
    path: String,
    response: MockResponse,
}

#[derive(Debug, Default)]
pub struct MockTransport {
    routes: Mutex<Vec<Route>>,
    log: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the response for `method path`.
    pub fn on(&self, method: HttpMethod, path: &str, response: MockResponse) -> &Self {
        let mut routes = self.routes.lock();
        routes.retain(|r| !(r.method == method && r.path == path));
        routes.push(Route {
            method,
            path: path.to_string(),
            response,
        });
        self
    }

    /// Snapshot of every request seen so far, in arrival order.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.log.lock().clone()
    }

    pub fn times_received(&self, method: HttpMethod, path: &str) -> usize {
        self.log
            .lock()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    /// Whether `method path` was observed exactly `times` times.
    pub fn received(&self, method: HttpMethod, path: &str, times: usize) -> bool {
        self.times_received(method, path) == times
    }

    /// Panics with the full request log unless `method path` was observed
    /// exactly `times` times.
    #[track_caller]
    pub fn assert_received(&self, method: HttpMethod, path: &str, times: usize) {
        let seen = self.times_received(method, path);
        assert!(
            seen == times,
            "expected {method} {path} {times} time(s), saw {seen}; log: {:?}",
            self.requests()
        );
    }

    pub fn reset(&self) {
        self.log.lock().clear();
    }

    fn lookup(&self, method: HttpMethod, path: &str) -> Option<MockResponse> {
        self.routes
            .lock()
            .iter()
            .find(|r| r.method == method && r.path == path)
            .map(|r| r.response.clone())
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.log.lock().push(RecordedRequest {
            method: request.method,
            path: request.path.clone(),
            body: request.body.clone(),
        });

        let Some(canned) = self.lookup(request.method, &request.path) else {
            debug!(method = %request.method, path = %request.path, "unmatched mock request");
            return Err(TransportError::Unmatched {
                method: request.method,
                path: request.path,
            });
        };

        if let Some(delay) = canned.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(canned.to_response())
    }
}
