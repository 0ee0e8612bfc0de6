//! Typed async client for the JSONPlaceholder `posts` API.
//!
//! # Overview
//! `PostsClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network (host-does-IO pattern). `PostsService` runs
//! each operation as one round-trip through an injected `Transport`: the live
//! `UreqTransport` in applications, `MockTransport` in tests.
//!
//! # Design
//! - `PostsClient` is stateless; it holds only `base_url`.
//! - Each CRUD operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit and mockable.
//! - Decoding ignores field-name case; encoding writes camelCase (`codec`).
//! - Failures are `HttpStatus`, `Transport` or `Decode` (`ApiError`); none are
//!   retried or masked.
//!
//! ```no_run
//! # async fn run() -> Result<(), posts_core::ApiError> {
//! use posts_core::{ClientConfig, Post, PostsService};
//!
//! let service = PostsService::live(&ClientConfig::default());
//! let post = service.get_post(1).await?;
//! let created = service.create_post(&Post::draft(1, "title", "body")).await?;
//! assert!(created.id > 0);
//! # let _ = post;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod codec;
pub mod config;
pub mod error;
pub mod http;
pub mod mock;
pub mod service;
pub mod transport;
pub mod types;

pub use client::PostsClient;
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use mock::{MockResponse, MockTransport, RecordedRequest};
pub use service::PostsService;
pub use transport::{Transport, UreqTransport};
pub use types::{Address, Company, Geo, Photo, Post, User};
