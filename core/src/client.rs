//! Stateless HTTP request builder and response parser for the posts API.
//!
//! # Design
//! `PostsClient` holds only a `base_url` and carries no mutable state between
//! calls. Each CRUD operation is split into a `build_*` method that produces
//! an `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! `PostsService` runs the round-trip in between through a `Transport`.
//!
//! Every 2xx status counts as success. The backend answers 201 on create and
//! 200 elsewhere, but nothing here depends on the exact code.

use tracing::warn;

use crate::codec;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::Post;

const POSTS: &str = "/posts";

/// Synchronous, stateless client for the `posts` collection.
#[derive(Debug, Clone)]
pub struct PostsClient {
    base_url: String,
}

impl PostsClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_posts(&self) -> HttpRequest {
        self.request(HttpMethod::Get, POSTS.to_string(), None)
    }

    pub fn build_get_post(&self, id: u32) -> HttpRequest {
        self.request(HttpMethod::Get, item_path(id), None)
    }

    pub fn build_create_post(&self, draft: &Post) -> Result<HttpRequest, ApiError> {
        let body = codec::encode(draft)?;
        Ok(self.request(HttpMethod::Post, POSTS.to_string(), Some(body)))
    }

    pub fn build_update_post(&self, id: u32, draft: &Post) -> Result<HttpRequest, ApiError> {
        let body = codec::encode(draft)?;
        Ok(self.request(HttpMethod::Put, item_path(id), Some(body)))
    }

    pub fn build_delete_post(&self, id: u32) -> HttpRequest {
        self.request(HttpMethod::Delete, item_path(id), None)
    }

    /// An empty or `null` body is an empty list, not an error.
    pub fn parse_list_posts(&self, response: HttpResponse) -> Result<Vec<Post>, ApiError> {
        check_status(&response)?;
        if response.body.trim().is_empty() {
            return Ok(Vec::new());
        }
        let posts: Option<Vec<Post>> = codec::decode(&response.body)?;
        Ok(posts.unwrap_or_default())
    }

    pub fn parse_get_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        check_status(&response)?;
        Ok(codec::decode(&response.body)?)
    }

    pub fn parse_create_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        check_status(&response)?;
        Ok(codec::decode(&response.body)?)
    }

    pub fn parse_update_post(&self, response: HttpResponse) -> Result<Post, ApiError> {
        check_status(&response)?;
        Ok(codec::decode(&response.body)?)
    }

    /// The backend cannot tell "deleted" from "never existed"; any 2xx is
    /// `true`.
    pub fn parse_delete_post(&self, response: HttpResponse) -> Result<bool, ApiError> {
        check_status(&response)?;
        Ok(true)
    }

    fn request(&self, method: HttpMethod, path: String, body: Option<String>) -> HttpRequest {
        let headers = match body {
            Some(_) => vec![("content-type".to_string(), "application/json".to_string())],
            None => Vec::new(),
        };
        HttpRequest {
            method,
            url: format!("{}{path}", self.base_url),
            path,
            headers,
            body,
        }
    }
}

fn item_path(id: u32) -> String {
    format!("{POSTS}/{id}")
}

/// Map non-2xx status codes to `ApiError::HttpStatus`.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    warn!(status = response.status, "request rejected");
    Err(ApiError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}
