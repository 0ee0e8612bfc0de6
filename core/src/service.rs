//! Async CRUD operations over the `posts` collection.
//!
//! `PostsService` pairs the stateless `PostsClient` with an injected
//! `Transport`: build the request, send it once under the configured timeout,
//! parse the response. No retries and no state between calls. The transport
//! is owned by the service and released when the service is dropped; wrap it
//! in an `Arc` to keep a handle of your own.

use std::time::Duration;

use tracing::{debug, warn};

use crate::client::PostsClient;
use crate::config::ClientConfig;
use crate::error::{ApiError, TransportError};
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::Post;

pub struct PostsService<T> {
    client: PostsClient,
    transport: T,
    timeout: Duration,
}

impl PostsService<UreqTransport> {
    /// A service with its own live transport.
    pub fn live(config: &ClientConfig) -> Self {
        Self::new(config, UreqTransport::new(config.timeout))
    }
}

impl<T: Transport> PostsService<T> {
    pub fn new(config: &ClientConfig, transport: T) -> Self {
        Self {
            client: PostsClient::new(&config.base_url),
            transport,
            timeout: config.timeout,
        }
    }

    pub fn client(&self) -> &PostsClient {
        &self.client
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn list_posts(&self) -> Result<Vec<Post>, ApiError> {
        let response = self.execute(self.client.build_list_posts()).await?;
        self.client.parse_list_posts(response)
    }

    /// An unknown id is an `HttpStatus { status: 404, .. }` error.
    pub async fn get_post(&self, id: u32) -> Result<Post, ApiError> {
        let response = self.execute(self.client.build_get_post(id)).await?;
        self.client.parse_get_post(response)
    }

    /// Returns the echoed record with its server-assigned id. The public API
    /// does not persist it.
    pub async fn create_post(&self, draft: &Post) -> Result<Post, ApiError> {
        let request = self.client.build_create_post(draft)?;
        let response = self.execute(request).await?;
        self.client.parse_create_post(response)
    }

    pub async fn update_post(&self, id: u32, draft: &Post) -> Result<Post, ApiError> {
        let request = self.client.build_update_post(id, draft)?;
        let response = self.execute(request).await?;
        self.client.parse_update_post(response)
    }

    /// `true` for any 2xx; a non-2xx status is an error, never `false`.
    pub async fn delete_post(&self, id: u32) -> Result<bool, ApiError> {
        let response = self.execute(self.client.build_delete_post(id)).await?;
        self.client.parse_delete_post(response)
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let method = request.method;
        let path = request.path.clone();
        debug!(%method, url = %request.url, "sending request");

        let response = match tokio::time::timeout(self.timeout, self.transport.send(request)).await
        {
            Ok(Ok(response)) => response,
            Ok(Err(err)) => {
                warn!(%method, %path, error = %err, "transport failed");
                return Err(err.into());
            }
            Err(_) => {
                warn!(%method, %path, timeout = ?self.timeout, "request timed out");
                return Err(TransportError::Timeout(self.timeout).into());
            }
        };

        debug!(%method, %path, status = response.status, "received response");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::http::HttpMethod;
    use crate::mock::{MockResponse, MockTransport};

    fn service() -> (Arc<MockTransport>, PostsService<Arc<MockTransport>>) {
        let mock = Arc::new(MockTransport::new());
        let config = ClientConfig::default().with_base_url("https://fakejsonplaceholder.com/");
        let service = PostsService::new(&config, Arc::clone(&mock));
        (mock, service)
    }

    #[test]
    fn live_service_uses_configured_origin() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:9/");
        let service = PostsService::live(&config);
        assert_eq!(service.client().base_url(), "http://127.0.0.1:9");
        assert_eq!(service.transport().timeout(), config.timeout);
    }

    #[tokio::test]
    async fn each_operation_sends_exactly_one_request() {
        let (mock, service) = service();
        mock.on(HttpMethod::Delete, "/posts/3", MockResponse::json(200, "{}"));

        assert!(service.delete_post(3).await.unwrap());
        assert_eq!(mock.requests().len(), 1);
        mock.assert_received(HttpMethod::Delete, "/posts/3", 1);
    }

    #[tokio::test]
    async fn create_sends_the_encoded_draft() {
        let (mock, service) = service();
        mock.on(
            HttpMethod::Post,
            "/posts",
            MockResponse::json(201, r#"{"userId":1,"id":101,"title":"t","body":"b"}"#),
        );

        service.create_post(&Post::draft(1, "t", "b")).await.unwrap();

        let log = mock.requests();
        let sent: serde_json::Value =
            serde_json::from_str(log[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, serde_json::json!({"userId": 1, "title": "t", "body": "b"}));
    }
}
