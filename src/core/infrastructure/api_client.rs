//! HTTP access for the two probe calls.

use crate::core::domain::{
    error::{DialError, DialResult},
    model::NodeListDocument,
};
use reqwest::{Client, StatusCode};

/// Thin wrapper around a shared `reqwest::Client`.
///
/// Both calls this program makes are plain GETs with no custom headers, no
/// body, and no configured timeout (an unresponsive peer blocks the run).
/// Response bodies are always read to completion so the connection is drained
/// and released whether or not decoding succeeds.
#[derive(Debug, Default)]
pub struct ApiClient {
    http_client: Client,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            http_client: Client::new(),
        }
    }

    /// Fetches and decodes the node-list document.
    ///
    /// # Errors
    /// Returns `DialError::FetchList` on a transport failure or any non-200
    /// status, and `DialError::Decode` when the body does not match the
    /// document shape.
    pub async fn fetch_node_list(&self, url: &str) -> DialResult<NodeListDocument> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| DialError::FetchList(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            // Drain the body before reporting so the connection is released.
            let _ = response.bytes().await;
            return Err(DialError::FetchList(format!(
                "unexpected status code: {}",
                status.as_u16()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DialError::FetchList(format!("failed to read body: {e}")))?;
        serde_json::from_str(&body).map_err(|e| DialError::Decode(e.to_string()))
    }

    /// Issues the probe GET and returns whatever status the target answers
    /// with. Only a failure of the network call itself is an error; the
    /// caller reports non-2xx statuses as ordinary results.
    pub async fn dispatch(&self, url: &str) -> DialResult<StatusCode> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| DialError::Dispatch {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        let _ = response.bytes().await;
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path},
    };

    #[tokio::test]
    async fn test_fetch_node_list_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/stun"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "ModuleEnable": true,
                "ret": 0,
                "list": [{"Name": "node-a", "PublicAddr": "10.0.0.1:4500"}]
            })))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new();
        let document = client
            .fetch_node_list(&format!("{}/api/stun", mock_server.uri()))
            .await
            .unwrap();

        assert!(document.module_enable);
        assert_eq!(document.list[0].public_addr, "10.0.0.1:4500");
    }

    #[tokio::test]
    async fn test_fetch_node_list_non_200_fails() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/stun"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new();
        let err = client
            .fetch_node_list(&format!("{}/api/stun", mock_server.uri()))
            .await
            .unwrap_err();

        assert!(matches!(err, DialError::FetchList(_)));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_fetch_node_list_malformed_body_fails() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/stun"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new();
        let err = client
            .fetch_node_list(&format!("{}/api/stun", mock_server.uri()))
            .await
            .unwrap_err();

        assert!(matches!(err, DialError::Decode(_)));
    }

    #[tokio::test]
    async fn test_dispatch_returns_any_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = ApiClient::new();
        let status = client
            .dispatch(&format!("{}/health", mock_server.uri()))
            .await
            .unwrap();

        assert_eq!(status.as_u16(), 500);
    }

    #[tokio::test]
    async fn test_dispatch_transport_failure() {
        // Nothing listens on this port once the server is dropped. A pooled
        // server (`MockServer::start`) keeps its listener alive after drop,
        // so build a dedicated one that actually shuts down.
        let mock_server = MockServer::builder().start().await;
        let dead_url = format!("{}/health", mock_server.uri());
        drop(mock_server);

        let client = ApiClient::new();
        let err = client.dispatch(&dead_url).await.unwrap_err();

        assert!(matches!(err, DialError::Dispatch { .. }));
    }
}
