//! GraphQL query client.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{header, Client, Response};

use crate::api::types::{Metadata, QueryVariables};
use crate::config::{HttpConfig, QueryConfig};
use crate::error::{Error, Result};

/// Fetches post metadata and video assets.
///
/// Holds no per-post state; every call issues its own requests.
pub struct PostFetcher {
    client: Client,
    query: Arc<QueryConfig>,
}

impl PostFetcher {
    /// Create a fetcher with a client built from `http`.
    pub fn new(query: Arc<QueryConfig>, http: &HttpConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(&http.user_agent);
        if let Some(seconds) = http.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self::with_client(client, query))
    }

    /// Create a fetcher around an existing client.
    pub fn with_client(client: Client, query: Arc<QueryConfig>) -> Self {
        Self { client, query }
    }

    /// Query the metadata record for a short code.
    pub async fn fetch_metadata(&self, short_code: &str) -> Result<Metadata> {
        let body = QueryVariables::new(short_code).to_form_body(&self.query.doc_id)?;

        tracing::debug!("POST {} (shortcode {})", self.query.endpoint, short_code);

        let response = self
            .client
            .post(&self.query.endpoint)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .map_err(|e| Error::Download(format!("Metadata request failed: {}", e)))?;

        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(Error::QueryRejected {
                status: status.as_u16(),
            });
        }

        let text = response
            .text()
            .await
            .map_err(|e| Error::Download(format!("Failed to read metadata response: {}", e)))?;
        tracing::debug!("Metadata response length: {} bytes", text.len());

        Metadata::from_response(&text)
    }

    /// Send a plain GET for an asset URL.
    pub(crate) async fn get_asset(&self, url: &str) -> reqwest::Result<Response> {
        tracing::debug!("GET {}", url);
        self.client.get(url).send().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server, ServerGuard};

    fn fetcher_for(server: &ServerGuard, doc_id: &str) -> PostFetcher {
        let query = QueryConfig {
            endpoint: format!("{}/graphql/query", server.url()),
            doc_id: doc_id.to_string(),
            ..QueryConfig::default()
        };
        PostFetcher::new(Arc::new(query), &HttpConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_metadata_sends_form_query() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/graphql/query")
            .match_header("content-type", "application/x-www-form-urlencoded")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r"^variables=%7B%22shortcode%22%3A%22abc12%22%2C".into()),
                Matcher::Regex(r"%22hoisted_reply_id%22%3Anull%7D&doc_id=42$".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"data":{"xdt_shortcode_media":{"video_url":"https://cdn.example/v.mp4","shortcode":"abc12"}}}"#)
            .create_async()
            .await;

        let metadata = fetcher_for(&server, "42")
            .fetch_metadata("abc12")
            .await
            .unwrap();

        assert_eq!(metadata.video_url().unwrap(), "https://cdn.example/v.mp4");
        assert_eq!(metadata.get("shortcode").and_then(|v| v.as_str()), Some("abc12"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_fetch_metadata_rejected_status() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/graphql/query")
            .with_status(400)
            .with_body(r#"{"message":"useragent mismatch"}"#)
            .create_async()
            .await;

        let err = fetcher_for(&server, "42")
            .fetch_metadata("abc12")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::QueryRejected { status: 400 }));
    }

    #[tokio::test]
    async fn test_fetch_metadata_missing_media() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("POST", "/graphql/query")
            .with_status(200)
            .with_body(r#"{"data":{}}"#)
            .create_async()
            .await;

        let err = fetcher_for(&server, "42")
            .fetch_metadata("abc12")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_fetch_metadata_connection_failure() {
        let query = QueryConfig {
            endpoint: "http://127.0.0.1:1/graphql/query".to_string(),
            ..QueryConfig::default()
        };
        let fetcher = PostFetcher::new(Arc::new(query), &HttpConfig::default()).unwrap();

        let err = fetcher.fetch_metadata("abc12").await.unwrap_err();
        assert!(matches!(err, Error::Download(_)));
    }
}
