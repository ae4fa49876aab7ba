//! HTTP client for the recommendation backend (POST /api/query).

use serde::Deserialize;

/// One candidate assessment from the backend, with its relevance score.
#[derive(Debug, Clone, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub url: String,
    pub description: String,
    /// Relevance in [0, 1]; shown as a rounded percentage.
    pub similarity: f64,
}

/// Body of POST /api/query. The backend carries application failures in
/// the body (`success: false` plus `error`) even on non-2xx statuses, so
/// the status code itself is never inspected.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub success: bool,
    pub query: Option<String>,
    pub recommendations: Option<Vec<Recommendation>>,
    pub error: Option<String>,
}

pub struct BackendClient {
    base_url: String,
    client: reqwest::Client,
}

impl BackendClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .expect("reqwest client");
        Self { base_url, client }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send one query. `Err` means transport or decode failure; an
    /// application-level failure comes back as `Ok` with `success: false`.
    pub async fn query(&self, query: &str) -> Result<QueryResponse, String> {
        let url = format!("{}/api/query", self.base_url.trim_end_matches('/'));
        let body = serde_json::json!({ "query": query });
        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        let parsed: QueryResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn posts_json_body_and_decodes_recommendations() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/api/query")
            .match_header("content-type", "application/json")
            .match_body(Matcher::Json(serde_json::json!({ "query": "sales roles" })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "success": true,
                    "query": "sales roles",
                    "recommendations": [
                        {"title": "Sales Aptitude", "url": "https://example.com/a",
                         "description": "Entry-level sales screen.", "similarity": 0.91},
                        {"title": "Negotiation", "url": "https://example.com/b",
                         "description": "Scenario-based.", "similarity": 0.42}
                    ]
                }"#,
            )
            .create_async()
            .await;

        let client = BackendClient::new(server.url());
        let resp = client.query("sales roles").await.expect("query should decode");

        assert!(resp.success);
        assert_eq!(resp.query.as_deref(), Some("sales roles"));
        let recs = resp.recommendations.expect("recommendations present");
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].title, "Sales Aptitude");
        assert!((recs[1].similarity - 0.42).abs() < 1e-9);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn application_error_passes_through_even_on_http_500() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/api/query")
            .with_status(500)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": false, "error": "index not ready"}"#)
            .create_async()
            .await;

        let client = BackendClient::new(server.url());
        let resp = client.query("anything").await.expect("body still decodes");

        assert!(!resp.success);
        assert_eq!(resp.error.as_deref(), Some("index not ready"));
    }

    #[tokio::test]
    async fn missing_error_field_decodes_as_none() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/api/query")
            .with_status(400)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": false}"#)
            .create_async()
            .await;

        let client = BackendClient::new(server.url());
        let resp = client.query("anything").await.expect("body still decodes");
        assert!(!resp.success);
        assert!(resp.error.is_none());
    }

    #[tokio::test]
    async fn non_json_body_is_a_transport_error() {
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/api/query")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<html>gateway error</html>")
            .create_async()
            .await;

        let client = BackendClient::new(server.url());
        assert!(client.query("anything").await.is_err());
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        // Nothing listens on the discard port.
        let client = BackendClient::new("http://127.0.0.1:9".into());
        assert!(client.query("anything").await.is_err());
    }
}
