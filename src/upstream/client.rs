//! HTTP schedule source
//!
//! Fetches the published schedule document with a plain GET.

use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;

use super::ScheduleSource;
use crate::schedule::{ScheduleDocument, ScheduleError, ScheduleResult};

/// Schedule document client
pub struct HttpScheduleSource {
    client: Client,
    url: String,
}

impl HttpScheduleSource {
    /// Create a client for `url` with a per-request timeout
    pub fn new(url: impl Into<String>, request_timeout_ms: u64) -> ScheduleResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(request_timeout_ms))
            .user_agent(concat!("studysite/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ScheduleError::Transport(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl ScheduleSource for HttpScheduleSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> ScheduleResult<ScheduleDocument> {
        let response = self
            .client
            .get(&self.url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ScheduleError::Transport("Request timeout".to_string())
                } else {
                    ScheduleError::from(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url = %self.url, status = status.as_u16(), "Schedule fetch rejected");
            return Err(ScheduleError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let doc: ScheduleDocument = serde_json::from_str(&body)?;

        tracing::debug!(
            url = %self.url,
            weeks = doc.weeks().count(),
            "Fetched schedule document"
        );
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{header::CONTENT_TYPE, StatusCode},
        routing::get,
        Router,
    };

    /// Serve a tiny upstream on an ephemeral port and return its base URL
    async fn spawn_upstream() -> String {
        let app = Router::new()
            .route(
                "/schedule.json",
                get(|| async {
                    (
                        [(CONTENT_TYPE, "application/json")],
                        r#"{"Week1": {"dates": ["2025-06-02", "2025-06-03"], "slots": {"9:00": [null, 45]}}, "lastUpdate": "today"}"#,
                    )
                }),
            )
            .route("/broken.json", get(|| async { "{\"Week1\": " }))
            .route("/down.json", get(|| async { StatusCode::SERVICE_UNAVAILABLE }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_fetch_document() {
        let base = spawn_upstream().await;
        let source = HttpScheduleSource::new(format!("{}/schedule.json", base), 5000).unwrap();

        let doc = source.fetch().await.unwrap();
        assert_eq!(doc.last_update.as_deref(), Some("today"));
        assert_eq!(doc.weeks().count(), 1);
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let base = spawn_upstream().await;
        let source = HttpScheduleSource::new(format!("{}/down.json", base), 5000).unwrap();

        let err = source.fetch().await.unwrap_err();
        assert_eq!(err, ScheduleError::Http { status: 503 });
        assert_eq!(err.to_string(), "HTTP error! status: 503");
    }

    #[tokio::test]
    async fn test_not_found() {
        let base = spawn_upstream().await;
        let source = HttpScheduleSource::new(format!("{}/missing.json", base), 5000).unwrap();

        let err = source.fetch().await.unwrap_err();
        assert_eq!(err, ScheduleError::Http { status: 404 });
    }

    #[tokio::test]
    async fn test_truncated_body() {
        let base = spawn_upstream().await;
        let source = HttpScheduleSource::new(format!("{}/broken.json", base), 5000).unwrap();

        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, ScheduleError::Decode(_)));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        // Bind then drop to get a port nothing listens on
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let source = HttpScheduleSource::new(format!("http://{}/schedule.json", addr), 5000).unwrap();
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, ScheduleError::Transport(_)));
    }
}
