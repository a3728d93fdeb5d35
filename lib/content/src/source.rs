//! Advice sources.
//!
//! [`AdviceSource`] is the seam between the dialog and the Content Service.
//! [`HttpAdviceSource`] is the production implementation.

use crate::config::ContentConfig;
use crate::error::{ContentError, FetchError};
use crate::item::{AdviceItem, AdviceQuery};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use rootcause::prelude::Report;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Something that can produce one advice item per request.
#[async_trait]
pub trait AdviceSource: Send + Sync {
    /// Fetches one advice item matching the query.
    async fn fetch(&self, query: &AdviceQuery) -> Result<AdviceItem, FetchError>;
}

/// Content Service client over HTTP.
///
/// A single attempt per call, bounded by the configured timeout.
#[derive(Debug, Clone)]
pub struct HttpAdviceSource {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpAdviceSource {
    /// Creates a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint is not a valid URL or the HTTP client
    /// cannot be built.
    pub fn new(config: &ContentConfig) -> Result<Self, Report<ContentError>> {
        Self::with_timeout(&config.endpoint(), config.timeout())
    }

    /// Creates a client for an explicit endpoint URL and timeout.
    ///
    /// # Errors
    ///
    /// Same as [`HttpAdviceSource::new`].
    pub fn with_timeout(endpoint: &str, timeout: Duration) -> Result<Self, Report<ContentError>> {
        let endpoint = Url::parse(endpoint).map_err(|e| ContentError::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| ContentError::ClientBuild {
                reason: e.to_string(),
            })?;

        Ok(Self { client, endpoint })
    }

    /// Returns the advice endpoint this client calls.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

fn transport_error(err: &reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::ConnectionFailed {
            reason: err.to_string(),
        }
    }
}

#[async_trait]
impl AdviceSource for HttpAdviceSource {
    #[instrument(skip(self), fields(category = ?query.category))]
    async fn fetch(&self, query: &AdviceQuery) -> Result<AdviceItem, FetchError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&query.pairs())
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, endpoint = %self.endpoint, "Content Service request failed");
                transport_error(&e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(endpoint = %self.endpoint, status = %status, "Content Service returned error status");
            return Err(FetchError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| {
            warn!(error = %e, endpoint = %self.endpoint, "Failed to read Content Service body");
            transport_error(&e)
        })?;

        let item: AdviceItem = serde_json::from_slice(&body).map_err(|e| {
            warn!(error = %e, endpoint = %self.endpoint, "Content Service body is not an advice item");
            FetchError::MalformedBody {
                reason: e.to_string(),
            }
        })?;

        if let Some(defect) = item.defect() {
            warn!(advice_id = ?item.id, defect, "Content Service returned unusable advice");
            return Err(FetchError::MalformedBody {
                reason: defect.to_string(),
            });
        }

        debug!(advice_id = ?item.id, "Fetched advice");
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::StatusCode as AxumStatus;
    use axum::routing::get;
    use axum::{Json, Router};
    use kind_words_core::{AdviceId, Category};
    use std::collections::HashMap;
    use std::net::SocketAddr;

    async fn serve(app: Router) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub server");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server");
        });
        addr
    }

    fn source_for(addr: SocketAddr, timeout: Duration) -> HttpAdviceSource {
        HttpAdviceSource::with_timeout(&format!("http://{addr}/api/advice/"), timeout)
            .expect("client")
    }

    /// Echoes the received `category` parameter back in the advice text.
    fn echo_app() -> Router {
        Router::new().route(
            "/api/advice/",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let seen = params
                    .get("category")
                    .cloned()
                    .unwrap_or_else(|| "<none>".to_string());
                Json(serde_json::json!({
                    "text": format!("category={seen}"),
                    "category": "💪 Мотивация",
                    "id": 7,
                }))
            }),
        )
    }

    #[tokio::test]
    async fn attaches_category_parameter_when_set() {
        let addr = serve(echo_app()).await;
        let source = source_for(addr, Duration::from_secs(5));

        for category in Category::ALL {
            let item = source
                .fetch(&AdviceQuery::in_category(category))
                .await
                .expect("fetch");
            assert_eq!(item.text, format!("category={}", category.code()));
            assert_eq!(item.id, Some(AdviceId::new(7)));
        }
    }

    #[tokio::test]
    async fn omits_category_parameter_for_any() {
        let addr = serve(echo_app()).await;
        let source = source_for(addr, Duration::from_secs(5));

        let item = source.fetch(&AdviceQuery::any()).await.expect("fetch");
        assert_eq!(item.text, "category=<none>");
    }

    #[tokio::test]
    async fn server_error_is_unexpected_status() {
        let app = Router::new().route(
            "/api/advice/",
            get(|| async { (AxumStatus::INTERNAL_SERVER_ERROR, "boom") }),
        );
        let addr = serve(app).await;
        let source = source_for(addr, Duration::from_secs(5));

        let err = source.fetch(&AdviceQuery::any()).await.unwrap_err();
        assert_eq!(err, FetchError::UnexpectedStatus { status: 500 });
    }

    #[tokio::test]
    async fn non_json_body_is_malformed() {
        let app = Router::new().route("/api/advice/", get(|| async { "<html>oops</html>" }));
        let addr = serve(app).await;
        let source = source_for(addr, Duration::from_secs(5));

        let err = source.fetch(&AdviceQuery::any()).await.unwrap_err();
        assert!(matches!(err, FetchError::MalformedBody { .. }));
    }

    #[tokio::test]
    async fn missing_fields_are_malformed() {
        let app = Router::new().route(
            "/api/advice/",
            get(|| async { Json(serde_json::json!({ "id": 3 })) }),
        );
        let addr = serve(app).await;
        let source = source_for(addr, Duration::from_secs(5));

        let err = source.fetch(&AdviceQuery::any()).await.unwrap_err();
        assert!(matches!(err, FetchError::MalformedBody { .. }));
    }

    #[tokio::test]
    async fn body_without_id_counts_as_success() {
        let app = Router::new().route(
            "/api/advice/",
            get(|| async {
                Json(serde_json::json!({
                    "text": "Ты справишься!",
                    "category": "💪 Мотивация",
                }))
            }),
        );
        let addr = serve(app).await;
        let source = source_for(addr, Duration::from_secs(5));

        let item = source.fetch(&AdviceQuery::any()).await.expect("fetch");
        assert_eq!(item.id, None);
        assert_eq!(item.text, "Ты справишься!");
        assert_eq!(item.category, "💪 Мотивация");
    }

    #[tokio::test]
    async fn default_filler_item_counts_as_success() {
        let app = Router::new().route(
            "/api/advice/",
            get(|| async {
                Json(serde_json::json!({
                    "text": "Верь в себя! У тебя всё получится! 💫",
                    "category": "default",
                    "id": 0,
                }))
            }),
        );
        let addr = serve(app).await;
        let source = source_for(addr, Duration::from_secs(5));

        let item = source.fetch(&AdviceQuery::any()).await.expect("fetch");
        assert_eq!(item.id, Some(AdviceId::new(0)));
        assert_eq!(item.category, "default");
    }

    #[tokio::test]
    async fn slow_service_times_out() {
        let app = Router::new().route(
            "/api/advice/",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Json(serde_json::json!({ "text": "late", "category": "x", "id": 1 }))
            }),
        );
        let addr = serve(app).await;
        let source = source_for(addr, Duration::from_millis(200));

        let err = source.fetch(&AdviceQuery::any()).await.unwrap_err();
        assert_eq!(err, FetchError::Timeout);
    }

    #[tokio::test]
    async fn unreachable_service_is_connection_failure() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);
        let source = source_for(addr, Duration::from_secs(2));

        let err = source.fetch(&AdviceQuery::any()).await.unwrap_err();
        assert!(matches!(err, FetchError::ConnectionFailed { .. }));
    }

    #[test]
    fn rejects_invalid_endpoint() {
        let result = HttpAdviceSource::with_timeout("not a url", Duration::from_secs(1));
        assert!(result.is_err());
    }
}
