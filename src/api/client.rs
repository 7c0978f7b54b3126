//! HTTP API Client
//!
//! reqwest client for the transactions REST API.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::{ApiError, ApiResult, DashboardApi};
use crate::config::ApiConfig;
use crate::model::{FilterCriteria, StatisticsSnapshot, Transaction};

/// Transactions API client
#[derive(Debug, Clone)]
pub struct HttpApiClient {
    client: Client,
    base_url: String,
}

impl HttpApiClient {
    /// Create a client for the configured base URL
    pub fn new(config: &ApiConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn transactions_url(&self, filters: &FilterCriteria) -> String {
        let query = filters.query_string();
        if query.is_empty() {
            format!("{}/transactions", self.base_url)
        } else {
            format!("{}/transactions?{}", self.base_url, query)
        }
    }

    fn search_url(&self, term: &str) -> String {
        format!("{}/search?q={}", self.base_url, urlencoding::encode(term))
    }

    async fn get(&self, url: &str) -> ApiResult<reqwest::Response> {
        tracing::debug!(url = %url, "GET");

        self.client
            .get(url)
            .send()
            .await
            .map_err(ApiError::from_transport)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> ApiResult<T> {
        let response = self.get(url).await?;

        if !response.status().is_success() {
            let status = response.status();
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(ApiError::from_transport)?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl DashboardApi for HttpApiClient {
    async fn statistics(&self) -> ApiResult<StatisticsSnapshot> {
        self.get_json(&format!("{}/statistics", self.base_url)).await
    }

    async fn transactions(&self, filters: &FilterCriteria) -> ApiResult<Vec<Transaction>> {
        self.get_json(&self.transactions_url(filters)).await
    }

    async fn search(&self, term: &str) -> ApiResult<Vec<Transaction>> {
        self.get_json(&self.search_url(term)).await
    }

    async fn transaction(&self, id: i64) -> ApiResult<Transaction> {
        let response = self
            .get(&format!("{}/transaction/{}", self.base_url, id))
            .await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(id));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await.map_err(ApiError::from_transport)?;
        let value: serde_json::Value = serde_json::from_str(&body)?;

        // The backend answers misses with `{"error": "..."}`
        if value.get("error").is_some() {
            return Err(ApiError::NotFound(id));
        }

        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::{Path, RawQuery, State};
    use axum::http::StatusCode as AxumStatus;
    use axum::routing::get;
    use axum::{Json, Router};
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    type Seen = Arc<Mutex<Vec<String>>>;

    async fn spawn_server(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/api", addr)
    }

    fn client_for(base_url: String) -> HttpApiClient {
        HttpApiClient::new(&ApiConfig {
            base_url,
            request_timeout_secs: 5,
        })
        .unwrap()
    }

    async fn record_query(
        State(seen): State<Seen>,
        RawQuery(query): RawQuery,
    ) -> Json<serde_json::Value> {
        seen.lock().unwrap().push(query.unwrap_or_default());
        Json(json!([
            {
                "id": 1,
                "transaction_type": "Incoming Money",
                "amount": 2000.0,
                "sender": "Jane Smith"
            },
            {"id": 2, "transaction_type": "Agent Withdrawal", "amount": 500.0}
        ]))
    }

    fn mock_api(seen: Seen) -> Router {
        Router::new()
            .route(
                "/api/statistics",
                get(|| async {
                    Json(json!({
                        "by_type": [{"transaction_type": "Incoming Money", "count": 2}],
                        "by_month": [{"month": "2024-05", "count": 2, "total_amount": 2500.0}],
                        "overall": {"total_transactions": 2, "total_amount": 2500.0}
                    }))
                }),
            )
            .route("/api/transactions", get(record_query))
            .route("/api/search", get(record_query))
            .route(
                "/api/transaction/:id",
                get(|Path(id): Path<i64>| async move {
                    match id {
                        1 => (
                            AxumStatus::OK,
                            Json(json!({
                                "id": 1,
                                "transaction_type": "Bank Deposit",
                                "bank_name": "BK"
                            })),
                        ),
                        2 => (AxumStatus::OK, Json(json!({"error": "Transaction not found"}))),
                        _ => (
                            AxumStatus::NOT_FOUND,
                            Json(json!({"error": "Transaction not found"})),
                        ),
                    }
                }),
            )
            .with_state(seen)
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = client_for("http://localhost:5000/api/".to_string());
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(
            client.transactions_url(&FilterCriteria::default()),
            "http://localhost:5000/api/transactions"
        );
        assert_eq!(
            client.search_url("MTN & co"),
            "http://localhost:5000/api/search?q=MTN%20%26%20co"
        );
    }

    #[tokio::test]
    async fn test_fetch_statistics() {
        let seen = Seen::default();
        let client = client_for(spawn_server(mock_api(seen)).await);

        let stats = client.statistics().await.unwrap();
        assert_eq!(stats.overall.total_transactions, Some(2));
        assert_eq!(stats.overall.max_amount, None);
        assert_eq!(stats.by_month[0].total_amount, Some(2500.0));
    }

    #[tokio::test]
    async fn test_transactions_send_only_present_filters() {
        let seen = Seen::default();
        let client = client_for(spawn_server(mock_api(seen.clone())).await);

        let all = client.transactions(&FilterCriteria::default()).await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, 1);

        let filters = FilterCriteria {
            start_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1),
            ..Default::default()
        };
        client.transactions(&filters).await.unwrap();

        let seen = seen.lock().unwrap().clone();
        assert_eq!(seen, vec!["".to_string(), "start_date=2024-01-01".to_string()]);
    }

    #[tokio::test]
    async fn test_search_encodes_term() {
        let seen = Seen::default();
        let client = client_for(spawn_server(mock_api(seen.clone())).await);

        client.search("Jane Smith").await.unwrap();
        assert_eq!(seen.lock().unwrap()[0], "q=Jane%20Smith");
    }

    #[tokio::test]
    async fn test_transaction_detail_and_not_found() {
        let client = client_for(spawn_server(mock_api(Seen::default())).await);

        let tx = client.transaction(1).await.unwrap();
        assert_eq!(tx.bank_name.as_deref(), Some("BK"));

        assert!(matches!(client.transaction(2).await, Err(ApiError::NotFound(2))));
        assert!(matches!(client.transaction(99).await, Err(ApiError::NotFound(99))));
    }

    #[tokio::test]
    async fn test_decode_and_status_errors() {
        let app = Router::new()
            .route("/api/statistics", get(|| async { "definitely not json" }))
            .route(
                "/api/transactions",
                get(|| async { (AxumStatus::INTERNAL_SERVER_ERROR, "database locked") }),
            );
        let client = client_for(spawn_server(app).await);

        assert!(matches!(client.statistics().await, Err(ApiError::Decode(_))));

        match client.transactions(&FilterCriteria::default()).await {
            Err(ApiError::Status { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "database locked");
            }
            other => panic!("expected status error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = client_for(format!("http://{}/api", addr));
        assert!(matches!(
            client.statistics().await,
            Err(ApiError::Unavailable(_))
        ));
    }
}
