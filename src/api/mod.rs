//! Transactions API
//!
//! The dashboard only ever reads from four endpoints:
//!
//! - `GET /statistics`
//! - `GET /transactions?type=&start_date=&end_date=&min_amount=&max_amount=`
//! - `GET /search?q=`
//! - `GET /transaction/{id}`
//!
//! [`DashboardApi`] is the seam the controller is written against;
//! [`HttpApiClient`] is the reqwest implementation.

mod client;
mod error;

pub use client::HttpApiClient;
pub use error::{ApiError, ApiResult};

use async_trait::async_trait;

use crate::model::{FilterCriteria, StatisticsSnapshot, Transaction};

/// Read access to the transactions backend
#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// Aggregate statistics
    async fn statistics(&self) -> ApiResult<StatisticsSnapshot>;

    /// Transactions matching the criteria, in server order
    async fn transactions(&self, filters: &FilterCriteria) -> ApiResult<Vec<Transaction>>;

    /// Free-text search
    async fn search(&self, term: &str) -> ApiResult<Vec<Transaction>>;

    /// A single transaction; `ApiError::NotFound` when it does not exist
    async fn transaction(&self, id: i64) -> ApiResult<Transaction>;
}
