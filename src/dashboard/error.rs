//! Dashboard operation errors
//!
//! Each variant corresponds to one user-visible failure class.

use thiserror::Error;

use crate::api::ApiError;
use crate::model::FilterError;

/// Errors surfaced by controller operations
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Statistics or transaction list could not be loaded
    #[error("Data load failed: {0}")]
    DataLoad(#[source] ApiError),

    /// Free-text search failed
    #[error("Search failed: {0}")]
    Search(#[source] ApiError),

    /// Detail lookup for a transaction that does not exist
    #[error("Transaction {0} not found")]
    NotFound(i64),

    /// Detail lookup failed for any other reason
    #[error("Transaction detail failed: {0}")]
    Detail(#[source] ApiError),

    /// Filter inputs could not be turned into criteria
    #[error("Invalid filter: {0}")]
    InvalidFilter(#[from] FilterError),
}

impl DashboardError {
    /// Message shown to the user
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::DataLoad(_) => {
                "Failed to load data. Please ensure the API server is running.".to_string()
            }
            DashboardError::Search(_) => "Search failed".to_string(),
            DashboardError::NotFound(_) => "Transaction not found".to_string(),
            DashboardError::Detail(_) => "Failed to load transaction details".to_string(),
            DashboardError::InvalidFilter(e) => format!("Invalid filter: {}", e),
        }
    }
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
