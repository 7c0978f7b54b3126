//! Aggregate statistics
//!
//! Server-computed totals plus breakdowns by type and by month. SQL
//! aggregates over an empty table come back as `null`, so every number is
//! optional here and resolved to zero at display time.

use serde::{Deserialize, Serialize};

use super::TransactionType;

/// Statistics snapshot returned by `/statistics`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSnapshot {
    #[serde(default)]
    pub overall: OverallStats,
    #[serde(default)]
    pub by_type: Vec<TypeCount>,
    #[serde(default)]
    pub by_month: Vec<MonthCount>,
}

/// Totals across all transactions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OverallStats {
    #[serde(default)]
    pub total_transactions: Option<u64>,
    #[serde(default)]
    pub total_amount: Option<f64>,
    #[serde(default)]
    pub avg_amount: Option<f64>,
    #[serde(default)]
    pub max_amount: Option<f64>,
    #[serde(default)]
    pub min_amount: Option<f64>,
}

/// Count of transactions of one type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeCount {
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub total_amount: Option<f64>,
}

/// Count and volume for one calendar month (`YYYY-MM`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthCount {
    pub month: String,
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub total_amount: Option<f64>,
}

impl StatisticsSnapshot {
    /// Sum of the by-type counts
    pub fn type_total(&self) -> u64 {
        self.by_type.iter().map(|t| t.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_payload() {
        let json = r#"{
            "by_type": [
                {"transaction_type": "Incoming Money", "count": 3, "total_amount": 1500.0},
                {"transaction_type": "Agent Withdrawal", "count": 1, "total_amount": 200.0}
            ],
            "by_month": [
                {"month": "2024-05", "count": 4, "total_amount": 1700.0}
            ],
            "overall": {
                "total_transactions": 4,
                "total_amount": 1700.0,
                "avg_amount": 425.0,
                "max_amount": 1000.0,
                "min_amount": 100.0
            }
        }"#;

        let stats: StatisticsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(stats.by_type.len(), 2);
        assert_eq!(stats.by_type[0].transaction_type, TransactionType::IncomingMoney);
        assert_eq!(stats.type_total(), 4);
        assert_eq!(stats.by_month[0].month, "2024-05");
        assert_eq!(stats.overall.total_transactions, Some(4));
    }

    #[test]
    fn test_decode_empty_database() {
        let json = r#"{
            "by_type": [],
            "by_month": [],
            "overall": {
                "total_transactions": 0,
                "total_amount": null,
                "avg_amount": null,
                "max_amount": null,
                "min_amount": null
            }
        }"#;

        let stats: StatisticsSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(stats.overall.total_amount, None);
        assert_eq!(stats.type_total(), 0);
    }

    #[test]
    fn test_decode_missing_sections() {
        let stats: StatisticsSnapshot = serde_json::from_str("{}").unwrap();
        assert_eq!(stats, StatisticsSnapshot::default());
    }
}
