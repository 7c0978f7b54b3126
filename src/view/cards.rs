//! Stat cards
//!
//! Four headline numbers computed from the statistics snapshot.

use serde::Serialize;

use super::format::{format_amount, format_count};
use crate::config::DisplayConfig;
use crate::model::StatisticsSnapshot;

/// Display strings for the four stat slots
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCards {
    pub total_transactions: String,
    pub total_amount: String,
    pub avg_amount: String,
    pub max_amount: String,
}

/// Build the stat cards; absent numbers show as zero
pub fn stat_cards(stats: &StatisticsSnapshot, display: &DisplayConfig) -> StatCards {
    let overall = &stats.overall;

    StatCards {
        total_transactions: format_count(overall.total_transactions.unwrap_or(0), display),
        total_amount: format_amount(overall.total_amount, display),
        avg_amount: format_amount(overall.avg_amount.map(f64::round), display),
        max_amount: format_amount(overall.max_amount, display),
    }
}
