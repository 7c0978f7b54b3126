//! Data model
//!
//! Wire types shared by the API client and the view builders.

mod filter;
mod statistics;
mod transaction;

pub use filter::{FilterCriteria, FilterError, FilterField, FilterInputs};
pub use statistics::{MonthCount, OverallStats, StatisticsSnapshot, TypeCount};
pub use transaction::{Transaction, TransactionType};

pub(crate) use transaction::present;
