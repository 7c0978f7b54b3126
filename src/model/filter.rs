//! Transaction filters
//!
//! `FilterInputs` is what the user typed; `FilterCriteria` is what gets sent.
//! Empty inputs never reach the query string.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw contents of the five filter inputs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterInputs {
    pub transaction_type: String,
    pub start_date: String,
    pub end_date: String,
    pub min_amount: String,
    pub max_amount: String,
}

/// Which filter input a value belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Type,
    StartDate,
    EndDate,
    MinAmount,
    MaxAmount,
}

impl FilterInputs {
    /// Overwrite one input
    pub fn set(&mut self, field: FilterField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FilterField::Type => self.transaction_type = value,
            FilterField::StartDate => self.start_date = value,
            FilterField::EndDate => self.end_date = value,
            FilterField::MinAmount => self.min_amount = value,
            FilterField::MaxAmount => self.max_amount = value,
        }
    }

    /// Reset every input to empty
    pub fn clear(&mut self) {
        *self = FilterInputs::default();
    }

    /// Convert to criteria, dropping empty inputs
    pub fn to_criteria(&self) -> Result<FilterCriteria, FilterError> {
        Ok(FilterCriteria {
            transaction_type: non_empty(&self.transaction_type).map(str::to_string),
            start_date: non_empty(&self.start_date).map(parse_date).transpose()?,
            end_date: non_empty(&self.end_date).map(parse_date).transpose()?,
            min_amount: non_empty(&self.min_amount).map(parse_amount).transpose()?,
            max_amount: non_empty(&self.max_amount).map(parse_amount).transpose()?,
        })
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

fn parse_date(value: &str) -> Result<NaiveDate, FilterError> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| FilterError::InvalidDate(value.to_string()))
}

fn parse_amount(value: &str) -> Result<f64, FilterError> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| FilterError::InvalidAmount(value.to_string()))
}

/// Criteria narrowing the transaction query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub transaction_type: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
}

impl FilterCriteria {
    /// True when no criterion is set
    pub fn is_empty(&self) -> bool {
        self.query_pairs().is_empty()
    }

    /// Present criteria as query parameters, in a fixed order
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();

        if let Some(kind) = &self.transaction_type {
            pairs.push(("type", kind.clone()));
        }
        if let Some(date) = self.start_date {
            pairs.push(("start_date", date.format(DATE_FORMAT).to_string()));
        }
        if let Some(date) = self.end_date {
            pairs.push(("end_date", date.format(DATE_FORMAT).to_string()));
        }
        if let Some(amount) = self.min_amount {
            pairs.push(("min_amount", amount.to_string()));
        }
        if let Some(amount) = self.max_amount {
            pairs.push(("max_amount", amount.to_string()));
        }

        pairs
    }

    /// Percent-encoded query string without the leading `?`
    pub fn query_string(&self) -> String {
        self.query_pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(&value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Rejected filter input
#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid amount '{0}'")]
    InvalidAmount(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inputs_are_dropped() {
        let inputs = FilterInputs {
            start_date: "2024-01-01".to_string(),
            ..Default::default()
        };

        let criteria = inputs.to_criteria().unwrap();
        assert_eq!(criteria.query_string(), "start_date=2024-01-01");
    }

    #[test]
    fn test_no_inputs_means_no_query() {
        let criteria = FilterInputs::default().to_criteria().unwrap();
        assert!(criteria.is_empty());
        assert_eq!(criteria.query_string(), "");
    }

    #[test]
    fn test_all_inputs_in_fixed_order() {
        let inputs = FilterInputs {
            transaction_type: "Bank Deposit".to_string(),
            start_date: "2024-01-01".to_string(),
            end_date: " 2024-02-01 ".to_string(),
            min_amount: "100".to_string(),
            max_amount: "2500.5".to_string(),
        };

        let criteria = inputs.to_criteria().unwrap();
        assert_eq!(
            criteria.query_string(),
            concat!(
                "type=Bank%20Deposit&start_date=2024-01-01&end_date=2024-02-01",
                "&min_amount=100&max_amount=2500.5"
            )
        );
    }

    #[test]
    fn test_type_label_is_encoded() {
        let criteria = FilterCriteria {
            transaction_type: Some("Internet/Voice Bundle Purchase".to_string()),
            ..Default::default()
        };
        assert_eq!(
            criteria.query_string(),
            "type=Internet%2FVoice%20Bundle%20Purchase"
        );
    }

    #[test]
    fn test_invalid_inputs_are_rejected() {
        let mut inputs = FilterInputs::default();
        inputs.set(FilterField::StartDate, "01/02/2024");
        assert_eq!(
            inputs.to_criteria(),
            Err(FilterError::InvalidDate("01/02/2024".to_string()))
        );

        let mut inputs = FilterInputs::default();
        inputs.set(FilterField::MaxAmount, "lots");
        assert_eq!(
            inputs.to_criteria(),
            Err(FilterError::InvalidAmount("lots".to_string()))
        );
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut inputs = FilterInputs::default();
        inputs.set(FilterField::Type, "Bank Transfer");
        inputs.set(FilterField::MinAmount, "5");
        inputs.clear();
        assert_eq!(inputs, FilterInputs::default());
    }
}
