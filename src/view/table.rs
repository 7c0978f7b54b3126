//! Transaction table rows and the type filter
//!
//! Pure mapping from transactions to display records.

use serde::Serialize;
use std::collections::HashSet;

use super::format::{format_amount, format_date_time, NOT_AVAILABLE};
use crate::config::DisplayConfig;
use crate::model::{present, Transaction, TransactionType};

/// Badge style for a transaction type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TypeStyle {
    Incoming,
    Payment,
    Transfer,
    Deposit,
    ThirdParty,
    Withdrawal,
    Bundle,
}

impl TypeStyle {
    /// CSS class name used by the web shell
    pub fn css_class(&self) -> &'static str {
        match self {
            TypeStyle::Incoming => "type-incoming",
            TypeStyle::Payment => "type-payment",
            TypeStyle::Transfer => "type-transfer",
            TypeStyle::Deposit => "type-deposit",
            TypeStyle::ThirdParty => "type-third-party",
            TypeStyle::Withdrawal => "type-withdrawal",
            TypeStyle::Bundle => "type-bundle",
        }
    }
}

/// Style for a type; unknown types get the payment style
pub fn type_style(kind: &TransactionType) -> TypeStyle {
    match kind {
        TransactionType::IncomingMoney => TypeStyle::Incoming,
        TransactionType::PaymentToCodeHolder
        | TransactionType::AirtimeBillPayment
        | TransactionType::CashPowerBillPayment => TypeStyle::Payment,
        TransactionType::TransferToMobileNumber | TransactionType::BankTransfer => {
            TypeStyle::Transfer
        }
        TransactionType::BankDeposit => TypeStyle::Deposit,
        TransactionType::ThirdPartyTransaction => TypeStyle::ThirdParty,
        TransactionType::AgentWithdrawal => TypeStyle::Withdrawal,
        TransactionType::BundlePurchase => TypeStyle::Bundle,
        TransactionType::Other(_) => TypeStyle::Payment,
    }
}

/// One-line counterparty summary, first present field wins
pub fn detail_summary(tx: &Transaction) -> String {
    if let Some(sender) = present(&tx.sender) {
        return format!("From: {}", sender);
    }
    if let Some(recipient) = present(&tx.recipient) {
        return format!("To: {}", recipient);
    }
    if let Some(phone) = present(&tx.phone_number) {
        return format!("To: {}", phone);
    }
    if let Some(bank) = present(&tx.bank_name) {
        return format!("Bank: {}", bank);
    }
    if let Some(agent) = present(&tx.agent_name) {
        return format!("Agent: {}", agent);
    }
    if let Some(bundle) = present(&tx.bundle_type) {
        let size = present(&tx.bundle_size).unwrap_or(NOT_AVAILABLE);
        return format!("{}: {}", bundle, size);
    }
    NOT_AVAILABLE.to_string()
}

/// A rendered table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRow {
    /// Key for the detail action
    pub id: i64,
    pub date: String,
    pub type_label: String,
    pub type_style: TypeStyle,
    pub amount: String,
    pub details: String,
}

impl TransactionRow {
    pub fn from_transaction(tx: &Transaction, display: &DisplayConfig) -> Self {
        Self {
            id: tx.id,
            date: format_date_time(tx.date_time.as_deref(), display),
            type_label: tx.transaction_type.label().to_string(),
            type_style: type_style(&tx.transaction_type),
            amount: format_amount(tx.amount, display),
            details: detail_summary(tx),
        }
    }
}

/// Rows for every transaction, in list order
pub fn transaction_rows(
    transactions: &[Transaction],
    display: &DisplayConfig,
) -> Vec<TransactionRow> {
    transactions
        .iter()
        .map(|tx| TransactionRow::from_transaction(tx, display))
        .collect()
}

/// One entry of the type dropdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

pub const ALL_TYPES_LABEL: &str = "All Transaction Types";

/// "All" followed by each distinct type in first-appearance order
pub fn type_filter_options(transactions: &[Transaction]) -> Vec<FilterOption> {
    let mut seen = HashSet::new();
    let mut options = vec![FilterOption {
        value: String::new(),
        label: ALL_TYPES_LABEL.to_string(),
    }];

    for tx in transactions {
        let label = tx.transaction_type.label();
        if seen.insert(label) {
            options.push(FilterOption {
                value: label.to_string(),
                label: label.to_string(),
            });
        }
    }

    options
}
