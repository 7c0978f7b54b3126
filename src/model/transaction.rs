//! Transaction records
//!
//! A transaction as returned by the API. Every field other than the
//! numeric id and the type label is optional on the wire.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a mobile-money event
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TransactionType {
    IncomingMoney,
    PaymentToCodeHolder,
    TransferToMobileNumber,
    BankDeposit,
    AirtimeBillPayment,
    CashPowerBillPayment,
    ThirdPartyTransaction,
    AgentWithdrawal,
    BankTransfer,
    BundlePurchase,
    /// Any label the client does not know about
    Other(String),
}

impl TransactionType {
    /// All known types, in the order the backend classifies them
    pub const KNOWN: [TransactionType; 10] = [
        TransactionType::IncomingMoney,
        TransactionType::PaymentToCodeHolder,
        TransactionType::TransferToMobileNumber,
        TransactionType::BankDeposit,
        TransactionType::AirtimeBillPayment,
        TransactionType::CashPowerBillPayment,
        TransactionType::ThirdPartyTransaction,
        TransactionType::AgentWithdrawal,
        TransactionType::BankTransfer,
        TransactionType::BundlePurchase,
    ];

    /// Wire label of this type
    pub fn label(&self) -> &str {
        match self {
            TransactionType::IncomingMoney => "Incoming Money",
            TransactionType::PaymentToCodeHolder => "Payment to Code Holder",
            TransactionType::TransferToMobileNumber => "Transfer to Mobile Number",
            TransactionType::BankDeposit => "Bank Deposit",
            TransactionType::AirtimeBillPayment => "Airtime Bill Payment",
            TransactionType::CashPowerBillPayment => "Cash Power Bill Payment",
            TransactionType::ThirdPartyTransaction => "Third Party Transaction",
            TransactionType::AgentWithdrawal => "Agent Withdrawal",
            TransactionType::BankTransfer => "Bank Transfer",
            TransactionType::BundlePurchase => "Internet/Voice Bundle Purchase",
            TransactionType::Other(label) => label,
        }
    }

    /// Whether this is one of the known types
    pub fn is_known(&self) -> bool {
        !matches!(self, TransactionType::Other(_))
    }
}

impl From<String> for TransactionType {
    fn from(label: String) -> Self {
        TransactionType::KNOWN
            .iter()
            .find(|known| known.label() == label)
            .cloned()
            .unwrap_or(TransactionType::Other(label))
    }
}

impl From<&str> for TransactionType {
    fn from(label: &str) -> Self {
        TransactionType::from(label.to_string())
    }
}

impl From<TransactionType> for String {
    fn from(kind: TransactionType) -> Self {
        match kind {
            TransactionType::Other(label) => label,
            known => known.label().to_string(),
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(default)]
    pub transaction_id: Option<String>,
    pub transaction_type: TransactionType,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub fee: Option<f64>,
    #[serde(default)]
    pub date_time: Option<String>,
    #[serde(default)]
    pub sender: Option<String>,
    #[serde(default)]
    pub recipient: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub agent_name: Option<String>,
    #[serde(default)]
    pub agent_phone: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub meter_number: Option<String>,
    #[serde(default)]
    pub bundle_type: Option<String>,
    #[serde(default)]
    pub bundle_size: Option<String>,
    #[serde(default)]
    pub validity_period: Option<String>,
    #[serde(default)]
    pub raw_message: Option<String>,
}

impl Transaction {
    /// Create a transaction with only the required fields set
    pub fn new(id: i64, transaction_type: impl Into<TransactionType>) -> Self {
        Self {
            id,
            transaction_id: None,
            transaction_type: transaction_type.into(),
            amount: None,
            fee: None,
            date_time: None,
            sender: None,
            recipient: None,
            phone_number: None,
            bank_name: None,
            agent_name: None,
            agent_phone: None,
            reference: None,
            meter_number: None,
            bundle_type: None,
            bundle_size: None,
            validity_period: None,
            raw_message: None,
        }
    }

    /// Builder: set amount
    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Builder: set timestamp
    pub fn at(mut self, date_time: impl Into<String>) -> Self {
        self.date_time = Some(date_time.into());
        self
    }

    /// Builder: set sender
    pub fn sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(sender.into());
        self
    }

    /// Builder: set recipient
    pub fn recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = Some(recipient.into());
        self
    }
}

/// Treat `None` and empty strings alike
pub(crate) fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
