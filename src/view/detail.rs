//! Transaction detail modal

use serde::Serialize;

use super::format::{format_amount, format_date_time};
use crate::config::DisplayConfig;
use crate::model::{present, Transaction};

/// Fields the detail view can show, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DetailField {
    TransactionId,
    Type,
    Amount,
    Fee,
    DateTime,
    Sender,
    Recipient,
    PhoneNumber,
    AgentName,
    AgentPhone,
    BankName,
    Reference,
    MeterNumber,
    BundleType,
    BundleSize,
    ValidityPeriod,
    RawMessage,
}

impl DetailField {
    pub const ALL: [DetailField; 17] = [
        DetailField::TransactionId,
        DetailField::Type,
        DetailField::Amount,
        DetailField::Fee,
        DetailField::DateTime,
        DetailField::Sender,
        DetailField::Recipient,
        DetailField::PhoneNumber,
        DetailField::AgentName,
        DetailField::AgentPhone,
        DetailField::BankName,
        DetailField::Reference,
        DetailField::MeterNumber,
        DetailField::BundleType,
        DetailField::BundleSize,
        DetailField::ValidityPeriod,
        DetailField::RawMessage,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DetailField::TransactionId => "Transaction ID",
            DetailField::Type => "Type",
            DetailField::Amount => "Amount",
            DetailField::Fee => "Fee",
            DetailField::DateTime => "Date & Time",
            DetailField::Sender => "Sender",
            DetailField::Recipient => "Recipient",
            DetailField::PhoneNumber => "Phone Number",
            DetailField::AgentName => "Agent Name",
            DetailField::AgentPhone => "Agent Phone",
            DetailField::BankName => "Bank Name",
            DetailField::Reference => "Reference",
            DetailField::MeterNumber => "Meter Number",
            DetailField::BundleType => "Bundle Type",
            DetailField::BundleSize => "Bundle Size",
            DetailField::ValidityPeriod => "Validity Period",
            DetailField::RawMessage => "Raw Message",
        }
    }

    /// Display value, `None` when the field should be left out
    ///
    /// Amount, fee and timestamp always render (as zero or "N/A").
    pub fn value(&self, tx: &Transaction, display: &DisplayConfig) -> Option<String> {
        let text = |v: &Option<String>| present(v).map(str::to_string);

        match self {
            DetailField::TransactionId => text(&tx.transaction_id),
            DetailField::Type => {
                Some(tx.transaction_type.label().to_string()).filter(|s| !s.is_empty())
            }
            DetailField::Amount => Some(format_amount(tx.amount, display)),
            DetailField::Fee => Some(format_amount(tx.fee, display)),
            DetailField::DateTime => Some(format_date_time(tx.date_time.as_deref(), display)),
            DetailField::Sender => text(&tx.sender),
            DetailField::Recipient => text(&tx.recipient),
            DetailField::PhoneNumber => text(&tx.phone_number),
            DetailField::AgentName => text(&tx.agent_name),
            DetailField::AgentPhone => text(&tx.agent_phone),
            DetailField::BankName => text(&tx.bank_name),
            DetailField::Reference => text(&tx.reference),
            DetailField::MeterNumber => text(&tx.meter_number),
            DetailField::BundleType => text(&tx.bundle_type),
            DetailField::BundleSize => text(&tx.bundle_size),
            DetailField::ValidityPeriod => text(&tx.validity_period),
            DetailField::RawMessage => text(&tx.raw_message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailItem {
    pub field: DetailField,
    pub label: &'static str,
    pub value: String,
}

/// Contents of the detail modal for one transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub id: i64,
    pub items: Vec<DetailItem>,
}

impl DetailView {
    pub fn from_transaction(tx: &Transaction, display: &DisplayConfig) -> Self {
        let items = DetailField::ALL
            .iter()
            .filter_map(|field| {
                field.value(tx, display).map(|value| DetailItem {
                    field: *field,
                    label: field.label(),
                    value,
                })
            })
            .collect();

        Self { id: tx.id, items }
    }

    pub fn get(&self, field: DetailField) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.field == field)
            .map(|item| item.value.as_str())
    }
}

/// Visibility plus last-rendered contents
///
/// Closing only hides; contents stay until the next open replaces them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalState {
    visible: bool,
    content: Option<DetailView>,
}

impl ModalState {
    pub fn open(&mut self, content: DetailView) {
        self.content = Some(content);
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn content(&self) -> Option<&DetailView> {
        self.content.as_ref()
    }
}
