//! Invoice rows as returned by the hosted store.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use invoicedash_core::{Entity, InvoiceId, LineItemId, PaymentInformationId, UserId};

use crate::amount::{AmountValue, CoercionError};
use crate::status::InvoiceStatus;

/// One billable line on an invoice.
///
/// `total_price` is stored independently and is not guaranteed to equal
/// `quantity * unit_price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceLineItem {
    pub id: LineItemId,
    pub item_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    #[serde(default)]
    pub sort_order: Option<i32>,
}

impl InvoiceLineItem {
    pub fn new(
        item_name: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
        total_price: Decimal,
    ) -> Self {
        Self {
            id: LineItemId::new(),
            item_name: item_name.into(),
            description: None,
            quantity,
            unit_price,
            total_price,
            sort_order: None,
        }
    }
}

impl Entity for InvoiceLineItem {
    type Id = LineItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Bank details printed on an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentInformation {
    pub id: PaymentInformationId,
    pub account_name: String,
    pub account_number: String,
    #[serde(default)]
    pub routing_number: Option<String>,
    pub bank_name: String,
    #[serde(default)]
    pub bank_address: Option<String>,
    #[serde(default)]
    pub is_default: Option<bool>,
}

/// An invoice row with its embedded line items and payment information.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceRecord {
    pub id: InvoiceId,
    /// Human-facing invoice number (`INV-001`).
    #[serde(rename = "invoice_id")]
    pub invoice_number: String,
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub status: InvoiceStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub generated_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub paid_date: Option<NaiveDate>,
    #[serde(default)]
    pub total_amount: Option<AmountValue>,
    #[serde(default)]
    pub recipient_name: String,
    #[serde(default)]
    pub recipient_email: Option<String>,
    #[serde(default)]
    pub recipient_phone: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub terms_and_conditions: Option<String>,
    #[serde(default)]
    pub invoice_items: Vec<InvoiceLineItem>,
    #[serde(default)]
    pub payment_information: Option<PaymentInformation>,
}

impl InvoiceRecord {
    /// Minimal record; everything besides number, status and amount is empty.
    pub fn new(
        invoice_number: impl Into<String>,
        status: impl Into<InvoiceStatus>,
        total_amount: impl Into<AmountValue>,
    ) -> Self {
        Self {
            id: InvoiceId::new(),
            invoice_number: invoice_number.into(),
            user_id: None,
            status: status.into(),
            created_at: None,
            generated_date: None,
            due_date: None,
            paid_date: None,
            total_amount: Some(total_amount.into()),
            recipient_name: String::new(),
            recipient_email: None,
            recipient_phone: None,
            notes: None,
            terms_and_conditions: None,
            invoice_items: Vec::new(),
            payment_information: None,
        }
    }

    /// The coerced `total_amount`.
    pub fn amount(&self) -> Result<Decimal, CoercionError> {
        self.total_amount
            .as_ref()
            .ok_or(CoercionError::Missing)?
            .coerce()
    }
}

impl Entity for InvoiceRecord {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn deserializes_store_row_with_items_and_payment() {
        let json = r#"{
            "id": "0190f0d4-6a7b-7c3e-8f00-000000000001",
            "invoice_id": "INV-001",
            "status": "unpaid",
            "created_at": "2025-09-01T10:00:00Z",
            "due_date": "2025-10-15",
            "total_amount": 10000,
            "recipient_name": "John Doe",
            "recipient_email": "john@example.com",
            "recipient_address": {"city": "Lagos"},
            "invoice_items": [
                {
                    "id": "0190f0d4-6a7b-7c3e-8f00-000000000002",
                    "item_name": "Web Development",
                    "quantity": 2,
                    "unit_price": 3000,
                    "total_price": 6000
                }
            ],
            "payment_information": {
                "id": "0190f0d4-6a7b-7c3e-8f00-000000000003",
                "account_name": "Acme Ltd",
                "account_number": "0123456789",
                "bank_name": "First Bank"
            }
        }"#;

        let record: InvoiceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.invoice_number, "INV-001");
        assert_eq!(record.status, InvoiceStatus::Unpaid);
        assert_eq!(record.amount().unwrap(), dec!(10000));
        assert_eq!(record.due_date, NaiveDate::from_ymd_opt(2025, 10, 15));
        assert_eq!(record.invoice_items.len(), 1);
        assert_eq!(record.invoice_items[0].unit_price, dec!(3000));
        assert_eq!(
            record.payment_information.as_ref().map(|p| p.bank_name.as_str()),
            Some("First Bank")
        );
    }

    #[test]
    fn numeric_columns_keep_full_precision() {
        let json = r#"{
            "id": "0190f0d4-6a7b-7c3e-8f00-000000000001",
            "invoice_id": "INV-003",
            "status": "paid",
            "total_amount": 12345678901234567.89,
            "invoice_items": [
                {
                    "id": "0190f0d4-6a7b-7c3e-8f00-000000000002",
                    "item_name": "Retainer",
                    "quantity": 1,
                    "unit_price": 12345678901234567.89,
                    "total_price": 12345678901234567.89
                }
            ]
        }"#;

        let record: InvoiceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.amount().unwrap(), dec!(12345678901234567.89));
        assert_eq!(record.invoice_items[0].unit_price, dec!(12345678901234567.89));
    }

    #[test]
    fn null_or_missing_amount_is_reported_as_missing() {
        let json = r#"{
            "id": "0190f0d4-6a7b-7c3e-8f00-000000000001",
            "invoice_id": "INV-002",
            "status": "draft",
            "total_amount": null
        }"#;
        let record: InvoiceRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.amount(), Err(CoercionError::Missing));
        assert!(record.invoice_items.is_empty());
    }
}
