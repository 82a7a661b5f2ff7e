//! Per-status rollup of invoice rows (summary cards).
//!
//! Recomputed from the full record set on every fetch and every realtime
//! notification; nothing here is incremental.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use invoicedash_core::{InvoiceId, ValueObject};

use crate::amount::{AmountValue, CoercionError};
use crate::model::InvoiceRecord;
use crate::status::InvoiceStatus;

/// Count and summed amount of the invoices in one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusSummary {
    pub count: u64,
    pub total: Decimal,
}

impl ValueObject for StatusSummary {}

/// Status -> summary mapping.
///
/// Only statuses present in the input have an entry; [`InvoiceStats::get`]
/// reads an absent status as zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceStats {
    by_status: BTreeMap<InvoiceStatus, StatusSummary>,
}

impl ValueObject for InvoiceStats {}

impl InvoiceStats {
    pub fn get(&self, status: &InvoiceStatus) -> StatusSummary {
        self.by_status.get(status).copied().unwrap_or_default()
    }

    pub fn contains(&self, status: &InvoiceStatus) -> bool {
        self.by_status.contains_key(status)
    }

    pub fn len(&self) -> usize {
        self.by_status.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_status.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&InvoiceStatus, &StatusSummary)> {
        self.by_status.iter()
    }

    /// Sum of counts over every status.
    pub fn total_count(&self) -> u64 {
        self.by_status.values().map(|s| s.count).sum()
    }

    /// Sum of totals over every status.
    pub fn grand_total(&self) -> Decimal {
        self.by_status
            .values()
            .fold(Decimal::ZERO, |acc, s| acc.saturating_add(s.total))
    }
}

/// A row whose amount could not be summed. It still counted toward its status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoercionAnomaly {
    pub invoice_id: InvoiceId,
    pub invoice_number: String,
    pub status: InvoiceStatus,
    pub raw: Option<AmountValue>,
    pub reason: CoercionError,
}

/// Aggregation output plus the rows that contributed zero.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregationReport {
    pub stats: InvoiceStats,
    pub anomalies: Vec<CoercionAnomaly>,
}

/// Roll invoice rows up into per-status counts and totals.
pub fn aggregate(records: &[InvoiceRecord]) -> InvoiceStats {
    aggregate_report(records).stats
}

/// Like [`aggregate`], also returning every amount that failed coercion.
///
/// A bad amount counts as zero for its status total but the row is still
/// counted, and one `warn!` is emitted per anomaly.
pub fn aggregate_report(records: &[InvoiceRecord]) -> AggregationReport {
    let mut by_status: BTreeMap<InvoiceStatus, StatusSummary> = BTreeMap::new();
    let mut anomalies = Vec::new();

    for record in records {
        let summary = by_status.entry(record.status.clone()).or_default();
        summary.count += 1;

        let outcome = record.amount().and_then(|amount| {
            summary
                .total
                .checked_add(amount)
                .ok_or_else(|| CoercionError::OutOfRange(format!("{} + {}", summary.total, amount)))
        });

        match outcome {
            Ok(total) => summary.total = total,
            Err(reason) => {
                warn!(
                    invoice_id = %record.id,
                    invoice_number = %record.invoice_number,
                    status = %record.status,
                    error = %reason,
                    "invoice amount not summable; counted as zero"
                );
                anomalies.push(CoercionAnomaly {
                    invoice_id: record.id,
                    invoice_number: record.invoice_number.clone(),
                    status: record.status.clone(),
                    raw: record.total_amount.clone(),
                    reason,
                });
            }
        }
    }

    AggregationReport {
        stats: InvoiceStats { by_status },
        anomalies,
    }
}
