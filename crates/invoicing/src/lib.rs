//! Invoicing domain module.
//!
//! Pure, deterministic computations behind the invoice dashboard: per-status
//! aggregation of invoice rows, per-invoice totals, and the display helpers
//! that render them. No IO, no HTTP, no storage.

pub mod amount;
pub mod format;
pub mod model;
pub mod stats;
pub mod status;
pub mod totals;

pub use amount::{AmountValue, CoercionError};
pub use format::{
    AmountParts, format_currency, format_long_date, format_ordinal_date, initials, split_amount,
};
pub use model::{InvoiceLineItem, InvoiceRecord, PaymentInformation};
pub use stats::{AggregationReport, CoercionAnomaly, InvoiceStats, StatusSummary, aggregate, aggregate_report};
pub use status::InvoiceStatus;
pub use totals::{DEFAULT_DISCOUNT_RATE, InvoiceTotals, compute_totals, compute_totals_with_rate};
