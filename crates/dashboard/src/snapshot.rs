//! What the invoice page renders: summary cards plus the recent-invoices list.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use invoicedash_core::InvoiceId;
use invoicedash_invoicing::{
    AmountParts, CoercionAnomaly, InvoiceRecord, InvoiceStats, InvoiceStatus, aggregate_report,
    format_currency, format_ordinal_date, split_amount,
};

use crate::config::DashboardConfig;
use crate::error::DashboardError;
use crate::source::InvoiceSource;

/// One summary card (`TOTAL PAID`, count badge, amount).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverviewCard {
    pub status: InvoiceStatus,
    pub title: String,
    pub count: u64,
    pub total: Decimal,
    pub amount: AmountParts,
}

impl OverviewCard {
    pub fn for_status(stats: &InvoiceStats, status: &InvoiceStatus) -> Self {
        let summary = stats.get(status);
        Self {
            status: status.clone(),
            title: status.overview_title(),
            count: summary.count,
            total: summary.total,
            amount: split_amount(summary.total),
        }
    }
}

/// Cards for the four known statuses in display order. A status with no
/// invoices gets a zero card rather than being left out.
pub fn overview_cards(stats: &InvoiceStats) -> Vec<OverviewCard> {
    InvoiceStatus::KNOWN
        .iter()
        .map(|status| OverviewCard::for_status(stats, status))
        .collect()
}

/// A row in the recent-invoices list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecentInvoice {
    pub id: InvoiceId,
    pub invoice_number: String,
    pub due_date: Option<NaiveDate>,
    pub due_date_label: Option<String>,
    /// `None` when the stored amount is not numeric.
    pub amount: Option<String>,
    pub status: InvoiceStatus,
    pub badge: String,
}

impl RecentInvoice {
    pub fn from_record(record: &InvoiceRecord) -> Self {
        Self {
            id: record.id,
            invoice_number: record.invoice_number.clone(),
            due_date: record.due_date,
            due_date_label: record.due_date.map(format_ordinal_date),
            amount: record.amount().ok().map(format_currency),
            status: record.status.clone(),
            badge: record.status.badge(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub stats: InvoiceStats,
    pub cards: Vec<OverviewCard>,
    pub recent: Vec<RecentInvoice>,
    pub anomalies: Vec<CoercionAnomaly>,
}

impl DashboardSnapshot {
    /// Build from the full row set and the already-selected recent rows.
    pub fn build(all: &[InvoiceRecord], recent: &[InvoiceRecord]) -> Self {
        let report = aggregate_report(all);
        Self {
            cards: overview_cards(&report.stats),
            stats: report.stats,
            recent: recent.iter().map(RecentInvoice::from_record).collect(),
            anomalies: report.anomalies,
        }
    }

    /// Fetch both views from `source`, the same pair of reads the page makes
    /// on load and after every change notification.
    pub fn load<S>(source: &S, config: &DashboardConfig) -> Result<Self, DashboardError>
    where
        S: InvoiceSource + ?Sized,
    {
        let all = source.list()?;
        let recent = source.recent(config.recent_limit)?;
        Ok(Self::build(&all, &recent))
    }
}
