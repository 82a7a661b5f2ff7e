//! `invoicedash-dashboard` — the invoice page's view of its collaborators.
//!
//! Models the data source and the realtime change feed, and turns their
//! output into the snapshot (summary cards + recent invoices) and the
//! per-invoice details the page renders.

pub mod change;
pub mod cli;
pub mod config;
pub mod details;
pub mod error;
pub mod live;
pub mod snapshot;
pub mod source;

pub use change::InvoiceChange;
pub use cli::Cli;
pub use config::DashboardConfig;
pub use details::{InvoiceDetails, Reminder, load_details};
pub use error::{DashboardError, SourceError};
pub use live::LiveDashboard;
pub use snapshot::{DashboardSnapshot, OverviewCard, RecentInvoice, overview_cards};
pub use source::{InMemoryInvoiceSource, InvoiceSource};
