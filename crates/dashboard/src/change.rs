use serde::{Deserialize, Serialize};

use invoicedash_core::InvoiceId;
use invoicedash_invoicing::InvoiceRecord;

/// Row-level notification from the realtime feed on the `invoices` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event_type", rename_all = "UPPERCASE")]
pub enum InvoiceChange {
    Insert { new: InvoiceRecord },
    Update { new: InvoiceRecord },
    Delete { id: InvoiceId },
}

impl InvoiceChange {
    pub fn invoice_id(&self) -> InvoiceId {
        match self {
            InvoiceChange::Insert { new } | InvoiceChange::Update { new } => new.id,
            InvoiceChange::Delete { id } => *id,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            InvoiceChange::Insert { .. } => "insert",
            InvoiceChange::Update { .. } => "update",
            InvoiceChange::Delete { .. } => "delete",
        }
    }
}
