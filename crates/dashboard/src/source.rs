//! Where invoice rows come from.
//!
//! In production this is the hosted store behind a client library; the
//! in-memory implementation stands in for it in tests and the CLI.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use invoicedash_core::{Entity, InvoiceId};
use invoicedash_invoicing::InvoiceRecord;

use crate::change::InvoiceChange;
use crate::error::SourceError;

/// Read access to the current invoice rows.
pub trait InvoiceSource: Send + Sync {
    /// Every invoice row, items and payment information included.
    fn list(&self) -> Result<Vec<InvoiceRecord>, SourceError>;

    fn get(&self, id: &InvoiceId) -> Result<Option<InvoiceRecord>, SourceError>;

    /// The `limit` most recently created invoices, newest first.
    fn recent(&self, limit: usize) -> Result<Vec<InvoiceRecord>, SourceError> {
        let mut records = self.list()?;
        records.sort_by(newest_first);
        records.truncate(limit);
        Ok(records)
    }
}

impl<S> InvoiceSource for Arc<S>
where
    S: InvoiceSource + ?Sized,
{
    fn list(&self) -> Result<Vec<InvoiceRecord>, SourceError> {
        (**self).list()
    }

    fn get(&self, id: &InvoiceId) -> Result<Option<InvoiceRecord>, SourceError> {
        (**self).get(id)
    }

    fn recent(&self, limit: usize) -> Result<Vec<InvoiceRecord>, SourceError> {
        (**self).recent(limit)
    }
}

/// Descending `created_at`; rows without a timestamp sort last.
pub fn newest_first(a: &InvoiceRecord, b: &InvoiceRecord) -> Ordering {
    b.created_at
        .cmp(&a.created_at)
        .then_with(|| b.invoice_number.cmp(&a.invoice_number))
        .then_with(|| b.id.cmp(&a.id))
}

/// In-memory invoice table for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryInvoiceSource {
    inner: RwLock<HashMap<InvoiceId, InvoiceRecord>>,
}

impl InMemoryInvoiceSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: impl IntoIterator<Item = InvoiceRecord>) -> Self {
        let inner = records
            .into_iter()
            .map(|r| (*r.id(), r))
            .collect::<HashMap<_, _>>();
        Self {
            inner: RwLock::new(inner),
        }
    }

    pub fn upsert(&self, record: InvoiceRecord) -> Result<(), SourceError> {
        let mut map = self.inner.write().map_err(|_| SourceError::Poisoned)?;
        map.insert(*record.id(), record);
        Ok(())
    }

    pub fn remove(&self, id: &InvoiceId) -> Result<Option<InvoiceRecord>, SourceError> {
        let mut map = self.inner.write().map_err(|_| SourceError::Poisoned)?;
        Ok(map.remove(id))
    }

    /// Write a realtime change into the table (inserts and updates upsert).
    pub fn apply_change(&self, change: &InvoiceChange) -> Result<(), SourceError> {
        match change {
            InvoiceChange::Insert { new } | InvoiceChange::Update { new } => self.upsert(new.clone()),
            InvoiceChange::Delete { id } => self.remove(id).map(|_| ()),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl InvoiceSource for InMemoryInvoiceSource {
    fn list(&self) -> Result<Vec<InvoiceRecord>, SourceError> {
        let map = self.inner.read().map_err(|_| SourceError::Poisoned)?;
        let mut records: Vec<_> = map.values().cloned().collect();
        records.sort_by_key(|r| r.id);
        Ok(records)
    }

    fn get(&self, id: &InvoiceId) -> Result<Option<InvoiceRecord>, SourceError> {
        let map = self.inner.read().map_err(|_| SourceError::Poisoned)?;
        Ok(map.get(id).cloned())
    }
}
