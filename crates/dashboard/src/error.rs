use thiserror::Error;

use invoicedash_core::DomainError;

/// Failure reading invoice rows from the backing store.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    #[error("invoice source lock poisoned")]
    Poisoned,

    #[error("invoice source unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("failed to spawn dashboard worker: {0}")]
    Spawn(#[from] std::io::Error),
}
