//! `invoicedash-core` — shared domain building blocks.
//!
//! Pure primitives only: typed identifiers, the domain error model and the
//! entity/value-object markers used by the invoicing and dashboard crates.

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{InvoiceId, LineItemId, PaymentInformationId, UserId};
pub use value_object::ValueObject;
