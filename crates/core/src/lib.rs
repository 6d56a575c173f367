//! # tristore-core
//!
//! Record types, validation rules, and the error taxonomy shared by the
//! storage and engine crates.
//!
//! The three entity kinds (users, products, orders) each get a record type
//! implementing the [`Entity`] trait; the trait is the only thing the rest
//! of the system needs to know about a kind. Validation is pure and
//! aggregating: [`validate`] returns every broken rule at once, and callers
//! inspect the list rather than catching an unwind.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod types;
pub mod validate;

pub use error::{Error, Result};
pub use types::{Entity, EntityKind, OrderRecord, ProductRecord, Record, RecordId, UserRecord};
pub use validate::{combined_message, validate_order, validate_product, validate_user, Violation};
