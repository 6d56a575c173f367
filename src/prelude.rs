//! Convenient imports for Tristore.
//!
//! This module re-exports the most commonly used types so you can get
//! started with a single import:
//!
//! ```ignore
//! use tristore::prelude::*;
//!
//! let db = Tristore::new();
//! let report = db.run(BatchSet::demo(), RunOptions::default())?;
//! ```

// Main entry point
pub use crate::system::Tristore;

// Error handling
pub use tristore_core::{Error, Result};

// Records and kinds
pub use tristore_core::{Entity, EntityKind, OrderRecord, ProductRecord, Record, RecordId, UserRecord};

// Run surface
pub use tristore_engine::{BatchSet, Outcome, OutcomeStatus, RunOptions, RunReport};

// Stores
pub use tristore_storage::{StoreSet, TableStore};
