//! # Tristore
//!
//! Concurrent validated insertion across three isolated record stores.
//!
//! Tristore inserts a fixed batch of candidate records — users, products,
//! orders — with one concurrent worker per record. Each worker validates its
//! record, commits it through its own scoped transaction against that
//! kind's isolated store, and reports exactly one outcome. Failures stay
//! with the record that caused them; the run always finishes with a
//! deterministic report sorted by record id.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tristore::prelude::*;
//!
//! // Three fresh in-memory stores
//! let db = Tristore::new();
//!
//! // Run the built-in demo batch, clearing first
//! let report = db.run(BatchSet::demo(), RunOptions { clear_first: true })?;
//! println!("{}", report.render());
//!
//! // Inspect a store directly
//! assert!(db.users().contains(1));
//! ```
//!
//! ## Pieces
//!
//! - [`Tristore`] - entry point owning the three stores
//! - [`BatchSet`] - the candidate batches for one run
//! - [`RunReport`] - the deterministic, sorted result
//! - [`TableStore`] - one isolated transactional table
//!
//! Data errors (validation, constraints) become FAILED outcome lines in the
//! report. Infrastructure errors (a closed store) abort the run and are the
//! only failure the caller sees as an `Err`.

#![warn(missing_docs)]

mod system;

pub mod prelude;

// Re-export main entry point
pub use system::Tristore;

// Re-export the engine surface
pub use tristore_engine::{
    BatchSet, InsertionWorker, Orchestrator, Outcome, OutcomeStatus, Phase, ReportSection,
    ResultCollector, RunOptions, RunReport,
};

// Re-export core types and errors
pub use tristore_core::{
    Entity, EntityKind, Error, OrderRecord, ProductRecord, Record, RecordId, Result, UserRecord,
    Violation,
};

// Re-export storage handles
pub use tristore_storage::{StoreSet, TableStore};
