//! Main entry point for Tristore.
//!
//! This module provides the `Tristore` struct: three isolated in-memory
//! stores plus the orchestrator that runs insertion batches against them.

use std::sync::Arc;
use tristore_core::{OrderRecord, ProductRecord, Result, UserRecord};
use tristore_engine::{BatchSet, Orchestrator, RunOptions, RunReport};
use tristore_storage::{StoreSet, TableStore};

/// The Tristore system: three isolated stores and a run entry point.
///
/// Stores are in-memory and live as long as this value; every run executes
/// against the same three tables, so successive runs observe earlier
/// commits unless `clear_first` is set.
///
/// # Example
///
/// ```ignore
/// use tristore::prelude::*;
///
/// let db = Tristore::new();
/// let report = db.run(BatchSet::demo(), RunOptions::default())?;
/// assert_eq!(report.total_records(), 30);
/// ```
pub struct Tristore {
    stores: Arc<StoreSet>,
}

impl Tristore {
    /// Create a system with three fresh, empty stores.
    pub fn new() -> Self {
        Self {
            stores: Arc::new(StoreSet::new()),
        }
    }

    /// The users store.
    pub fn users(&self) -> &TableStore<UserRecord> {
        self.stores.users()
    }

    /// The products store.
    pub fn products(&self) -> &TableStore<ProductRecord> {
        self.stores.products()
    }

    /// The orders store.
    pub fn orders(&self) -> &TableStore<OrderRecord> {
        self.stores.orders()
    }

    /// The underlying store set, for callers that drive the orchestrator
    /// themselves.
    pub fn stores(&self) -> &Arc<StoreSet> {
        &self.stores
    }

    /// Execute one insertion run and return its report.
    ///
    /// Spawns one worker per candidate record across all three batches,
    /// waits for every worker, and returns the deterministic report. Only
    /// infrastructure failures return `Err`; rejected records are FAILED
    /// lines in the report.
    pub fn run(&self, batches: BatchSet, options: RunOptions) -> Result<RunReport> {
        Orchestrator::new(Arc::clone(&self.stores)).run(batches, options)
    }

    /// Mark all three stores unreachable.
    ///
    /// Subsequent runs fail with an infrastructure error. Used to model the
    /// backend disappearing; there is no reopen.
    pub fn close(&self) {
        self.stores.close_all();
    }
}

impl Default for Tristore {
    fn default() -> Self {
        Self::new()
    }
}
