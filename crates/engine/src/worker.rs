//! The unit of concurrent execution
//!
//! An `InsertionWorker` owns exactly one candidate record and executes it
//! end-to-end: inspect the validator's verdict, run the store insert inside
//! its own transaction, convert whatever happened into exactly one
//! [`Outcome`], and report it to the collector.
//!
//! Data failures never cross the worker boundary. The only errors a worker
//! returns are infrastructure errors: the store is broken, not the record,
//! and the run itself must stop.

use crate::collector::ResultCollector;
use crate::outcome::Outcome;
use std::sync::Arc;
use tristore_core::{Entity, Error, Result};
use tristore_storage::TableStore;

/// One candidate record bound to its store, collector, and batch ordinal.
pub struct InsertionWorker<R: Entity> {
    ordinal: u32,
    record: R,
    store: Arc<TableStore<R>>,
    collector: Arc<ResultCollector>,
}

impl<R: Entity> InsertionWorker<R> {
    /// Bind a record to its store and collector.
    ///
    /// `ordinal` is 1-based and unique within this record's batch only;
    /// ordinals repeat across kinds.
    pub fn new(
        ordinal: u32,
        record: R,
        store: Arc<TableStore<R>>,
        collector: Arc<ResultCollector>,
    ) -> Self {
        Self {
            ordinal,
            record,
            store,
            collector,
        }
    }

    /// This worker's 1-based ordinal within its batch.
    pub fn ordinal(&self) -> u32 {
        self.ordinal
    }

    /// Execute the record end-to-end and report exactly one outcome.
    ///
    /// Never reports twice, never retries, and never panics across this
    /// boundary; an `Err` here means the store itself is unreachable.
    pub fn run(self) -> Result<()> {
        let outcome = self.execute()?;
        self.collector.record(R::KIND, outcome);
        Ok(())
    }

    /// Validate and insert, converting data errors into a failed outcome.
    fn execute(&self) -> Result<Outcome> {
        // Inspect the validator's verdict explicitly; a record that cannot
        // pass is not sent to the store at all.
        let violations = self.record.validate();
        if !violations.is_empty() {
            let err = Error::validation(R::KIND, self.record.id(), &violations);
            tracing::debug!(
                kind = %R::KIND,
                id = self.record.id(),
                worker = self.ordinal,
                %err,
                "record rejected by validation"
            );
            return Ok(Outcome::failed(
                self.ordinal,
                self.record.clone().into_record(),
                err.to_string(),
            ));
        }

        // The store re-validates inside the transaction as the
        // authoritative gate, then commits or rolls back atomically.
        match self.store.insert(self.record.clone()) {
            Ok(persisted) => {
                tracing::debug!(
                    kind = %R::KIND,
                    id = persisted.id(),
                    worker = self.ordinal,
                    "record committed"
                );
                Ok(Outcome::success(self.ordinal, persisted.into_record()))
            }
            Err(err) if err.is_data_error() => {
                tracing::debug!(
                    kind = %R::KIND,
                    id = self.record.id(),
                    worker = self.ordinal,
                    %err,
                    "record rejected by store"
                );
                Ok(Outcome::failed(
                    self.ordinal,
                    self.record.clone().into_record(),
                    err.to_string(),
                ))
            }
            // Store unreachable: not this record's fault, abort the run.
            Err(fatal) => Err(fatal),
        }
    }
}
