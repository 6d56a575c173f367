//! Concurrency-safe outcome aggregation
//!
//! One `ResultCollector` exists per run, owned by the orchestrator and
//! shared with every worker through an `Arc`. Appends are serialized by a
//! per-kind mutex held only for the push itself; validation and insertion
//! work happen outside the lock. There is no ambient or global collector
//! state: when the run's report has been built, the collector is dropped.

use crate::outcome::Outcome;
use parking_lot::Mutex;
use tristore_core::EntityKind;

/// Lock-protected, append-only sink for worker outcomes.
pub struct ResultCollector {
    users: Mutex<Vec<Outcome>>,
    products: Mutex<Vec<Outcome>>,
    orders: Mutex<Vec<Outcome>>,
}

impl ResultCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a collector pre-sized for `per_kind` outcomes per kind.
    pub fn with_capacity(per_kind: usize) -> Self {
        Self {
            users: Mutex::new(Vec::with_capacity(per_kind)),
            products: Mutex::new(Vec::with_capacity(per_kind)),
            orders: Mutex::new(Vec::with_capacity(per_kind)),
        }
    }

    fn slot(&self, kind: EntityKind) -> &Mutex<Vec<Outcome>> {
        match kind {
            EntityKind::Users => &self.users,
            EntityKind::Products => &self.products,
            EntityKind::Orders => &self.orders,
        }
    }

    /// Append one outcome for `kind`.
    ///
    /// Thread-safe; the lock is held only for the duration of the push, so
    /// concurrent writers cannot lose or corrupt an outcome.
    pub fn record(&self, kind: EntityKind, outcome: Outcome) {
        self.slot(kind).lock().push(outcome);
    }

    /// Outcomes for `kind`, sorted by record id ascending.
    ///
    /// The sort is deterministic regardless of completion order: ties on id
    /// (duplicate-id candidates) break by worker ordinal, the original
    /// enumeration order within the batch. Only meaningful once every
    /// worker for the run has joined.
    pub fn snapshot(&self, kind: EntityKind) -> Vec<Outcome> {
        let mut outcomes = self.slot(kind).lock().clone();
        outcomes.sort_by_key(|o| (o.record_id(), o.worker_id));
        outcomes
    }

    /// Number of outcomes recorded for `kind` so far.
    pub fn len(&self, kind: EntityKind) -> usize {
        self.slot(kind).lock().len()
    }

    /// Check whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Total outcomes across all kinds.
    pub fn total(&self) -> usize {
        EntityKind::ALL.iter().map(|&k| self.len(k)).sum()
    }
}

impl Default for ResultCollector {
    fn default() -> Self {
        Self::new()
    }
}
