//! Per-kind transactional table
//!
//! One `TableStore` is one isolated persistence scope: rows live in a
//! DashMap keyed by record id, commits allocate monotonically increasing
//! versions, and a commit lock serializes the constraint check against the
//! row write.
//!
//! # Thread Safety
//!
//! All operations are thread-safe:
//! - get(): lock-free read via DashMap
//! - insert(): serialized through the commit lock
//! - Different tables never contend

use crate::txn::Transaction;
use dashmap::DashMap;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tristore_core::{Entity, EntityKind, Error, RecordId, Result};

/// A committed row with its commit version.
#[derive(Debug, Clone)]
pub struct VersionedRow<R> {
    /// The persisted record
    pub record: R,
    /// Commit version allocated when the row was written
    pub version: u64,
}

/// One isolated transactional table, holding rows of a single entity kind.
///
/// # Example
///
/// ```ignore
/// use tristore_storage::TableStore;
/// use tristore_core::UserRecord;
///
/// let users: TableStore<UserRecord> = TableStore::new();
/// let persisted = users.insert(UserRecord::new(1, "Alice", "alice@example.com"))?;
/// assert!(users.contains(1));
/// ```
pub struct TableStore<R: Entity> {
    /// Committed rows, keyed by record id
    pub(crate) rows: DashMap<RecordId, VersionedRow<R>>,

    /// Global commit version for this table
    ///
    /// Monotonically increasing. Each committed insert increments by 1.
    version: AtomicU64,

    /// Commit serialization lock
    ///
    /// Prevents a TOCTOU race between the uniqueness check and the row
    /// write. Without this lock, two inserts of the same id could both pass
    /// the check and both apply. The lock ensures check → allocate → apply
    /// is atomic; reads never take it.
    pub(crate) commit_lock: Mutex<()>,

    /// Cleared by [`TableStore::close`]; every subsequent operation fails
    /// with [`Error::Unavailable`].
    open: AtomicBool,
}

impl<R: Entity> TableStore<R> {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self {
            rows: DashMap::new(),
            version: AtomicU64::new(0),
            commit_lock: Mutex::new(()),
            open: AtomicBool::new(true),
        }
    }

    /// Create a table with pre-allocated row capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: DashMap::with_capacity(capacity),
            ..Self::new()
        }
    }

    /// The entity kind this table stores.
    pub fn kind(&self) -> EntityKind {
        R::KIND
    }

    /// Current commit version.
    #[inline]
    pub fn version(&self) -> u64 {
        self.version.load(Ordering::Acquire)
    }

    /// Allocate the next commit version.
    ///
    /// Called with the commit lock held; gaps do not occur because the
    /// version is only allocated once the constraint check has passed.
    #[inline]
    pub(crate) fn next_version(&self) -> u64 {
        self.version.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Begin a scoped transaction against this table.
    ///
    /// The transaction buffers at most one record; dropping it without
    /// committing discards the buffered work.
    pub fn begin(&self) -> Transaction<'_, R> {
        Transaction::new(self)
    }

    /// Insert a record inside its own scoped transaction.
    ///
    /// The record is re-validated immediately before the write; this is the
    /// authoritative check. A valid record either commits fully or, on any
    /// violation or constraint, the transaction rolls back and no row
    /// exists. Returns the persisted record on success.
    pub fn insert(&self, record: R) -> Result<R> {
        let mut txn = self.begin();
        txn.stage(record);
        txn.commit()
    }

    /// Look up a committed row by id, cloning the record out.
    pub fn get(&self, id: RecordId) -> Result<Option<R>> {
        self.ensure_open()?;
        Ok(self.rows.get(&id).map(|row| row.record.clone()))
    }

    /// Check whether a committed row exists for this id.
    pub fn contains(&self, id: RecordId) -> bool {
        self.rows.contains_key(&id)
    }

    /// Number of committed rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Delete every row.
    ///
    /// Never runs concurrently with workers: the orchestrator truncates
    /// strictly before any worker starts. The commit lock is still taken so
    /// a truncate can never interleave with a straggling commit.
    pub fn truncate(&self) -> Result<()> {
        self.ensure_open()?;
        let _guard = self.commit_lock.lock();
        let dropped = self.rows.len();
        self.rows.clear();
        tracing::debug!(table = %R::KIND, dropped, "table truncated");
        Ok(())
    }

    /// Mark the table unreachable.
    ///
    /// Models the backend disappearing out from under the run: every
    /// subsequent insert, get, or truncate fails with
    /// [`Error::Unavailable`], which aborts the orchestrator rather than
    /// becoming a per-record outcome.
    pub fn close(&self) {
        self.open.store(false, Ordering::Release);
        tracing::warn!(table = %R::KIND, "table closed");
    }

    /// Check whether the table is reachable.
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }

    /// Availability gate shared by every operation.
    pub(crate) fn ensure_open(&self) -> Result<()> {
        if self.is_open() {
            Ok(())
        } else {
            Err(Error::Unavailable(format!("{} store is closed", R::KIND)))
        }
    }
}

impl<R: Entity> Default for TableStore<R> {
    fn default() -> Self {
        Self::new()
    }
}
