//! Scoped single-record transactions
//!
//! Every insert runs inside its own transaction; no two records ever share
//! one. The transaction buffers the record, then commits through a fixed
//! sequence:
//!
//! ```text
//! 1. ensure_open()      - availability gate (infrastructure errors)
//! 2. validate()         - authoritative rule check, immediately pre-write
//! 3. lock commit_lock   - serialize check-and-apply against this table
//! 4. uniqueness check   - first committer wins on the primary key
//! 5. allocate version
//! 6. apply row
//! ```
//!
//! Any failure in steps 1-4 rolls the transaction back: the buffered record
//! is discarded and no row exists. Dropping an active transaction has the
//! same effect.

use crate::table::{TableStore, VersionedRow};
use tristore_core::{Entity, Error, Result};

/// Lifecycle state of a [`Transaction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TxnStatus {
    /// Accepting a staged record; nothing written yet
    Active,
    /// Commit succeeded at this version
    Committed {
        /// The version allocated for the committed row
        version: u64,
    },
    /// Commit failed or was rolled back; no row was written
    RolledBack {
        /// Why the transaction rolled back
        reason: String,
    },
}

/// A scoped transaction holding at most one staged record.
///
/// Created by [`TableStore::begin`]. The transaction borrows its table, so
/// it cannot outlive the store and cannot cross stores.
pub struct Transaction<'s, R: Entity> {
    store: &'s TableStore<R>,
    staged: Option<R>,
    status: TxnStatus,
}

impl<'s, R: Entity> Transaction<'s, R> {
    pub(crate) fn new(store: &'s TableStore<R>) -> Self {
        Self {
            store,
            staged: None,
            status: TxnStatus::Active,
        }
    }

    /// Stage a record for commit, replacing any previously staged one.
    pub fn stage(&mut self, record: R) {
        self.staged = Some(record);
    }

    /// Current lifecycle state.
    pub fn status(&self) -> &TxnStatus {
        &self.status
    }

    /// Commit the staged record.
    ///
    /// Returns the persisted record on success. On any violation or
    /// constraint the transaction rolls back, the error is returned, and no
    /// row exists. Infrastructure errors (closed store) also roll back but
    /// are fatal to the run rather than contained per-record.
    pub fn commit(&mut self) -> Result<R> {
        if self.status != TxnStatus::Active {
            return Err(Error::Internal(format!(
                "commit on a finished transaction ({:?})",
                self.status
            )));
        }

        // Step 1: availability gate.
        if let Err(e) = self.store.ensure_open() {
            self.status = TxnStatus::RolledBack {
                reason: e.to_string(),
            };
            return Err(e);
        }

        let record = match self.staged.take() {
            Some(record) => record,
            None => {
                self.status = TxnStatus::RolledBack {
                    reason: "nothing staged".into(),
                };
                return Err(Error::Internal("commit with no staged record".into()));
            }
        };

        // Step 2: authoritative validation, immediately before the write.
        let violations = record.validate();
        if !violations.is_empty() {
            let err = Error::validation(R::KIND, record.id(), &violations);
            self.status = TxnStatus::RolledBack {
                reason: err.to_string(),
            };
            return Err(err);
        }

        // Steps 3-6 under the commit lock: no other commit to this table can
        // slip between the uniqueness check and the row write.
        let _guard = self.store.commit_lock.lock();

        if self.store.rows.contains_key(&record.id()) {
            let err = Error::constraint(
                R::KIND,
                record.id(),
                format!("unique constraint failed: {}.id = {}", R::KIND, record.id()),
            );
            self.status = TxnStatus::RolledBack {
                reason: err.to_string(),
            };
            return Err(err);
        }

        let version = self.store.next_version();
        self.store.rows.insert(
            record.id(),
            VersionedRow {
                record: record.clone(),
                version,
            },
        );
        self.status = TxnStatus::Committed { version };
        Ok(record)
    }

    /// Explicitly roll back, discarding the staged record.
    pub fn rollback(&mut self, reason: impl Into<String>) {
        self.staged = None;
        self.status = TxnStatus::RolledBack {
            reason: reason.into(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tristore_core::{ProductRecord, UserRecord};

    #[test]
    fn test_commit_lifecycle() {
        let users: TableStore<UserRecord> = TableStore::new();
        let mut txn = users.begin();
        assert_eq!(*txn.status(), TxnStatus::Active);

        txn.stage(UserRecord::new(1, "Alice", "alice@example.com"));
        txn.commit().unwrap();
        assert_eq!(*txn.status(), TxnStatus::Committed { version: 1 });
    }

    #[test]
    fn test_validation_failure_rolls_back() {
        let products: TableStore<ProductRecord> = TableStore::new();
        let mut txn = products.begin();
        txn.stage(ProductRecord::new(10, "Earbuds", -50.0));

        let err = txn.commit().unwrap_err();
        assert!(err.is_data_error());
        assert!(matches!(txn.status(), TxnStatus::RolledBack { .. }));
        assert!(products.is_empty(), "rolled-back commit must not write a row");
    }

    #[test]
    fn test_commit_twice_is_an_error() {
        let users: TableStore<UserRecord> = TableStore::new();
        let mut txn = users.begin();
        txn.stage(UserRecord::new(1, "Alice", "a@b"));
        txn.commit().unwrap();

        let err = txn.commit().unwrap_err();
        assert!(matches!(err, Error::Internal(_)));
        assert_eq!(users.len(), 1);
    }

    #[test]
    fn test_dropping_active_txn_writes_nothing() {
        let users: TableStore<UserRecord> = TableStore::new();
        {
            let mut txn = users.begin();
            txn.stage(UserRecord::new(2, "Bob", "bob@example.com"));
            // dropped without commit
        }
        assert!(users.is_empty());
    }

    #[test]
    fn test_explicit_rollback() {
        let users: TableStore<UserRecord> = TableStore::new();
        let mut txn = users.begin();
        txn.stage(UserRecord::new(3, "Charlie", "charlie@example.com"));
        txn.rollback("caller changed its mind");

        assert!(matches!(txn.status(), TxnStatus::RolledBack { .. }));
        assert!(users.is_empty());
    }
}
