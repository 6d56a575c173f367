//! Unified error types for the insertion engine.
//!
//! Two families share one enum. Data errors ([`Error::Validation`],
//! [`Error::Constraint`]) describe a rejected record; they are contained at
//! the worker that hit them and become a FAILED outcome. Everything else is
//! an infrastructure error: the collaborator is broken, not the data, and
//! the run cannot meaningfully continue.

use crate::types::{EntityKind, RecordId};
use crate::validate::{combined_message, Violation};
use thiserror::Error;

/// All insertion-engine errors.
#[derive(Debug, Error)]
pub enum Error {
    /// A record failed one or more validation rules.
    #[error("validation failed: {message}")]
    Validation {
        /// The store the record was headed for
        kind: EntityKind,
        /// The offending record's id
        id: RecordId,
        /// Combined message, one clause per broken rule
        message: String,
    },

    /// The store rejected an otherwise valid-looking record at commit time.
    #[error("constraint violation: {message}")]
    Constraint {
        /// The store that rejected the record
        kind: EntityKind,
        /// The offending record's id
        id: RecordId,
        /// What the store objected to
        message: String,
    },

    /// The store cannot be reached at all (e.g. it has been closed).
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// I/O error from the surrounding process (thread spawn, fixture load).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Bug or broken invariant.
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for insertion-engine operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Build a validation error from a non-empty violation list.
    pub fn validation(kind: EntityKind, id: RecordId, violations: &[Violation]) -> Self {
        Error::Validation {
            kind,
            id,
            message: combined_message(violations),
        }
    }

    /// Build a constraint error.
    pub fn constraint(kind: EntityKind, id: RecordId, message: impl Into<String>) -> Self {
        Error::Constraint {
            kind,
            id,
            message: message.into(),
        }
    }

    /// Check if this error describes bad data rather than a broken system.
    ///
    /// Data errors are contained at the worker boundary: they become a FAILED
    /// outcome and never abort the run.
    pub fn is_data_error(&self) -> bool {
        matches!(self, Error::Validation { .. } | Error::Constraint { .. })
    }

    /// Check if this error must abort the whole run.
    pub fn is_fatal(&self) -> bool {
        !self.is_data_error()
    }
}
