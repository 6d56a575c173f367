//! Per-record outcomes
//!
//! Every candidate record produces exactly one [`Outcome`], built at worker
//! completion and never mutated afterwards. Failed outcomes echo the
//! original candidate fields (nothing was persisted); successful ones echo
//! the persisted values.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tristore_core::{Record, RecordId};

/// Terminal status of one insertion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OutcomeStatus {
    /// The record committed
    Success,
    /// The record was rejected; no row exists
    Failed,
}

/// The result of one worker's insertion attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outcome {
    /// 1-based worker ordinal, unique within its own batch only
    pub worker_id: u32,
    /// Terminal status
    pub status: OutcomeStatus,
    /// The record's fields, as persisted (success) or as attempted (failure)
    pub record: Record,
    /// Stringified cause; present only when failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Wall-clock completion time, microsecond precision
    pub completed_at: DateTime<Local>,
}

impl Outcome {
    /// Build a success outcome, stamped now.
    pub fn success(worker_id: u32, record: Record) -> Self {
        Self {
            worker_id,
            status: OutcomeStatus::Success,
            record,
            error: None,
            completed_at: Local::now(),
        }
    }

    /// Build a failure outcome, stamped now.
    pub fn failed(worker_id: u32, record: Record, error: impl Into<String>) -> Self {
        Self {
            worker_id,
            status: OutcomeStatus::Failed,
            record,
            error: Some(error.into()),
            completed_at: Local::now(),
        }
    }

    /// Check whether the insert committed.
    pub fn is_success(&self) -> bool {
        self.status == OutcomeStatus::Success
    }

    /// Id of the originating record.
    pub fn record_id(&self) -> RecordId {
        self.record.id()
    }

    /// Completion time as the report shows it: `HH:MM:SS.mmm`.
    pub fn timestamp_display(&self) -> String {
        self.completed_at.format("%H:%M:%S%.3f").to_string()
    }
}
