//! # tristore-engine
//!
//! The concurrent validated insertion engine: one worker per candidate
//! record, all launched at once across the three batches, each committing
//! through its own scoped transaction and reporting exactly one outcome
//! into a lock-protected collector. After every worker has joined, the
//! orchestrator renders a deterministic report sorted by record id.
//!
//! Completion order is nondeterministic; report order never is.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod collector;
pub mod orchestrator;
pub mod outcome;
pub mod report;
pub mod worker;

pub use batch::BatchSet;
pub use collector::ResultCollector;
pub use orchestrator::{Orchestrator, Phase, RunOptions};
pub use outcome::{Outcome, OutcomeStatus};
pub use report::{ReportSection, RunReport};
pub use worker::InsertionWorker;
