//! Run orchestration
//!
//! The orchestrator drives one run through its phases:
//!
//! ```text
//! INIT → (CLEARING) → RUNNING → REPORTING → DONE
//! ```
//!
//! CLEARING truncates the stores and strictly precedes any worker. RUNNING
//! spawns one OS thread per candidate record across all three batches — no
//! batch waits for another — then unconditionally joins every one of them;
//! there is no timeout or abort path. REPORTING snapshots the collector
//! into a [`RunReport`].
//!
//! A worker's data failure is invisible here: it is already a FAILED
//! outcome. Only infrastructure errors abort the run.

use crate::batch::BatchSet;
use crate::collector::ResultCollector;
use crate::report::RunReport;
use crate::worker::InsertionWorker;
use chrono::Local;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Instant;
use tristore_core::{Entity, Error, Result};
use tristore_storage::{StoreSet, TableStore};

/// Lifecycle phase of one orchestrator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Batches loaded, nothing started
    Init,
    /// Truncating stores; strictly precedes RUNNING
    Clearing,
    /// Workers spawned, waiting for all of them to finish
    Running,
    /// All workers joined; assembling the report
    Reporting,
    /// Terminal; no further mutation
    Done,
}

/// Caller directives for one run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Truncate all three stores before any worker starts
    pub clear_first: bool,
}

/// Builds the full worker set, launches it, and drives the report.
///
/// One orchestrator drives exactly one run; construct a fresh one per run.
pub struct Orchestrator {
    stores: Arc<StoreSet>,
    phase: Phase,
}

impl Orchestrator {
    /// Bind an orchestrator to the stores it will insert into.
    pub fn new(stores: Arc<StoreSet>) -> Self {
        Self {
            stores,
            phase: Phase::Init,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    fn enter(&mut self, phase: Phase) {
        tracing::info!(from = ?self.phase, to = ?phase, "phase transition");
        self.phase = phase;
    }

    /// Execute one full run, consuming the orchestrator.
    ///
    /// Returns the deterministic report. `Err` means infrastructure
    /// failure; per-record rejections are FAILED outcomes in the report,
    /// and the run still completes.
    pub fn run(mut self, batches: BatchSet, options: RunOptions) -> Result<RunReport> {
        if options.clear_first {
            self.enter(Phase::Clearing);
            self.stores.truncate_all()?;
        }

        self.enter(Phase::Running);
        let total = batches.len();
        let collector = Arc::new(ResultCollector::with_capacity(total / 3 + 1));
        let started_at = Local::now();
        let clock = Instant::now();

        // Launch every worker across all three batches before joining any.
        let mut handles: Vec<JoinHandle<Result<()>>> = Vec::with_capacity(total);
        spawn_batch(batches.users, self.stores.users(), &collector, &mut handles)?;
        spawn_batch(batches.products, self.stores.products(), &collector, &mut handles)?;
        spawn_batch(batches.orders, self.stores.orders(), &collector, &mut handles)?;

        // Unconditionally wait for every spawned worker, even once a fatal
        // error has been seen; stragglers must not outlive the run.
        let mut fatal: Option<Error> = None;
        for handle in handles {
            let result = handle
                .join()
                .unwrap_or_else(|_| Err(Error::Internal("worker thread panicked".into())));
            if let Err(e) = result {
                tracing::error!(%e, "worker hit an infrastructure failure");
                if fatal.is_none() {
                    fatal = Some(e);
                }
            }
        }
        if let Some(e) = fatal {
            return Err(e);
        }
        let elapsed = clock.elapsed();

        self.enter(Phase::Reporting);
        let report = RunReport::from_collector(&collector, started_at, elapsed);
        tracing::info!(
            run_id = %report.run_id,
            successes = report.total_successes(),
            total = report.total_records(),
            elapsed_ms = elapsed.as_millis() as u64,
            "run complete"
        );

        self.enter(Phase::Done);
        Ok(report)
    }
}

/// Spawn one named thread per record, pushing handles in enumeration order.
///
/// Ordinals are 1-based and unique within this batch only.
fn spawn_batch<R: Entity>(
    records: Vec<R>,
    store: &Arc<TableStore<R>>,
    collector: &Arc<ResultCollector>,
    handles: &mut Vec<JoinHandle<Result<()>>>,
) -> Result<()> {
    for (index, record) in records.into_iter().enumerate() {
        let ordinal = (index + 1) as u32;
        let worker = InsertionWorker::new(
            ordinal,
            record,
            Arc::clone(store),
            Arc::clone(collector),
        );
        let handle = std::thread::Builder::new()
            .name(format!("{}-worker-{}", R::KIND.singular(), ordinal))
            .spawn(move || worker.run())?;
        handles.push(handle);
    }
    Ok(())
}
