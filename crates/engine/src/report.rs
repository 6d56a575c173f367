//! Deterministic run reports
//!
//! The report is the run's only output: per-kind sections whose lines are
//! sorted by record id (never by completion order), per-kind success
//! counts, and a cross-kind total with the elapsed wall-clock duration.
//! Reports serialize to JSON as-is for the CLI's `--json` mode.

use crate::collector::ResultCollector;
use crate::outcome::Outcome;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt::Write as _;
use std::time::Duration;
use tristore_core::EntityKind;
use uuid::Uuid;

/// One kind's slice of the report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSection {
    /// Which store this section covers
    pub kind: EntityKind,
    /// Outcomes sorted by record id ascending, ties by worker ordinal
    pub outcomes: Vec<Outcome>,
    /// How many of them committed
    pub successes: usize,
}

impl ReportSection {
    fn from_outcomes(kind: EntityKind, outcomes: Vec<Outcome>) -> Self {
        let successes = outcomes.iter().filter(|o| o.is_success()).count();
        Self {
            kind,
            outcomes,
            successes,
        }
    }

    /// Candidate records in this section.
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}

/// The final, immutable report for one orchestrator run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Identifier of this run
    pub run_id: Uuid,
    /// Wall-clock time the RUNNING phase began
    pub started_at: DateTime<Local>,
    /// Wall-clock duration from first spawn to last join
    pub elapsed: Duration,
    /// Per-kind sections, in report order (users, products, orders)
    pub sections: [ReportSection; 3],
}

impl RunReport {
    /// Assemble the report from a fully-joined collector.
    pub fn from_collector(
        collector: &ResultCollector,
        started_at: DateTime<Local>,
        elapsed: Duration,
    ) -> Self {
        let section = |kind| ReportSection::from_outcomes(kind, collector.snapshot(kind));
        Self {
            run_id: Uuid::new_v4(),
            started_at,
            elapsed,
            sections: [
                section(EntityKind::Users),
                section(EntityKind::Products),
                section(EntityKind::Orders),
            ],
        }
    }

    /// The section for `kind`.
    pub fn section(&self, kind: EntityKind) -> &ReportSection {
        let index = match kind {
            EntityKind::Users => 0,
            EntityKind::Products => 1,
            EntityKind::Orders => 2,
        };
        &self.sections[index]
    }

    /// Total committed records across all kinds.
    pub fn total_successes(&self) -> usize {
        self.sections.iter().map(|s| s.successes).sum()
    }

    /// Total candidate records across all kinds.
    pub fn total_records(&self) -> usize {
        self.sections.iter().map(|s| s.total()).sum()
    }

    /// Elapsed duration in seconds.
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }

    /// Render the human-readable report.
    ///
    /// Line order is deterministic across runs: sections in kind order,
    /// records by ascending id.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "run {} — {} workers, started {}",
            self.run_id,
            self.total_records(),
            self.started_at.format("%H:%M:%S%.3f"),
        );

        for section in &self.sections {
            let _ = writeln!(out);
            let _ = writeln!(out, "=== {} ===", section.kind);
            for outcome in &section.outcomes {
                let glyph = if outcome.is_success() { '✔' } else { '✘' };
                let _ = writeln!(
                    out,
                    "{} worker-{:<2} [{}] {}",
                    glyph,
                    outcome.worker_id,
                    outcome.timestamp_display(),
                    outcome.record,
                );
                if let Some(error) = &outcome.error {
                    let _ = writeln!(out, "    error: {error}");
                }
            }
            let _ = writeln!(
                out,
                "{}: {}/{} successful",
                section.kind,
                section.successes,
                section.total()
            );
        }

        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "total: {}/{} successful in {:.3} seconds",
            self.total_successes(),
            self.total_records(),
            self.elapsed_seconds(),
        );
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::Outcome;
    use tristore_core::{Record, UserRecord};

    fn collector_with_users(ids: &[(u32, i64, bool)]) -> ResultCollector {
        let collector = ResultCollector::new();
        for &(worker, id, ok) in ids {
            let record = Record::User(UserRecord::new(id, format!("u{id}"), format!("u{id}@x.com")));
            let outcome = if ok {
                Outcome::success(worker, record)
            } else {
                Outcome::failed(worker, record, "validation failed: boom")
            };
            collector.record(EntityKind::Users, outcome);
        }
        collector
    }

    #[test]
    fn test_counts() {
        let collector = collector_with_users(&[(1, 1, true), (2, 2, false), (3, 3, true)]);
        let report =
            RunReport::from_collector(&collector, Local::now(), Duration::from_millis(12));

        assert_eq!(report.section(EntityKind::Users).successes, 2);
        assert_eq!(report.section(EntityKind::Users).total(), 3);
        assert_eq!(report.total_successes(), 2);
        assert_eq!(report.total_records(), 3);
    }

    #[test]
    fn test_render_orders_by_id() {
        // Completion order 3, 1, 2; render order must be 1, 2, 3.
        let collector = collector_with_users(&[(3, 3, true), (1, 1, true), (2, 2, false)]);
        let report =
            RunReport::from_collector(&collector, Local::now(), Duration::from_millis(5));
        let rendered = report.render();

        let pos = |needle: &str| rendered.find(needle).unwrap();
        assert!(pos("id=1") < pos("id=2"));
        assert!(pos("id=2") < pos("id=3"));
        assert!(rendered.contains("users: 2/3 successful"));
        assert!(rendered.contains("    error: validation failed: boom"));
    }

    #[test]
    fn test_render_elapsed_three_decimals() {
        let collector = collector_with_users(&[(1, 1, true)]);
        let report =
            RunReport::from_collector(&collector, Local::now(), Duration::from_micros(12_345));
        assert!(report.render().contains("in 0.012 seconds"));
    }

    #[test]
    fn test_report_serializes() {
        let collector = collector_with_users(&[(1, 1, true)]);
        let report =
            RunReport::from_collector(&collector, Local::now(), Duration::from_millis(1));
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"run_id\""));
        assert!(json.contains("\"sections\""));
    }
}
