//! Store-level semantics observed through full runs: uniqueness,
//! isolation, the clearing directive, and the infrastructure-error path.

use tristore::prelude::*;

// ============================================================================
// Duplicate ids within one batch
// ============================================================================

#[test]
fn duplicate_ids_race_to_one_winner() {
    // Two users share id 1. The validator has no uniqueness rule, so both
    // workers execute end-to-end; the table's primary-key constraint picks
    // whichever commits first and rejects the other.
    let db = Tristore::new();
    let batch = BatchSet::new(
        vec![
            UserRecord::new(1, "Alice", "alice@example.com"),
            UserRecord::new(1, "Alice Again", "alice2@example.com"),
        ],
        Vec::new(),
        Vec::new(),
    );

    let report = db.run(batch, RunOptions::default()).unwrap();
    let section = report.section(EntityKind::Users);

    assert_eq!(section.total(), 2, "both duplicates executed independently");
    assert_eq!(section.successes, 1, "exactly one commits");

    let loser = section.outcomes.iter().find(|o| !o.is_success()).unwrap();
    assert!(loser
        .error
        .as_deref()
        .unwrap()
        .contains("unique constraint failed: users.id = 1"));
    assert_eq!(db.users().len(), 1);
}

// ============================================================================
// Cross-store isolation
// ============================================================================

#[test]
fn same_id_in_different_stores_never_conflicts() {
    let db = Tristore::new();
    let batch = BatchSet::new(
        vec![UserRecord::new(1, "Alice", "alice@example.com")],
        vec![ProductRecord::new(1, "Laptop", 1000.0)],
        vec![OrderRecord::new(1, 1, 1, 2)],
    );

    let report = db.run(batch, RunOptions::default()).unwrap();
    assert_eq!(report.total_successes(), 3);
}

#[test]
fn orders_commit_without_referenced_rows() {
    // No users, no products; the order still commits. Stores have no
    // visibility into each other.
    let db = Tristore::new();
    let batch = BatchSet::new(
        Vec::new(),
        Vec::new(),
        vec![OrderRecord::new(1, 42, 99, 5)],
    );

    let report = db.run(batch, RunOptions::default()).unwrap();
    assert_eq!(report.section(EntityKind::Orders).successes, 1);
    assert!(db.users().is_empty());
    assert!(db.products().is_empty());
}

// ============================================================================
// Clearing directive
// ============================================================================

#[test]
fn clearing_empties_stores_before_running() {
    let db = Tristore::new();

    // Pre-seed rows that would collide with every demo id.
    db.run(BatchSet::demo(), RunOptions::default()).unwrap();
    assert_eq!(db.users().len(), 9);

    // Without clearing, the seeded rows win and everything collides.
    let report = db.run(BatchSet::demo(), RunOptions::default()).unwrap();
    assert_eq!(report.total_successes(), 0);

    // With clearing, the demo result is reproduced exactly: clearing ran
    // strictly before any worker, so no seeded row survived to conflict.
    let report = db
        .run(BatchSet::demo(), RunOptions { clear_first: true })
        .unwrap();
    assert_eq!(report.total_successes(), 26);
    assert_eq!(db.users().len(), 9);
}

// ============================================================================
// Infrastructure errors
// ============================================================================

#[test]
fn closed_store_aborts_instead_of_failing_records() {
    let db = Tristore::new();
    db.close();

    let err = db.run(BatchSet::demo(), RunOptions::default()).unwrap_err();
    assert!(err.is_fatal());
    assert!(matches!(err, Error::Unavailable(_)));
}

#[test]
fn closed_store_fails_clearing_too() {
    let db = Tristore::new();
    db.close();

    let err = db
        .run(BatchSet::demo(), RunOptions { clear_first: true })
        .unwrap_err();
    assert!(matches!(err, Error::Unavailable(_)));
}
