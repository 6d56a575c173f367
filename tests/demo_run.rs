//! End-to-end runs of the built-in demo batch.
//!
//! The demo set carries four deliberately invalid records; everything else
//! commits. These tests pin the full observable outcome: counts, failing
//! ids, causes, store contents, and report shape.

use tristore::prelude::*;

fn demo_report() -> (Tristore, RunReport) {
    let db = Tristore::new();
    let report = db.run(BatchSet::demo(), RunOptions::default()).unwrap();
    (db, report)
}

// ============================================================================
// Summary counts
// ============================================================================

#[test]
fn demo_summary_counts() {
    let (_db, report) = demo_report();

    assert_eq!(report.section(EntityKind::Users).successes, 9);
    assert_eq!(report.section(EntityKind::Products).successes, 9);
    assert_eq!(report.section(EntityKind::Orders).successes, 8);
    assert_eq!(report.total_successes(), 26);
    assert_eq!(report.total_records(), 30);
}

#[test]
fn run_succeeds_even_with_failing_records() {
    // Per-record failures are report lines, never an Err from the run.
    let db = Tristore::new();
    let all_invalid = BatchSet::new(
        vec![UserRecord::new(1, "", "nope")],
        vec![ProductRecord::new(1, "", -1.0)],
        vec![OrderRecord::new(1, 0, 0, 0)],
    );
    let report = db.run(all_invalid, RunOptions::default()).unwrap();
    assert_eq!(report.total_successes(), 0);
    assert_eq!(report.total_records(), 3);
}

// ============================================================================
// Failing ids and causes
// ============================================================================

#[test]
fn demo_failing_ids_and_causes() {
    let (_db, report) = demo_report();

    let failed = |kind: EntityKind| -> Vec<(i64, String)> {
        report
            .section(kind)
            .outcomes
            .iter()
            .filter(|o| !o.is_success())
            .map(|o| (o.record_id(), o.error.clone().unwrap_or_default()))
            .collect()
    };

    let users = failed(EntityKind::Users);
    assert_eq!(users.len(), 1);
    assert_eq!(users[0].0, 10);
    assert!(users[0].1.contains("User 10: Name cannot be empty"));

    let products = failed(EntityKind::Products);
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].0, 10);
    assert!(products[0].1.contains("Product 10: Price cannot be negative"));

    let orders = failed(EntityKind::Orders);
    assert_eq!(
        orders.iter().map(|(id, _)| *id).collect::<Vec<_>>(),
        vec![8, 9]
    );
    assert!(orders[0].1.contains("Order 8: Quantity must be positive"));
    assert!(orders[1].1.contains("Order 9: Quantity must be positive"));
}

#[test]
fn failed_records_leave_no_rows() {
    let (db, _report) = demo_report();

    assert!(db.users().get(10).unwrap().is_none());
    assert!(db.products().get(10).unwrap().is_none());
    assert!(db.orders().get(8).unwrap().is_none());
    assert!(db.orders().get(9).unwrap().is_none());

    assert_eq!(db.users().len(), 9);
    assert_eq!(db.products().len(), 9);
    assert_eq!(db.orders().len(), 8);
}

#[test]
fn dangling_order_references_are_accepted() {
    // Order 10 references product 11, which no product batch entry carries.
    // Stores are isolated; there is no cross-store foreign-key check.
    let (db, report) = demo_report();

    let order_10 = report
        .section(EntityKind::Orders)
        .outcomes
        .iter()
        .find(|o| o.record_id() == 10)
        .unwrap();
    assert!(order_10.is_success());
    assert_eq!(db.orders().get(10).unwrap().unwrap().product_id, 11);
}

// ============================================================================
// Echoed fields and ordinals
// ============================================================================

#[test]
fn successful_outcomes_echo_persisted_fields() {
    let (_db, report) = demo_report();

    let alice = &report.section(EntityKind::Users).outcomes[0];
    assert_eq!(
        alice.record,
        Record::User(UserRecord::new(1, "Alice", "alice@example.com"))
    );
}

#[test]
fn failed_outcomes_echo_attempted_fields() {
    let (_db, report) = demo_report();

    let product_10 = report
        .section(EntityKind::Products)
        .outcomes
        .iter()
        .find(|o| o.record_id() == 10)
        .unwrap();
    assert_eq!(
        product_10.record,
        Record::Product(ProductRecord::new(10, "Earbuds", -50.0))
    );
}

#[test]
fn worker_ordinals_are_per_batch() {
    // Ordinals restart at 1 for every kind; they are not globally unique.
    let (_db, report) = demo_report();

    for kind in EntityKind::ALL {
        let mut ordinals: Vec<_> = report
            .section(kind)
            .outcomes
            .iter()
            .map(|o| o.worker_id)
            .collect();
        ordinals.sort_unstable();
        assert_eq!(ordinals, (1..=10).collect::<Vec<_>>(), "{kind}");
    }
}

// ============================================================================
// Rendered report
// ============================================================================

#[test]
fn rendered_report_shape() {
    let (_db, report) = demo_report();
    let rendered = report.render();

    assert!(rendered.contains("=== users ==="));
    assert!(rendered.contains("=== products ==="));
    assert!(rendered.contains("=== orders ==="));
    assert!(rendered.contains("users: 9/10 successful"));
    assert!(rendered.contains("products: 9/10 successful"));
    assert!(rendered.contains("orders: 8/10 successful"));
    assert!(rendered.contains("total: 26/30 successful in "));
    assert!(rendered.contains(" seconds"));
    assert!(rendered.contains("    error: validation failed: User 10: Name cannot be empty"));
}

#[test]
fn report_serializes_to_json() {
    let (_db, report) = demo_report();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["sections"][0]["kind"], "users");
    assert_eq!(json["sections"][0]["successes"], 9);
    assert_eq!(json["sections"][2]["outcomes"][7]["status"], "FAILED");
}
