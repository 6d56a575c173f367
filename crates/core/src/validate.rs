//! Per-kind validation rules
//!
//! Validation is a pure function from a candidate record to a list of
//! violations. An empty list means the record is valid. Violations aggregate:
//! a record can break several rules at once and all of them are reported in
//! one combined message.
//!
//! Callers inspect the returned list explicitly; nothing here unwinds. The
//! store re-invokes the same rules inside its transaction as the
//! authoritative gate immediately before the write.

use crate::types::{OrderRecord, ProductRecord, UserRecord};

/// A single broken rule, naming the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The record field that failed its rule
    pub field: &'static str,
    /// Human-readable description, naming the record id
    pub message: String,
}

impl Violation {
    fn new(field: &'static str, message: String) -> Self {
        Self { field, message }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Join a violation list into the combined message used in outcomes.
pub fn combined_message(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Validate a user record.
///
/// Rules: name must be non-empty after trimming; email must contain an '@'.
/// Duplicate ids and names are store-level concerns, not validator concerns.
pub fn validate_user(user: &UserRecord) -> Vec<Violation> {
    let mut violations = Vec::new();

    if user.name.trim().is_empty() {
        violations.push(Violation::new(
            "name",
            format!("User {}: Name cannot be empty", user.id),
        ));
    }

    if !user.email.contains('@') {
        violations.push(Violation::new(
            "email",
            format!("User {}: Invalid email format", user.id),
        ));
    }

    violations
}

/// Validate a product record.
///
/// Rules: name must be non-empty after trimming; price must not be negative
/// (zero is allowed).
pub fn validate_product(product: &ProductRecord) -> Vec<Violation> {
    let mut violations = Vec::new();

    if product.name.trim().is_empty() {
        violations.push(Violation::new(
            "name",
            format!("Product {}: Name cannot be empty", product.id),
        ));
    }

    if product.price < 0.0 {
        violations.push(Violation::new(
            "price",
            format!("Product {}: Price cannot be negative", product.id),
        ));
    }

    violations
}

/// Validate an order record.
///
/// Rules: user_id, product_id, and quantity must all be positive. Whether
/// the referenced rows exist is not checked here or anywhere: the stores are
/// isolated from each other.
pub fn validate_order(order: &OrderRecord) -> Vec<Violation> {
    let mut violations = Vec::new();

    if order.user_id <= 0 {
        violations.push(Violation::new(
            "user_id",
            format!("Order {}: Invalid user_id", order.id),
        ));
    }

    if order.product_id <= 0 {
        violations.push(Violation::new(
            "product_id",
            format!("Order {}: Invalid product_id", order.id),
        ));
    }

    if order.quantity <= 0 {
        violations.push(Violation::new(
            "quantity",
            format!("Order {}: Quantity must be positive", order.id),
        ));
    }

    violations
}
