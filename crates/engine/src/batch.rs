//! Candidate batches
//!
//! A `BatchSet` is the engine's input: three ordered sequences of candidate
//! records, one per kind, fixed before the run starts. Batches can be
//! supplied by a caller (the CLI accepts a JSON file) or taken from the
//! built-in demo set.

use serde::{Deserialize, Serialize};
use tristore_core::{OrderRecord, ProductRecord, UserRecord};

/// The three candidate batches for one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchSet {
    /// Candidate users, in enumeration order
    pub users: Vec<UserRecord>,
    /// Candidate products, in enumeration order
    pub products: Vec<ProductRecord>,
    /// Candidate orders, in enumeration order
    pub orders: Vec<OrderRecord>,
}

impl BatchSet {
    /// Build a batch set from the three sequences.
    pub fn new(
        users: Vec<UserRecord>,
        products: Vec<ProductRecord>,
        orders: Vec<OrderRecord>,
    ) -> Self {
        Self {
            users,
            products,
            orders,
        }
    }

    /// Total candidate records across all three batches.
    pub fn len(&self) -> usize {
        self.users.len() + self.products.len() + self.orders.len()
    }

    /// Check whether every batch is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The built-in demo batch: 10 users, 10 products, 10 orders.
    ///
    /// Four records are deliberately invalid — user 10 (empty name),
    /// product 10 (negative price), order 8 (zero quantity), order 9
    /// (negative quantity) — and order 10 references a product id that no
    /// product batch entry carries, which the isolated stores accept.
    /// Duplicate names (Alice, Laptop) are included on distinct ids to show
    /// that only ids are constrained.
    pub fn demo() -> Self {
        Self {
            users: vec![
                UserRecord::new(1, "Alice", "alice@example.com"),
                UserRecord::new(2, "Bob", "bob@example.com"),
                UserRecord::new(3, "Charlie", "charlie@example.com"),
                UserRecord::new(4, "David", "david@example.com"),
                UserRecord::new(5, "Eve", "eve@example.com"),
                UserRecord::new(6, "Frank", "frank@example.com"),
                UserRecord::new(7, "Grace", "grace@example.com"),
                UserRecord::new(8, "Alice", "alice@example.com"),
                UserRecord::new(9, "Henry", "henry@example.com"),
                UserRecord::new(10, "", "jane@example.com"),
            ],
            products: vec![
                ProductRecord::new(1, "Laptop", 1000.00),
                ProductRecord::new(2, "Smartphone", 700.00),
                ProductRecord::new(3, "Headphones", 150.00),
                ProductRecord::new(4, "Monitor", 300.00),
                ProductRecord::new(5, "Keyboard", 50.00),
                ProductRecord::new(6, "Mouse", 30.00),
                ProductRecord::new(7, "Laptop", 1000.00),
                ProductRecord::new(8, "Smartwatch", 250.00),
                ProductRecord::new(9, "Gaming Chair", 500.00),
                ProductRecord::new(10, "Earbuds", -50.00),
            ],
            orders: vec![
                OrderRecord::new(1, 1, 1, 2),
                OrderRecord::new(2, 2, 2, 1),
                OrderRecord::new(3, 3, 3, 5),
                OrderRecord::new(4, 4, 4, 1),
                OrderRecord::new(5, 5, 5, 3),
                OrderRecord::new(6, 6, 6, 4),
                OrderRecord::new(7, 7, 7, 2),
                OrderRecord::new(8, 8, 8, 0),
                OrderRecord::new(9, 9, 1, -1),
                OrderRecord::new(10, 10, 11, 2),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tristore_core::Entity;

    #[test]
    fn test_demo_shape() {
        let demo = BatchSet::demo();
        assert_eq!(demo.users.len(), 10);
        assert_eq!(demo.products.len(), 10);
        assert_eq!(demo.orders.len(), 10);
        assert_eq!(demo.len(), 30);
    }

    #[test]
    fn test_demo_invalid_records() {
        let demo = BatchSet::demo();
        let invalid_users: Vec<_> =
            demo.users.iter().filter(|u| !u.validate().is_empty()).collect();
        let invalid_products: Vec<_> =
            demo.products.iter().filter(|p| !p.validate().is_empty()).collect();
        let invalid_orders: Vec<_> =
            demo.orders.iter().filter(|o| !o.validate().is_empty()).collect();

        assert_eq!(invalid_users.iter().map(|u| u.id).collect::<Vec<_>>(), [10]);
        assert_eq!(invalid_products.iter().map(|p| p.id).collect::<Vec<_>>(), [10]);
        assert_eq!(invalid_orders.iter().map(|o| o.id).collect::<Vec<_>>(), [8, 9]);
    }

    #[test]
    fn test_batch_set_roundtrips_through_json() {
        let demo = BatchSet::demo();
        let json = serde_json::to_string(&demo).unwrap();
        let restored: BatchSet = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.len(), 30);
        assert_eq!(restored.users[0].name, "Alice");
    }
}
