//! The three isolated stores behind one handle
//!
//! `StoreSet` owns one [`TableStore`] per entity kind. The tables share
//! nothing: no lock, no version counter, no rows. The set exists so the
//! orchestrator and the facade can hold, clear, and close all three through
//! one value.

use crate::table::TableStore;
use std::sync::Arc;
use tristore_core::{OrderRecord, ProductRecord, Result, UserRecord};

/// The three independent tables: users, products, orders.
///
/// Cloning the `Arc`s out of the set is how workers get their store handle;
/// the set itself stays owned by the orchestrator's caller.
pub struct StoreSet {
    users: Arc<TableStore<UserRecord>>,
    products: Arc<TableStore<ProductRecord>>,
    orders: Arc<TableStore<OrderRecord>>,
}

impl StoreSet {
    /// Create three fresh empty tables.
    pub fn new() -> Self {
        Self {
            users: Arc::new(TableStore::new()),
            products: Arc::new(TableStore::new()),
            orders: Arc::new(TableStore::new()),
        }
    }

    /// The users table.
    pub fn users(&self) -> &Arc<TableStore<UserRecord>> {
        &self.users
    }

    /// The products table.
    pub fn products(&self) -> &Arc<TableStore<ProductRecord>> {
        &self.products
    }

    /// The orders table.
    pub fn orders(&self) -> &Arc<TableStore<OrderRecord>> {
        &self.orders
    }

    /// Truncate all three tables, sequentially.
    ///
    /// Runs strictly before any worker is spawned; clearing is never
    /// concurrent with insertion.
    pub fn truncate_all(&self) -> Result<()> {
        self.users.truncate()?;
        self.products.truncate()?;
        self.orders.truncate()?;
        tracing::info!("all stores truncated");
        Ok(())
    }

    /// Close all three tables; subsequent operations fail as unavailable.
    pub fn close_all(&self) {
        self.users.close();
        self.products.close();
        self.orders.close();
    }

    /// Total committed rows across the three tables.
    pub fn total_rows(&self) -> usize {
        self.users.len() + self.products.len() + self.orders.len()
    }
}

impl Default for StoreSet {
    fn default() -> Self {
        Self::new()
    }
}
