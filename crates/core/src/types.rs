//! Core types for the insertion engine
//!
//! This module defines the fundamental types used throughout the system:
//! - [`EntityKind`]: the three independent entity stores
//! - [`UserRecord`], [`ProductRecord`], [`OrderRecord`]: candidate records
//! - [`Record`]: a record of any kind, as echoed into outcomes
//! - [`Entity`]: the trait that lets storage and engine stay generic over kinds

use crate::validate::{self, Violation};
use serde::{Deserialize, Serialize};

/// Caller-supplied record identifier.
///
/// Ids are not guaranteed unique within a batch; uniqueness is a store-level
/// concern enforced at commit time.
pub type RecordId = i64;

/// The three entity kinds, each backed by its own isolated store.
///
/// No transaction ever spans two kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// User accounts
    Users,
    /// Product catalog entries
    Products,
    /// Orders referencing users and products by id
    Orders,
}

impl EntityKind {
    /// All kinds, in report order.
    pub const ALL: [EntityKind; 3] = [EntityKind::Users, EntityKind::Products, EntityKind::Orders];

    /// Singular noun, used in error messages and thread names.
    pub fn singular(&self) -> &'static str {
        match self {
            EntityKind::Users => "user",
            EntityKind::Products => "product",
            EntityKind::Orders => "order",
        }
    }

    /// Table name, used in report headers and constraint messages.
    pub fn table_name(&self) -> &'static str {
        match self {
            EntityKind::Users => "users",
            EntityKind::Products => "products",
            EntityKind::Orders => "orders",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.table_name())
    }
}

/// A candidate user record.
///
/// # Examples
///
/// ```
/// use tristore_core::types::UserRecord;
///
/// let user = UserRecord::new(1, "Alice", "alice@example.com");
/// assert_eq!(user.id, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Caller-supplied id (may collide within a batch)
    pub id: RecordId,
    /// Display name; must be non-empty after trimming
    pub name: String,
    /// Email address; must contain an '@'
    pub email: String,
}

impl UserRecord {
    /// Create a new user record.
    pub fn new(id: RecordId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A candidate product record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    /// Caller-supplied id (may collide within a batch)
    pub id: RecordId,
    /// Display name; must be non-empty after trimming
    pub name: String,
    /// Unit price; zero is allowed, negative is not
    pub price: f64,
}

impl ProductRecord {
    /// Create a new product record.
    pub fn new(id: RecordId, name: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

/// A candidate order record.
///
/// Orders reference users and products by id only. Referential integrity is
/// not checked across stores: the stores are isolated and have no visibility
/// into each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Caller-supplied id (may collide within a batch)
    pub id: RecordId,
    /// Referenced user id; must be positive
    pub user_id: RecordId,
    /// Referenced product id; must be positive
    pub product_id: RecordId,
    /// Ordered quantity; must be positive
    pub quantity: i64,
}

impl OrderRecord {
    /// Create a new order record.
    pub fn new(id: RecordId, user_id: RecordId, product_id: RecordId, quantity: i64) -> Self {
        Self {
            id,
            user_id,
            product_id,
            quantity,
        }
    }
}

/// A record of any kind.
///
/// Outcomes echo the record's fields whether or not the insert happened, so
/// the report can show what was attempted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    /// A user record
    User(UserRecord),
    /// A product record
    Product(ProductRecord),
    /// An order record
    Order(OrderRecord),
}

impl Record {
    /// The record's caller-supplied id.
    pub fn id(&self) -> RecordId {
        match self {
            Record::User(u) => u.id,
            Record::Product(p) => p.id,
            Record::Order(o) => o.id,
        }
    }

    /// The kind of store this record belongs to.
    pub fn kind(&self) -> EntityKind {
        match self {
            Record::User(_) => EntityKind::Users,
            Record::Product(_) => EntityKind::Products,
            Record::Order(_) => EntityKind::Orders,
        }
    }
}

impl std::fmt::Display for Record {
    /// Render the field list the way the report shows it.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Record::User(u) => {
                write!(f, "id={} name={:?} email={:?}", u.id, u.name, u.email)
            }
            Record::Product(p) => {
                write!(f, "id={} name={:?} price=${:.2}", p.id, p.name, p.price)
            }
            Record::Order(o) => write!(
                f,
                "id={} user_id={} product_id={} quantity={}",
                o.id, o.user_id, o.product_id, o.quantity
            ),
        }
    }
}

/// A record type bound to one entity kind.
///
/// This is the seam between the generic pieces of the system: the store keeps
/// one table per implementor, the validator dispatches through `validate`,
/// and workers echo records into outcomes through `into_record`.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The kind of store this entity lives in.
    const KIND: EntityKind;

    /// Caller-supplied id.
    fn id(&self) -> RecordId;

    /// Check this record against its kind's rules.
    ///
    /// Pure: no side effects, no I/O, no access to other records. An empty
    /// list means the record is valid.
    fn validate(&self) -> Vec<Violation>;

    /// Convert into the kind-erased form used by outcomes and reports.
    fn into_record(self) -> Record;
}

impl Entity for UserRecord {
    const KIND: EntityKind = EntityKind::Users;

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Vec<Violation> {
        validate::validate_user(self)
    }

    fn into_record(self) -> Record {
        Record::User(self)
    }
}

impl Entity for ProductRecord {
    const KIND: EntityKind = EntityKind::Products;

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Vec<Violation> {
        validate::validate_product(self)
    }

    fn into_record(self) -> Record {
        Record::Product(self)
    }
}

impl Entity for OrderRecord {
    const KIND: EntityKind = EntityKind::Orders;

    fn id(&self) -> RecordId {
        self.id
    }

    fn validate(&self) -> Vec<Violation> {
        validate::validate_order(self)
    }

    fn into_record(self) -> Record {
        Record::Order(self)
    }
}
