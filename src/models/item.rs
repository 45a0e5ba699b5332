//! Represents an item stored in a warehouse.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A single stock item.
///
/// The HTTP layer treats this as an opaque payload: it deserializes the
/// struct from request bodies and hands it to the items service unchanged.
/// Only the service inspects or persists its fields.
#[derive(Serialize, Deserialize, Clone, FromRow, Debug, PartialEq)]
pub struct Item {
    /// Caller-assigned identifier, unique across all warehouses.
    pub id: i64,

    /// Human-readable item name.
    pub name: String,

    /// Optional size label (e.g. "small", "40x60").
    #[serde(default)]
    pub size: Option<String>,

    /// Warehouse the item belongs to, if already assigned.
    #[serde(default)]
    pub warehouse_id: Option<i64>,
}

/// Transient request envelope for `PUT /items`.
///
/// Exists only for the duration of one request; the inner sequence is moved
/// into the service call in the order it arrived.
#[derive(Deserialize, Debug)]
pub struct ItemsCreateRequest {
    pub items: Vec<Item>,
}
