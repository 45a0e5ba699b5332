//! Represents a warehouse — a container for items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A warehouse that items can be counted against.
#[derive(Serialize, Deserialize, Clone, FromRow, Debug)]
pub struct Warehouse {
    /// Integer key used in the URL path.
    pub id: i64,

    /// Display name.
    pub name: String,

    /// When this warehouse was registered.
    pub created_at: DateTime<Utc>,
}
