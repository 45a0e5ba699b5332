//! Core data models for the warehouse items API.
//!
//! These entities represent warehouses and the items stored in them.
//! They map cleanly to database tables via `sqlx::FromRow` and serialize
//! naturally as JSON via `serde`.

pub mod item;
pub mod warehouse;
