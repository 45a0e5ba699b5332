//! Warehouse items API: an axum HTTP service exposing the `/items` route
//! group (quantity lookup and bulk creation) over a SQLite-backed items
//! service.

pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
