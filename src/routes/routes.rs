//! Defines routes for the warehouse items API.
//!
//! ## Structure
//! - **Items endpoints** (prefix `/items`)
//!   - `GET /items/{warehouse_id}/quantity` — count items in a warehouse
//!   - `PUT /items` — bulk-create items from a JSON body
//!
//! - **Health endpoints**
//!   - `GET /healthz` — liveness
//!   - `GET /readyz` — readiness (DB check)

use crate::{
    handlers::{
        health_handlers::{healthz, readyz},
        items_handlers::{create_items, get_items_quantity},
    },
    services::items_service::ItemsUseCase,
};
use axum::{
    Router,
    extract::FromRef,
    routing::{get, put},
};
use sqlx::SqlitePool;
use std::sync::Arc;

/// Shared handles injected once at startup and never mutated afterwards.
///
/// Items handlers see only the use-case trait; the readiness probe borrows
/// the pool directly.
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn ItemsUseCase>,
    pub db: Arc<SqlitePool>,
}

impl FromRef<AppState> for Arc<dyn ItemsUseCase> {
    fn from_ref(state: &AppState) -> Self {
        state.items.clone()
    }
}

impl FromRef<AppState> for Arc<SqlitePool> {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

/// Build and return the immutable route table.
///
/// Route registration happens once at startup; the router carries shared
/// state (`AppState`) to all handlers.
pub fn routes() -> Router<AppState> {
    Router::new()
        // health endpoints (mounted at root)
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // items route group
        .route("/items/{warehouse_id}/quantity", get(get_items_quantity))
        .route("/items", put(create_items))
}
