use crate::services::items_service::ItemsError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

/// A lightweight wrapper for request failures that keeps the message local.
///
/// Converting this into a response yields the error envelope
/// `{"status": <code>, "message": <text>}` — the only error shape clients
/// ever see. Internal error text never leaks into the message.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    /// Create a new AppError with a specific status and message.
    pub fn new(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            message: msg.into(),
        }
    }

    /// Shortcut for a 400 Bad Request
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, msg)
    }

    /// Shortcut for a 500 Internal Server Error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }

    /// Map a service error kind to an HTTP status.
    ///
    /// NotFound and Conflict keep the service's own message; storage errors
    /// collapse to a 500 carrying the fixed message supplied by the handler,
    /// so internal error text stays out of responses.
    pub fn from_items_error(err: ItemsError, storage_msg: &str) -> Self {
        match err {
            ItemsError::WarehouseNotFound(_) => Self::new(StatusCode::NOT_FOUND, err.to_string()),
            ItemsError::DuplicateItem(_) => Self::new(StatusCode::CONFLICT, err.to_string()),
            ItemsError::Sqlx(_) => Self::internal(storage_msg),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "status": self.status.as_u16(),
            "message": self.message
        }));

        (self.status, body).into_response()
    }
}

