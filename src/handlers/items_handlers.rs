//! HTTP handlers for the `/items` route group.
//!
//! Parses path parameters and JSON bodies, delegates to the items use-case,
//! and translates outcomes into the response envelope. Every failure path
//! logs exactly once before the response is built, and every request yields
//! exactly one envelope and one status code.

use crate::{
    errors::AppError,
    models::item::ItemsCreateRequest,
    services::items_service::ItemsUseCase,
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::sync::Arc;
use tracing::error;

/// `GET /items/{warehouse_id}/quantity`
///
/// The path segment is taken as a string and parsed here; range validation
/// is deferred to the use-case layer. A non-integer segment is a client
/// error and the use-case is never invoked.
pub async fn get_items_quantity(
    State(items): State<Arc<dyn ItemsUseCase>>,
    Path(warehouse_id): Path<String>,
) -> Result<Response, AppError> {
    let warehouse_id: i64 = match warehouse_id.parse() {
        Ok(id) => id,
        Err(err) => {
            error!("error converting warehouse_id to int: {}", err);
            return Err(AppError::bad_request("error converting warehouse_id to int"));
        }
    };

    let quantity = items.quantity(warehouse_id).await.map_err(|err| {
        error!("error getting items quantity: {}", err);
        AppError::from_items_error(err, "error getting items quantity")
    })?;

    Ok((
        StatusCode::OK,
        Json(json!({ "status": 200, "data": quantity })),
    )
        .into_response())
}

/// `PUT /items`
///
/// Binds the body to [`ItemsCreateRequest`] and hands the item sequence to
/// the use-case in arrival order. A malformed body never reaches the
/// use-case; created items are not echoed back.
pub async fn create_items(
    State(items): State<Arc<dyn ItemsUseCase>>,
    payload: Result<Json<ItemsCreateRequest>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(request) = payload.map_err(|err| {
        error!("error binding JSON: {}", err);
        AppError::bad_request("provided data is invalid")
    })?;

    items.create_items(request.items).await.map_err(|err| {
        error!("failed to create items: {}", err);
        AppError::from_items_error(err, "items service problems")
    })?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "status": 201, "message": "items successfully created" })),
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::item::Item;
    use crate::services::items_service::{ItemsError, ItemsResult};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Use-case double that records every invocation.
    #[derive(Default)]
    struct RecordingUseCase {
        quantity_calls: Mutex<Vec<i64>>,
        create_calls: Mutex<Vec<Vec<Item>>>,
        fail: bool,
    }

    #[async_trait]
    impl ItemsUseCase for RecordingUseCase {
        async fn quantity(&self, warehouse_id: i64) -> ItemsResult<i64> {
            self.quantity_calls.lock().unwrap().push(warehouse_id);
            if self.fail {
                return Err(ItemsError::Sqlx(sqlx::Error::PoolTimedOut));
            }
            Ok(7)
        }

        async fn create_items(&self, items: Vec<Item>) -> ItemsResult<()> {
            self.create_calls.lock().unwrap().push(items);
            if self.fail {
                return Err(ItemsError::Sqlx(sqlx::Error::PoolTimedOut));
            }
            Ok(())
        }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn item(id: i64, name: &str) -> Item {
        Item {
            id,
            name: name.to_string(),
            size: None,
            warehouse_id: None,
        }
    }

    #[tokio::test]
    async fn quantity_invokes_use_case_once_with_parsed_id() {
        let mock = Arc::new(RecordingUseCase::default());
        let state: Arc<dyn ItemsUseCase> = mock.clone();

        let response = get_items_quantity(State(state), Path("42".to_string()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(*mock.quantity_calls.lock().unwrap(), vec![42]);

        let body = body_json(response).await;
        assert_eq!(body["status"], 200);
        assert_eq!(body["data"], 7);
    }

    #[tokio::test]
    async fn quantity_rejects_non_integer_id_without_calling_use_case() {
        for bad in ["abc", "1.5", ""] {
            let mock = Arc::new(RecordingUseCase::default());
            let state: Arc<dyn ItemsUseCase> = mock.clone();

            let err = get_items_quantity(State(state), Path(bad.to_string()))
                .await
                .unwrap_err();

            assert_eq!(err.status, StatusCode::BAD_REQUEST);
            assert_eq!(err.message, "error converting warehouse_id to int");
            assert!(mock.quantity_calls.lock().unwrap().is_empty());
        }
    }

    #[tokio::test]
    async fn quantity_maps_storage_failure_to_500_with_fixed_message() {
        let mock = Arc::new(RecordingUseCase {
            fail: true,
            ..Default::default()
        });
        let state: Arc<dyn ItemsUseCase> = mock.clone();

        let err = get_items_quantity(State(state), Path("42".to_string()))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "error getting items quantity");
        assert_eq!(*mock.quantity_calls.lock().unwrap(), vec![42]);
    }

    #[tokio::test]
    async fn create_passes_full_sequence_in_order_exactly_once() {
        let mock = Arc::new(RecordingUseCase::default());
        let state: Arc<dyn ItemsUseCase> = mock.clone();

        let request = ItemsCreateRequest {
            items: vec![item(1, "box"), item(2, "crate"), item(3, "pallet")],
        };
        let response = create_items(State(state), Ok(Json(request))).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let calls = mock.create_calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            vec![item(1, "box"), item(2, "crate"), item(3, "pallet")]
        );
    }

    #[tokio::test]
    async fn create_success_returns_confirmation_without_echoing_items() {
        let mock = Arc::new(RecordingUseCase::default());
        let state: Arc<dyn ItemsUseCase> = mock.clone();

        let request = ItemsCreateRequest {
            items: vec![item(1, "box")],
        };
        let response = create_items(State(state), Ok(Json(request))).await.unwrap();

        let body = body_json(response).await;
        assert_eq!(body["status"], 201);
        assert_eq!(body["message"], "items successfully created");
        assert!(body.get("data").is_none());
    }

    #[tokio::test]
    async fn create_accepts_empty_item_list() {
        let mock = Arc::new(RecordingUseCase::default());
        let state: Arc<dyn ItemsUseCase> = mock.clone();

        let request = ItemsCreateRequest { items: vec![] };
        let response = create_items(State(state), Ok(Json(request))).await.unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(mock.create_calls.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn create_maps_storage_failure_to_500_with_fixed_message() {
        let mock = Arc::new(RecordingUseCase {
            fail: true,
            ..Default::default()
        });
        let state: Arc<dyn ItemsUseCase> = mock.clone();

        let request = ItemsCreateRequest {
            items: vec![item(1, "box")],
        };
        let err = create_items(State(state), Ok(Json(request)))
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message, "items service problems");
    }
}
