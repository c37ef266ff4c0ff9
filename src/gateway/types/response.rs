//! API response types and error mapping
//!
//! - Response DTOs for the order endpoints
//! - `ApiError`: HTTP status + human-readable message, serialized as
//!   `{"detail": message}`
//! - `ApiResult<T>`: handler return alias

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Order;
use crate::store::StoreError;

// ============================================================================
// Response DTOs
// ============================================================================

/// Returned by POST /orders/
#[derive(Debug, Serialize, ToSchema)]
pub struct CreateOrderResponse {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub order_id: String,
    #[schema(example = "Order created successfully")]
    pub message: String,
}

/// Returned by PUT /orders/{order_id}/status
#[derive(Debug, Serialize, ToSchema)]
pub struct UpdateStatusResponse {
    #[schema(example = "Status updated")]
    pub message: String,
    pub order: Order,
}

/// Bare confirmation message (bulk delete)
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "All orders deleted successfully")]
    pub message: String,
}

// ============================================================================
// Error mapping
// ============================================================================

/// Handler result: JSON payload or an HTTP-facing error.
pub type ApiResult<T> = Result<Json<T>, ApiError>;

/// Success helper
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

/// HTTP-facing error: status code plus a human-readable message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Convenience for handlers returning early
    pub fn into_err<T>(self) -> ApiResult<T> {
        Err(self)
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::OrderNotFound => Self::not_found(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorBody {
                detail: self.message,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_not_found_maps_to_404() {
        let err: ApiError = StoreError::OrderNotFound.into();
        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.message, "Order not found");
    }
}
