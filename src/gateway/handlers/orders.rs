//! Order handlers (create, list, get, update status, delete all)

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::models::{NewOrder, Order};

use super::super::state::AppState;
use super::super::types::{
    ApiResult, CreateOrderResponse, ListOrdersParams, MessageResponse, OrderApiData,
    UpdateStatusParams, UpdateStatusResponse, ok,
};

/// Create order endpoint
///
/// POST /orders/
#[utoipa::path(
    post,
    path = "/orders/",
    request_body = NewOrder,
    responses(
        (status = 200, description = "Order created", body = CreateOrderResponse),
        (status = 422, description = "Malformed order payload")
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewOrder>,
) -> ApiResult<CreateOrderResponse> {
    // Timestamps are stamped inside the store; anything the client sent was
    // already dropped during deserialization.
    let order_id = state.store.insert(req);
    tracing::info!("Created order {}", order_id);

    ok(CreateOrderResponse {
        order_id,
        message: "Order created successfully".to_string(),
    })
}

/// List orders with optional status filter and pagination
///
/// GET /orders/
#[utoipa::path(
    get,
    path = "/orders/",
    params(ListOrdersParams),
    responses(
        (status = 200, description = "Matching orders", body = [OrderApiData])
    ),
    tag = "Orders"
)]
pub async fn list_orders(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListOrdersParams>,
) -> ApiResult<Vec<OrderApiData>> {
    let entries = state
        .store
        .list(params.status.as_deref(), params.skip, params.limit);
    tracing::debug!(
        "Listed {} orders (filter={:?}, skip={}, limit={})",
        entries.len(),
        params.status,
        params.skip,
        params.limit
    );

    ok(entries
        .into_iter()
        .map(|(order_id, order)| OrderApiData { order_id, order })
        .collect())
}

/// Get single order by ID
///
/// GET /orders/{order_id}
#[utoipa::path(
    get,
    path = "/orders/{order_id}",
    params(
        ("order_id" = String, Path, description = "Order identifier")
    ),
    responses(
        (status = 200, description = "Order details", body = Order),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> ApiResult<Order> {
    let order = state.store.get(&order_id)?;
    ok(order)
}

/// Update order status
///
/// PUT /orders/{order_id}/status
#[utoipa::path(
    put,
    path = "/orders/{order_id}/status",
    params(
        ("order_id" = String, Path, description = "Order identifier"),
        UpdateStatusParams
    ),
    responses(
        (status = 200, description = "Status updated", body = UpdateStatusResponse),
        (status = 404, description = "Order not found")
    ),
    tag = "Orders"
)]
pub async fn update_order_status(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
    Query(params): Query<UpdateStatusParams>,
) -> ApiResult<UpdateStatusResponse> {
    let order = state.store.update_status(&order_id, &params.new_status)?;
    tracing::info!("Order {} status -> {}", order_id, order.status);

    ok(UpdateStatusResponse {
        message: "Status updated".to_string(),
        order,
    })
}

/// Delete all orders
///
/// DELETE /orders/
#[utoipa::path(
    delete,
    path = "/orders/",
    responses(
        (status = 200, description = "Store emptied", body = MessageResponse)
    ),
    tag = "Orders"
)]
pub async fn delete_all_orders(State(state): State<Arc<AppState>>) -> ApiResult<MessageResponse> {
    state.store.clear();
    tracing::info!("Deleted all orders");

    ok(MessageResponse {
        message: "All orders deleted successfully".to_string(),
    })
}
