//! Aggregate summary handler

use std::sync::Arc;

use axum::extract::State;

use super::super::state::AppState;
use super::super::types::{ApiResult, ok};
use crate::store::OrderSummary;

/// Order count and total value across the whole store
///
/// GET /summary
#[utoipa::path(
    get,
    path = "/summary",
    responses(
        (status = 200, description = "Aggregate summary", body = OrderSummary)
    ),
    tag = "Summary"
)]
pub async fn get_summary(State(state): State<Arc<AppState>>) -> ApiResult<OrderSummary> {
    ok(state.store.summary())
}
