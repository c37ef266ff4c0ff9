//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{
    CreateOrderResponse, MessageResponse, OrderApiData, UpdateStatusResponse,
};
use crate::models::{NewOrder, Order};
use crate::store::OrderSummary;

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "OrderDesk API",
        version = "1.0.0",
        description = "Minimal in-memory order management service: create, list, update and summarize orders.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::gateway::handlers::create_order,
        crate::gateway::handlers::list_orders,
        crate::gateway::handlers::get_order,
        crate::gateway::handlers::update_order_status,
        crate::gateway::handlers::delete_all_orders,
        crate::gateway::handlers::get_summary,
    ),
    components(
        schemas(
            Order,
            NewOrder,
            OrderApiData,
            CreateOrderResponse,
            UpdateStatusResponse,
            MessageResponse,
            OrderSummary,
            HealthResponse,
        )
    ),
    tags(
        (name = "Orders", description = "Order CRUD operations"),
        (name = "Summary", description = "Aggregate statistics"),
        (name = "System", description = "Service health")
    )
)]
pub struct ApiDoc;
