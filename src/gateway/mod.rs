//! HTTP gateway: router, shared state, handlers, API types

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post, put},
};
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::store::OrderStore;
use state::AppState;

/// Build the application router around a shared store.
///
/// Split out from [`run_server`] so tests can drive the routes without
/// binding a socket.
pub fn app_router(store: Arc<OrderStore>) -> Router {
    let state = Arc::new(AppState::new(store));

    Router::new()
        .route(
            "/orders/",
            post(handlers::create_order)
                .get(handlers::list_orders)
                .delete(handlers::delete_all_orders),
        )
        .route("/orders/{order_id}", get(handlers::get_order))
        .route(
            "/orders/{order_id}/status",
            put(handlers::update_order_status),
        )
        .route("/summary", get(handlers::get_summary))
        .route("/health", get(handlers::health_check))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()))
}

/// Start the HTTP gateway server
pub async fn run_server(host: &str, port: u16, store: Arc<OrderStore>) {
    let app = app_router(store);

    let addr = format!("{}:{}", host, port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("❌ FATAL: Failed to bind to {}: {}", addr, e);
            eprintln!(
                "   Hint: Port {} may already be in use. Check with: lsof -i :{}",
                port, port
            );
            std::process::exit(1);
        }
    };

    println!("🚀 Gateway listening on http://{}", addr);
    println!("📖 API Docs: http://{}/docs", addr);

    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("❌ FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
