//! OrderDesk - minimal in-memory order management service
//!
//! # Modules
//!
//! - [`config`] - YAML application configuration
//! - [`logging`] - tracing bootstrap (rolling file + stdout)
//! - [`models`] - Order data model
//! - [`store`] - In-memory order store
//! - [`gateway`] - HTTP gateway (axum router, handlers, API types)

pub mod config;
pub mod gateway;
pub mod logging;
pub mod models;
pub mod store;

// Convenient re-exports at crate root
pub use models::{NewOrder, Order};
pub use store::{OrderStore, OrderSummary, StoreError};
