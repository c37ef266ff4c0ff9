//! In-memory order store
//!
//! Process-wide state: built once at startup, shared via `Arc`, gone at
//! process exit. A single `RwLock` guards every read and write so concurrent
//! handlers cannot tear a summary against an in-flight insert. Guards are
//! never held across await points.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{NewOrder, Order};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Order not found")]
    OrderNotFound,
}

/// Aggregate count and total value across all stored orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct OrderSummary {
    #[schema(example = 1)]
    pub total_orders: usize,
    #[schema(value_type = f64, example = 14.99)]
    pub total_value: Decimal,
}

/// Keyed collection of all orders. Identifiers are UUID v4 strings, generated
/// server-side; uniqueness is probabilistic (collision odds negligible).
///
/// Iteration order is the map's own; no external ordering contract is
/// advertised.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: RwLock<HashMap<String, Order>>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self {
            orders: RwLock::new(HashMap::new()),
        }
    }

    /// Insert a new order and return its generated identifier.
    ///
    /// `created_at` and `updated_at` are stamped to the current time here,
    /// regardless of anything the client sent. Always succeeds.
    pub fn insert(&self, draft: NewOrder) -> String {
        let id = Uuid::new_v4().to_string();
        let now = Utc::now();
        let order = Order {
            customer_name: draft.customer_name,
            items: draft.items,
            status: draft.status,
            created_at: now,
            updated_at: now,
        };
        self.orders.write().unwrap().insert(id.clone(), order);
        id
    }

    /// List `(id, order)` pairs, optionally filtered to an exact status match,
    /// then sliced by `skip`/`limit`.
    ///
    /// Negative `skip` or `limit` values clamp to 0.
    pub fn list(&self, status_filter: Option<&str>, skip: i64, limit: i64) -> Vec<(String, Order)> {
        let skip = skip.max(0) as usize;
        let limit = limit.max(0) as usize;
        self.orders
            .read()
            .unwrap()
            .iter()
            .filter(|(_, order)| status_filter.map_or(true, |s| order.status == s))
            .skip(skip)
            .take(limit)
            .map(|(id, order)| (id.clone(), order.clone()))
            .collect()
    }

    /// Exact key lookup.
    pub fn get(&self, id: &str) -> Result<Order, StoreError> {
        self.orders
            .read()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or(StoreError::OrderNotFound)
    }

    /// Set the status field verbatim (no validation against a fixed set) and
    /// bump `updated_at`. Returns the updated order.
    pub fn update_status(&self, id: &str, new_status: &str) -> Result<Order, StoreError> {
        let mut orders = self.orders.write().unwrap();
        let order = orders.get_mut(id).ok_or(StoreError::OrderNotFound)?;
        order.status = new_status.to_string();
        order.updated_at = Utc::now();
        Ok(order.clone())
    }

    /// Aggregate count and total value. Empty store yields `(0, 0)`.
    pub fn summary(&self) -> OrderSummary {
        let orders = self.orders.read().unwrap();
        OrderSummary {
            total_orders: orders.len(),
            total_value: orders.values().map(Order::total).sum(),
        }
    }

    /// Empty the store unconditionally. Idempotent.
    pub fn clear(&self) {
        self.orders.write().unwrap().clear();
    }

    pub fn len(&self) -> usize {
        self.orders.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.read().unwrap().is_empty()
    }
}
