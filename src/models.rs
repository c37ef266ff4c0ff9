//! Order data model

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status assigned to newly created orders when the client sends none.
pub const DEFAULT_STATUS: &str = "pending";

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

/// A customer purchase record with line items, status, and timestamps.
///
/// `status` is free text: no transition graph is enforced, any status string
/// may follow any other. Invariant: `created_at <= updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    #[schema(example = "Alice")]
    pub customer_name: String,
    /// Item name -> unit price. Keys unique by construction.
    #[schema(value_type = Object, example = json!({"widget": 9.99, "gadget": 5.0}))]
    pub items: BTreeMap<String, Decimal>,
    #[schema(example = "pending")]
    pub status: String,
    /// Server-stamped at creation.
    pub created_at: DateTime<Utc>,
    /// Server-stamped at creation and on every status update.
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Sum of this order's item prices.
    pub fn total(&self) -> Decimal {
        self.items.values().copied().sum()
    }
}

/// Fields a client supplies when creating an order.
///
/// Carries no timestamp fields: `created_at`/`updated_at` are always
/// server-stamped at insertion, so client-sent values are dropped during
/// deserialization.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct NewOrder {
    #[schema(example = "Alice")]
    pub customer_name: String,
    /// Item name -> unit price
    #[schema(value_type = Object, example = json!({"widget": 9.99, "gadget": 5.0}))]
    pub items: BTreeMap<String, Decimal>,
    /// Defaults to "pending" when absent
    #[serde(default = "default_status")]
    #[schema(example = "pending")]
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_order_status_defaults_to_pending() {
        let req: NewOrder =
            serde_json::from_str(r#"{"customer_name": "Alice", "items": {"widget": 9.99}}"#)
                .unwrap();
        assert_eq!(req.status, DEFAULT_STATUS);
    }

    #[test]
    fn test_client_timestamps_are_dropped() {
        // Unknown fields (including timestamps) are ignored at the serde layer
        let req: NewOrder = serde_json::from_str(
            r#"{
                "customer_name": "Bob",
                "items": {},
                "status": "shipped",
                "created_at": "1999-01-01T00:00:00Z",
                "updated_at": "1999-01-01T00:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(req.status, "shipped");
    }

    #[test]
    fn test_order_total_sums_item_prices() {
        let order = Order {
            customer_name: "Alice".to_string(),
            items: BTreeMap::from([
                ("widget".to_string(), Decimal::new(999, 2)),
                ("gadget".to_string(), Decimal::new(500, 2)),
            ]),
            status: DEFAULT_STATUS.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(order.total(), Decimal::new(1499, 2));
    }
}
