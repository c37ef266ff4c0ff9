//! Order API input/output types

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::Order;

fn default_limit() -> i64 {
    10
}

/// Query parameters for the list endpoint.
///
/// `skip`/`limit` arrive as signed integers; negative values are clamped to 0
/// by the store.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListOrdersParams {
    /// Exact-match status filter
    pub status: Option<String>,
    /// Entries dropped from the front of the result
    #[serde(default)]
    pub skip: i64,
    /// Maximum entries returned
    #[serde(default = "default_limit")]
    pub limit: i64,
}

/// Query parameters for the status-update endpoint.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct UpdateStatusParams {
    /// Replacement status, stored verbatim
    pub new_status: String,
}

/// Order as returned by the list endpoint: all order fields plus its
/// identifier, flattened into one object.
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderApiData {
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub order_id: String,
    #[serde(flatten)]
    pub order: Order,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    use chrono::Utc;
    use rust_decimal::Decimal;

    #[test]
    fn test_list_params_defaults() {
        let params: ListOrdersParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.status, None);
        assert_eq!(params.skip, 0);
        assert_eq!(params.limit, 10);
    }

    #[test]
    fn test_order_api_data_flattens_order_fields() {
        let data = OrderApiData {
            order_id: "abc".to_string(),
            order: Order {
                customer_name: "Alice".to_string(),
                items: BTreeMap::from([("widget".to_string(), Decimal::new(999, 2))]),
                status: "pending".to_string(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
        };

        let value = serde_json::to_value(&data).unwrap();
        assert_eq!(value["order_id"], "abc");
        // Order fields sit beside order_id, not nested under an "order" key
        assert_eq!(value["customer_name"], "Alice");
        assert_eq!(value["items"]["widget"], 9.99);
        assert!(value.get("order").is_none());
    }
}
