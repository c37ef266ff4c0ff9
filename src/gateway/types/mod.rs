//! Gateway types module
//!
//! Types at the API boundary:
//!
//! ## Input Types
//! - [`ListOrdersParams`]: status filter + pagination query parameters
//! - [`UpdateStatusParams`]: new status query parameter
//!
//! ## Output Types
//! - [`OrderApiData`]: order plus its identifier, as returned by list
//! - Response DTOs and the [`ApiError`]/[`ApiResult`] error mapping
//!
//! The creation payload ([`crate::models::NewOrder`]) lives with the data
//! model since the store consumes it directly.

pub mod order;
pub mod response;

// Re-export commonly used types at module root
pub use order::{ListOrdersParams, OrderApiData, UpdateStatusParams};
pub use response::{
    ApiError, ApiResult, CreateOrderResponse, MessageResponse, UpdateStatusResponse, ok,
};
