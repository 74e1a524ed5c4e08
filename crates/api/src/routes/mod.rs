//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! POST   /api/customers    - Create a customer
//! GET    /api/customers    - List customers
//! POST   /api/orders       - Create an order
//! GET    /api/orders       - List orders
//! GET    /api/orders/{id}  - Fetch one order
//! DELETE /api/orders/{id}  - Delete an order
//! ```

pub mod customers;
pub mod orders;

use axum::Router;
use axum::routing::get;

use crate::state::AppState;

/// Create the customer routes router.
pub fn customer_routes() -> Router<AppState> {
    Router::new().route("/", get(customers::list).post(customers::create))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::list).post(orders::create))
        .route("/{id}", get(orders::get_by_id).delete(orders::delete_by_id))
}

/// Create all API routes, nested under `/api`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/customers", customer_routes())
        .nest("/api/orders", order_routes())
}
