//! Integration tests for Orderdesk.
//!
//! # Running Tests
//!
//! ```bash
//! # Start MongoDB
//! docker run --rm -p 27017:27017 mongo:7
//!
//! # Start the API server
//! MONGODB_URI=mongodb://localhost:27017 cargo run -p orderdesk-api
//!
//! # Run integration tests
//! cargo test -p orderdesk-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `api_customers` - Customer endpoint tests
//! - `api_orders` - Order endpoint tests
//! - `api_health` - Liveness and readiness tests
//!
//! Tests target a live server at `ORDERDESK_BASE_URL` (default
//! `http://localhost:5000`). Customer fixtures use generated email
//! addresses, so reruns against the same database do not collide with the
//! unique email index.
