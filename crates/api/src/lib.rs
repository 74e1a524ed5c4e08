//! Orderdesk API library.
//!
//! Exposes the service as a library so the handler pipeline can be driven
//! directly in tests against an in-memory store.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;
pub mod translate;
