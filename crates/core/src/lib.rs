//! Orderdesk Core - Shared types and validation.
//!
//! This crate provides the pure pieces of Orderdesk used by the `api` binary
//! and its tests:
//! - [`types`] - Newtype wrappers (currently the validated [`Email`] address)
//! - [`validate`] - Schema validation turning raw JSON payloads into typed
//!   records, or an enumeration of every violated field
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no database
//! access, no HTTP. This keeps it lightweight and allows it to be used anywhere.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;
pub mod validate;

pub use types::*;
pub use validate::{FieldError, NewCustomer, NewOrder, validate_customer, validate_order};
