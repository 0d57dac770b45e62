//! # Gateway Module
//!
//! The request gateway every domain service delegates to.

pub mod request;

pub use request::{is_auth_failure, RequestGateway};
