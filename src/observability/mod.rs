//! # Observability Module
//!
//! Structured logging setup. The client emits `tracing` events with a
//! per-request correlation id; embedding hosts either install the
//! subscriber provided here or bring their own.

pub mod logging;

pub use logging::init_logging;
