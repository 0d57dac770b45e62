//! # LMS Client Library
//!
//! A typed REST client for the LMS backend. Every endpoint speaks the same
//! `{code, message, result}` envelope; this crate centralizes the unwrapping
//! of that envelope, the classification of failures, and the teardown of the
//! ambient session when the backend signals the caller is no longer
//! authenticated. Domain services stay thin: they build paths and payloads
//! and delegate everything else to the request gateway.
//!
//! ## Quick start
//!
//! ```no_run
//! use std::sync::Arc;
//! use lms_client::{ClientConfig, LmsClient, MemorySessionStore};
//!
//! # async fn run() -> lms_client::ClientResult<()> {
//! let config = ClientConfig::new("https://api.lms.example.com");
//! let session = Arc::new(MemorySessionStore::new());
//! let client = LmsClient::new(&config, session)?;
//!
//! let page = client.courses().list(1, 20).await?;
//! for course in page.items {
//!     println!("{}", course.title);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Session invalidation
//!
//! When a call fails with HTTP 401/403, or with a message carrying one of
//! the backend's authentication sentinels, the gateway clears the persisted
//! credential token and, if the current location is inside a protected
//! area, forces a hard navigation to the login page. Both the storage and
//! the navigation surface are behind the [`SessionStore`] capability, so
//! non-browser hosts and tests plug in their own.

/// Core functionality: error types, configuration, and the envelope model
pub mod core;

/// The request gateway every domain service delegates to
pub mod gateway;

/// Structured logging setup
pub mod observability;

/// Thin typed wrappers over the backend's REST areas
pub mod services;

/// Session capability and the invalidation procedure
pub mod session;

mod client;

// Re-export the types almost every caller needs so they can be imported
// straight from the crate root.

pub use crate::core::config::{ClientConfig, LogConfig, LogFormat, RouteConfig, TransportConfig};
pub use crate::core::error::{ClientError, ClientResult};
pub use crate::core::types::{Envelope, RequestOptions, DEFAULT_SUCCESS_CODE};
pub use client::LmsClient;
pub use gateway::{is_auth_failure, RequestGateway};
pub use session::{invalidate_session, MemorySessionStore, SessionStore};
