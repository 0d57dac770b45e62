//! # Session Store Capability
//!
//! The original client mutated ambient browser globals (persistent storage
//! and the current location) from inside its request helper. Here that
//! surface is an explicit capability injected into the request gateway, so
//! hosts decide what "storage" and "navigation" mean and tests can
//! substitute an in-memory fake.

use async_trait::async_trait;

/// Capability over the ambient session state: a persisted credential token
/// plus the current navigation location.
///
/// The request gateway only ever clears the token; setting it happens
/// exclusively in the login flow. Implementations must treat
/// [`navigate`](SessionStore::navigate) as a hard transition that discards
/// any in-memory application state, not an in-app route change.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Whether a session context exists at all
    ///
    /// Returns false in hosts with no session surface (e.g. server-side
    /// rendering); invalidation skips entirely in that case.
    async fn is_active(&self) -> bool;

    /// Read the persisted credential token
    async fn token(&self) -> Option<String>;

    /// Persist the credential token
    async fn set_token(&self, token: &str);

    /// Remove the persisted credential token; clearing an absent token is a no-op
    async fn clear_token(&self);

    /// The current navigation path, including any query string
    async fn current_path(&self) -> Option<String>;

    /// Perform a hard navigation to the given path
    async fn navigate(&self, path: &str);
}
