//! # Session Module
//!
//! The session capability (credential storage + navigation) and the
//! invalidation procedure run when the backend signals the caller is no
//! longer authenticated.

pub mod memory;
pub mod store;

pub use memory::MemorySessionStore;
pub use store::SessionStore;

use tracing::{debug, warn};

use crate::core::config::RouteConfig;

/// Tear down the ambient session after an authentication-class failure
///
/// Clears the persisted credential token, then forces a hard navigation to
/// the login page when (and only when) the user is currently inside a
/// protected area and not already on an auth page. On hosts without a
/// session context this is a complete no-op.
///
/// The procedure is idempotent: running it twice in immediate succession,
/// including from two concurrent failing calls, leaves storage cleared and
/// performs no extra work.
pub async fn invalidate_session(store: &dyn SessionStore, routes: &RouteConfig) {
    if !store.is_active().await {
        debug!("no session context, skipping invalidation");
        return;
    }

    store.clear_token().await;

    let Some(path) = store.current_path().await else {
        return;
    };

    if routes.is_protected(&path) && !routes.is_auth_page(&path) {
        warn!(%path, login = %routes.login_path, "session invalidated on protected path, redirecting");
        store.navigate(&routes.login_path).await;
    } else {
        debug!(%path, "session invalidated outside protected area, no redirect");
    }
}
