//! # Authentication Flow
//!
//! Login, signup, and logout. This is the only layer that writes the
//! persisted credential token; the request gateway only ever clears it.
//! Signup rewrites a couple of backend error sentinels into friendlier
//! copy, a presentation concern deliberately kept out of the gateway.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;

use crate::core::error::{ClientError, ClientResult};
use crate::gateway::RequestGateway;
use crate::services::users::UserProfile;
use crate::session::SessionStore;

/// Credentials submitted by the login form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Fields submitted by the signup form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// An established session: the bearer token plus the signed-in profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub token: String,
    pub user: UserProfile,
}

/// Authentication endpoints
pub struct AuthService {
    gateway: Arc<RequestGateway>,
    session: Arc<dyn SessionStore>,
}

impl AuthService {
    pub fn new(gateway: Arc<RequestGateway>, session: Arc<dyn SessionStore>) -> Self {
        Self { gateway, session }
    }

    /// Sign in and persist the returned bearer token
    pub async fn login(&self, request: &LoginRequest) -> ClientResult<AuthSession> {
        let session: AuthSession = self.gateway.post("/auth/login", request).await?;
        self.session.set_token(&session.token).await;
        Ok(session)
    }

    /// Create an account; a successful signup signs the user in
    pub async fn signup(&self, request: &SignupRequest) -> ClientResult<AuthSession> {
        match self
            .gateway
            .post::<AuthSession, _>("/auth/signup", request)
            .await
        {
            Ok(session) => {
                self.session.set_token(&session.token).await;
                Ok(session)
            }
            Err(err) => Err(rewrite_signup_error(err)),
        }
    }

    /// Sign out
    ///
    /// The backend call is best-effort; the local token is cleared no
    /// matter what the server says.
    pub async fn logout(&self) -> ClientResult<()> {
        let outcome: ClientResult<serde_json::Value> =
            self.gateway.post("/auth/logout", &serde_json::json!({})).await;
        self.session.clear_token().await;
        if let Err(err) = outcome {
            warn!(error = %err, "logout call failed, local session cleared anyway");
        }
        Ok(())
    }
}

/// Map backend signup sentinels to copy fit for a form banner
fn rewrite_signup_error(err: ClientError) -> ClientError {
    let rewrite = |message: &str| -> Option<String> {
        if message.contains("USER_EXISTED") {
            Some("An account with this email already exists.".to_string())
        } else if message.contains("WEAK_PASSWORD") {
            Some("Password must be at least 8 characters.".to_string())
        } else {
            None
        }
    };

    match err {
        ClientError::Http { status, message } => {
            let message = rewrite(&message).unwrap_or(message);
            ClientError::Http { status, message }
        }
        ClientError::Application { code, message } => {
            let message = rewrite(&message).unwrap_or(message);
            ClientError::Application { code, message }
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_error_rewriting() {
        let err = rewrite_signup_error(ClientError::application(4001, "USER_EXISTED"));
        assert_eq!(
            err.to_string(),
            "An account with this email already exists."
        );

        let err = rewrite_signup_error(ClientError::http(400, "WEAK_PASSWORD: too short"));
        assert_eq!(err.to_string(), "Password must be at least 8 characters.");
    }

    #[test]
    fn test_signup_error_rewriting_leaves_other_messages() {
        let err = rewrite_signup_error(ClientError::application(2001, "Course is full"));
        assert_eq!(err.to_string(), "Course is full");

        let err = rewrite_signup_error(ClientError::transport(502));
        assert!(matches!(err, ClientError::Transport { status: 502 }));
    }
}
