//! User profile endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::error::ClientResult;
use crate::gateway::RequestGateway;

/// Role assigned to an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Student,
    Instructor,
    Admin,
}

/// A user profile as returned by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Profile fields a user may change about themselves
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// User profile endpoints
pub struct UserService {
    gateway: Arc<RequestGateway>,
}

impl UserService {
    pub fn new(gateway: Arc<RequestGateway>) -> Self {
        Self { gateway }
    }

    /// Fetch the profile of the currently authenticated user
    pub async fn me(&self) -> ClientResult<UserProfile> {
        self.gateway.get("/users/me").await
    }

    /// Fetch a user profile by id
    pub async fn get(&self, user_id: &str) -> ClientResult<UserProfile> {
        self.gateway.get(&format!("/users/{user_id}")).await
    }

    /// Update the current user's profile
    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> ClientResult<UserProfile> {
        self.gateway.put("/users/me", request).await
    }
}
