//! Notification endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::error::ClientResult;
use crate::gateway::RequestGateway;

/// A notification shown in the user's inbox
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Notification endpoints
pub struct NotificationService {
    gateway: Arc<RequestGateway>,
}

impl NotificationService {
    pub fn new(gateway: Arc<RequestGateway>) -> Self {
        Self { gateway }
    }

    /// List notifications, optionally restricted to unread ones
    pub async fn list(&self, unread_only: bool) -> ClientResult<Vec<Notification>> {
        let endpoint = if unread_only {
            "/notifications?unread=true"
        } else {
            "/notifications"
        };
        self.gateway.get(endpoint).await
    }

    /// Mark one notification read
    pub async fn mark_read(&self, notification_id: &str) -> ClientResult<Notification> {
        self.gateway
            .post(
                &format!("/notifications/{notification_id}/read"),
                &serde_json::json!({}),
            )
            .await
    }

    /// Mark every notification read
    pub async fn mark_all_read(&self) -> ClientResult<()> {
        self.gateway
            .post("/notifications/read-all", &serde_json::json!({}))
            .await
    }
}
