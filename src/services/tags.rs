//! Tag endpoints.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::error::ClientResult;
use crate::gateway::RequestGateway;

/// A catalog tag with its usage count
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub course_count: u64,
}

/// Tag endpoints
pub struct TagService {
    gateway: Arc<RequestGateway>,
}

impl TagService {
    pub fn new(gateway: Arc<RequestGateway>) -> Self {
        Self { gateway }
    }

    /// List all catalog tags
    pub async fn list(&self) -> ClientResult<Vec<Tag>> {
        self.gateway.get("/tags").await
    }
}
