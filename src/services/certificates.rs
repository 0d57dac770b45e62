//! Certificate endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::error::ClientResult;
use crate::gateway::RequestGateway;

/// A completion certificate issued to a user
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: String,
    pub course_id: String,
    pub user_id: String,
    pub serial: String,
    pub issued_at: DateTime<Utc>,
    pub download_url: String,
}

/// Certificate endpoints
pub struct CertificateService {
    gateway: Arc<RequestGateway>,
}

impl CertificateService {
    pub fn new(gateway: Arc<RequestGateway>) -> Self {
        Self { gateway }
    }

    /// List the current user's certificates
    pub async fn list_mine(&self) -> ClientResult<Vec<Certificate>> {
        self.gateway.get("/certificates/mine").await
    }

    /// Fetch a certificate by id
    pub async fn get(&self, certificate_id: &str) -> ClientResult<Certificate> {
        self.gateway
            .get(&format!("/certificates/{certificate_id}"))
            .await
    }
}
