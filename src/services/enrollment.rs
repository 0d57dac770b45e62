//! Enrollment endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::error::ClientResult;
use crate::gateway::RequestGateway;

/// An enrollment record linking a user to a course
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: String,
    pub course_id: String,
    pub user_id: String,
    pub enrolled_at: DateTime<Utc>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct EnrollRequest<'a> {
    course_id: &'a str,
}

/// Enrollment endpoints
pub struct EnrollmentService {
    gateway: Arc<RequestGateway>,
}

impl EnrollmentService {
    pub fn new(gateway: Arc<RequestGateway>) -> Self {
        Self { gateway }
    }

    /// Enroll the current user in a course
    pub async fn enroll(&self, course_id: &str) -> ClientResult<Enrollment> {
        self.gateway
            .post("/enrollments", &EnrollRequest { course_id })
            .await
    }

    /// List the current user's enrollments
    pub async fn my_enrollments(&self) -> ClientResult<Vec<Enrollment>> {
        self.gateway.get("/enrollments/mine").await
    }

    /// Drop an enrollment
    pub async fn drop(&self, enrollment_id: &str) -> ClientResult<()> {
        self.gateway
            .delete(&format!("/enrollments/{enrollment_id}"))
            .await
    }
}
