//! Course progress endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::error::ClientResult;
use crate::gateway::RequestGateway;

/// Progress of the current user through one course
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseProgress {
    pub course_id: String,
    #[serde(default)]
    pub completed_lessons: Vec<String>,
    pub percent_complete: f32,
    pub updated_at: DateTime<Utc>,
}

/// Progress endpoints
pub struct ProgressService {
    gateway: Arc<RequestGateway>,
}

impl ProgressService {
    pub fn new(gateway: Arc<RequestGateway>) -> Self {
        Self { gateway }
    }

    /// Fetch the current user's progress in a course
    pub async fn course_progress(&self, course_id: &str) -> ClientResult<CourseProgress> {
        self.gateway.get(&format!("/progress/{course_id}")).await
    }

    /// Mark a lesson complete; returns the refreshed progress
    pub async fn complete_lesson(
        &self,
        course_id: &str,
        lesson_id: &str,
    ) -> ClientResult<CourseProgress> {
        self.gateway
            .post(
                &format!("/progress/{course_id}/lessons/{lesson_id}/complete"),
                &serde_json::json!({}),
            )
            .await
    }
}
