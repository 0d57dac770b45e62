//! Course catalog endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::core::error::ClientResult;
use crate::gateway::RequestGateway;
use crate::services::Page;

/// A course as returned by the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: String,
    pub title: String,
    pub description: String,
    pub instructor_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

/// Course catalog endpoints
pub struct CourseService {
    gateway: Arc<RequestGateway>,
}

impl CourseService {
    pub fn new(gateway: Arc<RequestGateway>) -> Self {
        Self { gateway }
    }

    /// List published courses, paginated
    pub async fn list(&self, page: u32, page_size: u32) -> ClientResult<Page<Course>> {
        self.gateway
            .get(&format!("/courses?page={page}&pageSize={page_size}"))
            .await
    }

    /// Fetch a single course by id
    pub async fn get(&self, course_id: &str) -> ClientResult<Course> {
        self.gateway.get(&format!("/courses/{course_id}")).await
    }
}
