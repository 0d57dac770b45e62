//! Admin dashboard endpoints.
//!
//! All of these require an admin session; an expired one surfaces as an
//! authentication failure and the gateway tears the session down before the
//! error reaches the caller.

use serde::Serialize;
use std::sync::Arc;

use crate::core::error::ClientResult;
use crate::gateway::RequestGateway;
use crate::services::courses::Course;
use crate::services::users::{Role, UserProfile};
use crate::services::Page;

#[derive(Debug, Clone, Serialize)]
struct SetRoleRequest {
    role: Role,
}

/// Admin endpoints
pub struct AdminService {
    gateway: Arc<RequestGateway>,
}

impl AdminService {
    pub fn new(gateway: Arc<RequestGateway>) -> Self {
        Self { gateway }
    }

    /// List all accounts, paginated
    pub async fn list_users(&self, page: u32, page_size: u32) -> ClientResult<Page<UserProfile>> {
        self.gateway
            .get(&format!("/admin/users?page={page}&pageSize={page_size}"))
            .await
    }

    /// Change an account's role
    pub async fn set_user_role(&self, user_id: &str, role: Role) -> ClientResult<UserProfile> {
        self.gateway
            .put(&format!("/admin/users/{user_id}/role"), &SetRoleRequest { role })
            .await
    }

    /// List every course including unpublished drafts, paginated
    pub async fn list_courses(&self, page: u32, page_size: u32) -> ClientResult<Page<Course>> {
        self.gateway
            .get(&format!("/admin/courses?page={page}&pageSize={page_size}"))
            .await
    }

    /// Publish a draft course
    pub async fn publish_course(&self, course_id: &str) -> ClientResult<Course> {
        self.gateway
            .post(
                &format!("/admin/courses/{course_id}/publish"),
                &serde_json::json!({}),
            )
            .await
    }
}
