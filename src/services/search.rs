//! Search endpoints.

use std::sync::Arc;

use crate::core::error::ClientResult;
use crate::gateway::RequestGateway;
use crate::services::courses::Course;
use crate::services::Page;

/// Search endpoints
pub struct SearchService {
    gateway: Arc<RequestGateway>,
}

impl SearchService {
    pub fn new(gateway: Arc<RequestGateway>) -> Self {
        Self { gateway }
    }

    /// Full-text search over the course catalog
    pub async fn courses(&self, query: &str, page: u32) -> ClientResult<Page<Course>> {
        let query = urlencoding::encode(query);
        self.gateway
            .get(&format!("/search/courses?q={query}&page={page}"))
            .await
    }
}
