//! # Domain Services
//!
//! Thin typed wrappers over the backend's REST areas. Each service builds
//! an endpoint path and payload and delegates transport, envelope parsing,
//! and failure classification to the request gateway; none of them
//! duplicate that logic.

pub mod admin;
pub mod auth;
pub mod certificates;
pub mod courses;
pub mod enrollment;
pub mod notifications;
pub mod progress;
pub mod search;
pub mod tags;
pub mod users;

pub use admin::AdminService;
pub use auth::AuthService;
pub use certificates::CertificateService;
pub use courses::CourseService;
pub use enrollment::EnrollmentService;
pub use notifications::NotificationService;
pub use progress::ProgressService;
pub use search::SearchService;
pub use tags::TagService;
pub use users::UserService;

use serde::{Deserialize, Serialize};

/// One page of a paginated listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total: u64,
}
