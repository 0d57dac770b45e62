//! # Client Facade
//!
//! Ties one request gateway and one session capability to every domain
//! service. This is the primary entry point for using the library.

use std::sync::Arc;

use crate::core::config::ClientConfig;
use crate::core::error::ClientResult;
use crate::gateway::RequestGateway;
use crate::services::{
    AdminService, AuthService, CertificateService, CourseService, EnrollmentService,
    NotificationService, ProgressService, SearchService, TagService, UserService,
};
use crate::session::SessionStore;

/// Facade over the whole backend API
///
/// All services share a single gateway (and therefore a single cookie jar),
/// so a session established through [`auth`](LmsClient::auth) is visible to
/// every other service.
pub struct LmsClient {
    gateway: Arc<RequestGateway>,
    session: Arc<dyn SessionStore>,
}

impl LmsClient {
    /// Build a client from a configuration and a session capability
    pub fn new(config: &ClientConfig, session: Arc<dyn SessionStore>) -> ClientResult<Self> {
        let gateway = Arc::new(RequestGateway::new(config, session.clone())?);
        Ok(Self { gateway, session })
    }

    /// The shared request gateway
    pub fn gateway(&self) -> Arc<RequestGateway> {
        self.gateway.clone()
    }

    /// The injected session capability
    pub fn session(&self) -> Arc<dyn SessionStore> {
        self.session.clone()
    }

    /// Authentication flows (login, signup, logout)
    pub fn auth(&self) -> AuthService {
        AuthService::new(self.gateway.clone(), self.session.clone())
    }

    /// User profiles
    pub fn users(&self) -> UserService {
        UserService::new(self.gateway.clone())
    }

    /// Admin dashboard
    pub fn admin(&self) -> AdminService {
        AdminService::new(self.gateway.clone())
    }

    /// Course catalog
    pub fn courses(&self) -> CourseService {
        CourseService::new(self.gateway.clone())
    }

    /// Enrollments
    pub fn enrollment(&self) -> EnrollmentService {
        EnrollmentService::new(self.gateway.clone())
    }

    /// Course progress
    pub fn progress(&self) -> ProgressService {
        ProgressService::new(self.gateway.clone())
    }

    /// Certificates
    pub fn certificates(&self) -> CertificateService {
        CertificateService::new(self.gateway.clone())
    }

    /// Notifications
    pub fn notifications(&self) -> NotificationService {
        NotificationService::new(self.gateway.clone())
    }

    /// Catalog search
    pub fn search(&self) -> SearchService {
        SearchService::new(self.gateway.clone())
    }

    /// Catalog tags
    pub fn tags(&self) -> TagService {
        TagService::new(self.gateway.clone())
    }
}
