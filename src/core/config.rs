//! # Configuration Module
//!
//! This module handles client configuration: the backend base address, the
//! application-level success code, the route table used by session
//! invalidation, and transport/logging settings.
//!
//! ## Key Features
//! - YAML/JSON configuration parsing with serde
//! - Environment variable override support
//! - Validation with accumulated, detailed error messages

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

use crate::core::error::{ClientError, ClientResult};
use crate::core::types::DEFAULT_SUCCESS_CODE;

/// Main client configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Absolute base address of the REST backend (e.g. `https://api.example.com`)
    pub base_url: String,

    /// Envelope code that marks application-level success
    #[serde(default = "default_success_code")]
    pub success_code: i64,

    /// Route table consulted by session invalidation
    #[serde(default)]
    pub routes: RouteConfig,

    /// Transport-level settings applied when building the HTTP client
    #[serde(default)]
    pub transport: TransportConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LogConfig,
}

fn default_success_code() -> i64 {
    DEFAULT_SUCCESS_CODE
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            success_code: DEFAULT_SUCCESS_CODE,
            routes: RouteConfig::default(),
            transport: TransportConfig::default(),
            logging: LogConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Create a configuration pointing at the given backend, defaults elsewhere
    pub fn new<S: Into<String>>(base_url: S) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a YAML file
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> ClientResult<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ClientError::config(format!("Failed to read config file: {e}")))?;

        let mut config: ClientConfig = serde_yaml::from_str(&content)
            .map_err(|e| ClientError::config(format!("Failed to parse config: {e}")))?;

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file
    pub async fn load_from_json<P: AsRef<Path>>(path: P) -> ClientResult<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ClientError::config(format!("Failed to read config file: {e}")))?;

        let mut config: ClientConfig = serde_json::from_str(&content)
            .map_err(|e| ClientError::config(format!("Failed to parse JSON config: {e}")))?;

        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment variable overrides to configuration
    ///
    /// Variables follow the pattern `LMS_CLIENT_<FIELD>`, for example
    /// `LMS_CLIENT_BASE_URL=https://staging.example.com`.
    pub fn apply_env_overrides(&mut self) -> ClientResult<()> {
        use std::env;

        if let Ok(url) = env::var("LMS_CLIENT_BASE_URL") {
            self.base_url = url;
        }

        if let Ok(code) = env::var("LMS_CLIENT_SUCCESS_CODE") {
            self.success_code = code
                .parse()
                .map_err(|e| ClientError::config(format!("Invalid LMS_CLIENT_SUCCESS_CODE: {e}")))?;
        }

        if let Ok(timeout) = env::var("LMS_CLIENT_REQUEST_TIMEOUT") {
            self.transport.request_timeout = Some(humantime::parse_duration(&timeout).map_err(
                |e| ClientError::config(format!("Invalid LMS_CLIENT_REQUEST_TIMEOUT: {e}")),
            )?);
        }

        if let Ok(agent) = env::var("LMS_CLIENT_USER_AGENT") {
            self.transport.user_agent = agent;
        }

        if let Ok(level) = env::var("LMS_CLIENT_LOG_LEVEL") {
            self.logging.level = level;
        }

        Ok(())
    }

    /// Validate the configuration, accumulating every problem found
    pub fn validate(&self) -> ClientResult<()> {
        let mut errors = Vec::new();

        match Url::parse(&self.base_url) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    errors.push(format!(
                        "base_url must use http or https, got {}",
                        url.scheme()
                    ));
                }
                if url.host_str().is_none() {
                    errors.push("base_url must include a host".to_string());
                }
            }
            Err(e) => errors.push(format!("base_url is not a valid URL: {e}")),
        }

        if self.success_code == 0 {
            errors.push("success_code must be nonzero".to_string());
        }

        for prefix in &self.routes.protected_prefixes {
            if !prefix.starts_with('/') {
                errors.push(format!("protected prefix must start with '/': {prefix}"));
            }
        }

        for page in &self.routes.auth_pages {
            if !page.starts_with('/') {
                errors.push(format!("auth page must start with '/': {page}"));
            }
        }

        if !self.routes.login_path.starts_with('/') {
            errors.push(format!(
                "login_path must start with '/': {}",
                self.routes.login_path
            ));
        }

        if self.transport.user_agent.is_empty() {
            errors.push("user_agent cannot be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ClientError::config(errors.join("; ")))
        }
    }
}

/// Route table used to decide whether invalidation must redirect
///
/// Protected prefixes mark areas that require an authenticated session;
/// auth pages are exempt from redirection so invalidation on the login or
/// signup page cannot loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Path prefixes that require an authenticated session
    #[serde(default = "default_protected_prefixes")]
    pub protected_prefixes: Vec<String>,

    /// Pages that are part of the authentication flow itself
    #[serde(default = "default_auth_pages")]
    pub auth_pages: Vec<String>,

    /// Target of the hard redirect performed on invalidation
    #[serde(default = "default_login_path")]
    pub login_path: String,
}

fn default_protected_prefixes() -> Vec<String> {
    vec![
        "/admin".to_string(),
        "/instructor".to_string(),
        "/profile".to_string(),
        "/my-courses".to_string(),
    ]
}

fn default_auth_pages() -> Vec<String> {
    vec!["/login".to_string(), "/signup".to_string()]
}

fn default_login_path() -> String {
    "/login".to_string()
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            protected_prefixes: default_protected_prefixes(),
            auth_pages: default_auth_pages(),
            login_path: default_login_path(),
        }
    }
}

impl RouteConfig {
    /// Whether the path lies under any protected prefix
    ///
    /// Matching is segment-aware: `/admin` covers `/admin` and `/admin/users`
    /// but not `/administration`.
    pub fn is_protected(&self, path: &str) -> bool {
        self.protected_prefixes
            .iter()
            .any(|prefix| Self::starts_with_segment(path, prefix))
    }

    /// Whether the path is a login/signup page
    pub fn is_auth_page(&self, path: &str) -> bool {
        self.auth_pages
            .iter()
            .any(|page| Self::starts_with_segment(path, page))
    }

    fn starts_with_segment(path: &str, prefix: &str) -> bool {
        path == prefix
            || path
                .strip_prefix(prefix)
                .is_some_and(|rest| rest.starts_with('/') || rest.starts_with('?'))
    }
}

/// Transport-level settings applied when building the HTTP client
///
/// The request pipeline itself enforces no timeout; a configured timeout is
/// handed to the HTTP client and applies at the transport layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransportConfig {
    /// Optional transport-level request timeout
    #[serde(default, with = "humantime_serde::option")]
    pub request_timeout: Option<Duration>,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_user_agent() -> String {
    concat!("lms-client/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            request_timeout: None,
            user_agent: default_user_agent(),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default log level filter (overridden by `RUST_LOG`)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable single-line output
    #[default]
    Compact,
    /// Structured JSON output
    Json,
}
