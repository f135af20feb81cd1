//
//  live-editor-api
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/08.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! This module provides the credential and connection configuration for the
//! Live Editor API client. A [`ClientConfig`] is constructed once by the
//! caller and handed to [`ApiClient`](crate::ApiClient); there is no global
//! state and no configuration file I/O in this crate.
//!
//! ## Overview
//!
//! The configuration carries:
//!
//! - **Connection settings**: admin domain, SSL flag, per-service ports
//! - **Credentials**: OAuth access and refresh tokens
//! - **Request defaults**: user agent, request timeout
//!
//! The token fields are rewritten in place whenever the client refreshes the
//! session, so the same handle keeps working after an access token expires.
//!
//! ## Example
//!
//! ```rust
//! use live_editor_api::ClientConfig;
//!
//! let mut config = ClientConfig::new("example.liveeditorapp.com");
//! config.access_token = Some("1234567890".to_string());
//! config.refresh_token = Some("0987654321".to_string());
//!
//! assert!(config.use_ssl);
//! assert!(config.user_agent().starts_with("live-editor-api/"));
//! ```
//!
//! ## Persistence
//!
//! All types here derive `Serialize`/`Deserialize`, so a caller can store the
//! configuration wherever it likes (TOML file, keychain, environment). The
//! crate itself never touches disk.

use std::time::Duration;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::api::Service;

/// Default request timeout applied when [`ClientConfig::timeout`] is unset.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default user agent sent with every API request, derived from the crate
/// version and the host platform.
static DEFAULT_USER_AGENT: Lazy<String> =
    Lazy::new(|| format!("live-editor-api/{} ({})", crate::VERSION, std::env::consts::OS));

/// Connection and credential configuration for the Live Editor API.
///
/// The caller constructs one of these and passes it to
/// [`ApiClient::new`](crate::ApiClient::new). The access/refresh token fields
/// are updated in place after a successful token refresh, so the
/// configuration always reflects the current session.
///
/// # Fields
///
/// * `domain` - Admin domain to connect to, e.g. `example.liveeditorapp.com`
/// * `email` - Email used to log in (informational; not sent with requests)
/// * `access_token` - Access token to use for request authorization
/// * `refresh_token` - Refresh token to use if `access_token` is not set or
///   is expired
/// * `user_agent` - Overrides the default user agent in request headers
/// * `use_ssl` - Whether to connect with `https` (default) or `http`
/// * `ports` - Per-service port overrides
/// * `timeout` - Request timeout; [`DEFAULT_TIMEOUT`] when unset
///
/// # Example
///
/// ```rust
/// use live_editor_api::{ClientConfig, ServicePorts};
///
/// let config = ClientConfig {
///     domain: "example.liveeditorapp.com".to_string(),
///     access_token: Some("1234567890".to_string()),
///     refresh_token: Some("0987654321".to_string()),
///     ports: ServicePorts {
///         cms: Some(9292),
///         ..Default::default()
///     },
///     ..Default::default()
/// };
///
/// assert_eq!(config.ports.cms, Some(9292));
/// ```
///
/// # Notes
///
/// - Token fields are mutated in place by the client on refresh; sharing one
///   configuration across threads requires caller-side synchronization.
/// - An unset `user_agent` falls back to `live-editor-api/<version> (<os>)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Admin domain to connect to, e.g. `example.liveeditorapp.com`.
    pub domain: String,

    /// Email used to log in.
    #[serde(default)]
    pub email: Option<String>,

    /// Access token to use for request authorization.
    #[serde(default)]
    pub access_token: Option<String>,

    /// Refresh token to use if `access_token` is not set or is expired.
    #[serde(default)]
    pub refresh_token: Option<String>,

    /// Overrides the default user agent used in request headers.
    #[serde(default)]
    pub user_agent: Option<String>,

    /// Whether to connect with SSL.
    #[serde(default = "default_use_ssl")]
    pub use_ssl: bool,

    /// Ports to connect to if different from `80`/`443`, per service.
    #[serde(default)]
    pub ports: ServicePorts,

    /// Request timeout; [`DEFAULT_TIMEOUT`] when unset.
    #[serde(default)]
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            domain: String::new(),
            email: None,
            access_token: None,
            refresh_token: None,
            user_agent: None,
            use_ssl: true,
            ports: ServicePorts::default(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Creates a configuration for the given admin domain with all other
    /// fields at their defaults.
    ///
    /// # Example
    ///
    /// ```rust
    /// use live_editor_api::ClientConfig;
    ///
    /// let config = ClientConfig::new("example.liveeditorapp.com");
    /// assert_eq!(config.domain, "example.liveeditorapp.com");
    /// ```
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            ..Self::default()
        }
    }

    /// Returns the user agent to send with requests, falling back to the
    /// crate default when no override is configured.
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or(&DEFAULT_USER_AGENT)
    }

    /// Returns the effective request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout.unwrap_or(DEFAULT_TIMEOUT)
    }
}

fn default_use_ssl() -> bool {
    true
}

/// Per-service port overrides.
///
/// A service with no override connects on the scheme default (`80`/`443`).
///
/// # Example
///
/// ```rust
/// use live_editor_api::{Service, ServicePorts};
///
/// let ports = ServicePorts {
///     auth: Some(3000),
///     cms: Some(3001),
///     cdn: None,
/// };
///
/// assert_eq!(ports.get(Service::Auth), Some(3000));
/// assert_eq!(ports.get(Service::Cdn), None);
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ServicePorts {
    /// Port for the `auth` service.
    #[serde(default)]
    pub auth: Option<u16>,

    /// Port for the `cms` service.
    #[serde(default)]
    pub cms: Option<u16>,

    /// Port for the `cdn` service.
    #[serde(default)]
    pub cdn: Option<u16>,
}

impl ServicePorts {
    /// Returns the configured port for a service, if any.
    pub fn get(&self, service: Service) -> Option<u16> {
        match service {
            Service::Auth => self.auth,
            Service::Cms => self.cms,
            Service::Cdn => self.cdn,
        }
    }
}
