//
//  live-editor-api
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/08.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides the HTTP client for the Live Editor API, which is
//! split across three service backends reachable via distinct subdomains:
//!
//! - **auth**: OAuth token grants (`auth.api.<root-domain>`)
//! - **cms**: content management (`<tenant>.cms.api.<root-domain>`)
//! - **cdn**: asset delivery (`<tenant>.cdn.api.<root-domain>`)
//!
//! ## Architecture
//!
//! - [`client`]: the request dispatcher — header/body composition, bearer
//!   authorization, and the one-shot token refresh-and-retry on 401
//! - [`uri`]: per-service URL construction from the admin domain
//! - [`response`]: response wrapper with JSON-API aware accessors
//! - [`error`]: the error taxonomy for infrastructure-level failures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use live_editor_api::{ApiClient, ClientConfig, RequestOptions, Service};
//!
//! # async fn example() -> Result<(), live_editor_api::ApiError> {
//! let mut config = ClientConfig::new("example.liveeditorapp.com");
//! config.access_token = Some("1234567890".to_string());
//! config.refresh_token = Some("0987654321".to_string());
//!
//! let mut client = ApiClient::new(config)?;
//! let response = client
//!     .get("/layouts", Service::Cms, RequestOptions::default())
//!     .await?;
//!
//! if response.is_success() {
//!     println!("{}", response.parsed_body()?);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! HTTP-level errors (4xx/5xx) are returned as data on
//! [`ApiResponse`]; only infrastructure failures (bad configuration,
//! transport errors, rejected token grants) surface as [`ApiError`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Core request dispatcher for the Live Editor API.
pub mod client;

/// Error taxonomy for API operations.
pub mod error;

/// Response wrapper with JSON-API aware accessors.
pub mod response;

/// Per-service URL construction.
pub mod uri;

pub use client::{ApiClient, RequestOptions};
pub use error::ApiError;
pub use response::ApiResponse;
pub use uri::service_url;

/// The JSON API media type, used for both `Content-Type` and `Accept` when a
/// request follows the JSON API convention.
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// A logical Live Editor service backend.
///
/// The service determines both the subdomain composition (see
/// [`service_url`]) and which per-service port override applies.
///
/// # Example
///
/// ```rust
/// use live_editor_api::Service;
///
/// assert_eq!(Service::Cms.as_str(), "cms");
/// assert_eq!(Service::Auth.to_string(), "auth");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    /// The OAuth/identity service.
    Auth,
    /// The content management service.
    Cms,
    /// The asset delivery service.
    Cdn,
}

impl Service {
    /// Returns the subdomain label for this service.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auth => "auth",
            Self::Cms => "cms",
            Self::Cdn => "cdn",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
