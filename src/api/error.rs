//
//  live-editor-api
//  api/error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/08.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Error taxonomy for Live Editor API operations.
//!
//! Only infrastructure-level failures are modeled here; HTTP error statuses
//! (4xx/5xx) are normal data returned on
//! [`ApiResponse`](crate::api::ApiResponse).

use reqwest::StatusCode;
use thiserror::Error;

/// Unified error type for all Live Editor API operations.
///
/// # Variants
///
/// | Variant | Description |
/// |---------|-------------|
/// | `InvalidDomain` | Admin domain cannot form a service host |
/// | `MissingRefreshToken` | Authorization wanted with no tokens held |
/// | `OAuthGrant` | Password/credentials grant rejected |
/// | `OAuthRefresh` | Refresh-token grant rejected |
/// | `Timeout` | Request exceeded the configured timeout |
/// | `Network` | Transport-level failure reaching the host |
/// | `MalformedBody` | Response body not valid JSON |
///
/// # Example
///
/// ```rust
/// use live_editor_api::ApiError;
///
/// fn describe(err: &ApiError) -> &'static str {
///     match err {
///         ApiError::OAuthRefresh { .. } => "session expired; log in again",
///         ApiError::Timeout(_) | ApiError::Network(_) => "connection trouble",
///         _ => "request failed",
///     }
/// }
/// ```
///
/// # Notes
///
/// - `Timeout` and `Network` both originate from `reqwest::Error`; the
///   `From` impl splits them on [`reqwest::Error::is_timeout`].
/// - `MalformedBody` is only produced on demand, when a caller asks for a
///   parsed body.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The admin domain cannot be split into enough labels to compose a
    /// service host, or the composed host is not a valid URL.
    #[error("Invalid admin domain `{0}`: expected at least two dot-separated labels")]
    InvalidDomain(String),

    /// Authorization was requested but the configuration holds neither an
    /// access token nor a refresh token to obtain one.
    #[error("Authorization requested but no refresh token is configured")]
    MissingRefreshToken,

    /// The OAuth password grant was rejected.
    #[error("OAuth grant rejected ({status}): {detail}")]
    OAuthGrant {
        /// HTTP status returned by the auth service.
        status: StatusCode,
        /// Error detail extracted from the response body.
        detail: String,
    },

    /// The OAuth refresh-token grant was rejected, either during an eager
    /// refresh or on the 401 retry path.
    #[error("Access token refresh failed ({status}): {detail}")]
    OAuthRefresh {
        /// HTTP status returned by the auth service.
        status: StatusCode,
        /// Error detail extracted from the response body.
        detail: String,
    },

    /// The request exceeded the configured timeout.
    #[error("Request timed out: {0}")]
    Timeout(#[source] reqwest::Error),

    /// A network-level error occurred during the request.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// A body could not be decoded as JSON.
    #[error("Malformed JSON body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err)
        } else {
            Self::Network(err)
        }
    }
}
