//
//  live-editor-api
//  api/uri.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/08.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Per-service URL construction.
//!
//! Service hosts are derived from the admin domain by label surgery:
//!
//! | Service | Host shape |
//! |---------|------------|
//! | auth | `auth.api.<root-domain>` |
//! | cms | `<tenant>.cms.api.<root-domain>` |
//! | cdn | `<tenant>.cdn.api.<root-domain>` |
//!
//! The insertion order is a wire-compatibility detail: `api` is inserted at
//! index 1 first, then a non-auth service name is inserted at the same index,
//! pushing `api` one slot further out.

use url::Url;

use super::{ApiError, Service};
use crate::config::ClientConfig;

/// Builds the fully-qualified URL for a path on the given service.
///
/// The effective domain is `domain_override` when given, otherwise the
/// configured admin domain. The scheme follows
/// [`ClientConfig::use_ssl`](crate::ClientConfig).
///
/// # Parameters
///
/// * `config` - Client configuration supplying the domain and SSL flag.
/// * `path` - URL path to request, e.g. `/layouts`. May carry a query string.
/// * `service` - Service whose subdomain to compose.
/// * `domain_override` - Admin domain to use instead of the configured one.
///
/// # Errors
///
/// Returns [`ApiError::InvalidDomain`] when the effective domain has fewer
/// than two dot-separated labels (too ambiguous to compose a service host),
/// or when the composed string does not parse as a URL.
///
/// # Example
///
/// ```rust
/// use live_editor_api::{api::service_url, ClientConfig, Service};
///
/// let config = ClientConfig::new("example.liveeditorapp.com");
/// let url = service_url(&config, "/layouts", Service::Cms, None).unwrap();
/// assert_eq!(url.as_str(), "https://example.cms.api.liveeditorapp.com/layouts");
/// ```
pub fn service_url(
    config: &ClientConfig,
    path: &str,
    service: Service,
    domain_override: Option<&str>,
) -> Result<Url, ApiError> {
    let scheme = if config.use_ssl { "https" } else { "http" };
    let domain = domain_override.unwrap_or(&config.domain);

    let mut labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return Err(ApiError::InvalidDomain(domain.to_string()));
    }

    // `api` goes in first; the auth service then replaces the tenant label,
    // while any other service lands between the tenant and `api`.
    labels.insert(1, "api");
    if service == Service::Auth {
        labels[0] = "auth";
    } else {
        labels.insert(1, service.as_str());
    }

    let host = labels.join(".");
    Url::parse(&format!("{}://{}{}", scheme, host, path))
        .map_err(|_| ApiError::InvalidDomain(domain.to_string()))
}
