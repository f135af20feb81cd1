//
//  live-editor-api
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/08.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # HTTP Client for the Live Editor API
//!
//! This module provides the request dispatcher at the heart of the crate.
//! It builds per-service URLs, attaches bearer-token authorization, sends
//! the request, and transparently refreshes the OAuth session when the API
//! answers `401 Unauthorized` — retrying the original request exactly once.
//!
//! ## Refresh protocol
//!
//! A single logical call performs at most one token refresh:
//!
//! - If authorization is wanted and no access token is held, the session is
//!   refreshed *before* the request goes out, and a later 401 will not
//!   refresh again.
//! - If the first response is a 401 and no refresh has happened yet, the
//!   session is refreshed and the request is resent once. The second
//!   response is returned as-is, even if it is still a 401.
//!
//! A failing refresh aborts the call with
//! [`ApiError::OAuthRefresh`](crate::ApiError); there is no refresh loop.

use reqwest::header::{HeaderMap, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use url::Url;

use super::response::ApiResponse;
use super::uri::service_url;
use super::{ApiError, Service, JSON_API_MEDIA_TYPE};
use crate::auth;
use crate::auth::TokenPair;
use crate::config::ClientConfig;

/// Per-request options for [`ApiClient`] calls.
///
/// Construct with struct-update syntax over [`Default`]:
///
/// ```rust
/// use live_editor_api::RequestOptions;
/// use serde_json::json;
///
/// let options = RequestOptions {
///     payload: Some(json!({ "data": { "type": "layouts" } })),
///     ..Default::default()
/// };
///
/// assert!(options.authorize);
/// assert!(options.json_api);
/// ```
///
/// # Fields
///
/// * `authorize` - Whether the request is authorized with an access token.
///   Defaults to `true`.
/// * `json_api` - Whether the request follows the JSON API convention
///   (`Accept`, and `Content-Type` when a payload is present). Defaults to
///   `true`.
/// * `payload` - Body data serialized to JSON. Most writes use this.
/// * `form_data` - Key/value pairs sent as a URL-encoded form body instead
///   of a JSON payload.
/// * `domain` - Admin domain to use instead of the configured one.
/// * `port` - Port to use instead of the configured per-service one.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// Whether the request is authorized with an access token.
    pub authorize: bool,

    /// Whether the request follows the JSON API convention.
    pub json_api: bool,

    /// Body data serialized to JSON.
    pub payload: Option<Value>,

    /// Key/value pairs sent as a URL-encoded form body.
    pub form_data: Option<Vec<(String, String)>>,

    /// Admin domain override for this request.
    pub domain: Option<String>,

    /// Port override for this request.
    pub port: Option<u16>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            authorize: true,
            json_api: true,
            payload: None,
            form_data: None,
            domain: None,
            port: None,
        }
    }
}

/// The Live Editor API client.
///
/// Owns the HTTP transport and the [`ClientConfig`]. All requests go through
/// one of the verb methods ([`get`](Self::get), [`post`](Self::post),
/// [`patch`](Self::patch), [`delete`](Self::delete)), which share the
/// dispatch-and-refresh path described in the module docs.
///
/// Calls take `&mut self` because a refresh rewrites the token fields of the
/// configuration in place; sharing a client across threads therefore
/// requires caller-side synchronization.
///
/// # Example
///
/// ```rust,no_run
/// use live_editor_api::{ApiClient, ClientConfig, RequestOptions, Service};
///
/// # async fn example() -> Result<(), live_editor_api::ApiError> {
/// let mut config = ClientConfig::new("example.liveeditorapp.com");
/// config.access_token = Some("1234567890".to_string());
/// config.refresh_token = Some("0987654321".to_string());
///
/// let mut client = ApiClient::new(config)?;
/// let response = client
///     .get("/layouts", Service::Cms, RequestOptions::default())
///     .await?;
/// println!("{}", response.status());
/// # Ok(())
/// # }
/// ```
pub struct ApiClient {
    /// The underlying HTTP client.
    http: Client,
    /// Connection and credential configuration.
    config: ClientConfig,
}

impl ApiClient {
    /// Creates a client for the given configuration.
    ///
    /// The transport is built with the configured user agent and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Network`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(config.user_agent())
            .timeout(config.timeout())
            .build()?;

        Ok(Self { http, config })
    }

    /// Creates a client over a caller-supplied transport.
    ///
    /// Useful when the caller needs transport-level control (proxies, DNS
    /// overrides in tests); the supplied client's own timeout settings
    /// apply.
    pub fn with_http(http: Client, config: ClientConfig) -> Self {
        Self { http, config }
    }

    /// The current configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Mutable access to the configuration.
    pub fn config_mut(&mut self) -> &mut ClientConfig {
        &mut self.config
    }

    /// The underlying HTTP transport.
    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    /// Performs a `GET` operation on the Live Editor API.
    ///
    /// # Parameters
    ///
    /// * `path` - URL path to request, e.g. `/site`.
    /// * `service` - Service to send the request to.
    /// * `options` - Per-request options; see [`RequestOptions`].
    pub async fn get(
        &mut self,
        path: &str,
        service: Service,
        options: RequestOptions,
    ) -> Result<ApiResponse, ApiError> {
        self.dispatch(Method::GET, path, service, options).await
    }

    /// Performs a `POST` operation on the Live Editor API.
    ///
    /// # Parameters
    ///
    /// * `path` - URL path to post to, e.g. `/themes/layouts`.
    /// * `service` - Service to send the request to.
    /// * `options` - Per-request options. Note that JSON API payloads go in
    ///   `payload`; `form_data` is for plain form posts such as OAuth
    ///   grants.
    pub async fn post(
        &mut self,
        path: &str,
        service: Service,
        options: RequestOptions,
    ) -> Result<ApiResponse, ApiError> {
        self.dispatch(Method::POST, path, service, options).await
    }

    /// Performs a `PATCH` operation on the Live Editor API.
    ///
    /// # Parameters
    ///
    /// * `path` - URL path to patch, e.g. `/themes/layouts/1`.
    /// * `service` - Service to send the request to.
    /// * `options` - Per-request options; see [`RequestOptions`].
    pub async fn patch(
        &mut self,
        path: &str,
        service: Service,
        options: RequestOptions,
    ) -> Result<ApiResponse, ApiError> {
        self.dispatch(Method::PATCH, path, service, options).await
    }

    /// Performs a `DELETE` operation on the Live Editor API.
    ///
    /// # Parameters
    ///
    /// * `path` - URL path to delete, e.g. `/themes/layouts/1`.
    /// * `service` - Service to send the request to.
    /// * `options` - Per-request options; see [`RequestOptions`].
    pub async fn delete(
        &mut self,
        path: &str,
        service: Service,
        options: RequestOptions,
    ) -> Result<ApiResponse, ApiError> {
        self.dispatch(Method::DELETE, path, service, options).await
    }

    /// Builds, sends, and (at most once) retries one API request.
    async fn dispatch(
        &mut self,
        method: Method,
        path: &str,
        service: Service,
        options: RequestOptions,
    ) -> Result<ApiResponse, ApiError> {
        let mut url = service_url(&self.config, path, service, options.domain.as_deref())?;
        if let Some(port) = options.port.or_else(|| self.config.ports.get(service)) {
            url.set_port(Some(port))
                .map_err(|_| ApiError::InvalidDomain(self.config.domain.clone()))?;
        }

        // Refresh up front when authorization is wanted and no access token
        // is held; the 401 handler below must not refresh a second time.
        let mut refreshed_oauth: Option<TokenPair> = None;
        if options.authorize && self.config.access_token.is_none() {
            refreshed_oauth = Some(self.refresh_session().await?);
        }

        tracing::debug!(%method, %url, "dispatching API request");
        let (mut status, mut headers, mut body) = self.round_trip(&method, &url, &options).await?;

        if status == StatusCode::UNAUTHORIZED && options.authorize && refreshed_oauth.is_none() {
            tracing::warn!(%url, "unauthorized response, refreshing session and retrying once");
            refreshed_oauth = Some(self.refresh_session().await?);
            (status, headers, body) = self.round_trip(&method, &url, &options).await?;
        }

        Ok(ApiResponse::new(status, headers, body, refreshed_oauth))
    }

    /// Exchanges the held refresh token for a new pair and stores it.
    async fn refresh_session(&mut self) -> Result<TokenPair, ApiError> {
        let refresh_token = self
            .config
            .refresh_token
            .clone()
            .ok_or(ApiError::MissingRefreshToken)?;

        let pair =
            auth::request_refreshed_tokens(&self.http, &self.config, &refresh_token, None).await?;
        auth::store_tokens(&mut self.config, &pair);
        Ok(pair)
    }

    /// Composes and sends one request, returning the raw response parts.
    async fn round_trip(
        &self,
        method: &Method,
        url: &Url,
        options: &RequestOptions,
    ) -> Result<(StatusCode, HeaderMap, String), ApiError> {
        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .header(USER_AGENT, self.config.user_agent());

        if options.authorize {
            if let Some(token) = &self.config.access_token {
                request = request.bearer_auth(token);
            }
        }

        if options.json_api {
            request = request.header(ACCEPT, JSON_API_MEDIA_TYPE);
            if options.payload.is_some() {
                request = request.header(CONTENT_TYPE, JSON_API_MEDIA_TYPE);
            }
        }

        if let Some(form) = &options.form_data {
            request = request.form(form);
        } else if let Some(payload) = &options.payload {
            request = request.body(serde_json::to_vec(payload)?);
        }

        let response = request.send().await?;
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.text().await?;

        Ok((status, headers, body))
    }
}
