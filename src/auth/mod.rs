//
//  live-editor-api
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/08.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # OAuth Authentication Module
//!
//! This module implements the two OAuth 2.0 grants the Live Editor auth
//! service supports:
//!
//! 1. **Password grant**: exchange an email/password for a token pair
//! 2. **Refresh grant**: exchange a refresh token for a new token pair
//!
//! Both grants `POST` a form-encoded body to `/oauth/token.json` on the auth
//! service, never attach a bearer token, and are never retried. They send
//! directly over the client's transport rather than through the generic
//! dispatcher, so a failing grant can never trigger another refresh.
//!
//! A successful grant writes the new token pair back into the client's
//! [`ClientConfig`], so subsequent requests authorize with the fresh access
//! token.
//!
//! ## Example
//!
//! ```rust,no_run
//! use live_editor_api::{auth, ApiClient, ClientConfig};
//!
//! # async fn example() -> Result<(), live_editor_api::ApiError> {
//! let config = ClientConfig::new("example.liveeditorapp.com");
//! let mut client = ApiClient::new(config)?;
//!
//! let tokens = auth::password_login(&mut client, "me@example.com", "secret").await?;
//! println!("logged in; access token: {}", tokens.access_token);
//! # Ok(())
//! # }
//! ```

use reqwest::header::USER_AGENT;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::api::{service_url, ApiError, Service};
use crate::config::ClientConfig;

/// Path of the OAuth token endpoint on the auth service.
pub const TOKEN_ENDPOINT: &str = "/oauth/token.json";

/// An access/refresh token pair issued by the auth service.
///
/// Every successful grant returns one of these; the client stores the pair
/// in its [`ClientConfig`] and sends the access token as
/// `Authorization: Bearer <token>` on authorized requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// The bearer token for request authorization.
    pub access_token: String,

    /// The long-lived token exchanged for new pairs when the access token
    /// expires.
    pub refresh_token: String,
}

/// Logs in to the Live Editor API with email and password.
///
/// Sends the OAuth password grant
/// (`grant_type=password&username=<email>&password=<password>`) and, on
/// success, stores the returned token pair in the client's configuration.
///
/// # Parameters
///
/// * `client` - API client whose configuration receives the tokens.
/// * `email` - Email to log in with.
/// * `password` - Password to log in with.
///
/// # Errors
///
/// Returns [`ApiError::OAuthGrant`] when the auth service rejects the
/// credentials, [`ApiError::Timeout`]/[`ApiError::Network`] for transport
/// failures, and [`ApiError::MalformedBody`] when a success response does
/// not contain a token pair.
pub async fn password_login(
    client: &mut crate::ApiClient,
    email: &str,
    password: &str,
) -> Result<TokenPair, ApiError> {
    let params = [
        ("grant_type", "password"),
        ("username", email),
        ("password", password),
    ];

    let pair = request_token(client.http(), client.config(), &params, None).await?;
    store_tokens(client.config_mut(), &pair);
    Ok(pair)
}

/// Requests a new token pair for a refresh token.
///
/// Sends the OAuth refresh grant
/// (`grant_type=refresh_token&refresh_token=<token>`) and, on success,
/// stores the returned pair in the client's configuration.
///
/// # Parameters
///
/// * `client` - API client whose configuration receives the tokens.
/// * `refresh_token` - Refresh token to exchange.
/// * `port_override` - Auth-service port to use instead of the configured
///   one.
///
/// # Errors
///
/// Returns [`ApiError::OAuthRefresh`] when the auth service rejects the
/// grant; transport and decoding failures propagate as with
/// [`password_login`].
pub async fn refresh_access_token(
    client: &mut crate::ApiClient,
    refresh_token: &str,
    port_override: Option<u16>,
) -> Result<TokenPair, ApiError> {
    let pair = request_refreshed_tokens(
        client.http(),
        client.config(),
        refresh_token,
        port_override,
    )
    .await?;
    store_tokens(client.config_mut(), &pair);
    Ok(pair)
}

/// Runs the refresh grant without touching any stored configuration.
///
/// The dispatcher calls this mid-request and performs its own write-back.
pub(crate) async fn request_refreshed_tokens(
    http: &Client,
    config: &ClientConfig,
    refresh_token: &str,
    port_override: Option<u16>,
) -> Result<TokenPair, ApiError> {
    let params = [
        ("grant_type", "refresh_token"),
        ("refresh_token", refresh_token),
    ];

    request_token(http, config, &params, port_override)
        .await
        .map_err(|err| match err {
            ApiError::OAuthGrant { status, detail } => ApiError::OAuthRefresh { status, detail },
            other => other,
        })
}

/// Writes a granted token pair into the configuration.
pub(crate) fn store_tokens(config: &mut ClientConfig, pair: &TokenPair) {
    config.access_token = Some(pair.access_token.clone());
    config.refresh_token = Some(pair.refresh_token.clone());
}

/// Posts a form-encoded grant to the token endpoint and decodes the pair.
///
/// Unauthenticated on purpose: only the user agent travels with the grant,
/// matching what the dispatcher sends for `authorize=false` requests.
async fn request_token(
    http: &Client,
    config: &ClientConfig,
    params: &[(&str, &str)],
    port_override: Option<u16>,
) -> Result<TokenPair, ApiError> {
    let mut url = service_url(config, TOKEN_ENDPOINT, Service::Auth, None)?;
    if let Some(port) = port_override.or(config.ports.auth) {
        url.set_port(Some(port))
            .map_err(|_| ApiError::InvalidDomain(config.domain.clone()))?;
    }

    tracing::debug!(%url, "requesting OAuth tokens");

    let response = http
        .post(url)
        .header(USER_AGENT, config.user_agent())
        .form(params)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        tracing::debug!(%status, "OAuth grant rejected");
        return Err(ApiError::OAuthGrant {
            status,
            detail: grant_error_detail(&body),
        });
    }

    serde_json::from_str(&body).map_err(ApiError::MalformedBody)
}

/// Extracts a readable error detail from a rejected grant's body.
///
/// Probes the `{"error": "..."}` and `{"errors": [{"detail": "..."}]}`
/// conventions before falling back to the raw body.
fn grant_error_detail(body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = json.get("error").and_then(|e| e.as_str()) {
            return message.to_string();
        }

        if let Some(detail) = json
            .get("errors")
            .and_then(|e| e.as_array())
            .and_then(|errors| errors.first())
            .and_then(|e| e.get("detail"))
            .and_then(|d| d.as_str())
        {
            return detail.to_string();
        }
    }

    body.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ApiClient, ClientConfig};
    use mockito::{Matcher, ServerGuard};
    use serde_json::json;

    const AUTH_HOST: &str = "auth.api.liveeditorapp.com";

    fn client_for(server: &ServerGuard) -> ApiClient {
        let addr = server.socket_address();
        let http = reqwest::Client::builder()
            .resolve(AUTH_HOST, addr)
            .build()
            .unwrap();

        let mut config = ClientConfig::new("example.liveeditorapp.com");
        config.use_ssl = false;
        config.ports.auth = Some(addr.port());

        ApiClient::with_http(http, config)
    }

    #[tokio::test]
    async fn password_login_stores_granted_tokens() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", TOKEN_ENDPOINT)
            .match_header("authorization", Matcher::Missing)
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("grant_type".into(), "password".into()),
                Matcher::UrlEncoded("username".into(), "me@example.com".into()),
                Matcher::UrlEncoded("password".into(), "n4ch0h4t".into()),
            ]))
            .with_status(200)
            .with_body(
                json!({ "access_token": "1234567890", "refresh_token": "0987654321" })
                    .to_string(),
            )
            .create_async()
            .await;

        let mut client = client_for(&server);
        let pair = password_login(&mut client, "me@example.com", "n4ch0h4t")
            .await
            .unwrap();

        assert_eq!(pair.access_token, "1234567890");
        assert_eq!(pair.refresh_token, "0987654321");
        assert_eq!(client.config().access_token.as_deref(), Some("1234567890"));
        assert_eq!(client.config().refresh_token.as_deref(), Some("0987654321"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn rejected_password_grant_is_an_oauth_grant_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", TOKEN_ENDPOINT)
            .with_status(401)
            .with_body(json!({ "error": "invalid_grant" }).to_string())
            .create_async()
            .await;

        let mut client = client_for(&server);
        let err = password_login(&mut client, "me@example.com", "wrong")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ApiError::OAuthGrant { status, ref detail }
                if status == reqwest::StatusCode::UNAUTHORIZED && detail == "invalid_grant"
        ));
        assert!(client.config().access_token.is_none());
    }

    #[tokio::test]
    async fn refresh_grant_stores_granted_tokens() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", TOKEN_ENDPOINT)
            .match_body(Matcher::AllOf(vec![
                Matcher::UrlEncoded("grant_type".into(), "refresh_token".into()),
                Matcher::UrlEncoded("refresh_token".into(), "0987654321".into()),
            ]))
            .with_status(200)
            .with_body(
                json!({ "access_token": "fresh-access", "refresh_token": "fresh-refresh" })
                    .to_string(),
            )
            .create_async()
            .await;

        let mut client = client_for(&server);
        let pair = refresh_access_token(&mut client, "0987654321", None)
            .await
            .unwrap();

        assert_eq!(pair.access_token, "fresh-access");
        assert_eq!(client.config().refresh_token.as_deref(), Some("fresh-refresh"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn rejected_refresh_grant_is_an_oauth_refresh_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", TOKEN_ENDPOINT)
            .with_status(400)
            .with_body(json!({ "error": "invalid_grant" }).to_string())
            .create_async()
            .await;

        let mut client = client_for(&server);
        let err = refresh_access_token(&mut client, "stale", None)
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::OAuthRefresh { .. }));
    }

    #[test]
    fn grant_error_detail_probes_both_conventions() {
        assert_eq!(
            grant_error_detail(&json!({ "error": "invalid_grant" }).to_string()),
            "invalid_grant"
        );
        assert_eq!(
            grant_error_detail(&json!({ "errors": [{ "detail": "expired" }] }).to_string()),
            "expired"
        );
        assert_eq!(grant_error_detail("not json"), "not json");
    }
}
