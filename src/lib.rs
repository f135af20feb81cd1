//
//  live-editor-api
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/08.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Live Editor API Client Library
//!
//! A client library for the Live Editor content platform, whose HTTP API is
//! split across three service backends reachable via distinct subdomains:
//! `auth` (OAuth token grants), `cms` (content management), and `cdn` (asset
//! delivery).
//!
//! ## Overview
//!
//! The heart of the crate is the request dispatcher in [`api::client`]. It
//! composes per-service URLs from the admin domain, authorizes requests with
//! a bearer token, and transparently refreshes the OAuth session when the
//! API answers `401 Unauthorized` — retrying the original request exactly
//! once and never looping.
//!
//! ## Features
//!
//! - **Multi-Service Dispatch**: one client for the auth, cms, and cdn
//!   backends, with per-service port overrides
//! - **Transparent Token Refresh**: a held refresh token keeps the session
//!   alive without caller involvement
//! - **JSON API Convention**: `application/vnd.api+json` content negotiation
//!   on by default, opt-out per request
//! - **Errors As Data**: HTTP 4xx/5xx come back as [`ApiResponse`] values;
//!   only infrastructure failures surface as [`ApiError`]
//!
//! ## Module Structure
//!
//! - [`api`]: request dispatcher, URL builder, response wrapper, errors
//! - [`auth`]: OAuth password and refresh-token grants
//! - [`cms`]: resource accessors for the cms service
//! - [`config`]: connection and credential configuration
//! - [`util`]: query-string helpers shared by resource modules
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use live_editor_api::{auth, ApiClient, ClientConfig, RequestOptions, Service};
//!
//! # async fn example() -> Result<(), live_editor_api::ApiError> {
//! let mut client = ApiClient::new(ClientConfig::new("example.liveeditorapp.com"))?;
//!
//! // Log in once; the client stores the granted token pair.
//! auth::password_login(&mut client, "me@example.com", "secret").await?;
//!
//! // From here on, requests authorize (and re-authorize) themselves.
//! let response = client
//!     .get("/layouts", Service::Cms, RequestOptions::default())
//!     .await?;
//! println!("{}", response.parsed_body()?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Concurrency
//!
//! Request methods take `&mut self` because a token refresh rewrites the
//! configuration in place. Sharing a client across threads or tasks requires
//! caller-side synchronization (e.g. an async mutex around the client).

/// Request dispatcher, URL builder, response wrapper, and error taxonomy.
pub mod api;

/// OAuth password and refresh-token grants against the auth service.
pub mod auth;

/// Resource accessors for the cms service.
pub mod cms;

/// Connection and credential configuration.
pub mod config;

/// Helpers shared by resource modules.
pub mod util;

pub use api::{ApiClient, ApiError, ApiResponse, RequestOptions, Service, JSON_API_MEDIA_TYPE};
pub use auth::TokenPair;
pub use config::{ClientConfig, ServicePorts};

/// Crate version, derived from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
