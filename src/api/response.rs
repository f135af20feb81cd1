//
//  live-editor-api
//  api/response.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/08.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Response wrapper for Live Editor API calls.
//!
//! [`ApiResponse`] classifies a raw HTTP response (success, unauthorized,
//! error) and exposes parsed-body and error accessors. HTTP error statuses
//! are data, not `Err` values: a 404 comes back as a response with
//! `is_error() == true`, while only infrastructure failures surface as
//! [`ApiError`](crate::ApiError).

use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::StatusCode;
use serde_json::Value;

use super::{ApiError, JSON_API_MEDIA_TYPE};
use crate::auth::TokenPair;

/// A response from the Live Editor API.
///
/// Wraps the status, headers, and raw body of one HTTP exchange, plus a
/// marker recording whether the dispatching call refreshed the OAuth session
/// on the way.
///
/// # Example
///
/// ```rust,no_run
/// # async fn example(mut client: live_editor_api::ApiClient) -> Result<(), live_editor_api::ApiError> {
/// use live_editor_api::{RequestOptions, Service};
///
/// let response = client
///     .get("/layouts", Service::Cms, RequestOptions::default())
///     .await?;
///
/// if response.is_success() && response.is_json_api() {
///     let body = response.parsed_body()?;
///     println!("{}", body["data"]);
/// } else {
///     for error in response.errors() {
///         eprintln!("{}", error["detail"]);
///     }
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
    refreshed_oauth: Option<TokenPair>,
}

impl ApiResponse {
    /// Wraps raw response parts.
    ///
    /// `refreshed_oauth` records the token pair obtained if the dispatching
    /// call refreshed the session; the dispatcher uses it to guarantee at
    /// most one refresh per logical call.
    pub fn new(
        status: StatusCode,
        headers: HeaderMap,
        body: impl Into<String>,
        refreshed_oauth: Option<TokenPair>,
    ) -> Self {
        Self {
            status,
            headers,
            body: body.into(),
            refreshed_oauth,
        }
    }

    /// The HTTP status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The raw response body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The token pair obtained if this call refreshed the OAuth session.
    pub fn refreshed_oauth(&self) -> Option<&TokenPair> {
        self.refreshed_oauth.as_ref()
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Whether the status is `401 Unauthorized`.
    pub fn is_unauthorized(&self) -> bool {
        self.status == StatusCode::UNAUTHORIZED
    }

    /// Whether the status is outside the 2xx range.
    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// Whether the response declares the JSON API media type.
    ///
    /// The `Content-Type` media type must equal `application/vnd.api+json`;
    /// parameters such as `charset` are ignored.
    pub fn is_json_api(&self) -> bool {
        self.content_media_type()
            .map(|media_type| media_type == JSON_API_MEDIA_TYPE)
            .unwrap_or(false)
    }

    /// Decodes the raw body as JSON.
    ///
    /// Decoding happens on demand; an empty body (e.g. `204 No Content`)
    /// decodes to JSON `null`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MalformedBody`] when a non-empty body is not
    /// valid JSON.
    pub fn parsed_body(&self) -> Result<Value, ApiError> {
        if self.body.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&self.body).map_err(ApiError::MalformedBody)
    }

    /// Returns the errors reported by the response body.
    ///
    /// Bodies following the JSON API `{"errors": [...]}` convention yield
    /// that array as-is; flat `{"error": "..."}` bodies are normalized to
    /// `[{"detail": "..."}]`. Anything else, including bodies that fail to
    /// parse, yields an empty vector.
    pub fn errors(&self) -> Vec<Value> {
        let body = match self.parsed_body() {
            Ok(body) => body,
            Err(_) => return Vec::new(),
        };

        let Value::Object(map) = body else {
            return Vec::new();
        };

        if let Some(Value::Array(errors)) = map.get("errors") {
            return errors.clone();
        }

        if let Some(Value::String(message)) = map.get("error") {
            return vec![serde_json::json!({ "detail": message })];
        }

        Vec::new()
    }

    /// The `Content-Type` media type, stripped of parameters.
    fn content_media_type(&self) -> Option<&str> {
        let value = self.headers.get(CONTENT_TYPE)?.to_str().ok()?;
        Some(value.split(';').next().unwrap_or(value).trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(status: u16, content_type: Option<&str>, body: &str) -> ApiResponse {
        let mut headers = HeaderMap::new();
        if let Some(content_type) = content_type {
            headers.insert(CONTENT_TYPE, content_type.parse().unwrap());
        }
        ApiResponse::new(StatusCode::from_u16(status).unwrap(), headers, body, None)
    }

    #[test]
    fn two_hundreds_are_success() {
        assert!(response(200, None, "").is_success());
        assert!(response(204, None, "").is_success());
        assert!(!response(200, None, "").is_error());
    }

    #[test]
    fn four_oh_one_is_unauthorized_and_error() {
        let response = response(401, None, "");
        assert!(response.is_unauthorized());
        assert!(response.is_error());
        assert!(!response.is_success());
    }

    #[test]
    fn not_found_is_error_but_not_unauthorized() {
        let response = response(404, None, "");
        assert!(response.is_error());
        assert!(!response.is_unauthorized());
    }

    #[test]
    fn json_api_requires_the_exact_media_type() {
        assert!(response(200, Some("application/vnd.api+json"), "{}").is_json_api());
        assert!(response(200, Some("application/vnd.api+json; charset=utf-8"), "{}").is_json_api());
        assert!(!response(200, Some("application/json"), "{}").is_json_api());
        assert!(!response(204, None, "").is_json_api());
    }

    #[test]
    fn parsed_body_decodes_json() {
        let payload = json!({ "data": { "type": "layouts", "id": "1" } });
        let response = response(200, None, &payload.to_string());
        assert_eq!(response.parsed_body().unwrap(), payload);
    }

    #[test]
    fn parsed_body_of_empty_body_is_null() {
        assert_eq!(response(204, None, "").parsed_body().unwrap(), Value::Null);
    }

    #[test]
    fn parsed_body_surfaces_malformed_json() {
        let err = response(200, None, "<html>oops</html>")
            .parsed_body()
            .unwrap_err();
        assert!(matches!(err, ApiError::MalformedBody(_)));
    }

    #[test]
    fn errors_passes_through_json_api_errors() {
        let body = json!({ "errors": [{ "detail": "Title is required" }] });
        let response = response(422, None, &body.to_string());
        assert_eq!(response.errors(), vec![json!({ "detail": "Title is required" })]);
    }

    #[test]
    fn errors_normalizes_flat_error_strings() {
        let body = json!({ "error": "Unauthorized request" });
        let response = response(401, None, &body.to_string());
        assert_eq!(
            response.errors(),
            vec![json!({ "detail": "Unauthorized request" })]
        );
    }

    #[test]
    fn errors_is_empty_for_other_bodies() {
        assert!(response(200, None, "").errors().is_empty());
        assert!(response(200, None, "[1, 2]").errors().is_empty());
        assert!(response(200, None, "{\"data\": {}}").errors().is_empty());
        assert!(response(500, None, "<html>oops</html>").errors().is_empty());
    }
}
