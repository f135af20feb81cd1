//
//  live-editor-api
//  cms/revisions.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/08.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Content revision lookups on the cms service.

use crate::api::{ApiError, ApiResponse, RequestOptions, Service};
use crate::util::include_query_string;
use crate::ApiClient;

/// Returns a revision record by ID.
///
/// # Parameters
///
/// * `client` - API client to dispatch through.
/// * `id` - Revision ID.
/// * `include` - Relationship(s) to side-load with the request, e.g.
///   `&["versions"]`. Pass an empty slice to include none.
///
/// # Example
///
/// ```rust,no_run
/// # async fn example(mut client: live_editor_api::ApiClient) -> Result<(), live_editor_api::ApiError> {
/// use live_editor_api::cms::revisions;
///
/// let response = revisions::find(&mut client, "4f254a03", &["versions"]).await?;
/// if response.is_success() {
///     println!("{}", response.parsed_body()?);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn find(
    client: &mut ApiClient,
    id: &str,
    include: &[&str],
) -> Result<ApiResponse, ApiError> {
    let query_string = include_query_string(include);
    let path = if query_string.is_empty() {
        format!("/revisions/{}", id)
    } else {
        format!("/revisions/{}?{}", id, query_string)
    };

    client.get(&path, Service::Cms, RequestOptions::default()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientConfig;
    use mockito::{Matcher, ServerGuard};
    use serde_json::json;

    const CMS_HOST: &str = "example.cms.api.liveeditorapp.com";

    fn client_for(server: &ServerGuard) -> ApiClient {
        let addr = server.socket_address();
        let http = reqwest::Client::builder()
            .resolve(CMS_HOST, addr)
            .build()
            .unwrap();

        let mut config = ClientConfig::new("example.liveeditorapp.com");
        config.use_ssl = false;
        config.access_token = Some("1234567890".to_string());
        config.refresh_token = Some("0987654321".to_string());
        config.ports.cms = Some(addr.port());

        ApiClient::with_http(http, config)
    }

    #[tokio::test]
    async fn find_fetches_the_revision() {
        let mut server = mockito::Server::new_async().await;
        let payload = json!({
            "data": {
                "type": "revisions",
                "id": "4f254a03-71eb-49fb-a389-ed5e7f2d9c9f",
                "attributes": { "status": "pending", "versions-count": 1 }
            }
        });
        let mock = server
            .mock("GET", "/revisions/4f254a03-71eb-49fb-a389-ed5e7f2d9c9f")
            .match_header("authorization", "Bearer 1234567890")
            .match_header("accept", "application/vnd.api+json")
            .with_status(200)
            .with_header("content-type", "application/vnd.api+json")
            .with_body(payload.to_string())
            .create_async()
            .await;

        let mut client = client_for(&server);
        let response = find(&mut client, "4f254a03-71eb-49fb-a389-ed5e7f2d9c9f", &[])
            .await
            .unwrap();

        assert!(response.is_success());
        assert_eq!(response.parsed_body().unwrap(), payload);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn find_passes_relationship_includes() {
        let mut server = mockito::Server::new_async().await;
        let payload = json!({
            "data": { "type": "revisions", "id": "4f254a03" },
            "included": [{ "type": "versions", "id": "71eb49fb" }]
        });
        let mock = server
            .mock("GET", "/revisions/4f254a03")
            .match_query(Matcher::UrlEncoded("include".into(), "versions".into()))
            .match_header("authorization", "Bearer 1234567890")
            .with_status(200)
            .with_header("content-type", "application/vnd.api+json")
            .with_body(payload.to_string())
            .create_async()
            .await;

        let mut client = client_for(&server);
        let response = find(&mut client, "4f254a03", &["versions"]).await.unwrap();

        assert!(response.is_success());
        assert_eq!(response.parsed_body().unwrap(), payload);
        mock.assert_async().await;
    }
}
