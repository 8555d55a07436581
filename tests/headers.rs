//! Verifies the headers Harvest mandates are attached to every request,
//! independent of HTTP verb.

use harvestapi::{CollectionParams, HarvestClient, UpdateClientRequest};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> HarvestClient {
    HarvestClient::with_base_url(
        "12345",
        "access-token",
        "my-app",
        "dev@example.com",
        &server.uri(),
    )
    .unwrap()
}

/// Mount a mock that only matches when all three mandated headers carry the
/// configured values.
async fn mount_with_required_headers(server: &MockServer, verb: &str, p: &str) {
    Mock::given(method(verb))
        .and(path(p))
        .and(header("Harvest-Account-ID", "12345"))
        .and(header("Authorization", "Bearer access-token"))
        .and(header("User-Agent", "my-app (dev@example.com)"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn get_carries_required_headers() {
    let server = MockServer::start().await;
    mount_with_required_headers(&server, "GET", "/v2/company").await;

    let client = test_client(&server);
    let resp = client.company.my_company().await.unwrap();
    assert_eq!(resp.status_code, 200);
}

#[tokio::test]
async fn get_with_query_carries_required_headers() {
    let server = MockServer::start().await;
    mount_with_required_headers(&server, "GET", "/v2/clients").await;

    let client = test_client(&server);
    let resp = client.clients.list(CollectionParams::default()).await.unwrap();
    assert_eq!(resp.status_code, 200);
}

#[tokio::test]
async fn post_carries_required_headers_and_json_content_type() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/roles"))
        .and(header("Harvest-Account-ID", "12345"))
        .and(header("Authorization", "Bearer access-token"))
        .and(header("User-Agent", "my-app (dev@example.com)"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client
        .roles
        .create(harvestapi::CreateRoleRequest {
            name: "Designer".to_string(),
            user_ids: None,
        })
        .await
        .unwrap();
    assert_eq!(resp.status_code, 201);
}

#[tokio::test]
async fn patch_carries_required_headers() {
    let server = MockServer::start().await;
    mount_with_required_headers(&server, "PATCH", "/v2/clients/5735776").await;

    let client = test_client(&server);
    let resp = client
        .clients
        .update(5735776, UpdateClientRequest::default())
        .await
        .unwrap();
    assert_eq!(resp.status_code, 200);
}

#[tokio::test]
async fn delete_carries_required_headers() {
    let server = MockServer::start().await;
    mount_with_required_headers(&server, "DELETE", "/v2/clients/5735776").await;

    let client = test_client(&server);
    let resp = client.clients.delete(5735776).await.unwrap();
    assert_eq!(resp.status_code, 200);
}
