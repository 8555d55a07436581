//! User endpoint tests: identity, rates, and project assignments.

use harvestapi::{CollectionParams, CreateRateRequest, CreateUserRequest, HarvestClient};
use rust_decimal::Decimal;
use wiremock::matchers::{body_json, method, path, query_param};
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

#[tokio::test]
async fn me_returns_authenticated_user() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 1782959,
            "first_name": "Kim",
            "last_name": "Allen",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client.users.me().await.unwrap();

    assert_eq!(resp.status_code, 200);
    assert_eq!(resp.data["id"], 1782959);
}

#[tokio::test]
async fn create_posts_required_and_set_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/users"))
        .and(body_json(serde_json::json!({
            "first_name": "George",
            "last_name": "Frank",
            "email": "george@example.com",
            "is_contractor": false,
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": 3})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client
        .users
        .create(CreateUserRequest {
            first_name: "George".to_string(),
            last_name: "Frank".to_string(),
            email: "george@example.com".to_string(),
            timezone: None,
            has_access_to_all_future_projects: None,
            is_contractor: Some(false),
            is_active: None,
            weekly_capacity: None,
            default_hourly_rate: None,
            cost_rate: None,
            roles: None,
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn billable_rate_creation_targets_user_sub_path() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/users/3230547/billable_rates"))
        .and(body_json(serde_json::json!({
            "amount": 75.5,
            "start_date": "2023-01-01",
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": 1836494})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client
        .users
        .create_billable_rate(
            3230547,
            CreateRateRequest {
                amount: Decimal::new(755, 1),
                start_date: Some("2023-01-01".parse().unwrap()),
            },
        )
        .await
        .unwrap();
    assert_eq!(resp.data["id"], 1836494);
}

#[tokio::test]
async fn cost_rates_share_the_rate_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/users/3230547/cost_rates"))
        .and(body_json(serde_json::json!({"amount": 50.0})))
        .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": 825301})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client
        .users
        .create_cost_rate(
            3230547,
            CreateRateRequest {
                amount: Decimal::new(50, 0),
                start_date: None,
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn my_project_assignments_lists_under_me() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/users/me/project_assignments"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"project_assignments": []})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client
        .users
        .my_project_assignments(CollectionParams {
            page: Some(1),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(resp.data["project_assignments"].as_array().unwrap().is_empty());
}
