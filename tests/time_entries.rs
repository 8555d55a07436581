//! Time entry endpoint tests against a mock Harvest server.

use chrono::TimeZone;
use harvestapi::{
    CreateTimeEntryViaDurationRequest, HarvestClient, TimeEntryListParams, UpdateTimeEntryRequest,
};
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
async fn list_forwards_filters_as_query_params() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/time_entries"))
        .and(query_param("project_id", "14307913"))
        .and(query_param("is_running", "true"))
        .and(query_param("from", "2022-11-28"))
        .and(query_param("updated_since", "2022-12-01T00:00:00Z"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"time_entries": [], "total_entries": 0})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client
        .time_entries
        .list(TimeEntryListParams {
            project_id: Some(14307913),
            is_running: Some(true),
            from: Some("2022-11-28".parse().unwrap()),
            updated_since: Some(chrono::Utc.with_ymd_and_hms(2022, 12, 1, 0, 0, 0).unwrap()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(resp.status_code, 200);
    assert_eq!(resp.data["total_entries"], 0);
}

#[tokio::test]
async fn out_of_range_pagination_is_clamped_on_the_wire() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/time_entries"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "2000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client
        .time_entries
        .list(TimeEntryListParams {
            page: Some(0),
            per_page: Some(5000),
            ..Default::default()
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn create_via_duration_posts_exact_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/time_entries"))
        .and(body_json(serde_json::json!({
            "project_id": 14307913,
            "task_id": 8083365,
            "spent_date": "2022-12-01",
            "hours": 1.5,
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(serde_json::json!({"id": 1043}))
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client
        .time_entries
        .create_via_duration(CreateTimeEntryViaDurationRequest {
            project_id: 14307913,
            task_id: 8083365,
            spent_date: "2022-12-01".parse().unwrap(),
            user_id: None,
            hours: Some(Decimal::new(15, 1)),
            notes: None,
            external_reference: None,
        })
        .await
        .unwrap();

    assert_eq!(resp.status_code, 201);
    assert_eq!(resp.data["id"], 1043);
}

#[tokio::test]
async fn update_patches_only_set_fields() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/v2/time_entries/636709355"))
        .and(body_json(serde_json::json!({"notes": "pair programming"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client
        .time_entries
        .update(
            636709355,
            UpdateTimeEntryRequest {
                notes: Some("pair programming".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
}

#[tokio::test]
async fn delete_of_missing_entry_returns_envelope_not_error() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/time_entries/999999999"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(serde_json::json!({"error": "not_found"})),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client.time_entries.delete(999999999).await.unwrap();

    assert_eq!(resp.status_code, 404);
    assert!(!resp.is_success());
    assert_eq!(resp.data["error"], "not_found");
}

#[tokio::test]
async fn delete_with_empty_body_decodes_to_null() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/time_entries/636709355"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client.time_entries.delete(636709355).await.unwrap();

    assert!(resp.is_success());
    assert!(resp.data.is_null());
}

#[tokio::test]
async fn restart_and_stop_patch_action_paths_without_body() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/v2/time_entries/662202797/restart"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"is_running": true})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/v2/time_entries/662202797/stop"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"is_running": false})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);

    let started = client.time_entries.restart(662202797).await.unwrap();
    assert_eq!(started.data["is_running"], true);

    let stopped = client.time_entries.stop(662202797).await.unwrap();
    assert_eq!(stopped.data["is_running"], false);
}

#[tokio::test]
async fn delete_external_reference_targets_sub_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/v2/time_entries/636709355/external_reference"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let resp = client
        .time_entries
        .delete_external_reference(636709355)
        .await
        .unwrap();
    assert!(resp.is_success());
}

#[tokio::test]
async fn non_json_body_is_a_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/time_entries/1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.time_entries.get(1).await.unwrap_err();
    assert!(matches!(err, harvestapi::HarvestError::Parse(_)));
}
