//! Integration tests for `HttpPlannerClient` against a mock HTTP server.

use migration_view_api::{
    init_service_info, service_info, ApiError, AssessmentApi, HttpPlannerClient, JobApi, SourceApi,
};
use migration_view_types::JobStatus;
use pretty_assertions::assert_eq;

fn client_for(server: &mockito::ServerGuard) -> HttpPlannerClient {
    HttpPlannerClient::with_base_url(server.url()).expect("client builds")
}

#[tokio::test]
async fn test_create_job_returns_pending_job() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/jobs")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"42","status":"pending","fileName":"inv1"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let job = client
        .create_job("inv1", b"rvtools bytes".to_vec())
        .await
        .unwrap();

    assert_eq!(job.id, "42");
    assert_eq!(job.status, JobStatus::Pending);
    assert_eq!(job.file_name.as_deref(), Some("inv1"));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_job_surfaces_server_message() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/jobs")
        .with_status(422)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message":"sheet vInfo missing"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client
        .create_job("bad", b"not a spreadsheet".to_vec())
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(422));
    assert!(err.to_string().contains("sheet vInfo missing"));
}

#[tokio::test]
async fn test_get_job_not_found() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/jobs/missing")
        .with_status(404)
        .with_body("")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.get_job("missing").await.unwrap_err();

    assert_eq!(err.status_code(), Some(404));
    // Empty body falls back to the canonical reason.
    assert!(err.to_string().contains("Not Found"));
}

#[tokio::test]
async fn test_get_job_malformed_body_is_decode_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/jobs/42")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("{not json")
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.get_job("42").await.unwrap_err();

    assert!(matches!(err, ApiError::Decode { .. }));
}

#[tokio::test]
async fn test_transport_error_when_server_unreachable() {
    // Nothing listens here; connection must be refused.
    let client = HttpPlannerClient::with_base_url("http://127.0.0.1:9").unwrap();
    let err = client.get_job("42").await.unwrap_err();
    assert!(matches!(err, ApiError::Transport { .. }));
    assert_eq!(err.status_code(), None);
}

#[tokio::test]
async fn test_cancel_job_ok_on_204() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/jobs/42")
        .with_status(204)
        .create_async()
        .await;

    let client = client_for(&server);
    client.cancel_job("42").await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_assessments() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/assessments")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{
                "id": "1e0e37a3-7c10-4a50-a8cb-9f2f1f2dcf3a",
                "name": "prod-cluster",
                "sourceType": "rvtools",
                "createdAt": "2026-05-01T10:00:00Z"
            }]"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let assessments = client.list_assessments().await.unwrap();
    assert_eq!(assessments.len(), 1);
    assert_eq!(assessments[0].name, "prod-cluster");
}

#[tokio::test]
async fn test_delete_assessment_tolerates_already_gone() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock(
            "DELETE",
            "/assessments/1e0e37a3-7c10-4a50-a8cb-9f2f1f2dcf3a",
        )
        .with_status(404)
        .create_async()
        .await;

    let client = client_for(&server);
    let id = "1e0e37a3-7c10-4a50-a8cb-9f2f1f2dcf3a".parse().unwrap();
    client.delete_assessment(id).await.unwrap();
}

#[tokio::test]
async fn test_list_sources_deserializes_status() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/sources")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[{
                "id": "7a3f7f96-a035-4788-a051-f4b8a4b1c0e2",
                "name": "vcenter-east",
                "status": "up-to-date",
                "createdAt": "2026-04-20T08:30:00Z",
                "onPremises": true,
                "agentVersion": "0.9.1"
            }]"#,
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let sources = client.list_sources().await.unwrap();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].status.label(), "Up to date");
    assert!(sources[0].inventory.is_none());
}

#[tokio::test]
async fn test_service_info_init_then_cached() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/info")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"version":"0.3.0","inventorySchemaVersion":2}"#)
        .expect(1)
        .create_async()
        .await;

    let client = client_for(&server);
    let info = init_service_info(&client).await.unwrap();
    assert_eq!(info.version, "0.3.0");

    // Second init must serve the cached value, not re-fetch.
    let again = init_service_info(&client).await.unwrap();
    assert_eq!(again, info);
    assert_eq!(service_info().map(|i| i.inventory_schema_version), Some(2));
    mock.assert_async().await;
}
