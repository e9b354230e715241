//! Log search endpoint tests.
//!
//! These run the client against a wiremock server and verify:
//! - The request carries both auth headers and the vendor body shape.
//! - Successful responses parse into log entries.
//! - Non-2xx responses map to `ApiError` with a bounded body preview.
//! - Transport failures map to `HttpError`.

use secrecy::SecretString;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use ddlog_client::{ClientError, DatadogClient};
use ddlog_config::Credentials;

fn test_credentials() -> Credentials {
    Credentials {
        api_key: SecretString::new("test-api-key".to_string().into()),
        app_key: SecretString::new("test-app-key".to_string().into()),
    }
}

fn test_client(base_url: String) -> DatadogClient {
    DatadogClient::builder()
        .credentials(test_credentials())
        .base_url(base_url)
        .build()
        .expect("build client")
}

#[tokio::test]
async fn search_logs_sends_auth_headers_and_parses_entries() {
    let server = MockServer::start().await;

    let response_fixture = serde_json::json!({
        "data": [
            {
                "id": "AQAAAY1",
                "type": "log",
                "attributes": {
                    "message": "handled request for GetTripDetails",
                    "attributes": {
                        "response_body": {"tripID": "t-1", "orders": []}
                    }
                }
            },
            {
                "id": "AQAAAY2",
                "type": "log",
                "attributes": {
                    "message": "handled request for GetTripDetails"
                }
            }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/api/v2/logs/events/search"))
        .and(header("DD-API-KEY", "test-api-key"))
        .and(header("DD-APPLICATION-KEY", "test-app-key"))
        .and(body_partial_json(serde_json::json!({
            "filter": {
                "query": "env:prod \"handled request for GetTripDetails\""
            },
            "sort": "-timestamp",
            "page": {"limit": 3}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response_fixture))
        .mount(&server)
        .await;

    let client = test_client(server.uri());
    let response = client
        .search_logs("GetTripDetails", 3)
        .await
        .expect("search");

    assert_eq!(response.data.len(), 2);
    let body = response.data[0]
        .lookup(&["attributes", "attributes", "response_body"])
        .expect("response body");
    assert_eq!(body["tripID"], "t-1");
}

#[tokio::test]
async fn search_logs_empty_data_is_ok() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/logs/events/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": []})))
        .mount(&server)
        .await;

    let client = test_client(server.uri());
    let response = client
        .search_logs("GetDeliveryOrder", 3)
        .await
        .expect("search");

    assert!(response.data.is_empty());
}

#[tokio::test]
async fn search_logs_missing_data_key_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/logs/events/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = test_client(server.uri());
    let response = client
        .search_logs("GetDeliveryOrder", 3)
        .await
        .expect("search");

    assert!(response.data.is_empty());
}

#[tokio::test]
async fn search_logs_non_success_maps_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/logs/events/search"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_string(r#"{"errors":["Forbidden"]}"#),
        )
        .mount(&server)
        .await;

    let client = test_client(server.uri());
    let err = client
        .search_logs("GetLocationsDetails", 3)
        .await
        .expect_err("should fail");

    match err {
        ClientError::ApiError {
            status, message, ..
        } => {
            assert_eq!(status, 403);
            assert!(message.contains("Forbidden"));
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn search_logs_error_body_preview_is_bounded() {
    let server = MockServer::start().await;

    let long_body = "x".repeat(600);
    Mock::given(method("POST"))
        .and(path("/api/v2/logs/events/search"))
        .respond_with(ResponseTemplate::new(400).set_body_string(long_body))
        .mount(&server)
        .await;

    let client = test_client(server.uri());
    let err = client
        .search_logs("GetDeliveryDriverByID", 3)
        .await
        .expect_err("should fail");

    match err {
        ClientError::ApiError { message, .. } => {
            assert_eq!(message.chars().count(), 500);
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn search_logs_transport_failure_maps_to_http_error() {
    // Nothing listens on the discard port; the connection is refused.
    let client = test_client("http://127.0.0.1:9".to_string());
    let err = client
        .search_logs("GetTripDetails", 3)
        .await
        .expect_err("should fail");

    assert!(matches!(err, ClientError::HttpError(_)));
}
