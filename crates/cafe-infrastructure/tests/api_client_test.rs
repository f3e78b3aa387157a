use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cafe_core::ClientError;
use cafe_infrastructure::ApiClient;
use cafe_shared::config::ApiSettings;

fn client_for(server: &MockServer) -> ApiClient {
    ApiClient::new(&ApiSettings {
        base_url: server.uri(),
        timeout_seconds: 5,
    })
    .unwrap()
}

#[tokio::test]
async fn test_bearer_header_follows_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/menu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    client.get("/api/admin/menu").await.unwrap();
    client.set_token(Some("tok-1".into()));
    client.get("/api/admin/menu").await.unwrap();
    client.set_token(None);
    client.get("/api/admin/menu").await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);
    assert!(requests[0].headers.get("authorization").is_none());
    assert_eq!(
        requests[1].headers.get("authorization").and_then(|v| v.to_str().ok()),
        Some("Bearer tok-1")
    );
    assert!(requests[2].headers.get("authorization").is_none());
    assert!(requests
        .iter()
        .all(|r| r.headers.get("content-type").and_then(|v| v.to_str().ok()) == Some("application/json")));
}

#[tokio::test]
async fn test_error_body_message_surfaces() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/admin/tenants"))
        .and(body_json(json!({"subdomain": "nour"})))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "Subdomain already exists"})))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .post("/api/admin/tenants", &json!({"subdomain": "nour"}))
        .await
        .unwrap_err();

    assert_eq!(err, ClientError::api("Subdomain already exists", 400));
}

#[tokio::test]
async fn test_non_json_error_uses_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/public/menu"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>Bad Gateway</html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).get("/api/public/menu").await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP error! status: 502");
    assert_eq!(err.status(), Some(502));
}

#[tokio::test]
async fn test_non_json_success_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/public/shop"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    let err = client_for(&server).get("/api/public/shop").await.unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_empty_success_body_is_null() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/admin/menu/3"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let body = client_for(&server).delete("/api/admin/menu/3").await.unwrap();
    assert!(body.is_null());
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    let client = ApiClient::new(&ApiSettings {
        base_url: "http://127.0.0.1:1".into(),
        timeout_seconds: 2,
    })
    .unwrap();

    let err = client.get("/api/public/menu").await.unwrap_err();
    assert!(matches!(err, ClientError::Network(_)));
}
