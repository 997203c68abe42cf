use corrector::remote::{
    CorrectionRequest, CorrectionService, HttpCorrectionService, MessageRequest, RemoteError,
};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, header, method, path, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn featured(message: &str, mode: &str) -> MessageRequest {
    MessageRequest::featured(
        "proofreader",
        CorrectionRequest {
            message: message.to_string(),
            mode: mode.to_string(),
        },
    )
}

// ============================================================================
// Mode catalog
// ============================================================================

#[tokio::test]
async fn test_list_modes_sends_sort_and_keeps_order() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/public-text-modes"))
        .and(query_param("sort", r#"{"sort":1}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "grammar", "description": "Grammar and spelling", "sort": 1},
            {"name": "style", "sort": 2},
            {"name": "formal", "_id": "abc", "sort": 3}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = HttpCorrectionService::new(mock_server.uri(), None);
    let modes = service.list_modes().await.unwrap();

    let names: Vec<&str> = modes.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["grammar", "style", "formal"]);
    assert_eq!(modes[0].description.as_deref(), Some("Grammar and spelling"));
    assert_eq!(modes[1].description, None);
}

#[tokio::test]
async fn test_list_modes_error_payload() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/public-text-modes"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "message": "Catalog offline"
        })))
        .mount(&mock_server)
        .await;

    let service = HttpCorrectionService::new(mock_server.uri(), None);
    let err = service.list_modes().await.unwrap_err();

    assert!(matches!(err, RemoteError::Api { status: 503, .. }));
    assert_eq!(err.user_message("Error loading data"), "Catalog offline");
}

#[tokio::test]
async fn test_list_modes_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/public-text-modes"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let service = HttpCorrectionService::new(mock_server.uri(), None);
    let err = service.list_modes().await.unwrap_err();
    assert!(matches!(err, RemoteError::Parse(_)));
}

// ============================================================================
// Readiness
// ============================================================================

#[tokio::test]
async fn test_connect_ready() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/client/ready"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = HttpCorrectionService::new(mock_server.uri(), None);
    assert_eq!(service.connect().await, Ok(()));
}

#[tokio::test]
async fn test_connect_error_prefers_error_field() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/client/ready"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "Invalid key",
            "message": "Unauthorized"
        })))
        .mount(&mock_server)
        .await;

    let service = HttpCorrectionService::new(mock_server.uri(), None);
    let err = service.connect().await.unwrap_err();
    assert_eq!(err.user_message("Client init error"), "Invalid key");
}

// ============================================================================
// Messages
// ============================================================================

#[tokio::test]
async fn test_send_message_body_and_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/messages"))
        .and(body_json(json!({
            "service": "proofreader",
            "featured": true,
            "message": "teh cat sat",
            "params": {"mode": "grammar"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "body": "The cat sat.",
            "summary": "2 issues found",
            "errors": [
                {"type": "spelling", "context": "teh", "description": "Did you mean \"the\"?"},
                {"type": "punctuation", "context": "sat", "description": "Missing period"}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = HttpCorrectionService::new(mock_server.uri(), None);
    let response = service
        .send_message(&featured("teh cat sat", "grammar"))
        .await
        .unwrap();

    assert_eq!(response.body, "The cat sat.");
    assert_eq!(response.summary.as_deref(), Some("2 issues found"));
    let annotations = response.annotations();
    assert_eq!(annotations.len(), 2);
    assert_eq!(annotations[0].kind, "spelling");
    assert_eq!(annotations[1].context, "sat");
}

#[tokio::test]
async fn test_send_message_minimal_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"body": "Fine."})))
        .mount(&mock_server)
        .await;

    let service = HttpCorrectionService::new(mock_server.uri(), None);
    let response = service.send_message(&featured("Fine.", "style")).await.unwrap();

    assert_eq!(response.body, "Fine.");
    assert!(response.summary.is_none());
    assert!(response.annotations().is_empty());
}

#[tokio::test]
async fn test_send_message_plain_text_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad gateway"))
        .mount(&mock_server)
        .await;

    let service = HttpCorrectionService::new(mock_server.uri(), None);
    let err = service
        .send_message(&featured("text", "grammar"))
        .await
        .unwrap_err();
    assert_eq!(err.user_message("Sending message error"), "Bad gateway");
}

#[tokio::test]
async fn test_send_message_empty_error_body_uses_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let service = HttpCorrectionService::new(mock_server.uri(), None);
    let err = service
        .send_message(&featured("text", "grammar"))
        .await
        .unwrap_err();
    assert_eq!(err.user_message("Sending message error"), "Sending message error");
}

// ============================================================================
// Authentication
// ============================================================================

#[tokio::test]
async fn test_api_key_sent_as_bearer() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/client/ready"))
        .and(header("authorization", "Bearer secret-key"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = HttpCorrectionService::new(mock_server.uri(), Some("secret-key".to_string()));
    assert_eq!(service.connect().await, Ok(()));
}

#[tokio::test]
async fn test_no_api_key_no_auth_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/client/ready"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let service = HttpCorrectionService::new(mock_server.uri(), None);
    service.connect().await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_unreachable_server_is_network_error() {
    // Nothing listens on port 9 on a test machine
    let service = HttpCorrectionService::new("http://127.0.0.1:9", None);
    let err = service.list_modes().await.unwrap_err();
    assert!(matches!(err, RemoteError::Network(_)));
}
