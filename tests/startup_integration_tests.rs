use corrector::core::action::Action;
use corrector::core::tasks::{self, InitError};
use corrector::remote::{CorrectionRequest, HttpCorrectionService};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, method, path},
};

async fn mount_catalog(server: &MockServer, status: u16, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/public-text-modes"))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

// ============================================================================
// Startup
// ============================================================================

#[tokio::test]
async fn test_initialize_loads_catalog_then_readiness() {
    let mock_server = MockServer::start().await;
    mount_catalog(&mock_server, 200, json!([{"name": "grammar"}, {"name": "style"}])).await;
    Mock::given(method("GET"))
        .and(path("/client/ready"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = HttpCorrectionService::new(mock_server.uri(), None);
    let modes = tasks::initialize(&service).await.unwrap();
    assert_eq!(modes.len(), 2);

    // Catalog request strictly before the readiness request
    let requests = mock_server.received_requests().await.unwrap();
    let paths: Vec<&str> = requests.iter().map(|r| r.url.path()).collect();
    assert_eq!(paths, vec!["/public-text-modes", "/client/ready"]);
}

#[tokio::test]
async fn test_catalog_failure_skips_readiness() {
    let mock_server = MockServer::start().await;
    mount_catalog(&mock_server, 500, json!({"error": "Catalog exploded"})).await;
    Mock::given(method("GET"))
        .and(path("/client/ready"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let service = HttpCorrectionService::new(mock_server.uri(), None);
    let err = tasks::initialize(&service).await.unwrap_err();
    assert!(matches!(err, InitError::Catalog(_)));
    assert_eq!(err.user_message(), "Catalog exploded");
}

#[tokio::test]
async fn test_readiness_failure_reported_with_fallback() {
    let mock_server = MockServer::start().await;
    mount_catalog(&mock_server, 200, json!([{"name": "grammar"}])).await;
    Mock::given(method("GET"))
        .and(path("/client/ready"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let service = HttpCorrectionService::new(mock_server.uri(), None);
    let action = tasks::initialize_action(&service).await;
    assert_eq!(
        action,
        Action::Initialized(Err(tasks::CLIENT_FALLBACK.to_string()))
    );
}

// ============================================================================
// Submission
// ============================================================================

#[tokio::test]
async fn test_correct_sends_featured_request() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/messages"))
        .and(body_partial_json(json!({
            "service": "proofreader",
            "featured": true,
            "params": {"mode": "style"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "body": "Corrected.",
            "summary": "No mistakes"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let service = HttpCorrectionService::new(mock_server.uri(), None);
    let action = tasks::correct(
        &service,
        "proofreader",
        CorrectionRequest {
            message: "Corected.".to_string(),
            mode: "style".to_string(),
        },
    )
    .await;

    match action {
        Action::CorrectionReceived(response) => {
            assert_eq!(response.body, "Corrected.");
            assert_eq!(response.summary.as_deref(), Some("No mistakes"));
        }
        other => panic!("unexpected action: {other:?}"),
    }
}

#[tokio::test]
async fn test_correct_failure_becomes_notice_text() {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/messages"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "message": "Too many requests"
        })))
        .mount(&mock_server)
        .await;

    let service = HttpCorrectionService::new(mock_server.uri(), None);
    let action = tasks::correct(
        &service,
        "proofreader",
        CorrectionRequest {
            message: "text".to_string(),
            mode: "grammar".to_string(),
        },
    )
    .await;
    assert_eq!(action, Action::CorrectionFailed("Too many requests".to_string()));
}
