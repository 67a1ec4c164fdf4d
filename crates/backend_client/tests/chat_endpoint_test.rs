//! Integration tests for HttpBackend against a mock chat backend

use backend_client::{BackendError, ChatBackend, HttpBackend};
use chat_core::{ChatRequest, Turn};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request(message: &str, history: Option<Vec<Turn>>) -> ChatRequest {
    ChatRequest {
        message: message.to_string(),
        history,
    }
}

#[tokio::test]
async fn test_chat_success_with_sources() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "answer": "75% minimum",
            "sources": [{"source": "handbook.pdf", "page": 12}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri()).expect("backend");
    let response = backend
        .chat(&request("What's the attendance policy?", None))
        .await
        .expect("chat");

    assert_eq!(response.answer, "75% minimum");
    assert_eq!(response.sources.len(), 1);
    assert_eq!(response.sources[0].source, "handbook.pdf");
    assert_eq!(response.sources[0].page, Some(12));
}

#[tokio::test]
async fn test_chat_sends_exact_wire_shape() {
    let mock_server = MockServer::start().await;

    let expected_body = serde_json::json!({
        "message": "second question",
        "history": [
            {"role": "user", "content": "first question"},
            {"role": "assistant", "content": "first answer"},
            {"role": "user", "content": "second question"}
        ]
    });

    Mock::given(method("POST"))
        .and(path("/chat"))
        .and(body_json(&expected_body))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"answer": "ok", "sources": []})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri()).expect("backend");
    let history = vec![
        Turn::user("first question"),
        Turn::assistant("first answer"),
        Turn::user("second question"),
    ];
    backend
        .chat(&request("second question", Some(history)))
        .await
        .expect("chat");
}

#[tokio::test]
async fn test_non_2xx_is_status_error_without_body_parse() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(500).set_body_string("definitely not json"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri()).expect("backend");
    let err = backend.chat(&request("q", None)).await.unwrap_err();

    match err {
        BackendError::Status(status) => assert_eq!(status.as_u16(), 500),
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_success_body_is_decode_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"unexpected": true}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri()).expect("backend");
    let err = backend.chat(&request("q", None)).await.unwrap_err();
    assert!(matches!(err, BackendError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_backend_is_http_error() {
    // Reserved port with nothing listening.
    let backend = HttpBackend::new("http://127.0.0.1:1").expect("backend");
    let err = backend.chat(&request("q", None)).await.unwrap_err();
    assert!(matches!(err, BackendError::Http(_)));
}

#[tokio::test]
async fn test_health_reports_readiness() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "ready": true,
            "vector_store": "ok",
            "llm": "ok"
        })))
        .mount(&mock_server)
        .await;

    let backend = HttpBackend::new(mock_server.uri()).expect("backend");
    let status = backend.health().await.expect("health");
    assert!(status.ready);
    assert_eq!(status.components.len(), 2);
}
