//! Integration tests for the inference endpoint client against a mocked server.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scribe::error::LlmError;
use scribe::llm::{ChatMessage, LlmClient, LlmConfig, Role};

fn test_config(server: &MockServer) -> LlmConfig {
    LlmConfig {
        base_url: server.uri(),
        model: "test-model".to_string(),
        timeout: Duration::from_secs(5),
    }
}

#[tokio::test]
async fn test_generate_returns_response_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(json!({
            "model": "test-model",
            "prompt": "summarize this",
            "stream": false,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": "a summary" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = LlmClient::new(test_config(&server)).unwrap();
    let reply = client.generate("summarize this").await.unwrap();
    assert_eq!(reply, "a summary");
}

#[tokio::test]
async fn test_generate_missing_response_field_is_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "done": true })))
        .mount(&server)
        .await;

    let client = LlmClient::new(test_config(&server)).unwrap();
    let result = client.generate("x").await;
    assert!(matches!(result, Err(LlmError::Protocol(_))));
}

#[tokio::test]
async fn test_generate_server_error_is_protocol_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = LlmClient::new(test_config(&server)).unwrap();
    let result = client.generate("x").await;
    assert!(matches!(result, Err(LlmError::Protocol(_))));
}

#[tokio::test]
async fn test_generate_unreachable_endpoint_is_transport_error() {
    let config = LlmConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        model: "test-model".to_string(),
        timeout: Duration::from_secs(1),
    };

    let client = LlmClient::new(config).unwrap();
    let result = client.generate("x").await;
    assert!(matches!(result, Err(LlmError::Transport(_))));
}

#[tokio::test]
async fn test_generate_timeout_is_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "response": "late" }))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = LlmConfig {
        base_url: server.uri(),
        model: "test-model".to_string(),
        timeout: Duration::from_millis(100),
    };

    let client = LlmClient::new(config).unwrap();
    let result = client.generate("x").await;
    assert!(matches!(result, Err(LlmError::Transport(_))));
}

#[tokio::test]
async fn test_chat_returns_the_reply_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": { "role": "assistant", "content": "noted" }
        })))
        .mount(&server)
        .await;

    let mut client = LlmClient::new(test_config(&server)).unwrap();
    let reply = client.chat(ChatMessage::user("hello")).await.unwrap();
    assert_eq!(reply.role, Role::Assistant);
    assert_eq!(reply.content, "noted");
}

#[tokio::test]
async fn test_chat_accumulates_history_and_sends_it_whole() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "message": { "role": "assistant", "content": "reply" }
        })))
        .expect(2)
        .mount(&server)
        .await;

    let mut client = LlmClient::new(test_config(&server)).unwrap();
    client.chat(ChatMessage::system("be brief")).await.unwrap();
    client.chat(ChatMessage::user("first")).await.unwrap();

    // History holds every sent turn plus every reply, in order.
    let history = client.history();
    assert_eq!(history.len(), 4);
    assert_eq!(history[0].role, Role::System);
    assert_eq!(history[1].role, Role::Assistant);
    assert_eq!(history[2].role, Role::User);
    assert_eq!(history[3].role, Role::Assistant);

    // The second request replayed the first three turns.
    let requests = server.received_requests().await.unwrap();
    let second: serde_json::Value = serde_json::from_slice(&requests[1].body).unwrap();
    assert_eq!(second["messages"].as_array().unwrap().len(), 3);
    assert_eq!(second["messages"][0]["content"], "be brief");
    assert_eq!(second["messages"][2]["content"], "first");
    server.verify().await;
}

#[tokio::test]
async fn test_chat_malformed_reply_is_protocol_error_and_history_keeps_sent_turn() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "oops": true })))
        .mount(&server)
        .await;

    let mut client = LlmClient::new(test_config(&server)).unwrap();
    let result = client.chat(ChatMessage::user("hello")).await;
    assert!(matches!(result, Err(LlmError::Protocol(_))));
    // The sent turn stays in history; the run is abandoned, not rolled back.
    assert_eq!(client.history().len(), 1);
}
