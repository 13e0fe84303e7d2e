//! Integration tests for the LLM client
//!
//! These tests use wiremock to stand in for the chat-completions endpoint.

use sitebrief::config::LlmConfig;
use sitebrief::llm::LlmClient;
use sitebrief::LlmError;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_llm_config(server: &MockServer) -> LlmConfig {
    let mut config = LlmConfig::default();
    config.api_url = format!("{}/v1/chat/completions", server.uri());
    config.timeout_secs = 5;
    config
}

fn chat_body(content: &str) -> serde_json::Value {
    serde_json::json!({
        "choices": [{"message": {"role": "assistant", "content": content}}]
    })
}

#[tokio::test]
async fn test_complete_returns_response_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body("An answer")))
        .mount(&server)
        .await;

    let client = LlmClient::new(test_llm_config(&server), "secret-key").unwrap();
    let answer = client.complete("ctx", "question").await.unwrap();

    assert_eq!(answer, "An answer");
}

#[tokio::test]
async fn test_complete_strips_surrounding_quotes() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body("\"Quoted answer\"")))
        .mount(&server)
        .await;

    let client = LlmClient::new(test_llm_config(&server), "secret-key").unwrap();
    let answer = client.complete("ctx", "question").await.unwrap();

    assert_eq!(answer, "Quoted answer");
}

#[tokio::test]
async fn test_payload_and_auth_header_forwarded() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer secret-key"))
        .and(body_partial_json(serde_json::json!({
            "model": "nvidia/llama-3.1-nemotron-70b-instruct",
            "max_tokens": 1024,
            "stream": false,
            "messages": [
                {"role": "system", "content": "survey context"},
                {"role": "user", "content": "tell me a joke"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_body("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let client = LlmClient::new(test_llm_config(&server), "secret-key").unwrap();
    let answer = client
        .complete("survey context", "tell me a joke")
        .await
        .unwrap();

    assert_eq!(answer, "ok");
}

#[tokio::test]
async fn test_non_success_status_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = LlmClient::new(test_llm_config(&server), "bad-key").unwrap();
    let result = client.complete("ctx", "question").await;

    match result {
        Err(LlmError::Status { status }) => assert_eq!(status, 401),
        other => panic!("expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_body_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"unexpected": true})),
        )
        .mount(&server)
        .await;

    let client = LlmClient::new(test_llm_config(&server), "secret-key").unwrap();
    let result = client.complete("ctx", "question").await;

    assert!(matches!(result, Err(LlmError::MalformedResponse(_))));
}

#[tokio::test]
async fn test_empty_choices_is_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"choices": []})))
        .mount(&server)
        .await;

    let client = LlmClient::new(test_llm_config(&server), "secret-key").unwrap();
    let result = client.complete("ctx", "question").await;

    assert!(matches!(result, Err(LlmError::MalformedResponse(_))));
}
