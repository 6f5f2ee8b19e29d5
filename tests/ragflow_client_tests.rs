//! RAGFlow client tests against a local mock backend.

use std::sync::Arc;
use std::time::Duration;

use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

use ragflow_tool::{
    KnowledgeRetriever, RagflowClient, RagflowConfig, ToolRegistry, QUERY_KNOWLEDGE_BASE_TOOL,
};

const API_KEY: &str = "ragflow-test-key";
const CHAT_ID: &str = "chat-42";
const COMPLETIONS_PATH: &str = "/api/v1/chats_openai/chat-42/chat/completions";
const QUERY: &str = "What is the capital of France?";

const NOT_CONFIGURED: &str = "RAGFlow is not configured. Please provide API key and Chat ID.";
const STATUS_PREFIX: &str = "Error communicating with RAGFlow:";
const UNEXPECTED_PREFIX: &str = "An unexpected error occurred while querying RAGFlow:";

fn client_for(server: &ServerGuard) -> RagflowClient {
    // Trailing slash on purpose: it must not leak into the request path.
    RagflowClient::new(RagflowConfig::new(
        format!("{}/api/v1/", server.url()),
        API_KEY,
        CHAT_ID,
    ))
}

fn completion_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

#[tokio::test]
async fn test_sends_openai_shaped_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", COMPLETIONS_PATH)
        .match_header("authorization", "Bearer ragflow-test-key")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(json!({
            "model": "ragflow",
            "messages": [{"role": "user", "content": QUERY}],
            "stream": false
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Paris"))
        .expect(1)
        .create_async()
        .await;

    let result = client_for(&server).retrieve(QUERY).await;

    assert_eq!(result, "Paris");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_minimal_success_payload() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", COMPLETIONS_PATH)
        .with_status(200)
        .with_body(r#"{"choices":[{"message":{"content":"Paris"}}]}"#)
        .create_async()
        .await;

    assert_eq!(client_for(&server).retrieve(QUERY).await, "Paris");
}

#[tokio::test]
async fn test_content_returned_verbatim_without_citations() {
    let mut server = Server::new_async().await;
    let body = json!({
        "choices": [{"message": {"content": "  Paris is the capital ##0$$\n"}}],
        "reference": {"chunks": [{"id": "c0", "content": "France ... Paris"}]}
    });
    let _mock = server
        .mock("POST", COMPLETIONS_PATH)
        .with_status(200)
        .with_body(body.to_string())
        .create_async()
        .await;

    assert_eq!(
        client_for(&server).retrieve(QUERY).await,
        "  Paris is the capital ##0$$\n"
    );
}

#[tokio::test]
async fn test_empty_choices() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", COMPLETIONS_PATH)
        .with_status(200)
        .with_body(r#"{"choices":[]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    assert_eq!(client.retrieve(QUERY).await, "No response from RAGFlow.");
    assert!(client.try_retrieve(QUERY).await.unwrap_err().is_empty_response());
}

#[tokio::test]
async fn test_missing_choices() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", COMPLETIONS_PATH)
        .with_status(200)
        .with_body(r#"{"code":0,"data":null}"#)
        .create_async()
        .await;

    assert_eq!(
        client_for(&server).retrieve(QUERY).await,
        "No response from RAGFlow."
    );
}

#[tokio::test]
async fn test_null_choices() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", COMPLETIONS_PATH)
        .with_status(200)
        .with_body(r#"{"choices":null}"#)
        .create_async()
        .await;

    assert_eq!(
        client_for(&server).retrieve(QUERY).await,
        "No response from RAGFlow."
    );
}

#[tokio::test]
async fn test_missing_message_content_is_empty_string() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", COMPLETIONS_PATH)
        .with_status(200)
        .with_body(r#"{"choices":[{"index":0}]}"#)
        .create_async()
        .await;

    assert_eq!(client_for(&server).retrieve(QUERY).await, "");
}

#[tokio::test]
async fn test_unauthorized_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", COMPLETIONS_PATH)
        .with_status(401)
        .with_body(r#"{"code":401,"message":"Authentication error"}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client.retrieve(QUERY).await;
    assert!(result.starts_with(STATUS_PREFIX), "got: {result}");
    assert!(result.contains("401"), "got: {result}");

    let err = client.try_retrieve(QUERY).await.unwrap_err();
    assert_eq!(err.status_code(), Some(401));
}

#[tokio::test]
async fn test_server_error_status() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", COMPLETIONS_PATH)
        .with_status(503)
        .create_async()
        .await;

    let client = client_for(&server);
    assert!(client.retrieve(QUERY).await.starts_with(STATUS_PREFIX));
    assert_eq!(
        client.try_retrieve(QUERY).await.unwrap_err().status_code(),
        Some(503)
    );
}

#[tokio::test]
async fn test_redirect_is_status_error_and_not_followed() {
    let mut server = Server::new_async().await;
    let _redirect = server
        .mock("POST", COMPLETIONS_PATH)
        .with_status(302)
        .with_header("location", "/elsewhere")
        .create_async()
        .await;
    let target = server
        .mock("GET", "/elsewhere")
        .with_status(200)
        .with_body(completion_body("redirected"))
        .expect(0)
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client.retrieve(QUERY).await;
    assert!(result.starts_with(STATUS_PREFIX), "got: {result}");
    assert_eq!(
        client.try_retrieve(QUERY).await.unwrap_err().status_code(),
        Some(302)
    );

    target.assert_async().await;
}

#[tokio::test]
async fn test_multiple_choices_status_is_status_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", COMPLETIONS_PATH)
        .with_status(300)
        .with_body("{}")
        .create_async()
        .await;

    let client = client_for(&server);
    let result = client.retrieve(QUERY).await;
    assert!(result.starts_with(STATUS_PREFIX), "got: {result}");
    assert!(result.contains("300"), "got: {result}");
    assert_eq!(
        client.try_retrieve(QUERY).await.unwrap_err().status_code(),
        Some(300)
    );
}

#[tokio::test]
async fn test_malformed_json_is_unexpected() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", COMPLETIONS_PATH)
        .with_status(200)
        .with_body("<html>gateway</html>")
        .create_async()
        .await;

    let result = client_for(&server).retrieve(QUERY).await;
    assert!(result.starts_with(UNEXPECTED_PREFIX), "got: {result}");
}

#[tokio::test]
async fn test_connection_refused_is_unexpected() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = RagflowClient::new(RagflowConfig::new(
        format!("http://{addr}"),
        API_KEY,
        CHAT_ID,
    ));

    let result = client.retrieve(QUERY).await;
    assert!(result.starts_with(UNEXPECTED_PREFIX), "got: {result}");
}

#[tokio::test]
async fn test_dropped_connection_is_unexpected() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        while let Ok((socket, _)) = listener.accept().await {
            drop(socket);
        }
    });

    let client = RagflowClient::new(RagflowConfig::new(
        format!("http://{addr}"),
        API_KEY,
        CHAT_ID,
    ));

    let result = client.retrieve(QUERY).await;
    assert!(result.starts_with(UNEXPECTED_PREFIX), "got: {result}");
}

#[tokio::test]
async fn test_timeout_is_unexpected() {
    // Accepts connections and never answers.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    let config = RagflowConfig::new(format!("http://{addr}"), API_KEY, CHAT_ID)
        .with_timeout(Duration::from_millis(200));
    let client = RagflowClient::new(config);

    let result = client.retrieve(QUERY).await;
    assert!(result.starts_with(UNEXPECTED_PREFIX), "got: {result}");
}

#[tokio::test]
async fn test_missing_api_key_makes_no_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = RagflowClient::new(RagflowConfig::new(server.url(), "", CHAT_ID));
    assert_eq!(client.retrieve(QUERY).await, NOT_CONFIGURED);
    assert_eq!(client.retrieve("").await, NOT_CONFIGURED);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_missing_chat_id_makes_no_request() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = RagflowClient::new(RagflowConfig::new(server.url(), API_KEY, ""));
    assert_eq!(client.retrieve(QUERY).await, NOT_CONFIGURED);
    assert!(client.try_retrieve(QUERY).await.unwrap_err().is_not_configured());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_repeated_calls_are_identical() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", COMPLETIONS_PATH)
        .with_status(200)
        .with_body(completion_body("Paris"))
        .expect(2)
        .create_async()
        .await;

    let client = client_for(&server);
    let first = client.retrieve(QUERY).await;
    let second = client.retrieve(QUERY).await;

    assert_eq!(first, second);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_tool_output_matches_retrieve() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", COMPLETIONS_PATH)
        .with_status(200)
        .with_body(completion_body("Paris, with a trailing space "))
        .expect(2)
        .create_async()
        .await;

    let client = Arc::new(client_for(&server));
    let registry = ToolRegistry::with_default_tools(client.clone());

    let direct = client.retrieve(QUERY).await;
    let via_tool = registry
        .call(QUERY_KNOWLEDGE_BASE_TOOL, json!({ "query": QUERY }))
        .await
        .expect("tool call");

    assert_eq!(direct.as_bytes(), via_tool.as_bytes());
}

#[tokio::test]
async fn test_tool_output_matches_retrieve_on_failure() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", COMPLETIONS_PATH)
        .with_status(401)
        .expect(2)
        .create_async()
        .await;

    let client = Arc::new(client_for(&server));
    let registry = ToolRegistry::with_default_tools(client.clone());

    let direct = client.retrieve(QUERY).await;
    let via_tool = registry
        .call(QUERY_KNOWLEDGE_BASE_TOOL, json!({ "query": QUERY }))
        .await
        .expect("tool call");

    assert_eq!(direct, via_tool);
}
