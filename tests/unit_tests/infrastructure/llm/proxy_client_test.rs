use axum::routing::post;
use axum::{Json, Router};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use text_refiner::application::ports::{LlmClient, LlmClientError};
use text_refiner::infrastructure::llm::AskProxyClient;

async fn start_mock_ask_server(
    response_status: u16,
    response_body: Value,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new().route(
        "/ask",
        post(move |Json(request): Json<Value>| {
            let response_body = response_body.clone();
            async move {
                if request.get("prompt").and_then(Value::as_str).is_none() {
                    return (StatusCode::BAD_REQUEST, "prompt missing").into_response();
                }
                let status = StatusCode::from_u16(response_status).unwrap();
                (status, Json(response_body)).into_response()
            }
        }),
    );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

fn client(base_url: &str) -> AskProxyClient {
    AskProxyClient::new(reqwest::Client::new(), base_url, "relay".to_string())
}

#[tokio::test]
async fn given_text_response_when_completing_then_returns_it() {
    let (base_url, shutdown_tx) =
        start_mock_ask_server(200, json!({"response": "Rewritten."})).await;

    assert_eq!(client(&base_url).complete("p").await.unwrap(), "Rewritten.");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_error_field_when_completing_then_returns_reported_message() {
    let (base_url, shutdown_tx) =
        start_mock_ask_server(500, json!({"error": "GEMINI_API_KEY is not set"})).await;

    let result = client(&base_url).complete("p").await;

    match result {
        Err(LlmClientError::ServiceReported(message)) => {
            assert_eq!(message, "GEMINI_API_KEY is not set")
        }
        other => panic!("expected reported error, got {other:?}"),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_non_text_response_when_completing_then_returns_invalid_response() {
    let (base_url, shutdown_tx) =
        start_mock_ask_server(200, json!({"response": {"text": "nested"}})).await;

    let result = client(&base_url).complete("p").await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_failure_status_without_error_field_when_completing_then_returns_api_failure() {
    let (base_url, shutdown_tx) = start_mock_ask_server(503, json!({})).await;

    let result = client(&base_url).complete("p").await;

    assert!(matches!(result, Err(LlmClientError::ApiRequestFailed(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_relay_when_completing_then_returns_api_failure() {
    let result = client("http://127.0.0.1:1").complete("p").await;

    assert!(matches!(result, Err(LlmClientError::ApiRequestFailed(_))));
}
