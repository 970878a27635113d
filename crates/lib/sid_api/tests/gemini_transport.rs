//! Integration test — run the Gemini client and the dispatcher against a stub
//! `generateContent` server on an ephemeral port.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use sid_core::dispatch::{DispatchResult, Dispatcher, DispatcherConfig};
use sid_core::generative::gemini::{GeminiConfig, GeminiTransport};
use sid_core::generative::{CandidateError, GenerationParams, GenerativeTransport};

#[derive(Debug, Clone)]
struct Recorded {
    call: String,
    key: Option<String>,
    body: Value,
}

type CallLog = Arc<Mutex<Vec<Recorded>>>;

async fn stub(
    State(log): State<CallLog>,
    Path(call): Path<String>,
    Query(query): Query<HashMap<String, String>>,
    body: String,
) -> Response {
    log.lock().unwrap().push(Recorded {
        call: call.clone(),
        key: query.get("key").cloned(),
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    });

    let model = call.strip_suffix(":generateContent").unwrap_or(&call);
    match model {
        "good" => Json(json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": "Hi from good"}]}}]
        }))
        .into_response(),
        "missing" => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": {"code": 404, "message": "models/missing is not found"}})),
        )
            .into_response(),
        "slow" => {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Json(json!({"candidates": []})).into_response()
        }
        _ => (StatusCode::BAD_GATEWAY, "upstream exploded").into_response(),
    }
}

async fn spawn_stub() -> (String, CallLog) {
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/v1beta/models/{call}", post(stub))
        .with_state(log.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub");
    let addr = listener.local_addr().expect("stub addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server");
    });

    (format!("http://{addr}"), log)
}

fn transport(base_url: &str, timeout: Duration) -> GeminiTransport {
    let mut config = GeminiConfig::new("test-key");
    config.base_url = base_url.to_string();
    config.request_timeout = timeout;
    GeminiTransport::new(reqwest::Client::new(), config)
}

#[tokio::test]
async fn sends_prompt_key_and_generation_config() {
    let (base_url, log) = spawn_stub().await;
    let transport = transport(&base_url, Duration::from_secs(5));

    let params = GenerationParams {
        temperature: 0.5,
        max_output_tokens: 42,
    };
    let answer = transport
        .generate("good", "say hi", &params)
        .await
        .expect("answer");
    assert_eq!(answer, "Hi from good");

    let calls = log.lock().unwrap().clone();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].call, "good:generateContent");
    assert_eq!(calls[0].key.as_deref(), Some("test-key"));
    assert_eq!(calls[0].body["contents"][0]["parts"][0]["text"], "say hi");
    assert_eq!(calls[0].body["generationConfig"]["maxOutputTokens"], 42);
}

#[tokio::test]
async fn error_body_is_api_failure() {
    let (base_url, _log) = spawn_stub().await;
    let transport = transport(&base_url, Duration::from_secs(5));

    let err = transport
        .generate("missing", "hello", &GenerationParams::default())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        CandidateError::Api {
            status: 404,
            message: "models/missing is not found".into()
        }
    );
}

#[tokio::test]
async fn non_json_body_is_invalid() {
    let (base_url, _log) = spawn_stub().await;
    let transport = transport(&base_url, Duration::from_secs(5));

    let err = transport
        .generate("broken", "hello", &GenerationParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, CandidateError::InvalidBody(_)), "{err:?}");
}

#[tokio::test]
async fn slow_model_times_out_without_leaking_key() {
    let (base_url, _log) = spawn_stub().await;
    let transport = transport(&base_url, Duration::from_millis(200));

    let err = transport
        .generate("slow", "hello", &GenerationParams::default())
        .await
        .unwrap_err();
    let CandidateError::Transport(message) = err else {
        panic!("expected transport error");
    };
    assert!(!message.contains("test-key"), "key leaked: {message}");
}

#[tokio::test]
async fn unreachable_host_is_transport_failure() {
    // Nothing listens on port 1.
    let transport = transport("http://127.0.0.1:1", Duration::from_secs(5));

    let err = transport
        .generate("good", "hello", &GenerationParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, CandidateError::Transport(_)), "{err:?}");
}

#[tokio::test]
async fn dispatcher_falls_through_to_working_model() {
    let (base_url, log) = spawn_stub().await;
    let dispatcher = Dispatcher::new(
        DispatcherConfig::default().with_candidates(["broken", "missing", "good", "slow"]),
        Arc::new(transport(&base_url, Duration::from_secs(5))),
    );

    let result = dispatcher.dispatch("Hello").await;

    assert_eq!(
        result,
        DispatchResult::Answered {
            model_id: "good".into(),
            text: "Hi from good".into()
        }
    );
    let calls: Vec<String> = log.lock().unwrap().iter().map(|r| r.call.clone()).collect();
    assert_eq!(
        calls,
        vec![
            "broken:generateContent",
            "missing:generateContent",
            "good:generateContent"
        ]
    );
}
