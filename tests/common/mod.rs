//! Mock VoiceFlow backend shared by the integration tests.
//!
//! Serves a small subset of the REST API under `/api/v1` on a random port
//! and records what it receives.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use voiceflow::api::HttpGateway;
use voiceflow::session::{SessionContext, Theme};

/// Maximum time any test is allowed to run before we consider it hung.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Token the mock hands out on registration.
pub const ISSUED_TOKEN: &str = "mock-token-123";

/// Agent id that always answers 401.
pub const FORBIDDEN_AGENT: i64 = 401;

/// One request as the mock saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub authorization: Option<String>,
    pub query: HashMap<String, String>,
    pub body: Value,
}

#[derive(Default)]
pub struct Backend {
    pub requests: Mutex<Vec<Recorded>>,
    /// Agent creations still to fail with 500.
    pub failing_agent_creates: Mutex<u32>,
}

impl Backend {
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, method: &str, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method && r.path == path)
            .collect()
    }

    pub fn fail_next_agent_creates(&self, count: u32) {
        *self.failing_agent_creates.lock().unwrap() = count;
    }

    fn record(
        &self,
        method: &'static str,
        path: impl Into<String>,
        headers: &HeaderMap,
        query: HashMap<String, String>,
        body: Value,
    ) {
        let authorization = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        self.requests.lock().unwrap().push(Recorded {
            method,
            path: path.into(),
            authorization,
            query,
            body,
        });
    }
}

type Shared = State<Arc<Backend>>;

fn agent_json(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": "Greets callers",
        "instructions": "Be helpful.",
        "voice_id": "alloy",
        "temperature": 7.0,
        "max_tokens": 150,
        "model": "gpt-4",
        "is_active": true,
        "created_at": "2026-01-01T00:00:00Z",
        "updated_at": "2026-01-01T00:00:00Z"
    })
}

async fn register(State(b): Shared, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    b.record("POST", "/register", &headers, HashMap::new(), body.clone());
    if body["company"]["name"] == "Taken Inc" {
        return (
            StatusCode::CONFLICT,
            Json(json!({"detail": "Company already exists"})),
        )
            .into_response();
    }
    Json(json!({"companyId": 7, "userId": 11, "token": ISSUED_TOKEN})).into_response()
}

async fn account_settings(State(b): Shared, headers: HeaderMap, Json(body): Json<Value>) -> StatusCode {
    b.record("PUT", "/account/settings", &headers, HashMap::new(), body);
    StatusCode::NO_CONTENT
}

async fn list_agents(
    State(b): Shared,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    b.record("GET", "/agents", &headers, query, Value::Null);
    Json(json!({
        "agents": [agent_json(1, "Front desk"), agent_json(2, "After hours")],
        "total": 2,
        "page": 1,
        "per_page": 10
    }))
}

async fn create_agent(State(b): Shared, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    b.record("POST", "/agents", &headers, HashMap::new(), body.clone());
    {
        let mut failing = b.failing_agent_creates.lock().unwrap();
        if *failing > 0 {
            *failing -= 1;
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"detail": "Agent service unavailable"})),
            )
                .into_response();
        }
    }
    let name = body["name"].as_str().unwrap_or_default().to_string();
    (StatusCode::CREATED, Json(agent_json(42, &name))).into_response()
}

async fn get_agent(State(b): Shared, headers: HeaderMap, Path(id): Path<i64>) -> Response {
    b.record("GET", format!("/agents/{id}"), &headers, HashMap::new(), Value::Null);
    if id == FORBIDDEN_AGENT {
        return (StatusCode::UNAUTHORIZED, Json(json!({"detail": "Invalid token"}))).into_response();
    }
    if id == 404 {
        return (StatusCode::NOT_FOUND, Json(json!({"detail": "Agent not found"}))).into_response();
    }
    Json(agent_json(id, "Front desk")).into_response()
}

async fn update_agent(
    State(b): Shared,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Json<Value> {
    b.record("PUT", format!("/agents/{id}"), &headers, HashMap::new(), body.clone());
    let mut agent = agent_json(id, "Front desk");
    if let Some(active) = body.get("is_active") {
        agent["is_active"] = active.clone();
    }
    Json(agent)
}

async fn delete_agent(State(b): Shared, headers: HeaderMap, Path(id): Path<i64>) -> StatusCode {
    b.record("DELETE", format!("/agents/{id}"), &headers, HashMap::new(), Value::Null);
    StatusCode::NO_CONTENT
}

async fn list_tools(
    State(b): Shared,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    b.record("GET", "/tools", &headers, query, Value::Null);
    Json(json!([
        {"id": 1, "name": "Calendar", "tool_type": "api", "is_active": true}
    ]))
}

async fn list_calls(
    State(b): Shared,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    b.record("GET", "/calls", &headers, query, Value::Null);
    Json(json!({
        "calls": [{
            "id": 9,
            "agent_id": 1,
            "phone_number": "+2348000000001",
            "caller_number": "+2348000000002",
            "status": "completed",
            "duration": 63.0,
            "recording_url": null,
            "metadata": {}
        }],
        "total": 1,
        "page": 1,
        "per_page": 10
    }))
}

async fn initiate_call(State(b): Shared, headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
    b.record("POST", "/calls/initiate", &headers, HashMap::new(), body);
    Json(json!({"call_id": 10, "status": "ringing"}))
}

async fn end_call(State(b): Shared, headers: HeaderMap, Path(id): Path<i64>) -> StatusCode {
    b.record("POST", format!("/calls/{id}/end"), &headers, HashMap::new(), Value::Null);
    StatusCode::OK
}

async fn list_knowledge_bases(
    State(b): Shared,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    b.record("GET", "/knowledge-bases", &headers, query, Value::Null);
    Json(json!({
        "knowledge_bases": [{"id": 3, "name": "FAQ", "kb_type": "document", "is_active": true}],
        "total": 1,
        "page": 1,
        "per_page": 10
    }))
}

async fn list_phone_numbers(
    State(b): Shared,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Json<Value> {
    b.record("GET", "/phone-numbers", &headers, query, Value::Null);
    Json(json!([
        {"id": 5, "phone_number": "+2348000000001", "agent_id": 1, "is_active": true},
        {"id": 6, "phone_number": "+2348000000003", "agent_id": null, "is_active": false}
    ]))
}

/// Start the mock on a random port, return (base URL, recorder).
pub async fn start_backend() -> (String, Arc<Backend>) {
    let backend = Arc::new(Backend::default());

    let api = Router::new()
        .route("/register", post(register))
        .route("/account/settings", put(account_settings))
        .route("/agents", get(list_agents).post(create_agent))
        .route(
            "/agents/{id}",
            get(get_agent).put(update_agent).delete(delete_agent),
        )
        .route("/tools", get(list_tools))
        .route("/calls", get(list_calls))
        .route("/calls/initiate", post(initiate_call))
        .route("/calls/{id}/end", post(end_call))
        .route("/knowledge-bases", get(list_knowledge_bases))
        .route("/phone-numbers", get(list_phone_numbers))
        .with_state(Arc::clone(&backend));
    let app = Router::new().nest("/api/v1", api);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start accepting connections.
    tokio::time::sleep(Duration::from_millis(50)).await;

    (format!("http://127.0.0.1:{port}/api/v1"), backend)
}

/// A gateway pointed at `base_url` with a fresh in-memory session.
pub fn gateway(base_url: &str) -> (HttpGateway, Arc<SessionContext>) {
    let session = Arc::new(SessionContext::in_memory(Theme::Light));
    let url = reqwest::Url::parse(base_url).unwrap();
    (HttpGateway::new(url, Arc::clone(&session)), session)
}
