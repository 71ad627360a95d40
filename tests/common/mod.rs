//! Fake Canvas and Notion services for integration tests
//!
//! One axum server answers both APIs on an ephemeral port and records every
//! request it sees.

#![allow(dead_code)]

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

pub const CANVAS_KEY: &str = "canvas-test-key";
pub const NOTION_KEY: &str = "notion-test-key";
pub const DATABASE_ID: &str = "db-123";

/// A request seen by the fake server
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub authorization: Option<String>,
    pub notion_version: Option<String>,
    pub body: Value,
}

/// Behavior and state of the fake services
#[derive(Default)]
pub struct FakeConfig {
    /// Canvas course id -> assignments as Canvas JSON
    pub assignments: HashMap<String, Vec<Value>>,
    /// Notion relation id -> existing titles
    pub titles: HashMap<String, Vec<String>>,
    /// Status returned for every database query, when set
    pub query_status: Option<u16>,
    /// Status returned for every page creation, when set
    pub create_status: Option<u16>,
    /// Assignments per Canvas page (0 = all on one page)
    pub canvas_page_size: usize,
    /// Results per Notion query page (0 = all on one page)
    pub notion_page_size: usize,
}

struct FakeState {
    base_url: String,
    config: FakeConfig,
    titles: Mutex<HashMap<String, Vec<String>>>,
    requests: Mutex<Vec<Recorded>>,
}

/// Handle to a running fake server
pub struct FakeServer {
    pub base_url: String,
    state: Arc<FakeState>,
}

impl FakeServer {
    pub async fn start(config: FakeConfig) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let state = Arc::new(FakeState {
            base_url: base_url.clone(),
            titles: Mutex::new(config.titles.clone()),
            config,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/api/v1/courses/{course_id}", get(get_course))
            .route(
                "/api/v1/courses/{course_id}/assignments",
                get(list_assignments),
            )
            .route("/v1/databases/{database_id}/query", post(query_database))
            .route("/v1/pages", post(create_page))
            .with_state(state.clone());

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, state }
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, prefix: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.path.starts_with(prefix))
            .collect()
    }

    /// Bodies of every `POST /v1/pages`
    pub fn page_requests(&self) -> Vec<Value> {
        self.requests_to("/v1/pages")
            .into_iter()
            .map(|r| r.body)
            .collect()
    }

    /// Environment lookup pointing both clients at this server
    pub fn env(&self) -> impl Fn(&str) -> Option<String> {
        let base = self.base_url.clone();
        move |key: &str| match key {
            "CANVAS_API_KEY" => Some(CANVAS_KEY.to_string()),
            "NOTION_API_KEY" => Some(NOTION_KEY.to_string()),
            "NOTION_DB_ID" => Some(DATABASE_ID.to_string()),
            "CANVAS_API_URL" | "NOTION_API_URL" => Some(base.clone()),
            "SYNC_HTTP_TIMEOUT_SECS" => Some("5".to_string()),
            _ => None,
        }
    }
}

/// Canvas assignment JSON
pub fn assignment(id: u64, course: &str, name: &str, due_at: Option<&str>) -> Value {
    json!({
        "id": id,
        "name": name,
        "due_at": due_at,
        "html_url": format!("https://canvas.test/courses/{}/assignments/{}", course, id),
        "points_possible": 10.0
    })
}

/// Title text of a created page body
pub fn page_title(body: &Value) -> &str {
    body["properties"]["Name"]["title"][0]["text"]["content"]
        .as_str()
        .unwrap_or_default()
}

fn record(state: &FakeState, method: &'static str, path: String, headers: &HeaderMap, body: Value) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    state.requests.lock().unwrap().push(Recorded {
        method,
        path,
        authorization: header("authorization"),
        notion_version: header("notion-version"),
        body,
    });
}

async fn get_course(
    State(state): State<Arc<FakeState>>,
    Path(course_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    record(
        &state,
        "GET",
        format!("/api/v1/courses/{}", course_id),
        &headers,
        Value::Null,
    );
    if !state.config.assignments.contains_key(&course_id) {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "errors": [{ "message": "The specified resource does not exist." }] })),
        )
            .into_response();
    }
    Json(json!({ "id": course_id.parse::<u64>().unwrap_or(0), "name": format!("Course {}", course_id) }))
        .into_response()
}

async fn list_assignments(
    State(state): State<Arc<FakeState>>,
    Path(course_id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
) -> Response {
    record(
        &state,
        "GET",
        format!("/api/v1/courses/{}/assignments", course_id),
        &headers,
        json!(params),
    );
    let Some(all) = state.config.assignments.get(&course_id) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let size = match state.config.canvas_page_size {
        0 => all.len().max(1),
        n => n,
    };
    let page: usize = params
        .get("page")
        .and_then(|p| p.parse().ok())
        .unwrap_or(1);
    let start = ((page - 1) * size).min(all.len());
    let end = (start + size).min(all.len());
    let batch: Vec<Value> = all[start..end].to_vec();

    if end < all.len() {
        let next = format!(
            "<{}/api/v1/courses/{}/assignments?page={}&per_page={}>; rel=\"next\"",
            state.base_url,
            course_id,
            page + 1,
            size
        );
        return ([(header::LINK, next)], Json(batch)).into_response();
    }
    Json(batch).into_response()
}

async fn query_database(
    State(state): State<Arc<FakeState>>,
    Path(database_id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    record(
        &state,
        "POST",
        format!("/v1/databases/{}/query", database_id),
        &headers,
        body.clone(),
    );
    if let Some(status) = state.config.query_status {
        let status = StatusCode::from_u16(status).unwrap();
        return (
            status,
            Json(json!({ "object": "error", "status": status.as_u16(), "message": "fake failure" })),
        )
            .into_response();
    }

    let relation = body["filter"]["relation"]["contains"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    let titles = state
        .titles
        .lock()
        .unwrap()
        .get(&relation)
        .cloned()
        .unwrap_or_default();

    let size = match state.config.notion_page_size {
        0 => titles.len().max(1),
        n => n,
    };
    let start: usize = body["start_cursor"]
        .as_str()
        .and_then(|c| c.parse().ok())
        .unwrap_or(0);
    let start = start.min(titles.len());
    let end = (start + size).min(titles.len());
    let results: Vec<Value> = titles[start..end]
        .iter()
        .map(|t| {
            json!({
                "object": "page",
                "properties": { "Name": { "type": "title", "title": [{ "type": "text", "text": { "content": t } }] } }
            })
        })
        .collect();
    let has_more = end < titles.len();

    Json(json!({
        "object": "list",
        "results": results,
        "has_more": has_more,
        "next_cursor": if has_more { Value::String(end.to_string()) } else { Value::Null },
    }))
    .into_response()
}

async fn create_page(
    State(state): State<Arc<FakeState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    record(&state, "POST", "/v1/pages".to_string(), &headers, body.clone());
    if let Some(status) = state.config.create_status {
        return (
            StatusCode::from_u16(status).unwrap(),
            Json(json!({ "object": "error", "message": "validation failed" })),
        )
            .into_response();
    }

    let relation = body["properties"]["Course"]["relation"][0]["id"]
        .as_str()
        .unwrap_or_default()
        .to_string();
    state
        .titles
        .lock()
        .unwrap()
        .entry(relation)
        .or_default()
        .push(page_title(&body).to_string());

    Json(json!({ "object": "page", "id": "page-new" })).into_response()
}
