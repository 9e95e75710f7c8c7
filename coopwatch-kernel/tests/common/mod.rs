#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use coopwatch_kernel::fixtures::seed_notifications;
use coopwatch_kernel::health::HealthTracker;
use coopwatch_kernel::http::{build_router, AppState};
use coopwatch_kernel::notifications::NotificationStore;
use coopwatch_kernel::shell::DashboardShell;
use coopwatch_kernel::state::new_state;
use serde_json::Value;
use time::OffsetDateTime;
use tower::ServiceExt;

pub struct TestContext {
    pub state: AppState,
    pub app: axum::Router,
}

/// Router branché sur un store seedé et un shell par défaut
pub fn build_test_context() -> TestContext {
    let state = AppState {
        store: new_state(NotificationStore::with_seed(seed_notifications(OffsetDateTime::now_utc()))),
        shell: new_state(DashboardShell::default()),
        health_tracker: HealthTracker::new(),
    };
    let app = build_router(state.clone());
    TestContext { state, app }
}

pub async fn request(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let req_body = match body {
        Some(json) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let req = builder.body(req_body).expect("request should build");

    let resp = app.clone().oneshot(req).await.expect("request should be handled");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.expect("body should read");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice::<Value>(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).to_string()))
    };
    (status, json)
}

pub async fn get(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    request(app, "GET", uri, None).await
}

pub fn ids(list: &Value) -> Vec<String> {
    list.as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|n| n["id"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
