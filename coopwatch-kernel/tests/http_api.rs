mod common;

use axum::http::StatusCode;
use common::{build_test_context, get, ids, request};
use serde_json::json;

#[tokio::test]
async fn health_probe_answers_ok() {
    let ctx = build_test_context();
    let (status, body) = get(&ctx.app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");

    let (status, body) = get(&ctx.app, "/system/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["notifications_tracked"], 5);
    assert_eq!(body["unread"], 3);
}

#[tokio::test]
async fn mark_read_updates_summary() {
    let ctx = build_test_context();

    let (_, summary) = get(&ctx.app, "/notifications/summary").await;
    assert_eq!(summary, json!({ "total": 5, "unread": 3, "critical_unread": 2 }));

    let (status, body) = request(&ctx.app, "POST", "/notifications/N001/read", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["applied"], true);

    // idempotent
    let (status, body) = request(&ctx.app, "POST", "/notifications/N001/read", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["applied"], false);

    let (_, summary) = get(&ctx.app, "/notifications/summary").await;
    assert_eq!(summary, json!({ "total": 5, "unread": 2, "critical_unread": 1 }));
}

#[tokio::test]
async fn dismiss_removes_once_and_ignores_unknown_ids() {
    let ctx = build_test_context();

    let (status, _) = request(&ctx.app, "DELETE", "/notifications/N005", None).await;
    assert_eq!(status, StatusCode::OK);
    let (_, list) = get(&ctx.app, "/notifications").await;
    assert_eq!(ids(&list), ["N001", "N002", "N003", "N004"]);

    let (status, body) = request(&ctx.app, "DELETE", "/notifications/N999", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["applied"], false);

    // rejet terminal : marquer lu ensuite ne fait rien
    let (status, body) = request(&ctx.app, "POST", "/notifications/N005/read", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["applied"], false);
    assert_eq!(ctx.state.store.lock().len(), 4);
}

#[tokio::test]
async fn severity_filter_keeps_order() {
    let ctx = build_test_context();
    let (_, list) = get(&ctx.app, "/notifications?severity=warning").await;
    assert_eq!(ids(&list), ["N002", "N003"]);

    let (status, _) = get(&ctx.app, "/notifications?severity=urgent").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn mark_all_read_clears_unread() {
    let ctx = build_test_context();
    let (_, body) = request(&ctx.app, "POST", "/notifications/read-all", None).await;
    assert_eq!(body["updated"], 3);

    let (_, summary) = get(&ctx.app, "/notifications/summary").await;
    assert_eq!(summary["unread"], 0);
}

#[tokio::test]
async fn selection_drives_dashboard_panel() {
    let ctx = build_test_context();

    let (_, dash) = get(&ctx.app, "/dashboard").await;
    assert_eq!(dash["panel"]["panel"], "video-feed");
    assert_eq!(dash["agents"].as_array().map(Vec::len), Some(6));
    assert_eq!(dash["header"]["critical_unread"], 2);

    let (status, shell) =
        request(&ctx.app, "POST", "/shell/select", Some(json!({ "target": "tab", "tab": "notifications" }))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(shell["active_tab"], "notifications");

    let (_, dash) = get(&ctx.app, "/dashboard").await;
    assert_eq!(dash["panel"]["panel"], "notifications");
}

#[tokio::test]
async fn unknown_feed_selection_is_rejected() {
    let ctx = build_test_context();
    let (status, body) =
        request(&ctx.app, "POST", "/shell/select", Some(json!({ "target": "feed", "feed_id": "barn-z-9" }))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["ok"], false);

    let (_, shell) = get(&ctx.app, "/shell").await;
    assert_eq!(shell["selected_feed"], "barn-a-1");
}

#[tokio::test]
async fn panels_route_by_id() {
    let ctx = build_test_context();
    for id in ["video-feed", "tracker", "behavior", "health", "notifications", "reports"] {
        let (status, view) = get(&ctx.app, &format!("/panels/{id}")).await;
        assert_eq!(status, StatusCode::OK, "panel {id}");
        assert_eq!(view["panel"], id);
    }

    let (status, _) = get(&ctx.app, "/panels/map").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn motion_frame_for_known_feed_only() {
    let ctx = build_test_context();
    let (status, frame) = get(&ctx.app, "/feeds/outdoor-1/motion").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(frame["markers"].as_array().map(Vec::len), Some(32));

    let (status, _) = get(&ctx.app, "/feeds/nowhere/motion").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn report_generation_uses_shell_selection() {
    let ctx = build_test_context();
    request(&ctx.app, "POST", "/shell/select", Some(json!({ "target": "report_type", "report_type": "weekly" }))).await;

    let (status, report) = request(&ctx.app, "POST", "/reports/generate", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["report_type"], "weekly");
    assert_eq!(report["period"], "week");
}
