/**
 * HTTP COOPWATCH - Transport navigateur du dashboard
 *
 * RÔLE :
 * Livre au navigateur les arbres de vue des panneaux (JSON) et applique les
 * clics de l'utilisateur sur le store de notifications et le shell.
 *
 * FONCTIONNEMENT :
 * - Serveur Axum, état partagé `AppState` (store + shell derrière Mutex)
 * - Chaque mutation est appliquée sous le verrou, dans l'ordre d'arrivée
 * - Aucun verrou n'est tenu pendant un `await`
 * - Middleware de log : méthode, chemin, statut, durée ; l'id de requête
 *   est renvoyé dans `x-request-id`
 *
 * ROUTES :
 * - /health, /system/health : sondes
 * - /dashboard, /shell, /panels/{panel} : vues
 * - /notifications... : MarkRead, MarkAllRead, Dismiss, Snapshot
 * - /feeds/{id}/motion : couche décorative
 * - /reports/generate : demande de rapport
 */

use axum::extract::{Path, Query, Request, State};
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use crate::error::KernelError;
use crate::fixtures::find_feed;
use crate::health::{HealthTracker, KernelHealth};
use crate::metrics::{filter_by_severity, summarize, NotificationSummary};
use crate::models::{Notification, Severity};
use crate::motion::{frame, MotionFrame};
use crate::notifications::NotificationStore;
use crate::panels::reports::{generate_report, GeneratedReport};
use crate::panels::{self, PanelView, RenderContext};
use crate::shell::{DashboardShell, PanelId, Selection};
use crate::state::Shared;

/// Taille de l'image sur laquelle les marqueurs décoratifs sont placés
const MOTION_WIDTH: u32 = 640;
const MOTION_HEIGHT: u32 = 360;
const MAX_MARKERS: u32 = 32;

#[derive(Clone)]
pub struct AppState {
    pub store: Shared<NotificationStore>,
    pub shell: Shared<DashboardShell>,
    pub health_tracker: HealthTracker,
}

/// Id de requête, accessible aux handlers via les extensions
#[derive(Clone)]
pub struct RequestId(pub String);

async fn request_logging(mut req: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();
    req.extensions_mut().insert(RequestId(request_id.clone()));

    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let mut response = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert("x-request-id", value);
    }

    info!(
        request_id = %request_id,
        "{} {} -> {} ({}ms)",
        method,
        path,
        response.status().as_u16(),
        started.elapsed().as_millis()
    );
    response
}

pub fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/system/health", get(get_system_health))
        .route("/dashboard", get(get_dashboard))
        .route("/shell", get(get_shell))
        .route("/shell/select", post(select))
        .route("/panels/{panel}", get(get_panel))
        .route("/notifications", get(list_notifications))
        .route("/notifications/summary", get(get_summary))
        .route("/notifications/read-all", post(mark_all_read))
        .route("/notifications/{id}/read", post(mark_read))
        .route("/notifications/{id}", delete(dismiss))
        .route("/feeds/{id}/motion", get(get_motion))
        .route("/reports/generate", post(generate))
        .with_state(app_state)
        .layer(middleware::from_fn(request_logging))
}

#[derive(Serialize)]
struct Header {
    title: &'static str,
    unread: usize,
    critical_unread: usize,
}

#[derive(Serialize)]
struct AgentStatus {
    panel: PanelId,
    name: &'static str,
    tab: &'static str,
    status: &'static str,
}

#[derive(Serialize)]
struct DashboardView {
    header: Header,
    agents: Vec<AgentStatus>,
    shell: DashboardShell,
    panel: PanelView,
}

/// Copie du store et du shell, verrous relâchés avant le rendu
fn snapshot(app: &AppState) -> (Vec<Notification>, DashboardShell) {
    let notifications = app.store.lock().snapshot();
    let shell = app.shell.lock().clone();
    (notifications, shell)
}

fn render_panel(panel: PanelId, notifications: &[Notification], shell: &DashboardShell) -> PanelView {
    let ctx = RenderContext { notifications, shell, now: OffsetDateTime::now_utc() };
    panels::render(panel, &ctx)
}

// GET /system/health
async fn get_system_health(State(app): State<AppState>) -> Json<KernelHealth> {
    Json(app.health_tracker.get_health(&app.store))
}

// GET /dashboard (en-tête + barre des agents + panneau actif)
async fn get_dashboard(State(app): State<AppState>) -> Json<DashboardView> {
    let (notifications, shell) = snapshot(&app);
    let summary = summarize(&notifications);

    let agents = PanelId::ALL
        .iter()
        .map(|panel| AgentStatus { panel: *panel, name: panel.agent_name(), tab: panel.tab_label(), status: "active" })
        .collect();
    let panel = render_panel(shell.active_tab(), &notifications, &shell);

    Json(DashboardView {
        header: Header { title: "CoopWatch", unread: summary.unread, critical_unread: summary.critical_unread },
        agents,
        shell,
        panel,
    })
}

// GET /shell
async fn get_shell(State(app): State<AppState>) -> Json<DashboardShell> {
    Json(app.shell.lock().clone())
}

// POST /shell/select
async fn select(
    State(app): State<AppState>,
    Json(selection): Json<Selection>,
) -> Result<Json<DashboardShell>, KernelError> {
    let mut shell = app.shell.lock();
    shell.apply(selection)?;
    Ok(Json(shell.clone()))
}

// GET /panels/{panel}
async fn get_panel(
    State(app): State<AppState>,
    Path(panel): Path<String>,
) -> Result<Json<PanelView>, StatusCode> {
    let panel = PanelId::parse(&panel).ok_or(StatusCode::BAD_REQUEST)?;
    let (notifications, shell) = snapshot(&app);
    Ok(Json(render_panel(panel, &notifications, &shell)))
}

#[derive(Debug, Deserialize)]
struct NotificationsQuery {
    severity: Option<Severity>,
}

// GET /notifications?severity=critical
async fn list_notifications(
    State(app): State<AppState>,
    Query(query): Query<NotificationsQuery>,
) -> Json<Vec<Notification>> {
    let store = app.store.lock();
    let list = match query.severity {
        Some(level) => filter_by_severity(store.notifications(), level),
        None => store.snapshot(),
    };
    Json(list)
}

// GET /notifications/summary
async fn get_summary(State(app): State<AppState>) -> Json<NotificationSummary> {
    Json(summarize(app.store.lock().notifications()))
}

// POST /notifications/{id}/read (id inconnu = no-op, toujours 200)
async fn mark_read(State(app): State<AppState>, Path(id): Path<String>) -> Json<serde_json::Value> {
    let transition = app.store.lock().mark_read(&id);
    Json(serde_json::json!({ "ok": true, "applied": transition.applied() }))
}

// POST /notifications/read-all
async fn mark_all_read(State(app): State<AppState>) -> Json<serde_json::Value> {
    let updated = app.store.lock().mark_all_read();
    Json(serde_json::json!({ "ok": true, "updated": updated }))
}

// DELETE /notifications/{id} (id inconnu = no-op, toujours 200)
async fn dismiss(State(app): State<AppState>, Path(id): Path<String>) -> Json<serde_json::Value> {
    let transition = app.store.lock().dismiss(&id);
    Json(serde_json::json!({ "ok": true, "applied": transition.applied() }))
}

// GET /feeds/{id}/motion
async fn get_motion(Path(id): Path<String>) -> Result<Json<MotionFrame>, KernelError> {
    let feed = find_feed(&id).ok_or(KernelError::UnknownFeed(id))?;
    let count = feed.subject_count.min(MAX_MARKERS) as usize;
    Ok(Json(frame(count, MOTION_WIDTH, MOTION_HEIGHT)))
}

// POST /reports/generate
async fn generate(State(app): State<AppState>) -> Json<GeneratedReport> {
    let shell = app.shell.lock();
    Json(generate_report(&shell, OffsetDateTime::now_utc()))
}
