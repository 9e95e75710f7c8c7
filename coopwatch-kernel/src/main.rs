/**
 * COOPWATCH KERNEL - Point d'entrée du serveur du dashboard
 *
 * RÔLE : Charge la config, initialise les logs, construit le store de
 * notifications (seed) et le shell, puis sert le dashboard en HTTP.
 */

use anyhow::{Context, Result};
use time::OffsetDateTime;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use coopwatch_kernel::config::load_config;
use coopwatch_kernel::fixtures::seed_notifications;
use coopwatch_kernel::health::HealthTracker;
use coopwatch_kernel::http::{build_router, AppState};
use coopwatch_kernel::notifications::NotificationStore;
use coopwatch_kernel::shell::DashboardShell;
use coopwatch_kernel::state::new_state;

#[tokio::main]
async fn main() -> Result<()> {
    // .env optionnel
    dotenvy::dotenv().ok();

    let cfg = load_config().await;

    // RUST_LOG prioritaire sur le filtre de la config
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.log.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("CoopWatch kernel starting...");
    info!(bind = %cfg.http.bind, filter = %cfg.log.filter, "config loaded");

    let store = NotificationStore::with_seed(seed_notifications(OffsetDateTime::now_utc()));
    info!("seeded {} notifications", store.len());

    let app_state = AppState {
        store: new_state(store),
        shell: new_state(DashboardShell::from_config(&cfg.dashboard)),
        health_tracker: HealthTracker::new(),
    };
    let app = build_router(app_state);

    let listener = TcpListener::bind(&cfg.http.bind)
        .await
        .with_context(|| format!("Failed to bind {}", cfg.http.bind))?;
    info!("listening on http://{}", cfg.http.bind);

    axum::serve(listener, app).await.context("HTTP server failed")?;
    Ok(())
}
