//! Route handlers

use super::state::AppState;
use crate::utils::error::ExporterError;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use tracing::debug;

/// Register `/metrics` and `/health`
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/metrics", web::get().to(metrics))
        .route("/health", web::get().to(health_check));
}

/// Prometheus scrape endpoint
pub async fn metrics(state: web::Data<AppState>) -> Result<HttpResponse, ExporterError> {
    debug!("Metrics scrape requested");
    let body = state.registry.render()?;
    Ok(HttpResponse::Ok()
        .content_type(state.registry.content_type())
        .body(body))
}

/// Health document
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub git_hash: &'static str,
    pub uptime_seconds: u64,
    pub ticks_succeeded: u64,
    pub ticks_failed: u64,
    pub consecutive_failures: u64,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Liveness endpoint. Reports `degraded` while the latest tick failed; the
/// process keeps serving the last good values either way.
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let stats = &state.tick_stats;
    let consecutive_failures = stats.consecutive_failures();

    HttpResponse::Ok().json(HealthStatus {
        status: if consecutive_failures == 0 {
            "healthy"
        } else {
            "degraded"
        },
        version: state.build_info.version,
        git_hash: state.build_info.git_hash,
        uptime_seconds: state.started_at.elapsed().as_secs(),
        ticks_succeeded: stats.succeeded(),
        ticks_failed: stats.failed(),
        consecutive_failures,
        timestamp: chrono::Utc::now(),
    })
}
