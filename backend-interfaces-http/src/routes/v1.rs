use axum::routing::{delete, get, post};
use axum::Router;

use backend_application::AppState;

use crate::handlers::{content_handlers, event_handlers, ops_handlers, report_handlers};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/v1/events", get(event_handlers::list_events))
        .route("/v1/stats", get(event_handlers::get_stats))
        .route("/v1/news", get(content_handlers::list_news))
        .route("/v1/knowledge", get(content_handlers::list_knowledge))
        .route("/v1/reports", post(report_handlers::submit_report))
        .route(
            "/v1/admin/reports/pending",
            get(report_handlers::list_pending_reports),
        )
        .route(
            "/v1/admin/reports/:id/approve",
            post(report_handlers::approve_report),
        )
        .route(
            "/v1/admin/reports/:id/reject",
            post(report_handlers::reject_report),
        )
        .route("/v1/admin/events", post(event_handlers::add_event))
        .route("/v1/admin/events/:id", delete(event_handlers::delete_event))
        .route("/v1/admin/news", post(content_handlers::add_news))
        .route("/v1/admin/news/:id", delete(content_handlers::delete_news))
        .route("/v1/admin/knowledge", post(content_handlers::add_knowledge))
        .route(
            "/v1/admin/knowledge/:id",
            delete(content_handlers::delete_knowledge),
        )
        .route("/v1/ops/health/live", get(ops_handlers::health_live))
        .route("/v1/ops/health/ready", get(ops_handlers::health_ready))
        .route(
            "/v1/ops/metrics/prometheus",
            get(ops_handlers::metrics_prometheus),
        )
        .with_state(state)
}
