use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tokio::time::{timeout, Duration};
use tracing::error;

use backend_application::AppState;

use crate::extract::AdminGuard;

#[derive(Serialize)]
struct ReadyStatus {
    status: &'static str,
    store: &'static str,
}

pub async fn health_live() -> StatusCode {
    StatusCode::OK
}

pub async fn health_ready(State(state): State<AppState>) -> impl IntoResponse {
    let timeout_secs = state.config.request_timeout_seconds.max(1);
    let store = state.health_service.backend_name();
    let (status, label) = match timeout(
        Duration::from_secs(timeout_secs),
        state.health_service.check_store(),
    )
    .await
    {
        Ok(Ok(true)) => (StatusCode::OK, "ok"),
        Ok(Ok(false)) => (StatusCode::SERVICE_UNAVAILABLE, "error"),
        Ok(Err(err)) => {
            error!(store = store, "ready check failed: {}", err);
            (StatusCode::SERVICE_UNAVAILABLE, "error")
        }
        Err(_) => {
            error!(store = store, "ready check timeout after {}s", timeout_secs);
            (StatusCode::SERVICE_UNAVAILABLE, "timeout")
        }
    };
    (
        status,
        Json(ReadyStatus {
            status: label,
            store,
        }),
    )
}

pub async fn metrics_prometheus(
    State(state): State<AppState>,
    _admin: AdminGuard,
) -> impl IntoResponse {
    let payload = state.metrics.render_prometheus();
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; version=0.0.4; charset=utf-8"),
    );
    (headers, payload).into_response()
}
