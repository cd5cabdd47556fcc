use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use backend_application::commands::report_commands;
use backend_application::dtos::ReportSubmission;
use backend_application::queries::report_queries;
use backend_application::AppState;
use backend_domain::{Report, ReportId};

use crate::error::HttpError;
use crate::extract::{AdminGuard, ApiJson, ApiPath};
use crate::geojson::EventFeature;

pub async fn submit_report(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ReportSubmission>,
) -> Result<(StatusCode, Json<Report>), HttpError> {
    let report = report_commands::submit_report(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(report)))
}

pub async fn list_pending_reports(
    State(state): State<AppState>,
    _admin: AdminGuard,
) -> Result<Json<Vec<Report>>, HttpError> {
    let reports = report_queries::list_pending_reports(&state).await?;
    Ok(Json(reports))
}

pub async fn approve_report(
    State(state): State<AppState>,
    _admin: AdminGuard,
    ApiPath(id): ApiPath<i64>,
) -> Result<(StatusCode, Json<EventFeature>), HttpError> {
    let event = report_commands::approve_report(&state, ReportId(id)).await?;
    Ok((StatusCode::CREATED, Json(EventFeature::from(event))))
}

pub async fn reject_report(
    State(state): State<AppState>,
    _admin: AdminGuard,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, HttpError> {
    report_commands::reject_report(&state, ReportId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
