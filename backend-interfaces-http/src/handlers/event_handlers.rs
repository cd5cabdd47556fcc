use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use backend_application::commands::event_commands;
use backend_application::dtos::{EventListQuery, NewEventRequest};
use backend_application::queries::{event_queries, stats_queries};
use backend_application::AppState;
use backend_domain::{EventId, EventStats};

use crate::error::HttpError;
use crate::extract::{AdminGuard, ApiJson, ApiPath, ApiQuery};
use crate::geojson::{EventFeature, EventFeatureCollection};

pub async fn list_events(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<EventListQuery>,
) -> Result<Json<EventFeatureCollection>, HttpError> {
    let events = event_queries::list_official_events(&state, query).await?;
    Ok(Json(events.into_iter().collect()))
}

pub async fn get_stats(State(state): State<AppState>) -> Result<Json<EventStats>, HttpError> {
    let stats = stats_queries::get_event_stats(&state).await?;
    Ok(Json(stats))
}

pub async fn add_event(
    State(state): State<AppState>,
    _admin: AdminGuard,
    ApiJson(payload): ApiJson<NewEventRequest>,
) -> Result<(StatusCode, Json<EventFeature>), HttpError> {
    let event = event_commands::add_official_event(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(EventFeature::from(event))))
}

pub async fn delete_event(
    State(state): State<AppState>,
    _admin: AdminGuard,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, HttpError> {
    event_commands::delete_official_event(&state, EventId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
