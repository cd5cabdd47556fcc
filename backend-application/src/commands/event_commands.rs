use tracing::{info, warn};

use backend_domain::{admin_event, Casualties, EventId, GeoPoint, OfficialEvent};

use super::{normalize_optional_text, parse_date};
use crate::dtos::NewEventRequest;
use crate::{AppError, AppState};

pub async fn add_official_event(
    state: &AppState,
    payload: NewEventRequest,
) -> Result<OfficialEvent, AppError> {
    let point = GeoPoint::parse(&payload.coordinates)
        .map_err(|err| AppError::BadRequest(err.to_string()))?;
    let date = parse_date(&payload.date)?;

    let event = admin_event(
        &payload.location,
        date,
        point,
        Casualties::new(payload.deaths, payload.injuries, payload.damaged_homes),
        normalize_optional_text(payload.description),
    );
    let stored = state.event_repo.insert_event(&event).await.map_err(|err| {
        state.metrics.record_write_failure();
        warn!("failed to insert official event: {}", err);
        AppError::from(err)
    })?;
    state.metrics.record_event_added();
    info!(event_id = %stored.id, province = %stored.province, "official event added");
    Ok(stored)
}

pub async fn delete_official_event(state: &AppState, id: EventId) -> Result<(), AppError> {
    state.event_repo.delete_event(id).await?;
    info!(event_id = %id, "official event deleted");
    Ok(())
}
