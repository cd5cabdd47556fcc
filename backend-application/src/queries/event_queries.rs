use tracing::error;

use backend_domain::OfficialEvent;

use crate::dtos::EventListQuery;
use crate::{AppError, AppState};

pub async fn list_official_events(
    state: &AppState,
    query: EventListQuery,
) -> Result<Vec<OfficialEvent>, AppError> {
    let limit = query
        .limit
        .filter(|limit| *limit > 0)
        .or(state.config.default_event_limit);
    let mut events = state.event_repo.fetch_events(limit).await.map_err(|err| {
        error!("failed to fetch official events: {}", err);
        AppError::from(err)
    })?;
    events.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
    if let Some(limit) = limit {
        events.truncate(limit);
    }
    Ok(events)
}
