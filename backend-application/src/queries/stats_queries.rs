use futures_util::future::try_join;
use tracing::error;

use backend_domain::{summarize_events, EventStats, ReportStatus};

use crate::{AppError, AppState};

pub async fn get_event_stats(state: &AppState) -> Result<EventStats, AppError> {
    let (events, pending) = try_join(
        state.event_repo.fetch_events(None),
        state.report_repo.fetch_reports_by_status(ReportStatus::Pending),
    )
    .await
    .map_err(|err| {
        error!("failed to load statistics: {}", err);
        AppError::from(err)
    })?;
    Ok(summarize_events(&events, pending.len()))
}
