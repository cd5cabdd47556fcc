use tracing::error;

use backend_domain::{Report, ReportStatus};

use crate::{AppError, AppState};

pub async fn list_pending_reports(state: &AppState) -> Result<Vec<Report>, AppError> {
    let rows = state
        .report_repo
        .fetch_reports_by_status(ReportStatus::Pending)
        .await
        .map_err(|err| {
            error!("failed to fetch pending reports: {}", err);
            AppError::from(err)
        })?;
    Ok(rows.into_iter().filter(Report::is_pending).collect())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use backend_domain::GeoPoint;

    use super::*;
    use crate::testing::{state_with, MemoryStore};

    #[tokio::test]
    async fn pending_list_skips_terminal_reports() {
        let store = Arc::new(MemoryStore::default());
        let point = GeoPoint::new(-7.79, 110.36);
        store.seed_report(101, "Budi Santoso", point, ReportStatus::Pending);
        store.seed_report(102, "Siti Aminah", point, ReportStatus::Approved);
        store.seed_report(103, "Andi", point, ReportStatus::Rejected);
        store.seed_report(104, "Dewi", point, ReportStatus::Processed);
        let state = state_with(store);

        let pending = list_pending_reports(&state).await.expect("pending");
        let ids: Vec<i64> = pending.iter().map(|report| report.id.0).collect();
        assert_eq!(ids, vec![101]);
    }
}
