use tracing::{error, info, warn};

use backend_domain::{
    promote_report, GeoPoint, NewReport, OfficialEvent, Report, ReportId, ReportStatus,
};

use super::{normalize_optional_text, normalize_required_text};
use crate::dtos::ReportSubmission;
use crate::{AppError, AppState};

pub async fn submit_report(state: &AppState, payload: ReportSubmission) -> Result<Report, AppError> {
    let reporter = normalize_required_text(&payload.name, "name")?;
    let description = normalize_required_text(&payload.description, "description")?;
    let point = GeoPoint::checked(payload.lat, payload.lng)
        .map_err(|err| AppError::BadRequest(err.to_string()))?;

    let report = NewReport {
        reporter,
        description,
        point,
        location: normalize_optional_text(payload.location),
        deaths: payload.deaths,
        injuries: payload.injuries,
        damaged_homes: payload.damaged_homes,
        photo: normalize_optional_text(payload.photo),
    };
    let stored = state.report_repo.insert_report(&report).await.map_err(|err| {
        state.metrics.record_write_failure();
        warn!("failed to store report submission: {}", err);
        AppError::from(err)
    })?;
    state.metrics.record_submission();
    info!(report_id = %stored.id, reporter = %stored.reporter, "report submitted");
    Ok(stored)
}

/// Promotes a pending report to an official event.
///
/// The event is written first and the report status second, so a failed
/// insert leaves the report pending and retryable. A failed status update
/// after a successful insert leaves the event in place; it is reported as
/// a plain write failure and logged with both ids.
pub async fn approve_report(state: &AppState, id: ReportId) -> Result<OfficialEvent, AppError> {
    let report = load_pending_report(state, id).await?;
    let new_event = promote_report(&report, state.clock.today());

    let event = state.event_repo.insert_event(&new_event).await.map_err(|err| {
        state.metrics.record_write_failure();
        error!(report_id = %id, "failed to insert promoted event: {}", err);
        AppError::from(err)
    })?;

    if let Err(err) = state
        .report_repo
        .update_report_status(id, ReportStatus::Approved)
        .await
    {
        state.metrics.record_write_failure();
        error!(
            report_id = %id,
            event_id = %event.id,
            "event written but report status update failed: {}",
            err
        );
        return Err(AppError::WriteFailure(format!(
            "failed to mark report {} approved: {}",
            id, err
        )));
    }

    state.metrics.record_approval();
    info!(report_id = %id, event_id = %event.id, "report approved");
    Ok(event)
}

pub async fn reject_report(state: &AppState, id: ReportId) -> Result<(), AppError> {
    load_pending_report(state, id).await?;
    state
        .report_repo
        .update_report_status(id, ReportStatus::Rejected)
        .await
        .map_err(|err| {
            if !err.is_not_found() {
                state.metrics.record_write_failure();
            }
            AppError::from(err)
        })?;
    state.metrics.record_rejection();
    info!(report_id = %id, "report rejected");
    Ok(())
}

async fn load_pending_report(state: &AppState, id: ReportId) -> Result<Report, AppError> {
    let report = state
        .report_repo
        .fetch_report(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("report {} not found", id)))?;
    if !report.is_pending() {
        return Err(AppError::InvalidState(format!(
            "report {} already {}",
            id, report.status
        )));
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use super::*;
    use crate::queries::{event_queries, report_queries};
    use crate::testing::{state_with, today, MemoryStore};
    use crate::dtos::EventListQuery;

    fn budi_store() -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::default());
        store.seed_report(101, "Budi", GeoPoint::new(-6.90, 107.60), ReportStatus::Pending);
        store
    }

    #[tokio::test]
    async fn approve_creates_event_and_marks_report() {
        let store = budi_store();
        let state = state_with(store.clone());

        let event = approve_report(&state, ReportId(101)).await.expect("approve");
        assert_eq!(event.point, GeoPoint::new(-6.90, 107.60));
        assert!(event.source.contains("Budi"));
        assert_eq!(event.date, today());
        assert_eq!(event.casualties.deaths, 0);
        assert_eq!(event.casualties.injuries, 0);
        assert_eq!(event.casualties.damaged_homes, 0);

        assert_eq!(store.events().len(), 1);
        assert_eq!(store.report(101).unwrap().status, ReportStatus::Approved);
    }

    #[tokio::test]
    async fn approve_and_reject_refuse_processed_reports() {
        let store = Arc::new(MemoryStore::default());
        store.seed_report(1, "Siti", GeoPoint::new(-7.79, 110.36), ReportStatus::Approved);
        store.seed_report(2, "Ani", GeoPoint::new(-7.0, 110.0), ReportStatus::Rejected);
        store.seed_report(3, "Eko", GeoPoint::new(-7.0, 110.0), ReportStatus::Processed);
        let state = state_with(store.clone());

        for id in [1, 2, 3] {
            let err = approve_report(&state, ReportId(id)).await.expect_err("approve");
            assert!(matches!(err, AppError::InvalidState(_)));
            let err = reject_report(&state, ReportId(id)).await.expect_err("reject");
            assert!(matches!(err, AppError::InvalidState(_)));
        }
        assert!(store.events().is_empty());
        assert_eq!(store.event_inserts.load(Ordering::SeqCst), 0);
        assert_eq!(store.report(2).unwrap().status, ReportStatus::Rejected);
    }

    #[tokio::test]
    async fn approve_missing_report_is_not_found() {
        let state = state_with(Arc::new(MemoryStore::default()));
        let err = approve_report(&state, ReportId(404)).await.expect_err("missing");
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn reject_twice_fails_without_side_effects() {
        let store = budi_store();
        let state = state_with(store.clone());

        reject_report(&state, ReportId(101)).await.expect("first reject");
        let err = reject_report(&state, ReportId(101)).await.expect_err("second reject");
        assert!(matches!(err, AppError::InvalidState(_)));
        assert_eq!(store.report(101).unwrap().status, ReportStatus::Rejected);
        assert!(store.events().is_empty());

        let err = reject_report(&state, ReportId(999)).await.expect_err("missing");
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn failed_event_insert_leaves_report_pending() {
        let store = budi_store();
        store.fail_event_insert.store(true, Ordering::SeqCst);
        let state = state_with(store.clone());

        let err = approve_report(&state, ReportId(101)).await.expect_err("insert fails");
        assert!(matches!(err, AppError::WriteFailure(_)));
        assert_eq!(store.report(101).unwrap().status, ReportStatus::Pending);
        assert!(store.events().is_empty());

        store.fail_event_insert.store(false, Ordering::SeqCst);
        approve_report(&state, ReportId(101)).await.expect("retry succeeds");
        assert_eq!(store.events().len(), 1);
    }

    #[tokio::test]
    async fn failed_status_update_keeps_event_and_reports_write_failure() {
        let store = budi_store();
        store.fail_status_update.store(true, Ordering::SeqCst);
        let state = state_with(store.clone());

        let err = approve_report(&state, ReportId(101)).await.expect_err("update fails");
        assert!(matches!(err, AppError::WriteFailure(_)));
        assert_eq!(store.events().len(), 1);
        assert_eq!(store.report(101).unwrap().status, ReportStatus::Pending);
        assert_eq!(state.metrics.write_failures(), 1);
    }

    #[tokio::test]
    async fn approving_seeded_report_moves_it_out_of_pending() {
        let store = Arc::new(MemoryStore::default());
        store.seed_report(
            101,
            "Budi Santoso",
            GeoPoint::new(-6.90, 107.60),
            ReportStatus::Pending,
        );
        store.seed_report(
            102,
            "Siti Aminah",
            GeoPoint::new(-7.79, 110.36),
            ReportStatus::Pending,
        );
        let state = state_with(store.clone());
        let before = event_queries::list_official_events(&state, EventListQuery::default())
            .await
            .expect("events")
            .len();

        approve_report(&state, ReportId(101)).await.expect("approve");

        let pending = report_queries::list_pending_reports(&state).await.expect("pending");
        assert!(pending.iter().all(|report| report.id != ReportId(101)));
        assert_eq!(pending.len(), 1);
        let after = event_queries::list_official_events(&state, EventListQuery::default())
            .await
            .expect("events")
            .len();
        assert_eq!(after, before + 1);
    }

    #[tokio::test]
    async fn submission_is_validated_and_stored_pending() {
        let store = Arc::new(MemoryStore::default());
        let state = state_with(store.clone());

        let report = submit_report(
            &state,
            ReportSubmission {
                name: "  Budi ".to_string(),
                description: "Tebing retak".to_string(),
                lat: -6.9,
                lng: 107.6,
                location: Some(" ".to_string()),
                deaths: None,
                injuries: Some(1),
                damaged_homes: None,
                photo: None,
            },
        )
        .await
        .expect("submit");
        assert_eq!(report.reporter, "Budi");
        assert_eq!(report.status, ReportStatus::Pending);
        assert_eq!(report.location, None);
        assert!(store.report(report.id.0).is_some());

        let err = submit_report(
            &state,
            ReportSubmission {
                name: "Budi".to_string(),
                description: "Tebing retak".to_string(),
                lat: 120.0,
                lng: 107.6,
                location: None,
                deaths: None,
                injuries: None,
                damaged_homes: None,
                photo: None,
            },
        )
        .await
        .expect_err("out of range");
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
