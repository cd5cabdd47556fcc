use chrono::NaiveDate;

use crate::entities::{NewOfficialEvent, Report, ADMIN_SOURCE};
use crate::value_objects::{province_from_location, Casualties, GeoPoint, UNKNOWN_PROVINCE};

pub fn community_source(reporter: &str) -> String {
    format!("Community Report ({})", reporter.trim())
}

/// Derives the official event written when `report` is approved.
///
/// The province is never derived here: community reports carry no
/// administrative region, so the sentinel is stored instead.
pub fn promote_report(report: &Report, today: NaiveDate) -> NewOfficialEvent {
    let reporter = report.reporter.trim();
    NewOfficialEvent {
        location: format!("Report from {} at {}", reporter, report.location_label()),
        date: today,
        point: report.point,
        casualties: report.casualties(),
        description: Some(report.description.clone()).filter(|text| !text.trim().is_empty()),
        source: community_source(reporter),
        province: UNKNOWN_PROVINCE.to_string(),
    }
}

pub fn admin_event(
    location: &str,
    date: NaiveDate,
    point: GeoPoint,
    casualties: Casualties,
    description: Option<String>,
) -> NewOfficialEvent {
    let location = location.trim().to_string();
    NewOfficialEvent {
        province: province_from_location(&location),
        location,
        date,
        point,
        casualties,
        description: description
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty()),
        source: ADMIN_SOURCE.to_string(),
    }
}
