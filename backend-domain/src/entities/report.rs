// Report entity
// A citizen-submitted, unverified landslide observation

use serde::{Deserialize, Serialize};

use crate::value_objects::{Casualties, GeoPoint, ReportId, ReportStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub id: ReportId,
    pub reporter: String,
    pub description: String,
    pub point: GeoPoint,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deaths: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub injuries: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damaged_homes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub status: ReportStatus,
}

impl Report {
    pub fn is_pending(&self) -> bool {
        self.status == ReportStatus::Pending
    }

    /// Free-text location if the reporter gave one, otherwise the point.
    pub fn location_label(&self) -> String {
        self.location
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(ToString::to_string)
            .unwrap_or_else(|| self.point.label())
    }

    pub fn casualties(&self) -> Casualties {
        Casualties::from_optional(self.deaths, self.injuries, self.damaged_homes)
    }
}

/// Submission payload; the store assigns id and the initial status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReport {
    pub reporter: String,
    pub description: String,
    pub point: GeoPoint,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub deaths: Option<u32>,
    #[serde(default)]
    pub injuries: Option<u32>,
    #[serde(default)]
    pub damaged_homes: Option<u32>,
    #[serde(default)]
    pub photo: Option<String>,
}

impl NewReport {
    pub fn into_report(self, id: ReportId) -> Report {
        Report {
            id,
            reporter: self.reporter,
            description: self.description,
            point: self.point,
            location: self.location,
            deaths: self.deaths,
            injuries: self.injuries,
            damaged_homes: self.damaged_homes,
            photo: self.photo,
            status: ReportStatus::Pending,
        }
    }
}
