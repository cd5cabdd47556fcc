// Official event entity
// An authoritative, published landslide occurrence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::value_objects::{Casualties, EventId, GeoPoint};

pub const ADMIN_SOURCE: &str = "Admin Input";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfficialEvent {
    pub id: EventId,
    pub location: String,
    pub date: NaiveDate,
    pub point: GeoPoint,
    pub casualties: Casualties,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub source: String,
    pub province: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewOfficialEvent {
    pub location: String,
    pub date: NaiveDate,
    pub point: GeoPoint,
    pub casualties: Casualties,
    pub description: Option<String>,
    pub source: String,
    pub province: String,
}

impl NewOfficialEvent {
    pub fn into_event(self, id: EventId) -> OfficialEvent {
        OfficialEvent {
            id,
            location: self.location,
            date: self.date,
            point: self.point,
            casualties: self.casualties,
            description: self.description,
            source: self.source,
            province: self.province,
        }
    }
}
