// GeoJSON rendering of official events for map clients

use chrono::NaiveDate;
use serde::Serialize;

use backend_domain::{EventId, OfficialEvent};

#[derive(Debug, Serialize)]
pub struct EventFeatureCollection {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub features: Vec<EventFeature>,
}

#[derive(Debug, Serialize)]
pub struct EventFeature {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub properties: EventProperties,
    pub geometry: PointGeometry,
}

#[derive(Debug, Serialize)]
pub struct EventProperties {
    pub id: EventId,
    pub location: String,
    pub date: NaiveDate,
    pub deaths: u32,
    pub injuries: u32,
    pub damaged_homes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub source: String,
    pub province: String,
}

#[derive(Debug, Serialize)]
pub struct PointGeometry {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub coordinates: [f64; 2],
}

impl From<OfficialEvent> for EventFeature {
    fn from(event: OfficialEvent) -> Self {
        Self {
            kind: "Feature",
            geometry: PointGeometry {
                kind: "Point",
                coordinates: event.point.to_lng_lat(),
            },
            properties: EventProperties {
                id: event.id,
                location: event.location,
                date: event.date,
                deaths: event.casualties.deaths,
                injuries: event.casualties.injuries,
                damaged_homes: event.casualties.damaged_homes,
                description: event.description,
                source: event.source,
                province: event.province,
            },
        }
    }
}

impl FromIterator<OfficialEvent> for EventFeatureCollection {
    fn from_iter<I: IntoIterator<Item = OfficialEvent>>(iter: I) -> Self {
        Self {
            kind: "FeatureCollection",
            features: iter.into_iter().map(EventFeature::from).collect(),
        }
    }
}
