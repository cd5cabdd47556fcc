// Request and query payloads accepted by commands and queries

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ReportSubmission {
    pub name: String,
    pub description: String,
    pub lat: f64,
    pub lng: f64,
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

/// Admin form for a new official event. `coordinates` is `"lat, lng"`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewEventRequest {
    pub location: String,
    pub date: String,
    pub coordinates: String,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub injuries: u32,
    #[serde(default)]
    pub damaged_homes: u32,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventListQuery {
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsRequest {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct KnowledgeRequest {
    pub category: String,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KnowledgeQuery {
    pub category: Option<String>,
}
