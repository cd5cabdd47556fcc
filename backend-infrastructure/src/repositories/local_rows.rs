// On-disk document of the local store: GeoJSON features for events,
// camelCase records for citizen reports.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use backend_domain::{
    province_from_location, ArticleId, Casualties, EventId, GeoPoint, KnowledgeArticle,
    KnowledgeCategory, NewsArticle, OfficialEvent, Report, ReportId, ReportStatus,
};

use crate::utils::parse_date;

const FEATURE_TYPE: &str = "Feature";
const POINT_TYPE: &str = "Point";
const SEED_SOURCE: &str = "BNPB";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalDocument {
    #[serde(default)]
    pub official_landslides: Vec<LocalEventFeature>,
    #[serde(default)]
    pub user_reports: Vec<LocalUserReport>,
    #[serde(default)]
    pub news: Vec<LocalNewsArticle>,
    #[serde(default)]
    pub knowledge: Vec<LocalKnowledgeArticle>,
}

impl LocalDocument {
    /// Document written on first use of an empty store.
    pub fn seeded() -> Self {
        let events = [
            (1, "Kab. Bogor, Jawa Barat", "2023-03-15", (5, 3, 12), [106.8, -6.59]),
            (2, "Kab. Banjarnegara, Jawa Tengah", "2023-04-20", (2, 8, 25), [109.69, -7.4]),
            (3, "Kab. Tana Toraja, Sulawesi Selatan", "2023-05-01", (0, 1, 5), [119.86, -3.05]),
            (4, "Kab. Agam, Sumatera Barat", "2024-01-10", (1, 4, 9), [100.16, -0.32]),
            (5, "Kab. Cianjur, Jawa Barat", "2024-02-22", (3, 10, 30), [107.14, -6.82]),
        ];
        let official_landslides = events
            .into_iter()
            .map(|(id, lokasi, tanggal, (dead, hurt, homes), coordinates)| LocalEventFeature {
                kind: FEATURE_TYPE.to_string(),
                properties: LocalEventProperties {
                    id,
                    lokasi: lokasi.to_string(),
                    tanggal: tanggal.to_string(),
                    korban_meninggal: dead,
                    korban_luka: hurt,
                    kerusakan_rumah: homes,
                    sumber: SEED_SOURCE.to_string(),
                    provinsi: None,
                    deskripsi: None,
                },
                geometry: LocalPointGeometry::from_lng_lat(coordinates),
            })
            .collect();
        let user_reports = vec![
            LocalUserReport::seed(
                101,
                [-6.90, 107.60],
                "Budi Santoso",
                "Terlihat retakan tanah di tebing dekat pemukiman setelah hujan lebat semalam.",
            ),
            LocalUserReport::seed(
                102,
                [-7.79, 110.36],
                "Siti Aminah",
                "Ada suara gemuruh dari bukit di belakang desa, air sungai juga menjadi keruh.",
            ),
        ];
        Self {
            official_landslides,
            user_reports,
            news: Vec::new(),
            knowledge: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalEventFeature {
    #[serde(rename = "type")]
    pub kind: String,
    pub properties: LocalEventProperties,
    pub geometry: LocalPointGeometry,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalEventProperties {
    pub id: i64,
    pub lokasi: String,
    pub tanggal: String,
    #[serde(default)]
    pub korban_meninggal: u32,
    #[serde(default)]
    pub korban_luka: u32,
    #[serde(default)]
    pub kerusakan_rumah: u32,
    #[serde(default)]
    pub sumber: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provinsi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deskripsi: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalPointGeometry {
    #[serde(rename = "type")]
    pub kind: String,
    /// GeoJSON axis order: `[lng, lat]`.
    pub coordinates: [f64; 2],
}

impl LocalPointGeometry {
    fn from_lng_lat(coordinates: [f64; 2]) -> Self {
        Self {
            kind: POINT_TYPE.to_string(),
            coordinates,
        }
    }
}

impl LocalEventFeature {
    pub fn id(&self) -> i64 {
        self.properties.id
    }
}

impl From<&OfficialEvent> for LocalEventFeature {
    fn from(event: &OfficialEvent) -> Self {
        Self {
            kind: FEATURE_TYPE.to_string(),
            properties: LocalEventProperties {
                id: event.id.0,
                lokasi: event.location.clone(),
                tanggal: event.date.format("%Y-%m-%d").to_string(),
                korban_meninggal: event.casualties.deaths,
                korban_luka: event.casualties.injuries,
                kerusakan_rumah: event.casualties.damaged_homes,
                sumber: event.source.clone(),
                provinsi: Some(event.province.clone()),
                deskripsi: event.description.clone(),
            },
            geometry: LocalPointGeometry::from_lng_lat(event.point.to_lng_lat()),
        }
    }
}

impl TryFrom<&LocalEventFeature> for OfficialEvent {
    type Error = anyhow::Error;

    fn try_from(feature: &LocalEventFeature) -> Result<Self> {
        let props = &feature.properties;
        let province = props
            .provinsi
            .clone()
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| province_from_location(&props.lokasi));
        Ok(OfficialEvent {
            id: EventId(props.id),
            location: props.lokasi.clone(),
            date: parse_date(&props.tanggal)?,
            point: GeoPoint::from_lng_lat(feature.geometry.coordinates),
            casualties: Casualties::new(
                props.korban_meninggal,
                props.korban_luka,
                props.kerusakan_rumah,
            ),
            description: props.deskripsi.clone(),
            source: props.sumber.clone(),
            province,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalUserReport {
    pub id: i64,
    /// `[lat, lng]`, the reverse of the event geometry.
    pub latlng: [f64; 2],
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub korban_meninggal: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub korban_luka: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rumah_rusak: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub status: ReportStatus,
}

impl LocalUserReport {
    fn seed(id: i64, latlng: [f64; 2], name: &str, description: &str) -> Self {
        Self {
            id,
            latlng,
            name: name.to_string(),
            description: description.to_string(),
            location: None,
            korban_meninggal: None,
            korban_luka: None,
            rumah_rusak: None,
            photo: None,
            status: ReportStatus::Pending,
        }
    }
}

impl From<&Report> for LocalUserReport {
    fn from(report: &Report) -> Self {
        Self {
            id: report.id.0,
            latlng: report.point.to_lat_lng(),
            name: report.reporter.clone(),
            description: report.description.clone(),
            location: report.location.clone(),
            korban_meninggal: report.deaths,
            korban_luka: report.injuries,
            rumah_rusak: report.damaged_homes,
            photo: report.photo.clone(),
            status: report.status,
        }
    }
}

impl From<&LocalUserReport> for Report {
    fn from(row: &LocalUserReport) -> Self {
        Report {
            id: ReportId(row.id),
            reporter: row.name.clone(),
            description: row.description.clone(),
            point: GeoPoint::from_lat_lng(row.latlng),
            location: row.location.clone(),
            deaths: row.korban_meninggal,
            injuries: row.korban_luka,
            damaged_homes: row.rumah_rusak,
            photo: row.photo.clone(),
            status: row.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalNewsArticle {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub date: String,
}

impl From<&NewsArticle> for LocalNewsArticle {
    fn from(article: &NewsArticle) -> Self {
        Self {
            id: article.id.0,
            title: article.title.clone(),
            content: article.body.clone(),
            image: article.image.clone(),
            date: article.date.format("%Y-%m-%d").to_string(),
        }
    }
}

impl TryFrom<&LocalNewsArticle> for NewsArticle {
    type Error = anyhow::Error;

    fn try_from(row: &LocalNewsArticle) -> Result<Self> {
        Ok(NewsArticle {
            id: ArticleId(row.id),
            title: row.title.clone(),
            body: row.content.clone(),
            image: row.image.clone(),
            date: parse_date(&row.date)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalKnowledgeArticle {
    pub id: i64,
    pub category: KnowledgeCategory,
    pub title: String,
    #[serde(default)]
    pub content: String,
}

impl From<&KnowledgeArticle> for LocalKnowledgeArticle {
    fn from(article: &KnowledgeArticle) -> Self {
        Self {
            id: article.id.0,
            category: article.category,
            title: article.title.clone(),
            content: article.body.clone(),
        }
    }
}

impl From<&LocalKnowledgeArticle> for KnowledgeArticle {
    fn from(row: &LocalKnowledgeArticle) -> Self {
        KnowledgeArticle {
            id: ArticleId(row.id),
            category: row.category,
            title: row.title.clone(),
            body: row.content.clone(),
        }
    }
}
