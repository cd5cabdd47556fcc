// Row shapes of the remote relational store and their mapping to domain types

use anyhow::anyhow;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use backend_domain::{
    province_from_location, ArticleId, Casualties, EventId, GeoPoint, KnowledgeArticle,
    KnowledgeCategory, NewKnowledgeArticle, NewNewsArticle, NewOfficialEvent, NewReport,
    NewsArticle, OfficialEvent, Report, ReportId, ReportStatus,
};

pub const REPORTS_TABLE: &str = "laporan";
pub const EVENTS_TABLE: &str = "kejadian";
pub const NEWS_TABLE: &str = "berita";
pub const KNOWLEDGE_TABLE: &str = "materi";

const UNKNOWN_SOURCE: &str = "Unknown";

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteReportRow {
    pub id: i64,
    pub nama: String,
    #[serde(default)]
    pub deskripsi: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub lokasi: Option<String>,
    #[serde(default)]
    pub korban_meninggal: Option<u32>,
    #[serde(default)]
    pub korban_luka: Option<u32>,
    #[serde(default)]
    pub rumah_rusak: Option<u32>,
    #[serde(default)]
    pub foto: Option<String>,
    pub status: String,
}

impl TryFrom<RemoteReportRow> for Report {
    type Error = anyhow::Error;

    fn try_from(row: RemoteReportRow) -> Result<Self, Self::Error> {
        let status = row
            .status
            .parse::<ReportStatus>()
            .map_err(|err| anyhow!("report {}: {}", row.id, err))?;
        Ok(Report {
            id: ReportId(row.id),
            reporter: row.nama,
            description: row.deskripsi,
            point: GeoPoint::new(row.latitude, row.longitude),
            location: row.lokasi,
            deaths: row.korban_meninggal,
            injuries: row.korban_luka,
            damaged_homes: row.rumah_rusak,
            photo: row.foto,
            status,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct RemoteReportInsert<'a> {
    pub nama: &'a str,
    pub deskripsi: &'a str,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lokasi: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub korban_meninggal: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub korban_luka: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rumah_rusak: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foto: Option<&'a str>,
    pub status: &'static str,
}

impl<'a> From<&'a NewReport> for RemoteReportInsert<'a> {
    fn from(report: &'a NewReport) -> Self {
        Self {
            nama: &report.reporter,
            deskripsi: &report.description,
            latitude: report.point.lat,
            longitude: report.point.lng,
            lokasi: report.location.as_deref(),
            korban_meninggal: report.deaths,
            korban_luka: report.injuries,
            rumah_rusak: report.damaged_homes,
            foto: report.photo.as_deref(),
            status: ReportStatus::Pending.as_str(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoteStatusPatch {
    pub status: &'static str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteEventRow {
    pub id: i64,
    pub lokasi: String,
    pub tanggal: NaiveDate,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub korban_meninggal: Option<u32>,
    #[serde(default)]
    pub korban_luka: Option<u32>,
    #[serde(default)]
    pub kerusakan_rumah: Option<u32>,
    #[serde(default)]
    pub deskripsi: Option<String>,
    #[serde(default)]
    pub sumber: Option<String>,
    #[serde(default)]
    pub provinsi: Option<String>,
}

impl From<RemoteEventRow> for OfficialEvent {
    fn from(row: RemoteEventRow) -> Self {
        let province = row
            .provinsi
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| province_from_location(&row.lokasi));
        OfficialEvent {
            id: EventId(row.id),
            date: row.tanggal,
            point: GeoPoint::new(row.latitude, row.longitude),
            casualties: Casualties::from_optional(
                row.korban_meninggal,
                row.korban_luka,
                row.kerusakan_rumah,
            ),
            description: row.deskripsi,
            source: row.sumber.unwrap_or_else(|| UNKNOWN_SOURCE.to_string()),
            province,
            location: row.lokasi,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoteEventInsert<'a> {
    pub lokasi: &'a str,
    pub tanggal: NaiveDate,
    pub latitude: f64,
    pub longitude: f64,
    pub korban_meninggal: u32,
    pub korban_luka: u32,
    pub kerusakan_rumah: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deskripsi: Option<&'a str>,
    pub sumber: &'a str,
    pub provinsi: &'a str,
}

impl<'a> From<&'a NewOfficialEvent> for RemoteEventInsert<'a> {
    fn from(event: &'a NewOfficialEvent) -> Self {
        Self {
            lokasi: &event.location,
            tanggal: event.date,
            latitude: event.point.lat,
            longitude: event.point.lng,
            korban_meninggal: event.casualties.deaths,
            korban_luka: event.casualties.injuries,
            kerusakan_rumah: event.casualties.damaged_homes,
            deskripsi: event.description.as_deref(),
            sumber: &event.source,
            provinsi: &event.province,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteNewsRow {
    pub id: i64,
    pub judul: String,
    #[serde(default)]
    pub isi: String,
    #[serde(default)]
    pub gambar: Option<String>,
    pub tanggal: NaiveDate,
}

impl From<RemoteNewsRow> for NewsArticle {
    fn from(row: RemoteNewsRow) -> Self {
        NewsArticle {
            id: ArticleId(row.id),
            title: row.judul,
            body: row.isi,
            image: row.gambar.filter(|value| !value.trim().is_empty()),
            date: row.tanggal,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RemoteNewsInsert<'a> {
    pub judul: &'a str,
    pub isi: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gambar: Option<&'a str>,
    pub tanggal: NaiveDate,
}

impl<'a> From<&'a NewNewsArticle> for RemoteNewsInsert<'a> {
    fn from(article: &'a NewNewsArticle) -> Self {
        Self {
            judul: &article.title,
            isi: &article.body,
            gambar: article.image.as_deref(),
            tanggal: article.date,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteKnowledgeRow {
    pub id: i64,
    pub kategori: String,
    pub judul: String,
    #[serde(default)]
    pub isi: String,
}

impl TryFrom<RemoteKnowledgeRow> for KnowledgeArticle {
    type Error = anyhow::Error;

    fn try_from(row: RemoteKnowledgeRow) -> Result<Self, Self::Error> {
        Ok(KnowledgeArticle {
            id: ArticleId(row.id),
            category: row.kategori.parse::<KnowledgeCategory>()?,
            title: row.judul,
            body: row.isi,
        })
    }
}

#[derive(Debug, Serialize)]
pub struct RemoteKnowledgeInsert<'a> {
    pub kategori: &'static str,
    pub judul: &'a str,
    pub isi: &'a str,
}

impl<'a> From<&'a NewKnowledgeArticle> for RemoteKnowledgeInsert<'a> {
    fn from(article: &'a NewKnowledgeArticle) -> Self {
        Self {
            kategori: article.category.as_str(),
            judul: &article.title,
            isi: &article.body,
        }
    }
}
