use std::path::{Path, PathBuf};

use anyhow::anyhow;
use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{info, warn};

use backend_domain::{
    ArticleId, ContentRepository, EventId, KnowledgeArticle, KnowledgeCategory,
    NewKnowledgeArticle, NewNewsArticle, NewOfficialEvent, NewReport, NewsArticle,
    OfficialEvent, OfficialEventRepository, Report, ReportId, ReportRepository, ReportStatus,
    StoreError, StoreResult,
};

use super::local_rows::{
    LocalDocument, LocalEventFeature, LocalKnowledgeArticle, LocalNewsArticle, LocalUserReport,
};
use crate::utils::current_millis;

/// Single JSON document on disk. Every mutation rewrites the whole file
/// and is only committed in memory once the write succeeded.
pub struct LocalStore {
    path: PathBuf,
    document: Mutex<LocalDocument>,
}

impl LocalStore {
    pub async fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();
        let exists = fs::try_exists(&path)
            .await
            .map_err(|err| anyhow!("stat {}: {}", path.display(), err))?;
        let document = if exists {
            let content = fs::read_to_string(&path)
                .await
                .map_err(|err| anyhow!("read {}: {}", path.display(), err))?;
            serde_json::from_str::<LocalDocument>(&content)
                .map_err(|err| anyhow!("parse {}: {}", path.display(), err))?
        } else {
            let document = LocalDocument::seeded();
            persist(&path, &document).await?;
            info!(path = %path.display(), "seeded local store");
            document
        };
        Ok(Self {
            path,
            document: Mutex::new(document),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn mutate<T, F>(&self, apply: F) -> StoreResult<T>
    where
        T: Send,
        F: FnOnce(&mut LocalDocument) -> StoreResult<T> + Send,
    {
        let mut guard = self.document.lock().await;
        let mut draft = guard.clone();
        let output = apply(&mut draft)?;
        persist(&self.path, &draft).await?;
        *guard = draft;
        Ok(output)
    }
}

async fn persist(path: &Path, document: &LocalDocument) -> StoreResult<()> {
    let content = serde_json::to_string_pretty(document)
        .map_err(|err| StoreError::WriteFailure(format!("encode local store: {}", err)))?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .await
                .map_err(|err| local_write_failure(parent, err))?;
        }
    }
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content)
        .await
        .map_err(|err| local_write_failure(&tmp, err))?;
    if let Err(err) = fs::rename(&tmp, path).await {
        warn!(path = %path.display(), "local store rename failed: {}", err);
        let _ = fs::remove_file(&tmp).await;
        return Err(local_write_failure(path, err));
    }
    Ok(())
}

fn local_write_failure(path: &Path, err: std::io::Error) -> StoreError {
    StoreError::WriteFailure(format!("write {}: {}", path.display(), err))
}

fn next_id(ids: impl Iterator<Item = i64>) -> i64 {
    ids.max().map(|max| max + 1).unwrap_or(1)
}

fn next_report_id(document: &LocalDocument) -> i64 {
    let sequential = next_id(document.user_reports.iter().map(|report| report.id));
    current_millis().max(sequential)
}

fn events_newest_first(document: &LocalDocument) -> StoreResult<Vec<OfficialEvent>> {
    let mut events = document
        .official_landslides
        .iter()
        .map(OfficialEvent::try_from)
        .collect::<anyhow::Result<Vec<_>>>()?;
    events.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    Ok(events)
}

#[async_trait]
impl ReportRepository for LocalStore {
    async fn insert_report(&self, report: &NewReport) -> StoreResult<Report> {
        let report = report.clone();
        self.mutate(move |document| {
            let stored = report.into_report(ReportId(next_report_id(document)));
            document.user_reports.push(LocalUserReport::from(&stored));
            Ok(stored)
        })
        .await
    }

    async fn fetch_report(&self, id: ReportId) -> StoreResult<Option<Report>> {
        let document = self.document.lock().await;
        Ok(document
            .user_reports
            .iter()
            .find(|report| report.id == id.0)
            .map(Report::from))
    }

    async fn fetch_reports_by_status(&self, status: ReportStatus) -> StoreResult<Vec<Report>> {
        let document = self.document.lock().await;
        Ok(document
            .user_reports
            .iter()
            .filter(|report| report.status == status)
            .map(Report::from)
            .collect())
    }

    async fn update_report_status(&self, id: ReportId, status: ReportStatus) -> StoreResult<()> {
        self.mutate(move |document| {
            let report = document
                .user_reports
                .iter_mut()
                .find(|report| report.id == id.0)
                .ok_or_else(|| StoreError::not_found("report", id.0))?;
            report.status = status;
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl OfficialEventRepository for LocalStore {
    async fn insert_event(&self, event: &NewOfficialEvent) -> StoreResult<OfficialEvent> {
        let event = event.clone();
        self.mutate(move |document| {
            let id = next_id(document.official_landslides.iter().map(LocalEventFeature::id));
            let stored = event.into_event(EventId(id));
            document
                .official_landslides
                .push(LocalEventFeature::from(&stored));
            Ok(stored)
        })
        .await
    }

    async fn fetch_events(&self, limit: Option<usize>) -> StoreResult<Vec<OfficialEvent>> {
        let document = self.document.lock().await;
        let mut events = events_newest_first(&document)?;
        if let Some(limit) = limit {
            events.truncate(limit);
        }
        Ok(events)
    }

    async fn delete_event(&self, id: EventId) -> StoreResult<()> {
        self.mutate(move |document| {
            let before = document.official_landslides.len();
            document
                .official_landslides
                .retain(|feature| feature.id() != id.0);
            if document.official_landslides.len() == before {
                return Err(StoreError::not_found("event", id.0));
            }
            Ok(())
        })
        .await
    }

    async fn ping(&self) -> StoreResult<()> {
        let _guard = self.document.lock().await;
        Ok(())
    }
}

#[async_trait]
impl ContentRepository for LocalStore {
    async fn fetch_news(&self) -> StoreResult<Vec<NewsArticle>> {
        let document = self.document.lock().await;
        let mut news = document
            .news
            .iter()
            .map(NewsArticle::try_from)
            .collect::<anyhow::Result<Vec<_>>>()?;
        news.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        Ok(news)
    }

    async fn insert_news(&self, article: &NewNewsArticle) -> StoreResult<NewsArticle> {
        let article = article.clone();
        self.mutate(move |document| {
            let id = next_id(document.news.iter().map(|row| row.id));
            let stored = article.into_article(ArticleId(id));
            document.news.push(LocalNewsArticle::from(&stored));
            Ok(stored)
        })
        .await
    }

    async fn delete_news(&self, id: ArticleId) -> StoreResult<()> {
        self.mutate(move |document| {
            let before = document.news.len();
            document.news.retain(|row| row.id != id.0);
            if document.news.len() == before {
                return Err(StoreError::not_found("news article", id.0));
            }
            Ok(())
        })
        .await
    }

    async fn fetch_knowledge(
        &self,
        category: Option<KnowledgeCategory>,
    ) -> StoreResult<Vec<KnowledgeArticle>> {
        let document = self.document.lock().await;
        Ok(document
            .knowledge
            .iter()
            .filter(|row| category.map_or(true, |wanted| row.category == wanted))
            .map(KnowledgeArticle::from)
            .collect())
    }

    async fn insert_knowledge(&self, article: &NewKnowledgeArticle) -> StoreResult<KnowledgeArticle> {
        let article = article.clone();
        self.mutate(move |document| {
            let id = next_id(document.knowledge.iter().map(|row| row.id));
            let stored = article.into_article(ArticleId(id));
            document.knowledge.push(LocalKnowledgeArticle::from(&stored));
            Ok(stored)
        })
        .await
    }

    async fn delete_knowledge(&self, id: ArticleId) -> StoreResult<()> {
        self.mutate(move |document| {
            let before = document.knowledge.len();
            document.knowledge.retain(|row| row.id != id.0);
            if document.knowledge.len() == before {
                return Err(StoreError::not_found("knowledge article", id.0));
            }
            Ok(())
        })
        .await
    }
}
