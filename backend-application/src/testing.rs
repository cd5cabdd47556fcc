// In-memory fakes for command and query tests

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;

use backend_domain::ports::{
    Clock, ContentRepository, HealthCheckService, OfficialEventRepository, ReportRepository,
};
use backend_domain::{
    ArticleId, EventId, GeoPoint, KnowledgeArticle, KnowledgeCategory, NewKnowledgeArticle,
    NewNewsArticle, NewOfficialEvent, NewReport, NewsArticle, OfficialEvent, Report, ReportId,
    ReportStatus, RuntimeConfig, StoreError, StoreResult,
};

use crate::{AppState, Metrics};

#[derive(Default)]
struct Inner {
    reports: BTreeMap<i64, Report>,
    events: Vec<OfficialEvent>,
    news: Vec<NewsArticle>,
    knowledge: Vec<KnowledgeArticle>,
    next_id: i64,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    pub fail_event_insert: AtomicBool,
    pub fail_status_update: AtomicBool,
    pub event_inserts: AtomicUsize,
}

impl MemoryStore {
    pub fn seed_report(&self, id: i64, reporter: &str, point: GeoPoint, status: ReportStatus) {
        let report = Report {
            id: ReportId(id),
            reporter: reporter.to_string(),
            description: "Retakan tanah setelah hujan lebat".to_string(),
            point,
            location: None,
            deaths: None,
            injuries: None,
            damaged_homes: None,
            photo: None,
            status,
        };
        self.inner.lock().unwrap().reports.insert(id, report);
    }

    pub fn report(&self, id: i64) -> Option<Report> {
        self.inner.lock().unwrap().reports.get(&id).cloned()
    }

    pub fn events(&self) -> Vec<OfficialEvent> {
        self.inner.lock().unwrap().events.clone()
    }

    fn next_id(inner: &mut Inner) -> i64 {
        inner.next_id += 1;
        inner.next_id
    }
}

#[async_trait]
impl ReportRepository for MemoryStore {
    async fn insert_report(&self, report: &NewReport) -> StoreResult<Report> {
        let mut inner = self.inner.lock().unwrap();
        let id = Self::next_id(&mut inner) + 1000;
        let stored = report.clone().into_report(ReportId(id));
        inner.reports.insert(id, stored.clone());
        Ok(stored)
    }

    async fn fetch_report(&self, id: ReportId) -> StoreResult<Option<Report>> {
        Ok(self.report(id.0))
    }

    async fn fetch_reports_by_status(&self, status: ReportStatus) -> StoreResult<Vec<Report>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .reports
            .values()
            .filter(|report| report.status == status)
            .cloned()
            .collect())
    }

    async fn update_report_status(&self, id: ReportId, status: ReportStatus) -> StoreResult<()> {
        if self.fail_status_update.load(Ordering::SeqCst) {
            return Err(StoreError::WriteFailure("status update refused".to_string()));
        }
        let mut inner = self.inner.lock().unwrap();
        let report = inner
            .reports
            .get_mut(&id.0)
            .ok_or_else(|| StoreError::not_found("report", id.0))?;
        report.status = status;
        Ok(())
    }
}

#[async_trait]
impl OfficialEventRepository for MemoryStore {
    async fn insert_event(&self, event: &NewOfficialEvent) -> StoreResult<OfficialEvent> {
        if self.fail_event_insert.load(Ordering::SeqCst) {
            return Err(StoreError::WriteFailure("event insert refused".to_string()));
        }
        self.event_inserts.fetch_add(1, Ordering::SeqCst);
        let mut inner = self.inner.lock().unwrap();
        let id = Self::next_id(&mut inner);
        let stored = event.clone().into_event(EventId(id));
        inner.events.push(stored.clone());
        Ok(stored)
    }

    async fn fetch_events(&self, limit: Option<usize>) -> StoreResult<Vec<OfficialEvent>> {
        let mut events = self.events();
        events.sort_by(|a, b| b.date.cmp(&a.date));
        if let Some(limit) = limit {
            events.truncate(limit);
        }
        Ok(events)
    }

    async fn delete_event(&self, id: EventId) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.events.len();
        inner.events.retain(|event| event.id != id);
        if inner.events.len() == before {
            return Err(StoreError::not_found("event", id.0));
        }
        Ok(())
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}

#[async_trait]
impl ContentRepository for MemoryStore {
    async fn fetch_news(&self) -> StoreResult<Vec<NewsArticle>> {
        Ok(self.inner.lock().unwrap().news.clone())
    }

    async fn insert_news(&self, article: &NewNewsArticle) -> StoreResult<NewsArticle> {
        let mut inner = self.inner.lock().unwrap();
        let id = Self::next_id(&mut inner);
        let stored = article.clone().into_article(ArticleId(id));
        inner.news.push(stored.clone());
        Ok(stored)
    }

    async fn delete_news(&self, id: ArticleId) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.news.len();
        inner.news.retain(|article| article.id != id);
        if inner.news.len() == before {
            return Err(StoreError::not_found("news", id.0));
        }
        Ok(())
    }

    async fn fetch_knowledge(
        &self,
        category: Option<KnowledgeCategory>,
    ) -> StoreResult<Vec<KnowledgeArticle>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner
            .knowledge
            .iter()
            .filter(|article| category.map_or(true, |c| article.category == c))
            .cloned()
            .collect())
    }

    async fn insert_knowledge(&self, article: &NewKnowledgeArticle) -> StoreResult<KnowledgeArticle> {
        let mut inner = self.inner.lock().unwrap();
        let id = Self::next_id(&mut inner);
        let stored = article.clone().into_article(ArticleId(id));
        inner.knowledge.push(stored.clone());
        Ok(stored)
    }

    async fn delete_knowledge(&self, id: ArticleId) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let before = inner.knowledge.len();
        inner.knowledge.retain(|article| article.id != id);
        if inner.knowledge.len() == before {
            return Err(StoreError::not_found("knowledge", id.0));
        }
        Ok(())
    }
}

pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

struct AlwaysHealthy;

#[async_trait]
impl HealthCheckService for AlwaysHealthy {
    async fn check_store(&self) -> anyhow::Result<bool> {
        Ok(true)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

pub fn state_with(store: Arc<MemoryStore>) -> AppState {
    AppState {
        config: RuntimeConfig::default(),
        report_repo: store.clone(),
        event_repo: store.clone(),
        content_repo: store,
        health_service: Arc::new(AlwaysHealthy),
        clock: Arc::new(FixedClock(today())),
        metrics: Arc::new(Metrics::default()),
    }
}
