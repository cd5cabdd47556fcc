use async_trait::async_trait;

use crate::entities::{
    KnowledgeArticle,
    KnowledgeCategory,
    NewKnowledgeArticle,
    NewNewsArticle,
    NewOfficialEvent,
    NewReport,
    NewsArticle,
    OfficialEvent,
    Report,
};
use crate::error::StoreResult;
use crate::value_objects::{ArticleId, EventId, ReportId, ReportStatus};

#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Stores a submission with status `pending` and returns it with its id.
    async fn insert_report(&self, report: &NewReport) -> StoreResult<Report>;
    async fn fetch_report(&self, id: ReportId) -> StoreResult<Option<Report>>;
    async fn fetch_reports_by_status(&self, status: ReportStatus) -> StoreResult<Vec<Report>>;
    /// Fails with `NotFound` when no row has this id.
    async fn update_report_status(&self, id: ReportId, status: ReportStatus) -> StoreResult<()>;
}

#[async_trait]
pub trait OfficialEventRepository: Send + Sync {
    async fn insert_event(&self, event: &NewOfficialEvent) -> StoreResult<OfficialEvent>;
    /// Newest first, capped at `limit` when given.
    async fn fetch_events(&self, limit: Option<usize>) -> StoreResult<Vec<OfficialEvent>>;
    async fn delete_event(&self, id: EventId) -> StoreResult<()>;
    async fn ping(&self) -> StoreResult<()>;
}

#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn fetch_news(&self) -> StoreResult<Vec<NewsArticle>>;
    async fn insert_news(&self, article: &NewNewsArticle) -> StoreResult<NewsArticle>;
    async fn delete_news(&self, id: ArticleId) -> StoreResult<()>;

    async fn fetch_knowledge(
        &self,
        category: Option<KnowledgeCategory>,
    ) -> StoreResult<Vec<KnowledgeArticle>>;
    async fn insert_knowledge(&self, article: &NewKnowledgeArticle) -> StoreResult<KnowledgeArticle>;
    async fn delete_knowledge(&self, id: ArticleId) -> StoreResult<()>;
}
