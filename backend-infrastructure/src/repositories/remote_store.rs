use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use backend_domain::{
    ArticleId, ContentRepository, EventId, KnowledgeArticle, KnowledgeCategory,
    NewKnowledgeArticle, NewNewsArticle, NewOfficialEvent, NewReport, NewsArticle,
    OfficialEvent, OfficialEventRepository, Report, ReportId, ReportRepository, ReportStatus,
    StoreError, StoreResult,
};

use super::remote_rows::{
    RemoteEventInsert, RemoteEventRow, RemoteKnowledgeInsert, RemoteKnowledgeRow,
    RemoteNewsInsert, RemoteNewsRow, RemoteReportInsert, RemoteReportRow, RemoteStatusPatch,
    EVENTS_TABLE, KNOWLEDGE_TABLE, NEWS_TABLE, REPORTS_TABLE,
};
use crate::config::RemoteStoreConfig;

/// Client for the hosted relational store, spoken to over its REST gateway.
pub struct RemoteStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RemoteStore {
    pub fn new(config: &RemoteStoreConfig) -> Result<Self, StoreError> {
        let base_url = config
            .url
            .as_deref()
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .ok_or_else(|| StoreError::Configuration("remote_url is not set".to_string()))?;
        let api_key = config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .map(ToString::to_string)
            .ok_or_else(|| StoreError::Configuration("remote_api_key is not set".to_string()))?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds.max(1)))
            .build()
            .map_err(|err| StoreError::Configuration(format!("http client: {}", err)))?;
        Ok(Self {
            client,
            base_url,
            api_key,
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.api_key)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
    }

    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, String)],
    ) -> StoreResult<Vec<T>> {
        let request = self.authorized(self.client.get(self.table_url(table)).query(query));
        let response = request
            .send()
            .await
            .map_err(|err| anyhow!("select {}: {}", table, err))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(StoreError::Read(anyhow!(
                "select {} responded {}: {}",
                table,
                status,
                body
            )));
        }
        let rows = response
            .json::<Vec<T>>()
            .await
            .map_err(|err| anyhow!("decode {} rows: {}", table, err))?;
        debug!(table = table, rows = rows.len(), "remote select");
        Ok(rows)
    }

    async fn write<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        action: &str,
        table: &str,
    ) -> StoreResult<Vec<T>> {
        let response = self
            .authorized(request)
            .header("Prefer", "return=representation")
            .send()
            .await
            .map_err(|err| write_failure(action, table, err))?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(table = table, status = %status, "remote {} rejected", action);
            return Err(StoreError::WriteFailure(format!(
                "{} {} responded {}: {}",
                action, table, status, body
            )));
        }
        response
            .json::<Vec<T>>()
            .await
            .map_err(|err| write_failure(action, table, err))
    }

    async fn insert_row<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        table: &str,
        body: &B,
    ) -> StoreResult<T> {
        let request = self.client.post(self.table_url(table)).json(body);
        let rows: Vec<T> = self.write(request, "insert into", table).await?;
        rows.into_iter().next().ok_or_else(|| {
            StoreError::WriteFailure(format!("insert into {} returned no row", table))
        })
    }

    async fn update_row<B: Serialize + ?Sized>(
        &self,
        table: &str,
        entity: &'static str,
        id: i64,
        body: &B,
    ) -> StoreResult<()> {
        let request = self
            .client
            .patch(self.table_url(table))
            .query(&[("id", format!("eq.{}", id))])
            .json(body);
        let rows: Vec<Value> = self.write(request, "update", table).await?;
        if rows.is_empty() {
            return Err(StoreError::not_found(entity, id));
        }
        Ok(())
    }

    async fn delete_row(&self, table: &str, entity: &'static str, id: i64) -> StoreResult<()> {
        let request = self
            .client
            .delete(self.table_url(table))
            .query(&[("id", format!("eq.{}", id))]);
        let rows: Vec<Value> = self.write(request, "delete from", table).await?;
        if rows.is_empty() {
            return Err(StoreError::not_found(entity, id));
        }
        Ok(())
    }
}

fn write_failure(action: &str, table: &str, err: reqwest::Error) -> StoreError {
    StoreError::WriteFailure(format!("{} {}: {}", action, table, err))
}

fn event_query(limit: Option<usize>) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("select", "*".to_string()),
        ("order", "tanggal.desc,id.desc".to_string()),
    ];
    if let Some(limit) = limit {
        query.push(("limit", limit.to_string()));
    }
    query
}

fn knowledge_query(category: Option<KnowledgeCategory>) -> Vec<(&'static str, String)> {
    let mut query = vec![
        ("select", "*".to_string()),
        ("order", "id.asc".to_string()),
    ];
    if let Some(category) = category {
        query.push(("kategori", format!("eq.{}", category.as_str())));
    }
    query
}

#[async_trait]
impl ReportRepository for RemoteStore {
    async fn insert_report(&self, report: &NewReport) -> StoreResult<Report> {
        let row: RemoteReportRow = self
            .insert_row(REPORTS_TABLE, &RemoteReportInsert::from(report))
            .await?;
        Report::try_from(row).map_err(|err| StoreError::WriteFailure(err.to_string()))
    }

    async fn fetch_report(&self, id: ReportId) -> StoreResult<Option<Report>> {
        let query = [
            ("select", "*".to_string()),
            ("id", format!("eq.{}", id.0)),
            ("limit", "1".to_string()),
        ];
        let rows: Vec<RemoteReportRow> = self.select(REPORTS_TABLE, &query).await?;
        rows.into_iter()
            .next()
            .map(Report::try_from)
            .transpose()
            .map_err(StoreError::Read)
    }

    async fn fetch_reports_by_status(&self, status: ReportStatus) -> StoreResult<Vec<Report>> {
        let query = [
            ("select", "*".to_string()),
            ("status", format!("eq.{}", status.as_str())),
            ("order", "id.asc".to_string()),
        ];
        let rows: Vec<RemoteReportRow> = self.select(REPORTS_TABLE, &query).await?;
        rows.into_iter()
            .map(Report::try_from)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(StoreError::Read)
    }

    async fn update_report_status(&self, id: ReportId, status: ReportStatus) -> StoreResult<()> {
        let patch = RemoteStatusPatch {
            status: status.as_str(),
        };
        self.update_row(REPORTS_TABLE, "report", id.0, &patch).await
    }
}

#[async_trait]
impl OfficialEventRepository for RemoteStore {
    async fn insert_event(&self, event: &NewOfficialEvent) -> StoreResult<OfficialEvent> {
        let row: RemoteEventRow = self
            .insert_row(EVENTS_TABLE, &RemoteEventInsert::from(event))
            .await?;
        Ok(OfficialEvent::from(row))
    }

    async fn fetch_events(&self, limit: Option<usize>) -> StoreResult<Vec<OfficialEvent>> {
        let rows: Vec<RemoteEventRow> = self.select(EVENTS_TABLE, &event_query(limit)).await?;
        Ok(rows.into_iter().map(OfficialEvent::from).collect())
    }

    async fn delete_event(&self, id: EventId) -> StoreResult<()> {
        self.delete_row(EVENTS_TABLE, "event", id.0).await
    }

    async fn ping(&self) -> StoreResult<()> {
        let query = [("select", "id".to_string()), ("limit", "1".to_string())];
        let _: Vec<Value> = self.select(EVENTS_TABLE, &query).await?;
        Ok(())
    }
}

#[async_trait]
impl ContentRepository for RemoteStore {
    async fn fetch_news(&self) -> StoreResult<Vec<NewsArticle>> {
        let query = [
            ("select", "*".to_string()),
            ("order", "tanggal.desc,id.desc".to_string()),
        ];
        let rows: Vec<RemoteNewsRow> = self.select(NEWS_TABLE, &query).await?;
        Ok(rows.into_iter().map(NewsArticle::from).collect())
    }

    async fn insert_news(&self, article: &NewNewsArticle) -> StoreResult<NewsArticle> {
        let row: RemoteNewsRow = self
            .insert_row(NEWS_TABLE, &RemoteNewsInsert::from(article))
            .await?;
        Ok(NewsArticle::from(row))
    }

    async fn delete_news(&self, id: ArticleId) -> StoreResult<()> {
        self.delete_row(NEWS_TABLE, "news article", id.0).await
    }

    async fn fetch_knowledge(
        &self,
        category: Option<KnowledgeCategory>,
    ) -> StoreResult<Vec<KnowledgeArticle>> {
        let rows: Vec<RemoteKnowledgeRow> = self
            .select(KNOWLEDGE_TABLE, &knowledge_query(category))
            .await?;
        rows.into_iter()
            .map(KnowledgeArticle::try_from)
            .collect::<anyhow::Result<Vec<_>>>()
            .map_err(StoreError::Read)
    }

    async fn insert_knowledge(&self, article: &NewKnowledgeArticle) -> StoreResult<KnowledgeArticle> {
        let row: RemoteKnowledgeRow = self
            .insert_row(KNOWLEDGE_TABLE, &RemoteKnowledgeInsert::from(article))
            .await?;
        KnowledgeArticle::try_from(row).map_err(|err| StoreError::WriteFailure(err.to_string()))
    }

    async fn delete_knowledge(&self, id: ArticleId) -> StoreResult<()> {
        self.delete_row(KNOWLEDGE_TABLE, "knowledge article", id.0).await
    }
}
