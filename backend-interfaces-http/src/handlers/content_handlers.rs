use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use backend_application::commands::content_commands;
use backend_application::dtos::{KnowledgeQuery, KnowledgeRequest, NewsRequest};
use backend_application::queries::content_queries;
use backend_application::AppState;
use backend_domain::{ArticleId, KnowledgeArticle, NewsArticle};

use crate::error::HttpError;
use crate::extract::{AdminGuard, ApiJson, ApiPath, ApiQuery};

pub async fn list_news(State(state): State<AppState>) -> Result<Json<Vec<NewsArticle>>, HttpError> {
    let articles = content_queries::list_news(&state).await?;
    Ok(Json(articles))
}

pub async fn add_news(
    State(state): State<AppState>,
    _admin: AdminGuard,
    ApiJson(payload): ApiJson<NewsRequest>,
) -> Result<(StatusCode, Json<NewsArticle>), HttpError> {
    let article = content_commands::add_news(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

pub async fn delete_news(
    State(state): State<AppState>,
    _admin: AdminGuard,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, HttpError> {
    content_commands::delete_news(&state, ArticleId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_knowledge(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<KnowledgeQuery>,
) -> Result<Json<Vec<KnowledgeArticle>>, HttpError> {
    let articles = content_queries::list_knowledge(&state, query).await?;
    Ok(Json(articles))
}

pub async fn add_knowledge(
    State(state): State<AppState>,
    _admin: AdminGuard,
    ApiJson(payload): ApiJson<KnowledgeRequest>,
) -> Result<(StatusCode, Json<KnowledgeArticle>), HttpError> {
    let article = content_commands::add_knowledge(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(article)))
}

pub async fn delete_knowledge(
    State(state): State<AppState>,
    _admin: AdminGuard,
    ApiPath(id): ApiPath<i64>,
) -> Result<StatusCode, HttpError> {
    content_commands::delete_knowledge(&state, ArticleId(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}
