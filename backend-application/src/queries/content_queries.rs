use backend_domain::{KnowledgeArticle, KnowledgeCategory, NewsArticle};

use crate::dtos::KnowledgeQuery;
use crate::{AppError, AppState};

pub async fn list_news(state: &AppState) -> Result<Vec<NewsArticle>, AppError> {
    let mut articles = state.content_repo.fetch_news().await?;
    articles.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
    Ok(articles)
}

pub async fn list_knowledge(
    state: &AppState,
    query: KnowledgeQuery,
) -> Result<Vec<KnowledgeArticle>, AppError> {
    let category = query
        .category
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::parse::<KnowledgeCategory>)
        .transpose()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;
    Ok(state.content_repo.fetch_knowledge(category).await?)
}
