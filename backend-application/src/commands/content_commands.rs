use tracing::info;

use backend_domain::{
    ArticleId, KnowledgeArticle, KnowledgeCategory, NewKnowledgeArticle, NewNewsArticle,
    NewsArticle,
};

use super::{normalize_optional_text, normalize_required_text, parse_date};
use crate::dtos::{KnowledgeRequest, NewsRequest};
use crate::{AppError, AppState};

pub async fn add_news(state: &AppState, payload: NewsRequest) -> Result<NewsArticle, AppError> {
    let title = normalize_required_text(&payload.title, "title")?;
    let body = normalize_required_text(&payload.body, "body")?;
    let date = match normalize_optional_text(payload.date) {
        Some(value) => parse_date(&value)?,
        None => state.clock.today(),
    };
    let article = NewNewsArticle {
        title,
        body,
        image: normalize_optional_text(payload.image),
        date,
    };
    let stored = state.content_repo.insert_news(&article).await?;
    info!(article_id = %stored.id, "news article added");
    Ok(stored)
}

pub async fn delete_news(state: &AppState, id: ArticleId) -> Result<(), AppError> {
    state.content_repo.delete_news(id).await?;
    info!(article_id = %id, "news article deleted");
    Ok(())
}

pub async fn add_knowledge(
    state: &AppState,
    payload: KnowledgeRequest,
) -> Result<KnowledgeArticle, AppError> {
    let category = payload
        .category
        .parse::<KnowledgeCategory>()
        .map_err(|err| AppError::BadRequest(err.to_string()))?;
    let article = NewKnowledgeArticle {
        category,
        title: normalize_required_text(&payload.title, "title")?,
        // HTML is allowed and stored verbatim.
        body: normalize_required_text(&payload.body, "body")?,
    };
    let stored = state.content_repo.insert_knowledge(&article).await?;
    info!(article_id = %stored.id, category = %stored.category, "knowledge article added");
    Ok(stored)
}

pub async fn delete_knowledge(state: &AppState, id: ArticleId) -> Result<(), AppError> {
    state.content_repo.delete_knowledge(id).await?;
    info!(article_id = %id, "knowledge article deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::testing::{state_with, today, MemoryStore};

    #[tokio::test]
    async fn news_defaults_to_today_and_requires_title() {
        let state = state_with(Arc::new(MemoryStore::default()));
        let article = add_news(
            &state,
            NewsRequest {
                title: "Waspada Longsor".to_string(),
                body: "Musim hujan tiba".to_string(),
                image: Some("".to_string()),
                date: None,
            },
        )
        .await
        .expect("add news");
        assert_eq!(article.date, today());
        assert_eq!(article.image, None);

        let err = add_news(
            &state,
            NewsRequest {
                title: " ".to_string(),
                body: "isi".to_string(),
                image: None,
                date: None,
            },
        )
        .await
        .expect_err("missing title");
        assert!(matches!(err, AppError::BadRequest(_)));
    }

    #[tokio::test]
    async fn knowledge_category_must_be_known() {
        let state = state_with(Arc::new(MemoryStore::default()));
        let article = add_knowledge(
            &state,
            KnowledgeRequest {
                category: "Mitigasi".to_string(),
                title: "Vetiver".to_string(),
                body: "<p>Akar wangi</p>".to_string(),
            },
        )
        .await
        .expect("add");
        assert_eq!(article.category, KnowledgeCategory::Mitigation);
        assert_eq!(article.body, "<p>Akar wangi</p>");

        let err = add_knowledge(
            &state,
            KnowledgeRequest {
                category: "gosip".to_string(),
                title: "x".to_string(),
                body: "y".to_string(),
            },
        )
        .await
        .expect_err("category");
        assert!(matches!(err, AppError::BadRequest(_)));

        delete_knowledge(&state, article.id).await.expect("delete");
        let err = delete_knowledge(&state, article.id).await.expect_err("gone");
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
