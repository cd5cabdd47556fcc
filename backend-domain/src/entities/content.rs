// News and educational content entities

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::value_objects::ArticleId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub id: ArticleId,
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNewsArticle {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub image: Option<String>,
    pub date: NaiveDate,
}

impl NewNewsArticle {
    pub fn into_article(self, id: ArticleId) -> NewsArticle {
        NewsArticle {
            id,
            title: self.title,
            body: self.body,
            image: self.image,
            date: self.date,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnowledgeCategory {
    #[serde(rename = "pengertian")]
    Definition,
    #[serde(rename = "penyebab")]
    Causes,
    #[serde(rename = "penanggulangan")]
    Response,
    #[serde(rename = "mitigasi")]
    Mitigation,
    #[serde(rename = "informasi umum")]
    General,
}

impl KnowledgeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            KnowledgeCategory::Definition => "pengertian",
            KnowledgeCategory::Causes => "penyebab",
            KnowledgeCategory::Response => "penanggulangan",
            KnowledgeCategory::Mitigation => "mitigasi",
            KnowledgeCategory::General => "informasi umum",
        }
    }
}

impl fmt::Display for KnowledgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KnowledgeCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pengertian" => Ok(KnowledgeCategory::Definition),
            "penyebab" => Ok(KnowledgeCategory::Causes),
            "penanggulangan" => Ok(KnowledgeCategory::Response),
            "mitigasi" => Ok(KnowledgeCategory::Mitigation),
            "informasi umum" | "pengetahuan" => Ok(KnowledgeCategory::General),
            other => Err(anyhow::anyhow!("unknown knowledge category '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeArticle {
    pub id: ArticleId,
    pub category: KnowledgeCategory,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewKnowledgeArticle {
    pub category: KnowledgeCategory,
    pub title: String,
    pub body: String,
}

impl NewKnowledgeArticle {
    pub fn into_article(self, id: ArticleId) -> KnowledgeArticle {
        KnowledgeArticle {
            id,
            category: self.category,
            title: self.title,
            body: self.body,
        }
    }
}
