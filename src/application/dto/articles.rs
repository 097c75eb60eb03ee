// src/application/dto/articles.rs
use crate::domain::article::{Article, ArticleProjectionRow};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use super::references::{ArticleTypeDto, AttachmentDto, ProfileDto, RegionDto};
use super::serde_time;

/// Returned from article creation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub content: String,
    pub image_id: String,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            title: article.title.into_inner(),
            description: article.description,
            content: article.content.into_inner(),
            image_id: article.image_id.into_inner(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDetailDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub content: String,
    pub image_id: String,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(default, with = "serde_time::option")]
    pub published_at: Option<DateTime<Utc>>,
    pub view_count: i64,
    pub shared_count: i64,
    pub like_count: i64,
    pub dislike_count: i64,
    pub moderator: ProfileDto,
    pub publisher: ProfileDto,
    pub article_type: ArticleTypeDto,
    pub region: RegionDto,
}

/// Short form used by every listing.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleShortDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub image: AttachmentDto,
    #[serde(with = "serde_time")]
    pub published_at: DateTime<Utc>,
}

impl ArticleShortDto {
    pub fn from_row(row: ArticleProjectionRow, image: AttachmentDto) -> Self {
        Self {
            id: row.id.into(),
            title: row.title.into_inner(),
            description: row.description,
            image,
            published_at: row.published_at,
        }
    }
}
