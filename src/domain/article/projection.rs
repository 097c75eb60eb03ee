// src/domain/article/projection.rs
use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::{ArticleId, ArticleTitle};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::reference::AttachmentId;
use chrono::{DateTime, Utc};

/// The columns a listing query hands back for each published article.
#[derive(Debug, Clone)]
pub struct ArticleProjectionRow {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub description: String,
    pub image_id: AttachmentId,
    pub published_at: DateTime<Utc>,
}

impl ArticleProjectionRow {
    /// Returns `None` for articles that are not published.
    pub fn from_article(article: &Article) -> Option<Self> {
        Some(Self {
            id: article.id,
            title: article.title.clone(),
            description: article.description.clone(),
            image_id: article.image_id.clone(),
            published_at: article.published_at()?,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    pub const MAX_SIZE: u32 = 100;

    /// `page` is zero-based. Sizes above [`Self::MAX_SIZE`] are capped.
    pub fn new(page: u32, size: u32) -> DomainResult<Self> {
        if size == 0 {
            return Err(DomainError::Validation(
                "page size must be at least 1".into(),
            ));
        }
        Ok(Self {
            page,
            size: size.min(Self::MAX_SIZE),
        })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_request_rejects_zero_size_and_caps_large_sizes() {
        assert!(PageRequest::new(0, 0).is_err());
        let request = PageRequest::new(3, 500).unwrap();
        assert_eq!(request.size(), PageRequest::MAX_SIZE);
        assert_eq!(request.offset(), 300);
    }
}
