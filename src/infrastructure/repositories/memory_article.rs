// src/infrastructure/repositories/memory_article.rs
use crate::domain::article::{
    Article, ArticleId, ArticleProjectionRow, ArticleRanking, ArticleRepository, ArticleStatus,
    PageRequest,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::reference::{ArticleTypeId, RegionId};
use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::RwLock;

/// Process-local store used when no database is configured and by tests.
#[derive(Default)]
pub struct InMemoryArticleRepository {
    inner: RwLock<HashMap<ArticleId, Article>>,
}

impl InMemoryArticleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.read().map(|map| map.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(
        &self,
    ) -> DomainResult<std::sync::RwLockReadGuard<'_, HashMap<ArticleId, Article>>> {
        self.inner
            .read()
            .map_err(|_| DomainError::Persistence("article store lock poisoned".into()))
    }

    fn write(
        &self,
    ) -> DomainResult<std::sync::RwLockWriteGuard<'_, HashMap<ArticleId, Article>>> {
        self.inner
            .write()
            .map_err(|_| DomainError::Persistence("article store lock poisoned".into()))
    }

    /// Articles in `status` matching `filter`, newest first.
    fn select<F>(&self, status: ArticleStatus, filter: F) -> DomainResult<Vec<Article>>
    where
        F: Fn(&Article) -> bool,
    {
        let map = self.read()?;
        let mut matches: Vec<Article> = map
            .values()
            .filter(|article| article.status() == status && filter(article))
            .cloned()
            .collect();
        matches.sort_by_key(|article| (Reverse(article.published_at()), Reverse(article.id)));
        Ok(matches)
    }

    fn project(articles: impl IntoIterator<Item = Article>, limit: u32) -> Vec<ArticleProjectionRow> {
        articles
            .into_iter()
            .filter_map(|article| ArticleProjectionRow::from_article(&article))
            .take(limit as usize)
            .collect()
    }
}

#[async_trait]
impl ArticleRepository for InMemoryArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn save(&self, article: Article) -> DomainResult<Article> {
        self.write()?.insert(article.id, article.clone());
        Ok(article)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        self.write()?
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }

    async fn top_by_type(
        &self,
        article_type_id: ArticleTypeId,
        status: ArticleStatus,
        limit: u32,
    ) -> DomainResult<Vec<ArticleProjectionRow>> {
        let articles = self.select(status, |a| a.article_type_id == article_type_id)?;
        Ok(Self::project(articles, limit))
    }

    async fn by_id_set(
        &self,
        status: ArticleStatus,
        ids: &[ArticleId],
        limit: u32,
    ) -> DomainResult<Vec<ArticleProjectionRow>> {
        let articles = self.select(status, |a| ids.contains(&a.id))?;
        Ok(Self::project(articles, limit))
    }

    async fn top_by_type_excluding(
        &self,
        article_type_id: ArticleTypeId,
        exclude: ArticleId,
        region_id: Option<RegionId>,
        status: ArticleStatus,
        limit: u32,
    ) -> DomainResult<Vec<ArticleProjectionRow>> {
        let articles = self.select(status, |a| {
            a.article_type_id == article_type_id
                && a.id != exclude
                && region_id.is_none_or(|region| a.region_id == region)
        })?;
        Ok(Self::project(articles, limit))
    }

    async fn top(
        &self,
        status: ArticleStatus,
        ranking: ArticleRanking,
        limit: u32,
    ) -> DomainResult<Vec<ArticleProjectionRow>> {
        let mut articles = self.select(status, |_| true)?;
        if ranking == ArticleRanking::MostViewed {
            // stable sort keeps the newest-first order among equal counts
            articles.sort_by_key(|a| Reverse(a.counters.view_count));
        }
        Ok(Self::project(articles, limit))
    }

    async fn top_by_type_and_region(
        &self,
        article_type_id: ArticleTypeId,
        region_id: RegionId,
        status: ArticleStatus,
        limit: u32,
    ) -> DomainResult<Vec<ArticleProjectionRow>> {
        let articles = self.select(status, |a| {
            a.article_type_id == article_type_id && a.region_id == region_id
        })?;
        Ok(Self::project(articles, limit))
    }

    async fn page_by_region(
        &self,
        region_id: RegionId,
        status: ArticleStatus,
        page: PageRequest,
    ) -> DomainResult<(Vec<ArticleProjectionRow>, u64)> {
        let articles = self.select(status, |a| a.region_id == region_id)?;
        let total = articles.len() as u64;
        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let rows = Self::project(articles.into_iter().skip(offset), page.size());
        Ok((rows, total))
    }
}
