// src/domain/article/repository.rs
use crate::domain::article::entity::Article;
use crate::domain::article::projection::{ArticleProjectionRow, PageRequest};
use crate::domain::article::value_objects::{ArticleId, ArticleRanking, ArticleStatus};
use crate::domain::errors::DomainResult;
use crate::domain::reference::{ArticleTypeId, RegionId};
use async_trait::async_trait;

/// Article storage plus the listing queries the read side needs.
///
/// Every listing query filters on `status` and, unless stated otherwise,
/// orders rows by publication time, newest first.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    /// Inserts or replaces the record with the same id.
    async fn save(&self, article: Article) -> DomainResult<Article>;

    async fn delete(&self, id: ArticleId) -> DomainResult<()>;

    async fn top_by_type(
        &self,
        article_type_id: ArticleTypeId,
        status: ArticleStatus,
        limit: u32,
    ) -> DomainResult<Vec<ArticleProjectionRow>>;

    async fn by_id_set(
        &self,
        status: ArticleStatus,
        ids: &[ArticleId],
        limit: u32,
    ) -> DomainResult<Vec<ArticleProjectionRow>>;

    /// `region_id` narrows the result further when present.
    async fn top_by_type_excluding(
        &self,
        article_type_id: ArticleTypeId,
        exclude: ArticleId,
        region_id: Option<RegionId>,
        status: ArticleStatus,
        limit: u32,
    ) -> DomainResult<Vec<ArticleProjectionRow>>;

    /// Ordering is decided by `ranking`, not by publication time.
    async fn top(
        &self,
        status: ArticleStatus,
        ranking: ArticleRanking,
        limit: u32,
    ) -> DomainResult<Vec<ArticleProjectionRow>>;

    async fn top_by_type_and_region(
        &self,
        article_type_id: ArticleTypeId,
        region_id: RegionId,
        status: ArticleStatus,
        limit: u32,
    ) -> DomainResult<Vec<ArticleProjectionRow>>;

    /// Returns one page of rows and the total number of matching rows.
    async fn page_by_region(
        &self,
        region_id: RegionId,
        status: ArticleStatus,
        page: PageRequest,
    ) -> DomainResult<(Vec<ArticleProjectionRow>, u64)>;
}
