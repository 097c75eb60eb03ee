// src/application/queries/listings/by_region.rs
use super::ArticleListingService;
use crate::{
    application::{
        dto::{ArticleShortDto, PaginatedResult},
        error::ApplicationResult,
    },
    domain::{
        article::{ArticleId, ArticleStatus, PageRequest},
        reference::{Region, RegionKey},
    },
};
use uuid::Uuid;

const REGIONAL_LATEST: u32 = 5;
const RELATED: u32 = 4;

pub struct RegionalLatestQuery {
    pub article_type_id: i64,
    pub region_key: String,
}

pub struct RelatedInRegionQuery {
    pub article_type_id: i64,
    pub region_key: String,
    pub exclude_id: Uuid,
}

pub struct PageByRegionQuery {
    pub region_key: String,
    pub page: u32,
    pub size: u32,
}

impl ArticleListingService {
    pub async fn last_five_by_type_and_region(
        &self,
        query: RegionalLatestQuery,
    ) -> ApplicationResult<Vec<ArticleShortDto>> {
        let article_type = self.resolve_type(query.article_type_id).await?;
        let region = self.resolve_region(query.region_key).await?;
        let rows = self
            .repo
            .top_by_type_and_region(
                article_type.id,
                region.id,
                ArticleStatus::Published,
                REGIONAL_LATEST,
            )
            .await?;
        self.assemble(rows).await
    }

    pub async fn related_in_region(
        &self,
        query: RelatedInRegionQuery,
    ) -> ApplicationResult<Vec<ArticleShortDto>> {
        let article_type = self.resolve_type(query.article_type_id).await?;
        let region = self.resolve_region(query.region_key).await?;
        let rows = self
            .repo
            .top_by_type_excluding(
                article_type.id,
                ArticleId::new(query.exclude_id),
                Some(region.id),
                ArticleStatus::Published,
                RELATED,
            )
            .await?;
        self.assemble(rows).await
    }

    #[tracing::instrument(skip(self, query), fields(region = %query.region_key, page = query.page))]
    pub async fn page_by_region(
        &self,
        query: PageByRegionQuery,
    ) -> ApplicationResult<PaginatedResult<ArticleShortDto>> {
        let request = PageRequest::new(query.page, query.size)?;
        let region = self.resolve_region(query.region_key).await?;
        let (rows, total) = self
            .repo
            .page_by_region(region.id, ArticleStatus::Published, request)
            .await?;
        let items = self.assemble(rows).await?;
        Ok(PaginatedResult::new(
            items,
            total,
            request.page(),
            request.size(),
        ))
    }

    async fn resolve_region(&self, key: String) -> ApplicationResult<Region> {
        let key = RegionKey::new(key)?;
        Ok(self.regions.by_key(&key).await?)
    }
}
