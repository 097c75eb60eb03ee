// src/application/queries/listings/by_type.rs
use super::ArticleListingService;
use crate::{
    application::{dto::ArticleShortDto, error::ApplicationResult},
    domain::{
        article::{ArticleId, ArticleStatus},
        reference::{ArticleType, ArticleTypeId},
    },
};
use uuid::Uuid;

const LAST_FIVE: u32 = 5;
const LAST_THREE: u32 = 3;
const RELATED: u32 = 4;

pub struct LatestByTypeQuery {
    pub article_type_id: i64,
}

pub struct RelatedByTypeQuery {
    pub article_type_id: i64,
    pub exclude_id: Uuid,
}

impl ArticleListingService {
    pub async fn last_five_by_type(
        &self,
        query: LatestByTypeQuery,
    ) -> ApplicationResult<Vec<ArticleShortDto>> {
        self.latest_by_type(query, LAST_FIVE).await
    }

    pub async fn last_three_by_type(
        &self,
        query: LatestByTypeQuery,
    ) -> ApplicationResult<Vec<ArticleShortDto>> {
        self.latest_by_type(query, LAST_THREE).await
    }

    /// Latest articles of a type, leaving out the one currently being read.
    pub async fn related_by_type(
        &self,
        query: RelatedByTypeQuery,
    ) -> ApplicationResult<Vec<ArticleShortDto>> {
        let article_type = self.resolve_type(query.article_type_id).await?;
        let rows = self
            .repo
            .top_by_type_excluding(
                article_type.id,
                ArticleId::new(query.exclude_id),
                None,
                ArticleStatus::Published,
                RELATED,
            )
            .await?;
        self.assemble(rows).await
    }

    #[tracing::instrument(skip(self, query), fields(article_type_id = query.article_type_id))]
    async fn latest_by_type(
        &self,
        query: LatestByTypeQuery,
        limit: u32,
    ) -> ApplicationResult<Vec<ArticleShortDto>> {
        let article_type = self.resolve_type(query.article_type_id).await?;
        let rows = self
            .repo
            .top_by_type(article_type.id, ArticleStatus::Published, limit)
            .await?;
        self.assemble(rows).await
    }

    pub(super) async fn resolve_type(&self, id: i64) -> ApplicationResult<ArticleType> {
        Ok(self.article_types.by_id(ArticleTypeId::new(id)?).await?)
    }
}
