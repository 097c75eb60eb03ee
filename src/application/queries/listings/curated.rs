// src/application/queries/listings/curated.rs
use super::ArticleListingService;
use crate::{
    application::{dto::ArticleShortDto, error::ApplicationResult},
    domain::article::{ArticleId, ArticleStatus},
};
use uuid::Uuid;

const CURATED: u32 = 8;
const TOP: u32 = 4;

/// Hand-picked ids for an editorial slot.
pub struct CuratedQuery {
    pub ids: Vec<Uuid>,
}

impl ArticleListingService {
    pub async fn last_eight_among(
        &self,
        query: CuratedQuery,
    ) -> ApplicationResult<Vec<ArticleShortDto>> {
        if query.ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<ArticleId> = query.ids.into_iter().map(ArticleId::new).collect();
        let rows = self
            .repo
            .by_id_set(ArticleStatus::Published, &ids, CURATED)
            .await?;
        self.assemble(rows).await
    }

    /// Ordered by the configured [`crate::domain::article::ArticleRanking`].
    pub async fn top_four(&self) -> ApplicationResult<Vec<ArticleShortDto>> {
        let rows = self
            .repo
            .top(ArticleStatus::Published, self.ranking, TOP)
            .await?;
        self.assemble(rows).await
    }
}
