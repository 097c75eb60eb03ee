// src/application/queries/articles/get_published.rs
use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDetailDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::{ArticleId, Publication},
};
use uuid::Uuid;

pub struct GetPublishedArticleQuery {
    pub id: Uuid,
}

impl ArticleQueryService {
    /// Missing and unpublished articles both fail with `NotPublished`, so the
    /// public read never reveals whether a draft exists.
    #[tracing::instrument(skip(self, query), fields(article_id = %query.id))]
    pub async fn get_published_article(
        &self,
        query: GetPublishedArticleQuery,
    ) -> ApplicationResult<ArticleDetailDto> {
        let id = ArticleId::new(query.id);
        let article = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_published("article not published"))?;

        let Publication::Published {
            publisher_id,
            published_at,
        } = article.publication
        else {
            return Err(ApplicationError::not_published("article not published"));
        };

        let moderator = self.profiles.by_id(article.moderator_id).await?;
        let publisher = self.profiles.by_id(publisher_id).await?;
        let article_type = self.article_types.by_id(article.article_type_id).await?;
        let region = self.regions.by_id(article.region_id).await?;

        Ok(ArticleDetailDto {
            id: article.id.into(),
            title: article.title.into_inner(),
            description: article.description,
            content: article.content.into_inner(),
            image_id: article.image_id.into_inner(),
            created_at: article.created_at,
            published_at: Some(published_at),
            view_count: article.counters.view_count,
            shared_count: article.counters.shared_count,
            like_count: article.counters.like_count,
            dislike_count: article.counters.dislike_count,
            moderator: moderator.into(),
            publisher: publisher.into(),
            article_type: article_type.into(),
            region: region.into(),
        })
    }
}
