// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::{Article, ArticleContent, ArticleDraft, ArticleId, ArticleTitle},
        reference::{ArticleTypeId, AttachmentId, ProfileId, RegionId},
    },
};

/// Raw editable fields as submitted by a moderator, shared by create and update.
#[derive(Debug, Clone)]
pub struct ArticleFields {
    pub title: String,
    pub description: String,
    pub content: String,
    pub image_id: String,
    pub article_type_id: i64,
    pub region_id: i64,
}

impl ArticleFields {
    pub(super) fn into_draft(self) -> ApplicationResult<ArticleDraft> {
        Ok(ArticleDraft {
            title: ArticleTitle::new(self.title)?,
            description: self.description,
            content: ArticleContent::new(self.content)?,
            image_id: AttachmentId::new(self.image_id)?,
            article_type_id: ArticleTypeId::new(self.article_type_id)?,
            region_id: RegionId::new(self.region_id)?,
        })
    }
}

pub struct CreateArticleCommand {
    pub fields: ArticleFields,
}

impl ArticleCommandService {
    #[tracing::instrument(skip(self, command))]
    pub async fn create_article(
        &self,
        moderator_id: ProfileId,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let draft = command.fields.into_draft()?;
        self.ensure_profile(moderator_id).await?;
        let article = Article::create(ArticleId::generate(), draft, moderator_id, self.clock.now());

        let created = self.repo.save(article).await?;
        tracing::info!(article_id = %created.id, "article created");
        Ok(created.into())
    }
}
