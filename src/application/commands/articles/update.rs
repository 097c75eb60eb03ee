// src/application/commands/articles/update.rs
use super::{ArticleCommandService, ArticleFields};
use crate::{
    application::error::ApplicationResult,
    domain::{article::ArticleId, reference::ProfileId},
};

pub struct UpdateArticleCommand {
    pub id: ArticleId,
    pub fields: ArticleFields,
}

impl ArticleCommandService {
    /// Any edit sends the article back to draft; see [`crate::domain::article::Article::revise`].
    #[tracing::instrument(skip(self, command), fields(article_id = %command.id))]
    pub async fn update_article(
        &self,
        moderator_id: ProfileId,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<bool> {
        let UpdateArticleCommand { id, fields } = command;
        let mut article = self.load(id).await?;
        let draft = fields.into_draft()?;
        self.ensure_profile(moderator_id).await?;

        article.revise(draft, moderator_id);
        self.repo.save(article).await?;
        tracing::info!("article returned to draft");
        Ok(true)
    }
}
