// src/application/commands/articles/publish.rs
use super::ArticleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::{article::ArticleId, reference::ProfileId},
};

pub struct PublishArticleCommand {
    pub id: ArticleId,
}

impl ArticleCommandService {
    #[tracing::instrument(skip(self, command), fields(article_id = %command.id))]
    pub async fn publish_article(
        &self,
        publisher_id: ProfileId,
        command: PublishArticleCommand,
    ) -> ApplicationResult<bool> {
        let mut article = self.load(command.id).await?;
        self.ensure_profile(publisher_id).await?;
        if article.is_published() {
            tracing::debug!("article already published, restamping");
        }

        article.publish(publisher_id, self.clock.now());
        self.repo.save(article).await?;
        tracing::info!(%publisher_id, "article published");
        Ok(true)
    }
}
