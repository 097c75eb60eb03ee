// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{application::error::ApplicationResult, domain::article::ArticleId};

pub struct DeleteArticleCommand {
    pub id: ArticleId,
}

impl ArticleCommandService {
    #[tracing::instrument(skip(self, command), fields(article_id = %command.id))]
    pub async fn delete_article(&self, command: DeleteArticleCommand) -> ApplicationResult<bool> {
        let article = self.load(command.id).await?;
        self.repo.delete(article.id).await?;
        tracing::info!("article deleted");
        Ok(true)
    }
}
