// src/application/commands/articles/engagement.rs
use super::ArticleCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::article::{Article, ArticleId, Reaction},
};

pub struct RemoveReactionCommand {
    pub id: ArticleId,
    pub reaction: Reaction,
}

// Counter updates are read-modify-write against the store; concurrent callers
// can lose increments.
impl ArticleCommandService {
    pub async fn increment_view_count(&self, id: ArticleId) -> ApplicationResult<bool> {
        self.mutate(id, Article::record_view).await?;
        Ok(true)
    }

    pub async fn increment_share_count(&self, id: ArticleId) -> ApplicationResult<bool> {
        self.mutate(id, Article::record_share).await?;
        Ok(true)
    }

    pub async fn like(&self, id: ArticleId) -> ApplicationResult<()> {
        self.mutate(id, |article| article.react(Reaction::Like)).await
    }

    pub async fn dislike(&self, id: ArticleId) -> ApplicationResult<()> {
        self.mutate(id, |article| article.react(Reaction::Dislike))
            .await
    }

    pub async fn remove_reaction(&self, command: RemoveReactionCommand) -> ApplicationResult<()> {
        let floor = self.reaction_floor;
        self.mutate(command.id, |article| {
            article.withdraw_reaction(command.reaction, floor);
        })
        .await
    }

    async fn mutate<F>(&self, id: ArticleId, apply: F) -> ApplicationResult<()>
    where
        F: FnOnce(&mut Article) + Send,
    {
        let mut article = self.load(id).await?;
        apply(&mut article);
        tracing::debug!(
            article_id = %id,
            views = article.counters.view_count,
            shares = article.counters.shared_count,
            likes = article.counters.like_count,
            dislikes = article.counters.dislike_count,
            "article counters updated"
        );
        self.repo.save(article).await?;
        Ok(())
    }
}
