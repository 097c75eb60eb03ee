// src/application/commands/articles/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{resolvers::ProfileResolver, time::Clock},
    },
    domain::{
        article::{Article, ArticleId, ArticleRepository, ReactionFloor},
        reference::ProfileId,
    },
};

pub struct ArticleCommandService {
    pub(super) repo: Arc<dyn ArticleRepository>,
    pub(super) profiles: Arc<dyn ProfileResolver>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) reaction_floor: ReactionFloor,
}

impl ArticleCommandService {
    pub fn new(
        repo: Arc<dyn ArticleRepository>,
        profiles: Arc<dyn ProfileResolver>,
        clock: Arc<dyn Clock>,
        reaction_floor: ReactionFloor,
    ) -> Self {
        Self {
            repo,
            profiles,
            clock,
            reaction_floor,
        }
    }

    pub(super) async fn load(&self, id: ArticleId) -> ApplicationResult<Article> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }

    /// The acting moderator or publisher must be a known profile.
    pub(super) async fn ensure_profile(&self, id: ProfileId) -> ApplicationResult<()> {
        self.profiles.by_id(id).await?;
        Ok(())
    }
}
