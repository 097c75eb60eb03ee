// src/domain/article/entity.rs
use crate::domain::article::value_objects::{
    ArticleContent, ArticleId, ArticleStatus, ArticleTitle, Reaction, ReactionFloor,
};
use crate::domain::reference::{ArticleTypeId, AttachmentId, ProfileId, RegionId};
use chrono::{DateTime, Utc};

/// Editable part of an article, supplied on create and on every update.
#[derive(Debug, Clone)]
pub struct ArticleDraft {
    pub title: ArticleTitle,
    pub description: String,
    pub content: ArticleContent,
    pub image_id: AttachmentId,
    pub article_type_id: ArticleTypeId,
    pub region_id: RegionId,
}

/// Publisher and timestamp only exist on a published article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Publication {
    NotPublished,
    Published {
        publisher_id: ProfileId,
        published_at: DateTime<Utc>,
    },
}

impl Publication {
    pub fn status(&self) -> ArticleStatus {
        match self {
            Publication::NotPublished => ArticleStatus::NotPublished,
            Publication::Published { .. } => ArticleStatus::Published,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngagementCounters {
    pub view_count: i64,
    pub shared_count: i64,
    pub like_count: i64,
    pub dislike_count: i64,
}

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub description: String,
    pub content: ArticleContent,
    pub image_id: AttachmentId,
    pub article_type_id: ArticleTypeId,
    pub region_id: RegionId,
    pub moderator_id: ProfileId,
    pub publication: Publication,
    pub counters: EngagementCounters,
    pub visible: bool,
    pub created_at: DateTime<Utc>,
}

impl Article {
    pub fn create(
        id: ArticleId,
        draft: ArticleDraft,
        moderator_id: ProfileId,
        now: DateTime<Utc>,
    ) -> Self {
        let ArticleDraft {
            title,
            description,
            content,
            image_id,
            article_type_id,
            region_id,
        } = draft;

        Self {
            id,
            title,
            description,
            content,
            image_id,
            article_type_id,
            region_id,
            moderator_id,
            publication: Publication::NotPublished,
            counters: EngagementCounters::default(),
            visible: true,
            created_at: now,
        }
    }

    /// Replaces the editable fields and sends the article back to draft.
    ///
    /// View and share counters belong to the previous version and are reset;
    /// likes and dislikes carry over.
    pub fn revise(&mut self, draft: ArticleDraft, moderator_id: ProfileId) {
        self.title = draft.title;
        self.description = draft.description;
        self.content = draft.content;
        self.image_id = draft.image_id;
        self.article_type_id = draft.article_type_id;
        self.region_id = draft.region_id;
        self.moderator_id = moderator_id;
        self.publication = Publication::NotPublished;
        self.counters.view_count = 0;
        self.counters.shared_count = 0;
        self.visible = true;
    }

    /// Re-publishing restamps publisher and timestamp.
    pub fn publish(&mut self, publisher_id: ProfileId, now: DateTime<Utc>) {
        self.publication = Publication::Published {
            publisher_id,
            published_at: now,
        };
    }

    pub fn status(&self) -> ArticleStatus {
        self.publication.status()
    }

    pub fn is_published(&self) -> bool {
        self.status() == ArticleStatus::Published
    }

    pub fn publisher_id(&self) -> Option<ProfileId> {
        match self.publication {
            Publication::Published { publisher_id, .. } => Some(publisher_id),
            Publication::NotPublished => None,
        }
    }

    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        match self.publication {
            Publication::Published { published_at, .. } => Some(published_at),
            Publication::NotPublished => None,
        }
    }

    pub fn record_view(&mut self) {
        self.counters.view_count += 1;
    }

    pub fn record_share(&mut self) {
        self.counters.shared_count += 1;
    }

    pub fn react(&mut self, reaction: Reaction) {
        *self.reaction_counter(reaction) += 1;
    }

    pub fn withdraw_reaction(&mut self, reaction: Reaction, floor: ReactionFloor) {
        let counter = self.reaction_counter(reaction);
        match floor {
            ReactionFloor::Unbounded => *counter -= 1,
            ReactionFloor::ClampAtZero => *counter = (*counter - 1).max(0),
        }
    }

    fn reaction_counter(&mut self, reaction: Reaction) -> &mut i64 {
        match reaction {
            Reaction::Like => &mut self.counters.like_count,
            Reaction::Dislike => &mut self.counters.dislike_count,
        }
    }
}
