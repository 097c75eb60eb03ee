// src/domain/article/mod.rs
pub mod entity;
pub mod projection;
pub mod repository;
pub mod value_objects;

pub use entity::{Article, ArticleDraft, EngagementCounters, Publication};
pub use projection::{ArticleProjectionRow, PageRequest};
pub use repository::ArticleRepository;
pub use value_objects::{
    ArticleContent, ArticleId, ArticleRanking, ArticleStatus, ArticleTitle, Reaction,
    ReactionFloor,
};
