// src/application/ports/resolvers.rs
//! Lookups into services that own regions, profiles, article types and
//! attachments. Unknown ids fail with `DomainError::NotFound`.
use crate::domain::errors::DomainResult;
use crate::domain::reference::{
    ArticleType, ArticleTypeId, Attachment, AttachmentId, Profile, ProfileId, Region, RegionId,
    RegionKey,
};
use async_trait::async_trait;

#[async_trait]
pub trait RegionResolver: Send + Sync {
    async fn by_key(&self, key: &RegionKey) -> DomainResult<Region>;
    async fn by_id(&self, id: RegionId) -> DomainResult<Region>;
}

#[async_trait]
pub trait ProfileResolver: Send + Sync {
    async fn by_id(&self, id: ProfileId) -> DomainResult<Profile>;
}

#[async_trait]
pub trait ArticleTypeResolver: Send + Sync {
    async fn by_id(&self, id: ArticleTypeId) -> DomainResult<ArticleType>;
}

#[async_trait]
pub trait AttachmentResolver: Send + Sync {
    async fn by_id(&self, id: &AttachmentId) -> DomainResult<Attachment>;
}
