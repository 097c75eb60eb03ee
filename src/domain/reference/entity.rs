// src/domain/reference/entity.rs
use crate::domain::reference::value_objects::{
    ArticleTypeId, AttachmentId, ProfileId, RegionId, RegionKey,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub id: RegionId,
    pub key: RegionKey,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub id: ProfileId,
    pub name: String,
    pub surname: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleType {
    pub id: ArticleTypeId,
    pub key: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub id: AttachmentId,
    pub original_name: String,
    pub extension: String,
    pub url: String,
}
