// src/application/dto/references.rs
use crate::domain::reference::{ArticleType, Attachment, Profile, Region};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RegionDto {
    pub id: i64,
    pub key: String,
    pub name: String,
}

impl From<Region> for RegionDto {
    fn from(region: Region) -> Self {
        Self {
            id: region.id.into(),
            key: region.key.to_string(),
            name: region.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileDto {
    pub id: i64,
    pub name: String,
    pub surname: String,
}

impl From<Profile> for ProfileDto {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.into(),
            name: profile.name,
            surname: profile.surname,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleTypeDto {
    pub id: i64,
    pub key: String,
    pub name: String,
}

impl From<ArticleType> for ArticleTypeDto {
    fn from(article_type: ArticleType) -> Self {
        Self {
            id: article_type.id.into(),
            key: article_type.key,
            name: article_type.name,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AttachmentDto {
    pub id: String,
    pub original_name: String,
    pub extension: String,
    pub url: String,
}

impl From<Attachment> for AttachmentDto {
    fn from(attachment: Attachment) -> Self {
        Self {
            id: attachment.id.into_inner(),
            original_name: attachment.original_name,
            extension: attachment.extension,
            url: attachment.url,
        }
    }
}
