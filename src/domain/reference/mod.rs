// src/domain/reference/mod.rs
pub mod entity;
pub mod value_objects;

pub use entity::{ArticleType, Attachment, Profile, Region};
pub use value_objects::{ArticleTypeId, AttachmentId, ProfileId, RegionId, RegionKey};
