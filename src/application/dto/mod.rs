// src/application/dto/mod.rs
pub mod articles;
pub mod pagination;
pub mod references;
pub mod serde_time;

pub use articles::{ArticleDetailDto, ArticleDto, ArticleShortDto};
pub use pagination::PaginatedResult;
pub use references::{ArticleTypeDto, AttachmentDto, ProfileDto, RegionDto};
