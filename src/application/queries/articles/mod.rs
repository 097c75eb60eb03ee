// src/application/queries/articles/mod.rs
mod get_published;
mod service;

pub use get_published::GetPublishedArticleQuery;
pub use service::ArticleQueryService;
