// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod engagement;
mod publish;
mod service;
mod update;

pub use create::{ArticleFields, CreateArticleCommand};
pub use delete::DeleteArticleCommand;
pub use engagement::RemoveReactionCommand;
pub use publish::PublishArticleCommand;
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
