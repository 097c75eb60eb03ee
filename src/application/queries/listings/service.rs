// src/application/queries/listings/service.rs
use std::sync::Arc;

use crate::{
    application::ports::resolvers::{ArticleTypeResolver, AttachmentResolver, RegionResolver},
    domain::article::{ArticleRanking, ArticleRepository},
};

/// Read-only listings of published articles in short form.
pub struct ArticleListingService {
    pub(super) repo: Arc<dyn ArticleRepository>,
    pub(super) regions: Arc<dyn RegionResolver>,
    pub(super) article_types: Arc<dyn ArticleTypeResolver>,
    pub(super) attachments: Arc<dyn AttachmentResolver>,
    pub(super) ranking: ArticleRanking,
}

impl ArticleListingService {
    pub fn new(
        repo: Arc<dyn ArticleRepository>,
        regions: Arc<dyn RegionResolver>,
        article_types: Arc<dyn ArticleTypeResolver>,
        attachments: Arc<dyn AttachmentResolver>,
        ranking: ArticleRanking,
    ) -> Self {
        Self {
            repo,
            regions,
            article_types,
            attachments,
            ranking,
        }
    }
}
