// src/application/queries/articles/service.rs
use std::sync::Arc;

use crate::{
    application::ports::resolvers::{ArticleTypeResolver, ProfileResolver, RegionResolver},
    domain::article::ArticleRepository,
};

pub struct ArticleQueryService {
    pub(super) repo: Arc<dyn ArticleRepository>,
    pub(super) profiles: Arc<dyn ProfileResolver>,
    pub(super) article_types: Arc<dyn ArticleTypeResolver>,
    pub(super) regions: Arc<dyn RegionResolver>,
}

impl ArticleQueryService {
    pub fn new(
        repo: Arc<dyn ArticleRepository>,
        profiles: Arc<dyn ProfileResolver>,
        article_types: Arc<dyn ArticleTypeResolver>,
        regions: Arc<dyn RegionResolver>,
    ) -> Self {
        Self {
            repo,
            profiles,
            article_types,
            regions,
        }
    }
}
