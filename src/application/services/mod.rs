// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::articles::ArticleCommandService,
        ports::{
            resolvers::{ArticleTypeResolver, AttachmentResolver, ProfileResolver, RegionResolver},
            time::Clock,
        },
        queries::{articles::ArticleQueryService, listings::ArticleListingService},
    },
    domain::article::{ArticleRanking, ArticleRepository, ReactionFloor},
};

/// The resolvers the read side depends on, grouped for injection.
#[derive(Clone)]
pub struct ReferenceResolvers {
    pub regions: Arc<dyn RegionResolver>,
    pub profiles: Arc<dyn ProfileResolver>,
    pub article_types: Arc<dyn ArticleTypeResolver>,
    pub attachments: Arc<dyn AttachmentResolver>,
}

impl ReferenceResolvers {
    /// Use one backend for every kind of reference data.
    pub fn shared<R>(catalog: Arc<R>) -> Self
    where
        R: RegionResolver + ProfileResolver + ArticleTypeResolver + AttachmentResolver + 'static,
    {
        Self {
            regions: catalog.clone(),
            profiles: catalog.clone(),
            article_types: catalog.clone(),
            attachments: catalog,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ArticlePolicies {
    pub ranking: ArticleRanking,
    pub reaction_floor: ReactionFloor,
}

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub article_listings: Arc<ArticleListingService>,
}

impl ApplicationServices {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        resolvers: ReferenceResolvers,
        clock: Arc<dyn Clock>,
        policies: ArticlePolicies,
    ) -> Self {
        let article_commands = Arc::new(ArticleCommandService::new(
            Arc::clone(&article_repo),
            Arc::clone(&resolvers.profiles),
            Arc::clone(&clock),
            policies.reaction_floor,
        ));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_repo),
            Arc::clone(&resolvers.profiles),
            Arc::clone(&resolvers.article_types),
            Arc::clone(&resolvers.regions),
        ));

        let article_listings = Arc::new(ArticleListingService::new(
            Arc::clone(&article_repo),
            Arc::clone(&resolvers.regions),
            Arc::clone(&resolvers.article_types),
            Arc::clone(&resolvers.attachments),
            policies.ranking,
        ));

        Self {
            article_commands,
            article_queries,
            article_listings,
        }
    }
}
