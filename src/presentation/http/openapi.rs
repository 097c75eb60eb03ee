// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use utoipa::openapi::{
    Components,
    security::{ApiKey, ApiKeyValue, SecurityScheme},
};
use utoipa::{Modify, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use super::extractors::PROFILE_ID_HEADER;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::articles::publish_article,
        crate::presentation::http::controllers::articles::get_published_article,
        crate::presentation::http::controllers::articles::record_view,
        crate::presentation::http::controllers::articles::record_share,
        crate::presentation::http::controllers::articles::like_article,
        crate::presentation::http::controllers::articles::dislike_article,
        crate::presentation::http::controllers::articles::remove_reaction,
        crate::presentation::http::controllers::listings::last_five_by_type,
        crate::presentation::http::controllers::listings::last_three_by_type,
        crate::presentation::http::controllers::listings::related_by_type,
        crate::presentation::http::controllers::listings::last_five_by_type_and_region,
        crate::presentation::http::controllers::listings::related_in_region,
        crate::presentation::http::controllers::listings::last_eight_among,
        crate::presentation::http::controllers::listings::top_four,
        crate::presentation::http::controllers::listings::page_by_region,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::ArticleRequest,
            crate::presentation::http::controllers::articles::SuccessResponse,
            crate::presentation::http::controllers::listings::CuratedRequest,
            crate::presentation::http::controllers::listings::ArticlePage,
            crate::application::dto::ArticleDto,
            crate::application::dto::ArticleDetailDto,
            crate::application::dto::ArticleShortDto,
            crate::application::dto::AttachmentDto,
            crate::application::dto::ProfileDto,
            crate::application::dto::RegionDto,
            crate::application::dto::ArticleTypeDto
        )
    ),
    modifiers(&ApiDocCustomizer),
    tags(
        (name = "Articles", description = "Editorial article lifecycle"),
        (name = "Engagement", description = "View, share and reaction counters"),
        (name = "Listings", description = "Published articles in short form"),
        (name = "System", description = "Service health")
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Components::default);
        components.add_security_scheme(
            "profileId",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(PROFILE_ID_HEADER))),
        );
    }
}

/// Swagger UI at `/docs`, the raw document at `/openapi.json`.
pub fn docs_router() -> Router {
    let swagger = SwaggerUi::new("/docs").url("/openapi.json", ApiDoc::openapi());
    Router::new()
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}
