// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{articles, listings},
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderName, HeaderValue, Method, header},
    routing::{delete, get, post},
};
use std::time::Duration;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use super::extractors::PROFILE_ID_HEADER;

/// Build the application router. `allowed_origins` feeds the CORS layer;
/// an empty list allows any origin.
pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .merge(openapi::docs_router())
        .route("/health", get(health))
        .route("/api/v1/articles", post(articles::create_article))
        .route(
            "/api/v1/articles/{id}",
            get(articles::get_published_article)
                .put(articles::update_article)
                .delete(articles::delete_article),
        )
        .route(
            "/api/v1/articles/{id}/publish",
            post(articles::publish_article),
        )
        .route("/api/v1/articles/{id}/views", post(articles::record_view))
        .route("/api/v1/articles/{id}/shares", post(articles::record_share))
        .route("/api/v1/articles/{id}/like", post(articles::like_article))
        .route(
            "/api/v1/articles/{id}/dislike",
            post(articles::dislike_article),
        )
        .route(
            "/api/v1/articles/{id}/reactions/{reaction}",
            delete(articles::remove_reaction),
        )
        .route(
            "/api/v1/listings/types/{type_id}/last-five",
            get(listings::last_five_by_type),
        )
        .route(
            "/api/v1/listings/types/{type_id}/last-three",
            get(listings::last_three_by_type),
        )
        .route(
            "/api/v1/listings/types/{type_id}/related/{exclude_id}",
            get(listings::related_by_type),
        )
        .route(
            "/api/v1/listings/types/{type_id}/regions/{region_key}/latest",
            get(listings::last_five_by_type_and_region),
        )
        .route(
            "/api/v1/listings/types/{type_id}/regions/{region_key}/related/{exclude_id}",
            get(listings::related_in_region),
        )
        .route("/api/v1/listings/curated", post(listings::last_eight_among))
        .route("/api/v1/listings/top", get(listings::top_four))
        .route(
            "/api/v1/listings/regions/{region_key}",
            get(listings::page_by_region),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(PROFILE_ID_HEADER),
        ])
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
