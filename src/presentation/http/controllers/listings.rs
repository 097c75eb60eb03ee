// src/presentation/http/controllers/listings.rs
use crate::application::{
    dto::{ArticleShortDto, PaginatedResult},
    queries::listings::{
        CuratedQuery, LatestByTypeQuery, PageByRegionQuery, RegionalLatestQuery,
        RelatedByTypeQuery, RelatedInRegionQuery,
    },
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

const DEFAULT_PAGE_SIZE: u32 = 10;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CuratedRequest {
    #[serde(default)]
    pub ids: Vec<Uuid>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RegionPageParams {
    /// Zero-based page index.
    #[serde(default)]
    pub page: Option<u32>,
    /// Between 1 and 100, defaults to 10.
    #[serde(default)]
    pub size: Option<u32>,
}

/// One page of short-form articles.
pub type ArticlePage = PaginatedResult<ArticleShortDto>;

#[utoipa::path(
    get,
    path = "/api/v1/listings/types/{type_id}/last-five",
    params(("type_id" = i64, Path, description = "Article type id")),
    responses(
        (status = 200, description = "Five most recently published articles of the type.", body = [ArticleShortDto]),
        (status = 404, description = "Unknown article type.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Listings"
)]
pub async fn last_five_by_type(
    Extension(state): Extension<HttpState>,
    Path(article_type_id): Path<i64>,
) -> HttpResult<Json<Vec<ArticleShortDto>>> {
    state
        .services
        .article_listings
        .last_five_by_type(LatestByTypeQuery { article_type_id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/listings/types/{type_id}/last-three",
    params(("type_id" = i64, Path, description = "Article type id")),
    responses(
        (status = 200, description = "Three most recently published articles of the type.", body = [ArticleShortDto]),
        (status = 404, description = "Unknown article type.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Listings"
)]
pub async fn last_three_by_type(
    Extension(state): Extension<HttpState>,
    Path(article_type_id): Path<i64>,
) -> HttpResult<Json<Vec<ArticleShortDto>>> {
    state
        .services
        .article_listings
        .last_three_by_type(LatestByTypeQuery { article_type_id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/listings/types/{type_id}/related/{exclude_id}",
    params(
        ("type_id" = i64, Path, description = "Article type id"),
        ("exclude_id" = Uuid, Path, description = "Article being read")
    ),
    responses((status = 200, description = "Up to four articles of the same type.", body = [ArticleShortDto])),
    tag = "Listings"
)]
pub async fn related_by_type(
    Extension(state): Extension<HttpState>,
    Path((article_type_id, exclude_id)): Path<(i64, Uuid)>,
) -> HttpResult<Json<Vec<ArticleShortDto>>> {
    state
        .services
        .article_listings
        .related_by_type(RelatedByTypeQuery {
            article_type_id,
            exclude_id,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/listings/types/{type_id}/regions/{region_key}/latest",
    params(
        ("type_id" = i64, Path, description = "Article type id"),
        ("region_key" = String, Path, description = "Region key")
    ),
    responses(
        (status = 200, description = "Five latest articles of the type in the region.", body = [ArticleShortDto]),
        (status = 404, description = "Unknown region.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Listings"
)]
pub async fn last_five_by_type_and_region(
    Extension(state): Extension<HttpState>,
    Path((article_type_id, region_key)): Path<(i64, String)>,
) -> HttpResult<Json<Vec<ArticleShortDto>>> {
    state
        .services
        .article_listings
        .last_five_by_type_and_region(RegionalLatestQuery {
            article_type_id,
            region_key,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/listings/types/{type_id}/regions/{region_key}/related/{exclude_id}",
    params(
        ("type_id" = i64, Path, description = "Article type id"),
        ("region_key" = String, Path, description = "Region key"),
        ("exclude_id" = Uuid, Path, description = "Article being read")
    ),
    responses(
        (status = 200, description = "Up to four related articles in the region.", body = [ArticleShortDto]),
        (status = 404, description = "Unknown region.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Listings"
)]
pub async fn related_in_region(
    Extension(state): Extension<HttpState>,
    Path((article_type_id, region_key, exclude_id)): Path<(i64, String, Uuid)>,
) -> HttpResult<Json<Vec<ArticleShortDto>>> {
    state
        .services
        .article_listings
        .related_in_region(RelatedInRegionQuery {
            article_type_id,
            region_key,
            exclude_id,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/listings/curated",
    request_body = CuratedRequest,
    responses((status = 200, description = "Up to eight published articles among the given ids.", body = [ArticleShortDto])),
    tag = "Listings"
)]
pub async fn last_eight_among(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CuratedRequest>,
) -> HttpResult<Json<Vec<ArticleShortDto>>> {
    state
        .services
        .article_listings
        .last_eight_among(CuratedQuery { ids: payload.ids })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/listings/top",
    responses((status = 200, description = "Four top published articles.", body = [ArticleShortDto])),
    tag = "Listings"
)]
pub async fn top_four(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleShortDto>>> {
    state
        .services
        .article_listings
        .top_four()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/v1/listings/regions/{region_key}",
    params(
        ("region_key" = String, Path, description = "Region key"),
        RegionPageParams
    ),
    responses(
        (status = 200, description = "One page of published articles in the region.", body = ArticlePage),
        (status = 400, description = "Invalid page size.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown region.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Listings"
)]
pub async fn page_by_region(
    Extension(state): Extension<HttpState>,
    Path(region_key): Path<String>,
    Query(params): Query<RegionPageParams>,
) -> HttpResult<Json<ArticlePage>> {
    let query = PageByRegionQuery {
        region_key,
        page: params.page.unwrap_or(0),
        size: params.size.unwrap_or(DEFAULT_PAGE_SIZE),
    };

    state
        .services
        .article_listings
        .page_by_region(query)
        .await
        .into_http()
        .map(Json)
}
