// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{
        ArticleFields, CreateArticleCommand, DeleteArticleCommand, PublishArticleCommand,
        RemoveReactionCommand, UpdateArticleCommand,
    },
    dto::{ArticleDetailDto, ArticleDto},
    queries::articles::GetPublishedArticleQuery,
};
use crate::domain::article::{ArticleId, Reaction};
use crate::presentation::http::error::{HttpError, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ActingProfile;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Deserialize, ToSchema)]
pub struct ArticleRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub content: String,
    pub image_id: String,
    pub article_type_id: i64,
    pub region_id: i64,
}

impl From<ArticleRequest> for ArticleFields {
    fn from(payload: ArticleRequest) -> Self {
        Self {
            title: payload.title,
            description: payload.description,
            content: payload.content,
            image_id: payload.image_id,
            article_type_id: payload.article_type_id,
            region_id: payload.region_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
}

impl From<bool> for SuccessResponse {
    fn from(success: bool) -> Self {
        Self { success }
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/articles",
    request_body = ArticleRequest,
    responses(
        (status = 201, description = "Article created as a draft.", body = ArticleDto),
        (status = 400, description = "Malformed fields.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Missing caller identity.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    ActingProfile(moderator): ActingProfile,
    Json(payload): Json<ArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let command = CreateArticleCommand {
        fields: payload.into(),
    };

    state
        .services
        .article_commands
        .create_article(moderator, command)
        .await
        .into_http()
        .map(|dto| (StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/v1/articles/{id}",
    params(("id" = Uuid, Path, description = "Article id")),
    request_body = ArticleRequest,
    responses(
        (status = 200, description = "Article updated and returned to draft.", body = SuccessResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    ActingProfile(moderator): ActingProfile,
    Path(id): Path<Uuid>,
    Json(payload): Json<ArticleRequest>,
) -> HttpResult<Json<SuccessResponse>> {
    let command = UpdateArticleCommand {
        id: ArticleId::new(id),
        fields: payload.into(),
    };

    state
        .services
        .article_commands
        .update_article(moderator, command)
        .await
        .into_http()
        .map(|ok| Json(ok.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}",
    params(("id" = Uuid, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article deleted.", body = SuccessResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    _actor: ActingProfile,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<SuccessResponse>> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand {
            id: ArticleId::new(id),
        })
        .await
        .into_http()
        .map(|ok| Json(ok.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/publish",
    params(("id" = Uuid, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article published.", body = SuccessResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn publish_article(
    Extension(state): Extension<HttpState>,
    ActingProfile(publisher): ActingProfile,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<SuccessResponse>> {
    state
        .services
        .article_commands
        .publish_article(
            publisher,
            PublishArticleCommand {
                id: ArticleId::new(id),
            },
        )
        .await
        .into_http()
        .map(|ok| Json(ok.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/articles/{id}",
    params(("id" = Uuid, Path, description = "Article id")),
    responses(
        (status = 200, description = "Published article with resolved references.", body = ArticleDetailDto),
        (status = 403, description = "Article is not published.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_published_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<ArticleDetailDto>> {
    state
        .services
        .article_queries
        .get_published_article(GetPublishedArticleQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/views",
    params(("id" = Uuid, Path, description = "Article id")),
    responses((status = 200, description = "View recorded.", body = SuccessResponse)),
    tag = "Engagement"
)]
pub async fn record_view(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<SuccessResponse>> {
    state
        .services
        .article_commands
        .increment_view_count(ArticleId::new(id))
        .await
        .into_http()
        .map(|ok| Json(ok.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/shares",
    params(("id" = Uuid, Path, description = "Article id")),
    responses((status = 200, description = "Share recorded.", body = SuccessResponse)),
    tag = "Engagement"
)]
pub async fn record_share(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
) -> HttpResult<Json<SuccessResponse>> {
    state
        .services
        .article_commands
        .increment_share_count(ArticleId::new(id))
        .await
        .into_http()
        .map(|ok| Json(ok.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/like",
    params(("id" = Uuid, Path, description = "Article id")),
    responses((status = 204, description = "Like recorded.")),
    tag = "Engagement"
)]
pub async fn like_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .like(ArticleId::new(id))
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/v1/articles/{id}/dislike",
    params(("id" = Uuid, Path, description = "Article id")),
    responses((status = 204, description = "Dislike recorded.")),
    tag = "Engagement"
)]
pub async fn dislike_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<Uuid>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .dislike(ArticleId::new(id))
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/v1/articles/{id}/reactions/{reaction}",
    params(
        ("id" = Uuid, Path, description = "Article id"),
        ("reaction" = String, Path, description = "`like` or `dislike`")
    ),
    responses((status = 204, description = "Reaction withdrawn.")),
    tag = "Engagement"
)]
pub async fn remove_reaction(
    Extension(state): Extension<HttpState>,
    Path((id, reaction)): Path<(Uuid, String)>,
) -> HttpResult<StatusCode> {
    let reaction: Reaction = reaction
        .parse()
        .map_err(|err: crate::domain::errors::DomainError| HttpError::bad_request(err.to_string()))?;

    state
        .services
        .article_commands
        .remove_reaction(RemoveReactionCommand {
            id: ArticleId::new(id),
            reaction,
        })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
