// src/presentation/http/extractors.rs
use crate::domain::reference::ProfileId;
use axum::{extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

/// Header carrying the caller's profile id, set by the authenticating gateway.
pub const PROFILE_ID_HEADER: &str = "x-profile-id";

/// The profile on whose behalf a mutating request is made.
#[derive(Debug, Clone, Copy)]
pub struct ActingProfile(pub ProfileId);

impl<S> FromRequestParts<S> for ActingProfile
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(PROFILE_ID_HEADER)
            .ok_or_else(|| HttpError::unauthorized("missing X-Profile-Id header"))?
            .to_str()
            .map_err(|_| HttpError::unauthorized("invalid X-Profile-Id header"))?;

        let id = raw
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|value| ProfileId::new(value).ok())
            .ok_or_else(|| HttpError::unauthorized("invalid X-Profile-Id header"))?;

        Ok(Self(id))
    }
}
