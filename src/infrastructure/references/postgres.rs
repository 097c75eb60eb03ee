// src/infrastructure/references/postgres.rs
use crate::application::ports::resolvers::{
    ArticleTypeResolver, AttachmentResolver, ProfileResolver, RegionResolver,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::reference::{
    ArticleType, ArticleTypeId, Attachment, AttachmentId, Profile, ProfileId, Region, RegionId,
    RegionKey,
};
use crate::infrastructure::repositories::map_sqlx;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

/// Resolves reference data from the `regions`, `profiles`, `article_types`
/// and `attachments` tables.
#[derive(Clone)]
pub struct PostgresReferenceResolver {
    pool: PgPool,
    attachment_base_url: String,
}

impl PostgresReferenceResolver {
    pub fn new(pool: PgPool, attachment_base_url: impl Into<String>) -> Self {
        Self {
            pool,
            attachment_base_url: attachment_base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, FromRow)]
struct RegionRow {
    id: i64,
    key: String,
    name: String,
}

impl TryFrom<RegionRow> for Region {
    type Error = DomainError;

    fn try_from(row: RegionRow) -> Result<Self, Self::Error> {
        Ok(Region {
            id: RegionId::new(row.id)?,
            key: RegionKey::new(row.key)?,
            name: row.name,
        })
    }
}

#[derive(Debug, FromRow)]
struct ProfileRow {
    id: i64,
    name: String,
    surname: String,
}

#[derive(Debug, FromRow)]
struct ArticleTypeRow {
    id: i64,
    key: String,
    name: String,
}

#[derive(Debug, FromRow)]
struct AttachmentRow {
    id: String,
    original_name: String,
    extension: String,
}

#[async_trait]
impl RegionResolver for PostgresReferenceResolver {
    async fn by_key(&self, key: &RegionKey) -> DomainResult<Region> {
        let row = sqlx::query_as::<_, RegionRow>("SELECT id, key, name FROM regions WHERE key = $1")
            .bind(key.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound(format!("region '{key}' not found")))?;
        Region::try_from(row)
    }

    async fn by_id(&self, id: RegionId) -> DomainResult<Region> {
        let row = sqlx::query_as::<_, RegionRow>("SELECT id, key, name FROM regions WHERE id = $1")
            .bind(i64::from(id))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?
            .ok_or_else(|| DomainError::NotFound(format!("region {id} not found")))?;
        Region::try_from(row)
    }
}

#[async_trait]
impl ProfileResolver for PostgresReferenceResolver {
    async fn by_id(&self, id: ProfileId) -> DomainResult<Profile> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT id, name, surname FROM profiles WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound(format!("profile {id} not found")))?;

        Ok(Profile {
            id: ProfileId::new(row.id)?,
            name: row.name,
            surname: row.surname,
        })
    }
}

#[async_trait]
impl ArticleTypeResolver for PostgresReferenceResolver {
    async fn by_id(&self, id: ArticleTypeId) -> DomainResult<ArticleType> {
        let row = sqlx::query_as::<_, ArticleTypeRow>(
            "SELECT id, key, name FROM article_types WHERE id = $1",
        )
        .bind(i64::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound(format!("article type {id} not found")))?;

        Ok(ArticleType {
            id: ArticleTypeId::new(row.id)?,
            key: row.key,
            name: row.name,
        })
    }
}

#[async_trait]
impl AttachmentResolver for PostgresReferenceResolver {
    async fn by_id(&self, id: &AttachmentId) -> DomainResult<Attachment> {
        let row = sqlx::query_as::<_, AttachmentRow>(
            "SELECT id, original_name, extension FROM attachments WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound(format!("attachment {id} not found")))?;

        Ok(Attachment {
            url: format!("{}/{}", self.attachment_base_url, row.id),
            id: AttachmentId::new(row.id)?,
            original_name: row.original_name,
            extension: row.extension,
        })
    }
}
