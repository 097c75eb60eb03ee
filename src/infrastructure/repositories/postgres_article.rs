// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleContent, ArticleId, ArticleProjectionRow, ArticleRanking, ArticleRepository,
    ArticleStatus, ArticleTitle, EngagementCounters, PageRequest, Publication,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::reference::{ArticleTypeId, AttachmentId, ProfileId, RegionId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const ARTICLE_COLUMNS: &str = "id, title, description, content, image_id, article_type_id, region_id, \
     moderator_id, publisher_id, status, published_at, created_at, view_count, shared_count, \
     like_count, dislike_count, visible";

const PROJECTION_COLUMNS: &str = "SELECT id, title, description, image_id, published_at FROM articles";

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: Uuid,
    title: String,
    description: String,
    content: String,
    image_id: String,
    article_type_id: i64,
    region_id: i64,
    moderator_id: i64,
    publisher_id: Option<i64>,
    status: String,
    published_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    view_count: i64,
    shared_count: i64,
    like_count: i64,
    dislike_count: i64,
    visible: bool,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let status: ArticleStatus = row.status.parse()?;
        let publication = match (status, row.publisher_id, row.published_at) {
            (ArticleStatus::NotPublished, _, _) => Publication::NotPublished,
            (ArticleStatus::Published, Some(publisher_id), Some(published_at)) => {
                Publication::Published {
                    publisher_id: ProfileId::new(publisher_id)?,
                    published_at,
                }
            }
            (ArticleStatus::Published, _, _) => {
                return Err(DomainError::Persistence(format!(
                    "published article {} is missing publisher or published_at",
                    row.id
                )));
            }
        };

        Ok(Article {
            id: ArticleId::new(row.id),
            title: ArticleTitle::new(row.title)?,
            description: row.description,
            content: ArticleContent::new(row.content)?,
            image_id: AttachmentId::new(row.image_id)?,
            article_type_id: ArticleTypeId::new(row.article_type_id)?,
            region_id: RegionId::new(row.region_id)?,
            moderator_id: ProfileId::new(row.moderator_id)?,
            publication,
            counters: EngagementCounters {
                view_count: row.view_count,
                shared_count: row.shared_count,
                like_count: row.like_count,
                dislike_count: row.dislike_count,
            },
            visible: row.visible,
            created_at: row.created_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct ProjectionRow {
    id: Uuid,
    title: String,
    description: String,
    image_id: String,
    published_at: Option<DateTime<Utc>>,
}

impl TryFrom<ProjectionRow> for ArticleProjectionRow {
    type Error = DomainError;

    fn try_from(row: ProjectionRow) -> Result<Self, Self::Error> {
        let published_at = row.published_at.ok_or_else(|| {
            DomainError::Persistence(format!("listed article {} has no published_at", row.id))
        })?;
        Ok(ArticleProjectionRow {
            id: ArticleId::new(row.id),
            title: ArticleTitle::new(row.title)?,
            description: row.description,
            image_id: AttachmentId::new(row.image_id)?,
            published_at,
        })
    }
}

impl PostgresArticleRepository {
    fn projection_query(status: ArticleStatus) -> QueryBuilder<'static, Postgres> {
        let mut builder = QueryBuilder::new(PROJECTION_COLUMNS);
        builder.push(" WHERE status = ");
        builder.push_bind(status.as_str());
        builder
    }

    fn push_latest_first(builder: &mut QueryBuilder<'_, Postgres>, limit: u32) {
        builder.push(" ORDER BY published_at DESC, id DESC LIMIT ");
        builder.push_bind(i64::from(limit));
    }

    async fn fetch_rows(
        &self,
        mut builder: QueryBuilder<'_, Postgres>,
    ) -> DomainResult<Vec<ArticleProjectionRow>> {
        let rows = builder
            .build_query_as::<ProjectionRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter()
            .map(ArticleProjectionRow::try_from)
            .collect()
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn save(&self, article: Article) -> DomainResult<Article> {
        let publisher_id = article.publisher_id().map(i64::from);
        let published_at = article.published_at();

        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "INSERT INTO articles ({ARTICLE_COLUMNS})
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
             ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                content = EXCLUDED.content,
                image_id = EXCLUDED.image_id,
                article_type_id = EXCLUDED.article_type_id,
                region_id = EXCLUDED.region_id,
                moderator_id = EXCLUDED.moderator_id,
                publisher_id = EXCLUDED.publisher_id,
                status = EXCLUDED.status,
                published_at = EXCLUDED.published_at,
                view_count = EXCLUDED.view_count,
                shared_count = EXCLUDED.shared_count,
                like_count = EXCLUDED.like_count,
                dislike_count = EXCLUDED.dislike_count,
                visible = EXCLUDED.visible
             RETURNING {ARTICLE_COLUMNS}"
        ))
        .bind(article.id.as_uuid())
        .bind(article.title.as_str())
        .bind(&article.description)
        .bind(article.content.as_str())
        .bind(article.image_id.as_str())
        .bind(i64::from(article.article_type_id))
        .bind(i64::from(article.region_id))
        .bind(i64::from(article.moderator_id))
        .bind(publisher_id)
        .bind(article.status().as_str())
        .bind(published_at)
        .bind(article.created_at)
        .bind(article.counters.view_count)
        .bind(article.counters.shared_count)
        .bind(article.counters.like_count)
        .bind(article.counters.dislike_count)
        .bind(article.visible)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }

    async fn top_by_type(
        &self,
        article_type_id: ArticleTypeId,
        status: ArticleStatus,
        limit: u32,
    ) -> DomainResult<Vec<ArticleProjectionRow>> {
        let mut builder = Self::projection_query(status);
        builder.push(" AND article_type_id = ");
        builder.push_bind(i64::from(article_type_id));
        Self::push_latest_first(&mut builder, limit);
        self.fetch_rows(builder).await
    }

    async fn by_id_set(
        &self,
        status: ArticleStatus,
        ids: &[ArticleId],
        limit: u32,
    ) -> DomainResult<Vec<ArticleProjectionRow>> {
        let ids: Vec<Uuid> = ids.iter().map(ArticleId::as_uuid).collect();
        let mut builder = Self::projection_query(status);
        builder.push(" AND id = ANY(");
        builder.push_bind(ids);
        builder.push(")");
        Self::push_latest_first(&mut builder, limit);
        self.fetch_rows(builder).await
    }

    async fn top_by_type_excluding(
        &self,
        article_type_id: ArticleTypeId,
        exclude: ArticleId,
        region_id: Option<RegionId>,
        status: ArticleStatus,
        limit: u32,
    ) -> DomainResult<Vec<ArticleProjectionRow>> {
        let mut builder = Self::projection_query(status);
        builder.push(" AND article_type_id = ");
        builder.push_bind(i64::from(article_type_id));
        builder.push(" AND id <> ");
        builder.push_bind(exclude.as_uuid());
        if let Some(region_id) = region_id {
            builder.push(" AND region_id = ");
            builder.push_bind(i64::from(region_id));
        }
        Self::push_latest_first(&mut builder, limit);
        self.fetch_rows(builder).await
    }

    async fn top(
        &self,
        status: ArticleStatus,
        ranking: ArticleRanking,
        limit: u32,
    ) -> DomainResult<Vec<ArticleProjectionRow>> {
        let mut builder = Self::projection_query(status);
        match ranking {
            ArticleRanking::MostRecent => Self::push_latest_first(&mut builder, limit),
            ArticleRanking::MostViewed => {
                builder.push(" ORDER BY view_count DESC, published_at DESC, id DESC LIMIT ");
                builder.push_bind(i64::from(limit));
            }
        }
        self.fetch_rows(builder).await
    }

    async fn top_by_type_and_region(
        &self,
        article_type_id: ArticleTypeId,
        region_id: RegionId,
        status: ArticleStatus,
        limit: u32,
    ) -> DomainResult<Vec<ArticleProjectionRow>> {
        let mut builder = Self::projection_query(status);
        builder.push(" AND article_type_id = ");
        builder.push_bind(i64::from(article_type_id));
        builder.push(" AND region_id = ");
        builder.push_bind(i64::from(region_id));
        Self::push_latest_first(&mut builder, limit);
        self.fetch_rows(builder).await
    }

    async fn page_by_region(
        &self,
        region_id: RegionId,
        status: ArticleStatus,
        page: PageRequest,
    ) -> DomainResult<(Vec<ArticleProjectionRow>, u64)> {
        let offset = i64::try_from(page.offset())
            .map_err(|_| DomainError::Validation("page offset out of range".into()))?;

        // count and page must see the same snapshot
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;
        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ, READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;

        let total: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM articles WHERE status = $1 AND region_id = $2")
                .bind(status.as_str())
                .bind(i64::from(region_id))
                .fetch_one(&mut *tx)
                .await
                .map_err(map_sqlx)?;

        let mut builder = Self::projection_query(status);
        builder.push(" AND region_id = ");
        builder.push_bind(i64::from(region_id));
        Self::push_latest_first(&mut builder, page.size());
        builder.push(" OFFSET ");
        builder.push_bind(offset);

        let rows = builder
            .build_query_as::<ProjectionRow>()
            .fetch_all(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        tx.commit().await.map_err(map_sqlx)?;

        let rows = rows
            .into_iter()
            .map(ArticleProjectionRow::try_from)
            .collect::<DomainResult<Vec<_>>>()?;
        Ok((rows, u64::try_from(total).unwrap_or_default()))
    }
}
