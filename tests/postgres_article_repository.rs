// tests/postgres_article_repository.rs
use std::env;

use chrono::{Duration, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use newsdesk_core::domain::article::{
    Article, ArticleContent, ArticleDraft, ArticleId, ArticleRepository, ArticleTitle, PageRequest,
    ArticleStatus,
};
use newsdesk_core::domain::errors::DomainError;
use newsdesk_core::domain::reference::{ArticleTypeId, AttachmentId, ProfileId, RegionId};
use newsdesk_core::infrastructure::database;
use newsdesk_core::infrastructure::repositories::PostgresArticleRepository;

const TYPE_ID: i64 = 1;
const MODERATOR_ID: i64 = 1;
const IMAGE_ID: &str = "default";

async fn connect() -> Option<PgPool> {
    let Ok(url) = env::var("TEST_DATABASE_URL") else {
        eprintln!("Skipping Postgres integration test because TEST_DATABASE_URL is not set");
        return None;
    };
    let pool = match database::init_pool(&url).await {
        Ok(pool) => pool,
        Err(err) => {
            eprintln!("Skipping Postgres integration test, cannot connect: {err}");
            return None;
        }
    };
    database::run_migrations(&pool).await.expect("migrations");
    seed_references(&pool).await;
    Some(pool)
}

async fn seed_references(pool: &PgPool) {
    for statement in [
        "INSERT INTO profiles (id, name, surname) VALUES (1, 'Admin', 'Newsroom') ON CONFLICT DO NOTHING",
        "INSERT INTO article_types (id, key, name) VALUES (1, 'local', 'Local news') ON CONFLICT DO NOTHING",
        "INSERT INTO attachments (id, original_name, extension) VALUES ('default', 'default', 'jpg') ON CONFLICT DO NOTHING",
    ] {
        sqlx::query(statement).execute(pool).await.expect("seed");
    }
}

/// A region no other test run uses, so counts are not polluted.
async fn fresh_region(pool: &PgPool) -> RegionId {
    let id = (Uuid::new_v4().as_u128() % 1_000_000_000) as i64 + 1_000;
    sqlx::query("INSERT INTO regions (id, key, name) VALUES ($1, $2, 'Test region')")
        .bind(id)
        .bind(format!("region-{id}"))
        .execute(pool)
        .await
        .expect("region");
    RegionId::new(id).unwrap()
}

fn draft(region_id: RegionId) -> ArticleDraft {
    ArticleDraft {
        title: ArticleTitle::new("Postgres article").unwrap(),
        description: String::new(),
        content: ArticleContent::new("body").unwrap(),
        image_id: AttachmentId::new(IMAGE_ID).unwrap(),
        article_type_id: ArticleTypeId::new(TYPE_ID).unwrap(),
        region_id,
    }
}

#[tokio::test]
async fn publishing_with_unknown_publisher_is_not_found() {
    let Some(pool) = connect().await else { return };
    let region = fresh_region(&pool).await;
    let repo = PostgresArticleRepository::new(pool);

    let mut article = Article::create(
        ArticleId::generate(),
        draft(region),
        ProfileId::new(MODERATOR_ID).unwrap(),
        Utc::now(),
    );
    repo.save(article.clone()).await.unwrap();

    article.publish(ProfileId::new(i64::MAX).unwrap(), Utc::now());
    let err = repo.save(article).await.unwrap_err();
    assert!(
        matches!(err, DomainError::NotFound(ref msg) if msg == "profile not found"),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn region_page_total_matches_published_rows() {
    let Some(pool) = connect().await else { return };
    let region = fresh_region(&pool).await;
    let repo = PostgresArticleRepository::new(pool);
    let moderator = ProfileId::new(MODERATOR_ID).unwrap();
    let start = Utc::now();

    let mut published = Vec::new();
    for i in 0..5 {
        let mut article = Article::create(ArticleId::generate(), draft(region), moderator, start);
        article.publish(moderator, start + Duration::minutes(i));
        published.push(repo.save(article).await.unwrap().id);
    }
    let draft_only = Article::create(ArticleId::generate(), draft(region), moderator, start);
    repo.save(draft_only).await.unwrap();

    let (first, total) = repo
        .page_by_region(region, ArticleStatus::Published, PageRequest::new(0, 2).unwrap())
        .await
        .unwrap();
    assert_eq!(total, 5);
    assert_eq!(
        first.iter().map(|row| row.id).collect::<Vec<_>>(),
        vec![published[4], published[3]]
    );

    let (last, total) = repo
        .page_by_region(region, ArticleStatus::Published, PageRequest::new(2, 2).unwrap())
        .await
        .unwrap();
    assert_eq!(total, 5);
    assert_eq!(last.len(), 1);
    assert_eq!(last[0].id, published[0]);
}
