// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Duration, TimeZone, Utc};
use once_cell::sync::Lazy;
use serde_json::Value;
use uuid::Uuid;

use newsdesk_core::application::commands::articles::{
    ArticleFields, CreateArticleCommand, PublishArticleCommand,
};
use newsdesk_core::application::ports::resolvers::AttachmentResolver;
use newsdesk_core::application::services::{
    ApplicationServices, ArticlePolicies, ReferenceResolvers,
};
use newsdesk_core::domain::article::ArticleId;
use newsdesk_core::domain::reference::ProfileId;
use newsdesk_core::infrastructure::references::InMemoryReferenceCatalog;
use newsdesk_core::infrastructure::repositories::InMemoryArticleRepository;
use newsdesk_core::infrastructure::time::ManualClock;
use newsdesk_core::presentation::http::{routes::build_router, state::HttpState};

use super::builders::ArticleFieldsBuilder;

pub static FIXED_NOW: Lazy<DateTime<Utc>> =
    Lazy::new(|| Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap());

pub const MODERATOR: i64 = 1;
pub const PUBLISHER: i64 = 7;

pub fn profile(id: i64) -> ProfileId {
    ProfileId::new(id).unwrap()
}

/// In-memory service stack with handles on the pieces tests poke at.
pub struct TestContext {
    pub services: Arc<ApplicationServices>,
    pub repo: Arc<InMemoryArticleRepository>,
    pub catalog: Arc<InMemoryReferenceCatalog>,
    pub clock: Arc<ManualClock>,
}

pub fn test_catalog() -> InMemoryReferenceCatalog {
    let catalog = InMemoryReferenceCatalog::seeded("http://cdn.test/files").unwrap();
    catalog.add_profile(PUBLISHER, "Dilnoza", "Karimova").unwrap();
    catalog.add_attachment("img-1", "cover", "png").unwrap();
    catalog
}

pub fn build_context(policies: ArticlePolicies) -> TestContext {
    let catalog = Arc::new(test_catalog());
    build_context_with(policies, catalog.clone(), catalog)
}

pub fn build_default_context() -> TestContext {
    build_context(ArticlePolicies::default())
}

/// Same stack, but images are resolved through `attachments`.
pub fn build_context_with(
    policies: ArticlePolicies,
    catalog: Arc<InMemoryReferenceCatalog>,
    attachments: Arc<dyn AttachmentResolver>,
) -> TestContext {
    let repo = Arc::new(InMemoryArticleRepository::new());
    let clock = Arc::new(ManualClock::new(*FIXED_NOW));

    let mut resolvers = ReferenceResolvers::shared(catalog.clone());
    resolvers.attachments = attachments;

    let services = Arc::new(ApplicationServices::new(
        repo.clone(),
        resolvers,
        clock.clone(),
        policies,
    ));

    TestContext {
        services,
        repo,
        catalog,
        clock,
    }
}

impl TestContext {
    pub async fn create(&self, fields: ArticleFields) -> Uuid {
        self.services
            .article_commands
            .create_article(profile(MODERATOR), CreateArticleCommand { fields })
            .await
            .unwrap()
            .id
    }

    /// Creates and publishes one minute after the previous publication, so
    /// listing order follows call order.
    pub async fn create_published(&self, fields: ArticleFields) -> Uuid {
        let id = self.create(fields).await;
        self.publish(id).await;
        id
    }

    pub async fn publish(&self, id: Uuid) {
        self.clock.advance(Duration::minutes(1));
        self.services
            .article_commands
            .publish_article(
                profile(PUBLISHER),
                PublishArticleCommand {
                    id: ArticleId::new(id),
                },
            )
            .await
            .unwrap();
    }

    pub async fn publish_many(&self, count: usize, fields: impl Fn(usize) -> ArticleFieldsBuilder) -> Vec<Uuid> {
        let mut ids = Vec::with_capacity(count);
        for i in 0..count {
            ids.push(self.create_published(fields(i).build()).await);
        }
        ids
    }

    pub fn router(&self) -> axum::Router {
        let state = HttpState {
            services: self.services.clone(),
        };
        build_router(state, &[])
    }
}

pub fn json_request(method: &str, uri: &str, profile_id: Option<i64>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");
    if let Some(id) = profile_id {
        builder = builder.header("x-profile-id", id.to_string());
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn empty_request(method: &str, uri: &str, profile_id: Option<i64>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(id) = profile_id {
        builder = builder.header("x-profile-id", id.to_string());
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> Value {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    serde_json::from_slice(&bytes).expect("expected json body")
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.unwrap();
    let json: Value = serde_json::from_slice(&bytes).expect("expected valid json body for error");
    assert_eq!(json["error"].as_str().unwrap_or(""), expected_error);
    assert!(!json["message"].as_str().unwrap_or("").is_empty());
}
