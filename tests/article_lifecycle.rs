// tests/article_lifecycle.rs
use newsdesk_core::application::commands::articles::{
    CreateArticleCommand, DeleteArticleCommand, PublishArticleCommand, RemoveReactionCommand,
    UpdateArticleCommand,
};
use newsdesk_core::application::error::ApplicationError;
use newsdesk_core::application::queries::articles::GetPublishedArticleQuery;
use newsdesk_core::application::services::ArticlePolicies;
use newsdesk_core::domain::article::{
    ArticleId, ArticleRepository, ArticleStatus, Reaction, ReactionFloor,
};
use uuid::Uuid;

mod support;

use support::{
    ArticleFieldsBuilder, FIXED_NOW, MODERATOR, PUBLISHER, build_context, build_default_context,
    profile,
};

/// 作成直後は下書きで、公開取得は NotPublished になる
#[tokio::test]
async fn created_article_is_a_draft_until_published() {
    let ctx = build_default_context();
    let id = ctx.create(ArticleFieldsBuilder::new().title("T").build()).await;

    let stored = ctx.repo.find_by_id(ArticleId::new(id)).await.unwrap().unwrap();
    assert_eq!(stored.status(), ArticleStatus::NotPublished);
    assert_eq!(stored.publisher_id(), None);
    assert_eq!(stored.published_at(), None);
    assert_eq!(stored.created_at, *FIXED_NOW);
    assert!(stored.visible);

    let err = ctx
        .services
        .article_queries
        .get_published_article(GetPublishedArticleQuery { id })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotPublished(_)));

    ctx.publish(id).await;

    let detail = ctx
        .services
        .article_queries
        .get_published_article(GetPublishedArticleQuery { id })
        .await
        .unwrap();
    assert_eq!(detail.title, "T");
    assert_eq!(detail.publisher.id, PUBLISHER);
    assert_eq!(detail.moderator.id, MODERATOR);
    assert_eq!(detail.region.key, "tashkent");
    assert_eq!(detail.article_type.key, "local");
    assert!(detail.published_at.is_some());
}

#[tokio::test]
async fn get_published_of_unknown_id_is_not_published() {
    let ctx = build_default_context();
    let err = ctx
        .services
        .article_queries
        .get_published_article(GetPublishedArticleQuery { id: Uuid::new_v4() })
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::NotPublished(_)));
}

#[tokio::test]
async fn blank_title_is_rejected() {
    let ctx = build_default_context();
    let err = ctx
        .services
        .article_commands
        .create_article(
            profile(MODERATOR),
            CreateArticleCommand {
                fields: ArticleFieldsBuilder::new().title("   ").build(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApplicationError::Domain(newsdesk_core::domain::errors::DomainError::Validation(_))
    ));
    assert!(ctx.repo.is_empty());
}

/// 再公開すると公開者と日時が更新される
#[tokio::test]
async fn republish_restamps_publication() {
    let ctx = build_default_context();
    let id = ctx.create_published(ArticleFieldsBuilder::new().build()).await;
    let first = ctx
        .repo
        .find_by_id(ArticleId::new(id))
        .await
        .unwrap()
        .unwrap()
        .published_at()
        .unwrap();

    ctx.publish(id).await;
    let second = ctx
        .repo
        .find_by_id(ArticleId::new(id))
        .await
        .unwrap()
        .unwrap()
        .published_at()
        .unwrap();
    assert!(second > first);
}

#[tokio::test]
async fn update_returns_to_draft_and_resets_view_and_share_counters() {
    let ctx = build_default_context();
    let id = ctx.create_published(ArticleFieldsBuilder::new().build()).await;
    let article_id = ArticleId::new(id);

    for _ in 0..3 {
        assert!(
            ctx.services
                .article_commands
                .increment_view_count(article_id)
                .await
                .unwrap()
        );
    }
    ctx.services
        .article_commands
        .increment_share_count(article_id)
        .await
        .unwrap();
    ctx.services.article_commands.like(article_id).await.unwrap();

    let updated = ctx
        .services
        .article_commands
        .update_article(
            profile(MODERATOR),
            UpdateArticleCommand {
                id: article_id,
                fields: ArticleFieldsBuilder::new()
                    .title("Revised")
                    .content("New body")
                    .region(2)
                    .build(),
            },
        )
        .await
        .unwrap();
    assert!(updated);

    let stored = ctx.repo.find_by_id(article_id).await.unwrap().unwrap();
    assert_eq!(stored.status(), ArticleStatus::NotPublished);
    assert_eq!(stored.publisher_id(), None);
    assert_eq!(stored.published_at(), None);
    assert_eq!(stored.counters.view_count, 0);
    assert_eq!(stored.counters.shared_count, 0);
    assert_eq!(stored.counters.like_count, 1);
    assert_eq!(stored.title.as_str(), "Revised");
    assert_eq!(i64::from(stored.region_id), 2);
}

/// 存在しない公開者では公開できない
#[tokio::test]
async fn publishing_as_unknown_profile_is_not_found() {
    let ctx = build_default_context();
    let id = ArticleId::new(ctx.create(ArticleFieldsBuilder::new().build()).await);

    let err = ctx
        .services
        .article_commands
        .publish_article(profile(4242), PublishArticleCommand { id })
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    let stored = ctx.repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.status(), ArticleStatus::NotPublished);
}

#[tokio::test]
async fn update_of_missing_article_is_not_found() {
    let ctx = build_default_context();
    let err = ctx
        .services
        .article_commands
        .update_article(
            profile(MODERATOR),
            UpdateArticleCommand {
                id: ArticleId::generate(),
                fields: ArticleFieldsBuilder::new().build(),
            },
        )
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn view_count_grows_by_one_per_call() {
    let ctx = build_default_context();
    let id = ArticleId::new(ctx.create(ArticleFieldsBuilder::new().build()).await);

    for _ in 0..5 {
        ctx.services
            .article_commands
            .increment_view_count(id)
            .await
            .unwrap();
    }

    let stored = ctx.repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.counters.view_count, 5);
    assert_eq!(stored.counters.shared_count, 0);
}

#[tokio::test]
async fn engagement_on_missing_article_is_not_found() {
    let ctx = build_default_context();
    let missing = ArticleId::generate();
    let commands = &ctx.services.article_commands;

    assert!(commands.increment_view_count(missing).await.unwrap_err().is_not_found());
    assert!(commands.increment_share_count(missing).await.unwrap_err().is_not_found());
    assert!(commands.like(missing).await.unwrap_err().is_not_found());
    assert!(commands.dislike(missing).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn delete_removes_article_and_missing_id_is_not_found() {
    let ctx = build_default_context();
    let id = ArticleId::new(ctx.create(ArticleFieldsBuilder::new().build()).await);

    let err = ctx
        .services
        .article_commands
        .delete_article(DeleteArticleCommand {
            id: ArticleId::generate(),
        })
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    assert!(
        ctx.services
            .article_commands
            .delete_article(DeleteArticleCommand { id })
            .await
            .unwrap()
    );
    assert!(ctx.repo.find_by_id(id).await.unwrap().is_none());
}

#[tokio::test]
async fn like_like_remove_leaves_one() {
    let ctx = build_default_context();
    let id = ArticleId::new(ctx.create(ArticleFieldsBuilder::new().build()).await);
    let commands = &ctx.services.article_commands;

    commands.like(id).await.unwrap();
    commands.like(id).await.unwrap();
    commands.dislike(id).await.unwrap();
    commands
        .remove_reaction(RemoveReactionCommand {
            id,
            reaction: Reaction::Like,
        })
        .await
        .unwrap();

    let stored = ctx.repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.counters.like_count, 1);
    assert_eq!(stored.counters.dislike_count, 1);
}

/// 既定では減算に下限がない
#[tokio::test]
async fn unbounded_floor_allows_negative_counts() {
    let ctx = build_default_context();
    let id = ArticleId::new(ctx.create(ArticleFieldsBuilder::new().build()).await);

    ctx.services
        .article_commands
        .remove_reaction(RemoveReactionCommand {
            id,
            reaction: Reaction::Dislike,
        })
        .await
        .unwrap();

    let stored = ctx.repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.counters.dislike_count, -1);
}

#[tokio::test]
async fn clamp_floor_stops_at_zero() {
    let ctx = build_context(ArticlePolicies {
        reaction_floor: ReactionFloor::ClampAtZero,
        ..ArticlePolicies::default()
    });
    let id = ArticleId::new(ctx.create(ArticleFieldsBuilder::new().build()).await);

    for _ in 0..2 {
        ctx.services
            .article_commands
            .remove_reaction(RemoveReactionCommand {
                id,
                reaction: Reaction::Like,
            })
            .await
            .unwrap();
    }

    let stored = ctx.repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.counters.like_count, 0);
}
