use anyhow::Result;
use newsdesk_core::application::{
    ports::time::Clock,
    services::{ApplicationServices, ArticlePolicies, ReferenceResolvers},
};
use newsdesk_core::config::AppConfig;
use newsdesk_core::domain::article::ArticleRepository;
use newsdesk_core::infrastructure::{
    database,
    references::{InMemoryReferenceCatalog, PostgresReferenceResolver},
    repositories::{InMemoryArticleRepository, PostgresArticleRepository},
    time::SystemClock,
};
use newsdesk_core::presentation::http::{routes::build_router, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let (article_repo, resolvers) = match config.database_url() {
        Some(url) => {
            let pool = database::init_pool(url).await?;
            database::run_migrations(&pool).await?;
            tracing::info!("using postgres storage");

            let references = Arc::new(PostgresReferenceResolver::new(
                pool.clone(),
                config.attachment_base_url(),
            ));
            let repo: Arc<dyn ArticleRepository> = Arc::new(PostgresArticleRepository::new(pool));
            (repo, ReferenceResolvers::shared(references))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory storage");
            let references = Arc::new(InMemoryReferenceCatalog::seeded(
                config.attachment_base_url(),
            )?);
            let repo: Arc<dyn ArticleRepository> = Arc::new(InMemoryArticleRepository::new());
            (repo, ReferenceResolvers::shared(references))
        }
    };

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let policies = ArticlePolicies {
        ranking: config.ranking(),
        reaction_floor: config.reaction_floor(),
    };
    tracing::info!(ranking = ?policies.ranking, reaction_floor = ?policies.reaction_floor, "article policies");

    let services = Arc::new(ApplicationServices::new(
        article_repo,
        resolvers,
        clock,
        policies,
    ));

    let state = HttpState {
        services: Arc::clone(&services),
    };

    let app = build_router(state, config.allowed_origins());

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
