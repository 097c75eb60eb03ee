// src/config.rs
use crate::domain::article::{ArticleRanking, ReactionFloor};
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct AppConfig {
    database_url: Option<String>,
    listen_addr: String,
    attachment_base_url: String,
    allowed_origins: Vec<String>,
    ranking: ArticleRanking,
    reaction_floor: ReactionFloor,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_listen_addr() -> String {
    "127.0.0.1:8080".into()
}

fn default_attachment_base_url() -> String {
    "http://localhost:8080/attachments".into()
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".into()]
}

impl AppConfig {
    /// Build configuration from environment variables. Uses defaults for
    /// everything; `DATABASE_URL` being unset selects the in-memory backend.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        let listen_addr = env::var("LISTEN_ADDR").unwrap_or_else(|_| default_listen_addr());
        let attachment_base_url =
            env::var("ATTACHMENT_BASE_URL").unwrap_or_else(|_| default_attachment_base_url());

        let allowed_origins = env::var("ALLOWED_ORIGINS")
            .ok()
            .map(|s| s.split(',').map(|p| p.trim().to_string()).collect())
            .unwrap_or_else(default_allowed_origins);

        let ranking = match env::var("TOP_ARTICLES_RANKING") {
            Ok(value) => value.parse().map_err(|_| {
                ConfigError::Invalid(format!(
                    "TOP_ARTICLES_RANKING must be 'recent' or 'views', got '{value}'"
                ))
            })?,
            Err(_) => ArticleRanking::default(),
        };

        let reaction_floor = match env::var("REACTION_FLOOR") {
            Ok(value) => value.parse().map_err(|_| {
                ConfigError::Invalid(format!(
                    "REACTION_FLOOR must be 'unbounded' or 'clamp', got '{value}'"
                ))
            })?,
            Err(_) => ReactionFloor::default(),
        };

        Ok(Self {
            database_url,
            listen_addr,
            attachment_base_url,
            allowed_origins,
            ranking,
            reaction_floor,
        })
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn attachment_base_url(&self) -> &str {
        &self.attachment_base_url
    }

    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn ranking(&self) -> ArticleRanking {
        self.ranking
    }

    pub fn reaction_floor(&self) -> ReactionFloor {
        self.reaction_floor
    }
}
