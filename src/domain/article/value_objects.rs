// src/domain/article/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArticleId(Uuid);

impl ArticleId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl FromStr for ArticleId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| DomainError::Validation(format!("invalid article id '{s}'")))
    }
}

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<ArticleId> for Uuid {
    fn from(value: ArticleId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleTitle(String);

impl ArticleTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("title cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleContent(String);

impl ArticleContent {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("content cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ArticleContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArticleStatus {
    NotPublished,
    Published,
}

impl ArticleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArticleStatus::NotPublished => "NOT_PUBLISHED",
            ArticleStatus::Published => "PUBLISHED",
        }
    }
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArticleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "NOT_PUBLISHED" => Ok(ArticleStatus::NotPublished),
            "PUBLISHED" => Ok(ArticleStatus::Published),
            other => Err(DomainError::Validation(format!(
                "unknown article status '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reaction {
    Like,
    Dislike,
}

impl Reaction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Reaction::Like => "like",
            Reaction::Dislike => "dislike",
        }
    }
}

impl fmt::Display for Reaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Reaction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "like" => Ok(Reaction::Like),
            "dislike" => Ok(Reaction::Dislike),
            other => Err(DomainError::Validation(format!("unknown reaction '{other}'"))),
        }
    }
}

/// What happens when a reaction is withdrawn from a counter that is already zero.
///
/// `Unbounded` decrements unconditionally, so an unmatched withdrawal drives the
/// counter negative. `ClampAtZero` leaves a zero counter untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReactionFloor {
    #[default]
    Unbounded,
    ClampAtZero,
}

impl FromStr for ReactionFloor {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "unbounded" => Ok(ReactionFloor::Unbounded),
            "clamp" | "clamp_at_zero" => Ok(ReactionFloor::ClampAtZero),
            other => Err(DomainError::Validation(format!(
                "unknown reaction floor '{other}'"
            ))),
        }
    }
}

/// Ordering applied by the store to the overall "top" listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArticleRanking {
    #[default]
    MostRecent,
    MostViewed,
}

impl FromStr for ArticleRanking {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "recent" | "most_recent" => Ok(ArticleRanking::MostRecent),
            "views" | "most_viewed" => Ok(ArticleRanking::MostViewed),
            other => Err(DomainError::Validation(format!(
                "unknown article ranking '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_rejects_blank() {
        assert!(ArticleTitle::new("   ").is_err());
        assert_eq!(ArticleTitle::new("T").unwrap().as_str(), "T");
    }

    #[test]
    fn status_round_trips_through_str() {
        for status in [ArticleStatus::NotPublished, ArticleStatus::Published] {
            assert_eq!(status.as_str().parse::<ArticleStatus>().unwrap(), status);
        }
        assert!("DRAFT".parse::<ArticleStatus>().is_err());
    }

    #[test]
    fn reaction_parse_is_case_insensitive() {
        assert_eq!("LIKE".parse::<Reaction>().unwrap(), Reaction::Like);
        assert_eq!("dislike".parse::<Reaction>().unwrap(), Reaction::Dislike);
        assert!("love".parse::<Reaction>().is_err());
    }

    #[test]
    fn article_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<ArticleId>().is_err());
        let id = ArticleId::generate();
        assert_eq!(id.to_string().parse::<ArticleId>().unwrap(), id);
    }

    #[test]
    fn policies_parse_config_spellings() {
        assert_eq!(
            "clamp".parse::<ReactionFloor>().unwrap(),
            ReactionFloor::ClampAtZero
        );
        assert_eq!(
            "views".parse::<ArticleRanking>().unwrap(),
            ArticleRanking::MostViewed
        );
        assert_eq!(ArticleRanking::default(), ArticleRanking::MostRecent);
    }
}
