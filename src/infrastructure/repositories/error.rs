// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_ARTICLE_PUBLICATION_CHECK: &str = "articles_publication_consistency_chk";
const CNT_ARTICLE_STATUS_CHECK: &str = "articles_status_chk";
const CNT_ARTICLE_TYPE: &str = "articles_article_type_id_fkey";
const CNT_ARTICLE_REGION: &str = "articles_region_id_fkey";
const CNT_ARTICLE_MODERATOR: &str = "articles_moderator_id_fkey";
const CNT_ARTICLE_PUBLISHER: &str = "articles_publisher_id_fkey";
const CNT_ARTICLE_IMAGE: &str = "articles_image_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(mapped) = db_err.constraint().and_then(map_constraint) {
                return mapped;
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

/// Known constraint names from the migrations. Anything else is left to the
/// SQLSTATE code.
fn map_constraint(constraint: &str) -> Option<DomainError> {
    let mapped = match constraint {
        CNT_ARTICLE_TYPE => DomainError::NotFound("article type not found".into()),
        CNT_ARTICLE_REGION => DomainError::NotFound("region not found".into()),
        CNT_ARTICLE_MODERATOR | CNT_ARTICLE_PUBLISHER => {
            DomainError::NotFound("profile not found".into())
        }
        CNT_ARTICLE_IMAGE => DomainError::NotFound("attachment not found".into()),
        CNT_ARTICLE_PUBLICATION_CHECK => DomainError::Validation(
            "published articles require publisher and published_at".into(),
        ),
        CNT_ARTICLE_STATUS_CHECK => DomainError::Validation("unknown article status".into()),
        _ => return None,
    };
    Some(mapped)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INIT_MIGRATION: &str = include_str!("../../../migrations/0001_init.sql");

    fn declared_constraints(suffix: &str) -> Vec<&'static str> {
        INIT_MIGRATION
            .split_whitespace()
            .filter(|word| word.starts_with("articles_") && word.ends_with(suffix))
            .collect()
    }

    #[test]
    fn every_article_foreign_key_maps_to_not_found() {
        let fkeys = declared_constraints("_fkey");
        assert_eq!(fkeys.len(), 5, "unexpected foreign keys: {fkeys:?}");
        for name in fkeys {
            assert!(
                matches!(map_constraint(name), Some(DomainError::NotFound(_))),
                "{name} is not mapped to NotFound"
            );
        }
    }

    #[test]
    fn unknown_publisher_is_a_missing_profile() {
        let err = map_constraint("articles_publisher_id_fkey").unwrap();
        assert!(matches!(err, DomainError::NotFound(ref msg) if msg == "profile not found"));
    }

    #[test]
    fn every_article_check_maps_to_validation() {
        for name in declared_constraints("_chk") {
            assert!(
                matches!(map_constraint(name), Some(DomainError::Validation(_))),
                "{name} is not mapped to Validation"
            );
        }
    }

    #[test]
    fn unrecognised_constraints_are_left_to_sqlstate() {
        assert!(map_constraint("regions_key_key").is_none());
    }
}
