// src/domain/reference/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

macro_rules! positive_id {
    ($name:ident, $label:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(i64);

        impl $name {
            pub fn new(id: i64) -> DomainResult<Self> {
                if id <= 0 {
                    Err(DomainError::Validation(
                        concat!($label, " id must be positive").into(),
                    ))
                } else {
                    Ok(Self(id))
                }
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

positive_id!(ProfileId, "profile");
positive_id!(ArticleTypeId, "article type");
positive_id!(RegionId, "region");

/// Human-readable region identifier used in public URLs, e.g. `tashkent`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegionKey(String);

impl RegionKey {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("region key cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AttachmentId(String);

impl AttachmentId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation(
                "attachment id cannot be empty".into(),
            ));
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

impl fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_must_be_positive() {
        assert!(ProfileId::new(0).is_err());
        assert!(RegionId::new(-3).is_err());
        assert_eq!(i64::from(ArticleTypeId::new(4).unwrap()), 4);
    }

    #[test]
    fn keys_reject_blank_values() {
        assert!(RegionKey::new(" ").is_err());
        assert!(AttachmentId::new("").is_err());
        assert_eq!(RegionKey::new("tashkent").unwrap().as_str(), "tashkent");
    }
}
