// src/infrastructure/references/memory.rs
use crate::application::ports::resolvers::{
    ArticleTypeResolver, AttachmentResolver, ProfileResolver, RegionResolver,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::reference::{
    ArticleType, ArticleTypeId, Attachment, AttachmentId, Profile, ProfileId, Region, RegionId,
    RegionKey,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Default)]
struct Catalog {
    regions: HashMap<RegionId, Region>,
    profiles: HashMap<ProfileId, Profile>,
    article_types: HashMap<ArticleTypeId, ArticleType>,
    attachments: HashMap<AttachmentId, Attachment>,
}

/// Reference data held in memory; implements every resolver port.
#[derive(Default)]
pub struct InMemoryReferenceCatalog {
    inner: RwLock<Catalog>,
    attachment_base_url: String,
}

impl InMemoryReferenceCatalog {
    pub fn new(attachment_base_url: impl Into<String>) -> Self {
        Self {
            inner: RwLock::new(Catalog::default()),
            attachment_base_url: attachment_base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// A small catalog for running the service without a database.
    pub fn seeded(attachment_base_url: impl Into<String>) -> DomainResult<Self> {
        let catalog = Self::new(attachment_base_url);
        catalog.add_region(1, "tashkent", "Tashkent")?;
        catalog.add_region(2, "samarkand", "Samarkand")?;
        catalog.add_region(3, "bukhara", "Bukhara")?;
        catalog.add_article_type(1, "local", "Local news")?;
        catalog.add_article_type(2, "world", "World")?;
        catalog.add_article_type(3, "sport", "Sport")?;
        catalog.add_profile(1, "Admin", "Newsroom")?;
        catalog.add_attachment("default", "default", "jpg")?;
        Ok(catalog)
    }

    pub fn add_region(&self, id: i64, key: &str, name: &str) -> DomainResult<Region> {
        let region = Region {
            id: RegionId::new(id)?,
            key: RegionKey::new(key)?,
            name: name.to_string(),
        };
        self.write()?.regions.insert(region.id, region.clone());
        Ok(region)
    }

    pub fn add_profile(&self, id: i64, name: &str, surname: &str) -> DomainResult<Profile> {
        let profile = Profile {
            id: ProfileId::new(id)?,
            name: name.to_string(),
            surname: surname.to_string(),
        };
        self.write()?.profiles.insert(profile.id, profile.clone());
        Ok(profile)
    }

    pub fn add_article_type(&self, id: i64, key: &str, name: &str) -> DomainResult<ArticleType> {
        let article_type = ArticleType {
            id: ArticleTypeId::new(id)?,
            key: key.to_string(),
            name: name.to_string(),
        };
        self.write()?
            .article_types
            .insert(article_type.id, article_type.clone());
        Ok(article_type)
    }

    pub fn add_attachment(
        &self,
        id: &str,
        original_name: &str,
        extension: &str,
    ) -> DomainResult<Attachment> {
        let attachment = Attachment {
            id: AttachmentId::new(id)?,
            original_name: original_name.to_string(),
            extension: extension.to_string(),
            url: format!("{}/{id}", self.attachment_base_url),
        };
        self.write()?
            .attachments
            .insert(attachment.id.clone(), attachment.clone());
        Ok(attachment)
    }

    fn read(&self) -> DomainResult<std::sync::RwLockReadGuard<'_, Catalog>> {
        self.inner
            .read()
            .map_err(|_| DomainError::Persistence("reference catalog lock poisoned".into()))
    }

    fn write(&self) -> DomainResult<std::sync::RwLockWriteGuard<'_, Catalog>> {
        self.inner
            .write()
            .map_err(|_| DomainError::Persistence("reference catalog lock poisoned".into()))
    }
}

#[async_trait]
impl RegionResolver for InMemoryReferenceCatalog {
    async fn by_key(&self, key: &RegionKey) -> DomainResult<Region> {
        self.read()?
            .regions
            .values()
            .find(|region| &region.key == key)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("region '{key}' not found")))
    }

    async fn by_id(&self, id: RegionId) -> DomainResult<Region> {
        self.read()?
            .regions
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("region {id} not found")))
    }
}

#[async_trait]
impl ProfileResolver for InMemoryReferenceCatalog {
    async fn by_id(&self, id: ProfileId) -> DomainResult<Profile> {
        self.read()?
            .profiles
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("profile {id} not found")))
    }
}

#[async_trait]
impl ArticleTypeResolver for InMemoryReferenceCatalog {
    async fn by_id(&self, id: ArticleTypeId) -> DomainResult<ArticleType> {
        self.read()?
            .article_types
            .get(&id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("article type {id} not found")))
    }
}

#[async_trait]
impl AttachmentResolver for InMemoryReferenceCatalog {
    async fn by_id(&self, id: &AttachmentId) -> DomainResult<Attachment> {
        self.read()?
            .attachments
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::NotFound(format!("attachment {id} not found")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_catalog_resolves_by_key_and_id() {
        let catalog = InMemoryReferenceCatalog::seeded("http://cdn.test/").unwrap();
        let region = RegionResolver::by_key(&catalog, &RegionKey::new("samarkand").unwrap())
            .await
            .unwrap();
        assert_eq!(i64::from(region.id), 2);

        let image = AttachmentResolver::by_id(&catalog, &AttachmentId::new("default").unwrap())
            .await
            .unwrap();
        assert_eq!(image.url, "http://cdn.test/default");
    }

    #[tokio::test]
    async fn unknown_ids_are_not_found() {
        let catalog = InMemoryReferenceCatalog::new("http://cdn.test");
        let err = ProfileResolver::by_id(&catalog, ProfileId::new(9).unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
