// tests/support/mocks.rs
use async_trait::async_trait;
use newsdesk_core::application::ports::resolvers::AttachmentResolver;
use newsdesk_core::domain::errors::{DomainError, DomainResult};
use newsdesk_core::domain::reference::{Attachment, AttachmentId};

/// Attachment store that has lost every file.
pub struct MissingAttachments;

#[async_trait]
impl AttachmentResolver for MissingAttachments {
    async fn by_id(&self, id: &AttachmentId) -> DomainResult<Attachment> {
        Err(DomainError::NotFound(format!("attachment {id} not found")))
    }
}
