// src/application/queries/listings/short_form.rs
use super::ArticleListingService;
use crate::{
    application::{dto::ArticleShortDto, error::ApplicationResult},
    domain::article::ArticleProjectionRow,
};

impl ArticleListingService {
    /// One attachment lookup per row, in row order. Any failed lookup fails
    /// the whole listing.
    pub(super) async fn assemble(
        &self,
        rows: Vec<ArticleProjectionRow>,
    ) -> ApplicationResult<Vec<ArticleShortDto>> {
        let mut items = Vec::with_capacity(rows.len());
        for row in rows {
            let image = self.attachments.by_id(&row.image_id).await?;
            items.push(ArticleShortDto::from_row(row, image.into()));
        }
        tracing::debug!(count = items.len(), "listing assembled");
        Ok(items)
    }
}
