// src/application/queries/listings/mod.rs
mod by_region;
mod by_type;
mod curated;
mod service;
mod short_form;

pub use by_region::{PageByRegionQuery, RegionalLatestQuery, RelatedInRegionQuery};
pub use by_type::{LatestByTypeQuery, RelatedByTypeQuery};
pub use curated::CuratedQuery;
pub use service::ArticleListingService;
