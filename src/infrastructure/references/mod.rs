// src/infrastructure/references/mod.rs
mod memory;
mod postgres;

pub use memory::InMemoryReferenceCatalog;
pub use postgres::PostgresReferenceResolver;
