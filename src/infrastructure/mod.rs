// src/infrastructure/mod.rs
pub mod database;
pub mod references;
pub mod repositories;
pub mod time;
