//! Persistence layer for the catalog file

pub mod catalog;

pub use catalog::{CatalogData, CatalogRepository};
