//! Mall Service
//!
//! Query engine and the catalog service that wires collection sources to the
//! record store.

pub mod catalog;
pub mod query;

pub use catalog::{CatalogService, CatalogServiceError, CatalogServiceTrait, CollectOutcome};
pub use query::query;
