//! Collection source seam
//!
//! A collection source turns a keyword into candidate records. The store never
//! knows where candidates come from.

pub mod errors;
pub mod traits;

pub use errors::{SourceError, SourceResult};
pub use traits::CollectionSource;
