//! Mall Sources
//!
//! Collection sources for the mall catalog service.

pub mod template_source;

pub use mall_types::{CandidateMall, CollectionSource, SourceError, SourceResult};
pub use template_source::TemplateSource;
