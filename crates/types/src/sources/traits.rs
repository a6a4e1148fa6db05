//! Core collection source trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::SourceResult;
use crate::CandidateMall;

/// Produces candidate mall records for a keyword
///
/// Implementations must not touch the record store; the caller decides how
/// the candidates are ingested.
#[async_trait]
pub trait CollectionSource: Send + Sync + Debug {
	/// Identifier used in logs and errors
	fn id(&self) -> &str;

	/// Fetch candidates for `keyword`, in the order they should be numbered
	async fn fetch(&self, keyword: &str) -> SourceResult<Vec<CandidateMall>>;
}
