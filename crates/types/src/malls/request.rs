//! Request models for the mall API

use serde::{Deserialize, Serialize};

use super::{IngestMode, MallValidationError, MallValidationResult, SortBy};

/// Upper price bound applied when a caller omits `max_price`
pub const DEFAULT_MAX_PRICE: u64 = 999_999_999;

/// Body of a collection request
///
/// Price bounds are validated but do not influence which records are produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CollectRequest {
	pub keyword: String,
	#[serde(default, alias = "minPrice")]
	pub min_price: Option<u64>,
	#[serde(default, alias = "maxPrice")]
	pub max_price: Option<u64>,
	/// Overrides the deployment's default ingestion policy
	#[serde(default)]
	pub mode: Option<IngestMode>,
}

impl CollectRequest {
	pub fn new(keyword: impl Into<String>) -> Self {
		Self {
			keyword: keyword.into(),
			min_price: None,
			max_price: None,
			mode: None,
		}
	}

	pub fn with_mode(mut self, mode: IngestMode) -> Self {
		self.mode = Some(mode);
		self
	}

	pub fn with_price_range(mut self, min: u64, max: u64) -> Self {
		self.min_price = Some(min);
		self.max_price = Some(max);
		self
	}

	pub fn validate(&self) -> MallValidationResult<()> {
		if self.keyword.trim().is_empty() {
			return Err(MallValidationError::EmptyKeyword);
		}

		let min = self.min_price.unwrap_or(0);
		let max = self.max_price.unwrap_or(DEFAULT_MAX_PRICE);
		if min > max {
			return Err(MallValidationError::InvalidPriceRange { min, max });
		}

		Ok(())
	}

	/// Keyword with surrounding whitespace removed
	pub fn normalized_keyword(&self) -> &str {
		self.keyword.trim()
	}
}

/// Query string of `GET /api/malls`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListMallsQuery {
	#[serde(default, rename = "sortBy", alias = "sort_by")]
	pub sort_by: Option<String>,
	#[serde(default)]
	pub keyword: Option<String>,
}

impl ListMallsQuery {
	pub fn sort_by(&self) -> MallValidationResult<SortBy> {
		match self.sort_by.as_deref() {
			Some(raw) => raw.parse(),
			None => Ok(SortBy::default()),
		}
	}

	/// The keyword filter, or `None` when absent or empty
	pub fn keyword_filter(&self) -> Option<&str> {
		self.keyword.as_deref().filter(|k| !k.is_empty())
	}
}
