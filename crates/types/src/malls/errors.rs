//! Error types for mall requests

use thiserror::Error;

/// Validation errors for collection and listing requests
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MallValidationError {
	#[error("keyword must not be empty")]
	EmptyKeyword,

	#[error("Invalid price range: min_price {min} is greater than max_price {max}")]
	InvalidPriceRange { min: u64, max: u64 },

	#[error("Invalid sortBy value '{value}' (expected recent, oldest or name)")]
	InvalidSortBy { value: String },

	#[error("Invalid ingest mode '{value}' (expected replace or append)")]
	InvalidIngestMode { value: String },
}

pub type MallValidationResult<T> = Result<T, MallValidationError>;
