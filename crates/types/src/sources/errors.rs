//! Error types for collection sources

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
	#[error("Source {source_id} rejected keyword: {reason}")]
	InvalidKeyword { source_id: String, reason: String },

	#[error("Source {source_id} unavailable: {reason}")]
	Unavailable { source_id: String, reason: String },
}

pub type SourceResult<T> = Result<T, SourceError>;
