//! Error types for storage operations

use thiserror::Error;

/// Storage error type
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
	/// Caller supplied input the store refuses to ingest
	#[error("Invalid argument: {message}")]
	InvalidArgument { message: String },
	/// The store detected a broken invariant such as a duplicate id
	#[error("Internal inconsistency: {message}")]
	InternalInconsistency { message: String },
	#[error("Storage operation failed: {message}")]
	Operation { message: String },
}

impl StorageError {
	pub fn invalid_argument(message: impl Into<String>) -> Self {
		Self::InvalidArgument {
			message: message.into(),
		}
	}

	pub fn inconsistency(message: impl Into<String>) -> Self {
		Self::InternalInconsistency {
			message: message.into(),
		}
	}
}

pub type StorageResult<T> = Result<T, StorageError>;
