//! Catalog service
//!
//! Runs collection requests through a source into the store, and answers
//! listing requests through the query engine.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mall_storage::traits::MallStorage;
use mall_storage::Storage;
use mall_types::{
	CollectRequest, CollectionSource, IngestMode, MallRecord, MallValidationError, SortBy,
	SourceError, StorageError,
};
use thiserror::Error;
use tracing::{debug, error, info};

use crate::query::query;

#[derive(Debug, Error)]
pub enum CatalogServiceError {
	#[error("validation error: {0}")]
	Validation(String),
	#[error("source error: {0}")]
	Source(String),
	#[error("storage error: {0}")]
	Storage(String),
	#[error("internal inconsistency: {0}")]
	Inconsistency(String),
}

impl From<MallValidationError> for CatalogServiceError {
	fn from(e: MallValidationError) -> Self {
		Self::Validation(e.to_string())
	}
}

impl From<StorageError> for CatalogServiceError {
	fn from(e: StorageError) -> Self {
		match e {
			StorageError::InvalidArgument { message } => Self::Validation(message),
			StorageError::InternalInconsistency { message } => Self::Inconsistency(message),
			StorageError::Operation { .. } => Self::Storage(e.to_string()),
		}
	}
}

impl From<SourceError> for CatalogServiceError {
	fn from(e: SourceError) -> Self {
		match e {
			SourceError::InvalidKeyword { reason, .. } => Self::Validation(reason),
			SourceError::Unavailable { .. } => Self::Source(e.to_string()),
		}
	}
}

/// Result of one collection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectOutcome {
	pub inserted: Vec<MallRecord>,
	/// Records held by the store once the run committed
	pub total: usize,
	pub keyword: String,
	pub mode: IngestMode,
	pub collected_at: DateTime<Utc>,
}

#[async_trait]
pub trait CatalogServiceTrait: Send + Sync {
	/// Validate, fetch candidates for the keyword and ingest them
	async fn collect(&self, request: CollectRequest) -> Result<CollectOutcome, CatalogServiceError>;

	/// Filtered and sorted view of the current records
	async fn list(
		&self,
		keyword_filter: Option<String>,
		sort_by: SortBy,
	) -> Result<Vec<MallRecord>, CatalogServiceError>;

	/// Remove all records, returning how many were removed
	async fn clear(&self) -> Result<usize, CatalogServiceError>;

	/// Policy used when a request does not name one
	fn default_mode(&self) -> IngestMode;
}

#[derive(Clone)]
pub struct CatalogService {
	storage: Arc<dyn Storage>,
	source: Arc<dyn CollectionSource>,
	default_mode: IngestMode,
}

impl CatalogService {
	pub fn new(
		storage: Arc<dyn Storage>,
		source: Arc<dyn CollectionSource>,
		default_mode: IngestMode,
	) -> Self {
		Self {
			storage,
			source,
			default_mode,
		}
	}
}

#[async_trait]
impl CatalogServiceTrait for CatalogService {
	async fn collect(
		&self,
		request: CollectRequest,
	) -> Result<CollectOutcome, CatalogServiceError> {
		request.validate()?;

		let keyword = request.normalized_keyword().to_string();
		let mode = request.mode.unwrap_or(self.default_mode);

		let candidates = self.source.fetch(&keyword).await?;
		debug!(
			source = self.source.id(),
			keyword = %keyword,
			candidates = candidates.len(),
			"Fetched candidates"
		);

		let collected_at = Utc::now();
		let inserted = self
			.storage
			.ingest(mode, candidates, &keyword, collected_at)
			.await
			.map_err(|e| {
				if let StorageError::InternalInconsistency { message } = &e {
					error!("Record store inconsistency during {} ingestion: {}", mode, message);
				}
				CatalogServiceError::from(e)
			})?;
		let total = self.storage.count().await?;

		info!(
			"Collected {} malls for keyword '{}' ({} mode, {} total)",
			inserted.len(),
			keyword,
			mode,
			total
		);

		Ok(CollectOutcome {
			inserted,
			total,
			keyword,
			mode,
			collected_at,
		})
	}

	async fn list(
		&self,
		keyword_filter: Option<String>,
		sort_by: SortBy,
	) -> Result<Vec<MallRecord>, CatalogServiceError> {
		let snapshot = self.storage.snapshot().await?;
		let view = query(&snapshot, keyword_filter.as_deref(), sort_by);
		debug!(
			"Listing {} of {} malls (sortBy={}, keyword={:?})",
			view.len(),
			snapshot.len(),
			sort_by,
			keyword_filter
		);
		Ok(view)
	}

	async fn clear(&self) -> Result<usize, CatalogServiceError> {
		let removed = self.storage.clear().await?;
		info!("Cleared {} malls", removed);
		Ok(removed)
	}

	fn default_mode(&self) -> IngestMode {
		self.default_mode
	}
}
