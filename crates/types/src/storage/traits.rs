//! Storage traits for pluggable record store implementations

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use super::StorageResult;
use crate::{CandidateMall, IngestMode, MallRecord};

/// Immutable view of the store's records at one point in time
pub type Snapshot = Arc<[MallRecord]>;

/// Statistics about storage usage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageStats {
	pub total_records: usize,
	/// Id the next appended record will receive
	pub next_id: u64,
	pub last_collected_at: Option<DateTime<Utc>>,
}

/// Trait for mall record storage operations
///
/// Every mutation is all-or-nothing: on error the previous snapshot stays in
/// place and concurrent readers never observe a partial batch.
#[async_trait]
pub trait MallStorageTrait: Send + Sync {
	/// Discard all records and store `candidates` with ids `1..=N`
	async fn ingest_replace(
		&self,
		candidates: Vec<CandidateMall>,
		keyword: &str,
		collected_at: DateTime<Utc>,
	) -> StorageResult<Vec<MallRecord>>;

	/// Append `candidates` with ids drawn from the running counter
	async fn ingest_append(
		&self,
		candidates: Vec<CandidateMall>,
		keyword: &str,
		collected_at: DateTime<Utc>,
	) -> StorageResult<Vec<MallRecord>>;

	/// Ingest using the given policy
	async fn ingest(
		&self,
		mode: IngestMode,
		candidates: Vec<CandidateMall>,
		keyword: &str,
		collected_at: DateTime<Utc>,
	) -> StorageResult<Vec<MallRecord>> {
		match mode {
			IngestMode::Replace => self.ingest_replace(candidates, keyword, collected_at).await,
			IngestMode::Append => self.ingest_append(candidates, keyword, collected_at).await,
		}
	}

	/// Remove every record, returning how many were removed
	async fn clear(&self) -> StorageResult<usize>;

	/// Current records in insertion order
	async fn snapshot(&self) -> StorageResult<Snapshot>;

	/// Number of records currently held
	async fn count(&self) -> StorageResult<usize>;
}

/// Main storage trait combining record operations with lifecycle hooks
#[async_trait]
pub trait StorageTrait: MallStorageTrait {
	/// Health check for the storage system
	async fn health_check(&self) -> StorageResult<bool>;

	/// Get overall storage statistics
	async fn stats(&self) -> StorageResult<StorageStats>;

	/// Close the storage
	async fn close(&self) -> StorageResult<()>;
}
