//! In-memory record store guarded by a single async RwLock

use std::collections::HashSet;
use std::sync::Arc;

use crate::traits::{MallStorage, Snapshot, Storage, StorageError, StorageResult, StorageStats};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mall_types::{CandidateMall, MallRecord};
use tokio::sync::RwLock;
use tracing::{debug, error, info};

/// Mutable state behind the lock. `records` is swapped wholesale on every
/// mutation so snapshots already handed out never change.
#[derive(Debug)]
struct StoreState {
	records: Snapshot,
	next_id: u64,
	/// Set once `u64::MAX` has been handed out
	ids_exhausted: bool,
	last_collected_at: Option<DateTime<Utc>>,
}

impl Default for StoreState {
	fn default() -> Self {
		Self {
			records: Arc::from(Vec::new()),
			next_id: 1,
			ids_exhausted: false,
			last_collected_at: None,
		}
	}
}

/// In-memory storage for mall records.
///
/// The id counter starts at 1 and is never reset: `clear` keeps it, and a
/// replace only ever raises it past the ids it hands out.
#[derive(Clone, Default)]
pub struct MemoryStore {
	state: Arc<RwLock<StoreState>>,
}

impl MemoryStore {
	/// Create a new memory store instance
	pub fn new() -> Self {
		Self::default()
	}

	/// Id the next appended record will receive
	pub async fn next_id(&self) -> u64 {
		self.state.read().await.next_id
	}
}

fn validate_batch(candidates: &[CandidateMall], keyword: &str) -> StorageResult<()> {
	if keyword.trim().is_empty() {
		return Err(StorageError::invalid_argument("keyword must not be empty"));
	}
	if let Some(pos) = candidates.iter().position(|c| c.name.trim().is_empty()) {
		return Err(StorageError::invalid_argument(format!(
			"candidate at position {} has an empty name",
			pos
		)));
	}
	Ok(())
}

fn counter_overflow() -> StorageError {
	error!("Mall id counter overflowed");
	StorageError::inconsistency("id counter overflow")
}

fn ensure_unique_ids(records: &[MallRecord]) -> StorageResult<()> {
	let mut seen = HashSet::with_capacity(records.len());
	for record in records {
		if !seen.insert(record.id) {
			error!(
				id = record.id,
				"Duplicate mall id detected; refusing to publish snapshot"
			);
			return Err(StorageError::inconsistency(format!(
				"duplicate id {} in snapshot",
				record.id
			)));
		}
	}
	Ok(())
}

#[async_trait]
impl MallStorage for MemoryStore {
	async fn ingest_replace(
		&self,
		candidates: Vec<CandidateMall>,
		keyword: &str,
		collected_at: DateTime<Utc>,
	) -> StorageResult<Vec<MallRecord>> {
		validate_batch(&candidates, keyword)?;
		let keyword = keyword.trim();

		let inserted: Vec<MallRecord> = candidates
			.into_iter()
			.zip(1u64..)
			.map(|(candidate, id)| candidate.into_record(id, keyword, collected_at))
			.collect();
		ensure_unique_ids(&inserted)?;

		let mut state = self.state.write().await;
		let first_free = inserted.len() as u64 + 1;
		let replaced = state.records.len();

		state.records = Arc::from(inserted.clone());
		state.next_id = state.next_id.max(first_free);
		state.last_collected_at = Some(collected_at);

		info!(
			keyword,
			inserted = inserted.len(),
			replaced,
			"Replaced mall records"
		);
		Ok(inserted)
	}

	async fn ingest_append(
		&self,
		candidates: Vec<CandidateMall>,
		keyword: &str,
		collected_at: DateTime<Utc>,
	) -> StorageResult<Vec<MallRecord>> {
		validate_batch(&candidates, keyword)?;
		let keyword = keyword.trim();

		let mut state = self.state.write().await;

		let count = candidates.len() as u64;
		let first_id = state.next_id;
		let last_id = match count {
			0 => None,
			_ if state.ids_exhausted => return Err(counter_overflow()),
			n => Some(first_id.checked_add(n - 1).ok_or_else(counter_overflow)?),
		};

		let inserted: Vec<MallRecord> = match last_id {
			Some(last_id) => candidates
				.into_iter()
				.zip(first_id..=last_id)
				.map(|(candidate, id)| candidate.into_record(id, keyword, collected_at))
				.collect(),
			None => Vec::new(),
		};

		let mut records = Vec::with_capacity(state.records.len() + inserted.len());
		records.extend_from_slice(&state.records);
		records.extend(inserted.iter().cloned());
		ensure_unique_ids(&records)?;

		state.records = Arc::from(records);
		if let Some(last_id) = last_id {
			match last_id.checked_add(1) {
				Some(next_id) => state.next_id = next_id,
				None => {
					state.next_id = u64::MAX;
					state.ids_exhausted = true;
				},
			}
		}
		state.last_collected_at = Some(collected_at);

		info!(
			keyword,
			inserted = inserted.len(),
			total = state.records.len(),
			"Appended mall records"
		);
		Ok(inserted)
	}

	async fn clear(&self) -> StorageResult<usize> {
		let mut state = self.state.write().await;
		let removed = state.records.len();
		state.records = Arc::from(Vec::new());

		info!(removed, next_id = state.next_id, "Cleared mall records");
		Ok(removed)
	}

	async fn snapshot(&self) -> StorageResult<Snapshot> {
		let snapshot = Arc::clone(&self.state.read().await.records);
		debug!("Took snapshot of {} mall records", snapshot.len());
		Ok(snapshot)
	}

	async fn count(&self) -> StorageResult<usize> {
		Ok(self.state.read().await.records.len())
	}
}

#[async_trait]
impl Storage for MemoryStore {
	async fn health_check(&self) -> StorageResult<bool> {
		// For in-memory storage, just check the lock is reachable
		let _ = self.state.read().await;
		Ok(true)
	}

	async fn stats(&self) -> StorageResult<StorageStats> {
		let state = self.state.read().await;
		Ok(StorageStats {
			total_records: state.records.len(),
			next_id: state.next_id,
			last_collected_at: state.last_collected_at,
		})
	}

	async fn close(&self) -> StorageResult<()> {
		// For memory store, there's nothing to close
		Ok(())
	}
}
