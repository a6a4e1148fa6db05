//! Mall Types
//!
//! Shared models and traits for the mall catalog service.
//! Domain records, API request/response shapes, and the storage and
//! collection-source seams live here so every other crate can depend on them
//! without cycles.

pub mod malls;
pub mod sources;
pub mod storage;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

pub use malls::{
	CandidateMall, ClearResponse, CollectRequest, CollectResponse, HealthResponse, IngestMode,
	ListMallsQuery, MallRecord, MallResponse, MallValidationError, SortBy,
};

pub use sources::{CollectionSource, SourceError, SourceResult};

pub use storage::{
	MallStorageTrait, Snapshot, StorageError, StorageResult, StorageStats, StorageTrait,
};
