//! Storage traits for pluggable storage implementations

// Re-export the storage traits from types crate
pub use mall_types::storage::{
	MallStorageTrait as MallStorage, Snapshot, StorageError, StorageResult, StorageStats,
	StorageTrait as Storage,
};
