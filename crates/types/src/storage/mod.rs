//! Record store seam: errors, stats and the storage traits

pub mod errors;
pub mod traits;

pub use errors::{StorageError, StorageResult};
pub use traits::{MallStorageTrait, Snapshot, StorageStats, StorageTrait};
