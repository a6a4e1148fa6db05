//! Mall Storage
//!
//! Storage implementations for the mall catalog service.

pub mod memory_store;
pub mod traits;

pub use memory_store::MemoryStore;
pub use traits::Storage;
