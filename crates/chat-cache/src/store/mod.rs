//! Entity storage

mod memory_cache;

pub use memory_cache::{MemoryCache, SharedMemoryCache};
