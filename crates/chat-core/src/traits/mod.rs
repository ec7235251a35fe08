//! Ports the domain layer depends on

mod cache;

pub use cache::EntityCache;
