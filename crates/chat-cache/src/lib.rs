//! # chat-cache
//!
//! In-memory entity cache for guilds and the objects they own.
//!
//! ## Example
//!
//! ```ignore
//! use chat_cache::MemoryCache;
//! use chat_core::{EntityCache, Guild, Permissions, Role, Snowflake};
//!
//! let cache = MemoryCache::new();
//! cache.insert_guild(Guild::new(guild_id, "Lounge", owner_id));
//! cache.insert_role(Role::new(role_id, guild_id, "Mods", Permissions::empty()));
//!
//! assert!(cache.role(guild_id, role_id).is_some());
//! ```

pub mod store;

pub use store::{MemoryCache, SharedMemoryCache};
