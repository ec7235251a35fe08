//! Entity cache trait (port)
//!
//! The audit log layer only ever reads from the cache. Whatever keeps the
//! cache fresh (a gateway client, a fixture loader) lives on the other side
//! of this trait.

use crate::entities::{
    Channel, Emoji, Guild, GuildMember, Role, ScheduledEvent, StageInstance, Sticker, Thread,
};
use crate::value_objects::Snowflake;

/// Read-only view over locally cached platform entities
///
/// Lookups return owned clones so callers never hold a lock on the backing
/// store. A miss is `None`; callers fall back to an opaque reference.
pub trait EntityCache: Send + Sync {
    fn guild(&self, id: Snowflake) -> Option<Guild>;

    /// Channel (not thread) inside a guild
    fn channel(&self, guild_id: Snowflake, id: Snowflake) -> Option<Channel>;

    fn thread(&self, guild_id: Snowflake, id: Snowflake) -> Option<Thread>;

    fn role(&self, guild_id: Snowflake, id: Snowflake) -> Option<Role>;

    /// Guild membership for a user
    fn member(&self, guild_id: Snowflake, user_id: Snowflake) -> Option<GuildMember>;

    fn stage_instance(&self, guild_id: Snowflake, id: Snowflake) -> Option<StageInstance>;

    fn scheduled_event(&self, guild_id: Snowflake, id: Snowflake) -> Option<ScheduledEvent>;

    /// Emojis are looked up globally, not per guild
    fn emoji(&self, id: Snowflake) -> Option<Emoji>;

    /// Stickers are looked up globally, not per guild
    fn sticker(&self, id: Snowflake) -> Option<Sticker>;
}
