//! Memory cache
//!
//! Holds cached entities in `DashMap`s for thread-safe access. Guild-owned
//! entities are keyed by `(guild_id, id)`; emojis and stickers by id alone.

use chat_core::{
    Channel, EntityCache, Emoji, Guild, GuildMember, Role, ScheduledEvent, Snowflake,
    StageInstance, Sticker, Thread,
};
use dashmap::DashMap;
use std::sync::Arc;

type GuildKey = (Snowflake, Snowflake);

/// Shared handle to a memory cache
pub type SharedMemoryCache = Arc<MemoryCache>;

/// In-memory implementation of [`EntityCache`]
#[derive(Debug, Default)]
pub struct MemoryCache {
    guilds: DashMap<Snowflake, Guild>,
    channels: DashMap<GuildKey, Channel>,
    threads: DashMap<GuildKey, Thread>,
    roles: DashMap<GuildKey, Role>,
    /// Keyed by `(guild_id, user_id)`
    members: DashMap<GuildKey, GuildMember>,
    stage_instances: DashMap<GuildKey, StageInstance>,
    scheduled_events: DashMap<GuildKey, ScheduledEvent>,
    emojis: DashMap<Snowflake, Emoji>,
    stickers: DashMap<Snowflake, Sticker>,
}

impl MemoryCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cache wrapped in Arc
    #[must_use]
    pub fn new_shared() -> SharedMemoryCache {
        Arc::new(Self::new())
    }

    pub fn insert_guild(&self, guild: Guild) {
        tracing::debug!(guild_id = %guild.id, "Guild cached");
        self.guilds.insert(guild.id, guild);
    }

    pub fn insert_channel(&self, channel: Channel) {
        tracing::debug!(guild_id = %channel.guild_id, channel_id = %channel.id, "Channel cached");
        self.channels.insert((channel.guild_id, channel.id), channel);
    }

    pub fn insert_thread(&self, thread: Thread) {
        tracing::debug!(guild_id = %thread.guild_id, thread_id = %thread.id, "Thread cached");
        self.threads.insert((thread.guild_id, thread.id), thread);
    }

    pub fn insert_role(&self, role: Role) {
        tracing::debug!(guild_id = %role.guild_id, role_id = %role.id, "Role cached");
        self.roles.insert((role.guild_id, role.id), role);
    }

    pub fn insert_member(&self, member: GuildMember) {
        tracing::debug!(guild_id = %member.guild_id, user_id = %member.id(), "Member cached");
        self.members.insert((member.guild_id, member.id()), member);
    }

    pub fn insert_stage_instance(&self, stage: StageInstance) {
        tracing::debug!(guild_id = %stage.guild_id, stage_id = %stage.id, "Stage instance cached");
        self.stage_instances.insert((stage.guild_id, stage.id), stage);
    }

    pub fn insert_scheduled_event(&self, event: ScheduledEvent) {
        tracing::debug!(guild_id = %event.guild_id, event_id = %event.id, "Scheduled event cached");
        self.scheduled_events.insert((event.guild_id, event.id), event);
    }

    pub fn insert_emoji(&self, emoji: Emoji) {
        tracing::debug!(emoji_id = %emoji.id, "Emoji cached");
        self.emojis.insert(emoji.id, emoji);
    }

    pub fn insert_sticker(&self, sticker: Sticker) {
        tracing::debug!(sticker_id = %sticker.id, "Sticker cached");
        self.stickers.insert(sticker.id, sticker);
    }

    /// Drop a guild and everything cached under it
    pub fn remove_guild(&self, guild_id: Snowflake) {
        if self.guilds.remove(&guild_id).is_none() {
            return;
        }

        self.channels.retain(|(gid, _), _| *gid != guild_id);
        self.threads.retain(|(gid, _), _| *gid != guild_id);
        self.roles.retain(|(gid, _), _| *gid != guild_id);
        self.members.retain(|(gid, _), _| *gid != guild_id);
        self.stage_instances.retain(|(gid, _), _| *gid != guild_id);
        self.scheduled_events.retain(|(gid, _), _| *gid != guild_id);

        tracing::debug!(guild_id = %guild_id, "Guild evicted");
    }

    /// Number of cached guilds
    #[must_use]
    pub fn guild_count(&self) -> usize {
        self.guilds.len()
    }

    /// True when nothing at all is cached
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guilds.is_empty()
            && self.channels.is_empty()
            && self.threads.is_empty()
            && self.roles.is_empty()
            && self.members.is_empty()
            && self.stage_instances.is_empty()
            && self.scheduled_events.is_empty()
            && self.emojis.is_empty()
            && self.stickers.is_empty()
    }
}

fn lookup<K, V>(map: &DashMap<K, V>, key: &K) -> Option<V>
where
    K: Eq + std::hash::Hash,
    V: Clone,
{
    map.get(key).map(|entry| entry.value().clone())
}

impl EntityCache for MemoryCache {
    fn guild(&self, id: Snowflake) -> Option<Guild> {
        lookup(&self.guilds, &id)
    }

    fn channel(&self, guild_id: Snowflake, id: Snowflake) -> Option<Channel> {
        lookup(&self.channels, &(guild_id, id))
    }

    fn thread(&self, guild_id: Snowflake, id: Snowflake) -> Option<Thread> {
        lookup(&self.threads, &(guild_id, id))
    }

    fn role(&self, guild_id: Snowflake, id: Snowflake) -> Option<Role> {
        lookup(&self.roles, &(guild_id, id))
    }

    fn member(&self, guild_id: Snowflake, user_id: Snowflake) -> Option<GuildMember> {
        lookup(&self.members, &(guild_id, user_id))
    }

    fn stage_instance(&self, guild_id: Snowflake, id: Snowflake) -> Option<StageInstance> {
        lookup(&self.stage_instances, &(guild_id, id))
    }

    fn scheduled_event(&self, guild_id: Snowflake, id: Snowflake) -> Option<ScheduledEvent> {
        lookup(&self.scheduled_events, &(guild_id, id))
    }

    fn emoji(&self, id: Snowflake) -> Option<Emoji> {
        lookup(&self.emojis, &id)
    }

    fn sticker(&self, id: Snowflake) -> Option<Sticker> {
        lookup(&self.stickers, &id)
    }
}
