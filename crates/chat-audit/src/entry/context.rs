//! Everything an entry resolves ids against

use std::collections::HashMap;
use std::fmt;

use chat_common::CdnConfig;
use chat_core::{Channel, EntityCache, Guild, MemberOrUser, Resolved, Role, Snowflake, User};

/// Users embedded in a listing response, by id
pub type UserTable = HashMap<Snowflake, User>;

/// Guild, cache, page users and CDN settings shared by the entries of a page
#[derive(Clone, Copy)]
pub struct AuditLogContext<'a> {
    guild: &'a Guild,
    cache: &'a dyn EntityCache,
    users: &'a UserTable,
    cdn: &'a CdnConfig,
}

impl<'a> AuditLogContext<'a> {
    pub fn new(
        guild: &'a Guild,
        cache: &'a dyn EntityCache,
        users: &'a UserTable,
        cdn: &'a CdnConfig,
    ) -> Self {
        Self {
            guild,
            cache,
            users,
            cdn,
        }
    }

    #[inline]
    pub fn guild(&self) -> &'a Guild {
        self.guild
    }

    #[inline]
    pub fn cache(&self) -> &'a dyn EntityCache {
        self.cache
    }

    #[inline]
    pub fn cdn(&self) -> &'a CdnConfig {
        self.cdn
    }

    /// Guild member first, then the page's user table
    pub fn member_or_user(&self, id: Snowflake) -> Option<MemberOrUser> {
        self.cache
            .member(self.guild.id, id)
            .map(MemberOrUser::Member)
            .or_else(|| self.users.get(&id).cloned().map(MemberOrUser::User))
    }

    /// The entry's own guild, or any other cached guild
    pub fn guild_by_id(&self, id: Snowflake) -> Resolved<Guild> {
        let found = if id == self.guild.id {
            Some(self.guild.clone())
        } else {
            self.cache.guild(id)
        };
        self.fallback(found, id, None, "guild")
    }

    pub fn channel(&self, id: Snowflake) -> Resolved<Channel> {
        let found = self.cache.channel(self.guild.id, id);
        self.fallback(found, id, None, "channel")
    }

    /// Role, falling back to a reference carrying `name` when supplied
    pub fn role(&self, id: Snowflake, name: Option<String>) -> Resolved<Role> {
        let found = self.cached_role(id);
        self.fallback(found, id, name, "role")
    }

    pub fn cached_role(&self, id: Snowflake) -> Option<Role> {
        self.cache.role(self.guild.id, id)
    }

    pub(crate) fn fallback<T>(
        &self,
        found: Option<T>,
        id: Snowflake,
        name: Option<String>,
        kind: &'static str,
    ) -> Resolved<T> {
        if found.is_none() {
            tracing::debug!(guild_id = %self.guild.id, id = %id, kind, "Not cached, using reference");
        }
        Resolved::or_named_object(found, id, name)
    }
}

impl fmt::Debug for AuditLogContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuditLogContext")
            .field("guild_id", &self.guild.id)
            .field("users", &self.users.len())
            .field("cdn", &self.cdn.base_url)
            .finish_non_exhaustive()
    }
}
