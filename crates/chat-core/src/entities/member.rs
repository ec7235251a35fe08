//! Member entity - a user's membership in a guild

use chrono::{DateTime, Utc};

use super::User;
use crate::value_objects::Snowflake;

/// Guild member entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildMember {
    pub guild_id: Snowflake,
    pub user: User,
    pub nickname: Option<String>,
    pub role_ids: Vec<Snowflake>,
    pub joined_at: Option<DateTime<Utc>>,
}

impl GuildMember {
    /// Create a new GuildMember
    pub fn new(guild_id: Snowflake, user: User) -> Self {
        Self {
            guild_id,
            user,
            nickname: None,
            role_ids: Vec::new(),
            joined_at: None,
        }
    }

    #[inline]
    pub fn id(&self) -> Snowflake {
        self.user.id
    }

    /// Nickname if set, otherwise the user's display name
    pub fn display_name(&self) -> &str {
        self.nickname
            .as_deref()
            .unwrap_or_else(|| self.user.display_name())
    }

    /// Check if member has a specific role
    #[inline]
    pub fn has_role(&self, role_id: Snowflake) -> bool {
        self.role_ids.contains(&role_id)
    }
}

/// A user reference resolved against the guild first, then the user table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemberOrUser {
    Member(GuildMember),
    User(User),
}

impl MemberOrUser {
    #[inline]
    pub fn id(&self) -> Snowflake {
        match self {
            Self::Member(member) => member.id(),
            Self::User(user) => user.id,
        }
    }

    pub fn user(&self) -> &User {
        match self {
            Self::Member(member) => &member.user,
            Self::User(user) => user,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Self::Member(member) => member.display_name(),
            Self::User(user) => user.display_name(),
        }
    }
}
