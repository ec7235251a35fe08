//! Invite entity - an invite link to a guild

use chrono::{DateTime, Duration, Utc};

use crate::value_objects::Snowflake;

/// Invite entity
///
/// Audit logs describe invites only through their fields, so channel and
/// inviter are optional here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invite {
    pub code: String,
    pub guild_id: Snowflake,
    pub channel_id: Option<Snowflake>,
    pub inviter_id: Option<Snowflake>,
    pub uses: i32,
    /// `None` means unlimited
    pub max_uses: Option<i32>,
    /// Lifetime in seconds; `None` means never expires
    pub max_age: Option<i32>,
    pub temporary: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl Invite {
    /// Create a new Invite
    pub fn new(code: impl Into<String>, guild_id: Snowflake) -> Self {
        Self {
            code: code.into(),
            guild_id,
            channel_id: None,
            inviter_id: None,
            uses: 0,
            max_uses: None,
            max_age: None,
            temporary: false,
            created_at: None,
        }
    }

    /// Set the lifetime in seconds; zero means never expires
    pub fn with_max_age(mut self, max_age_seconds: i32) -> Self {
        self.max_age = (max_age_seconds > 0).then_some(max_age_seconds);
        self
    }

    /// Set max uses; zero means unlimited
    pub fn with_max_uses(mut self, max_uses: i32) -> Self {
        self.max_uses = (max_uses > 0).then_some(max_uses);
        self
    }

    pub fn with_channel(mut self, channel_id: Option<Snowflake>) -> Self {
        self.channel_id = channel_id;
        self
    }

    pub fn with_inviter(mut self, inviter_id: Option<Snowflake>) -> Self {
        self.inviter_id = inviter_id;
        self
    }

    /// Expiry time, when both creation time and max age are known
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        let created_at = self.created_at?;
        let max_age = self.max_age?;
        Some(created_at + Duration::seconds(i64::from(max_age)))
    }

    /// Check if invite has reached max uses
    pub fn is_exhausted(&self) -> bool {
        self.max_uses.is_some_and(|max| self.uses >= max)
    }

    /// Get remaining uses (None if unlimited)
    pub fn remaining_uses(&self) -> Option<i32> {
        self.max_uses.map(|max| max - self.uses)
    }

    /// Get the full invite URL
    pub fn url(&self) -> String {
        format!("https://discord.gg/{}", self.code)
    }
}
