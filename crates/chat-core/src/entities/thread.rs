//! Thread entity - a sub-channel spawned from a parent channel

use super::ChannelType;
use crate::value_objects::Snowflake;

/// Thread entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    pub id: Snowflake,
    pub guild_id: Snowflake,
    pub parent_id: Snowflake,
    pub owner_id: Option<Snowflake>,
    pub name: String,
    pub channel_type: ChannelType,
    pub archived: bool,
    pub locked: bool,
}

impl Thread {
    /// Create a public thread under `parent_id`
    pub fn new(
        id: Snowflake,
        guild_id: Snowflake,
        parent_id: Snowflake,
        name: impl Into<String>,
    ) -> Self {
        Self {
            id,
            guild_id,
            parent_id,
            owner_id: None,
            name: name.into(),
            channel_type: ChannelType::PublicThread,
            archived: false,
            locked: false,
        }
    }

    #[inline]
    pub fn is_private(&self) -> bool {
        matches!(self.channel_type, ChannelType::PrivateThread)
    }
}
