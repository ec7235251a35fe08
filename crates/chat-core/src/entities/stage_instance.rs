//! Stage instance - a live stage running in a stage channel

use crate::value_objects::Snowflake;

crate::int_enum! {
    /// Who can see a stage instance
    pub enum StagePrivacyLevel {
        Public = 1 => "public",
        GuildOnly = 2 => "guild_only",
    }
}

/// Stage instance entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageInstance {
    pub id: Snowflake,
    pub guild_id: Snowflake,
    pub channel_id: Snowflake,
    pub topic: String,
    pub privacy_level: StagePrivacyLevel,
}

impl StageInstance {
    pub fn new(
        id: Snowflake,
        guild_id: Snowflake,
        channel_id: Snowflake,
        topic: impl Into<String>,
    ) -> Self {
        Self {
            id,
            guild_id,
            channel_id,
            topic: topic.into(),
            privacy_level: StagePrivacyLevel::GuildOnly,
        }
    }
}
