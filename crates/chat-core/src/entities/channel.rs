//! Channel entity - a guild text, voice, category, or forum channel

use crate::value_objects::Snowflake;

crate::int_enum! {
    /// Channel type as sent by the platform
    pub enum ChannelType {
        Text = 0 => "text",
        Private = 1 => "private",
        Voice = 2 => "voice",
        Group = 3 => "group",
        Category = 4 => "category",
        News = 5 => "news",
        NewsThread = 10 => "news_thread",
        PublicThread = 11 => "public_thread",
        PrivateThread = 12 => "private_thread",
        StageVoice = 13 => "stage_voice",
        Directory = 14 => "directory",
        Forum = 15 => "forum",
        Media = 16 => "media",
    }
}

impl ChannelType {
    /// Check if channels of this type are threads
    #[inline]
    pub fn is_thread(self) -> bool {
        matches!(
            self,
            Self::NewsThread | Self::PublicThread | Self::PrivateThread
        )
    }
}

crate::int_enum! {
    /// Camera video quality in voice channels
    pub enum VideoQualityMode {
        Auto = 1 => "auto",
        Full = 2 => "full",
    }
}

/// Guild channel entity as held by the client cache
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: Snowflake,
    pub guild_id: Snowflake,
    pub name: String,
    pub channel_type: ChannelType,
    pub topic: Option<String>,
    pub position: i32,
    pub parent_id: Option<Snowflake>,
}

impl Channel {
    /// Create a new guild text channel
    #[must_use]
    pub fn new_text(id: Snowflake, guild_id: Snowflake, name: impl Into<String>) -> Self {
        Self::with_type(id, guild_id, name, ChannelType::Text)
    }

    /// Create a channel of an arbitrary type
    #[must_use]
    pub fn with_type(
        id: Snowflake,
        guild_id: Snowflake,
        name: impl Into<String>,
        channel_type: ChannelType,
    ) -> Self {
        Self {
            id,
            guild_id,
            name: name.into(),
            channel_type,
            topic: None,
            position: 0,
            parent_id: None,
        }
    }

    /// Check if this is a category
    #[inline]
    #[must_use]
    pub fn is_category(&self) -> bool {
        matches!(self.channel_type, ChannelType::Category)
    }

    /// Mention markup, e.g. `<#123>`
    pub fn mention(&self) -> String {
        format!("<#{}>", self.id)
    }
}
