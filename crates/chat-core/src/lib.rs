//! # chat-core
//!
//! Domain layer: cached platform entities, value objects, tolerant wire enums,
//! and the entity cache port the audit log decoder resolves against.
//! This crate has zero dependencies on infrastructure.

#[macro_use]
mod macros;

pub mod automod;
pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

#[doc(hidden)]
pub mod __private {
    pub use serde_json::Value;
}

// Re-export commonly used types at crate root
pub use automod::{
    AutoModAction, AutoModActionMetadata, AutoModActionType, AutoModEventType,
    AutoModKeywordPresetType, AutoModTriggerMetadata, AutoModTriggerType,
};
pub use entities::{
    Channel, ChannelType, ContentFilter, Emoji, Guild, GuildMember, Identifiable, Invite,
    MemberOrUser, NotificationLevel, Object, Resolved, Role, ScheduledEvent,
    ScheduledEventLocation, ScheduledEventLocationType, ScheduledEventStatus, StageInstance,
    StagePrivacyLevel, Sticker, StickerFormatType, StickerType, Thread, User, VerificationLevel,
    VideoQualityMode, VoiceRegion,
};
pub use error::DomainError;
pub use traits::EntityCache;
pub use value_objects::{
    Asset, Colour, DEFAULT_ASSET_SIZE, PermissionOverwrite, Permissions, Snowflake,
    SnowflakeParseError,
};
