//! Domain entities - cached platform objects

mod channel;
mod emoji;
mod guild;
mod invite;
mod member;
mod object;
mod role;
mod scheduled_event;
mod stage_instance;
mod sticker;
mod thread;
mod user;

pub use channel::{Channel, ChannelType, VideoQualityMode};
pub use emoji::Emoji;
pub use guild::{ContentFilter, Guild, NotificationLevel, VerificationLevel, VoiceRegion};
pub use invite::Invite;
pub use member::{GuildMember, MemberOrUser};
pub use object::{Identifiable, Object, Resolved};
pub use role::Role;
pub use scheduled_event::{
    ScheduledEvent, ScheduledEventLocation, ScheduledEventLocationType, ScheduledEventStatus,
};
pub use stage_instance::{StageInstance, StagePrivacyLevel};
pub use sticker::{Sticker, StickerFormatType, StickerType};
pub use thread::Thread;
pub use user::User;
