//! Guild sticker and its enums

use crate::value_objects::Snowflake;

crate::int_enum! {
    /// Whether a sticker is a platform standard sticker or a guild upload
    pub enum StickerType {
        Standard = 1 => "standard",
        Guild = 2 => "guild",
    }
}

crate::int_enum! {
    /// Sticker file format
    pub enum StickerFormatType {
        Png = 1 => "png",
        Apng = 2 => "apng",
        Lottie = 3 => "lottie",
        Gif = 4 => "gif",
    }
}

/// Sticker uploaded to a guild
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sticker {
    pub id: Snowflake,
    pub guild_id: Option<Snowflake>,
    pub name: String,
    pub sticker_type: StickerType,
    pub format_type: StickerFormatType,
}

impl Sticker {
    pub fn new(id: Snowflake, guild_id: Snowflake, name: impl Into<String>) -> Self {
        Self {
            id,
            guild_id: Some(guild_id),
            name: name.into(),
            sticker_type: StickerType::Guild,
            format_type: StickerFormatType::Png,
        }
    }
}
