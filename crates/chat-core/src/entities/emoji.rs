//! Custom guild emoji

use crate::value_objects::Snowflake;

/// Custom emoji owned by a guild
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emoji {
    pub id: Snowflake,
    pub guild_id: Snowflake,
    pub name: String,
    pub animated: bool,
}

impl Emoji {
    pub fn new(id: Snowflake, guild_id: Snowflake, name: impl Into<String>) -> Self {
        Self {
            id,
            guild_id,
            name: name.into(),
            animated: false,
        }
    }

    /// Message markup, e.g. `<:name:123>` or `<a:name:123>`
    pub fn markup(&self) -> String {
        let prefix = if self.animated { "a" } else { "" };
        format!("<{prefix}:{}:{}>", self.name, self.id)
    }
}
