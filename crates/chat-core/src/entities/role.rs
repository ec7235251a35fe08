//! Role entity - represents a guild role with permissions

use crate::value_objects::{Colour, Permissions, Snowflake};

/// Role entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    pub id: Snowflake,
    pub guild_id: Snowflake,
    pub name: String,
    pub colour: Colour,
    pub hoist: bool,
    pub position: i32,
    pub permissions: Permissions,
    pub mentionable: bool,
    pub managed: bool,
}

impl Role {
    /// Create a new Role
    pub fn new(
        id: Snowflake,
        guild_id: Snowflake,
        name: impl Into<String>,
        permissions: Permissions,
    ) -> Self {
        Self {
            id,
            guild_id,
            name: name.into(),
            colour: Colour::default(),
            hoist: false,
            position: 0,
            permissions,
            mentionable: false,
            managed: false,
        }
    }

    /// The @everyone role shares its id with the guild
    #[inline]
    pub fn is_default(&self) -> bool {
        self.id == self.guild_id
    }

    /// Check if this role grants a specific permission
    #[inline]
    pub fn has_permission(&self, permission: Permissions) -> bool {
        self.permissions.has(permission)
    }

    /// Mention markup, e.g. `<@&123>`
    pub fn mention(&self) -> String {
        format!("<@&{}>", self.id)
    }
}
