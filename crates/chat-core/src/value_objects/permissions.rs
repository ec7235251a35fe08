//! Permission bitflags as sent by the chat platform
//!
//! Audit log changes carry permission sets as decimal strings. Unknown bits are
//! retained so a newer server never loses information on the way through.

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::DomainError;

bitflags! {
    /// Platform permission flags
    ///
    /// Serialized as a decimal string in JSON for JavaScript safety.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Permissions: u64 {
        const CREATE_INSTANT_INVITE      = 1 << 0;
        const KICK_MEMBERS               = 1 << 1;
        const BAN_MEMBERS                = 1 << 2;
        /// Bypasses every permission check and channel overwrite
        const ADMINISTRATOR              = 1 << 3;
        const MANAGE_CHANNELS            = 1 << 4;
        const MANAGE_GUILD               = 1 << 5;
        const ADD_REACTIONS              = 1 << 6;
        const VIEW_AUDIT_LOG             = 1 << 7;
        const PRIORITY_SPEAKER           = 1 << 8;
        const STREAM                     = 1 << 9;
        const VIEW_CHANNEL               = 1 << 10;
        const SEND_MESSAGES              = 1 << 11;
        const SEND_TTS_MESSAGES          = 1 << 12;
        const MANAGE_MESSAGES            = 1 << 13;
        const EMBED_LINKS                = 1 << 14;
        const ATTACH_FILES               = 1 << 15;
        const READ_MESSAGE_HISTORY       = 1 << 16;
        const MENTION_EVERYONE           = 1 << 17;
        const USE_EXTERNAL_EMOJIS        = 1 << 18;
        const VIEW_GUILD_INSIGHTS        = 1 << 19;
        const CONNECT                    = 1 << 20;
        const SPEAK                      = 1 << 21;
        const MUTE_MEMBERS               = 1 << 22;
        const DEAFEN_MEMBERS             = 1 << 23;
        const MOVE_MEMBERS               = 1 << 24;
        const USE_VAD                    = 1 << 25;
        const CHANGE_NICKNAME            = 1 << 26;
        const MANAGE_NICKNAMES           = 1 << 27;
        const MANAGE_ROLES               = 1 << 28;
        const MANAGE_WEBHOOKS            = 1 << 29;
        const MANAGE_EMOJIS_AND_STICKERS = 1 << 30;
        const USE_APPLICATION_COMMANDS   = 1 << 31;
        const REQUEST_TO_SPEAK           = 1 << 32;
        const MANAGE_EVENTS              = 1 << 33;
        const MANAGE_THREADS             = 1 << 34;
        const CREATE_PUBLIC_THREADS      = 1 << 35;
        const CREATE_PRIVATE_THREADS     = 1 << 36;
        const USE_EXTERNAL_STICKERS      = 1 << 37;
        const SEND_MESSAGES_IN_THREADS   = 1 << 38;
        const START_EMBEDDED_ACTIVITIES  = 1 << 39;
        const MODERATE_MEMBERS           = 1 << 40;

        /// Permissions granted to @everyone in a freshly created guild
        const DEFAULT = Self::CREATE_INSTANT_INVITE.bits()
            | Self::ADD_REACTIONS.bits()
            | Self::VIEW_CHANNEL.bits()
            | Self::SEND_MESSAGES.bits()
            | Self::EMBED_LINKS.bits()
            | Self::ATTACH_FILES.bits()
            | Self::READ_MESSAGE_HISTORY.bits()
            | Self::CONNECT.bits()
            | Self::SPEAK.bits();
    }
}

impl Permissions {
    /// Check if the permission set contains a required permission
    ///
    /// Administrators bypass all permission checks.
    #[inline]
    pub fn has(&self, permission: Permissions) -> bool {
        if self.contains(Permissions::ADMINISTRATOR) {
            return true;
        }
        self.contains(permission)
    }

    /// Parse from the decimal string representation used on the wire
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        s.trim()
            .parse::<u64>()
            .map(Permissions::from_bits_retain)
            .map_err(|_| DomainError::InvalidPermissions(s.to_string()))
    }

    /// Read a permission set out of a loosely-typed JSON value
    pub fn from_json(value: &serde_json::Value) -> Result<Self, DomainError> {
        match value {
            serde_json::Value::String(s) => Self::parse(s),
            serde_json::Value::Number(n) => n
                .as_u64()
                .map(Permissions::from_bits_retain)
                .ok_or_else(|| DomainError::InvalidPermissions(n.to_string())),
            other => Err(DomainError::InvalidPermissions(other.to_string())),
        }
    }

    /// Names of the known flags that are set, in bit order
    pub fn list(&self) -> Vec<&'static str> {
        self.iter_names().map(|(name, _)| name).collect()
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Permissions::empty()
    }
}

impl fmt::Display for Permissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

// Serialize as string for JSON (JavaScript BigInt safety)
impl Serialize for Permissions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.bits().to_string())
    }
}

// Deserialize from string or number
impl<'de> Deserialize<'de> for Permissions {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct PermissionsVisitor;

        impl Visitor<'_> for PermissionsVisitor {
            type Value = Permissions;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer representing permission bits")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Permissions, E>
            where
                E: de::Error,
            {
                Ok(Permissions::from_bits_retain(value as u64))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Permissions, E>
            where
                E: de::Error,
            {
                Ok(Permissions::from_bits_retain(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Permissions, E>
            where
                E: de::Error,
            {
                Permissions::parse(value).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_any(PermissionsVisitor)
    }
}

impl From<u64> for Permissions {
    fn from(bits: u64) -> Self {
        Permissions::from_bits_retain(bits)
    }
}

impl From<Permissions> for u64 {
    fn from(perms: Permissions) -> Self {
        perms.bits()
    }
}
