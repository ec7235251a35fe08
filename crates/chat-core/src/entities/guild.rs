//! Guild entity - represents a server, plus the guild-level setting enums

use chrono::{DateTime, Utc};
use std::fmt;

use crate::value_objects::Snowflake;

crate::int_enum! {
    /// Requirements a member must meet before chatting
    pub enum VerificationLevel {
        None = 0 => "none",
        Low = 1 => "low",
        Medium = 2 => "medium",
        High = 3 => "high",
        Highest = 4 => "highest",
    }
}

crate::int_enum! {
    /// Explicit media scanning level
    pub enum ContentFilter {
        Disabled = 0 => "disabled",
        NoRole = 1 => "no_role",
        AllMembers = 2 => "all_members",
    }
}

crate::int_enum! {
    /// Default message notification setting
    pub enum NotificationLevel {
        AllMessages = 0 => "all_messages",
        OnlyMentions = 1 => "only_mentions",
    }
}

/// Voice server region
///
/// Regions are identified by string. Unknown regions keep the raw id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VoiceRegion {
    Brazil,
    HongKong,
    India,
    Japan,
    Rotterdam,
    Russia,
    Singapore,
    SouthAfrica,
    Sydney,
    UsCentral,
    UsEast,
    UsSouth,
    UsWest,
    Unknown(String),
}

impl VoiceRegion {
    /// Map a region id, keeping unrecognised ids verbatim
    pub fn from_id(id: &str) -> Self {
        match id {
            "brazil" => Self::Brazil,
            "hongkong" => Self::HongKong,
            "india" => Self::India,
            "japan" => Self::Japan,
            "rotterdam" => Self::Rotterdam,
            "russia" => Self::Russia,
            "singapore" => Self::Singapore,
            "southafrica" => Self::SouthAfrica,
            "sydney" => Self::Sydney,
            "us-central" => Self::UsCentral,
            "us-east" => Self::UsEast,
            "us-south" => Self::UsSouth,
            "us-west" => Self::UsWest,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The region id as sent on the wire
    pub fn as_str(&self) -> &str {
        match self {
            Self::Brazil => "brazil",
            Self::HongKong => "hongkong",
            Self::India => "india",
            Self::Japan => "japan",
            Self::Rotterdam => "rotterdam",
            Self::Russia => "russia",
            Self::Singapore => "singapore",
            Self::SouthAfrica => "southafrica",
            Self::Sydney => "sydney",
            Self::UsCentral => "us-central",
            Self::UsEast => "us-east",
            Self::UsSouth => "us-south",
            Self::UsWest => "us-west",
            Self::Unknown(id) => id,
        }
    }
}

impl fmt::Display for VoiceRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Guild (server) entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Guild {
    pub id: Snowflake,
    pub name: String,
    pub icon: Option<String>,
    pub description: Option<String>,
    pub owner_id: Snowflake,
}

impl Guild {
    /// Create a new Guild
    pub fn new(id: Snowflake, name: impl Into<String>, owner_id: Snowflake) -> Self {
        Self {
            id,
            name: name.into(),
            icon: None,
            description: None,
            owner_id,
        }
    }

    /// Check if a user is the guild owner
    #[inline]
    pub fn is_owner(&self, user_id: Snowflake) -> bool {
        self.owner_id == user_id
    }

    /// Creation time, derived from the id
    pub fn created_at(&self) -> DateTime<Utc> {
        self.id.created_at()
    }
}
