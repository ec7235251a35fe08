//! Scheduled event entity and where it takes place

use super::{Channel, Resolved};
use crate::value_objects::Snowflake;

crate::int_enum! {
    /// Lifecycle of a scheduled event
    pub enum ScheduledEventStatus {
        Scheduled = 1 => "scheduled",
        Active = 2 => "active",
        Completed = 3 => "completed",
        Canceled = 4 => "canceled",
    }
}

crate::int_enum! {
    /// Where a scheduled event is hosted
    pub enum ScheduledEventLocationType {
        StageInstance = 1 => "stage_instance",
        Voice = 2 => "voice",
        External = 3 => "external",
    }
}

/// Concrete location of a scheduled event
///
/// External events carry a free-form string; the others point at a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduledEventLocation {
    External(String),
    Channel(Resolved<Channel>),
}

impl ScheduledEventLocation {
    /// Location type implied by this location
    pub fn location_type(&self) -> ScheduledEventLocationType {
        match self {
            Self::External(_) => ScheduledEventLocationType::External,
            Self::Channel(_) => ScheduledEventLocationType::Voice,
        }
    }
}

/// Scheduled event entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub id: Snowflake,
    pub guild_id: Snowflake,
    pub name: String,
    pub channel_id: Option<Snowflake>,
    pub status: ScheduledEventStatus,
    pub location_type: ScheduledEventLocationType,
    pub image: Option<String>,
}

impl ScheduledEvent {
    pub fn new(id: Snowflake, guild_id: Snowflake, name: impl Into<String>) -> Self {
        Self {
            id,
            guild_id,
            name: name.into(),
            channel_id: None,
            status: ScheduledEventStatus::Scheduled,
            location_type: ScheduledEventLocationType::External,
            image: None,
        }
    }
}
