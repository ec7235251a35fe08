//! A sparse, dynamically keyed attribute bag and the values it holds

use std::collections::BTreeMap;
use std::fmt;

use chat_core::{
    Asset, AutoModAction, AutoModEventType, AutoModTriggerMetadata, AutoModTriggerType, Channel,
    ChannelType, Colour, ContentFilter, Guild, MemberOrUser, NotificationLevel, Object,
    PermissionOverwrite, Permissions, Resolved, Role, ScheduledEventLocation,
    ScheduledEventLocationType, ScheduledEventStatus, Snowflake, StagePrivacyLevel,
    StickerFormatType, StickerType, VerificationLevel, VideoQualityMode, VoiceRegion,
};
use serde_json::Value;

/// Who a permission overwrite applies to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverwriteTarget {
    Role(Role),
    Member(MemberOrUser),
    Object(Object),
}

impl OverwriteTarget {
    pub fn id(&self) -> Snowflake {
        match self {
            Self::Role(role) => role.id,
            Self::Member(member) => member.id(),
            Self::Object(object) => object.id,
        }
    }
}

/// One decoded field value
#[derive(Debug, Clone, PartialEq)]
pub enum DiffValue {
    /// The raw value was JSON `null`, or a placeholder for a composite field
    Null,
    /// Field without a transform, or a value the transform could not read
    Raw(Value),
    Snowflake(Snowflake),
    Permissions(Permissions),
    Colour(Colour),
    VerificationLevel(VerificationLevel),
    ContentFilter(ContentFilter),
    NotificationLevel(NotificationLevel),
    VoiceRegion(VoiceRegion),
    VideoQualityMode(VideoQualityMode),
    StagePrivacyLevel(StagePrivacyLevel),
    StickerFormatType(StickerFormatType),
    StickerType(StickerType),
    ChannelType(ChannelType),
    ScheduledEventStatus(ScheduledEventStatus),
    LocationType(ScheduledEventLocationType),
    Location(ScheduledEventLocation),
    TriggerType(AutoModTriggerType),
    EventType(AutoModEventType),
    AutoModActions(Vec<AutoModAction>),
    TriggerMetadata(AutoModTriggerMetadata),
    User(Resolved<MemberOrUser>),
    Guild(Resolved<Guild>),
    Channel(Resolved<Channel>),
    Channels(Vec<Resolved<Channel>>),
    Roles(Vec<Resolved<Role>>),
    Overwrites(Vec<(OverwriteTarget, PermissionOverwrite)>),
    Asset(Asset),
}

impl DiffValue {
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The verbatim JSON, for fields without a transform
    pub fn as_raw(&self) -> Option<&Value> {
        match self {
            Self::Raw(value) => Some(value),
            _ => None,
        }
    }

    /// Integer held verbatim (e.g. `max_age`, `uses`)
    pub fn as_i64(&self) -> Option<i64> {
        self.as_raw().and_then(Value::as_i64)
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_raw().and_then(Value::as_str)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_raw().and_then(Value::as_bool)
    }

    pub fn as_snowflake(&self) -> Option<Snowflake> {
        match self {
            Self::Snowflake(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_permissions(&self) -> Option<Permissions> {
        match self {
            Self::Permissions(permissions) => Some(*permissions),
            _ => None,
        }
    }

    pub fn as_colour(&self) -> Option<Colour> {
        match self {
            Self::Colour(colour) => Some(*colour),
            _ => None,
        }
    }

    pub fn as_channel(&self) -> Option<&Resolved<Channel>> {
        match self {
            Self::Channel(channel) => Some(channel),
            _ => None,
        }
    }

    pub fn as_user(&self) -> Option<&Resolved<MemberOrUser>> {
        match self {
            Self::User(user) => Some(user),
            _ => None,
        }
    }

    pub fn as_roles(&self) -> Option<&[Resolved<Role>]> {
        match self {
            Self::Roles(roles) => Some(roles),
            _ => None,
        }
    }

    pub fn as_asset(&self) -> Option<&Asset> {
        match self {
            Self::Asset(asset) => Some(asset),
            _ => None,
        }
    }
}

impl From<Value> for DiffValue {
    fn from(value: Value) -> Self {
        if value.is_null() {
            Self::Null
        } else {
            Self::Raw(value)
        }
    }
}

/// One side ("before" or "after") of an entry's change set
///
/// Keys are the exposed field names. A key is present only if the raw change
/// list carried a value for this side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditLogDiff {
    fields: BTreeMap<String, DiffValue>,
}

impl AuditLogDiff {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&DiffValue> {
        self.fields.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Fields in name order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DiffValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn set(&mut self, key: impl Into<String>, value: DiffValue) {
        self.fields.insert(key.into(), value);
    }

    /// Insert only when `key` is not present yet
    pub(crate) fn set_default(&mut self, key: &str, value: DiffValue) {
        if !self.fields.contains_key(key) {
            self.fields.insert(key.to_string(), value);
        }
    }

    /// Copy `from` to `to` when `from` is present
    pub(crate) fn alias(&mut self, from: &str, to: &str) {
        if let Some(value) = self.fields.get(from).cloned() {
            self.fields.insert(to.to_string(), value);
        }
    }
}

impl<'a> IntoIterator for &'a AuditLogDiff {
    type Item = (&'a String, &'a DiffValue);
    type IntoIter = std::collections::btree_map::Iter<'a, String, DiffValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// `<AuditLogDiff key=value ...>` with values in debug form
impl fmt::Display for AuditLogDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<AuditLogDiff")?;
        for (key, value) in &self.fields {
            write!(f, " {key}={value:?}")?;
        }
        f.write_str(">")
    }
}
