//! Per-field transform table
//!
//! Maps a raw change key to the name it is exposed under and the function
//! that turns its raw JSON into a [`DiffValue`]. Keys missing from the table
//! are copied verbatim under their own name.

use chat_core::{
    Asset, AutoModAction, AutoModEventType, AutoModTriggerMetadata, AutoModTriggerType,
    ChannelType, Colour, ContentFilter, DomainError, NotificationLevel, Object, PermissionOverwrite,
    Permissions, Resolved, ScheduledEventLocationType, ScheduledEventStatus, Snowflake,
    StagePrivacyLevel, StickerFormatType, StickerType, VerificationLevel, VideoQualityMode,
    VoiceRegion,
};
use serde_json::Value;

use super::diff::{DiffValue, OverwriteTarget};
use crate::entry::AuditLogEntry;

/// Raw value to typed value, with the owning entry for lookups
pub type Transform = fn(&AuditLogEntry<'_>, &Value) -> Result<DiffValue, DomainError>;

/// How one raw key is exposed
#[derive(Clone, Copy)]
pub struct FieldTransform {
    /// Exposed name when it differs from the raw key
    pub rename: Option<&'static str>,
    /// `None` copies the raw value verbatim
    pub transform: Option<Transform>,
}

impl FieldTransform {
    const fn new(rename: Option<&'static str>, transform: Option<Transform>) -> Self {
        Self { rename, transform }
    }

    /// Exposed name for `raw_key`
    pub fn exposed_name<'k>(&self, raw_key: &'k str) -> &'k str {
        self.rename.unwrap_or(raw_key)
    }

    /// Apply the transform to one raw side value
    ///
    /// `null` stays null. A value the transform cannot read is logged and
    /// kept verbatim.
    pub fn apply(&self, entry: &AuditLogEntry<'_>, key: &str, raw: &Value) -> DiffValue {
        if raw.is_null() {
            return DiffValue::Null;
        }
        let Some(transform) = self.transform else {
            tracing::trace!(entry_id = %entry.id(), key = %key, "Passing value through");
            return DiffValue::Raw(raw.clone());
        };
        match transform(entry, raw) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(
                    entry_id = %entry.id(),
                    key = %key,
                    error = %error,
                    "Malformed audit log value, keeping raw"
                );
                DiffValue::Raw(raw.clone())
            }
        }
    }
}

impl std::fmt::Debug for FieldTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldTransform")
            .field("rename", &self.rename)
            .field("transform", &self.transform.is_some())
            .finish()
    }
}

/// Look up how a raw change key is decoded
///
/// Returns `None` for keys that pass through verbatim.
pub fn lookup(key: &str) -> Option<FieldTransform> {
    let (rename, transform): (Option<&'static str>, Option<Transform>) = match key {
        "verification_level" => (None, Some(verification_level)),
        "explicit_content_filter" => (None, Some(content_filter)),
        "allow" | "deny" | "permissions" => (None, Some(permissions)),
        "id" | "command_id" => (None, Some(snowflake)),
        "color" => (Some("colour"), Some(colour)),
        "owner_id" => (Some("owner"), Some(member_id)),
        "inviter_id" => (Some("inviter"), Some(member_id)),
        "channel_id" => (Some("channel"), Some(channel)),
        "afk_channel_id" => (Some("afk_channel"), Some(channel)),
        "system_channel_id" => (Some("system_channel"), Some(channel)),
        "widget_channel_id" => (Some("widget_channel"), Some(channel)),
        "rules_channel_id" => (Some("rules_channel"), Some(channel)),
        "public_updates_channel_id" => (Some("public_updates_channel"), Some(channel)),
        "permission_overwrites" => (Some("overwrites"), Some(overwrites)),
        "splash_hash" => (Some("splash"), Some(splash)),
        "banner_hash" => (Some("banner"), Some(banner)),
        "discovery_splash_hash" => (Some("discovery_splash"), Some(discovery_splash)),
        "icon_hash" => (Some("icon"), Some(icon)),
        "avatar_hash" => (Some("avatar"), Some(avatar)),
        "rate_limit_per_user" => (Some("slowmode_delay"), None),
        "guild_id" => (Some("guild"), Some(guild_id)),
        "tags" => (Some("emoji"), None),
        "default_message_notifications" => (Some("default_notifications"), Some(notification_level)),
        "rtc_region" => (None, Some(voice_region)),
        "video_quality_mode" => (None, Some(video_quality_mode)),
        "privacy_level" => (None, Some(privacy_level)),
        "format_type" => (None, Some(sticker_format_type)),
        "type" => (None, Some(channel_or_sticker_type)),
        "status" => (None, Some(scheduled_event_status)),
        "entity_type" => (Some("location_type"), Some(location_type)),
        "image_hash" => (Some("image"), Some(scheduled_event_image)),
        "trigger_type" => (None, Some(trigger_type)),
        "event_type" => (None, Some(event_type)),
        "actions" => (None, Some(automod_actions)),
        "trigger_metadata" => (None, Some(trigger_metadata)),
        "exempt_roles" => (None, Some(roles)),
        "exempt_channels" => (None, Some(channels)),
        _ => return None,
    };
    Some(FieldTransform::new(rename, transform))
}

macro_rules! enum_transform {
    ($($name:ident => $enum:ident as $variant:ident),+ $(,)?) => {
        $(
            fn $name(_: &AuditLogEntry<'_>, raw: &Value) -> Result<DiffValue, DomainError> {
                $enum::from_json(raw)
                    .map(DiffValue::$variant)
                    .ok_or_else(|| DomainError::invalid_field(stringify!($enum), raw))
            }
        )+
    };
}

enum_transform! {
    verification_level => VerificationLevel as VerificationLevel,
    content_filter => ContentFilter as ContentFilter,
    notification_level => NotificationLevel as NotificationLevel,
    video_quality_mode => VideoQualityMode as VideoQualityMode,
    privacy_level => StagePrivacyLevel as StagePrivacyLevel,
    sticker_format_type => StickerFormatType as StickerFormatType,
    scheduled_event_status => ScheduledEventStatus as ScheduledEventStatus,
    location_type => ScheduledEventLocationType as LocationType,
    trigger_type => AutoModTriggerType as TriggerType,
    event_type => AutoModEventType as EventType,
}

fn id_of(raw: &Value) -> Result<Snowflake, DomainError> {
    Snowflake::from_json(raw).ok_or_else(|| DomainError::InvalidSnowflake(raw.to_string()))
}

fn hash_of(raw: &Value) -> Result<&str, DomainError> {
    raw.as_str()
        .ok_or_else(|| DomainError::invalid_field("hash", "expected a string"))
}

fn list_of<'v>(raw: &'v Value, field: &'static str) -> Result<&'v Vec<Value>, DomainError> {
    raw.as_array()
        .ok_or_else(|| DomainError::invalid_field(field, "expected a list"))
}

fn target_id_of(entry: &AuditLogEntry<'_>) -> Result<Snowflake, DomainError> {
    entry.target_id().ok_or(DomainError::MissingField("target_id"))
}

fn permissions(_: &AuditLogEntry<'_>, raw: &Value) -> Result<DiffValue, DomainError> {
    Permissions::from_json(raw).map(DiffValue::Permissions)
}

fn snowflake(_: &AuditLogEntry<'_>, raw: &Value) -> Result<DiffValue, DomainError> {
    id_of(raw).map(DiffValue::Snowflake)
}

fn colour(_: &AuditLogEntry<'_>, raw: &Value) -> Result<DiffValue, DomainError> {
    Colour::from_json(raw).map(DiffValue::Colour)
}

fn member_id(entry: &AuditLogEntry<'_>, raw: &Value) -> Result<DiffValue, DomainError> {
    let id = id_of(raw)?;
    Ok(DiffValue::User(Resolved::or_object(
        entry.context().member_or_user(id),
        id,
    )))
}

fn guild_id(entry: &AuditLogEntry<'_>, raw: &Value) -> Result<DiffValue, DomainError> {
    let id = id_of(raw)?;
    Ok(DiffValue::Guild(entry.context().guild_by_id(id)))
}

fn channel(entry: &AuditLogEntry<'_>, raw: &Value) -> Result<DiffValue, DomainError> {
    let id = id_of(raw)?;
    Ok(DiffValue::Channel(entry.context().channel(id)))
}

fn channels(entry: &AuditLogEntry<'_>, raw: &Value) -> Result<DiffValue, DomainError> {
    list_of(raw, "exempt_channels")?
        .iter()
        .map(|item| id_of(item).map(|id| entry.context().channel(id)))
        .collect::<Result<Vec<_>, _>>()
        .map(DiffValue::Channels)
}

fn roles(entry: &AuditLogEntry<'_>, raw: &Value) -> Result<DiffValue, DomainError> {
    list_of(raw, "exempt_roles")?
        .iter()
        .map(|item| id_of(item).map(|id| entry.context().role(id, None)))
        .collect::<Result<Vec<_>, _>>()
        .map(DiffValue::Roles)
}

/// Overwrite type `0` targets a role, `1` a member
fn overwrites(entry: &AuditLogEntry<'_>, raw: &Value) -> Result<DiffValue, DomainError> {
    let ctx = entry.context();
    let mut decoded = Vec::new();

    for item in list_of(raw, "permission_overwrites")? {
        let field = |name: &'static str| item.get(name).ok_or(DomainError::MissingField(name));

        let allow = Permissions::from_json(field("allow")?)?;
        let deny = Permissions::from_json(field("deny")?)?;
        let id = id_of(field("id")?)?;
        let kind = field("type")?;

        let target = match overwrite_kind(kind) {
            Some(0) => ctx.cached_role(id).map(OverwriteTarget::Role),
            Some(1) => ctx.member_or_user(id).map(OverwriteTarget::Member),
            _ => None,
        }
        .unwrap_or_else(|| OverwriteTarget::Object(Object::new(id)));

        decoded.push((target, PermissionOverwrite::from_pair(allow, deny)));
    }

    Ok(DiffValue::Overwrites(decoded))
}

/// Overwrite type marker; sent as an integer in changes, as a string in options
pub(crate) fn overwrite_kind(raw: &Value) -> Option<i64> {
    match raw {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

fn icon(entry: &AuditLogEntry<'_>, raw: &Value) -> Result<DiffValue, DomainError> {
    let ctx = entry.context();
    let cdn = ctx.cdn();
    Ok(DiffValue::Asset(Asset::guild_icon(
        &cdn.base_url,
        ctx.guild().id,
        hash_of(raw)?,
        cdn.image_size,
    )))
}

fn guild_image(entry: &AuditLogEntry<'_>, raw: &Value, path: &str) -> Result<DiffValue, DomainError> {
    let ctx = entry.context();
    let cdn = ctx.cdn();
    Ok(DiffValue::Asset(Asset::guild_image(
        &cdn.base_url,
        ctx.guild().id,
        hash_of(raw)?,
        path,
        cdn.image_size,
    )))
}

fn splash(entry: &AuditLogEntry<'_>, raw: &Value) -> Result<DiffValue, DomainError> {
    guild_image(entry, raw, "splashes")
}

fn banner(entry: &AuditLogEntry<'_>, raw: &Value) -> Result<DiffValue, DomainError> {
    guild_image(entry, raw, "banners")
}

fn discovery_splash(entry: &AuditLogEntry<'_>, raw: &Value) -> Result<DiffValue, DomainError> {
    guild_image(entry, raw, "discovery-splashes")
}

fn avatar(entry: &AuditLogEntry<'_>, raw: &Value) -> Result<DiffValue, DomainError> {
    let cdn = entry.context().cdn();
    Ok(DiffValue::Asset(Asset::avatar(
        &cdn.base_url,
        target_id_of(entry)?,
        hash_of(raw)?,
        cdn.image_size,
    )))
}

fn scheduled_event_image(entry: &AuditLogEntry<'_>, raw: &Value) -> Result<DiffValue, DomainError> {
    let cdn = entry.context().cdn();
    Ok(DiffValue::Asset(Asset::scheduled_event_image(
        &cdn.base_url,
        target_id_of(entry)?,
        hash_of(raw)?,
        cdn.image_size,
    )))
}

fn voice_region(_: &AuditLogEntry<'_>, raw: &Value) -> Result<DiffValue, DomainError> {
    raw.as_str()
        .map(|id| DiffValue::VoiceRegion(VoiceRegion::from_id(id)))
        .ok_or_else(|| DomainError::invalid_field("rtc_region", "expected a string"))
}

/// `type` means a sticker type on sticker actions, a channel type everywhere else
fn channel_or_sticker_type(entry: &AuditLogEntry<'_>, raw: &Value) -> Result<DiffValue, DomainError> {
    let decoded = if entry.action().name().starts_with("sticker_") {
        StickerType::from_json(raw).map(DiffValue::StickerType)
    } else {
        ChannelType::from_json(raw).map(DiffValue::ChannelType)
    };
    decoded.ok_or_else(|| DomainError::invalid_field("type", raw))
}

fn automod_actions(_: &AuditLogEntry<'_>, raw: &Value) -> Result<DiffValue, DomainError> {
    list_of(raw, "actions")?
        .iter()
        .map(AutoModAction::from_json)
        .collect::<Result<Vec<_>, _>>()
        .map(DiffValue::AutoModActions)
}

fn trigger_metadata(_: &AuditLogEntry<'_>, raw: &Value) -> Result<DiffValue, DomainError> {
    AutoModTriggerMetadata::from_json(raw).map(DiffValue::TriggerMetadata)
}
