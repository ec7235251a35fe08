//! Auto-moderation rule value types
//!
//! Built from loosely-typed JSON because audit logs only ever carry partial
//! rule payloads.

use serde_json::Value;

use crate::error::DomainError;
use crate::value_objects::Snowflake;

crate::int_enum! {
    /// What a rule watches for
    pub enum AutoModTriggerType {
        Keyword = 1 => "keyword",
        HarmfulLink = 2 => "harmful_link",
        Spam = 3 => "spam",
        KeywordPreset = 4 => "keyword_preset",
        MentionSpam = 5 => "mention_spam",
    }
}

crate::int_enum! {
    /// When a rule is evaluated
    pub enum AutoModEventType {
        MessageSend = 1 => "message_send",
    }
}

crate::int_enum! {
    /// What a rule does when it fires
    pub enum AutoModActionType {
        BlockMessage = 1 => "block_message",
        SendAlertMessage = 2 => "send_alert_message",
        Timeout = 3 => "timeout",
    }
}

crate::int_enum! {
    /// Platform-maintained keyword lists
    pub enum AutoModKeywordPresetType {
        Profanity = 1 => "profanity",
        SexualContent = 2 => "sexual_content",
        Slurs = 3 => "slurs",
    }
}

/// Extra data attached to an auto-moderation action
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoModActionMetadata {
    /// Alert channel for `SendAlertMessage`
    pub channel_id: Option<Snowflake>,
    /// Timeout length in seconds for `Timeout`
    pub timeout_duration: Option<i64>,
    /// Message shown to the member for `BlockMessage`
    pub custom_message: Option<String>,
}

/// An action taken when a rule fires
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoModAction {
    pub action_type: AutoModActionType,
    pub metadata: AutoModActionMetadata,
}

impl AutoModAction {
    /// Build from `{"type": n, "metadata": {...}}`
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let action_type = value
            .get("type")
            .and_then(AutoModActionType::from_json)
            .ok_or(DomainError::MissingField("type"))?;

        let metadata = value
            .get("metadata")
            .map(|meta| AutoModActionMetadata {
                channel_id: meta.get("channel_id").and_then(Snowflake::from_json),
                timeout_duration: meta.get("duration_seconds").and_then(Value::as_i64),
                custom_message: meta
                    .get("custom_message")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            })
            .unwrap_or_default();

        Ok(Self {
            action_type,
            metadata,
        })
    }
}

/// Trigger configuration of a rule
///
/// Every field is optional: audit logs report only the fields that changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoModTriggerMetadata {
    pub keyword_filter: Option<Vec<String>>,
    pub regex_patterns: Option<Vec<String>>,
    pub presets: Option<Vec<AutoModKeywordPresetType>>,
    pub allow_list: Option<Vec<String>>,
    pub mention_total_limit: Option<i64>,
    pub mention_raid_protection_enabled: Option<bool>,
}

impl AutoModTriggerMetadata {
    /// Build from a (possibly partial) trigger metadata object
    pub fn from_json(value: &Value) -> Result<Self, DomainError> {
        let Some(map) = value.as_object() else {
            return Err(DomainError::invalid_field(
                "trigger_metadata",
                "expected an object",
            ));
        };

        Ok(Self {
            keyword_filter: string_list(map.get("keyword_filter"), "keyword_filter")?,
            regex_patterns: string_list(map.get("regex_patterns"), "regex_patterns")?,
            presets: map
                .get("presets")
                .map(|v| {
                    v.as_array()
                        .map(|items| {
                            items
                                .iter()
                                .filter_map(AutoModKeywordPresetType::from_json)
                                .collect()
                        })
                        .ok_or_else(|| DomainError::invalid_field("presets", "expected a list"))
                })
                .transpose()?,
            allow_list: string_list(map.get("allow_list"), "allow_list")?,
            mention_total_limit: map.get("mention_total_limit").and_then(Value::as_i64),
            mention_raid_protection_enabled: map
                .get("mention_raid_protection_enabled")
                .and_then(Value::as_bool),
        })
    }

    /// Metadata with exactly one list field populated
    ///
    /// `field` is one of `keyword_filter`, `regex_patterns`, `allow_list`.
    pub fn single_list(field: &str, items: &Value) -> Result<Self, DomainError> {
        let mut payload = serde_json::Map::new();
        payload.insert(field.to_string(), items.clone());
        Self::from_json(&Value::Object(payload))
    }

    /// True when no field is populated
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn string_list(value: Option<&Value>, field: &'static str) -> Result<Option<Vec<String>>, DomainError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let items = value
        .as_array()
        .ok_or_else(|| DomainError::invalid_field(field, "expected a list"))?;
    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or_else(|| DomainError::invalid_field(field, "expected strings"))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}
