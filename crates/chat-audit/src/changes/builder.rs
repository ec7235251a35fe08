//! Builds the before/after bags from an entry's raw change list

use chat_core::{AutoModTriggerMetadata, DomainError, ScheduledEventLocation, ScheduledEventLocationType};
use serde_json::Value;

use super::diff::{AuditLogDiff, DiffValue};
use super::transformers::lookup;
use crate::entry::AuditLogEntry;
use crate::payload::AuditLogChangePayload;

/// Which side a composite record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Before,
    After,
}

/// The decoded change set of one entry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditLogChanges {
    pub before: AuditLogDiff,
    pub after: AuditLogDiff,
}

impl AuditLogChanges {
    /// Decode `records` in the context of `entry`
    ///
    /// Records are processed in key order regardless of input order; the
    /// `location` field depends on `channel_id` and `entity_type` having been
    /// decoded first.
    pub fn new(entry: &AuditLogEntry<'_>, mut records: Vec<AuditLogChangePayload>) -> Self {
        records.sort_by(|a, b| a.key.cmp(&b.key));

        let mut changes = Self::default();
        for record in records {
            changes.apply(entry, record);
        }

        changes.before.alias("colour", "color");
        changes.after.alias("colour", "color");
        changes.before.alias("expire_behavior", "expire_behaviour");
        changes.after.alias("expire_behavior", "expire_behaviour");

        changes
    }

    fn apply(&mut self, entry: &AuditLogEntry<'_>, record: AuditLogChangePayload) {
        let key = record.key.as_str();
        match key {
            "$add" => return self.roles(entry, Side::After, record.new_value),
            "$remove" => return self.roles(entry, Side::Before, record.new_value),
            "$add_keyword_filter" | "$add_regex_patterns" | "$add_allow_list" => {
                return self.trigger_metadata(entry, Side::After, key, record.new_value);
            }
            "$remove_keyword_filter" | "$remove_regex_patterns" | "$remove_allow_list" => {
                return self.trigger_metadata(entry, Side::Before, key, record.new_value);
            }
            _ => {}
        }

        let field = lookup(key);
        let name = field.map_or(key, |f| f.exposed_name(key)).to_string();
        let decode = |raw: &Value| match field {
            Some(f) => f.apply(entry, key, raw),
            None => {
                tracing::trace!(entry_id = %entry.id(), key = %key, "Passing value through");
                DiffValue::from(raw.clone())
            }
        };

        if let Some(raw) = &record.old_value {
            let value = with_location(&self.before, &name, decode(raw), raw);
            self.before.set(name.clone(), value);
        }
        if let Some(raw) = &record.new_value {
            let value = with_location(&self.after, &name, decode(raw), raw);
            self.after.set(name, value);
        }
    }

    fn sides(&mut self, side: Side) -> (&mut AuditLogDiff, &mut AuditLogDiff) {
        match side {
            Side::After => (&mut self.after, &mut self.before),
            Side::Before => (&mut self.before, &mut self.after),
        }
    }

    /// Role stubs `[{id, name}]` become `roles` on `side`; the other side
    /// gets an empty list unless it already has one
    fn roles(&mut self, entry: &AuditLogEntry<'_>, side: Side, raw: Option<Value>) {
        let raw = raw.unwrap_or(Value::Null);
        let value = match role_stubs(entry, &raw) {
            Ok(value) => value,
            Err(error) => {
                tracing::warn!(
                    entry_id = %entry.id(),
                    error = %error,
                    "Malformed role list, keeping raw"
                );
                DiffValue::from(raw)
            }
        };

        let (target, other) = self.sides(side);
        other.set_default("roles", DiffValue::Roles(Vec::new()));
        target.set("roles", value);
    }

    /// `$add_<field>` / `$remove_<field>` become a single-field
    /// `trigger_metadata` on `side`; the other side gets a null placeholder
    fn trigger_metadata(&mut self, entry: &AuditLogEntry<'_>, side: Side, key: &str, raw: Option<Value>) {
        let raw = raw.unwrap_or(Value::Null);
        let field = key.split_once('_').map_or(key, |(_, rest)| rest);

        let value = match AutoModTriggerMetadata::single_list(field, &raw) {
            Ok(metadata) => DiffValue::TriggerMetadata(metadata),
            Err(error) => {
                tracing::warn!(
                    entry_id = %entry.id(),
                    key = %key,
                    error = %error,
                    "Malformed trigger metadata, keeping raw"
                );
                DiffValue::from(raw)
            }
        };

        let (target, other) = self.sides(side);
        other.set_default("trigger_metadata", DiffValue::Null);
        target.set("trigger_metadata", value);
    }
}

fn role_stubs(entry: &AuditLogEntry<'_>, raw: &Value) -> Result<DiffValue, DomainError> {
    let stubs = raw
        .as_array()
        .ok_or_else(|| DomainError::invalid_field("roles", "expected a list"))?;

    stubs
        .iter()
        .map(|stub| {
            let id = stub
                .get("id")
                .and_then(chat_core::Snowflake::from_json)
                .ok_or(DomainError::MissingField("id"))?;
            let name = stub.get("name").and_then(Value::as_str).map(str::to_string);
            Ok(entry.context().role(id, name))
        })
        .collect::<Result<Vec<_>, _>>()
        .map(DiffValue::Roles)
}

/// Wrap a decoded `location` using sibling fields already in `bag`
///
/// External events keep the raw string; channel-hosted events reuse the
/// decoded `channel`. Anything else is left as decoded.
fn with_location(bag: &AuditLogDiff, name: &str, decoded: DiffValue, raw: &Value) -> DiffValue {
    if name != "location" {
        return decoded;
    }
    let Some(location_type) = bag.get("location_type") else {
        return decoded;
    };

    if *location_type == DiffValue::LocationType(ScheduledEventLocationType::External) {
        return match raw {
            Value::String(place) => DiffValue::Location(ScheduledEventLocation::External(place.clone())),
            _ => decoded,
        };
    }

    match bag.get("channel").and_then(DiffValue::as_channel) {
        Some(channel) => DiffValue::Location(ScheduledEventLocation::Channel(channel.clone())),
        None => decoded,
    }
}
