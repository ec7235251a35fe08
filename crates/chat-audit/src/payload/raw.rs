//! Audit log wire payloads
//!
//! These mirror the listing response field for field. Interpretation happens
//! later, in [`crate::entry`] and [`crate::changes`].

use std::io::Read;

use chat_core::{Snowflake, User};
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::AuditLogResult;

/// One raw audit log record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuditLogEntryPayload {
    pub id: Snowflake,
    pub action_type: i64,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub options: Option<Map<String, Value>>,
    #[serde(default)]
    pub changes: Option<Vec<AuditLogChangePayload>>,
    #[serde(default)]
    pub user_id: Option<Snowflake>,
    #[serde(default)]
    pub target_id: Option<Snowflake>,
}

impl AuditLogEntryPayload {
    /// Deserialize a single record from a JSON value
    pub fn from_value(value: Value) -> AuditLogResult<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

/// One `{key, old_value?, new_value?}` change record
///
/// `None` means the key was absent; an explicit JSON `null` is
/// `Some(Value::Null)`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuditLogChangePayload {
    pub key: String,
    #[serde(default, deserialize_with = "present")]
    pub old_value: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    pub new_value: Option<Value>,
}

impl AuditLogChangePayload {
    pub fn new(key: impl Into<String>, old_value: Option<Value>, new_value: Option<Value>) -> Self {
        Self {
            key: key.into(),
            old_value,
            new_value,
        }
    }
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// A user as embedded in the listing response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserPayload {
    pub id: Snowflake,
    pub username: String,
    #[serde(default)]
    pub discriminator: Option<String>,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub bot: bool,
    #[serde(default)]
    pub system: bool,
}

impl From<UserPayload> for User {
    fn from(payload: UserPayload) -> Self {
        let mut user = User::new(
            payload.id,
            payload.username,
            payload.discriminator.unwrap_or_else(|| "0".to_string()),
        );
        user.global_name = payload.global_name;
        user.avatar = payload.avatar;
        user.bot = payload.bot;
        user.system = payload.system;
        user
    }
}

/// A full audit log listing response
///
/// Top-level keys other than `audit_log_entries` and `users` (webhooks,
/// integrations, threads, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AuditLogPage {
    #[serde(default)]
    pub audit_log_entries: Vec<AuditLogEntryPayload>,
    #[serde(default)]
    pub users: Vec<UserPayload>,
}

impl AuditLogPage {
    /// Parse a listing response from a JSON string
    pub fn from_json(json: &str) -> AuditLogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a listing response from a reader
    pub fn from_reader(reader: impl Read) -> AuditLogResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }
}
