//! Action-specific extra payloads carried in an entry's `options`

use chat_core::{Channel, DomainError, MemberOrUser, Resolved, Role, Snowflake};
use serde_json::{Map, Value};

use super::AuditLogContext;
use crate::action::AuditLogAction;
use crate::changes::overwrite_kind;

/// Extra information attached to certain actions
#[derive(Debug, Clone, PartialEq)]
pub enum AuditLogExtra {
    /// `member_prune`
    MemberPrune {
        delete_member_days: i64,
        members_removed: i64,
    },
    /// `member_move` and `message_delete`
    MemberMoveOrMessageDelete {
        channel: Resolved<Channel>,
        count: i64,
    },
    /// `member_disconnect`
    MemberDisconnect { count: i64 },
    /// `message_pin` and `message_unpin`
    Pin {
        channel: Resolved<Channel>,
        message_id: Snowflake,
    },
    /// `overwrite_*` on a member overwrite; `None` when the user is unknown
    OverwriteMember(Option<MemberOrUser>),
    /// `overwrite_*` on a role overwrite
    OverwriteRole(Resolved<Role>),
    /// `stage_instance_*`
    StageInstance { channel: Resolved<Channel> },
    /// Any other action, or options that could not be read
    Raw(Map<String, Value>),
}

impl AuditLogExtra {
    /// Decode `options` for `action`
    ///
    /// Returns `None` when there are no options. Values that cannot be
    /// coerced keep the options raw.
    pub(crate) fn decode(
        ctx: &AuditLogContext<'_>,
        action: AuditLogAction,
        options: &Map<String, Value>,
    ) -> Result<Option<Self>, DomainError> {
        if options.is_empty() {
            return Ok(None);
        }

        let extra = match action {
            AuditLogAction::MemberPrune => Self::MemberPrune {
                delete_member_days: int_option(options, "delete_member_days")?,
                members_removed: int_option(options, "members_removed")?,
            },
            AuditLogAction::MemberMove | AuditLogAction::MessageDelete => {
                Self::MemberMoveOrMessageDelete {
                    channel: ctx.channel(id_option(options, "channel_id")?),
                    count: int_option(options, "count")?,
                }
            }
            AuditLogAction::MemberDisconnect => Self::MemberDisconnect {
                count: int_option(options, "count")?,
            },
            AuditLogAction::MessagePin | AuditLogAction::MessageUnpin => Self::Pin {
                channel: ctx.channel(id_option(options, "channel_id")?),
                message_id: id_option(options, "message_id")?,
            },
            AuditLogAction::OverwriteCreate
            | AuditLogAction::OverwriteUpdate
            | AuditLogAction::OverwriteDelete => {
                let id = id_option(options, "id")?;
                match options.get("type").and_then(overwrite_kind) {
                    Some(1) => Self::OverwriteMember(ctx.member_or_user(id)),
                    Some(0) => {
                        let name = options
                            .get("role_name")
                            .and_then(Value::as_str)
                            .map(str::to_string);
                        Self::OverwriteRole(ctx.role(id, name))
                    }
                    _ => Self::Raw(options.clone()),
                }
            }
            AuditLogAction::StageInstanceCreate
            | AuditLogAction::StageInstanceUpdate
            | AuditLogAction::StageInstanceDelete => Self::StageInstance {
                channel: ctx.channel(id_option(options, "channel_id")?),
            },
            _ => Self::Raw(options.clone()),
        };

        Ok(Some(extra))
    }

    #[inline]
    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }
}

/// Option values arrive as strings; integers are accepted too
fn int_option(options: &Map<String, Value>, key: &'static str) -> Result<i64, DomainError> {
    let raw = options.get(key).ok_or(DomainError::MissingField(key))?;
    match raw {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
    .ok_or_else(|| DomainError::invalid_field(key, raw))
}

fn id_option(options: &Map<String, Value>, key: &'static str) -> Result<Snowflake, DomainError> {
    let raw = options.get(key).ok_or(DomainError::MissingField(key))?;
    Snowflake::from_json(raw).ok_or_else(|| DomainError::InvalidSnowflake(raw.to_string()))
}
