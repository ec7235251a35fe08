//! One decoded audit log record
//!
//! Everything except the id, action, actor and reason is computed on first
//! access and cached for the lifetime of the entry. The memo cells make the
//! entry `!Sync`; share it across threads behind a lock.

use std::cell::{OnceCell, RefCell};
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use chat_core::{Guild, Invite, MemberOrUser, Object, Resolved, Snowflake};
use serde_json::{Map, Value};

use super::{AuditLogContext, AuditLogExtra, AuditLogTarget, InviteTarget};
use crate::action::{AuditLogAction, AuditLogActionCategory, TargetType};
use crate::changes::{AuditLogChanges, AuditLogDiff, DiffValue};
use crate::payload::{AuditLogChangePayload, AuditLogEntryPayload};

/// A decoded audit log entry
///
/// Equality and hashing use the entry id only.
pub struct AuditLogEntry<'a> {
    ctx: AuditLogContext<'a>,
    id: Snowflake,
    action: AuditLogAction,
    actor: Option<MemberOrUser>,
    target_id: Option<Snowflake>,
    reason: Option<String>,
    options: Option<Map<String, Value>>,
    /// Taken on first call to [`AuditLogEntry::changes`]
    raw_changes: RefCell<Option<Vec<AuditLogChangePayload>>>,
    changes: OnceCell<AuditLogChanges>,
    target: OnceCell<Option<AuditLogTarget>>,
    extra: OnceCell<Option<AuditLogExtra>>,
    created_at: OnceCell<DateTime<Utc>>,
    category: OnceCell<Option<AuditLogActionCategory>>,
}

impl<'a> AuditLogEntry<'a> {
    pub fn new(ctx: AuditLogContext<'a>, payload: AuditLogEntryPayload) -> Self {
        let actor = payload.user_id.and_then(|id| ctx.member_or_user(id));

        Self {
            ctx,
            id: payload.id,
            action: AuditLogAction::from_value(payload.action_type),
            actor,
            target_id: payload.target_id,
            reason: payload.reason,
            options: payload.options,
            raw_changes: RefCell::new(Some(payload.changes.unwrap_or_default())),
            changes: OnceCell::new(),
            target: OnceCell::new(),
            extra: OnceCell::new(),
            created_at: OnceCell::new(),
            category: OnceCell::new(),
        }
    }

    #[inline]
    pub fn id(&self) -> Snowflake {
        self.id
    }

    #[inline]
    pub fn action(&self) -> AuditLogAction {
        self.action
    }

    /// Who performed the action, when known
    pub fn actor(&self) -> Option<&MemberOrUser> {
        self.actor.as_ref()
    }

    #[inline]
    pub fn target_id(&self) -> Option<Snowflake> {
        self.target_id
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    pub fn guild(&self) -> &'a Guild {
        self.ctx.guild()
    }

    pub fn context(&self) -> &AuditLogContext<'a> {
        &self.ctx
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        *self.created_at.get_or_init(|| self.id.created_at())
    }

    pub fn category(&self) -> Option<AuditLogActionCategory> {
        *self.category.get_or_init(|| self.action.category())
    }

    /// Decoded change set; the raw change list is consumed on first call
    pub fn changes(&self) -> &AuditLogChanges {
        self.changes.get_or_init(|| {
            let raw = self.raw_changes.borrow_mut().take().unwrap_or_default();
            tracing::debug!(
                entry_id = %self.id,
                action = %self.action,
                records = raw.len(),
                "Materializing audit log changes"
            );
            AuditLogChanges::new(self, raw)
        })
    }

    /// True until [`AuditLogEntry::changes`] has run
    pub fn has_raw_changes(&self) -> bool {
        self.raw_changes.borrow().is_some()
    }

    pub fn before(&self) -> &AuditLogDiff {
        &self.changes().before
    }

    pub fn after(&self) -> &AuditLogDiff {
        &self.changes().after
    }

    /// Action-specific extra information, when the record had options
    pub fn extra(&self) -> Option<&AuditLogExtra> {
        self.extra
            .get_or_init(|| {
                let options = self.options.as_ref()?;
                match AuditLogExtra::decode(&self.ctx, self.action, options) {
                    Ok(extra) => extra,
                    Err(error) => {
                        tracing::warn!(
                            entry_id = %self.id,
                            action = %self.action,
                            error = %error,
                            "Malformed audit log options, keeping raw"
                        );
                        Some(AuditLogExtra::Raw(options.clone()))
                    }
                }
            })
            .as_ref()
    }

    /// The entity the action was performed on
    pub fn target(&self) -> Option<&AuditLogTarget> {
        self.target.get_or_init(|| self.resolve_target()).as_ref()
    }

    fn resolve_target(&self) -> Option<AuditLogTarget> {
        let Some(target_type) = self.action.target_type() else {
            return self.target_id.map(|id| AuditLogTarget::Object(Object::new(id)));
        };

        match target_type {
            TargetType::Guild => return Some(AuditLogTarget::Guild(self.guild().clone())),
            TargetType::Invite => return Some(AuditLogTarget::Invite(Box::new(self.invite_target()))),
            _ => {}
        }

        let id = self.target_id?;
        let ctx = &self.ctx;
        let cache = ctx.cache();
        let guild_id = self.guild().id;

        let target = match target_type {
            TargetType::Channel => AuditLogTarget::Channel(ctx.channel(id)),
            TargetType::User | TargetType::Message => {
                AuditLogTarget::User(ctx.member_or_user(id)?)
            }
            TargetType::Role => AuditLogTarget::Role(ctx.role(id, None)),
            TargetType::Emoji => {
                AuditLogTarget::Emoji(ctx.fallback(cache.emoji(id), id, None, "emoji"))
            }
            TargetType::StageInstance => AuditLogTarget::StageInstance(ctx.fallback(
                cache.stage_instance(guild_id, id),
                id,
                None,
                "stage_instance",
            )),
            TargetType::Sticker => {
                AuditLogTarget::Sticker(ctx.fallback(cache.sticker(id), id, None, "sticker"))
            }
            TargetType::Thread => {
                AuditLogTarget::Thread(ctx.fallback(cache.thread(guild_id, id), id, None, "thread"))
            }
            TargetType::ScheduledEvent => AuditLogTarget::ScheduledEvent(ctx.fallback(
                cache.scheduled_event(guild_id, id),
                id,
                None,
                "scheduled_event",
            )),
            TargetType::Webhook
            | TargetType::Integration
            | TargetType::ApplicationCommand
            | TargetType::AutoModerationRule
            | TargetType::Guild
            | TargetType::Invite => AuditLogTarget::Object(Object::new(id)),
        };

        Some(target)
    }

    /// Rebuild the invite from "before" on deletion, "after" otherwise
    fn invite_target(&self) -> InviteTarget {
        let changeset = if self.action == AuditLogAction::InviteDelete {
            self.before()
        } else {
            self.after()
        };

        let int_field = |key: &str| {
            changeset
                .get(key)
                .and_then(DiffValue::as_i64)
                .and_then(|v| i32::try_from(v).ok())
        };

        let code = changeset.get("code").and_then(DiffValue::as_str).unwrap_or_default();
        let mut invite = Invite::new(code, self.guild().id);
        if let Some(max_age) = int_field("max_age") {
            invite = invite.with_max_age(max_age);
        }
        if let Some(max_uses) = int_field("max_uses") {
            invite = invite.with_max_uses(max_uses);
        }
        invite.uses = int_field("uses").unwrap_or_default();
        invite.temporary = changeset
            .get("temporary")
            .and_then(DiffValue::as_bool)
            .unwrap_or_default();

        let channel = changeset.get("channel").and_then(DiffValue::as_channel).cloned();
        let inviter = changeset.get("inviter").and_then(DiffValue::as_user).cloned();

        invite = invite
            .with_channel(channel.as_ref().map(Resolved::id))
            .with_inviter(inviter.as_ref().map(Resolved::id));

        InviteTarget {
            invite,
            channel,
            inviter,
        }
    }

    /// One-line human readable summary
    pub fn summary(&self) -> String {
        let actor = self
            .actor
            .as_ref()
            .map_or_else(|| "unknown".to_string(), |a| a.user().tag());
        let category = self
            .category()
            .map_or_else(|| "-".to_string(), |c| format!("{c:?}").to_lowercase());
        let target = self
            .target()
            .map_or_else(|| "-".to_string(), AuditLogTarget::describe);

        let mut keys: Vec<&str> = self.before().keys().chain(self.after().keys()).collect();
        keys.sort_unstable();
        keys.dedup();

        format!(
            "{} {} [{}] by {} on {} changed: {}",
            self.id,
            self.action,
            category,
            actor,
            target,
            if keys.is_empty() { "-".to_string() } else { keys.join(",") }
        )
    }
}

impl PartialEq for AuditLogEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for AuditLogEntry<'_> {}

impl Hash for AuditLogEntry<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for AuditLogEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuditLogEntry")
            .field("id", &self.id)
            .field("action", &self.action)
            .field("actor", &self.actor.as_ref().map(MemberOrUser::id))
            .field("target_id", &self.target_id)
            .finish_non_exhaustive()
    }
}

/// `<AuditLogEntry id=.. action=.. user=..>`
impl fmt::Display for AuditLogEntry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<AuditLogEntry id={} action={} user=", self.id, self.action)?;
        match &self.actor {
            Some(actor) => write!(f, "{}>", actor.user().tag()),
            None => f.write_str("None>"),
        }
    }
}
