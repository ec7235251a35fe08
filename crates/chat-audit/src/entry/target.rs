//! What an entry acted on

use chat_core::{
    Channel, Emoji, Guild, Invite, MemberOrUser, Object, Resolved, Role, ScheduledEvent,
    StageInstance, Sticker, Thread,
};

/// Resolved target of an audit log entry
#[derive(Debug, Clone, PartialEq)]
pub enum AuditLogTarget {
    Guild(Guild),
    Channel(Resolved<Channel>),
    /// Users and message authors; only produced when the user is known
    User(MemberOrUser),
    Role(Resolved<Role>),
    Invite(Box<InviteTarget>),
    Emoji(Resolved<Emoji>),
    StageInstance(Resolved<StageInstance>),
    Sticker(Resolved<Sticker>),
    Thread(Resolved<Thread>),
    ScheduledEvent(Resolved<ScheduledEvent>),
    /// Webhooks, integrations, commands, rules and unknown actions
    Object(Object),
}

impl AuditLogTarget {
    /// Short label for summaries
    pub fn describe(&self) -> String {
        fn resolved<T>(kind: &str, value: &Resolved<T>, name: impl Fn(&T) -> String) -> String {
            match value {
                Resolved::Cached(entity) => format!("{kind} {}", name(entity)),
                Resolved::Object(object) => format!("{kind} {object}"),
            }
        }

        match self {
            Self::Guild(guild) => format!("guild {}", guild.name),
            Self::Channel(channel) => resolved("channel", channel, |c| format!("#{}", c.name)),
            Self::User(user) => format!("user {}", user.user().tag()),
            Self::Role(role) => resolved("role", role, |r| format!("@{}", r.name)),
            Self::Invite(invite) => format!("invite {}", invite.invite.code),
            Self::Emoji(emoji) => resolved("emoji", emoji, |e| format!(":{}:", e.name)),
            Self::StageInstance(stage) => resolved("stage", stage, |s| s.topic.clone()),
            Self::Sticker(sticker) => resolved("sticker", sticker, |s| s.name.clone()),
            Self::Thread(thread) => resolved("thread", thread, |t| t.name.clone()),
            Self::ScheduledEvent(event) => resolved("event", event, |e| e.name.clone()),
            Self::Object(object) => format!("object {object}"),
        }
    }
}

/// An invite rebuilt from an entry's change set
///
/// Invite actions carry no target id; the invite is described entirely by
/// its changed fields.
#[derive(Debug, Clone, PartialEq)]
pub struct InviteTarget {
    pub invite: Invite,
    pub channel: Option<Resolved<Channel>>,
    pub inviter: Option<Resolved<MemberOrUser>>,
}
