//! Audit log action enum
//!
//! Ordinals are grouped in blocks of ten by the kind of entity they touch,
//! which is how [`AuditLogAction::target_type`] is derived.

chat_core::int_enum! {
    /// What happened in an audit log entry
    pub enum AuditLogAction {
        GuildUpdate = 1 => "guild_update",
        ChannelCreate = 10 => "channel_create",
        ChannelUpdate = 11 => "channel_update",
        ChannelDelete = 12 => "channel_delete",
        OverwriteCreate = 13 => "overwrite_create",
        OverwriteUpdate = 14 => "overwrite_update",
        OverwriteDelete = 15 => "overwrite_delete",
        Kick = 20 => "kick",
        MemberPrune = 21 => "member_prune",
        Ban = 22 => "ban",
        Unban = 23 => "unban",
        MemberUpdate = 24 => "member_update",
        MemberRoleUpdate = 25 => "member_role_update",
        MemberMove = 26 => "member_move",
        MemberDisconnect = 27 => "member_disconnect",
        BotAdd = 28 => "bot_add",
        RoleCreate = 30 => "role_create",
        RoleUpdate = 31 => "role_update",
        RoleDelete = 32 => "role_delete",
        InviteCreate = 40 => "invite_create",
        InviteUpdate = 41 => "invite_update",
        InviteDelete = 42 => "invite_delete",
        WebhookCreate = 50 => "webhook_create",
        WebhookUpdate = 51 => "webhook_update",
        WebhookDelete = 52 => "webhook_delete",
        EmojiCreate = 60 => "emoji_create",
        EmojiUpdate = 61 => "emoji_update",
        EmojiDelete = 62 => "emoji_delete",
        MessageDelete = 72 => "message_delete",
        MessageBulkDelete = 73 => "message_bulk_delete",
        MessagePin = 74 => "message_pin",
        MessageUnpin = 75 => "message_unpin",
        IntegrationCreate = 80 => "integration_create",
        IntegrationUpdate = 81 => "integration_update",
        IntegrationDelete = 82 => "integration_delete",
        StageInstanceCreate = 83 => "stage_instance_create",
        StageInstanceUpdate = 84 => "stage_instance_update",
        StageInstanceDelete = 85 => "stage_instance_delete",
        StickerCreate = 90 => "sticker_create",
        StickerUpdate = 91 => "sticker_update",
        StickerDelete = 92 => "sticker_delete",
        ScheduledEventCreate = 100 => "scheduled_event_create",
        ScheduledEventUpdate = 101 => "scheduled_event_update",
        ScheduledEventDelete = 102 => "scheduled_event_delete",
        ThreadCreate = 110 => "thread_create",
        ThreadUpdate = 111 => "thread_update",
        ThreadDelete = 112 => "thread_delete",
        ApplicationCommandPermissionUpdate = 121 => "application_command_permission_update",
        AutoModerationRuleCreate = 140 => "auto_moderation_rule_create",
        AutoModerationRuleUpdate = 141 => "auto_moderation_rule_update",
        AutoModerationRuleDelete = 142 => "auto_moderation_rule_delete",
        AutoModerationBlockMessage = 143 => "auto_moderation_block_message",
        AutoModerationFlagToChannel = 144 => "auto_moderation_flag_to_channel",
        AutoModerationUserCommunicationDisabled = 145 => "auto_moderation_user_communication_disabled",
    }
}

/// Broad kind of change an action represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditLogActionCategory {
    Create,
    Update,
    Delete,
}

/// The kind of entity an action's `target_id` refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    Guild,
    Channel,
    User,
    Role,
    Invite,
    Webhook,
    Emoji,
    Message,
    Integration,
    StageInstance,
    Sticker,
    ScheduledEvent,
    Thread,
    ApplicationCommand,
    AutoModerationRule,
}

impl AuditLogAction {
    /// Create/update/delete classification
    ///
    /// Actions that are events rather than edits (kicks, bans, moves, pins,
    /// auto-moderation hits) have no category.
    pub fn category(self) -> Option<AuditLogActionCategory> {
        use AuditLogActionCategory::{Create, Delete, Update};

        match self {
            Self::ChannelCreate
            | Self::OverwriteCreate
            | Self::RoleCreate
            | Self::InviteCreate
            | Self::WebhookCreate
            | Self::EmojiCreate
            | Self::IntegrationCreate
            | Self::StageInstanceCreate
            | Self::StickerCreate
            | Self::ScheduledEventCreate
            | Self::ThreadCreate
            | Self::AutoModerationRuleCreate => Some(Create),

            Self::GuildUpdate
            | Self::ChannelUpdate
            | Self::OverwriteUpdate
            | Self::MemberUpdate
            | Self::MemberRoleUpdate
            | Self::RoleUpdate
            | Self::InviteUpdate
            | Self::WebhookUpdate
            | Self::EmojiUpdate
            | Self::IntegrationUpdate
            | Self::StageInstanceUpdate
            | Self::StickerUpdate
            | Self::ScheduledEventUpdate
            | Self::ThreadUpdate
            | Self::ApplicationCommandPermissionUpdate
            | Self::AutoModerationRuleUpdate => Some(Update),

            Self::ChannelDelete
            | Self::OverwriteDelete
            | Self::RoleDelete
            | Self::InviteDelete
            | Self::WebhookDelete
            | Self::EmojiDelete
            | Self::MessageDelete
            | Self::MessageBulkDelete
            | Self::IntegrationDelete
            | Self::StageInstanceDelete
            | Self::StickerDelete
            | Self::ScheduledEventDelete
            | Self::ThreadDelete
            | Self::AutoModerationRuleDelete => Some(Delete),

            Self::Kick
            | Self::MemberPrune
            | Self::Ban
            | Self::Unban
            | Self::MemberMove
            | Self::MemberDisconnect
            | Self::BotAdd
            | Self::MessagePin
            | Self::MessageUnpin
            | Self::AutoModerationBlockMessage
            | Self::AutoModerationFlagToChannel
            | Self::AutoModerationUserCommunicationDisabled
            | Self::Unknown(_) => None,
        }
    }

    /// Entity kind referenced by `target_id`; `None` for unknown actions
    pub fn target_type(self) -> Option<TargetType> {
        if self.is_unknown() {
            return None;
        }

        let target = match self.value() {
            v if v < 10 => TargetType::Guild,
            v if v < 20 => TargetType::Channel,
            v if v < 30 => TargetType::User,
            v if v < 40 => TargetType::Role,
            v if v < 50 => TargetType::Invite,
            v if v < 60 => TargetType::Webhook,
            v if v < 70 => TargetType::Emoji,
            73 => TargetType::Channel,
            v if v < 80 => TargetType::Message,
            v if v < 83 => TargetType::Integration,
            v if v < 90 => TargetType::StageInstance,
            v if v < 93 => TargetType::Sticker,
            v if v < 103 => TargetType::ScheduledEvent,
            v if v < 113 => TargetType::Thread,
            v if v < 122 => TargetType::ApplicationCommand,
            v if v < 143 => TargetType::AutoModerationRule,
            _ => TargetType::User,
        };
        Some(target)
    }
}
