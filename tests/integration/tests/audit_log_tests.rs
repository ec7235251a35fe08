//! Audit log decoding tests
//!
//! Every test decodes raw JSON records against the `TestGuild` harness.
//!
//! Run with: cargo test -p integration-tests --test audit_log_tests

use chat_audit::{
    AuditLogAction, AuditLogActionCategory, AuditLogExtra, AuditLogTarget, DiffValue,
    OverwriteTarget,
};
use chat_core::{
    AutoModTriggerMetadata, ChannelType, Colour, MemberOrUser, Object, Permissions, Resolved,
    ScheduledEventLocation, ScheduledEventLocationType, Snowflake, StickerType,
};
use integration_tests::{fixtures::*, TestGuild};
use proptest::prelude::*;
use serde_json::{json, Value};

// ============================================================================
// Change Set Tests
// ============================================================================

#[test]
fn test_no_changes_gives_empty_bags() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(EntryBuilder::new(22).target(BOB_ID).build())
        .unwrap();

    assert!(entry.before().is_empty());
    assert!(entry.after().is_empty());
}

#[test]
fn test_transformed_field_on_both_sides() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(
            EntryBuilder::new(31)
                .target(MODS_ROLE_ID)
                .changes(vec![change("permissions", Some(json!("8")), Some(json!("2048")))])
                .build(),
        )
        .unwrap();

    assert_eq!(
        entry.before().get("permissions"),
        Some(&DiffValue::Permissions(Permissions::ADMINISTRATOR))
    );
    assert_eq!(
        entry.after().get("permissions"),
        Some(&DiffValue::Permissions(Permissions::SEND_MESSAGES))
    );
}

#[test]
fn test_passthrough_field_is_verbatim() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(
            EntryBuilder::new(11)
                .target(GENERAL_ID)
                .changes(vec![
                    change("name", Some(json!("old")), Some(json!("new"))),
                    change("some_future_key", None, Some(json!({"nested": [1, 2]}))),
                ])
                .build(),
        )
        .unwrap();

    assert_eq!(entry.before().get("name"), Some(&DiffValue::Raw(json!("old"))));
    assert_eq!(entry.after().get("name"), Some(&DiffValue::Raw(json!("new"))));
    assert_eq!(
        entry.after().get("some_future_key"),
        Some(&DiffValue::Raw(json!({"nested": [1, 2]})))
    );
    assert!(!entry.before().contains("some_future_key"));
}

#[test]
fn test_null_value_is_null_and_absent_side_is_unset() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(
            EntryBuilder::new(11)
                .target(GENERAL_ID)
                .changes(vec![
                    change("topic", Some(Value::Null), Some(json!("hello"))),
                    change("nsfw", None, Some(json!(true))),
                ])
                .build(),
        )
        .unwrap();

    assert_eq!(entry.before().get("topic"), Some(&DiffValue::Null));
    assert_eq!(entry.after().get("topic").and_then(DiffValue::as_str), Some("hello"));
    assert!(!entry.before().contains("nsfw"));
    assert_eq!(entry.after().get("nsfw").and_then(DiffValue::as_bool), Some(true));
}

#[test]
fn test_renames_and_aliases() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(
            EntryBuilder::new(31)
                .target(MODS_ROLE_ID)
                .changes(vec![
                    change("color", Some(json!(0)), Some(json!(0x00ff_00))),
                    change("rate_limit_per_user", Some(json!(0)), Some(json!(30))),
                ])
                .build(),
        )
        .unwrap();

    let after = entry.after();
    assert_eq!(after.get("colour"), Some(&DiffValue::Colour(Colour::new(0x00ff_00))));
    assert_eq!(
        entry.before().get("colour").and_then(DiffValue::as_colour),
        Some(Colour::new(0))
    );
    assert_eq!(after.get("color"), after.get("colour"));
    assert_eq!(after.get("slowmode_delay").and_then(DiffValue::as_i64), Some(30));
    assert!(!after.contains("rate_limit_per_user"));
}

#[test]
fn test_expire_behaviour_alias() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(
            EntryBuilder::new(81)
                .target(GHOST_ID)
                .changes(vec![change("expire_behavior", Some(json!(0)), Some(json!(1)))])
                .build(),
        )
        .unwrap();

    assert_eq!(entry.after().get("expire_behaviour").and_then(DiffValue::as_i64), Some(1));
    assert_eq!(entry.before().get("expire_behaviour").and_then(DiffValue::as_i64), Some(0));
}

#[test]
fn test_member_references_resolve() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(
            EntryBuilder::new(1)
                .changes(vec![change(
                    "owner_id",
                    Some(json!(GHOST_ID.to_string())),
                    Some(json!(ALICE_ID.to_string())),
                )])
                .build(),
        )
        .unwrap();

    match entry.after().get("owner").and_then(DiffValue::as_user) {
        Some(Resolved::Cached(MemberOrUser::Member(member))) => {
            assert_eq!(member.user.username, "alice");
        }
        other => panic!("expected cached member, got {other:?}"),
    }
    assert_eq!(
        entry.before().get("owner").and_then(DiffValue::as_user),
        Some(&Resolved::Object(Object::new(Snowflake::new(GHOST_ID))))
    );
}

#[test]
fn test_channel_reference_and_type() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(
            EntryBuilder::new(1)
                .changes(vec![
                    change("afk_channel_id", None, Some(json!(VOICE_ID.to_string()))),
                    change("system_channel_id", None, Some(json!(GHOST_ID.to_string()))),
                ])
                .build(),
        )
        .unwrap();

    let afk = entry.after().get("afk_channel").and_then(DiffValue::as_channel).unwrap();
    assert_eq!(afk.cached().map(|c| c.name.as_str()), Some("Lobby"));
    assert_eq!(afk.cached().map(|c| c.channel_type), Some(ChannelType::Voice));

    let system = entry.after().get("system_channel").and_then(DiffValue::as_channel).unwrap();
    assert!(!system.is_cached());
    assert_eq!(system.id(), Snowflake::new(GHOST_ID));
}

#[test]
fn test_type_depends_on_action() {
    let guild = TestGuild::new();
    let channel = guild
        .entry(
            EntryBuilder::new(10)
                .target(GENERAL_ID)
                .changes(vec![change("type", None, Some(json!(2)))])
                .build(),
        )
        .unwrap();
    let sticker = guild
        .entry(
            EntryBuilder::new(90)
                .target(GHOST_ID)
                .changes(vec![change("type", None, Some(json!(2)))])
                .build(),
        )
        .unwrap();

    assert_eq!(channel.after().get("type"), Some(&DiffValue::ChannelType(ChannelType::Voice)));
    assert_eq!(sticker.after().get("type"), Some(&DiffValue::StickerType(StickerType::Guild)));
}

#[test]
fn test_icon_becomes_asset() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(
            EntryBuilder::new(1)
                .changes(vec![change("icon_hash", None, Some(json!("a_deadbeef")))])
                .build(),
        )
        .unwrap();

    let icon = entry.after().get("icon").and_then(DiffValue::as_asset).unwrap();
    assert!(icon.animated);
    assert_eq!(
        icon.url,
        format!("https://cdn.test/icons/{GUILD_ID}/a_deadbeef.gif?size=256")
    );
}

#[test]
fn test_avatar_without_target_stays_raw() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(
            EntryBuilder::new(24)
                .changes(vec![change("avatar_hash", None, Some(json!("abc")))])
                .build(),
        )
        .unwrap();

    assert_eq!(entry.after().get("avatar"), Some(&DiffValue::Raw(json!("abc"))));
}

#[test]
fn test_malformed_value_is_kept_raw() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(
            EntryBuilder::new(31)
                .target(MODS_ROLE_ID)
                .changes(vec![
                    change("permissions", Some(json!("not-a-number")), Some(json!("8"))),
                    change("color", None, Some(json!([1, 2]))),
                ])
                .build(),
        )
        .unwrap();

    assert_eq!(
        entry.before().get("permissions"),
        Some(&DiffValue::Raw(json!("not-a-number")))
    );
    assert_eq!(
        entry.after().get("permissions"),
        Some(&DiffValue::Permissions(Permissions::ADMINISTRATOR))
    );
    assert_eq!(entry.after().get("colour"), Some(&DiffValue::Raw(json!([1, 2]))));
}

#[test]
fn test_overwrites_resolve_targets() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(
            EntryBuilder::new(10)
                .target(GENERAL_ID)
                .changes(vec![change(
                    "permission_overwrites",
                    None,
                    Some(json!([
                        {"id": MODS_ROLE_ID.to_string(), "type": 0, "allow": "2048", "deny": "0"},
                        {"id": BOB_ID.to_string(), "type": "1", "allow": "0", "deny": "2048"},
                        {"id": GHOST_ID.to_string(), "type": 0, "allow": "0", "deny": "0"},
                    ])),
                )])
                .build(),
        )
        .unwrap();

    let Some(DiffValue::Overwrites(overwrites)) = entry.after().get("overwrites") else {
        panic!("expected decoded overwrites");
    };
    assert_eq!(overwrites.len(), 3);
    assert!(matches!(&overwrites[0].0, OverwriteTarget::Role(role) if role.name == "Mods"));
    assert_eq!(overwrites[0].1.get(Permissions::SEND_MESSAGES), Some(true));
    assert!(matches!(&overwrites[1].0, OverwriteTarget::Member(MemberOrUser::User(u)) if u.username == "bob"));
    assert_eq!(overwrites[1].1.get(Permissions::SEND_MESSAGES), Some(false));
    assert_eq!(overwrites[2].0, OverwriteTarget::Object(Object::new(Snowflake::new(GHOST_ID))));
}

// ============================================================================
// Composite Key Tests
// ============================================================================

#[test]
fn test_role_add_and_remove() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(
            EntryBuilder::new(25)
                .target(BOB_ID)
                .changes(vec![
                    change(
                        "$add",
                        None,
                        Some(json!([{"id": MODS_ROLE_ID.to_string(), "name": "Mods"}])),
                    ),
                    change(
                        "$remove",
                        None,
                        Some(json!([{"id": GHOST_ID.to_string(), "name": "Old Role"}])),
                    ),
                ])
                .build(),
        )
        .unwrap();

    let added = entry.after().get("roles").and_then(DiffValue::as_roles).unwrap();
    assert_eq!(added.len(), 1);
    assert!(added[0].is_cached());

    let removed = entry.before().get("roles").and_then(DiffValue::as_roles).unwrap();
    assert_eq!(
        removed,
        &[Resolved::Object(Object::named(
            Snowflake::new(GHOST_ID),
            Some("Old Role".to_string())
        ))]
    );
}

#[test]
fn test_single_role_add_fills_both_sides() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(
            EntryBuilder::new(25)
                .target(BOB_ID)
                .changes(vec![change(
                    "$add",
                    None,
                    Some(json!([{"id": MODS_ROLE_ID.to_string(), "name": "Mods"}])),
                )])
                .build(),
        )
        .unwrap();

    assert_eq!(entry.before().get("roles"), Some(&DiffValue::Roles(Vec::new())));
    assert_eq!(entry.after().get("roles").and_then(DiffValue::as_roles).map(<[_]>::len), Some(1));
}

#[test]
fn test_malformed_role_list_is_raw() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(
            EntryBuilder::new(25)
                .target(BOB_ID)
                .changes(vec![change("$remove", None, Some(json!("oops")))])
                .build(),
        )
        .unwrap();

    assert_eq!(entry.before().get("roles"), Some(&DiffValue::Raw(json!("oops"))));
    assert_eq!(entry.after().get("roles"), Some(&DiffValue::Roles(Vec::new())));
}

#[test]
fn test_trigger_metadata_add_keyword() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(
            EntryBuilder::new(141)
                .target(GHOST_ID)
                .changes(vec![change("$add_keyword_filter", None, Some(json!(["spoiler"])))])
                .build(),
        )
        .unwrap();

    let expected = AutoModTriggerMetadata {
        keyword_filter: Some(vec!["spoiler".to_string()]),
        ..AutoModTriggerMetadata::default()
    };
    assert_eq!(entry.after().get("trigger_metadata"), Some(&DiffValue::TriggerMetadata(expected)));
    assert_eq!(entry.before().get("trigger_metadata"), Some(&DiffValue::Null));
}

// ============================================================================
// Scheduled Event Location Tests
// ============================================================================

#[test]
fn test_external_location() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(
            EntryBuilder::new(100)
                .target(EVENT_ID)
                .changes(vec![
                    change("location", None, Some(json!("The Park"))),
                    change("entity_type", None, Some(json!(3))),
                ])
                .build(),
        )
        .unwrap();

    assert_eq!(
        entry.after().get("location_type"),
        Some(&DiffValue::LocationType(ScheduledEventLocationType::External))
    );
    assert_eq!(
        entry.after().get("location"),
        Some(&DiffValue::Location(ScheduledEventLocation::External("The Park".to_string())))
    );
}

#[test]
fn test_voice_location_uses_channel() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(
            EntryBuilder::new(101)
                .target(EVENT_ID)
                .changes(vec![
                    change("location", Some(json!("somewhere")), Some(Value::Null)),
                    change("entity_type", Some(json!(3)), Some(json!(2))),
                    change("channel_id", Some(Value::Null), Some(json!(VOICE_ID.to_string()))),
                ])
                .build(),
        )
        .unwrap();

    match entry.after().get("location") {
        Some(DiffValue::Location(ScheduledEventLocation::Channel(channel))) => {
            assert_eq!(channel.id(), Snowflake::new(VOICE_ID));
            assert!(channel.is_cached());
        }
        other => panic!("expected channel location, got {other:?}"),
    }
    assert_eq!(
        entry.before().get("location"),
        Some(&DiffValue::Location(ScheduledEventLocation::External("somewhere".to_string())))
    );
}

// ============================================================================
// Entry Tests
// ============================================================================

#[test]
fn test_changes_memoized_and_raw_list_released() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(
            EntryBuilder::new(11)
                .target(GENERAL_ID)
                .changes(vec![change("name", Some(json!("a")), Some(json!("b")))])
                .build(),
        )
        .unwrap();

    assert!(entry.has_raw_changes());
    let first = entry.changes();
    assert!(!entry.has_raw_changes());
    let second = entry.changes();
    assert!(std::ptr::eq(first, second));
    assert_eq!(second.after.get("name"), Some(&DiffValue::Raw(json!("b"))));
}

#[test]
fn test_member_prune_extra() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(
            EntryBuilder::new(21)
                .options(json!({"delete_member_days": "7", "members_removed": "12"}))
                .build(),
        )
        .unwrap();

    assert_eq!(
        entry.extra(),
        Some(&AuditLogExtra::MemberPrune {
            delete_member_days: 7,
            members_removed: 12,
        })
    );
}

#[test]
fn test_pin_extra() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(
            EntryBuilder::new(74)
                .target(BOB_ID)
                .options(json!({"channel_id": GENERAL_ID.to_string(), "message_id": "555"}))
                .build(),
        )
        .unwrap();

    match entry.extra() {
        Some(AuditLogExtra::Pin { channel, message_id }) => {
            assert!(channel.is_cached());
            assert_eq!(*message_id, Snowflake::new(555));
        }
        other => panic!("expected pin extra, got {other:?}"),
    }
}

#[test]
fn test_overwrite_extras() {
    let guild = TestGuild::new();
    let member = guild
        .entry(
            EntryBuilder::new(13)
                .target(GENERAL_ID)
                .options(json!({"id": ALICE_ID.to_string(), "type": "1"}))
                .build(),
        )
        .unwrap();
    let role = guild
        .entry(
            EntryBuilder::new(13)
                .target(GENERAL_ID)
                .options(json!({"id": GHOST_ID.to_string(), "type": "0", "role_name": "Gone"}))
                .build(),
        )
        .unwrap();
    let stranger = guild
        .entry(
            EntryBuilder::new(15)
                .target(GENERAL_ID)
                .options(json!({"id": GHOST_ID.to_string(), "type": "1"}))
                .build(),
        )
        .unwrap();

    assert!(matches!(
        member.extra(),
        Some(AuditLogExtra::OverwriteMember(Some(MemberOrUser::Member(_))))
    ));
    assert_eq!(
        role.extra(),
        Some(&AuditLogExtra::OverwriteRole(Resolved::Object(Object::named(
            Snowflake::new(GHOST_ID),
            Some("Gone".to_string())
        ))))
    );
    assert_eq!(stranger.extra(), Some(&AuditLogExtra::OverwriteMember(None)));
}

#[test]
fn test_unrecognised_options_stay_raw() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(
            EntryBuilder::new(80)
                .target(GHOST_ID)
                .options(json!({"integration_type": "twitch"}))
                .build(),
        )
        .unwrap();

    assert!(entry.extra().unwrap().is_raw());
}

#[test]
fn test_invite_delete_reads_before() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(
            EntryBuilder::new(42)
                .changes(vec![
                    change("code", Some(json!("abc123")), None),
                    change("channel_id", Some(json!(GENERAL_ID.to_string())), None),
                    change("inviter_id", Some(json!(BOB_ID.to_string())), None),
                    change("max_uses", Some(json!(0)), None),
                    change("max_age", Some(json!(3600)), None),
                    change("uses", Some(json!(4)), None),
                    change("temporary", Some(json!(false)), None),
                ])
                .build(),
        )
        .unwrap();

    let Some(AuditLogTarget::Invite(target)) = entry.target() else {
        panic!("expected an invite target");
    };
    assert_eq!(target.invite.code, "abc123");
    assert_eq!(target.invite.max_uses, None);
    assert_eq!(target.invite.max_age, Some(3600));
    assert_eq!(target.invite.uses, 4);
    assert_eq!(target.invite.channel_id, Some(Snowflake::new(GENERAL_ID)));
    assert_eq!(target.invite.inviter_id, Some(Snowflake::new(BOB_ID)));
    assert!(target.channel.as_ref().is_some_and(Resolved::is_cached));
}

#[test]
fn test_invite_create_reads_after() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(
            EntryBuilder::new(40)
                .changes(vec![
                    change("code", None, Some(json!("fresh"))),
                    change("max_uses", None, Some(json!(10))),
                    change("temporary", None, Some(json!(true))),
                ])
                .build(),
        )
        .unwrap();

    let Some(AuditLogTarget::Invite(target)) = entry.target() else {
        panic!("expected an invite target");
    };
    assert_eq!(target.invite.code, "fresh");
    assert_eq!(target.invite.max_uses, Some(10));
    assert!(target.invite.temporary);
    assert!(target.channel.is_none());
    assert!(target.inviter.is_none());
}

#[test]
fn test_targets_resolve_with_fallback() {
    let guild = TestGuild::new();
    let thread = guild
        .entry(EntryBuilder::new(111).target(THREAD_ID).build())
        .unwrap();
    let event = guild
        .entry(EntryBuilder::new(102).target(EVENT_ID).build())
        .unwrap();
    let emoji = guild
        .entry(EntryBuilder::new(60).target(GHOST_ID).build())
        .unwrap();
    let webhook = guild
        .entry(EntryBuilder::new(50).target(GHOST_ID).build())
        .unwrap();

    assert!(matches!(thread.target(), Some(AuditLogTarget::Thread(t)) if t.is_cached()));
    assert!(matches!(event.target(), Some(AuditLogTarget::ScheduledEvent(e)) if e.is_cached()));
    assert_eq!(
        emoji.target(),
        Some(&AuditLogTarget::Emoji(Resolved::Object(Object::new(Snowflake::new(GHOST_ID)))))
    );
    assert_eq!(
        webhook.target(),
        Some(&AuditLogTarget::Object(Object::new(Snowflake::new(GHOST_ID))))
    );
}

#[test]
fn test_unknown_user_target_is_none() {
    let guild = TestGuild::new();
    let known = guild.entry(EntryBuilder::new(20).target(BOB_ID).build()).unwrap();
    let unknown = guild.entry(EntryBuilder::new(20).target(GHOST_ID).build()).unwrap();

    assert!(matches!(known.target(), Some(AuditLogTarget::User(MemberOrUser::User(u))) if u.username == "bob"));
    assert_eq!(unknown.target(), None);
}

#[test]
fn test_actor_prefers_cached_member() {
    let guild = TestGuild::new();
    let by_alice = guild.entry(EntryBuilder::new(1).build()).unwrap();
    let by_bob = guild.entry(EntryBuilder::new(1).actor(BOB_ID).build()).unwrap();
    let by_ghost = guild.entry(EntryBuilder::new(1).actor(GHOST_ID).build()).unwrap();

    assert!(matches!(by_alice.actor(), Some(MemberOrUser::Member(_))));
    assert!(matches!(by_bob.actor(), Some(MemberOrUser::User(_))));
    assert!(by_ghost.actor().is_none());
    assert!(by_bob.to_string().ends_with("user=bob#4242>"));
    assert!(by_ghost.to_string().ends_with("user=None>"));
}

#[test]
fn test_unknown_action_degrades() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(
            EntryBuilder::new(9999)
                .target(GHOST_ID)
                .changes(vec![change("name", None, Some(json!("x")))])
                .build(),
        )
        .unwrap();

    assert_eq!(entry.action(), AuditLogAction::Unknown(9999));
    assert_eq!(entry.category(), None);
    assert_eq!(
        entry.target(),
        Some(&AuditLogTarget::Object(Object::new(Snowflake::new(GHOST_ID))))
    );
    assert_eq!(entry.after().get("name").and_then(DiffValue::as_str), Some("x"));
}

#[test]
fn test_command_id_becomes_snowflake() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(
            EntryBuilder::new(121)
                .target(GHOST_ID)
                .changes(vec![change("command_id", None, Some(json!("1234567890")))])
                .build(),
        )
        .unwrap();

    assert_eq!(
        entry.after().get("command_id").and_then(DiffValue::as_snowflake),
        Some(Snowflake::new(1_234_567_890))
    );
    assert!(matches!(entry.target(), Some(AuditLogTarget::Object(_))));
}

#[test]
fn test_member_move_extra() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(
            EntryBuilder::new(26)
                .options(json!({"channel_id": VOICE_ID.to_string(), "count": "2"}))
                .build(),
        )
        .unwrap();

    match entry.extra() {
        Some(AuditLogExtra::MemberMoveOrMessageDelete { channel, count }) => {
            assert_eq!(*count, 2);
            assert_eq!(channel.cached().map(|c| c.name.as_str()), Some("Lobby"));
        }
        other => panic!("expected move extra, got {other:?}"),
    }
}

#[test]
fn test_member_disconnect_extra() {
    let guild = TestGuild::new();
    let entry = guild
        .entry(EntryBuilder::new(27).options(json!({"count": "4"})).build())
        .unwrap();

    assert_eq!(entry.extra(), Some(&AuditLogExtra::MemberDisconnect { count: 4 }));
    assert_eq!(entry.category(), None);
}

#[test]
fn test_stage_instance_extra() {
    let guild = TestGuild::new();
    let created = guild
        .entry(
            EntryBuilder::new(83)
                .target(STAGE_ID)
                .options(json!({"channel_id": VOICE_ID.to_string()}))
                .build(),
        )
        .unwrap();
    let elsewhere = guild
        .entry(
            EntryBuilder::new(85)
                .target(GHOST_ID)
                .options(json!({"channel_id": GHOST_ID.to_string()}))
                .build(),
        )
        .unwrap();

    match created.extra() {
        Some(AuditLogExtra::StageInstance { channel }) => {
            assert!(channel.is_cached());
            assert_eq!(channel.id(), Snowflake::new(VOICE_ID));
        }
        other => panic!("expected stage extra, got {other:?}"),
    }
    assert_eq!(
        elsewhere.extra(),
        Some(&AuditLogExtra::StageInstance {
            channel: Resolved::Object(Object::new(Snowflake::new(GHOST_ID))),
        })
    );
}

#[test]
fn test_cached_stage_and_sticker_targets() {
    let guild = TestGuild::new();
    let stage = guild
        .entry(EntryBuilder::new(84).target(STAGE_ID).build())
        .unwrap();
    let sticker = guild
        .entry(EntryBuilder::new(91).target(STICKER_ID).build())
        .unwrap();
    let missing_sticker = guild
        .entry(EntryBuilder::new(92).target(GHOST_ID).build())
        .unwrap();

    match stage.target() {
        Some(AuditLogTarget::StageInstance(Resolved::Cached(instance))) => {
            assert_eq!(instance.topic, "Town hall");
            assert_eq!(instance.channel_id, Snowflake::new(VOICE_ID));
        }
        other => panic!("expected cached stage, got {other:?}"),
    }
    match sticker.target() {
        Some(AuditLogTarget::Sticker(Resolved::Cached(found))) => assert_eq!(found.name, "wave"),
        other => panic!("expected cached sticker, got {other:?}"),
    }
    assert_eq!(
        missing_sticker.target(),
        Some(&AuditLogTarget::Sticker(Resolved::Object(Object::new(Snowflake::new(GHOST_ID)))))
    );
}

// ============================================================================
// Page Tests
// ============================================================================

#[test]
fn test_page_decodes_in_order() {
    let guild = TestGuild::new();
    let log = guild.log(&sample_page()).unwrap();

    assert_eq!(log.len(), 3);
    assert_eq!(log.users().len(), 2);

    let entries: Vec<_> = log.entries().collect();
    assert_eq!(entries[0].action(), AuditLogAction::ChannelCreate);
    assert_eq!(entries[0].category(), Some(AuditLogActionCategory::Create));
    assert_eq!(entries[1].reason(), Some("spam"));
    assert!(matches!(
        entries[2].extra(),
        Some(AuditLogExtra::MemberMoveOrMessageDelete { count: 3, .. })
    ));
    assert_eq!(entries[2].category(), Some(AuditLogActionCategory::Delete));
}

#[test]
fn test_page_users_back_lookups() {
    let guild = TestGuild::new();
    let log = guild.log(&sample_page()).unwrap();
    let ban = log.entries().nth(1).unwrap();

    assert!(matches!(ban.target(), Some(AuditLogTarget::User(u)) if u.user().tag() == "bob#4242"));
}

#[test]
fn test_page_summaries() {
    let guild = TestGuild::new();
    let log = guild.log(&sample_page()).unwrap();
    let lines: Vec<String> = log.entries().map(|e| e.summary()).collect();

    assert_eq!(lines[0], "900 channel_create [create] by alice on channel #general changed: name,type");
    assert_eq!(lines[1], "901 ban [-] by alice on user bob#4242 changed: -");
}

#[test]
fn test_malformed_page_is_error() {
    let guild = TestGuild::new();
    assert!(guild.log("{\"audit_log_entries\": 5}").is_err());
}

// ============================================================================
// Property Tests
// ============================================================================

fn passthrough_record() -> impl Strategy<Value = (i64, i64)> {
    (any::<i64>(), any::<i64>())
}

/// Records whose decoding depends on the internal key sort: composites,
/// the `channel_id` < `entity_type` < `location` chain, renamed and
/// transformed keys, and a passthrough key
fn order_sensitive_records(old: i64, new: i64) -> Vec<Value> {
    vec![
        change("$add", None, Some(json!([{"id": MODS_ROLE_ID.to_string(), "name": "Mods"}]))),
        change("$remove", None, Some(json!([{"id": GHOST_ID.to_string(), "name": "Old Role"}]))),
        change("$add_keyword_filter", None, Some(json!(["spoiler"]))),
        change("location", Some(json!("somewhere")), Some(Value::Null)),
        change("entity_type", Some(json!(3)), Some(json!(2))),
        change("channel_id", Some(Value::Null), Some(json!(VOICE_ID.to_string()))),
        change("color", Some(json!(0)), Some(json!(0x00ff_00))),
        change("permissions", Some(json!("8")), Some(json!("2048"))),
        change("description", Some(json!(old)), Some(json!(new))),
    ]
}

fn scheduled_event_update(changes: Vec<Value>) -> Value {
    EntryBuilder::new(101)
        .id(42)
        .target(EVENT_ID)
        .changes(changes)
        .build()
}

proptest! {
    /// Decoded bags do not depend on the order change records arrive in
    #[test]
    fn prop_change_order_is_irrelevant(
        values in proptest::collection::vec(passthrough_record(), 1..8),
        seed in any::<u64>(),
    ) {
        let guild = TestGuild::new();
        let records: Vec<Value> = values
            .iter()
            .enumerate()
            .map(|(i, (old, new))| change(&format!("field_{i}"), Some(json!(old)), Some(json!(new))))
            .collect();

        let mut shuffled = records.clone();
        let len = shuffled.len();
        shuffled.rotate_left((seed as usize) % len);
        shuffled.reverse();

        let a = guild.entry(EntryBuilder::new(11).target(GENERAL_ID).changes(records).build()).unwrap();
        let b = guild.entry(EntryBuilder::new(11).target(GENERAL_ID).changes(shuffled).build()).unwrap();

        prop_assert_eq!(a.before(), b.before());
        prop_assert_eq!(a.after(), b.after());
        prop_assert_eq!(a.after().len(), values.len());
    }

    /// Composite, chained and transformed records decode the same under any permutation
    #[test]
    fn prop_mixed_record_order_is_irrelevant(
        (records, permuted) in passthrough_record().prop_flat_map(|(old, new)| {
            let records = order_sensitive_records(old, new);
            (Just(records.clone()), Just(records).prop_shuffle())
        }),
    ) {
        let guild = TestGuild::new();
        let canonical = guild.entry(scheduled_event_update(records)).unwrap();
        let shuffled = guild.entry(scheduled_event_update(permuted)).unwrap();

        prop_assert_eq!(canonical.before(), shuffled.before());
        prop_assert_eq!(canonical.after(), shuffled.after());

        let is_channel_location = matches!(
            shuffled.after().get("location"),
            Some(DiffValue::Location(ScheduledEventLocation::Channel(_)))
        );
        prop_assert!(is_channel_location);
        prop_assert_eq!(
            shuffled.before().get("location"),
            Some(&DiffValue::Location(ScheduledEventLocation::External("somewhere".to_string())))
        );
        prop_assert_eq!(shuffled.after().get("roles").and_then(DiffValue::as_roles).map(<[_]>::len), Some(1));
        prop_assert_eq!(shuffled.before().get("roles").and_then(DiffValue::as_roles).map(<[_]>::len), Some(1));
        prop_assert_eq!(shuffled.after().get("color"), shuffled.after().get("colour"));
    }

    /// Permission bit strings decode identically on both sides
    #[test]
    fn prop_permissions_transform(old in any::<u32>(), new in any::<u32>()) {
        let guild = TestGuild::new();
        let entry = guild
            .entry(
                EntryBuilder::new(31)
                    .target(MODS_ROLE_ID)
                    .changes(vec![change(
                        "allow",
                        Some(json!(old.to_string())),
                        Some(json!(new.to_string())),
                    )])
                    .build(),
            )
            .unwrap();

        prop_assert_eq!(
            entry.before().get("allow").and_then(DiffValue::as_permissions),
            Some(Permissions::from_bits_retain(u64::from(old)))
        );
        prop_assert_eq!(
            entry.after().get("allow").and_then(DiffValue::as_permissions),
            Some(Permissions::from_bits_retain(u64::from(new)))
        );
    }
}
