mod common;

use common::{host_with_player, ALICE, BOB};
use cs2utils::{FadeMode, PlayerControllerExt, PlayerPawnExt, ScreenFade};
use cs2utils_core::{FieldKey, PlayerController, PlayerPawn, SchemaObject};
use cs2utils_sdk::{Color, CsTeam, MoveType, PlayerConnectedState, Vector};

fn key(class: &'static str, field: &'static str) -> FieldKey {
    FieldKey::new(class, field)
}

#[test]
fn test_is_player_requires_every_condition() {
    let (host, controller, _) = host_with_player();
    assert!(controller.is_player(&host));

    let (bot, _) = host.spawn_bot("bot");
    assert!(!bot.is_player(&host));

    let (low_id, _) = host.spawn_player(12345, "fake");
    assert!(!low_id.is_player(&host));

    let (connecting, _) = host.spawn_player(BOB, "bob");
    host.set_field(
        connecting.handle(),
        PlayerController::CONNECTED_FIELD,
        PlayerConnectedState::Connecting,
    );
    assert!(!connecting.is_player(&host));

    host.remove(controller.handle());
    assert!(!controller.is_player(&host));

    let absent: Option<PlayerController> = None;
    assert!(!absent.is_player(&host));
}

#[test]
fn test_set_health_with_overflow() {
    let (host, controller, pawn) = host_with_player();

    controller.set_health(&host, 150, true);

    assert_eq!(pawn.health(&host), Some(150));
    assert_eq!(pawn.max_health(&host), Some(150));
    assert_eq!(
        host.state_changes_for(pawn.handle()),
        vec![key("CBaseEntity", "m_iHealth")]
    );
}

#[test]
fn test_set_health_without_overflow_keeps_max() {
    let (host, controller, pawn) = host_with_player();

    controller.set_health(&host, 150, false);
    assert_eq!(pawn.health(&host), Some(150));
    assert_eq!(pawn.max_health(&host), Some(100));

    controller.set_health(&host, 50, true);
    assert_eq!(pawn.max_health(&host), Some(100));
}

#[test]
fn test_set_health_skips_dead_player() {
    let (host, controller, pawn) = host_with_player();
    host.set_field(controller.handle(), PlayerController::PAWN_IS_ALIVE_FIELD, false);

    controller.set_health(&host, 1, true);
    controller.set_armor(&host, 100, true, false);

    assert_eq!(pawn.health(&host), Some(100));
    assert_eq!(pawn.armor(&host), Some(0));
    assert!(host.state_changes().is_empty());
}

#[test]
fn test_set_armor_only_touches_items_when_asked() {
    let (host, controller, pawn) = host_with_player();

    controller.set_armor(&host, 50, false, false);
    assert_eq!(pawn.armor(&host), Some(50));
    assert_eq!(
        host.state_changes_for(pawn.handle()),
        vec![key("CCSPlayerPawnBase", "m_ArmorValue")]
    );

    host.clear_recordings();
    controller.set_armor(&host, 100, true, false);
    assert_eq!(pawn.has_helmet(&host), Some(true));
    assert_eq!(pawn.has_heavy_armor(&host), Some(false));

    let changes = host.state_changes_for(pawn.handle());
    assert_eq!(changes[0], key("CCSPlayerPawnBase", "m_ArmorValue"));
    assert!(changes[1..]
        .iter()
        .all(|k| *k == key("CBasePlayerPawn", "m_pItemServices")));
}

#[test]
fn test_set_money() {
    let (host, controller, _) = host_with_player();

    controller.set_money(&host, 16000);

    assert_eq!(controller.account(&host), Some(16000));
    assert_eq!(
        host.state_changes_for(controller.handle()),
        vec![key("CCSPlayerController", "m_pInGameMoneyServices")]
    );
}

#[test]
fn test_set_money_without_services_is_noop() {
    let (host, controller, _) = host_with_player();
    host.remove_field(controller.handle(), PlayerController::ACCOUNT_FIELD);

    controller.set_money(&host, 16000);

    assert_eq!(controller.account(&host), None);
    assert!(host.state_changes().is_empty());
}

#[test]
fn test_set_name_skips_unchanged() {
    let (host, controller, _) = host_with_player();

    controller.set_name(&host, "alice");
    assert!(host.state_changes().is_empty());

    controller.set_name(&host, "carol");
    assert_eq!(controller.player_name(&host).as_deref(), Some("carol"));
    assert_eq!(
        host.state_changes_for(controller.handle()),
        vec![key("CBasePlayerController", "m_iszPlayerName")]
    );
}

#[test]
fn test_set_clantag_refreshes_scoreboard() {
    let (host, controller, _) = host_with_player();

    controller.set_clantag(&host, "[ADM]");

    assert_eq!(controller.clan(&host).as_deref(), Some("[ADM]"));
    assert_eq!(
        host.state_changes_for(controller.handle()),
        vec![key("CCSPlayerController", "m_szClan")]
    );
    assert_eq!(
        host.events(),
        vec![("nextlevel_changed".to_string(), controller.handle())]
    );

    host.clear_recordings();
    controller.set_clantag(&host, "[ADM]");
    assert!(host.events().is_empty());
}

#[test]
fn test_move_to_team_waits_for_next_frame() {
    let (host, controller, _) = host_with_player();

    controller.move_to_team(&host, CsTeam::CounterTerrorist);
    assert!(host.team_changes().is_empty());
    assert_eq!(host.pending_tasks(), 1);

    assert_eq!(host.run_frame(), 1);
    assert_eq!(
        host.team_changes(),
        vec![(controller.handle(), CsTeam::CounterTerrorist)]
    );
    assert_eq!(controller.team_num(&host), Some(CsTeam::CounterTerrorist as u8));
}

#[test]
fn test_move_to_current_team_is_noop() {
    let (host, controller, _) = host_with_player();

    controller.move_to_team(&host, CsTeam::Terrorist);

    assert_eq!(host.pending_tasks(), 0);
    host.run_frame();
    assert!(host.team_changes().is_empty());
}

#[test]
fn test_kick_is_deferred() {
    let (host, controller, _) = host_with_player();

    controller.kick(&host, "AFK");
    assert!(host.commands().is_empty());

    host.run_frame();
    assert_eq!(host.commands(), vec!["kickid 1 \"AFK\"".to_string()]);
}

#[test]
fn test_kick_reason_cannot_chain_commands() {
    let (host, controller, _) = host_with_player();

    controller.kick(&host, "bye\"; quit; echo \"");
    host.run_frame();

    assert_eq!(host.commands(), vec!["kickid 1 \"bye quit echo \"".to_string()]);
}

#[test]
fn test_deferred_work_skipped_after_disconnect() {
    let (host, controller, _) = host_with_player();

    controller.move_to_team(&host, CsTeam::CounterTerrorist);
    controller.kick(&host, "AFK");
    assert_eq!(host.pending_tasks(), 2);

    host.set_field(
        controller.handle(),
        PlayerController::CONNECTED_FIELD,
        PlayerConnectedState::Disconnected,
    );
    assert_eq!(host.run_frame(), 2);

    assert!(host.team_changes().is_empty());
    assert!(host.commands().is_empty());
}

#[test]
fn test_deferred_work_skipped_after_removal() {
    let (host, controller, _) = host_with_player();

    controller.kick(&host, "AFK");
    host.remove(controller.handle());
    host.run_frame();

    assert!(host.commands().is_empty());
}

#[test]
fn test_freeze_through_controller() {
    let (host, controller, pawn) = host_with_player();

    controller.freeze(&host);
    assert_eq!(pawn.move_type(&host), Some(MoveType::Obsolete));
    assert_eq!(pawn.actual_move_type(&host), Some(MoveType::Obsolete));

    controller.unfreeze(&host);
    assert_eq!(pawn.move_type(&host), Some(MoveType::Walk));
}

#[test]
fn test_eye_position() {
    let (host, controller, pawn) = host_with_player();
    host.set_field(pawn.handle(), PlayerPawn::ABS_ORIGIN_FIELD, Vector::new(10.0, 20.0, 30.0));

    assert_eq!(controller.eye_position(&host), Vector::new(10.0, 20.0, 94.0));

    host.remove_field(pawn.handle(), PlayerPawn::VIEW_OFFSET_Z_FIELD);
    assert_eq!(controller.eye_position(&host), Vector::new(10.0, 20.0, 30.0));

    let (bot, _) = host.spawn_bot("bot");
    assert_eq!(bot.eye_position(&host), Vector::ZERO);
}

#[test]
fn test_has_permission() {
    let (host, controller, _) = host_with_player();
    host.permissions().add(ALICE, &["@css/kick"]);

    assert!(controller.has_permission(&host, "@css/kick"));
    assert!(!controller.has_permission(&host, "@css/ban"));

    let (bot, _) = host.spawn_bot("bot");
    host.permissions().add(0, &["@css/root"]);
    assert!(!bot.has_permission(&host, "@css/kick"));
}

#[test]
fn test_set_client_kills_works_for_bots() {
    let (host, _, _) = host_with_player();
    let (bot, _) = host.spawn_bot("bot");

    bot.set_client_kills(&host, 3);

    assert_eq!(bot.round_kills(&host), Some(3));
    assert_eq!(
        host.state_changes_for(bot.handle()),
        vec![
            key("CCSPlayerController_ActionTrackingServices", "m_iNumRoundKills"),
            key("CCSPlayerController", "m_pActionTrackingServices"),
        ]
    );
}

#[test]
fn test_color_screen_sends_fade() {
    let (host, controller, _) = host_with_player();

    controller.color_screen(
        &host,
        &ScreenFade::new(Color::rgba(1, 2, 3, 4)).mode(FadeMode::Out),
    );

    let sent = host.messages();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].recipients, vec![controller.handle()]);
    assert_eq!(sent[0].message.id(), 106);
    assert_eq!(sent[0].message.get_int("flags"), Some(0x12));
    assert_eq!(
        sent[0].message.get_int("color"),
        Some(1 | (2 << 8) | (3 << 16) | (4 << 24))
    );
}

#[test]
fn test_set_model_size() {
    let (host, controller, pawn) = host_with_player();

    controller.set_model_size(&host, 1.5);

    assert_eq!(pawn.model_scale(&host), Some(1.5));
    assert_eq!(
        host.state_changes_for(pawn.handle()),
        vec![key("CBaseEntity", "m_CBodyComponent")]
    );
}

#[test]
fn test_non_player_mutations_are_silent() {
    let (host, _, _) = host_with_player();
    let (bot, bot_pawn) = host.spawn_bot("bot");

    bot.set_health(&host, 500, true);
    bot.set_armor(&host, 100, true, true);
    bot.set_money(&host, 1);
    bot.set_name(&host, "renamed");
    bot.set_clantag(&host, "tag");
    bot.freeze(&host);
    bot.move_to_team(&host, CsTeam::Spectator);
    bot.kick(&host, "bye");
    host.run_frame();

    assert_eq!(bot_pawn.health(&host), Some(100));
    assert_eq!(bot_pawn.move_type(&host), Some(MoveType::Walk));
    assert!(host.state_changes().is_empty());
    assert!(host.events().is_empty());
    assert!(host.team_changes().is_empty());
    assert!(host.commands().is_empty());
}

#[test]
fn test_absent_controller_is_noop() {
    let (host, _, _) = host_with_player();
    let absent: Option<&PlayerController> = None;

    absent.set_health(&host, 1, false);
    absent.set_client_kills(&host, 1);
    absent.color_screen(&host, &ScreenFade::new(Color::RED));
    absent.set_model_size(&host, 2.0);

    assert_eq!(absent.eye_position(&host), Vector::ZERO);
    assert!(!absent.has_permission(&host, "@css/root"));
    assert!(host.state_changes().is_empty());
    assert!(host.messages().is_empty());
}

#[test]
fn test_teleport_to_other_player() {
    let (host, _, pawn) = host_with_player();
    let (_, target) = host.spawn_player(BOB, "bob");
    host.set_field(target.handle(), PlayerPawn::ABS_ORIGIN_FIELD, Vector::new(5.0, 5.0, 5.0));
    host.set_field(target.handle(), PlayerPawn::ABS_VELOCITY_FIELD, Vector::new(0.0, 0.0, 1.0));

    pawn.teleport_to(&host, &target);

    assert_eq!(pawn.abs_origin(&host), Some(Vector::new(5.0, 5.0, 5.0)));
    assert_eq!(pawn.abs_velocity(&host), Some(Vector::new(0.0, 0.0, 1.0)));
}
