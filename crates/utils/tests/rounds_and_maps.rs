mod common;

use std::fs;

use cs2utils::{current_game_rules, GameRulesExt, MapRegistry, UtilsConfig, UtilsError};
use cs2utils_core::{GameRules, MemoryHost, SchemaObject};

#[test]
fn test_map_registry_scans_vpks() {
    common::init_tracing();
    let game = tempfile::tempdir().unwrap();
    let maps_dir = game.path().join("csgo").join("maps");
    fs::create_dir_all(maps_dir.join("de_nested.vpk")).unwrap();
    fs::write(maps_dir.join("de_dust2.vpk"), b"").unwrap();
    fs::write(maps_dir.join("cs_office.vpk"), b"").unwrap();
    fs::write(maps_dir.join("readme.txt"), b"").unwrap();

    let host = MemoryHost::with_game_dir(game.path());
    let registry = MapRegistry::from_host(&host);
    assert!(registry.is_empty());

    assert_eq!(registry.reload().unwrap(), 2);
    assert_eq!(registry.names(), vec!["cs_office", "de_dust2"]);
    assert!(registry.is_valid("de_dust2"));
    assert!(!registry.is_valid("de_dust2.vpk"));
    assert!(!registry.is_valid("readme"));
    assert!(!registry.is_valid("de_nested"));
}

#[test]
fn test_reload_picks_up_changes() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("de_inferno.vpk"), b"").unwrap();

    let registry = MapRegistry::new(dir.path());
    registry.reload().unwrap();
    assert!(registry.is_valid("de_inferno"));

    fs::remove_file(dir.path().join("de_inferno.vpk")).unwrap();
    fs::write(dir.path().join("de_mirage.vpk"), b"").unwrap();

    assert_eq!(registry.reload().unwrap(), 1);
    assert!(!registry.is_valid("de_inferno"));
    assert!(registry.is_valid("de_mirage"));
}

#[test]
fn test_empty_maps_dir() {
    let dir = tempfile::tempdir().unwrap();
    let registry = MapRegistry::new(dir.path());

    assert_eq!(registry.reload().unwrap(), 0);
    assert!(!registry.is_valid("de_dust2"));
}

#[test]
fn test_missing_maps_dir_keeps_previous_set() {
    let dir = tempfile::tempdir().unwrap();
    let maps_dir = dir.path().join("maps");
    fs::create_dir(&maps_dir).unwrap();
    fs::write(maps_dir.join("de_nuke.vpk"), b"").unwrap();

    let registry = MapRegistry::new(&maps_dir);
    registry.reload().unwrap();

    fs::remove_dir_all(&maps_dir).unwrap();
    let err = registry.reload().unwrap_err();

    assert!(matches!(err, UtilsError::MapsDirectory { ref path, .. } if *path == maps_dir));
    assert!(registry.is_valid("de_nuke"));
}

#[test]
fn test_configured_maps_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("aim_map.vpk"), b"").unwrap();
    let host = MemoryHost::new();

    let config = UtilsConfig {
        maps_dir: Some(dir.path().to_path_buf()),
        ..UtilsConfig::default()
    };
    let registry = config.map_registry(&host);

    registry.reload().unwrap();
    assert!(registry.is_valid("aim_map"));
}

fn host_with_rules() -> (MemoryHost, GameRules) {
    common::init_tracing();
    let host = MemoryHost::new();
    let rules = host.spawn_game_rules();
    host.set_convar("mp_halftime", true);
    host.set_convar("mp_maxrounds", 24);
    (host, rules)
}

#[test]
fn test_pistol_rounds_over_a_match() {
    let (host, rules) = host_with_rules();
    let current = current_game_rules(&host);

    let pistol: Vec<i32> = (0..24)
        .filter(|&round| {
            host.set_field(rules.handle(), GameRules::TOTAL_ROUNDS_PLAYED_FIELD, round);
            current.is_pistol_round(&host).unwrap()
        })
        .collect();

    assert_eq!(pistol, vec![0, 12]);
}

#[test]
fn test_pistol_round_without_halftime() {
    let (host, rules) = host_with_rules();
    host.set_convar("mp_halftime", false);
    host.set_field(rules.handle(), GameRules::TOTAL_ROUNDS_PLAYED_FIELD, 12);

    assert!(!rules.is_pistol_round(&host).unwrap());

    host.set_field(rules.handle(), GameRules::GAME_RESTART_FIELD, true);
    assert!(rules.is_pistol_round(&host).unwrap());
}

#[test]
fn test_pistol_round_missing_convar() {
    let (host, rules) = host_with_rules();
    host.remove_convar("mp_maxrounds");

    let err = rules.is_pistol_round(&host).unwrap_err();
    assert!(matches!(err, UtilsError::ConVarNotFound(ref name) if name == "mp_maxrounds"));
}

#[test]
fn test_no_game_rules() {
    let (host, _) = host_with_rules();
    host.clear_game_rules();

    let rules = current_game_rules(&host);
    assert!(rules.is_none());
    assert_eq!(rules.remaining_round_time(&host), 0.0);
    assert!(!rules.is_warmup(&host));
    assert!(!rules.is_pistol_round(&host).unwrap());
}

#[test]
fn test_warmup_and_remaining_time() {
    let (host, rules) = host_with_rules();
    host.set_field(rules.handle(), GameRules::WARMUP_PERIOD_FIELD, true);
    host.set_field(rules.handle(), GameRules::ROUND_START_TIME_FIELD, 60.0);
    host.set_time(100.0);

    let current = current_game_rules(&host);
    assert!(current.is_warmup(&host));
    assert_eq!(current.remaining_round_time(&host), 75.0);

    host.set_time(200.0);
    assert_eq!(current.remaining_round_time(&host), -25.0);
}

#[test]
fn test_removed_game_rules_entity() {
    let (host, rules) = host_with_rules();
    host.remove(rules.handle());

    assert_eq!(rules.remaining_round_time(&host), 0.0);
    assert!(!rules.is_pistol_round(&host).unwrap());
}
