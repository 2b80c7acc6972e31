//! Shared setup for the integration tests

#![allow(dead_code)]

use cs2utils_core::{MemoryHost, PlayerController, PlayerPawn};
use tracing_subscriber::EnvFilter;

pub const ALICE: u64 = 76561198000000001;
pub const BOB: u64 = 76561198000000002;

/// Route `tracing` output through the test harness, once per binary
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// A host with one connected human player
pub fn host_with_player() -> (MemoryHost, PlayerController, PlayerPawn) {
    init_tracing();
    let host = MemoryHost::new();
    let (controller, pawn) = host.spawn_player(ALICE, "alice");
    (host, controller, pawn)
}
