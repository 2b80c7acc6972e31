//! Player pawn helpers

use cs2utils_core::entities::PlayerPawn;
use cs2utils_core::host::Host;
use cs2utils_sdk::{Color, MoveType, RenderMode};
use tracing::debug;

/// Units a buried pawn is moved below its origin
pub const BURY_DEPTH: f32 = 10.0;

/// Movement, position and rendering helpers for a pawn
pub trait PlayerPawnExt {
    /// Stop the pawn from moving
    fn freeze(&self, host: &dyn Host);

    /// Let the pawn move again
    fn unfreeze(&self, host: &dyn Host);

    /// Sink the pawn into the ground
    fn bury(&self, host: &dyn Host);

    /// Undo [`bury`](Self::bury)
    fn unbury(&self, host: &dyn Host);

    /// Move the pawn onto `target`, copying its facing and velocity
    fn teleport_to(&self, host: &dyn Host, target: &PlayerPawn);

    /// Tint the pawn with `color`
    fn glow(&self, host: &dyn Host, color: Color);
}

impl PlayerPawnExt for PlayerPawn {
    fn freeze(&self, host: &dyn Host) {
        set_move_type(self, host, MoveType::Obsolete);
    }

    fn unfreeze(&self, host: &dyn Host) {
        set_move_type(self, host, MoveType::Walk);
    }

    fn bury(&self, host: &dyn Host) {
        shift_z(self, host, -BURY_DEPTH);
    }

    fn unbury(&self, host: &dyn Host) {
        shift_z(self, host, BURY_DEPTH);
    }

    fn teleport_to(&self, host: &dyn Host, target: &PlayerPawn) {
        let (Some(origin), Some(angles)) = (target.abs_origin(host), target.abs_rotation(host))
        else {
            debug!("Teleport target {} has no position", target.handle());
            return;
        };
        let velocity = target.abs_velocity(host);
        host.teleport(self.handle(), Some(origin), Some(angles), velocity);
    }

    fn glow(&self, host: &dyn Host, color: Color) {
        self.set_render_mode(host, RenderMode::TransColor);
        self.set_render_color(host, color);
    }
}

// The actual move type is not networked, only the replicated one is.
fn set_move_type(pawn: &PlayerPawn, host: &dyn Host, move_type: MoveType) {
    pawn.set_move_type(host, move_type);
    pawn.set_actual_move_type(host, move_type);
}

fn shift_z(pawn: &PlayerPawn, host: &dyn Host, dz: f32) {
    let Some(origin) = pawn.abs_origin(host) else {
        debug!("Pawn {} has no origin", pawn.handle());
        return;
    };
    host.teleport(
        pawn.handle(),
        Some(origin.offset_z(dz)),
        pawn.abs_rotation(host),
        pawn.abs_velocity(host),
    );
}
