//! Screen fade user message

use bitflags::bitflags;
use cs2utils_core::entities::CEntityHandle;
use cs2utils_core::host::Host;
use cs2utils_core::usermessages::UserMessage;
use cs2utils_sdk::Color;

/// Network id of the `Fade` user message
pub const FADE_MESSAGE_ID: i32 = 106;

/// Fade durations are sent in 1/512ths of a second
const FADE_UNITS_PER_SECOND: f32 = 512.0;

bitflags! {
    /// Fade behavior bits of the `flags` field
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FadeFlags: i32 {
        const IN = 0x0001;
        const OUT = 0x0002;
        const MODULATE = 0x0004;
        const STAYOUT = 0x0008;
        /// Replace any fade already in progress
        const PURGE = 0x0010;
    }
}

/// Direction of a screen fade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FadeMode {
    /// Fade from the color back to normal
    #[default]
    In,
    /// Fade from normal to the color
    Out,
    /// Fade to the color and keep it
    StayOut,
}

impl FadeMode {
    pub const fn flags(self) -> FadeFlags {
        match self {
            FadeMode::In => FadeFlags::IN,
            FadeMode::Out => FadeFlags::OUT,
            FadeMode::StayOut => FadeFlags::STAYOUT,
        }
    }
}

/// A screen color fade
///
/// ```ignore
/// ScreenFade::new(Color::RED).hold(0.5).mode(FadeMode::Out).send(host, &[player]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenFade {
    pub color: Color,
    /// Seconds the color stays at full strength
    pub hold: f32,
    /// Seconds the transition takes
    pub fade: f32,
    pub mode: FadeMode,
    pub purge: bool,
}

impl ScreenFade {
    pub fn new(color: Color) -> Self {
        Self {
            color,
            hold: 0.1,
            fade: 0.2,
            mode: FadeMode::In,
            purge: true,
        }
    }

    pub fn hold(mut self, seconds: f32) -> Self {
        self.hold = seconds;
        self
    }

    pub fn fade(mut self, seconds: f32) -> Self {
        self.fade = seconds;
        self
    }

    pub fn mode(mut self, mode: FadeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn purge(mut self, purge: bool) -> Self {
        self.purge = purge;
        self
    }

    pub fn flags(&self) -> FadeFlags {
        let mut flags = self.mode.flags();
        if self.purge {
            flags |= FadeFlags::PURGE;
        }
        flags
    }

    /// Build the user message
    pub fn to_message(&self) -> UserMessage {
        let mut msg = UserMessage::from_id(FADE_MESSAGE_ID);
        msg.set_int("duration", fade_units(self.fade))
            .set_int("hold_time", fade_units(self.hold))
            .set_int("flags", self.flags().bits())
            .set_int("color", self.color.packed() as i32);
        msg
    }

    pub fn send(&self, host: &dyn Host, recipients: &[CEntityHandle]) {
        host.send_user_message(&self.to_message(), recipients);
    }
}

/// Seconds to fade units, rounding half to even
pub fn fade_units(seconds: f32) -> i32 {
    (seconds * FADE_UNITS_PER_SECOND).round_ties_even() as i32
}
