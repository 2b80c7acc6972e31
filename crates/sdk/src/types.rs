//! Game enumerations stored in entity schema fields

/// Team number (`m_iTeamNum`)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CsTeam {
    #[default]
    None = 0,
    Spectator = 1,
    Terrorist = 2,
    CounterTerrorist = 3,
}

impl CsTeam {
    /// Convert from the raw team number
    pub const fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::Spectator),
            2 => Some(Self::Terrorist),
            3 => Some(Self::CounterTerrorist),
            _ => None,
        }
    }
}

/// Entity movement mode (`MoveType_t`)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveType {
    None = 0,
    /// Used to freeze players in place
    Obsolete = 1,
    Walk = 2,
    Fly = 3,
    FlyGravity = 4,
    VPhysics = 5,
    Push = 6,
    Noclip = 7,
    Observer = 8,
    Ladder = 9,
    Custom = 10,
}

impl MoveType {
    /// Convert from the raw engine value
    pub const fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::Obsolete),
            2 => Some(Self::Walk),
            3 => Some(Self::Fly),
            4 => Some(Self::FlyGravity),
            5 => Some(Self::VPhysics),
            6 => Some(Self::Push),
            7 => Some(Self::Noclip),
            8 => Some(Self::Observer),
            9 => Some(Self::Ladder),
            10 => Some(Self::Custom),
            _ => None,
        }
    }
}

/// Model render mode (`RenderMode_t`)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RenderMode {
    #[default]
    Normal = 0,
    TransColor = 1,
    TransTexture = 2,
    Glow = 3,
    TransAlpha = 4,
    TransAdd = 5,
    Environmental = 6,
    TransAddFrameBlend = 7,
    TransAlphaAdd = 8,
    WorldGlow = 9,
    None = 10,
    DevVisualizer = 11,
}

impl RenderMode {
    /// Convert from the raw engine value
    pub const fn from_raw(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Normal),
            1 => Some(Self::TransColor),
            2 => Some(Self::TransTexture),
            3 => Some(Self::Glow),
            4 => Some(Self::TransAlpha),
            5 => Some(Self::TransAdd),
            6 => Some(Self::Environmental),
            7 => Some(Self::TransAddFrameBlend),
            8 => Some(Self::TransAlphaAdd),
            9 => Some(Self::WorldGlow),
            10 => Some(Self::None),
            11 => Some(Self::DevVisualizer),
            _ => None,
        }
    }
}

/// Player connection state (`m_iConnected`)
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerConnectedState {
    /// Player has never connected
    NeverConnected = -1,
    /// Player is fully connected
    Connected = 0,
    /// Player is connecting
    Connecting = 1,
    /// Player is reconnecting
    Reconnecting = 2,
    /// Player is disconnecting
    Disconnecting = 3,
    /// Player has disconnected
    Disconnected = 4,
    /// Slot is reserved
    Reserved = 5,
}

impl From<i32> for PlayerConnectedState {
    fn from(value: i32) -> Self {
        match value {
            -1 => Self::NeverConnected,
            0 => Self::Connected,
            1 => Self::Connecting,
            2 => Self::Reconnecting,
            3 => Self::Disconnecting,
            4 => Self::Disconnected,
            5 => Self::Reserved,
            _ => Self::Disconnected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_from_raw() {
        assert_eq!(CsTeam::from_raw(2), Some(CsTeam::Terrorist));
        assert_eq!(CsTeam::from_raw(3), Some(CsTeam::CounterTerrorist));
        assert_eq!(CsTeam::from_raw(9), None);
    }

    #[test]
    fn test_move_type_from_raw() {
        assert_eq!(MoveType::from_raw(1), Some(MoveType::Obsolete));
        assert_eq!(MoveType::from_raw(2), Some(MoveType::Walk));
        assert_eq!(MoveType::from_raw(MoveType::Custom as u8), Some(MoveType::Custom));
        assert_eq!(MoveType::from_raw(200), None);
    }

    #[test]
    fn test_render_mode_from_raw() {
        assert_eq!(RenderMode::from_raw(1), Some(RenderMode::TransColor));
        assert_eq!(RenderMode::from_raw(12), None);
    }

    #[test]
    fn test_player_connected_state() {
        assert_eq!(
            PlayerConnectedState::from(-1),
            PlayerConnectedState::NeverConnected
        );
        assert_eq!(
            PlayerConnectedState::from(0),
            PlayerConnectedState::Connected
        );
        assert_eq!(
            PlayerConnectedState::from(5),
            PlayerConnectedState::Reserved
        );
        // Unknown values should map to Disconnected
        assert_eq!(
            PlayerConnectedState::from(100),
            PlayerConnectedState::Disconnected
        );
    }
}
