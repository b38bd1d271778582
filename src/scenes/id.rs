//! Identifiers for every additively loadable scene.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// One loadable unit of content.
///
/// The discriminants are build indices shared with the scene registry and
/// must never be renumbered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Reflect, Serialize, Deserialize,
)]
#[repr(u8)]
pub enum SceneId {
    /// Bootstrap scene. Resident on the first frame, never a load target.
    Init = 0,
    MainMenu = 1,
    /// HUD shared by every gameplay level.
    GameUi = 2,
    Level1 = 3,
    Level2 = 4,
    Level3 = 5,
}

impl SceneId {
    pub const ALL: [Self; 6] = [
        Self::Init,
        Self::MainMenu,
        Self::GameUi,
        Self::Level1,
        Self::Level2,
        Self::Level3,
    ];

    pub const LEVELS: [Self; 3] = [Self::Level1, Self::Level2, Self::Level3];

    #[must_use]
    pub const fn build_index(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub const fn is_level(self) -> bool {
        matches!(self, Self::Level1 | Self::Level2 | Self::Level3)
    }

    /// The level after this one, if any.
    #[must_use]
    pub const fn next_level(self) -> Option<Self> {
        match self {
            Self::Level1 => Some(Self::Level2),
            Self::Level2 => Some(Self::Level3),
            _ => None,
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Init => "Init",
            Self::MainMenu => "Main Menu",
            Self::GameUi => "Game UI",
            Self::Level1 => "Level 1",
            Self::Level2 => "Level 2",
            Self::Level3 => "Level 3",
        }
    }
}

impl std::fmt::Display for SceneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
