//! Which scenes finalize immediately and which need the shared UI.

use bevy::prelude::*;

use super::SceneId;
use crate::config::SceneConfig;

/// Policy sets, fixed once built at startup.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct ScenePolicy {
    auto_activate: Vec<SceneId>,
    needs_shared_ui: Vec<SceneId>,
    confirm_key: KeyCode,
}

impl Default for ScenePolicy {
    fn default() -> Self {
        Self::from_config(&SceneConfig::default())
    }
}

impl ScenePolicy {
    /// Builds the policy, dropping `Init` from both sets.
    #[must_use]
    pub fn new(
        auto_activate: impl IntoIterator<Item = SceneId>,
        needs_shared_ui: impl IntoIterator<Item = SceneId>,
    ) -> Self {
        let loadable = |id: &SceneId| *id != SceneId::Init;
        Self {
            auto_activate: auto_activate.into_iter().filter(loadable).collect(),
            needs_shared_ui: needs_shared_ui.into_iter().filter(loadable).collect(),
            confirm_key: KeyCode::Backspace,
        }
    }

    #[must_use]
    pub fn from_config(config: &SceneConfig) -> Self {
        Self::new(
            config.auto_activate.iter().copied(),
            config.needs_shared_ui.iter().copied(),
        )
    }

    #[must_use]
    pub fn with_confirm_key(mut self, key: KeyCode) -> Self {
        self.confirm_key = key;
        self
    }

    /// Whether loads of `id` finalize without confirmation.
    #[must_use]
    pub fn finalizes_immediately(&self, id: SceneId) -> bool {
        self.auto_activate.contains(&id)
    }

    #[must_use]
    pub fn needs_shared_ui(&self, id: SceneId) -> bool {
        self.needs_shared_ui.contains(&id)
    }

    #[must_use]
    pub const fn confirm_key(&self) -> KeyCode {
        self.confirm_key
    }
}
