//! The ordered set of currently resident scenes.

use bevy::prelude::*;

use super::SceneId;

/// Scenes currently loaded, in the order they were added.
///
/// Holds each `SceneId` at most once. Starts as `[Init]` because the
/// bootstrap scene is resident from the first frame.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct ActiveScenes(Vec<SceneId>);

impl Default for ActiveScenes {
    fn default() -> Self {
        Self(vec![SceneId::Init])
    }
}

impl FromIterator<SceneId> for ActiveScenes {
    fn from_iter<I: IntoIterator<Item = SceneId>>(iter: I) -> Self {
        let mut set = Self(Vec::new());
        for id in iter {
            set.insert(id);
        }
        set
    }
}

impl ActiveScenes {
    #[must_use]
    pub fn contains(&self, id: SceneId) -> bool {
        self.0.contains(&id)
    }

    /// Appends `id` unless already present. Returns whether it was added.
    pub fn insert(&mut self, id: SceneId) -> bool {
        if self.contains(id) {
            return false;
        }
        self.0.push(id);
        true
    }

    /// Removes `id`, keeping the order of the rest. Returns whether it was present.
    pub fn remove(&mut self, id: SceneId) -> bool {
        let Some(index) = self.0.iter().position(|&active| active == id) else {
            return false;
        };
        self.0.remove(index);
        true
    }

    /// Empties the set. Returns what it held, most recently added first.
    pub fn clear(&mut self) -> Vec<SceneId> {
        let mut drained: Vec<SceneId> = self.0.drain(..).collect();
        drained.reverse();
        drained
    }

    #[must_use]
    pub fn as_slice(&self) -> &[SceneId] {
        &self.0
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = SceneId> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
