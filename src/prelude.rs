//! Common imports for the entire crate.

pub use bevy::prelude::*;

pub use crate::TransitionSet;
pub use crate::config::SceneConfig;
pub use crate::scenes::{
    ActiveScenes, ContainerId, InContainer, LoadScene, SceneActivated, SceneCommandsExt,
    SceneController, SceneId, SceneUnloaded, SpawnInActiveScene, TransitionFinished,
};
