//! Additive scene loading: which scenes are resident, how they load, and the
//! controller that sequences transitions behind a fade.

pub mod active;
pub mod container;
pub mod controller;
pub mod fader;
pub mod id;
pub mod loader;
pub mod policy;

use bevy::prelude::*;

pub use active::ActiveScenes;
pub use container::{ActiveContainer, ContainerId, InContainer, PersistentAnchor, SpawnInActiveScene};
pub use controller::{
    LoadScene, RequestRejected, SceneCommandsExt, SceneController, TransitionFinished,
    TransitionPhase, register_camera, register_fader, transition_idle,
};
pub use fader::{FadeDirection, Fader};
pub use id::SceneId;
pub use loader::{ACTIVATION_THRESHOLD, LoadHandle, SceneActivated, SceneLoader, SceneUnloaded};
pub use policy::ScenePolicy;

use crate::TransitionSet;
use crate::config::SceneConfig;

/// Installs the scene core. Reads `SceneConfig` if one was inserted first.
pub fn plugin(app: &mut App) {
    app.configure_sets(
        Update,
        (
            TransitionSet::Input,
            TransitionSet::Requests,
            TransitionSet::Loading,
            TransitionSet::Fade,
            TransitionSet::Sequence,
            TransitionSet::Content,
        )
            .chain(),
    );

    let config = app
        .world()
        .get_resource::<SceneConfig>()
        .cloned()
        .unwrap_or_default();
    app.register_type::<ActiveScenes>()
        .init_resource::<ActiveScenes>()
        .insert_resource(ScenePolicy::from_config(&config))
        .insert_resource(SceneLoader::new(config.effective_load_rate()));

    app.add_plugins((
        container::plugin,
        fader::plugin,
        loader::plugin,
        controller::plugin,
    ));
}
