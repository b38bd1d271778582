//! Development tools, only included with `--features dev`.
//!
//! F1 dumps the transition state to the log. Digit keys jump straight to a
//! level through the same request path the buttons use.

use bevy::prelude::*;

use crate::TransitionSet;
use crate::config::SceneConfig;
use crate::scenes::{
    ActiveScenes, LoadScene, SceneController, SceneId, SceneLoader, transition_idle,
};

const LEVEL_KEYS: [(KeyCode, SceneId); 3] = [
    (KeyCode::Digit1, SceneId::Level1),
    (KeyCode::Digit2, SceneId::Level2),
    (KeyCode::Digit3, SceneId::Level3),
];

fn log_transition_state(
    keyboard: Res<ButtonInput<KeyCode>>,
    controller: Res<SceneController>,
    active: Res<ActiveScenes>,
    loader: Res<SceneLoader>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }
    info!(
        "phase={:?} active={:?} awaiting_confirmation={}",
        controller.phase(),
        active.as_slice(),
        loader.is_awaiting_confirmation()
    );
}

fn debug_request_level(
    keyboard: Res<ButtonInput<KeyCode>>,
    config: Res<SceneConfig>,
    mut requests: MessageWriter<LoadScene>,
) {
    for (key, level) in LEVEL_KEYS {
        if keyboard.just_pressed(key) {
            requests.write(LoadScene::new(level).with_fade(config.default_fade_secs));
        }
    }
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        Update,
        (
            log_transition_state,
            debug_request_level.run_if(transition_idle),
        )
            .in_set(TransitionSet::Input),
    );
}

/// World inspector window. Needs a renderer, so only the binary installs it.
pub fn inspector_plugin(app: &mut App) {
    use bevy_inspector_egui::bevy_egui::EguiPlugin;
    use bevy_inspector_egui::quick::WorldInspectorPlugin;

    if !app.is_plugin_added::<EguiPlugin>() {
        app.add_plugins(EguiPlugin::default());
    }
    app.add_plugins(WorldInspectorPlugin::new());
}
