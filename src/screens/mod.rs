//! Content of each scene, spawned when the scene activates and despawned with
//! its container when the scene unloads.

mod game_ui;
mod level;
pub mod loading;
mod main_menu;

use bevy::prelude::*;

use crate::scenes::{ContainerId, InContainer, SceneActivated, SceneId};
use crate::theme::widget;

pub use game_ui::CurrentLevelLabel;
pub use loading::{LoadingProgress, LoadingPrompt};

pub fn plugin(app: &mut App) {
    app.add_plugins((
        main_menu::plugin,
        game_ui::plugin,
        level::plugin,
        loading::plugin,
    ));
}

/// Full-screen root owned by `scene`'s container.
fn scene_root(scene: SceneId) -> impl Bundle {
    (
        widget::ui_root(format!("{scene} Root")),
        InContainer(ContainerId::Scene(scene)),
    )
}

/// Drains `activated`, reporting whether `scene` was among the messages.
fn just_activated(activated: &mut MessageReader<SceneActivated>, scene: SceneId) -> bool {
    let mut found = false;
    for SceneActivated(id) in activated.read() {
        found |= *id == scene;
    }
    found
}
