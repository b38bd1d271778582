//! Scene relay demo entry point.

use scene_relay::prelude::*;

fn main() {
    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Scene Relay".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(scene_relay::plugin);

    #[cfg(feature = "dev")]
    app.add_plugins(scene_relay::dev_tools::inspector_plugin);

    app.run();
}
