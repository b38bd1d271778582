//! Additive scene transitions: a controller that fades, unloads, loads and
//! relocates persistent objects so the right menu/UI/level scenes are resident.

pub mod bootstrap;
pub mod config;
#[cfg(feature = "dev")]
pub mod dev_tools;
pub mod prelude;
pub mod scenes;
pub mod screens;
#[cfg(test)]
pub mod testing;
pub mod theme;

use bevy::prelude::*;

/// Per-frame ordering of the transition pipeline in `Update`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionSet {
    /// Confirmation key polling.
    Input,
    /// Admitting or rejecting `LoadScene` requests.
    Requests,
    /// Streaming pending loads.
    Loading,
    /// Advancing fade ramps.
    Fade,
    /// Moving the transition in flight to its next phase.
    Sequence,
    /// Spawning content for scenes that just activated.
    Content,
}

/// Everything except window and rendering setup.
pub fn plugin(app: &mut App) {
    app.add_plugins((
        config::plugin,
        scenes::plugin,
        theme::plugin,
        screens::plugin,
        bootstrap::plugin,
    ));

    #[cfg(feature = "dev")]
    app.add_plugins(dev_tools::plugin);
}
