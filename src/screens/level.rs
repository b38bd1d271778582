//! Gameplay level content: a colored backdrop and a way onward.

use bevy::prelude::*;

use crate::TransitionSet;
use crate::scenes::{ContainerId, InContainer, SceneActivated, SceneId};
use crate::theme::{palette, widget};

/// Marks the backdrop of a level.
#[derive(Component, Debug, Reflect)]
#[reflect(Component)]
pub struct LevelBackdrop(pub SceneId);

pub(super) fn plugin(app: &mut App) {
    app.register_type::<LevelBackdrop>();
    app.add_systems(Update, spawn_levels.in_set(TransitionSet::Content));
}

fn backdrop_color(level: SceneId) -> Color {
    let index = SceneId::LEVELS
        .iter()
        .position(|&id| id == level)
        .unwrap_or_default();
    palette::LEVEL_BACKDROPS[index]
}

fn spawn_levels(mut activated: MessageReader<SceneActivated>, mut commands: Commands) {
    for &SceneActivated(level) in activated.read() {
        if !level.is_level() {
            continue;
        }

        let (next_text, next_scene) = match level.next_level() {
            Some(next) => (format!("Continue to {next}"), next),
            None => ("Back to Main Menu".to_string(), SceneId::MainMenu),
        };

        commands.spawn((
            widget::ui_root(format!("{level} Root")),
            LevelBackdrop(level),
            InContainer(ContainerId::Scene(level)),
            BackgroundColor(backdrop_color(level)),
            GlobalZIndex(-1),
            children![
                widget::header(level.display_name()),
                widget::scene_button(next_text, next_scene),
            ],
        ));
    }
}
