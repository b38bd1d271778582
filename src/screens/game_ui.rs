//! Shared HUD resident alongside every gameplay level.

use bevy::prelude::*;

use super::just_activated;
use crate::TransitionSet;
use crate::scenes::{ContainerId, InContainer, SceneActivated, SceneId, TransitionFinished};
use crate::theme::{palette, widget};

/// Text showing which level the HUD currently sits over.
#[derive(Component, Debug, Reflect)]
#[reflect(Component)]
pub struct CurrentLevelLabel;

pub(super) fn plugin(app: &mut App) {
    app.register_type::<CurrentLevelLabel>();
    app.add_systems(
        Update,
        (spawn_game_ui, update_level_label)
            .chain()
            .in_set(TransitionSet::Content),
    );
}

fn spawn_game_ui(mut activated: MessageReader<SceneActivated>, mut commands: Commands) {
    if !just_activated(&mut activated, SceneId::GameUi) {
        return;
    }

    commands.spawn((
        Name::new("Game UI"),
        InContainer(ContainerId::Scene(SceneId::GameUi)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(0.0),
            width: Val::Percent(100.0),
            height: Val::Px(80.0),
            padding: UiRect::horizontal(Val::Px(24.0)),
            align_items: AlignItems::Center,
            justify_content: JustifyContent::SpaceBetween,
            ..default()
        },
        BackgroundColor(palette::HUD_BACKGROUND),
        children![
            (CurrentLevelLabel, widget::label("")),
            widget::scene_button("Main Menu", SceneId::MainMenu),
        ],
    ));
}

fn update_level_label(
    mut finished: MessageReader<TransitionFinished>,
    mut labels: Query<&mut Text, With<CurrentLevelLabel>>,
) {
    let Some(level) = finished
        .read()
        .map(|TransitionFinished(id)| *id)
        .filter(|id| id.is_level())
        .last()
    else {
        return;
    };
    for mut text in &mut labels {
        text.0 = level.display_name().to_string();
    }
}
