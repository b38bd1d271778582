//! Main menu: one button per level plus exit.

use bevy::prelude::*;

use super::{just_activated, scene_root};
use crate::TransitionSet;
use crate::scenes::{SceneActivated, SceneId};
use crate::theme::{palette, widget};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Update, spawn_main_menu.in_set(TransitionSet::Content));
}

fn spawn_main_menu(mut activated: MessageReader<SceneActivated>, mut commands: Commands) {
    if !just_activated(&mut activated, SceneId::MainMenu) {
        return;
    }

    commands.spawn((
        scene_root(SceneId::MainMenu),
        children![(
            Name::new("Main Menu Panel"),
            Node {
                width: Val::Px(500.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                row_gap: Val::Px(16.0),
                padding: UiRect::all(Val::Px(40.0)),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(palette::PANEL_BACKGROUND),
            BorderColor::all(palette::PANEL_BORDER),
            children![
                (
                    Text::new("Scene Relay"),
                    TextFont::from_font_size(palette::FONT_SIZE_TITLE),
                    TextColor(palette::HEADER_TEXT),
                ),
                widget::scene_button("Level 1", SceneId::Level1),
                widget::scene_button("Level 2", SceneId::Level2),
                widget::scene_button("Level 3", SceneId::Level3),
                widget::button(
                    "Exit",
                    |_: On<Pointer<Click>>, mut exit: MessageWriter<AppExit>| {
                        exit.write(AppExit::Success);
                    },
                ),
            ],
        )],
    ));
}
