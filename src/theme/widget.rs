//! Reusable UI widget constructors.

use bevy::ecs::hierarchy::ChildSpawner;
use bevy::ecs::spawn::SpawnWith;
use bevy::ecs::system::IntoObserverSystem;
use bevy::prelude::*;

use super::interaction::ButtonColors;
use super::palette;
use crate::config::SceneConfig;
use crate::scenes::{LoadScene, SceneId};

/// Full-screen flex container that centers its children.
/// Scene screens add an `InContainer` so the whole tree unloads with the scene.
pub fn ui_root(name: impl Into<std::borrow::Cow<'static, str>>) -> impl Bundle {
    (
        Name::new(name),
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            align_items: AlignItems::Center,
            justify_content: JustifyContent::Center,
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(20.0),
            ..default()
        },
    )
}

/// Scene title text (header size, white).
pub fn header(text: impl Into<String>) -> impl Bundle {
    (
        Text::new(text),
        TextFont::from_font_size(palette::FONT_SIZE_HEADER),
        TextColor(palette::HEADER_TEXT),
    )
}

/// Small body text (prompt size, gray). Used by the HUD level readout and the
/// loading prompt on the fader.
pub fn label(text: impl Into<String>) -> impl Bundle {
    (
        Text::new(text),
        TextFont::from_font_size(palette::FONT_SIZE_PROMPT),
        TextColor(palette::BODY_TEXT),
    )
}

/// Clickable button with text and an observer-based action.
/// Outer wrapper node plus an inner `Button` carrying `ButtonColors`, so the
/// action observer sits on the entity that receives pointer events.
pub fn button<E, B, M, I>(text: impl Into<String>, action: I) -> impl Bundle
where
    E: EntityEvent,
    B: Bundle,
    I: IntoObserverSystem<E, B, M>,
{
    let text = text.into();
    let action = IntoObserverSystem::into_system(action);
    (
        Name::new("Button"),
        Node::default(),
        Children::spawn(SpawnWith(move |parent: &mut ChildSpawner| {
            parent
                .spawn((
                    Name::new("Button Inner"),
                    Button,
                    Node {
                        width: Val::Px(300.0),
                        height: Val::Px(60.0),
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        border: UiRect::all(Val::Px(1.0)),
                        ..default()
                    },
                    BackgroundColor(palette::BUTTON_BACKGROUND),
                    BorderColor::all(palette::PANEL_BORDER),
                    ButtonColors {
                        idle: palette::BUTTON_BACKGROUND,
                        hovered: palette::BUTTON_HOVERED_BACKGROUND,
                        pressed: palette::BUTTON_PRESSED_BACKGROUND,
                        busy: palette::PANEL_BACKGROUND,
                    },
                    children![(
                        Text(text),
                        TextFont::from_font_size(palette::FONT_SIZE_LABEL),
                        TextColor(palette::BUTTON_TEXT),
                        Pickable::IGNORE,
                    )],
                ))
                .observe(action);
        })),
    )
}

/// Button that requests `target` with the configured fade when clicked.
/// Clicks during a transition are still written and rejected as busy.
pub fn scene_button(text: impl Into<String>, target: SceneId) -> impl Bundle {
    button(
        text,
        move |_: On<Pointer<Click>>,
              config: Res<SceneConfig>,
              mut requests: MessageWriter<LoadScene>| {
            requests.write(LoadScene::new(target).with_fade(config.default_fade_secs));
        },
    )
}
