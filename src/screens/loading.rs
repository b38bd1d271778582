//! Readouts on the fader while a transition loads: the target's progress and
//! the prompt shown while a load waits for confirmation.

use bevy::prelude::*;

use crate::TransitionSet;
use crate::scenes::{SceneController, SceneLoader, TransitionPhase};
use crate::theme::widget;

/// Text asking the player to confirm a gated load.
#[derive(Component, Debug, Reflect)]
#[reflect(Component)]
pub struct LoadingPrompt;

/// Text showing how far the transition target has loaded.
#[derive(Component, Debug, Reflect)]
#[reflect(Component)]
pub struct LoadingProgress;

pub(super) fn plugin(app: &mut App) {
    app.register_type::<LoadingPrompt>()
        .register_type::<LoadingProgress>();
    app.add_systems(
        Update,
        (update_loading_progress, update_loading_prompt).in_set(TransitionSet::Content),
    );
}

/// Hidden prompt naming the confirmation key. Spawned as a child of the fader.
pub fn loading_prompt(key: KeyCode) -> impl Bundle {
    (
        Name::new("Loading Prompt"),
        LoadingPrompt,
        widget::label(format!("Press {key:?} to continue")),
        Visibility::Hidden,
    )
}

/// Hidden progress readout. Spawned as a child of the fader.
pub fn loading_progress() -> impl Bundle {
    (
        Name::new("Loading Progress"),
        LoadingProgress,
        widget::label(""),
        Visibility::Hidden,
    )
}

fn update_loading_progress(
    controller: Res<SceneController>,
    loader: Res<SceneLoader>,
    mut readouts: Query<(&mut Text, &mut Visibility), With<LoadingProgress>>,
) {
    let progress = match controller.phase() {
        TransitionPhase::Loading { handle, .. } => loader.progress(handle),
        _ => None,
    };
    for (mut text, mut visibility) in &mut readouts {
        let Some(progress) = progress else {
            visibility.set_if_neq(Visibility::Hidden);
            continue;
        };
        text.0 = format!("Loading progress: {:.0}%", progress * 100.0);
        visibility.set_if_neq(Visibility::Inherited);
    }
}

fn update_loading_prompt(
    loader: Res<SceneLoader>,
    mut prompts: Query<&mut Visibility, With<LoadingPrompt>>,
) {
    let wanted = if loader.is_awaiting_confirmation() {
        Visibility::Inherited
    } else {
        Visibility::Hidden
    };
    for mut visibility in &mut prompts {
        visibility.set_if_neq(wanted);
    }
}
