//! Button hover/press feedback, greyed out while a transition is in flight.

use bevy::picking::hover::Hovered;
use bevy::prelude::*;
use bevy::ui::Pressed;

use crate::scenes::SceneController;

/// Background colors for each button state.
#[derive(Component, Debug, Reflect)]
#[reflect(Component)]
#[require(Hovered)]
pub struct ButtonColors {
    pub idle: Color,
    pub hovered: Color,
    pub pressed: Color,
    /// Shown while a transition is running and clicks are ignored.
    pub busy: Color,
}

fn apply_button_colors(
    controller: Option<Res<SceneController>>,
    mut buttons: Query<(Has<Pressed>, &Hovered, &ButtonColors, &mut BackgroundColor)>,
) {
    let busy = controller.is_some_and(|controller| controller.is_changing());
    for (pressed, Hovered(hovered), colors, mut background) in &mut buttons {
        let wanted = match (busy, pressed, *hovered) {
            (true, _, _) => colors.busy,
            (false, true, _) => colors.pressed,
            (false, false, true) => colors.hovered,
            (false, false, false) => colors.idle,
        };
        background.set_if_neq(wanted.into());
    }
}

pub fn plugin(app: &mut App) {
    app.register_type::<ButtonColors>();
    app.add_systems(
        Update,
        apply_button_colors.after(crate::TransitionSet::Sequence),
    );
}
