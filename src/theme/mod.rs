//! Shared UI theme: color palette, button feedback, and widget constructors.

pub mod interaction;
pub mod palette;
pub mod widget;

pub fn plugin(app: &mut bevy::prelude::App) {
    app.add_plugins(interaction::plugin);
}
