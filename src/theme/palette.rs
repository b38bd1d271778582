//! Color constants and font size tokens shared by the scene screens.

use bevy::prelude::*;

// === Text ===

pub const HEADER_TEXT: Color = Color::WHITE;
pub const BODY_TEXT: Color = Color::srgb(0.7, 0.7, 0.7);
pub const BUTTON_TEXT: Color = Color::srgb(0.925, 0.925, 0.925);

// === Surfaces ===

/// Occluding surface of the fader canvas. Alpha is driven by the fade.
pub const FADE_SURFACE: Color = Color::BLACK;

/// Panel behind the main menu buttons.
pub const PANEL_BACKGROUND: Color = Color::srgba(0.1, 0.1, 0.15, 0.95);
pub const PANEL_BORDER: Color = Color::srgba(0.5, 0.5, 0.6, 0.8);

/// Strip along the top of the screen holding the shared game UI.
pub const HUD_BACKGROUND: Color = Color::srgba(0.05, 0.05, 0.08, 0.85);

/// Backdrop of each level, indexed by level order.
pub const LEVEL_BACKDROPS: [Color; 3] = [
    Color::srgb(0.12, 0.2, 0.14),
    Color::srgb(0.2, 0.14, 0.1),
    Color::srgb(0.1, 0.12, 0.22),
];

// === Buttons ===

pub const BUTTON_BACKGROUND: Color = Color::srgb(0.275, 0.4, 0.75);
pub const BUTTON_HOVERED_BACKGROUND: Color = Color::srgb(0.384, 0.6, 0.82);
pub const BUTTON_PRESSED_BACKGROUND: Color = Color::srgb(0.239, 0.286, 0.6);

// === Font sizes ===

pub const FONT_SIZE_TITLE: f32 = 72.0;
pub const FONT_SIZE_HEADER: f32 = 64.0;
pub const FONT_SIZE_LABEL: f32 = 32.0;
pub const FONT_SIZE_PROMPT: f32 = 24.0;
