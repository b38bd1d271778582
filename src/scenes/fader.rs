//! Full-screen opacity ramp used to hide scene swaps.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum FadeDirection {
    ToBlack,
    #[default]
    FromBlack,
}

impl FadeDirection {
    /// Progress value the ramp ends at.
    #[must_use]
    pub const fn target(self) -> f32 {
        match self {
            Self::ToBlack => 1.0,
            Self::FromBlack => 0.0,
        }
    }

    const fn sign(self) -> f32 {
        match self {
            Self::ToBlack => 1.0,
            Self::FromBlack => -1.0,
        }
    }
}

/// Fade state of an occluding surface. Progress is the surface opacity.
#[derive(Component, Debug, Clone, PartialEq, Default, Reflect)]
#[reflect(Component)]
#[require(Visibility)]
pub struct Fader {
    direction: FadeDirection,
    clock: f32,
    duration: f32,
    progress: f32,
    running: bool,
    surface_active: bool,
}

impl Fader {
    /// Starts a ramp toward `direction`'s bound, continuing from the current
    /// progress. Re-requesting the current direction does nothing.
    pub fn fade(&mut self, duration: f32, direction: FadeDirection) {
        if direction == self.direction {
            return;
        }
        self.direction = direction;

        if duration.is_nan() || duration <= f32::EPSILON {
            self.progress = direction.target();
            self.clock = 0.0;
            self.duration = 0.0;
            self.running = false;
            return;
        }

        self.duration = duration;
        self.clock = self.progress * duration;
        self.running = true;
    }

    /// Advances a running ramp by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        if !self.running {
            return;
        }
        self.clock += self.direction.sign() * dt;
        self.progress = (self.clock / self.duration).clamp(0.0, 1.0);

        let finished = match self.direction {
            FadeDirection::ToBlack => self.progress >= 1.0,
            FadeDirection::FromBlack => self.progress <= 0.0,
        };
        if finished {
            self.progress = self.direction.target();
            self.running = false;
        }
    }

    pub const fn set_surface_active(&mut self, active: bool) {
        self.surface_active = active;
    }

    #[must_use]
    pub const fn surface_active(&self) -> bool {
        self.surface_active
    }

    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub const fn progress(&self) -> f32 {
        self.progress
    }

    #[must_use]
    pub const fn direction(&self) -> FadeDirection {
        self.direction
    }
}

/// Advances every fader and mirrors its state onto the surface.
pub(super) fn tick_faders(
    time: Res<Time>,
    mut faders: Query<(
        &mut Fader,
        Option<&mut BackgroundColor>,
        Option<&mut Visibility>,
    )>,
) {
    for (mut fader, background, visibility) in &mut faders {
        fader.advance(time.delta_secs());

        if let Some(mut background) = background {
            background.0.set_alpha(fader.progress());
        }
        if let Some(mut visibility) = visibility {
            let wanted = if fader.surface_active() {
                Visibility::Inherited
            } else {
                Visibility::Hidden
            };
            visibility.set_if_neq(wanted);
        }
    }
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Fader>()
        .register_type::<FadeDirection>();

    app.add_systems(Update, tick_faders.in_set(crate::TransitionSet::Fade));
}
