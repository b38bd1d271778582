//! Additive scene loads with optional "press to continue" gating.
//!
//! A load streams toward [`ACTIVATION_THRESHOLD`] at the configured rate and
//! finalizes there, either on its own or once confirmed. Finalizing writes
//! [`SceneActivated`] so content plugins can spawn the scene's entities.

use bevy::prelude::*;

use super::SceneId;
use super::policy::ScenePolicy;

/// Progress at which a gated load waits for confirmation.
pub const ACTIVATION_THRESHOLD: f32 = 0.9;

/// A scene finished loading and its content should now exist.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneActivated(pub SceneId);

/// A scene was unloaded and its container despawned.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneUnloaded(pub SceneId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub struct LoadHandle(u32);

#[derive(Debug, Clone, PartialEq)]
struct PendingLoad {
    handle: LoadHandle,
    scene: SceneId,
    allow_activation: bool,
    progress: f32,
    announced: bool,
}

impl PendingLoad {
    fn awaiting_confirmation(&self) -> bool {
        !self.allow_activation && self.progress >= ACTIVATION_THRESHOLD
    }
}

#[derive(Resource, Debug)]
pub struct SceneLoader {
    pending: Vec<PendingLoad>,
    next_handle: u32,
    rate: f32,
}

impl Default for SceneLoader {
    fn default() -> Self {
        Self::new(crate::config::SceneConfig::default().load_rate)
    }
}

impl SceneLoader {
    /// `rate` is progress gained per second.
    #[must_use]
    pub const fn new(rate: f32) -> Self {
        Self {
            pending: Vec::new(),
            next_handle: 0,
            rate,
        }
    }

    /// Starts loading `scene`. Without `auto_finalize` the load holds at the
    /// activation threshold until [`Self::confirm`] is called.
    pub fn begin(&mut self, scene: SceneId, auto_finalize: bool) -> LoadHandle {
        let handle = LoadHandle(self.next_handle);
        self.next_handle += 1;
        self.pending.push(PendingLoad {
            handle,
            scene,
            allow_activation: auto_finalize,
            progress: 0.0,
            announced: false,
        });
        debug!("Loading {scene} (auto finalize: {auto_finalize})");
        handle
    }

    /// Progress in `[0, 1]`, or `None` for a handle this loader never issued.
    #[must_use]
    pub fn progress(&self, handle: LoadHandle) -> Option<f32> {
        if handle.0 >= self.next_handle {
            return None;
        }
        Some(self.find(handle).map_or(1.0, |load| load.progress))
    }

    /// Whether the load has finalized. Cancelled loads also count as done.
    #[must_use]
    pub fn is_done(&self, handle: LoadHandle) -> bool {
        handle.0 < self.next_handle && self.find(handle).is_none()
    }

    /// Lets a gated load finalize. Returns false if the load is no longer pending.
    pub fn confirm(&mut self, handle: LoadHandle) -> bool {
        let Some(load) = self.pending.iter_mut().find(|load| load.handle == handle) else {
            return false;
        };
        load.allow_activation = true;
        true
    }

    /// Gated loads sitting at the threshold.
    pub fn awaiting_confirmation(&self) -> impl Iterator<Item = LoadHandle> + '_ {
        self.pending
            .iter()
            .filter(|load| load.awaiting_confirmation())
            .map(|load| load.handle)
    }

    #[must_use]
    pub fn is_awaiting_confirmation(&self) -> bool {
        self.awaiting_confirmation().next().is_some()
    }

    /// Drops any pending load of `scene`.
    pub fn cancel(&mut self, scene: SceneId) {
        self.pending.retain(|load| load.scene != scene);
    }

    #[must_use]
    pub fn is_loading(&self, scene: SceneId) -> bool {
        self.pending.iter().any(|load| load.scene == scene)
    }

    /// Advances every pending load by `dt` seconds and returns the scenes
    /// that finalized, in the order their loads began.
    pub fn advance(&mut self, dt: f32) -> Vec<SceneId> {
        let step = self.rate * dt;
        let mut activated = Vec::new();

        self.pending.retain_mut(|load| {
            if load.progress < ACTIVATION_THRESHOLD {
                load.progress = (load.progress + step).min(ACTIVATION_THRESHOLD);
                return true;
            }
            if load.allow_activation {
                load.progress = 1.0;
                activated.push(load.scene);
                return false;
            }
            if !load.announced {
                load.announced = true;
                info!("{} ready, waiting for confirmation", load.scene);
            }
            true
        });

        activated
    }

    fn find(&self, handle: LoadHandle) -> Option<&PendingLoad> {
        self.pending.iter().find(|load| load.handle == handle)
    }
}

fn advance_scene_loads(
    time: Res<Time>,
    mut loader: ResMut<SceneLoader>,
    mut activated: MessageWriter<SceneActivated>,
) {
    for scene in loader.advance(time.delta_secs()) {
        info!("{scene} activated");
        activated.write(SceneActivated(scene));
    }
}

/// Releases every load waiting at the threshold on a fresh press of the
/// confirmation key. Holding the key does not confirm later loads.
fn confirm_gated_loads(
    keyboard: Res<ButtonInput<KeyCode>>,
    policy: Res<ScenePolicy>,
    mut loader: ResMut<SceneLoader>,
) {
    if !keyboard.just_pressed(policy.confirm_key()) {
        return;
    }
    let waiting: Vec<LoadHandle> = loader.awaiting_confirmation().collect();
    for handle in waiting {
        loader.confirm(handle);
    }
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<LoadHandle>()
        .add_message::<SceneActivated>()
        .add_message::<SceneUnloaded>();

    app.add_systems(
        Update,
        (
            confirm_gated_loads.in_set(crate::TransitionSet::Input),
            advance_scene_loads.in_set(crate::TransitionSet::Loading),
        ),
    );
}
