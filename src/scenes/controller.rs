//! The scene transition controller.
//!
//! One transition runs at a time: fade to black, unload what the target does
//! not need, load the target (and the shared UI), wait for the load, fade
//! back in and settle. Requests arriving while a transition is in flight are
//! dropped, not queued.

use bevy::prelude::*;

use super::SceneId;
use super::active::ActiveScenes;
use super::container::{self, ActiveContainer, ContainerId, InContainer, PersistentAnchor};
use super::fader::{FadeDirection, Fader};
use super::loader::{LoadHandle, SceneLoader, SceneUnloaded};
use super::policy::ScenePolicy;
use crate::config::SceneConfig;

/// Request to make `target` resident, fading over `fade_duration` seconds.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct LoadScene {
    pub target: SceneId,
    pub fade_duration: f32,
}

impl LoadScene {
    #[must_use]
    pub const fn new(target: SceneId) -> Self {
        Self {
            target,
            fade_duration: 0.0,
        }
    }

    #[must_use]
    pub const fn with_fade(mut self, seconds: f32) -> Self {
        self.fade_duration = seconds;
        self
    }

    /// Main menu transitions never fade; unusable durations become zero.
    fn normalized(self) -> Self {
        let usable = self.fade_duration.is_finite() && self.fade_duration > 0.0;
        Self {
            target: self.target,
            fade_duration: if usable && self.target != SceneId::MainMenu {
                self.fade_duration
            } else {
                0.0
            },
        }
    }
}

/// Written once a transition has settled on the carried scene.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionFinished(pub SceneId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RequestRejected {
    #[error("{0} is the bootstrap scene and cannot be loaded")]
    InvalidTarget(SceneId),
    #[error("a transition to {in_flight} is already in progress")]
    Busy { in_flight: SceneId },
    #[error("{0} is already loaded")]
    AlreadyActive(SceneId),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TransitionPhase {
    #[default]
    Idle,
    FadingOut {
        target: SceneId,
        fade: f32,
    },
    Loading {
        target: SceneId,
        fade: f32,
        handle: LoadHandle,
    },
    FadingIn {
        target: SceneId,
    },
    Settling {
        target: SceneId,
        remaining: f32,
    },
}

impl TransitionPhase {
    #[must_use]
    pub const fn target(&self) -> Option<SceneId> {
        match *self {
            Self::Idle => None,
            Self::FadingOut { target, .. }
            | Self::Loading { target, .. }
            | Self::FadingIn { target }
            | Self::Settling { target, .. } => Some(target),
        }
    }
}

/// Owns the transition in flight and the registered persistent anchors.
///
/// Only the scene plugin can create it, so there is exactly one per app.
#[derive(Resource, Debug)]
pub struct SceneController {
    phase: TransitionPhase,
    camera: Option<Entity>,
    fader: Option<Entity>,
    settle_delay: f32,
}

impl SceneController {
    pub(crate) const fn new(settle_delay: f32) -> Self {
        Self {
            phase: TransitionPhase::Idle,
            camera: None,
            fader: None,
            settle_delay,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub const fn is_changing(&self) -> bool {
        !matches!(self.phase, TransitionPhase::Idle)
    }

    #[must_use]
    pub const fn camera(&self) -> Option<Entity> {
        self.camera
    }

    #[must_use]
    pub const fn fader(&self) -> Option<Entity> {
        self.fader
    }

    /// Decides whether `request` may start a transition now.
    pub fn admit(
        &self,
        request: LoadScene,
        active: &ActiveScenes,
    ) -> Result<LoadScene, RequestRejected> {
        if request.target == SceneId::Init {
            return Err(RequestRejected::InvalidTarget(request.target));
        }
        if let Some(in_flight) = self.phase.target() {
            return Err(RequestRejected::Busy { in_flight });
        }
        if active.contains(request.target) {
            return Err(RequestRejected::AlreadyActive(request.target));
        }
        Ok(request.normalized())
    }
}

/// Run condition: no transition is in flight.
pub fn transition_idle(controller: Res<SceneController>) -> bool {
    !controller.is_changing()
}

/// Removes every scene that must not survive a transition to `target` and
/// returns them in unload order (most recently loaded first).
///
/// The main menu drops everything. Other targets keep themselves and, when
/// they need the shared UI, `GameUi`.
pub fn reconcile_active_scenes(
    active: &mut ActiveScenes,
    target: SceneId,
    policy: &ScenePolicy,
) -> Vec<SceneId> {
    if target == SceneId::MainMenu {
        return active.clear();
    }

    let keep_ui = policy.needs_shared_ui(target);
    let dropped: Vec<SceneId> = active
        .iter()
        .rev()
        .filter(|&id| id != target && !(id == SceneId::GameUi && keep_ui))
        .collect();
    for &id in &dropped {
        active.remove(id);
    }
    dropped
}

// === Registration ===

/// Hands the camera to the controller and parks it in the management container.
pub fn register_camera(world: &mut World, camera: Entity) {
    register_anchor(world, camera, PersistentAnchor::Camera);
}

/// Hands the fader canvas to the controller and parks it in the management container.
pub fn register_fader(world: &mut World, fader: Entity) {
    register_anchor(world, fader, PersistentAnchor::Fader);
}

fn register_anchor(world: &mut World, entity: Entity, anchor: PersistentAnchor) {
    {
        let Ok(mut entity_mut) = world.get_entity_mut(entity) else {
            warn!("Cannot register {anchor:?}: {entity} does not exist");
            return;
        };
        entity_mut.insert((anchor, InContainer(ContainerId::Management)));
    }

    let Some(mut controller) = world.get_resource_mut::<SceneController>() else {
        warn!("Cannot register {anchor:?}: scene plugin is not installed");
        return;
    };
    let slot = match anchor {
        PersistentAnchor::Camera => &mut controller.camera,
        PersistentAnchor::Fader => &mut controller.fader,
    };
    if let Some(previous) = slot.replace(entity) {
        if previous != entity {
            warn!("Replacing registered {anchor:?} {previous} with {entity}");
        }
    }
}

/// Deferred access to the controller from systems.
pub trait SceneCommandsExt {
    fn register_camera(&mut self, camera: Entity);
    fn register_fader(&mut self, fader: Entity);
    fn load_scene(&mut self, target: SceneId, fade_duration: f32);
}

impl SceneCommandsExt for Commands<'_, '_> {
    fn register_camera(&mut self, camera: Entity) {
        self.queue(move |world: &mut World| register_camera(world, camera));
    }

    fn register_fader(&mut self, fader: Entity) {
        self.queue(move |world: &mut World| register_fader(world, fader));
    }

    fn load_scene(&mut self, target: SceneId, fade_duration: f32) {
        let request = LoadScene::new(target).with_fade(fade_duration);
        self.queue(move |world: &mut World| {
            world.write_message(request);
        });
    }
}

// === Systems ===

fn log_rejection(rejected: RequestRejected) {
    match rejected {
        RequestRejected::InvalidTarget(_) => warn!("Ignoring scene request: {rejected}"),
        RequestRejected::Busy { .. } => debug!("Ignoring scene request: {rejected}"),
        RequestRejected::AlreadyActive(_) => info!("Ignoring scene request: {rejected}"),
    }
}

fn accept_load_requests(
    mut requests: MessageReader<LoadScene>,
    mut controller: ResMut<SceneController>,
    active: Res<ActiveScenes>,
    mut faders: Query<&mut Fader>,
) {
    for request in requests.read() {
        let request = match controller.admit(*request, &active) {
            Ok(request) => request,
            Err(rejected) => {
                log_rejection(rejected);
                continue;
            }
        };

        if let Some(mut fader) = controller.fader.and_then(|entity| faders.get_mut(entity).ok()) {
            fader.set_surface_active(true);
            fader.fade(request.fade_duration, FadeDirection::ToBlack);
        }
        info!(
            "Transition to {} started (fade {:.2}s)",
            request.target, request.fade_duration
        );
        controller.phase = TransitionPhase::FadingOut {
            target: request.target,
            fade: request.fade_duration,
        };
    }
}

/// Moves the transition in flight forward by at most one phase.
fn advance_transition(
    time: Res<Time>,
    policy: Res<ScenePolicy>,
    mut controller: ResMut<SceneController>,
    mut active: ResMut<ActiveScenes>,
    mut active_container: ResMut<ActiveContainer>,
    mut loader: ResMut<SceneLoader>,
    mut faders: Query<&mut Fader>,
    mut containers: Query<(Entity, &mut InContainer)>,
    mut unloaded: MessageWriter<SceneUnloaded>,
    mut finished: MessageWriter<TransitionFinished>,
    mut commands: Commands,
) {
    let camera = controller.camera;
    let fader_entity = controller.fader;
    let fader_running = fader_entity
        .and_then(|entity| faders.get(entity).ok())
        .is_some_and(Fader::is_running);

    let phase = controller.phase;
    match phase {
        TransitionPhase::Idle => {}
        TransitionPhase::FadingOut { target, fade } => {
            if fader_running {
                return;
            }

            active_container.0 = ContainerId::Management;
            if let Some(camera) = camera {
                container::relocate(&mut containers, camera, ContainerId::Management);
            }

            for scene in reconcile_active_scenes(&mut active, target, &policy) {
                loader.cancel(scene);
                let despawned = container::despawn_container(
                    &containers,
                    ContainerId::Scene(scene),
                    &mut commands,
                );
                debug!("Unloaded {scene} ({despawned} root entities)");
                unloaded.write(SceneUnloaded(scene));
            }

            if target != SceneId::MainMenu
                && policy.needs_shared_ui(target)
                && !active.contains(SceneId::GameUi)
            {
                loader.begin(SceneId::GameUi, true);
                active.insert(SceneId::GameUi);
            }

            let handle = loader.begin(target, policy.finalizes_immediately(target));
            active.insert(target);
            controller.phase = TransitionPhase::Loading {
                target,
                fade,
                handle,
            };
        }
        TransitionPhase::Loading {
            target,
            fade,
            handle,
        } => {
            if !loader.is_done(handle) {
                return;
            }

            if let Some(mut fader) = fader_entity.and_then(|entity| faders.get_mut(entity).ok()) {
                fader.fade(fade, FadeDirection::FromBlack);
            }
            if let Some(camera) = camera {
                container::relocate(&mut containers, camera, ContainerId::Scene(target));
            }
            controller.phase = TransitionPhase::FadingIn { target };
        }
        TransitionPhase::FadingIn { target } => {
            if fader_running {
                return;
            }

            if let Some(mut fader) = fader_entity.and_then(|entity| faders.get_mut(entity).ok()) {
                fader.set_surface_active(false);
            }
            let remaining = controller.settle_delay;
            controller.phase = TransitionPhase::Settling { target, remaining };
        }
        TransitionPhase::Settling { target, remaining } => {
            let remaining = remaining - time.delta_secs();
            if remaining > 0.0 {
                controller.phase = TransitionPhase::Settling { target, remaining };
                return;
            }

            active_container.0 = ContainerId::Scene(target);
            controller.phase = TransitionPhase::Idle;
            info!("Transition to {target} finished");
            finished.write(TransitionFinished(target));
        }
    }
}

pub(super) fn plugin(app: &mut App) {
    let settle_delay = app
        .world()
        .get_resource::<SceneConfig>()
        .map_or(SceneConfig::default().settle_delay_secs, |config| {
            config.settle_delay_secs.max(0.0)
        });

    app.insert_resource(SceneController::new(settle_delay))
        .add_message::<LoadScene>()
        .add_message::<TransitionFinished>();

    app.add_systems(
        Update,
        (
            accept_load_requests.in_set(crate::TransitionSet::Requests),
            advance_transition.in_set(crate::TransitionSet::Sequence),
        ),
    );
}
