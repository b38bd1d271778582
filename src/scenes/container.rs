//! Logical containers that own entities, and persistent anchors moved between them.
//!
//! A loaded scene is the set of root entities tagged `InContainer(Scene(id))`.
//! Unloading despawns those roots and their children. The hidden
//! `Management` container is never unloaded, so anything parked there
//! survives every transition.

use bevy::prelude::*;

use super::SceneId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum ContainerId {
    /// Hidden container for objects that outlive any scene.
    Management,
    Scene(SceneId),
}

/// Container membership of a root entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct InContainer(pub ContainerId);

/// Container that `SpawnInActiveScene` entities are placed in.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Resource)]
pub struct ActiveContainer(pub ContainerId);

impl Default for ActiveContainer {
    fn default() -> Self {
        Self(ContainerId::Scene(SceneId::Init))
    }
}

/// Objects relocated by the scene controller instead of being unloaded.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub enum PersistentAnchor {
    Camera,
    Fader,
}

/// Spawn with this marker to land in whatever container is active right now.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct SpawnInActiveScene;

fn place_in_active_container(
    add: On<Add, SpawnInActiveScene>,
    active: Res<ActiveContainer>,
    mut commands: Commands,
) {
    commands.entity(add.entity).insert(InContainer(active.0));
}

/// Moves `entity` into `target`. Returns the container it left, if it had one.
pub fn relocate(
    containers: &mut Query<(Entity, &mut InContainer)>,
    entity: Entity,
    target: ContainerId,
) -> Option<ContainerId> {
    let Ok((_, mut membership)) = containers.get_mut(entity) else {
        warn!("Cannot relocate {entity}: it is not in any container");
        return None;
    };
    let previous = membership.0;
    membership.0 = target;
    Some(previous)
}

/// Despawns every root in `container`. Returns how many were despawned.
pub fn despawn_container(
    containers: &Query<(Entity, &mut InContainer)>,
    container: ContainerId,
    commands: &mut Commands,
) -> usize {
    let mut despawned = 0;
    for (entity, membership) in containers.iter() {
        if membership.0 == container {
            commands.entity(entity).try_despawn();
            despawned += 1;
        }
    }
    despawned
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<ContainerId>()
        .register_type::<InContainer>()
        .register_type::<ActiveContainer>()
        .register_type::<PersistentAnchor>()
        .register_type::<SpawnInActiveScene>()
        .init_resource::<ActiveContainer>();

    app.add_observer(place_in_active_container);
}
