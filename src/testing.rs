//! Testing utilities for Bevy systems.

#![cfg(test)]

use std::time::Duration;

use bevy::ecs::query::QueryFilter;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

/// Creates a minimal app for testing with essential plugins.
pub fn create_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app
}

/// Creates a minimal app whose clock advances by `step` every update.
pub fn create_stepped_test_app(step: Duration) -> App {
    let mut app = create_test_app();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(step));
    app
}

/// Helper to advance the app by one frame.
pub fn tick(app: &mut App) {
    app.update();
}

/// Helper to advance the app by multiple frames.
pub fn tick_multiple(app: &mut App, count: usize) {
    for _ in 0..count {
        app.update();
    }
}

/// Asserts how many entities match the filter `F`.
pub fn assert_entity_count<F: QueryFilter>(app: &mut App, expected: usize) {
    let world = app.world_mut();
    let count = world.query_filtered::<Entity, F>().iter(world).count();
    assert_eq!(
        count,
        expected,
        "expected {expected} entities matching {}, found {count}",
        std::any::type_name::<F>()
    );
}

/// Every `M` written while the app ran, in order.
#[derive(Resource)]
pub struct MessageLog<M: Message>(pub Vec<M>);

impl<M: Message> Default for MessageLog<M> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

fn record_messages<M: Message + Clone>(
    mut reader: MessageReader<M>,
    mut log: ResMut<MessageLog<M>>,
) {
    log.0.extend(reader.read().cloned());
}

/// Records every `M` into a [`MessageLog`] at the end of each frame.
pub fn log_messages<M: Message + Clone>(app: &mut App) {
    app.init_resource::<MessageLog<M>>();
    app.add_systems(Last, record_messages::<M>);
}
