//! Full transitions through the real plugin: fades, unloads, gated loads and
//! persistent anchors.

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use pretty_assertions::assert_eq;
use scene_relay::config::SceneConfig;
use scene_relay::scenes::{
    ActiveContainer, ActiveScenes, ContainerId, Fader, InContainer, LoadScene, SceneController,
    SceneId, SceneLoader, SceneUnloaded, SpawnInActiveScene, TransitionFinished,
    TransitionPhase,
};

const STEP: Duration = Duration::from_millis(50);
const MAX_FRAMES: usize = 400;
const CONFIRM: KeyCode = KeyCode::Backspace;

#[derive(Resource, Default)]
struct Observed {
    unloaded: Vec<SceneId>,
    finished: Vec<SceneId>,
}

fn observe_messages(
    mut unloaded: MessageReader<SceneUnloaded>,
    mut finished: MessageReader<TransitionFinished>,
    mut observed: ResMut<Observed>,
) {
    observed
        .unloaded
        .extend(unloaded.read().map(|SceneUnloaded(id)| *id));
    observed
        .finished
        .extend(finished.read().map(|TransitionFinished(id)| *id));
}

fn create_scene_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(STEP));
    app.init_resource::<ButtonInput<KeyCode>>();
    app.insert_resource(SceneConfig {
        // Keep the bootstrap request out of the way; tests ask for scenes themselves.
        bootstrap_delay_secs: 1000.0,
        load_rate: 5.0,
        settle_delay_secs: 0.0,
        ..default()
    });
    app.add_plugins(scene_relay::plugin);
    app.init_resource::<Observed>();
    app.add_systems(Last, observe_messages);
    app.update();
    app
}

/// Runs one frame, holding the confirmation key fresh if `confirm`.
fn step(app: &mut App, confirm: bool) {
    {
        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.reset_all();
        if confirm {
            input.press(CONFIRM);
        }
    }
    app.update();
}

fn is_changing(app: &App) -> bool {
    app.world().resource::<SceneController>().is_changing()
}

fn awaiting_confirmation(app: &App) -> bool {
    app.world()
        .resource::<SceneLoader>()
        .is_awaiting_confirmation()
}

fn active(app: &App) -> Vec<SceneId> {
    app.world().resource::<ActiveScenes>().as_slice().to_vec()
}

fn request(app: &mut App, target: SceneId, fade: f32) {
    app.world_mut()
        .write_message(LoadScene::new(target).with_fade(fade));
}

/// Steps until the controller is idle, confirming gated loads as they appear.
fn settle(app: &mut App) -> usize {
    let mut confirm = false;
    for frame in 1..=MAX_FRAMES {
        step(app, confirm);
        confirm = awaiting_confirmation(app);
        if !is_changing(app) {
            return frame;
        }
    }
    panic!("transition did not settle within {MAX_FRAMES} frames");
}

fn fader_entity(app: &App) -> Entity {
    app.world()
        .resource::<SceneController>()
        .fader()
        .expect("bootstrap registers a fader")
}

fn camera_entity(app: &App) -> Entity {
    app.world()
        .resource::<SceneController>()
        .camera()
        .expect("bootstrap registers a camera")
}

fn roots_in(app: &mut App, container: ContainerId) -> Vec<Entity> {
    let world = app.world_mut();
    world
        .query::<(Entity, &InContainer)>()
        .iter(world)
        .filter(|(_, membership)| membership.0 == container)
        .map(|(entity, _)| entity)
        .collect()
}

fn container_of(app: &App, entity: Entity) -> ContainerId {
    app.world()
        .get::<InContainer>(entity)
        .expect("anchor keeps its container")
        .0
}

fn at_main_menu() -> App {
    let mut app = create_scene_app();
    request(&mut app, SceneId::MainMenu, 0.0);
    settle(&mut app);
    assert_eq!(active(&app), vec![SceneId::MainMenu]);
    app
}

fn at_level1() -> App {
    let mut app = at_main_menu();
    request(&mut app, SceneId::Level1, 0.5);
    settle(&mut app);
    assert_eq!(active(&app), vec![SceneId::GameUi, SceneId::Level1]);
    app
}

#[test]
fn startup_registers_anchors_in_management() {
    let app = create_scene_app();

    assert_eq!(active(&app), vec![SceneId::Init]);
    assert_eq!(container_of(&app, camera_entity(&app)), ContainerId::Management);
    assert_eq!(container_of(&app, fader_entity(&app)), ContainerId::Management);
}

#[test]
fn main_menu_replaces_init() {
    let mut app = at_main_menu();

    assert!(roots_in(&mut app, ContainerId::Scene(SceneId::Init)).is_empty());
    assert!(!roots_in(&mut app, ContainerId::Scene(SceneId::MainMenu)).is_empty());
    assert_eq!(
        container_of(&app, camera_entity(&app)),
        ContainerId::Scene(SceneId::MainMenu)
    );
    let observed = app.world().resource::<Observed>();
    assert_eq!(observed.unloaded, vec![SceneId::Init]);
    assert_eq!(observed.finished, vec![SceneId::MainMenu]);
}

#[test]
fn level_from_menu_waits_for_confirmation() {
    let mut app = at_main_menu();
    let fader = fader_entity(&app);
    request(&mut app, SceneId::Level1, 0.5);

    // Fade to black, strictly increasing until it stops at the bound.
    let mut last = 0.0;
    for _ in 0..MAX_FRAMES {
        step(&mut app, false);
        let fade = app.world().get::<Fader>(fader).unwrap().clone();
        if !fade.is_running() {
            assert_eq!(fade.progress(), 1.0);
            break;
        }
        assert!(fade.progress() > last, "{} <= {last}", fade.progress());
        last = fade.progress();
    }
    assert!(last > 0.0, "a 0.5s fade spans several 50ms frames");

    // Without the key the level sits at the threshold indefinitely.
    for _ in 0..100 {
        step(&mut app, false);
    }
    assert!(awaiting_confirmation(&app));
    assert!(matches!(
        app.world().resource::<SceneController>().phase(),
        TransitionPhase::Loading {
            target: SceneId::Level1,
            ..
        }
    ));
    assert!(roots_in(&mut app, ContainerId::Scene(SceneId::Level1)).is_empty());
    assert!(!roots_in(&mut app, ContainerId::Scene(SceneId::GameUi)).is_empty());
    assert!(roots_in(&mut app, ContainerId::Scene(SceneId::MainMenu)).is_empty());

    step(&mut app, true);
    settle(&mut app);

    assert_eq!(active(&app), vec![SceneId::GameUi, SceneId::Level1]);
    assert!(!roots_in(&mut app, ContainerId::Scene(SceneId::Level1)).is_empty());
    assert_eq!(
        container_of(&app, camera_entity(&app)),
        ContainerId::Scene(SceneId::Level1)
    );
    let fade = app.world().get::<Fader>(fader).unwrap();
    assert_eq!(fade.progress(), 0.0);
    assert!(!fade.surface_active());
    let observed = app.world().resource::<Observed>();
    assert_eq!(observed.unloaded, vec![SceneId::Init, SceneId::MainMenu]);
    assert_eq!(observed.finished, vec![SceneId::MainMenu, SceneId::Level1]);
}

#[test]
fn level_to_level_keeps_shared_ui() {
    let mut app = at_level1();
    let hud = roots_in(&mut app, ContainerId::Scene(SceneId::GameUi));
    assert_eq!(hud.len(), 1);
    app.world_mut().resource_mut::<Observed>().unloaded.clear();

    request(&mut app, SceneId::Level2, 0.3);
    settle(&mut app);

    assert_eq!(active(&app), vec![SceneId::GameUi, SceneId::Level2]);
    assert_eq!(roots_in(&mut app, ContainerId::Scene(SceneId::GameUi)), hud);
    assert!(roots_in(&mut app, ContainerId::Scene(SceneId::Level1)).is_empty());
    assert_eq!(
        app.world().resource::<Observed>().unloaded,
        vec![SceneId::Level1]
    );
}

#[test]
fn main_menu_clears_everything_without_fade_or_gate() {
    let mut app = at_level1();
    let camera = camera_entity(&app);
    let fader = fader_entity(&app);

    request(&mut app, SceneId::MainMenu, 2.0);
    let mut frames = 0;
    while frames < MAX_FRAMES {
        step(&mut app, false);
        frames += 1;
        assert!(!app.world().get::<Fader>(fader).unwrap().is_running());
        if !is_changing(&app) {
            break;
        }
    }

    assert!(frames < 20, "took {frames} frames");
    assert_eq!(active(&app), vec![SceneId::MainMenu]);
    assert!(roots_in(&mut app, ContainerId::Scene(SceneId::GameUi)).is_empty());
    assert!(roots_in(&mut app, ContainerId::Scene(SceneId::Level1)).is_empty());
    assert_eq!(container_of(&app, camera), ContainerId::Scene(SceneId::MainMenu));
    assert!(app.world().get_entity(fader).is_ok());
}

fn active_container(app: &App) -> ContainerId {
    app.world().resource::<ActiveContainer>().0
}

#[test]
fn spawns_follow_the_active_container() {
    let mut app = at_main_menu();
    assert_eq!(active_container(&app), ContainerId::Scene(SceneId::MainMenu));

    request(&mut app, SceneId::Level1, 0.5);
    for _ in 0..MAX_FRAMES {
        step(&mut app, false);
        if awaiting_confirmation(&app) {
            break;
        }
    }
    assert!(matches!(
        app.world().resource::<SceneController>().phase(),
        TransitionPhase::Loading { .. }
    ));
    assert_eq!(active_container(&app), ContainerId::Management);

    step(&mut app, true);
    settle(&mut app);
    assert_eq!(active_container(&app), ContainerId::Scene(SceneId::Level1));

    let pickup = app
        .world_mut()
        .spawn((Name::new("Pickup"), SpawnInActiveScene))
        .id();
    app.update();
    assert_eq!(
        container_of(&app, pickup),
        ContainerId::Scene(SceneId::Level1)
    );

    request(&mut app, SceneId::Level2, 0.3);
    settle(&mut app);
    assert!(app.world().get_entity(pickup).is_err());
    assert_eq!(active_container(&app), ContainerId::Scene(SceneId::Level2));
}

#[test]
fn second_request_in_flight_is_ignored() {
    let mut app = at_main_menu();
    request(&mut app, SceneId::Level1, 0.5);
    step(&mut app, false);
    assert!(is_changing(&app));

    request(&mut app, SceneId::Level2, 0.5);
    request(&mut app, SceneId::MainMenu, 0.0);
    settle(&mut app);

    assert_eq!(active(&app), vec![SceneId::GameUi, SceneId::Level1]);
    assert!(roots_in(&mut app, ContainerId::Scene(SceneId::Level2)).is_empty());
}

#[test]
fn requesting_an_active_scene_changes_nothing() {
    let mut app = at_level1();
    let before = app.world().resource::<Observed>().finished.len();

    request(&mut app, SceneId::Level1, 0.5);
    step(&mut app, false);

    assert!(!is_changing(&app));
    assert_eq!(active(&app), vec![SceneId::GameUi, SceneId::Level1]);
    assert_eq!(app.world().resource::<Observed>().finished.len(), before);
}

#[test]
fn init_is_never_loaded() {
    let mut app = at_main_menu();

    request(&mut app, SceneId::Init, 0.5);
    step(&mut app, false);

    assert!(!is_changing(&app));
    assert_eq!(active(&app), vec![SceneId::MainMenu]);
}

#[test]
fn bootstrap_reaches_main_menu_on_its_own() {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(STEP));
    app.init_resource::<ButtonInput<KeyCode>>();
    app.insert_resource(SceneConfig {
        bootstrap_delay_secs: 0.2,
        ..default()
    });
    app.add_plugins(scene_relay::plugin);

    for _ in 0..MAX_FRAMES {
        app.update();
        if active(&app) == [SceneId::MainMenu] && !is_changing(&app) {
            return;
        }
    }
    panic!("never reached the main menu, active = {:?}", active(&app));
}
