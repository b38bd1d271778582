//! First frames of the app: spawn the persistent camera and fader, show a
//! splash in `Init`, then ask for the main menu once the delay runs out.

use bevy::prelude::*;

use crate::TransitionSet;
use crate::config::SceneConfig;
use crate::scenes::{ContainerId, Fader, InContainer, LoadScene, SceneCommandsExt, SceneId, ScenePolicy};
use crate::screens::loading::{loading_progress, loading_prompt};
use crate::theme::{palette, widget};

/// Counts down to the first main menu request.
#[derive(Resource, Debug)]
pub struct BootstrapTimer(pub Timer);

impl BootstrapTimer {
    fn from_config(config: &SceneConfig) -> Self {
        let delay = if config.bootstrap_delay_secs.is_finite() {
            config.bootstrap_delay_secs.max(0.0)
        } else {
            0.0
        };
        Self(Timer::from_seconds(delay, TimerMode::Once))
    }
}

/// Marks the splash text shown while `Init` is resident.
#[derive(Component, Debug, Reflect)]
#[reflect(Component)]
pub struct Splash;

pub fn plugin(app: &mut App) {
    let config = app
        .world()
        .get_resource::<SceneConfig>()
        .cloned()
        .unwrap_or_default();
    app.register_type::<Splash>()
        .insert_resource(BootstrapTimer::from_config(&config));

    app.add_systems(Startup, spawn_persistent_objects);
    app.add_systems(Update, request_main_menu.in_set(TransitionSet::Input));
}

fn spawn_persistent_objects(policy: Res<ScenePolicy>, mut commands: Commands) {
    let camera = commands.spawn((Name::new("Scene Camera"), Camera2d)).id();
    commands.register_camera(camera);

    let fader = commands
        .spawn((
            Name::new("Fader Canvas"),
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::End,
                justify_content: JustifyContent::End,
                row_gap: Val::Px(8.0),
                padding: UiRect::all(Val::Px(32.0)),
                ..default()
            },
            BackgroundColor(palette::FADE_SURFACE.with_alpha(0.0)),
            GlobalZIndex(i32::MAX),
            Visibility::Hidden,
            Fader::default(),
            children![
                loading_progress(),
                loading_prompt(policy.confirm_key()),
            ],
        ))
        .id();
    commands.register_fader(fader);

    commands.spawn((
        widget::ui_root("Splash"),
        Splash,
        InContainer(ContainerId::Scene(SceneId::Init)),
        children![widget::header("Loading...")],
    ));
}

fn request_main_menu(
    time: Res<Time>,
    mut timer: ResMut<BootstrapTimer>,
    mut requests: MessageWriter<LoadScene>,
) {
    if timer.0.tick(time.delta()).just_finished() {
        info!("Bootstrap finished, requesting {}", SceneId::MainMenu);
        requests.write(LoadScene::new(SceneId::MainMenu));
    }
}
