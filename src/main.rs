use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
mod chase;
mod components;
mod events;
mod quiz;
mod resources;
mod run_state;
mod systems;

use events::RunEvent;
use resources::*;
use run_state::{RunState, Screen};
use systems::arena::spawn_chase_level;
use systems::collision::contact_system;
use systems::input::*;
use systems::movement::zombie_chase_system;
use systems::progression::*;
use systems::screens::*;

fn main() {
    let settings = GameSettings::default();

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Librarian Escape".into(),
            resolution: (settings.canvas.x, settings.canvas.y).into(),
            ..default()
        }),
        ..default()
    }))
    .add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(100.0));

    if settings.debug_physics {
        app.add_plugins(RapierDebugRenderPlugin::default());
    }

    app.insert_resource(ClearColor(Color::WHITE))
        .insert_resource(RunState::new(settings.puzzle.clone()))
        .insert_resource(GameRng::new(settings.seed))
        .insert_resource(settings)
        .init_state::<Screen>()
        .enable_state_scoped_entities::<Screen>()
        .add_event::<RunEvent>()
        .add_systems(Startup, setup_camera)
        .add_systems(OnEnter(Screen::Chase), spawn_chase_level)
        .add_systems(
            OnEnter(Screen::Puzzle),
            (clear_keyboard_backlog, spawn_puzzle_screen),
        )
        .add_systems(OnEnter(Screen::GameOver), spawn_game_over_screen)
        .add_systems(OnEnter(Screen::Win), spawn_win_screen)
        .add_systems(
            Update,
            (
                (player_input_system, zombie_chase_system, contact_system)
                    .chain()
                    .run_if(in_state(Screen::Chase)),
                // keys before the clock: an answer typed on the last frame still counts
                (puzzle_key_system, puzzle_clock_system)
                    .chain()
                    .run_if(in_state(Screen::Puzzle)),
                game_over_choice_system.run_if(in_state(Screen::GameOver)),
                win_any_key_system.run_if(in_state(Screen::Win)),
                apply_run_events,
                update_puzzle_text.run_if(in_state(Screen::Puzzle)),
                update_game_over_prompt.run_if(in_state(Screen::GameOver)),
            )
                .chain(),
        )
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d::default());
}
