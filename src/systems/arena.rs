use crate::chase::zombie_count;
use crate::components::{LevelLabel, Obstacle, Player, Terminal, Zombie};
use crate::resources::{GameRng, GameSettings};
use crate::run_state::{RunState, Screen};
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

const PLAYER_GROUP: Group = Group::GROUP_1;
const ZOMBIE_GROUP: Group = Group::GROUP_2;
const WORLD_GROUP: Group = Group::GROUP_3;

/// Builds the room for the current level: player, terminal, obstacles and
/// the zombie pack. Everything is scoped to the chase screen.
pub fn spawn_chase_level(
    mut commands: Commands,
    settings: Res<GameSettings>,
    run_state: Res<RunState>,
    mut rng: ResMut<GameRng>,
) {
    let level = run_state.level();
    let layout = &settings.layout;
    let actor_size = settings.to_world_size(Vec2::splat(layout.actor_size));

    // Obstacles (bookshelves)
    let obstacle_size = settings.to_world_size(layout.obstacle_size);
    for &position in &layout.obstacles {
        commands.spawn((
            Sprite {
                color: Color::srgb(0.55, 0.35, 0.2),
                custom_size: Some(obstacle_size),
                ..default()
            },
            Transform::from_translation(settings.to_world(position)),
            RigidBody::Fixed,
            Collider::cuboid(obstacle_size.x / 2.0, obstacle_size.y / 2.0),
            CollisionGroups::new(WORLD_GROUP, Group::ALL),
            Obstacle,
            StateScoped(Screen::Chase),
        ));
    }

    // Terminal: overlap only, nothing bounces off it
    let terminal_size = settings.to_world_size(layout.terminal_size);
    commands.spawn((
        Sprite {
            color: Color::srgb(0.1, 0.6, 0.3),
            custom_size: Some(terminal_size),
            ..default()
        },
        Transform::from_translation(settings.to_world(layout.terminal)),
        RigidBody::Fixed,
        Collider::cuboid(terminal_size.x / 2.0, terminal_size.y / 2.0),
        Sensor,
        CollisionGroups::new(WORLD_GROUP, PLAYER_GROUP),
        Terminal,
        StateScoped(Screen::Chase),
    ));

    commands.spawn((
        Sprite {
            color: Color::srgb(0.2, 0.7, 0.9),
            custom_size: Some(actor_size),
            ..default()
        },
        Transform::from_translation(settings.to_world(layout.player_start).with_z(1.0)),
        RigidBody::Dynamic,
        Collider::cuboid(actor_size.x / 2.0, actor_size.y / 2.0),
        GravityScale(0.0),
        LockedAxes::ROTATION_LOCKED,
        Velocity::zero(),
        ActiveEvents::COLLISION_EVENTS,
        CollisionGroups::new(PLAYER_GROUP, Group::ALL),
        Player {
            speed: settings.player_speed,
        },
        StateScoped(Screen::Chase),
    ));

    // Zombies push against obstacles and the player but pass through each other
    let count = zombie_count(level);
    for _ in 0..count {
        let position = settings.spawn_region.sample(&mut rng.0);
        commands.spawn((
            Sprite {
                color: Color::srgb(0.4, 0.6, 0.2),
                custom_size: Some(actor_size),
                ..default()
            },
            Transform::from_translation(settings.to_world(position).with_z(0.5)),
            RigidBody::Dynamic,
            Collider::cuboid(actor_size.x / 2.0, actor_size.y / 2.0),
            GravityScale(0.0),
            LockedAxes::ROTATION_LOCKED,
            Velocity::zero(),
            CollisionGroups::new(ZOMBIE_GROUP, PLAYER_GROUP | WORLD_GROUP),
            Zombie {
                speed: settings.zombie_speed,
            },
            StateScoped(Screen::Chase),
        ));
    }

    commands.spawn((
        Text::new(format!("Level {}", level)),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        TextColor(Color::BLACK),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            ..default()
        },
        LevelLabel,
        StateScoped(Screen::Chase),
    ));

    info!("Level {} ready with {} zombies", level, count);
}
