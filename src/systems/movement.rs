// In src/systems/movement.rs
use crate::chase::seek_velocity;
use crate::components::{Player, Zombie};
use bevy::prelude::*;
use bevy_rapier2d::prelude::Velocity;

// Every zombie heads straight for wherever the player is this frame.
// Obstacles are left to the physics step.
pub fn zombie_chase_system(
    player_query: Query<&Transform, With<Player>>,
    mut zombie_query: Query<(&Transform, &mut Velocity, &Zombie), Without<Player>>,
) {
    let Ok(player_transform) = player_query.get_single() else {
        return;
    };
    let target = player_transform.translation.truncate();

    for (transform, mut velocity, zombie) in zombie_query.iter_mut() {
        velocity.linvel = seek_velocity(transform.translation.truncate(), target, zombie.speed);
    }
}
