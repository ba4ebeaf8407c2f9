use crate::components::{Player, Terminal, Zombie};
use crate::events::RunEvent;
use bevy::prelude::*;
use bevy_rapier2d::prelude::CollisionEvent;

/// Turns physics contacts involving the player into run events.
/// Obstacle contacts are plain collisions and produce nothing.
pub fn contact_system(
    mut collision_events: EventReader<CollisionEvent>,
    player_query: Query<(), With<Player>>,
    terminal_query: Query<(), With<Terminal>>,
    zombie_query: Query<(), With<Zombie>>,
    mut run_events: EventWriter<RunEvent>,
) {
    for event in collision_events.read() {
        let (a, b) = match event {
            CollisionEvent::Started(a, b, _) => (*a, *b),
            CollisionEvent::Stopped(..) => continue,
        };

        let other = if player_query.contains(a) {
            b
        } else if player_query.contains(b) {
            a
        } else {
            continue;
        };

        if terminal_query.contains(other) {
            debug!("Player touched the terminal");
            run_events.send(RunEvent::ReachedTerminal);
        } else if zombie_query.contains(other) {
            debug!("Player touched zombie {:?}", other);
            run_events.send(RunEvent::CaughtByZombie);
        }
    }
}
