use crate::events::RunEvent;
use crate::resources::GameRng;
use crate::run_state::{RunState, Screen};
use bevy::input::keyboard::KeyboardInput;
use bevy::prelude::*;

// Runs after the puzzle key system so answers typed this frame are judged
// before the countdown.
pub fn puzzle_clock_system(mut run_events: EventWriter<RunEvent>) {
    run_events.send(RunEvent::Tick);
}

/// The only writer of `RunState`. Applies queued events in send order and
/// moves the screen along when the mode changes.
pub fn apply_run_events(
    time: Res<Time>,
    mut run_events: EventReader<RunEvent>,
    mut run_state: ResMut<RunState>,
    mut rng: ResMut<GameRng>,
    mut next_screen: ResMut<NextState<Screen>>,
) {
    let now = time.elapsed();
    for event in run_events.read() {
        if let Some(screen) = run_state.handle(*event, now, &mut rng.0) {
            next_screen.set(screen);
        }
    }
}

// Keys typed on the previous screen must not leak into the answer.
pub fn clear_keyboard_backlog(mut keyboard_events: ResMut<Events<KeyboardInput>>) {
    keyboard_events.clear();
}
