use crate::quiz::PuzzleKey;
use bevy::prelude::*;

// Everything the run state machine reacts to. Input and collision systems
// send these; `apply_run_events` feeds them to `RunState::handle` in order.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEvent {
    // Chase
    ReachedTerminal,
    CaughtByZombie,
    // Puzzle
    Key(PuzzleKey),
    Tick,
    // GameOver
    Restart,
    Decline,
    // Win
    AnyKey,
}
