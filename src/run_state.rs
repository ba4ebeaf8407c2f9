use crate::events::RunEvent;
use crate::quiz::{FailCause, Outcome, PuzzleRules, PuzzleSession};
use bevy::prelude::*;
use rand::Rng;
use std::time::Duration;

/// Which screen is up. Mirrors the kind of the active `Mode`; entities are
/// scoped to it so switching screens tears the old one down.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Chase,
    Puzzle,
    GameOver,
    Win,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOverPrompt {
    pub awaiting_choice: bool,
}

#[derive(Debug, Clone)]
pub enum Mode {
    Chase,
    Puzzle(PuzzleSession),
    GameOver(GameOverPrompt),
    Win,
}

enum Transition {
    Stay,
    Chase(u32),
    Puzzle,
    GameOver,
    Win,
}

/// The single run-wide state. Only `handle` mutates it.
#[derive(Resource, Debug, Clone)]
pub struct RunState {
    level: u32,
    mode: Mode,
    rules: PuzzleRules,
}

impl RunState {
    pub fn new(rules: PuzzleRules) -> Self {
        Self {
            level: 1,
            mode: Mode::Chase,
            rules,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn screen(&self) -> Screen {
        match self.mode {
            Mode::Chase => Screen::Chase,
            Mode::Puzzle(_) => Screen::Puzzle,
            Mode::GameOver(_) => Screen::GameOver,
            Mode::Win => Screen::Win,
        }
    }

    pub fn session(&self) -> Option<&PuzzleSession> {
        match &self.mode {
            Mode::Puzzle(session) => Some(session),
            _ => None,
        }
    }

    pub fn game_over_prompt(&self) -> Option<&GameOverPrompt> {
        match &self.mode {
            Mode::GameOver(prompt) => Some(prompt),
            _ => None,
        }
    }

    /// Apply one event. Returns the new screen when the mode kind changed.
    ///
    /// Events that mean nothing in the current mode are dropped.
    pub fn handle<R: Rng + ?Sized>(
        &mut self,
        event: RunEvent,
        now: Duration,
        rng: &mut R,
    ) -> Option<Screen> {
        let transition = match &mut self.mode {
            Mode::Chase => on_chase(event),
            Mode::Puzzle(session) => on_puzzle(session, event, now),
            Mode::GameOver(prompt) => on_game_over(prompt, event),
            Mode::Win => on_win(event),
        };

        let before = self.screen();
        match transition {
            Transition::Stay => return None,
            Transition::Chase(level) => {
                info!("Entering chase at level {}", level);
                self.level = level;
                self.mode = Mode::Chase;
            }
            Transition::Puzzle => {
                info!("Reached the terminal at level {}", self.level);
                let session = PuzzleSession::start(self.level, &self.rules, now, rng);
                self.mode = Mode::Puzzle(session);
            }
            Transition::GameOver => {
                info!("Game over at level {}", self.level);
                self.mode = Mode::GameOver(GameOverPrompt {
                    awaiting_choice: true,
                });
            }
            Transition::Win => {
                info!("All {} levels cleared", self.rules.final_level);
                self.mode = Mode::Win;
            }
        }

        let after = self.screen();
        (after != before).then_some(after)
    }
}

fn on_chase(event: RunEvent) -> Transition {
    match event {
        RunEvent::ReachedTerminal => Transition::Puzzle,
        RunEvent::CaughtByZombie => {
            info!("Caught by a zombie");
            Transition::GameOver
        }
        _ => Transition::Stay,
    }
}

fn on_puzzle(session: &mut PuzzleSession, event: RunEvent, now: Duration) -> Transition {
    let outcome = match event {
        RunEvent::Key(key) => session.on_key(key, now),
        RunEvent::Tick => session.on_tick(now),
        _ => return Transition::Stay,
    };

    match outcome {
        Outcome::Continue => Transition::Stay,
        Outcome::NextQuestion => {
            debug!("Question {} answered", session.current_index());
            Transition::Stay
        }
        Outcome::LevelCleared => Transition::Chase(session.level() + 1),
        Outcome::Win => Transition::Win,
        Outcome::Fail(FailCause::WrongAnswer) => {
            info!("Wrong answer: {:?}", session.input().trim());
            Transition::GameOver
        }
        Outcome::Fail(FailCause::Timeout) => {
            info!("Ran out of time");
            Transition::GameOver
        }
    }
}

fn on_game_over(prompt: &mut GameOverPrompt, event: RunEvent) -> Transition {
    if !prompt.awaiting_choice {
        return Transition::Stay;
    }
    match event {
        RunEvent::Restart => Transition::Chase(1),
        RunEvent::Decline => {
            prompt.awaiting_choice = false;
            Transition::Stay
        }
        _ => Transition::Stay,
    }
}

fn on_win(event: RunEvent) -> Transition {
    match event {
        RunEvent::AnyKey => Transition::Chase(1),
        _ => Transition::Stay,
    }
}
