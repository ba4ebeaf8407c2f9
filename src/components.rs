// components.rs
use bevy::prelude::*;

#[derive(Component)]
pub struct Player {
    pub speed: f32,
}

#[derive(Component)]
pub struct Zombie {
    pub speed: f32,
}

/// The goal. Touching it opens the quiz.
#[derive(Component)]
pub struct Terminal;

#[derive(Component)]
pub struct Obstacle;

#[derive(Component)]
pub struct LevelLabel;

// Text lines on the puzzle screen, rewritten every frame.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleLabel {
    Progress,
    Prompt,
    Answer,
    Countdown,
}

#[derive(Component)]
pub struct RestartPrompt;
