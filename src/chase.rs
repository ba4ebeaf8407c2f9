use bevy::math::Vec2;
use rand::Rng;
use std::ops::RangeInclusive;

pub const BASE_ZOMBIES: u32 = 5;
pub const ZOMBIES_PER_LEVEL: u32 = 2;

pub fn zombie_count(level: u32) -> u32 {
    BASE_ZOMBIES + level.saturating_sub(1) * ZOMBIES_PER_LEVEL
}

/// Held direction keys as a unit vector (y up).
///
/// Left beats right and up beats down when both are held.
pub fn keyboard_direction(left: bool, right: bool, up: bool, down: bool) -> Vec2 {
    let x = if left {
        -1.0
    } else if right {
        1.0
    } else {
        0.0
    };
    let y = if up {
        1.0
    } else if down {
        -1.0
    } else {
        0.0
    };
    Vec2::new(x, y).normalize_or_zero()
}

/// Direction from the player toward a held pointer. Zero inside the dead zone.
pub fn pointer_direction(player: Vec2, pointer: Vec2, dead_zone: f32) -> Vec2 {
    let offset = pointer - player;
    if offset.length() <= dead_zone {
        Vec2::ZERO
    } else {
        offset.normalize_or_zero()
    }
}

/// Fixed-magnitude velocity along `direction`, or zero when idle.
pub fn player_velocity(direction: Vec2, speed: f32) -> Vec2 {
    direction.normalize_or_zero() * speed
}

/// Velocity that moves `from` straight at `to`.
pub fn seek_velocity(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    (to - from).normalize_or_zero() * speed
}

/// Integer screen-space box zombies appear in (origin top-left, y down).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpawnRegion {
    pub x: RangeInclusive<i32>,
    pub y: RangeInclusive<i32>,
}

impl Default for SpawnRegion {
    fn default() -> Self {
        Self {
            x: 650..=750,
            y: 50..=550,
        }
    }
}

impl SpawnRegion {
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        let x = rng.random_range(self.x.clone());
        let y = rng.random_range(self.y.clone());
        Vec2::new(x as f32, y as f32)
    }
}
