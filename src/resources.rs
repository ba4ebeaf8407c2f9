// resources.rs
use crate::chase::SpawnRegion;
use crate::quiz::PuzzleRules;
use bevy::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Canvas the arena layout is authored against.
pub const BASE_CANVAS: Vec2 = Vec2::new(800.0, 600.0);

/// Where things sit, in base-canvas screen pixels (origin top-left, y down).
#[derive(Debug, Clone)]
pub struct ArenaLayout {
    pub player_start: Vec2,
    pub terminal: Vec2,
    pub obstacles: Vec<Vec2>,
    pub actor_size: f32,
    pub terminal_size: Vec2,
    pub obstacle_size: Vec2,
}

impl Default for ArenaLayout {
    fn default() -> Self {
        Self {
            player_start: Vec2::new(50.0, 300.0),
            terminal: Vec2::new(700.0, 500.0),
            obstacles: vec![Vec2::new(300.0, 100.0), Vec2::new(400.0, 400.0)],
            actor_size: 32.0,
            terminal_size: Vec2::new(48.0, 48.0),
            obstacle_size: Vec2::new(96.0, 64.0),
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct GameSettings {
    /// Window size. 800x600 by default; wider canvases such as 1920x1080
    /// stretch the layout to fit.
    pub canvas: Vec2,
    pub player_speed: f32,
    pub zombie_speed: f32,
    pub layout: ArenaLayout,
    pub spawn_region: SpawnRegion,
    pub puzzle: PuzzleRules,
    /// Pointer steering is ignored this close to the player.
    pub pointer_dead_zone: f32,
    pub seed: Option<u64>,
    pub debug_physics: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            canvas: BASE_CANVAS,
            player_speed: 200.0,
            zombie_speed: 100.0,
            layout: ArenaLayout::default(),
            spawn_region: SpawnRegion::default(),
            puzzle: PuzzleRules::default(),
            pointer_dead_zone: 4.0,
            seed: None,
            debug_physics: false,
        }
    }
}

impl GameSettings {
    fn scale(&self) -> Vec2 {
        self.canvas / BASE_CANVAS
    }

    /// Base-canvas screen position to world position (origin centered, y up).
    pub fn to_world(&self, screen: Vec2) -> Vec3 {
        let scaled = screen * self.scale();
        Vec3::new(
            scaled.x - self.canvas.x / 2.0,
            self.canvas.y / 2.0 - scaled.y,
            0.0,
        )
    }

    /// Base-canvas size to world size.
    pub fn to_world_size(&self, size: Vec2) -> Vec2 {
        size * self.scale()
    }
}

/// Every random draw in the game goes through this.
#[derive(Resource)]
pub struct GameRng(pub Pcg32);

impl GameRng {
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(Pcg32::seed_from_u64(seed)),
            None => Self(Pcg32::from_rng(&mut rand::rng())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_canvas_maps_corners() {
        let settings = GameSettings::default();
        assert_eq!(settings.to_world(Vec2::ZERO), Vec3::new(-400.0, 300.0, 0.0));
        assert_eq!(
            settings.to_world(Vec2::new(800.0, 600.0)),
            Vec3::new(400.0, -300.0, 0.0)
        );
        assert_eq!(
            settings.to_world(settings.layout.terminal),
            Vec3::new(300.0, -200.0, 0.0)
        );
    }

    #[test]
    fn test_wide_canvas_scales_layout() {
        let settings = GameSettings {
            canvas: Vec2::new(1920.0, 1080.0),
            ..default()
        };
        assert!(settings
            .to_world(Vec2::new(400.0, 300.0))
            .abs_diff_eq(Vec3::ZERO, 1e-3));
        assert!(settings
            .to_world_size(Vec2::new(100.0, 100.0))
            .abs_diff_eq(Vec2::new(240.0, 180.0), 1e-3));
    }

    #[test]
    fn test_seeded_rng_repeats() {
        use rand::Rng;
        let mut a = GameRng::new(Some(5));
        let mut b = GameRng::new(Some(5));
        assert_eq!(a.0.random::<u64>(), b.0.random::<u64>());
    }
}
