//! Game state and core simulation types
//!
//! Plain entity records plus the session aggregate that owns them.

use glam::Vec2;

use super::collision::Aabb;
use crate::consts::*;
use crate::settings::Settings;

/// CSS color string attached to an entity
pub type ColorTag = &'static str;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// Aircraft was hit; terminal
    GameOver,
}

/// Something that happened during a tick or command, for downstream consumers
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A projectile destroyed an obstacle
    ObstacleDestroyed { center: Vec2, color: ColorTag },
    /// A projectile left the aircraft; `muzzle` is the flash origin
    ProjectileFired { muzzle: Vec2 },
    /// The aircraft collided with an obstacle
    GameOver { score: u32 },
}

/// The player's aircraft
#[derive(Debug, Clone, PartialEq)]
pub struct Aircraft {
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal displacement per move command
    pub speed: f32,
}

impl Aircraft {
    /// Aircraft centered horizontally near the bottom of the canvas
    pub fn new(canvas_width: f32, canvas_height: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(
                canvas_width / 2.0 - AIRCRAFT_WIDTH / 2.0,
                canvas_height - AIRCRAFT_BOTTOM_OFFSET,
            ),
            size: Vec2::new(AIRCRAFT_WIDTH, AIRCRAFT_HEIGHT),
            speed,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Nozzle point below the engine block where exhaust leaves
    pub fn exhaust_point(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.pos.y + self.size.y + 10.0)
    }
}

/// A falling obstacle
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    pub pos: Vec2,
    pub size: Vec2,
    pub color: ColorTag,
}

impl Obstacle {
    pub fn new(pos: Vec2, color: ColorTag) -> Self {
        Self {
            pos,
            size: Vec2::splat(OBSTACLE_SIZE),
            color,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// Top-center point where the flame jet starts
    pub fn flame_origin(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size.x / 2.0, self.pos.y)
    }
}

/// A projectile fired upward by the aircraft
#[derive(Debug, Clone, PartialEq)]
pub struct Projectile {
    pub pos: Vec2,
    pub size: Vec2,
    /// Upward displacement per tick
    pub speed: f32,
}

impl Projectile {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            pos,
            size: Vec2::new(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
            speed,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }
}

/// A cosmetic particle
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: ColorTag,
    /// Opacity, 1 at spawn, culled at or below 0
    pub alpha: f32,
    pub radius: f32,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub aircraft: Aircraft,
    /// Active obstacles (spawn order)
    pub obstacles: Vec<Obstacle>,
    /// Active projectiles (fire order)
    pub projectiles: Vec<Projectile>,
    pub score: u32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// Obstacle descent per tick
    pub descent_rate: f32,
    /// Speed given to newly fired projectiles
    pub projectile_speed: f32,
}

impl GameState {
    /// Fresh session on the default 400x600 canvas
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            aircraft: Aircraft::new(
                settings.canvas_width,
                settings.canvas_height,
                settings.aircraft_speed,
            ),
            obstacles: Vec::new(),
            projectiles: Vec::new(),
            score: 0,
            phase: GamePhase::Running,
            time_ticks: 0,
            canvas_width: settings.canvas_width,
            canvas_height: settings.canvas_height,
            descent_rate: settings.descent_rate,
            projectile_speed: settings.projectile_speed,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Largest x the aircraft may occupy
    pub fn aircraft_max_x(&self) -> f32 {
        (self.canvas_width - self.aircraft.size.x).max(0.0)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
