//! Sky Raider - A single-screen arcade shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, spawning, physics, particles)
//! - `renderer`: Draw-target abstraction and scene drawing
//! - `input`: Keyboard key to command mapping
//! - `game`: Frame/spawn scheduling state machine
//! - `settings`: Data-driven tunables

pub mod game;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use game::{Game, LoopControl};
pub use input::Command;
pub use settings::{QualityPreset, Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions (logical units)
    pub const CANVAS_WIDTH: f32 = 400.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Aircraft defaults
    pub const AIRCRAFT_WIDTH: f32 = 40.0;
    pub const AIRCRAFT_HEIGHT: f32 = 40.0;
    /// Horizontal displacement per move key press
    pub const AIRCRAFT_SPEED: f32 = 5.0;
    /// Distance from the aircraft's top edge to the canvas bottom
    pub const AIRCRAFT_BOTTOM_OFFSET: f32 = 60.0;

    /// Obstacle defaults
    pub const OBSTACLE_SIZE: f32 = 40.0;
    /// Vertical displacement per tick
    pub const OBSTACLE_DESCENT_RATE: f32 = 3.0;
    /// Wall-clock spawn interval
    pub const OBSTACLE_SPAWN_INTERVAL_MS: u32 = 1000;
    pub const OBSTACLE_PALETTE: [&str; 3] = ["#FF4500", "#FF6347", "#B22222"];

    /// Projectile defaults
    pub const PROJECTILE_WIDTH: f32 = 10.0;
    pub const PROJECTILE_HEIGHT: f32 = 20.0;
    /// Upward displacement per tick
    pub const PROJECTILE_SPEED: f32 = 5.0;

    /// Alpha lost per tick
    pub const PARTICLE_DECAY: f32 = 0.02;
    pub const PARTICLE_MIN_RADIUS: f32 = 1.0;
    pub const PARTICLE_MAX_RADIUS: f32 = 4.0;

    /// Particles per burst
    pub const EXHAUST_PER_TICK: usize = 3;
    pub const FLAME_JET_PER_TICK: usize = 2;
    pub const MUZZLE_FLASH_COUNT: usize = 5;
    pub const EXPLOSION_COUNT: usize = 8;

    /// Seed used when neither settings nor the platform provide one
    pub const DEFAULT_SEED: u64 = 0x5EED_CAFE;
}
