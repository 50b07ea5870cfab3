//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed-order tick per frame
//! - Injected RNG only
//! - Stable iteration order (spawn/fire order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod particles;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use particles::ParticleSystem;
pub use spawn::{fire_projectile, spawn_obstacle, spawn_particle};
pub use state::{
    Aircraft, ColorTag, GameEvent, GamePhase, GameState, Obstacle, Particle, Projectile,
};
pub use tick::tick;
