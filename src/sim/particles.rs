//! Cosmetic particle system
//!
//! Optional module composed into the game loop. It reads the simulation state
//! and events but never feeds anything back into gameplay.

use glam::Vec2;
use rand::Rng;

use super::spawn::spawn_particle;
use super::state::{GameEvent, GameState, Particle};
use crate::consts::*;

const EXHAUST_COLOR: &str = "orange";
const FLAME_JET_COLOR: &str = "red";
const MUZZLE_COLOR: &str = "white";

/// Live particles plus an emission cap
#[derive(Debug, Clone)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    max_particles: usize,
}

impl ParticleSystem {
    pub fn new(max_particles: usize) -> Self {
        Self {
            particles: Vec::with_capacity(max_particles.min(512)),
            max_particles,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Add a particle unless the cap is reached
    pub fn push(&mut self, particle: Particle) -> bool {
        if self.particles.len() >= self.max_particles {
            return false;
        }
        self.particles.push(particle);
        true
    }

    /// Move, fade and cull every particle
    pub fn update(&mut self) {
        for p in &mut self.particles {
            p.pos += p.vel;
            p.alpha -= PARTICLE_DECAY;
        }
        self.particles.retain(|p| p.alpha > 0.0);
    }

    /// Continuous emitters: aircraft exhaust and obstacle flame jets
    pub fn emit_ambient(&mut self, state: &GameState, rng: &mut impl Rng) {
        let nozzle = state.aircraft.exhaust_point();
        for _ in 0..EXHAUST_PER_TICK {
            let vel = Vec2::new(rng.random_range(-0.25..=0.25), rng.random_range(1.0..=2.0));
            self.push(spawn_particle(nozzle, EXHAUST_COLOR, Some(vel), rng));
        }

        for obstacle in &state.obstacles {
            let origin = obstacle.flame_origin();
            for _ in 0..FLAME_JET_PER_TICK {
                let vel = Vec2::new(rng.random_range(-0.75..=0.75), rng.random_range(-2.0..=-0.5));
                self.push(spawn_particle(origin, FLAME_JET_COLOR, Some(vel), rng));
            }
        }
    }

    /// Bursts triggered by gameplay events
    pub fn emit_for_events(&mut self, events: &[GameEvent], rng: &mut impl Rng) {
        for event in events {
            match *event {
                GameEvent::ProjectileFired { muzzle } => {
                    for _ in 0..MUZZLE_FLASH_COUNT {
                        self.push(spawn_particle(muzzle, MUZZLE_COLOR, None, rng));
                    }
                }
                GameEvent::ObstacleDestroyed { center, color } => {
                    for _ in 0..EXPLOSION_COUNT {
                        let vel = Vec2::new(
                            rng.random_range(-2.0..=2.0),
                            rng.random_range(-2.0..=2.0),
                        );
                        self.push(spawn_particle(center, color, Some(vel), rng));
                    }
                }
                GameEvent::GameOver { .. } => {}
            }
        }
    }
}
