//! Game loop driver
//!
//! Owns the session and runs the two independent schedules: one frame
//! callback (physics, particles, render) and one spawn timer. Both report
//! whether they want to be called again so the platform can stop its
//! `requestAnimationFrame` chain and cancel its interval at game over.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::input::{Command, apply_command};
use crate::renderer::{self, DrawTarget};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, Particle, ParticleSystem, spawn_obstacle, tick};

/// Whether a scheduled callback should be scheduled again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// A running session plus its scheduling state
pub struct Game<R: Rng = Pcg32> {
    state: GameState,
    particles: Option<ParticleSystem>,
    settings: Settings,
    rng: R,
    /// Cosmetic jitter for drawing, kept apart so frames drawn never shift spawns
    jitter: Pcg32,
    /// Final score, held until the platform collects it
    game_over: Option<u32>,
}

impl Game<Pcg32> {
    /// New session with a seeded PCG generator
    pub fn new(settings: Settings, seed: u64) -> Self {
        log::info!("New session (seed {})", seed);
        Self::with_rng(settings, Pcg32::seed_from_u64(seed))
    }
}

impl<R: Rng> Game<R> {
    /// New session with a caller-supplied random source
    pub fn with_rng(settings: Settings, mut rng: R) -> Self {
        let settings = match settings.validate() {
            Ok(()) => settings,
            Err(e) => {
                log::warn!("Invalid settings ({}), using defaults", e);
                Settings::default()
            }
        };
        let jitter = Pcg32::from_rng(&mut rng);
        let particles = settings
            .particles
            .then(|| ParticleSystem::new(settings.max_particles()));
        Self {
            state: GameState::with_settings(&settings),
            particles,
            settings,
            rng,
            jitter,
            game_over: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn particles(&self) -> &[Particle] {
        self.particles.as_ref().map_or(&[][..], |p| p.particles())
    }

    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn spawn_interval_ms(&self) -> u32 {
        self.settings.spawn_interval_ms
    }

    /// Run one simulation step: physics/collision, then particles
    pub fn update(&mut self) -> Vec<GameEvent> {
        let events = tick(&mut self.state);

        let final_score = events.iter().find_map(|e| match e {
            GameEvent::GameOver { score } => Some(*score),
            _ => None,
        });
        if final_score.is_some() {
            self.game_over = final_score;
            return events;
        }

        if let Some(particles) = self.particles.as_mut() {
            particles.emit_for_events(&events, &mut self.rng);
            particles.emit_ambient(&self.state, &mut self.rng);
            particles.update();
        }
        events
    }

    /// Frame callback: step and draw while running
    pub fn frame<T: DrawTarget + ?Sized>(&mut self, target: &mut T) -> LoopControl {
        if self.is_over() {
            return LoopControl::Stop;
        }

        self.update();
        self.render(target);

        if self.is_over() {
            LoopControl::Stop
        } else {
            LoopControl::Continue
        }
    }

    /// Draw the current state without stepping
    pub fn render<T: DrawTarget + ?Sized>(&mut self, target: &mut T) {
        let particles = self.particles.as_ref().map_or(&[][..], |p| p.particles());
        renderer::render(target, &self.state, particles, &mut self.jitter);
    }

    /// Spawn-timer callback
    pub fn spawn_tick(&mut self) -> LoopControl {
        if self.is_over() {
            return LoopControl::Stop;
        }
        spawn_obstacle(&mut self.state, &mut self.rng);
        LoopControl::Continue
    }

    /// Apply a key press. Returns false for keys that map to no command.
    pub fn handle_key(&mut self, key: &str) -> bool {
        let Some(command) = Command::from_key(key) else {
            return false;
        };
        let event = apply_command(&mut self.state, command);
        if let (Some(event), Some(particles)) = (event, self.particles.as_mut()) {
            particles.emit_for_events(&[event], &mut self.rng);
        }
        true
    }

    /// Final score, returned once after the session ends
    pub fn take_game_over(&mut self) -> Option<u32> {
        self.game_over.take()
    }
}
