//! Entity creation
//!
//! Obstacles arrive on a wall-clock schedule, projectiles on fire commands,
//! and particles are produced by the pure [`spawn_particle`] factory.

use glam::Vec2;
use rand::Rng;

use super::state::{ColorTag, GameEvent, GameState, Obstacle, Particle, Projectile};
use crate::consts::*;

/// Default particle velocity ranges: vx in [-1, 1], vy in [-3, -1] (upward)
const DEFAULT_VX: (f32, f32) = (-1.0, 1.0);
const DEFAULT_VY: (f32, f32) = (-3.0, -1.0);

/// Append an obstacle at the top edge at a random column with a random palette color.
pub fn spawn_obstacle(state: &mut GameState, rng: &mut impl Rng) {
    if state.is_over() {
        return;
    }

    let max_x = (state.canvas_width - OBSTACLE_SIZE).max(0.0);
    let x = rng.random_range(0.0..=max_x);
    let color = OBSTACLE_PALETTE[rng.random_range(0..OBSTACLE_PALETTE.len())];

    state.obstacles.push(Obstacle::new(Vec2::new(x, 0.0), color));
    log::debug!("Spawned obstacle at x={:.1} ({} active)", x, state.obstacles.len());
}

/// Fire one projectile from the aircraft's nose.
///
/// Returns the muzzle-flash event so cosmetic systems can react.
pub fn fire_projectile(state: &mut GameState) -> Option<GameEvent> {
    if state.is_over() {
        return None;
    }

    let aircraft = &state.aircraft;
    let pos = Vec2::new(
        aircraft.pos.x + aircraft.size.x / 2.0 - PROJECTILE_WIDTH / 2.0,
        aircraft.pos.y,
    );
    let projectile = Projectile::new(pos, state.projectile_speed);
    let muzzle = pos + projectile.size / 2.0;
    state.projectiles.push(projectile);

    Some(GameEvent::ProjectileFired { muzzle })
}

/// Build a particle at `pos`.
///
/// Without an explicit velocity the particle drifts sideways and rises.
pub fn spawn_particle(
    pos: Vec2,
    color: ColorTag,
    vel: Option<Vec2>,
    rng: &mut impl Rng,
) -> Particle {
    let vel = vel.unwrap_or_else(|| {
        Vec2::new(
            rng.random_range(DEFAULT_VX.0..=DEFAULT_VX.1),
            rng.random_range(DEFAULT_VY.0..=DEFAULT_VY.1),
        )
    });
    Particle {
        pos,
        vel,
        color,
        alpha: 1.0,
        radius: rng.random_range(PARTICLE_MIN_RADIUS..=PARTICLE_MAX_RADIUS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_hundred_spawns_stay_in_bounds() {
        let mut state = GameState::new();
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            spawn_obstacle(&mut state, &mut rng);
        }
        assert_eq!(state.obstacles.len(), 100);
        for o in &state.obstacles {
            assert!((0.0..=360.0).contains(&o.pos.x), "x out of range: {}", o.pos.x);
            assert_eq!(o.pos.y, 0.0);
            assert!(OBSTACLE_PALETTE.contains(&o.color));
        }
    }

    #[test]
    fn test_spawn_is_noop_after_game_over() {
        let mut state = GameState::new();
        state.phase = GamePhase::GameOver;
        let mut rng = Pcg32::seed_from_u64(1);
        spawn_obstacle(&mut state, &mut rng);
        assert!(state.obstacles.is_empty());
        assert_eq!(fire_projectile(&mut state), None);
        assert!(state.projectiles.is_empty());
    }

    #[test]
    fn test_projectile_centered_on_nose() {
        let mut state = GameState::new();
        let event = fire_projectile(&mut state);
        let p = &state.projectiles[0];
        assert_eq!(p.pos, Vec2::new(195.0, 540.0));
        assert_eq!(p.speed, PROJECTILE_SPEED);
        assert_eq!(
            event,
            Some(GameEvent::ProjectileFired {
                muzzle: Vec2::new(200.0, 550.0)
            })
        );
    }

    #[test]
    fn test_particle_defaults() {
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..50 {
            let p = spawn_particle(Vec2::ZERO, "white", None, &mut rng);
            assert_eq!(p.alpha, 1.0);
            assert!((-1.0..=1.0).contains(&p.vel.x));
            assert!((-3.0..=-1.0).contains(&p.vel.y));
            assert!((1.0..=4.0).contains(&p.radius));
        }
        let p = spawn_particle(Vec2::ONE, "red", Some(Vec2::new(0.5, 2.0)), &mut rng);
        assert_eq!(p.vel, Vec2::new(0.5, 2.0));
    }
}
