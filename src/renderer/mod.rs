//! Rendering module
//!
//! Draws the session onto any [`DrawTarget`]. Rendering reads state only;
//! randomness (flame jitter) comes from the caller's RNG.

pub mod recorder;
pub mod shapes;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

use glam::Vec2;
use rand::Rng;

use crate::sim::{GameState, Particle};

pub use recorder::{DrawCommand, Recorder};

/// 2D drawing surface capability
pub trait DrawTarget {
    fn clear_rect(&mut self, min: Vec2, size: Vec2);
    fn fill_polygon(&mut self, points: &[Vec2], color: &str);
    fn fill_rect(&mut self, min: Vec2, size: Vec2, color: &str);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: &str);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: &str, width: f32);
    /// Opacity multiplier applied to subsequent fills and strokes
    fn set_alpha(&mut self, alpha: f32);
    /// Optional text; surfaces without text support ignore it
    fn fill_text(&mut self, _text: &str, _pos: Vec2, _color: &str) {}
}

/// Colors for game elements
pub mod colors {
    pub const FUSELAGE: &str = "blue";
    pub const WING: &str = "gray";
    pub const ENGINE: &str = "darkblue";
    pub const ENGINE_FLAME: &str = "red";
    pub const OBSTACLE_FLAME: &str = "orange";
    pub const PROJECTILE: &str = "black";
    pub const HUD: &str = "black";
}

const ENGINE_FLAME_WIDTH: f32 = 2.0;
const OBSTACLE_FLAME_WIDTH: f32 = 4.0;
const HUD_POS: Vec2 = Vec2::new(10.0, 20.0);

/// Render one complete frame
pub fn render<T: DrawTarget + ?Sized>(
    target: &mut T,
    state: &GameState,
    particles: &[Particle],
    rng: &mut impl Rng,
) {
    target.clear_rect(Vec2::ZERO, Vec2::new(state.canvas_width, state.canvas_height));

    draw_aircraft(target, state, rng);
    for obstacle in &state.obstacles {
        target.fill_polygon(&shapes::obstacle_diamond(obstacle), obstacle.color);
        let (from, to) = shapes::obstacle_flame(obstacle, rng.random_range(-10.0..=10.0));
        target.stroke_line(from, to, colors::OBSTACLE_FLAME, OBSTACLE_FLAME_WIDTH);
    }
    for projectile in &state.projectiles {
        target.fill_rect(projectile.pos, projectile.size, colors::PROJECTILE);
    }
    draw_particles(target, particles);

    target.fill_text(&format!("Score: {}", state.score), HUD_POS, colors::HUD);
}

fn draw_aircraft<T: DrawTarget + ?Sized>(target: &mut T, state: &GameState, rng: &mut impl Rng) {
    let aircraft = &state.aircraft;
    target.fill_polygon(&shapes::aircraft_fuselage(aircraft), colors::FUSELAGE);
    target.fill_polygon(&shapes::aircraft_wing(aircraft), colors::WING);

    let (min, size) = shapes::engine_block(aircraft);
    target.fill_rect(min, size, colors::ENGINE);

    let (from, to) = shapes::engine_flame(aircraft, rng.random_range(-5.0..=5.0));
    target.stroke_line(from, to, colors::ENGINE_FLAME, ENGINE_FLAME_WIDTH);
}

fn draw_particles<T: DrawTarget + ?Sized>(target: &mut T, particles: &[Particle]) {
    if particles.is_empty() {
        return;
    }
    for p in particles {
        target.set_alpha(p.alpha);
        target.fill_circle(p.pos, p.radius, p.color);
    }
    target.set_alpha(1.0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::{Obstacle, Projectile};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn scene() -> GameState {
        let mut state = GameState::new();
        state.obstacles.push(Obstacle::new(Vec2::new(10.0, 10.0), OBSTACLE_PALETTE[0]));
        state.obstacles.push(Obstacle::new(Vec2::new(100.0, 60.0), OBSTACLE_PALETTE[2]));
        state.projectiles.push(Projectile::new(Vec2::new(195.0, 300.0), PROJECTILE_SPEED));
        state.score = 7;
        state
    }

    #[test]
    fn test_frame_layout() {
        let state = scene();
        let mut target = Recorder::new();
        let mut rng = Pcg32::seed_from_u64(1);
        render(&mut target, &state, &[], &mut rng);

        assert!(matches!(
            target.commands[0],
            DrawCommand::Clear { size, .. } if size == Vec2::new(400.0, 600.0)
        ));
        // fuselage + wing + 2 diamonds
        assert_eq!(target.count(|c| matches!(c, DrawCommand::Polygon { .. })), 4);
        // engine block + projectile
        assert_eq!(target.count(|c| matches!(c, DrawCommand::Rect { .. })), 2);
        // engine flame + 2 obstacle jets
        assert_eq!(target.count(|c| matches!(c, DrawCommand::Line { .. })), 3);
        assert!(target.commands.contains(&DrawCommand::Text {
            text: "Score: 7".to_string(),
            pos: HUD_POS,
            color: colors::HUD.to_string(),
        }));
    }

    #[test]
    fn test_render_does_not_mutate_state() {
        let state = scene();
        let before = format!("{:?}", state);
        let mut target = Recorder::new();
        let mut rng = Pcg32::seed_from_u64(2);
        render(&mut target, &state, &[], &mut rng);
        assert_eq!(format!("{:?}", state), before);
    }

    #[test]
    fn test_flame_jitter_bounds() {
        let state = scene();
        let mut rng = Pcg32::seed_from_u64(3);
        for _ in 0..50 {
            let mut target = Recorder::new();
            render(&mut target, &state, &[], &mut rng);
            for c in &target.commands {
                if let DrawCommand::Line { from, to, width, .. } = c {
                    let limit = if *width == ENGINE_FLAME_WIDTH { 5.0 } else { 10.0 };
                    assert!((to.x - from.x).abs() <= limit + 1e-4);
                }
            }
        }
    }

    #[test]
    fn test_particles_drawn_at_alpha_then_reset() {
        let state = GameState::new();
        let particles = [Particle {
            pos: Vec2::new(5.0, 5.0),
            vel: Vec2::ZERO,
            color: "white",
            alpha: 0.4,
            radius: 2.0,
        }];
        let mut target = Recorder::new();
        let mut rng = Pcg32::seed_from_u64(4);
        render(&mut target, &state, &particles, &mut rng);

        assert!(target.commands.iter().any(|c| matches!(
            c,
            DrawCommand::Circle { alpha, radius, .. } if *alpha == 0.4 && *radius == 2.0
        )));
        assert_eq!(target.alpha(), 1.0);
    }

    #[test]
    fn test_same_seed_same_frame() {
        let state = scene();
        let (mut a, mut b) = (Recorder::new(), Recorder::new());
        render(&mut a, &state, &[], &mut Pcg32::seed_from_u64(11));
        render(&mut b, &state, &[], &mut Pcg32::seed_from_u64(11));
        assert_eq!(a.commands, b.commands);
    }
}
