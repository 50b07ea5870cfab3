//! Shape geometry for the aircraft and obstacles
//!
//! Pure functions from entity bounds to polygon vertices and stroke
//! endpoints. Jitter offsets are passed in so callers control randomness.

use glam::Vec2;

use crate::sim::{Aircraft, Obstacle};

/// Fuselage triangle: nose at top-center, tail corners at the bottom
pub fn aircraft_fuselage(aircraft: &Aircraft) -> [Vec2; 3] {
    let (p, s) = (aircraft.pos, aircraft.size);
    [
        Vec2::new(p.x + s.x / 2.0, p.y),
        Vec2::new(p.x, p.y + s.y),
        Vec2::new(p.x + s.x, p.y + s.y),
    ]
}

/// Wing triangle overhanging the fuselage by 10 units each side
pub fn aircraft_wing(aircraft: &Aircraft) -> [Vec2; 3] {
    let (p, s) = (aircraft.pos, aircraft.size);
    [
        Vec2::new(p.x - 10.0, p.y + s.y / 2.0),
        Vec2::new(p.x + s.x / 2.0, p.y + s.y / 3.0),
        Vec2::new(p.x + s.x + 10.0, p.y + s.y / 2.0),
    ]
}

/// Engine block as (top-left, size), straddling the tail line
pub fn engine_block(aircraft: &Aircraft) -> (Vec2, Vec2) {
    let (p, s) = (aircraft.pos, aircraft.size);
    let min = Vec2::new(p.x + s.x / 3.0, p.y + s.y - 5.0);
    (min, Vec2::new(s.x / 3.0, 10.0))
}

/// Exhaust flame stroke below the engine; `jitter` in [-5, 5] shifts the tip
pub fn engine_flame(aircraft: &Aircraft, jitter: f32) -> (Vec2, Vec2) {
    let (p, s) = (aircraft.pos, aircraft.size);
    let cx = p.x + s.x / 3.0 + s.x / 6.0;
    let tail = p.y + s.y;
    (Vec2::new(cx, tail + 5.0), Vec2::new(cx + jitter, tail + 20.0))
}

/// Skewed diamond filling the obstacle's box
pub fn obstacle_diamond(obstacle: &Obstacle) -> [Vec2; 4] {
    let (p, s) = (obstacle.pos, obstacle.size);
    [
        p,
        Vec2::new(p.x + s.x * 0.8, p.y + s.y * 0.2),
        p + s,
        Vec2::new(p.x + s.x * 0.2, p.y + s.y * 0.8),
    ]
}

/// Flame jet rising 20 units above the obstacle; `jitter` in [-10, 10]
pub fn obstacle_flame(obstacle: &Obstacle, jitter: f32) -> (Vec2, Vec2) {
    let origin = obstacle.flame_origin();
    (origin, origin + Vec2::new(jitter, -20.0))
}
