//! Fixed-order simulation tick
//!
//! One tick advances obstacles, checks the aircraft, culls, advances
//! projectiles, culls again and resolves hits. Each stage is public so it can
//! be exercised in isolation.

use super::collision::{Aabb, first_overlap};
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game state by one tick, returning what happened.
///
/// Once the game is over this is a no-op.
pub fn tick(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.is_over() {
        return events;
    }

    state.time_ticks += 1;

    advance_obstacles(state);

    if aircraft_hit(state) {
        state.phase = GamePhase::GameOver;
        log::info!("Game over at tick {} with score {}", state.time_ticks, state.score);
        events.push(GameEvent::GameOver { score: state.score });
        return events;
    }

    cull_obstacles(state);
    advance_projectiles(state);
    cull_projectiles(state);
    resolve_projectile_hits(state, &mut events);

    events
}

/// Move every obstacle down by the descent rate
pub fn advance_obstacles(state: &mut GameState) {
    let rate = state.descent_rate;
    for obstacle in &mut state.obstacles {
        obstacle.pos.y += rate;
    }
}

/// True if any obstacle overlaps the aircraft
pub fn aircraft_hit(state: &GameState) -> bool {
    let aircraft = state.aircraft.bounds();
    state.obstacles.iter().any(|o| aircraft.overlaps(&o.bounds()))
}

/// Drop obstacles that fell past the bottom edge
pub fn cull_obstacles(state: &mut GameState) {
    let floor = state.canvas_height;
    state.obstacles.retain(|o| o.pos.y <= floor);
}

/// Move every projectile up by its own speed
pub fn advance_projectiles(state: &mut GameState) {
    for projectile in &mut state.projectiles {
        projectile.pos.y -= projectile.speed;
    }
}

/// Drop projectiles that left through the top edge
pub fn cull_projectiles(state: &mut GameState) {
    state.projectiles.retain(|p| p.pos.y >= 0.0);
}

/// Pair projectiles with obstacles and remove both on a hit.
///
/// Projectiles are visited in fire order; each claims the first surviving
/// obstacle it overlaps (spawn order), so one shot destroys at most one
/// obstacle and no obstacle is scored twice.
pub fn resolve_projectile_hits(state: &mut GameState, events: &mut Vec<GameEvent>) {
    if state.projectiles.is_empty() || state.obstacles.is_empty() {
        return;
    }

    let obstacle_boxes: Vec<Aabb> = state.obstacles.iter().map(|o| o.bounds()).collect();
    let mut destroyed = vec![false; obstacle_boxes.len()];
    let mut hits = 0u32;

    state.projectiles.retain(|projectile| {
        match first_overlap(&projectile.bounds(), &obstacle_boxes, &destroyed) {
            Some(index) => {
                destroyed[index] = true;
                hits += 1;
                false
            }
            None => true,
        }
    });

    if hits == 0 {
        return;
    }

    let mut flags = destroyed.iter();
    let mut survivors = Vec::with_capacity(state.obstacles.len() - hits as usize);
    for obstacle in state.obstacles.drain(..) {
        if flags.next().copied().unwrap_or(false) {
            events.push(GameEvent::ObstacleDestroyed {
                center: obstacle.bounds().center(),
                color: obstacle.color,
            });
        } else {
            survivors.push(obstacle);
        }
    }
    state.obstacles = survivors;
    state.score += hits;
    log::debug!("{} hit(s), score {}", hits, state.score);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{Obstacle, Projectile};
    use glam::Vec2;

    fn obstacle(x: f32, y: f32) -> Obstacle {
        Obstacle::new(Vec2::new(x, y), OBSTACLE_PALETTE[0])
    }

    fn projectile(x: f32, y: f32) -> Projectile {
        Projectile::new(Vec2::new(x, y), PROJECTILE_SPEED)
    }

    #[test]
    fn test_obstacle_reaches_aircraft() {
        let mut state = GameState::new();
        assert_eq!(state.aircraft.pos, Vec2::new(180.0, 540.0));
        state.obstacles.push(obstacle(180.0, 0.0));

        // y = 3 * n; boxes first overlap when y > 500, i.e. n = 167
        for n in 1..=166 {
            let events = tick(&mut state);
            assert!(events.is_empty(), "unexpected event at tick {}", n);
            assert_eq!(state.phase, GamePhase::Running);
        }
        let events = tick(&mut state);
        assert_eq!(events, vec![GameEvent::GameOver { score: 0 }]);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.obstacles[0].pos.y, 501.0);
    }

    #[test]
    fn test_no_mutation_after_game_over() {
        let mut state = GameState::new();
        state.obstacles.push(obstacle(180.0, 510.0));
        state.projectiles.push(projectile(20.0, 300.0));

        tick(&mut state);
        assert!(state.is_over());
        // The terminal tick stops before projectiles move
        assert_eq!(state.projectiles[0].pos.y, 300.0);

        let snapshot = state.clone();
        for _ in 0..10 {
            assert!(tick(&mut state).is_empty());
        }
        assert_eq!(state.obstacles, snapshot.obstacles);
        assert_eq!(state.projectiles, snapshot.projectiles);
        assert_eq!(state.time_ticks, snapshot.time_ticks);
    }

    #[test]
    fn test_obstacle_culled_below_floor() {
        let mut state = GameState::new();
        state.obstacles.push(obstacle(0.0, 597.0)); // -> 600, stays
        state.obstacles.push(obstacle(0.0, 598.0)); // -> 601, culled
        tick(&mut state);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].pos.y, 600.0);
    }

    #[test]
    fn test_projectile_culled_above_ceiling() {
        let mut state = GameState::new();
        state.projectiles.push(projectile(0.0, 5.0)); // -> 0, stays
        state.projectiles.push(projectile(0.0, 4.0)); // -> -1, culled
        state.projectiles.push(projectile(0.0, 2.0)); // -> -3, culled
        tick(&mut state);
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.projectiles[0].pos.y, 0.0);
    }

    #[test]
    fn test_adjacent_removals_not_skipped() {
        let mut state = GameState::new();
        for x in [0.0, 50.0, 100.0, 150.0] {
            state.obstacles.push(obstacle(x, 599.0));
        }
        tick(&mut state);
        assert!(state.obstacles.is_empty());
    }

    #[test]
    fn test_projectile_hits_stationary_obstacle() {
        let mut state = GameState::new();
        state.obstacles.push(obstacle(200.0, 460.0));
        state.projectiles.push(projectile(205.0, 540.0));

        let mut events = Vec::new();
        let mut ticks = 0;
        while !state.projectiles.is_empty() && ticks < 16 {
            advance_projectiles(&mut state);
            cull_projectiles(&mut state);
            resolve_projectile_hits(&mut state, &mut events);
            ticks += 1;
        }

        assert!(ticks <= 16);
        assert_eq!(state.score, 1);
        assert!(state.obstacles.is_empty());
        assert!(state.projectiles.is_empty());
        assert_eq!(
            events,
            vec![GameEvent::ObstacleDestroyed {
                center: Vec2::new(220.0, 480.0),
                color: OBSTACLE_PALETTE[0],
            }]
        );
    }

    #[test]
    fn test_one_projectile_destroys_one_obstacle() {
        let mut state = GameState::new();
        // Two overlapping obstacles, one projectile inside both
        state.obstacles.push(obstacle(100.0, 100.0));
        state.obstacles.push(obstacle(110.0, 100.0));
        state.projectiles.push(projectile(120.0, 110.0));

        let mut events = Vec::new();
        resolve_projectile_hits(&mut state, &mut events);

        assert_eq!(state.score, 1);
        assert_eq!(events.len(), 1);
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].pos.x, 110.0, "first in spawn order is taken");
    }

    #[test]
    fn test_two_projectiles_one_obstacle_counts_once() {
        let mut state = GameState::new();
        state.obstacles.push(obstacle(100.0, 100.0));
        state.projectiles.push(projectile(105.0, 110.0));
        state.projectiles.push(projectile(115.0, 110.0));

        let mut events = Vec::new();
        resolve_projectile_hits(&mut state, &mut events);

        assert_eq!(state.score, 1);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.projectiles.len(), 1, "second shot keeps flying");
        assert_eq!(state.projectiles[0].pos.x, 115.0);
    }

    #[test]
    fn test_tick_counter_advances() {
        let mut state = GameState::new();
        tick(&mut state);
        tick(&mut state);
        assert_eq!(state.time_ticks, 2);
    }
}
