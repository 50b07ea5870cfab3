//! Keyboard input
//!
//! Key identifiers (as reported by `KeyboardEvent.key`) map onto three
//! commands applied synchronously to the session.

use crate::sim::{GameEvent, GameState, fire_projectile};

/// Player commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    Fire,
}

impl Command {
    /// Map a key identifier; unrecognized keys yield `None`
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "a" | "A" | "ArrowLeft" => Some(Command::MoveLeft),
            "d" | "D" | "ArrowRight" => Some(Command::MoveRight),
            " " | "Spacebar" => Some(Command::Fire),
            _ => None,
        }
    }
}

/// Apply a command to the session.
///
/// Moves are clamped to the canvas; firing returns the muzzle event.
pub fn apply_command(state: &mut GameState, command: Command) -> Option<GameEvent> {
    if state.is_over() {
        return None;
    }

    let delta = match command {
        Command::MoveLeft => -state.aircraft.speed,
        Command::MoveRight => state.aircraft.speed,
        Command::Fire => return fire_projectile(state),
    };
    let max_x = state.aircraft_max_x();
    state.aircraft.pos.x = (state.aircraft.pos.x + delta).clamp(0.0, max_x);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GamePhase;

    #[test]
    fn test_key_mapping() {
        assert_eq!(Command::from_key("a"), Some(Command::MoveLeft));
        assert_eq!(Command::from_key("ArrowRight"), Some(Command::MoveRight));
        assert_eq!(Command::from_key(" "), Some(Command::Fire));
        assert_eq!(Command::from_key("q"), None);
        assert_eq!(Command::from_key(""), None);
    }

    #[test]
    fn test_moves_clamp_to_canvas() {
        let mut state = GameState::new();
        for _ in 0..100 {
            apply_command(&mut state, Command::MoveLeft);
        }
        assert_eq!(state.aircraft.pos.x, 0.0);
        for _ in 0..100 {
            apply_command(&mut state, Command::MoveRight);
        }
        assert_eq!(state.aircraft.pos.x, 360.0);
    }

    #[test]
    fn test_partial_step_at_edge() {
        let mut state = GameState::new();
        state.aircraft.pos.x = 3.0;
        apply_command(&mut state, Command::MoveLeft);
        assert_eq!(state.aircraft.pos.x, 0.0);
    }

    #[test]
    fn test_fire_appends_projectile() {
        let mut state = GameState::new();
        let event = apply_command(&mut state, Command::Fire);
        assert!(matches!(event, Some(GameEvent::ProjectileFired { .. })));
        assert_eq!(state.projectiles.len(), 1);
    }

    #[test]
    fn test_ignored_after_game_over() {
        let mut state = GameState::new();
        state.phase = GamePhase::GameOver;
        let x = state.aircraft.pos.x;
        apply_command(&mut state, Command::MoveLeft);
        apply_command(&mut state, Command::Fire);
        assert_eq!(state.aircraft.pos.x, x);
        assert!(state.projectiles.is_empty());
    }
}
