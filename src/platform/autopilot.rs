//! Demo autopilot
//!
//! Flaps whenever the actor sinks below the middle of the gap it is heading
//! for. Starts new runs and restarts ended ones on its own.

use crate::sim::{GameState, RunPhase, TickInput};

/// How far below the target line the actor may sink before flapping
const SINK_SLACK: f32 = 10.0;

/// Vertical line the actor should hold: the middle of the next unpassed gap,
/// or mid-screen when no obstacle is ahead
pub fn target_height(state: &GameState) -> f32 {
    let actor_x = state.actor.pos.x;
    state
        .obstacles
        .iter()
        .find(|pair| pair.trailing_edge() >= actor_x)
        .map(|pair| pair.gap_mid())
        .unwrap_or(state.playfield.height / 2.0)
}

/// Produce this tick's input for `state`
pub fn autopilot_input(state: &GameState, elapsed_ms: f64) -> TickInput {
    let mut input = TickInput {
        elapsed_ms,
        ..Default::default()
    };

    match state.phase {
        RunPhase::NotStarted => input.impulse = true,
        RunPhase::Ended => input.restart = true,
        RunPhase::Running => {
            let center_y = state.actor.pos.y + state.actor.size.y / 2.0;
            input.impulse = state.actor.velocity > 0.0 && center_y > target_height(state) + SINK_SLACK;
        }
    }

    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ObstaclePair, tick};

    #[test]
    fn test_starts_and_restarts() {
        let mut state = GameState::new(1);
        assert!(autopilot_input(&state, 0.0).impulse);

        state.phase = RunPhase::Ended;
        let input = autopilot_input(&state, 0.0);
        assert!(input.restart);
        assert!(!input.impulse);
    }

    #[test]
    fn test_targets_next_unpassed_gap() {
        let mut state = GameState::new(1);
        assert_eq!(target_height(&state), 300.0);

        // Already behind the actor: ignored
        state.obstacles.push(ObstaclePair::new(0.0, 60.0, 50.0, 200.0, 600.0));
        state.obstacles.push(ObstaclePair::new(200.0, 60.0, 180.0, 200.0, 600.0));
        assert_eq!(target_height(&state), 280.0);
    }

    #[test]
    fn test_flaps_only_when_sinking_low() {
        let mut state = GameState::new(1);
        state.phase = RunPhase::Running;

        state.actor.pos.y = 320.0;
        state.actor.velocity = 1.0;
        assert!(autopilot_input(&state, 0.0).impulse);

        state.actor.velocity = -2.0;
        assert!(!autopilot_input(&state, 0.0).impulse);

        state.actor.pos.y = 250.0;
        state.actor.velocity = 1.0;
        assert!(!autopilot_input(&state, 0.0).impulse);
    }

    #[test]
    fn test_autopilot_clears_obstacles() {
        let mut state = GameState::new(2024);
        for i in 0..1500 {
            let input = autopilot_input(&state, i as f64 * 16.0);
            tick(&mut state, &input);
            assert_ne!(state.phase, RunPhase::Ended, "crashed at tick {i}");
        }
        assert!(state.score >= 500, "score {}", state.score);
    }
}
