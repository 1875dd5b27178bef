//! Game balance and playfield configuration
//!
//! Every gameplay constant is data here so hosts can ship alternate balance
//! files without touching the simulation. Defaults mirror `crate::consts`.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Drawing surface size, supplied by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

impl Default for Playfield {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
        }
    }
}

impl Playfield {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Gameplay tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Actor ===
    pub actor_start_x: f32,
    pub actor_start_y: f32,
    pub actor_width: f32,
    pub actor_height: f32,
    pub gravity: f32,
    /// Velocity set on flap (negative = up)
    pub jump_velocity: f32,
    pub max_fall_speed: f32,
    pub hover_amplitude: f32,
    pub hover_period_ms: f64,

    // === Obstacles ===
    pub obstacle_width: f32,
    pub obstacle_gap: f32,
    pub obstacle_speed: f32,
    pub obstacle_interval_ticks: u64,
    pub obstacle_min_segment: f32,
    pub obstacle_floor_clearance: f32,

    // === Collectibles ===
    pub collectible_size: f32,
    pub collectible_speed: f32,
    pub collectible_spawn_chance: f64,
    pub collectible_value_step: u32,
    /// Values are `step * n` for n in 1..=max_steps
    pub collectible_max_steps: u32,
    /// Vertical spread (fraction of the gap) either side of the gap midpoint
    pub collectible_spread: f32,

    // === Collision ===
    pub collision_margin: f32,
    pub ceiling_forgiveness: f32,

    // === Scoring ===
    pub pass_bonus: u64,
    pub pass_popup_ticks: u32,
    /// Screen y where the pass popup appears (x is mid-screen)
    pub pass_popup_y: f32,
    pub pickup_popup_ticks: u32,
    pub popup_rise: f32,

    // === Decoration ===
    pub cloud_count: usize,
    pub cloud_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            actor_start_x: ACTOR_START_X,
            actor_start_y: ACTOR_START_Y,
            actor_width: ACTOR_WIDTH,
            actor_height: ACTOR_HEIGHT,
            gravity: GRAVITY,
            jump_velocity: JUMP_VELOCITY,
            max_fall_speed: MAX_FALL_SPEED,
            hover_amplitude: HOVER_AMPLITUDE,
            hover_period_ms: HOVER_PERIOD_MS,

            obstacle_width: OBSTACLE_WIDTH,
            obstacle_gap: OBSTACLE_GAP,
            obstacle_speed: OBSTACLE_SPEED,
            obstacle_interval_ticks: OBSTACLE_INTERVAL_TICKS,
            obstacle_min_segment: OBSTACLE_MIN_SEGMENT,
            obstacle_floor_clearance: OBSTACLE_FLOOR_CLEARANCE,

            collectible_size: COLLECTIBLE_SIZE,
            collectible_speed: COLLECTIBLE_SPEED,
            collectible_spawn_chance: COLLECTIBLE_SPAWN_CHANCE,
            collectible_value_step: COLLECTIBLE_VALUE_STEP,
            collectible_max_steps: COLLECTIBLE_MAX_STEPS,
            collectible_spread: COLLECTIBLE_SPREAD,

            collision_margin: COLLISION_MARGIN,
            ceiling_forgiveness: CEILING_FORGIVENESS,

            pass_bonus: PASS_BONUS,
            pass_popup_ticks: PASS_POPUP_TICKS,
            pass_popup_y: PASS_POPUP_Y,
            pickup_popup_ticks: PICKUP_POPUP_TICKS,
            popup_rise: POPUP_RISE,

            cloud_count: CLOUD_COUNT,
            cloud_speed: CLOUD_SPEED,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load tuning from a file, falling back to defaults (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_or_default(path: &std::path::Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) => {
                log::warn!("Could not read tuning {}: {}, using defaults", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Invalid tuning {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning = Tuning::from_json(r#"{ "gravity": 0.5, "obstacle_gap": 150.0 }"#).unwrap();
        assert_eq!(tuning.gravity, 0.5);
        assert_eq!(tuning.obstacle_gap, 150.0);
        assert_eq!(tuning.jump_velocity, JUMP_VELOCITY);
        assert_eq!(tuning.obstacle_interval_ticks, 180);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(Tuning::from_json("{ gravity: }").is_err());
        assert!(Tuning::from_json(r#"{ "gravity": "heavy" }"#).is_err());
    }

    #[test]
    fn test_json_roundtrip() {
        let tuning = Tuning {
            collectible_spawn_chance: 0.5,
            ..Default::default()
        };
        let json = tuning.to_json().unwrap();
        assert_eq!(Tuning::from_json(&json).unwrap(), tuning);
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let tuning = Tuning::load_or_default(std::path::Path::new("/nonexistent/skyflap.json"));
        assert_eq!(tuning, Tuning::default());
    }
}
