//! Skyflap - a side-scrolling flap-through-the-gaps arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actor physics, spawning, collisions, scoring)
//! - `tuning`: Data-driven game balance
//! - `platform`: Host adapters (headless autopilot, browser binding)

pub mod platform;
pub mod sim;
pub mod tuning;

pub use tuning::{Playfield, Tuning};

/// Game configuration constants
pub mod consts {
    /// Default playfield size (matches the reference canvas)
    pub const PLAYFIELD_WIDTH: f32 = 400.0;
    pub const PLAYFIELD_HEIGHT: f32 = 600.0;

    /// Actor defaults
    pub const ACTOR_START_X: f32 = 80.0;
    pub const ACTOR_START_Y: f32 = 150.0;
    pub const ACTOR_WIDTH: f32 = 30.0;
    pub const ACTOR_HEIGHT: f32 = 24.0;
    /// Downward acceleration (units/tick²)
    pub const GRAVITY: f32 = 0.2;
    /// Velocity applied on flap (negative = up)
    pub const JUMP_VELOCITY: f32 = -5.0;
    /// Fall-speed cap (units/tick)
    pub const MAX_FALL_SPEED: f32 = 7.0;
    /// Idle hover amplitude and period divisor (ms)
    pub const HOVER_AMPLITUDE: f32 = 5.0;
    pub const HOVER_PERIOD_MS: f64 = 300.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const OBSTACLE_GAP: f32 = 200.0;
    pub const OBSTACLE_SPEED: f32 = 1.0;
    /// Ticks between obstacle spawns
    pub const OBSTACLE_INTERVAL_TICKS: u64 = 180;
    /// Shortest segment either side of the gap
    pub const OBSTACLE_MIN_SEGMENT: f32 = 50.0;
    /// Space kept free below the gap when choosing the top height
    pub const OBSTACLE_FLOOR_CLEARANCE: f32 = 150.0;

    /// Collectible defaults
    pub const COLLECTIBLE_SIZE: f32 = 30.0;
    pub const COLLECTIBLE_SPEED: f32 = 1.0;
    /// Per-tick spawn probability (0.2%)
    pub const COLLECTIBLE_SPAWN_CHANCE: f64 = 0.002;
    pub const COLLECTIBLE_VALUE_STEP: u32 = 100;
    pub const COLLECTIBLE_MAX_STEPS: u32 = 5;
    /// Vertical spread around the gap midpoint, as a fraction of the gap
    pub const COLLECTIBLE_SPREAD: f32 = 0.15;

    /// Hitbox forgiveness against obstacles
    pub const COLLISION_MARGIN: f32 = 5.0;
    /// How far above the ceiling the actor may poke before it counts
    pub const CEILING_FORGIVENESS: f32 = 5.0;

    /// Scoring
    pub const PASS_BONUS: u64 = 100;
    pub const PASS_POPUP_TICKS: u32 = 30;
    pub const PASS_POPUP_Y: f32 = 100.0;
    pub const PICKUP_POPUP_TICKS: u32 = 60;
    pub const POPUP_RISE: f32 = 1.0;

    /// Background clouds
    pub const CLOUD_COUNT: usize = 5;
    pub const CLOUD_SPEED: f32 = 0.3;
}
