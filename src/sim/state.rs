//! Game state and core simulation types
//!
//! All mutable world state lives in `GameState`, owned by the caller and
//! advanced by `tick`. Nothing here is global.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::actor::Actor;
use super::cloud::{Cloud, seed_clouds};
use super::collectible::Collectible;
use super::collision::Crash;
use super::obstacle::ObstacleQueue;
use crate::tuning::{Playfield, Tuning};

/// Run lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunPhase {
    /// Actor hovers, waiting for the first flap
    NotStarted,
    /// Full simulation active
    Running,
    /// Frozen after a crash, waiting for a restart request
    Ended,
}

/// Something that happened during the last tick (for audio/effects hosts)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    Started,
    Flapped,
    ObstacleSpawned { top_height: f32 },
    CollectibleSpawned { value: u32 },
    Passed { bonus: u64 },
    Collected { value: u32 },
    Crashed(Crash),
    Restarted,
}

/// Floating "+N" score indicator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Popup {
    pub active: bool,
    pub value: u64,
    pub pos: Vec2,
    /// Ticks remaining
    pub timer: u32,
    /// Ticks the popup was shown for (fade reference)
    pub duration: u32,
}

impl Popup {
    /// Replace whatever popup is showing
    pub fn show(&mut self, value: u64, pos: Vec2, duration: u32) {
        *self = Self {
            active: true,
            value,
            pos,
            timer: duration,
            duration,
        };
    }

    /// Count down and float upward; deactivates at zero
    pub fn update(&mut self, rise: f32) {
        if !self.active {
            return;
        }
        self.timer = self.timer.saturating_sub(1);
        self.pos.y -= rise;
        if self.timer == 0 {
            self.active = false;
        }
    }

    /// 1.0 when just shown, 0.0 when expired
    pub fn remaining_fraction(&self) -> f32 {
        if self.duration == 0 {
            0.0
        } else {
            self.timer as f32 / self.duration as f32
        }
    }
}

/// Complete game state (deterministic given seed, config and inputs)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG shared by every spawner; advances across restarts
    pub rng: Pcg32,
    pub playfield: Playfield,
    pub tuning: Tuning,
    pub phase: RunPhase,
    pub actor: Actor,
    /// Obstacle pairs, oldest (leftmost) first
    pub obstacles: ObstacleQueue,
    /// Live collectibles (at most one)
    pub collectibles: Vec<Collectible>,
    /// Background decoration
    pub clouds: Vec<Cloud>,
    pub score: u64,
    pub popup: Popup,
    /// Ticks spent running since the last restart
    pub time_ticks: u64,
    /// Events emitted by the last tick
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game with default playfield and tuning
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, Playfield::default(), Tuning::default())
    }

    pub fn with_config(seed: u64, playfield: Playfield, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let clouds = seed_clouds(&playfield, &tuning, &mut rng);

        Self {
            seed,
            rng,
            playfield,
            actor: Actor::new(&tuning),
            tuning,
            phase: RunPhase::NotStarted,
            obstacles: ObstacleQueue::new(),
            collectibles: Vec::new(),
            clouds,
            score: 0,
            popup: Popup::default(),
            time_ticks: 0,
            events: Vec::new(),
        }
    }

    /// Back to a fresh, hovering, not-started run
    pub fn reset(&mut self) {
        self.phase = RunPhase::NotStarted;
        self.actor = Actor::new(&self.tuning);
        self.obstacles.clear();
        self.collectibles.clear();
        self.clouds = seed_clouds(&self.playfield, &self.tuning, &mut self.rng);
        self.score = 0;
        self.popup = Popup::default();
        self.time_ticks = 0;
    }

    /// Host surface changed size; affects future spawns and bounds checks
    pub fn resize(&mut self, playfield: Playfield) {
        self.playfield = playfield;
    }

    /// Number of collectibles not yet picked up
    pub fn live_collectibles(&self) -> usize {
        self.collectibles.iter().filter(|c| c.is_live()).count()
    }
}
