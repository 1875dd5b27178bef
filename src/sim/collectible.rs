//! Bonus collectibles
//!
//! At most one collectible is alive at a time. It spawns at the right edge,
//! inside the gap of the newest obstacle pair, and scrolls with the obstacles.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::obstacle::ObstacleQueue;
use super::rect::Rect;
use crate::tuning::{Playfield, Tuning};

/// A bonus item worth `value` points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collectible {
    pub rect: Rect,
    /// Multiple of the value step (100..=500 by default)
    pub value: u32,
    /// Picked up this tick; pruned before the tick ends
    pub collected: bool,
}

impl Collectible {
    pub fn new(x: f32, y: f32, size: f32, value: u32) -> Self {
        Self {
            rect: Rect::new(x, y, size, size),
            value,
            collected: false,
        }
    }

    /// Whether this item still counts toward the one-at-a-time limit
    pub fn is_live(&self) -> bool {
        !self.collected
    }
}

/// Roll for a spawn this tick.
///
/// Does nothing while a collectible exists. Otherwise draws once against the
/// spawn chance and, on success, places a collectible in the newest gap.
/// Returns the spawned item's value.
pub fn maybe_spawn_collectible<R: Rng>(
    collectibles: &mut Vec<Collectible>,
    obstacles: &ObstacleQueue,
    playfield: &Playfield,
    tuning: &Tuning,
    rng: &mut R,
) -> Option<u32> {
    if !collectibles.is_empty() {
        return None;
    }
    if rng.random::<f64>() >= tuning.collectible_spawn_chance {
        return None;
    }
    let collectible = spawn_collectible(obstacles, playfield, tuning, rng)?;
    let value = collectible.value;
    collectibles.push(collectible);
    Some(value)
}

/// Build a collectible aligned to the newest obstacle gap, if there is one
pub fn spawn_collectible<R: Rng>(
    obstacles: &ObstacleQueue,
    playfield: &Playfield,
    tuning: &Tuning,
    rng: &mut R,
) -> Option<Collectible> {
    let newest = obstacles.newest()?;

    let spread = newest.gap_size() * tuning.collectible_spread;
    let offset = rng.random::<f32>() * 2.0 * spread - spread;
    let y = newest.gap_mid() + offset;

    let steps = rng.random_range(1..=tuning.collectible_max_steps.max(1));
    let value = steps * tuning.collectible_value_step;

    Some(Collectible::new(playfield.width, y, tuning.collectible_size, value))
}

/// Scroll collectibles and drop the collected or off-screen ones
pub fn advance_collectibles(collectibles: &mut Vec<Collectible>, dx: f32) {
    for c in collectibles.iter_mut() {
        c.rect.shift_x(dx);
    }
    prune_collectibles(collectibles);
}

pub fn prune_collectibles(collectibles: &mut Vec<Collectible>) {
    collectibles.retain(|c| c.is_live() && !c.rect.is_left_of_screen());
}
