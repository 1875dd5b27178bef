//! Collision detection for the actor
//!
//! Two independent checks per tick:
//! - terminal: playfield bounds and obstacle segments (ends the run)
//! - pickup: collectibles (adds score)
//!
//! Obstacle checks use a hitbox shrunk by a forgiveness margin so grazing a
//! pipe corner doesn't count. Pickups use the full hitbox.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collectible::Collectible;
use super::obstacle::ObstaclePair;
use super::rect::Rect;
use crate::tuning::{Playfield, Tuning};

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Crash {
    Ceiling,
    Floor,
    Obstacle,
}

/// A collectible the actor touched this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pickup {
    pub value: u32,
    /// Where the item was when it was taken (popup anchor)
    pub pos: Vec2,
}

/// Ceiling/floor test. The ceiling allows `ceiling_forgiveness` of overshoot.
pub fn bounds_collision(actor: &Rect, playfield_height: f32, ceiling_forgiveness: f32) -> Option<Crash> {
    if actor.top() <= -ceiling_forgiveness {
        Some(Crash::Ceiling)
    } else if actor.bottom() >= playfield_height {
        Some(Crash::Floor)
    } else {
        None
    }
}

/// Whether the margin-shrunk actor overlaps either segment of a pair
pub fn obstacle_collision(actor: &Rect, pair: &ObstaclePair, margin: f32) -> bool {
    let hitbox = actor.shrink(margin);
    hitbox.intersects(&pair.top) || hitbox.intersects(&pair.bottom)
}

/// Terminal check: bounds first, then every obstacle pair, stopping at the
/// first hit.
pub fn terminal_collision<'a>(
    actor: &Rect,
    obstacles: impl IntoIterator<Item = &'a ObstaclePair>,
    playfield: &Playfield,
    tuning: &Tuning,
) -> Option<Crash> {
    if let Some(crash) = bounds_collision(actor, playfield.height, tuning.ceiling_forgiveness) {
        return Some(crash);
    }

    obstacles
        .into_iter()
        .any(|pair| obstacle_collision(actor, pair, tuning.collision_margin))
        .then_some(Crash::Obstacle)
}

/// Mark every uncollected collectible the actor overlaps as collected
pub fn collect_pickups(actor: &Rect, collectibles: &mut [Collectible]) -> Vec<Pickup> {
    let mut pickups = Vec::new();
    for c in collectibles.iter_mut() {
        if !c.collected && actor.intersects(&c.rect) {
            c.collected = true;
            pickups.push(Pickup {
                value: c.value,
                pos: c.rect.pos,
            });
        }
    }
    pickups
}
