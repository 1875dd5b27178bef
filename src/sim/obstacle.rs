//! Obstacle pairs and the generator that spawns them
//!
//! A pair is a top segment hanging from the ceiling and a bottom segment
//! standing on the floor, separated by a fixed-size gap.

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::{Playfield, Tuning};

/// One passable gap: two segments sharing an x position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePair {
    pub top: Rect,
    pub bottom: Rect,
    /// Set once the actor has cleared this pair; never reset
    pub passed: bool,
}

impl ObstaclePair {
    /// Build a pair whose top segment is `top_height` tall
    pub fn new(x: f32, width: f32, top_height: f32, gap: f32, playfield_height: f32) -> Self {
        let bottom_y = top_height + gap;
        Self {
            top: Rect::new(x, 0.0, width, top_height),
            bottom: Rect::new(x, bottom_y, width, playfield_height - bottom_y),
            passed: false,
        }
    }

    #[inline]
    pub fn x(&self) -> f32 {
        self.top.left()
    }

    /// Right edge, the last part to leave the screen
    #[inline]
    pub fn trailing_edge(&self) -> f32 {
        self.top.right()
    }

    /// Vertical band the actor must fly through
    pub fn gap_top(&self) -> f32 {
        self.top.bottom()
    }

    pub fn gap_bottom(&self) -> f32 {
        self.bottom.top()
    }

    pub fn gap_mid(&self) -> f32 {
        (self.gap_top() + self.gap_bottom()) / 2.0
    }

    pub fn gap_size(&self) -> f32 {
        self.gap_bottom() - self.gap_top()
    }

    pub fn scroll(&mut self, dx: f32) {
        self.top.shift_x(dx);
        self.bottom.shift_x(dx);
    }

    pub fn is_off_screen(&self) -> bool {
        self.top.is_left_of_screen()
    }
}

/// Spawn a pair at the right edge with a random gap position.
///
/// Top height is a whole number in
/// `[min_segment, height - gap - floor_clearance]`; the upper bound never
/// drops below the lower one.
pub fn create_obstacle_pair<R: Rng>(playfield: &Playfield, tuning: &Tuning, rng: &mut R) -> ObstaclePair {
    let lo = tuning.obstacle_min_segment.max(0.0);
    let hi = (playfield.height - tuning.obstacle_gap - tuning.obstacle_floor_clearance).max(lo);
    let top_height = rng.random_range(lo.floor() as u32..=hi.floor() as u32) as f32;

    ObstaclePair::new(
        playfield.width,
        tuning.obstacle_width,
        top_height,
        tuning.obstacle_gap,
        playfield.height,
    )
}

/// Obstacle pairs in spawn order.
///
/// Pairs are appended at the right edge and all scroll at the same speed, so
/// the front is always the leftmost pair and pruning only ever pops the front.
#[derive(Debug, Clone, Default)]
pub struct ObstacleQueue {
    pairs: VecDeque<ObstaclePair>,
}

impl ObstacleQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a freshly spawned pair (rightmost)
    pub fn push(&mut self, pair: ObstaclePair) {
        debug_assert!(
            self.pairs.back().is_none_or(|last| last.x() <= pair.x()),
            "obstacle spawned left of the newest pair"
        );
        self.pairs.push_back(pair);
    }

    /// Oldest (leftmost) pair
    pub fn front(&self) -> Option<&ObstaclePair> {
        self.pairs.front()
    }

    /// Most recently spawned (rightmost) pair
    pub fn newest(&self) -> Option<&ObstaclePair> {
        self.pairs.back()
    }

    /// Drop pairs from the front whose trailing edge has left the screen.
    /// Returns how many were removed.
    pub fn prune_off_screen(&mut self) -> usize {
        let mut removed = 0;
        while self.pairs.front().is_some_and(ObstaclePair::is_off_screen) {
            self.pairs.pop_front();
            removed += 1;
        }
        removed
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObstaclePair> {
        self.pairs.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ObstaclePair> {
        self.pairs.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }
}
