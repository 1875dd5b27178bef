//! Background clouds
//!
//! Pure decoration: no collisions, no score. A cloud that drifts off the left
//! edge is replaced by a fresh one at the right edge.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::{Playfield, Tuning};

/// Base cloud footprint before the per-cloud scale
const CLOUD_BASE_WIDTH: f32 = 80.0;
const CLOUD_BASE_HEIGHT: f32 = 40.0;
/// Clouds stay in the upper part of the sky
const CLOUD_SKY_FRACTION: f32 = 0.6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub rect: Rect,
    /// Leftward drift per tick
    pub speed: f32,
    pub opacity: f32,
    /// Size of one "pixel" in the blocky cloud sprite
    pub pixel_size: u8,
}

impl Cloud {
    pub fn spawn<R: Rng>(x: f32, playfield: &Playfield, tuning: &Tuning, rng: &mut R) -> Self {
        let scale: f32 = rng.random_range(0.7..1.2);
        let y = rng.random::<f32>() * playfield.height * CLOUD_SKY_FRACTION;
        Self {
            rect: Rect::new(x, y, CLOUD_BASE_WIDTH * scale, CLOUD_BASE_HEIGHT * scale),
            speed: tuning.cloud_speed * rng.random_range(0.8f32..1.2),
            opacity: rng.random_range(0.6..0.9),
            pixel_size: rng.random_range(4..=5),
        }
    }
}

/// Scatter the initial set of clouds across the playfield
pub fn seed_clouds<R: Rng>(playfield: &Playfield, tuning: &Tuning, rng: &mut R) -> Vec<Cloud> {
    (0..tuning.cloud_count)
        .map(|_| {
            let x = rng.random::<f32>() * playfield.width;
            Cloud::spawn(x, playfield, tuning, rng)
        })
        .collect()
}

/// Drift clouds left; recycle any that left the screen
pub fn advance_clouds<R: Rng>(clouds: &mut [Cloud], playfield: &Playfield, tuning: &Tuning, rng: &mut R) {
    for cloud in clouds.iter_mut() {
        cloud.rect.shift_x(-cloud.speed);
        if cloud.rect.is_left_of_screen() {
            *cloud = Cloud::spawn(playfield.width, playfield, tuning, rng);
        }
    }
}
