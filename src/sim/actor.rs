//! The player-controlled actor
//!
//! Simple Euler integration: gravity accumulates into velocity, velocity into
//! position. A flap overrides velocity outright.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::tuning::Tuning;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Vertical velocity (units/tick, positive = down)
    pub velocity: f32,
}

impl Actor {
    /// Actor at its start position, at rest
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.actor_start_x, tuning.actor_start_y),
            size: Vec2::new(tuning.actor_width, tuning.actor_height),
            velocity: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Set velocity to the jump value, discarding whatever it was
    pub fn flap(&mut self, jump_velocity: f32) {
        self.velocity = jump_velocity;
    }

    /// One physics step. The fall-speed cap applies after the move, so a
    /// capped actor still drops `max_fall_speed + gravity` per tick.
    pub fn integrate(&mut self, gravity: f32, max_fall_speed: f32) {
        self.velocity += gravity;
        self.pos.y += self.velocity;
        self.velocity = self.velocity.min(max_fall_speed);
    }

    /// Idle bob while waiting for the first flap
    pub fn hover(&mut self, base_y: f32, elapsed_ms: f64, amplitude: f32, period_ms: f64) {
        self.pos.y = base_y + (elapsed_ms / period_ms).sin() as f32 * amplitude;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_fall_ten_ticks() {
        let tuning = Tuning::default();
        let mut actor = Actor::new(&tuning);
        assert_eq!(actor.pos.y, 150.0);

        for _ in 0..10 {
            actor.integrate(tuning.gravity, tuning.max_fall_speed);
        }
        assert!((actor.velocity - 2.0).abs() < 1e-4);
        assert!((actor.pos.y - 161.0).abs() < 1e-3);
    }

    #[test]
    fn test_fall_speed_capped() {
        let tuning = Tuning::default();
        let mut actor = Actor::new(&tuning);
        actor.velocity = 6.9;

        actor.integrate(tuning.gravity, tuning.max_fall_speed);
        assert_eq!(actor.velocity, 7.0);
        assert!((actor.pos.y - 157.1).abs() < 1e-4);

        for _ in 0..50 {
            actor.integrate(tuning.gravity, tuning.max_fall_speed);
            assert!(actor.velocity <= 7.0);
        }
    }

    #[test]
    fn test_capped_fall_distance() {
        let tuning = Tuning::default();
        let mut actor = Actor::new(&tuning);
        actor.velocity = 7.0;

        for _ in 0..10 {
            actor.integrate(tuning.gravity, tuning.max_fall_speed);
            assert_eq!(actor.velocity, 7.0);
        }
        // 7.2 per tick at the cap
        assert!((actor.pos.y - 222.0).abs() < 1e-3);
    }

    #[test]
    fn test_flap_overrides_velocity() {
        let tuning = Tuning::default();
        let mut actor = Actor::new(&tuning);
        actor.velocity = 6.0;
        actor.flap(tuning.jump_velocity);
        assert_eq!(actor.velocity, -5.0);

        actor.flap(tuning.jump_velocity);
        assert_eq!(actor.velocity, -5.0);
    }

    #[test]
    fn test_hover_stays_near_base() {
        let tuning = Tuning::default();
        let mut actor = Actor::new(&tuning);

        for ms in (0..5000).step_by(17) {
            actor.hover(150.0, ms as f64, 5.0, 300.0);
            assert!((actor.pos.y - 150.0).abs() <= 5.0 + 1e-4);
        }
        assert_eq!(actor.velocity, 0.0);
    }

    #[test]
    fn test_rect_matches_position() {
        let actor = Actor::new(&Tuning::default());
        let r = actor.rect();
        assert_eq!((r.left(), r.top(), r.width(), r.height()), (80.0, 150.0, 30.0, 24.0));
    }
}
