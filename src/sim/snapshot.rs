//! Read-only view of the world for renderers
//!
//! Built once per frame after the tick; hosts draw from this and never touch
//! `GameState` directly.

use glam::Vec2;
use serde::Serialize;

use super::cloud::Cloud;
use super::collectible::Collectible;
use super::obstacle::ObstaclePair;
use super::rect::Rect;
use super::state::{GameState, RunPhase};

/// Popup as the renderer needs it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PopupView {
    pub value: u64,
    pub pos: Vec2,
    /// 1.0 when fresh, toward 0.0 as it fades
    pub fade: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct FrameSnapshot {
    pub phase: RunPhase,
    pub score: u64,
    pub actor: Rect,
    /// Leftmost first
    pub obstacles: Vec<ObstaclePair>,
    /// Only uncollected items
    pub collectibles: Vec<Collectible>,
    pub clouds: Vec<Cloud>,
    pub popup: Option<PopupView>,
}

impl FrameSnapshot {
    pub fn capture(state: &GameState) -> Self {
        Self {
            phase: state.phase,
            score: state.score,
            actor: state.actor.rect(),
            obstacles: state.obstacles.iter().cloned().collect(),
            collectibles: state
                .collectibles
                .iter()
                .filter(|c| c.is_live())
                .cloned()
                .collect(),
            clouds: state.clouds.clone(),
            popup: state.popup.active.then(|| PopupView {
                value: state.popup.value,
                pos: state.popup.pos,
                fade: state.popup.remaining_fraction(),
            }),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl GameState {
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot::capture(self)
    }
}
