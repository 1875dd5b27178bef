//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per display frame
//! - Seeded RNG only
//! - Obstacles kept in spawn order
//! - No rendering or platform dependencies

pub mod actor;
pub mod cloud;
pub mod collectible;
pub mod collision;
pub mod obstacle;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use actor::Actor;
pub use cloud::Cloud;
pub use collectible::{Collectible, maybe_spawn_collectible, spawn_collectible};
pub use collision::{Crash, Pickup, collect_pickups, terminal_collision};
pub use obstacle::{ObstaclePair, ObstacleQueue, create_obstacle_pair};
pub use rect::Rect;
pub use snapshot::{FrameSnapshot, PopupView};
pub use state::{GameEvent, GameState, Popup, RunPhase};
pub use tick::{TickInput, step, tick};
