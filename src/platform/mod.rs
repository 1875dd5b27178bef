//! Platform adapters
//!
//! The simulation never talks to a host directly. Hosts translate their
//! events into `TickInput` and read back `FrameSnapshot`s:
//! - `autopilot`: synthetic input for headless runs and demos
//! - `web`: `wasm-bindgen` surface for a browser canvas host

pub mod autopilot;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use autopilot::autopilot_input;
