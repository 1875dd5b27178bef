//! Browser host binding
//!
//! The page owns the canvas, the input listeners and the
//! `requestAnimationFrame` loop. It forwards clicks/keys here and draws the
//! JSON snapshot returned by `frame`.

use wasm_bindgen::prelude::*;

use crate::sim::{GameState, RunPhase, TickInput, tick};
use crate::tuning::{Playfield, Tuning};

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Info).is_err() {
        // Logger already installed by an earlier module instance
        return;
    }
    log::info!("Skyflap starting...");
}

/// Game instance driven by the page's animation loop
#[wasm_bindgen]
pub struct WebGame {
    state: GameState,
    /// Input collected since the last frame
    pending: TickInput,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, seed: u64) -> WebGame {
        log::info!("New game {}x{} (seed {})", width, height, seed);
        WebGame {
            state: GameState::with_config(seed, Playfield::new(width, height), Tuning::default()),
            pending: TickInput::default(),
        }
    }

    /// Replace tuning from JSON; keeps the current tuning on error
    pub fn set_tuning(&mut self, json: &str) -> bool {
        match Tuning::from_json(json) {
            Ok(tuning) => {
                self.state.tuning = tuning;
                true
            }
            Err(e) => {
                log::warn!("Ignoring invalid tuning: {}", e);
                false
            }
        }
    }

    /// Click or Space
    pub fn on_impulse(&mut self) {
        self.pending.impulse = true;
    }

    /// Click while the run has ended
    pub fn on_restart_request(&mut self) {
        if self.state.phase == RunPhase::Ended {
            self.pending.restart = true;
        }
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.resize(Playfield::new(width, height));
    }

    /// Run one tick and return the frame snapshot as JSON
    pub fn frame(&mut self, now_ms: f64) -> String {
        self.pending.elapsed_ms = now_ms;
        tick(&mut self.state, &self.pending);

        // Clear one-shot inputs after processing
        self.pending.impulse = false;
        self.pending.restart = false;

        match self.state.snapshot().to_json() {
            Ok(json) => json,
            Err(e) => {
                log::error!("Snapshot serialization failed: {}", e);
                String::from("{}")
            }
        }
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }
}
