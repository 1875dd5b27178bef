//! Skyflap entry point
//!
//! The browser build is driven from `platform::web`. Natively this runs the
//! simulation headless under the autopilot and logs the outcome.
//!
//! Usage: `skyflap [tuning.json] [seed] [frames]`

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use skyflap::platform::autopilot_input;
    use skyflap::sim::{GameEvent, GameState, tick};
    use skyflap::{Playfield, Tuning};

    env_logger::init();
    log::info!("Skyflap (native, headless) starting...");

    let mut args = std::env::args().skip(1);
    let tuning = args
        .next()
        .map(|path| Tuning::load_or_default(std::path::Path::new(&path)))
        .unwrap_or_default();
    let seed = parse_arg(args.next(), "seed").unwrap_or_else(rand::random);
    let frames: u64 = parse_arg(args.next(), "frames").unwrap_or(60 * 60);

    let mut state = GameState::with_config(seed, Playfield::default(), tuning);
    let frame_ms = 1000.0 / 60.0;
    let mut runs = 0u32;
    let mut best = 0u64;

    for frame in 0..frames {
        let input = autopilot_input(&state, frame as f64 * frame_ms);
        tick(&mut state, &input);

        for event in &state.events {
            if let GameEvent::Crashed(_) = event {
                runs += 1;
                best = best.max(state.score);
            }
        }
    }
    best = best.max(state.score);

    log::info!(
        "Simulated {} frames (seed {}): {} crashes, best score {}, final phase {:?}",
        frames,
        seed,
        runs,
        best,
        state.phase
    );
    println!("best score: {best}");
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_arg<T: std::str::FromStr>(arg: Option<String>, name: &str) -> Option<T> {
    let arg = arg?;
    match arg.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            log::warn!("Ignoring invalid {} argument: {}", name, arg);
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
