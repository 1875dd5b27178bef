//! Fixed-cadence simulation tick
//!
//! Core game loop that advances the world by one display frame.

use glam::Vec2;

use super::cloud::advance_clouds;
use super::collectible::{advance_collectibles, maybe_spawn_collectible, prune_collectibles};
use super::collision::{collect_pickups, terminal_collision};
use super::obstacle::create_obstacle_pair;
use super::state::{GameEvent, GameState, RunPhase};

/// Pending input for a single tick.
///
/// Hosts set flags as events arrive and clear them after the tick; several
/// flaps within one frame collapse into one.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Flap (click or Space); also starts a not-started run
    pub impulse: bool,
    /// Restart request (click while ended)
    pub restart: bool,
    /// Wall-clock milliseconds, only used for the idle hover
    pub elapsed_ms: f64,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    // Ended runs are frozen until a restart request arrives. The click that
    // restarts does not also start the new run.
    let restarting = state.phase == RunPhase::Ended;
    if restarting {
        if !input.restart {
            return;
        }
        state.reset();
        state.events.push(GameEvent::Restarted);
        log::info!("Run restarted");
    }

    if input.impulse && !restarting {
        if state.phase == RunPhase::NotStarted {
            state.phase = RunPhase::Running;
            state.events.push(GameEvent::Started);
            log::info!("Run started (seed {})", state.seed);
        }
        state.actor.flap(state.tuning.jump_velocity);
        state.events.push(GameEvent::Flapped);
    }

    // Popups shown this tick keep their full timer until the next one
    state.popup.update(state.tuning.popup_rise);

    advance_clouds(&mut state.clouds, &state.playfield, &state.tuning, &mut state.rng);

    match state.phase {
        RunPhase::NotStarted => {
            let tuning = &state.tuning;
            state.actor.hover(
                tuning.actor_start_y,
                input.elapsed_ms,
                tuning.hover_amplitude,
                tuning.hover_period_ms,
            );
        }
        RunPhase::Running => run_tick(state),
        RunPhase::Ended => {}
    }
}

/// By-value tick for replay and tests
pub fn step(mut state: GameState, input: &TickInput) -> GameState {
    tick(&mut state, input);
    state
}

fn run_tick(state: &mut GameState) {
    let tuning = &state.tuning;

    state
        .actor
        .integrate(tuning.gravity, tuning.max_fall_speed);

    state.time_ticks += 1;
    let interval = tuning.obstacle_interval_ticks;
    if interval > 0 && state.time_ticks.is_multiple_of(interval) {
        let pair = create_obstacle_pair(&state.playfield, tuning, &mut state.rng);
        let top_height = pair.top.height();
        log::debug!("Tick {}: obstacle spawned, top height {}", state.time_ticks, top_height);
        state.obstacles.push(pair);
        state.events.push(GameEvent::ObstacleSpawned { top_height });
    }

    // Scroll obstacles and award passes
    let actor_x = state.actor.pos.x;
    let pass_popup_pos = Vec2::new(state.playfield.width / 2.0, tuning.pass_popup_y);
    for pair in state.obstacles.iter_mut() {
        pair.scroll(-tuning.obstacle_speed);

        if !pair.passed && pair.trailing_edge() < actor_x {
            pair.passed = true;
            state.score += tuning.pass_bonus;
            state
                .popup
                .show(tuning.pass_bonus, pass_popup_pos, tuning.pass_popup_ticks);
            state.events.push(GameEvent::Passed {
                bonus: tuning.pass_bonus,
            });
            log::debug!("Obstacle passed, score {}", state.score);
        }
    }
    state.obstacles.prune_off_screen();

    let actor_rect = state.actor.rect();
    if let Some(crash) = terminal_collision(&actor_rect, state.obstacles.iter(), &state.playfield, tuning) {
        state.phase = RunPhase::Ended;
        state.events.push(GameEvent::Crashed(crash));
        log::info!(
            "Game over: {:?} at tick {}, score {}",
            crash,
            state.time_ticks,
            state.score
        );
    }

    // Collectibles
    if let Some(value) = maybe_spawn_collectible(
        &mut state.collectibles,
        &state.obstacles,
        &state.playfield,
        tuning,
        &mut state.rng,
    ) {
        log::debug!("Tick {}: collectible worth {} spawned", state.time_ticks, value);
        state.events.push(GameEvent::CollectibleSpawned { value });
    }
    advance_collectibles(&mut state.collectibles, -tuning.collectible_speed);

    for pickup in collect_pickups(&actor_rect, &mut state.collectibles) {
        state.score += u64::from(pickup.value);
        state
            .popup
            .show(u64::from(pickup.value), pickup.pos, tuning.pickup_popup_ticks);
        state.events.push(GameEvent::Collected {
            value: pickup.value,
        });
        log::debug!("Collected {}, score {}", pickup.value, state.score);
    }
    prune_collectibles(&mut state.collectibles);
}
