//! Property tests for the simulation invariants

use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use skyflap::sim::{
    GameState, ObstacleQueue, RunPhase, TickInput, create_obstacle_pair, spawn_collectible, tick,
};
use skyflap::{Playfield, Tuning};

/// Generous collectible spawning so the one-at-a-time rule gets exercised
fn busy_tuning() -> Tuning {
    Tuning {
        collectible_spawn_chance: 0.2,
        ..Default::default()
    }
}

fn input(impulse: bool, restart: bool, i: usize) -> TickInput {
    TickInput {
        impulse,
        restart,
        elapsed_ms: i as f64 * 16.0,
    }
}

proptest! {
    #[test]
    fn velocity_never_exceeds_cap(seed in any::<u64>(), flaps in prop::collection::vec(prop::bool::weighted(0.05), 1..600)) {
        let mut state = GameState::new(seed);
        for (i, flap) in flaps.into_iter().enumerate() {
            tick(&mut state, &input(flap, false, i));
            if state.phase == RunPhase::Running {
                prop_assert!(state.actor.velocity <= state.tuning.max_fall_speed);
            }
        }
    }

    #[test]
    fn obstacle_heights_fill_playfield(seed in any::<u64>(), height in 400.0f32..1200.0) {
        let playfield = Playfield::new(400.0, height.floor());
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(seed);

        let pair = create_obstacle_pair(&playfield, &tuning, &mut rng);
        let top = pair.top.height();
        let bottom = pair.bottom.height();
        prop_assert!(top >= 50.0);
        prop_assert!(bottom >= 50.0);
        prop_assert_eq!(top + tuning.obstacle_gap + bottom, playfield.height);
    }

    #[test]
    fn collectible_spawns_inside_gap_band(seed in any::<u64>()) {
        let playfield = Playfield::default();
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut obstacles = ObstacleQueue::new();
        obstacles.push(create_obstacle_pair(&playfield, &tuning, &mut rng));

        let newest = obstacles.newest().unwrap();
        let spread = newest.gap_size() * tuning.collectible_spread;
        let c = spawn_collectible(&obstacles, &playfield, &tuning, &mut rng).unwrap();
        prop_assert!(c.rect.top() >= newest.gap_mid() - spread);
        prop_assert!(c.rect.top() <= newest.gap_mid() + spread);
    }

    #[test]
    fn at_most_one_collectible_and_monotonic_score(
        seed in any::<u64>(),
        flaps in prop::collection::vec(prop::bool::weighted(0.06), 200..1200),
    ) {
        let mut state = GameState::with_config(seed, Playfield::default(), busy_tuning());
        let mut last_score = 0;
        for (i, flap) in flaps.into_iter().enumerate() {
            tick(&mut state, &input(flap, false, i));
            prop_assert!(state.live_collectibles() <= 1);
            prop_assert!(state.collectibles.len() <= 1);
            prop_assert!(state.score >= last_score);
            last_score = state.score;
        }
    }

    #[test]
    fn restart_clears_everything(seed in any::<u64>(), run_len in 1usize..400) {
        let mut state = GameState::with_config(seed, Playfield::default(), busy_tuning());
        tick(&mut state, &input(true, false, 0));
        for i in 0..run_len {
            tick(&mut state, &input(i % 25 == 0, false, i));
        }
        // Fall until the floor ends the run
        let mut guard = 0;
        while state.phase != RunPhase::Ended {
            tick(&mut state, &input(false, false, 0));
            guard += 1;
            prop_assert!(guard < 2000);
        }

        tick(&mut state, &input(true, true, 0));
        prop_assert_eq!(state.phase, RunPhase::NotStarted);
        prop_assert_eq!(state.score, 0);
        prop_assert_eq!(state.time_ticks, 0);
        prop_assert!(state.obstacles.is_empty());
        prop_assert!(state.collectibles.is_empty());
        prop_assert!(!state.popup.active);
    }

    #[test]
    fn obstacles_stay_in_spawn_order(seed in any::<u64>()) {
        let tuning = Tuning {
            gravity: 0.0,
            obstacle_interval_ticks: 90,
            ..Default::default()
        };
        let mut state = GameState::with_config(seed, Playfield::default(), tuning);
        state.phase = RunPhase::Running;
        state.actor.pos.x = -1000.0;

        for i in 0..1000 {
            tick(&mut state, &input(false, false, i));
            let xs: Vec<f32> = state.obstacles.iter().map(|p| p.x()).collect();
            prop_assert!(xs.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(state.obstacles.front().is_none_or(|p| p.trailing_edge() >= 0.0));
        }
    }
}
