//! Nova Raid headless driver
//!
//! Runs the simulation at the fixed tick rate with a small autopilot standing
//! in for the windowed shell: chase the nearest enemy's column, fire on a
//! short cadence, stop at game over. Useful for balance runs and smoke tests.
//!
//!     nova-raid [seed] [seconds]

use nova_raid::consts::SIM_DT;
use nova_raid::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });
    let seconds: u64 = args.next().and_then(|s| s.parse().ok()).unwrap_or(120);

    let mut state = GameState::new(seed);
    let max_ticks = seconds * 60;

    for _ in 0..max_ticks {
        let input = autopilot(&state);
        tick(&mut state, &input, SIM_DT);

        for event in state.drain_events() {
            if event == GameEvent::EnemyDestroyed {
                log::debug!("Kill, score now {}", state.score);
            }
        }

        if state.phase == GamePhase::GameOver {
            break;
        }
    }

    log::info!(
        "Run finished: seed {}, {} ticks, score {}, lives {}",
        seed,
        state.time_ticks,
        state.score,
        state.lives
    );
    println!(
        "seed={} ticks={} score={} lives={}",
        seed, state.time_ticks, state.score, state.lives
    );
}

/// Steer toward the lowest enemy's column and fire every few ticks
fn autopilot(state: &GameState) -> TickInput {
    let target_x = state
        .enemies
        .iter()
        .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
        .map(|e| e.pos.x);

    let (left, right) = match target_x {
        Some(x) if x < state.player.pos.x - 4.0 => (true, false),
        Some(x) if x > state.player.pos.x + 4.0 => (false, true),
        _ => (false, false),
    };

    TickInput {
        left,
        right,
        fire: state.time_ticks % 15 == 0,
        restart: false,
    }
}
