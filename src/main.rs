//! Blob Dash entry point
//!
//! Headless demo driver: plays one round at the fixed tick rate with both
//! players holding toward their targets, then prints the final snapshot.
//! A real presentation layer would replace this loop with its own scheduler
//! and input capture; the sim neither knows nor cares.

use blob_dash::consts::TICK_HZ;
use blob_dash::sim::{Actions, GameState, PlayerAction, advance};

/// Give up if nobody has reached a target after this much simulated time.
const MAX_SIM_SECONDS: u32 = 60;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let width: f32 = args.next().and_then(|a| a.parse().ok()).unwrap_or(1000.0);
    let height: f32 = args.next().and_then(|a| a.parse().ok()).unwrap_or(1000.0);

    log::info!("Blob Dash starting ({width}x{height} arena)");

    let mut state = GameState::new(height, width);

    // Script a race: each player holds straight toward its own target.
    let mut actions = Actions::for_roster(&state);
    actions.set(
        "player1",
        PlayerAction {
            right: true,
            ..Default::default()
        },
    );
    actions.set(
        "player2",
        PlayerAction {
            left: true,
            ..Default::default()
        },
    );

    let max_ticks = MAX_SIM_SECONDS * TICK_HZ;
    let mut ticks = 0u32;

    while !state.is_decided() && ticks < max_ticks {
        state = advance(&state, &actions);
        ticks += 1;

        if ticks % TICK_HZ == 0 {
            for player in state.players.values() {
                log::debug!(
                    "t={}s {} at ({:.1}, {:.1})",
                    ticks / TICK_HZ,
                    player.id,
                    player.position.x,
                    player.position.y
                );
            }
        }
    }

    match &state.end {
        Some(end) => log::info!("round decided after {ticks} ticks: {} wins", end.victor),
        None => log::warn!("no winner after {max_ticks} ticks, giving up"),
    }

    match serde_json::to_string_pretty(&state) {
        Ok(json) => println!("{json}"),
        Err(e) => log::error!("snapshot serialization failed: {e}"),
    }
}
