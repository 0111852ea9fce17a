//! Horde Arena entry point
//!
//! Headless loop driver: the rendering/input front end is an external
//! collaborator, so this binary exercises the core with a tiny scripted bot
//! at a fixed frame cadence and logs the outcome. Handy for balance checks
//! and for watching the wave curves under `RUST_LOG=info`.

use glam::Vec2;

use horde_arena::Tuning;
use horde_arena::consts::*;
use horde_arena::sim::{GameState, HudSnapshot, TickInput, tick};

/// Simulated run length before we stop a bot that refuses to die
const MAX_RUN_SECS: f32 = 180.0;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);
    let tuning = Tuning::load("data/tuning.json");

    log::info!("starting run with seed {seed}");
    let mut state = GameState::new(seed, &tuning);

    let dt = MAX_FRAME_DT;
    let mut elapsed = 0.0f32;
    let mut last_wave = state.wave.current_wave;

    while state.running && elapsed < MAX_RUN_SECS {
        let input = bot_input(&state);
        tick(&mut state, &input, dt);
        elapsed += dt;

        if state.wave.current_wave != last_wave {
            last_wave = state.wave.current_wave;
            let hud = HudSnapshot::capture(&state);
            log::info!(
                "reached wave {} with hp {} score {}",
                hud.wave,
                hud.hp,
                hud.score
            );
        }
    }

    let hud = HudSnapshot::capture(&state);
    log::info!(
        "run finished: wave {} score {} survived {:.1}s ({})",
        hud.wave,
        hud.score,
        state.survive_time,
        if state.running { "timeout" } else { "game over" }
    );
    println!("score {} / wave {}", hud.score, hud.wave);
}

/// Minimal survival bot: aim at the nearest enemy, always fire, and strafe
/// away from the closest threat
fn bot_input(state: &GameState) -> TickInput {
    let ppos = state.player.body.pos;
    let nearest = state
        .enemies
        .iter()
        .min_by(|a, b| {
            let da = a.body.pos.distance_squared(ppos);
            let db = b.body.pos.distance_squared(ppos);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|e| e.body.pos);

    let pointer = nearest.unwrap_or(Vec2::new(ARENA_WIDTH - ARENA_MARGIN, ppos.y));

    let mut input = TickInput {
        pointer,
        fire: true,
        ..Default::default()
    };

    // Back off when the nearest enemy closes in
    if let Some(threat) = nearest {
        if threat.distance_squared(ppos) < 150.0 * 150.0 {
            input.left = threat.x > ppos.x;
            input.right = threat.x < ppos.x;
            input.up = threat.y > ppos.y;
            input.down = threat.y < ppos.y;
        }
    }

    input
}
