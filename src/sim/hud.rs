//! Display-ready counters derived from the game state
//!
//! Numeric derivation only; the renderer decides how any of it is drawn.

use super::state::GameState;
use crate::consts::GAME_OVER_FADE_SECS;

/// One frame's worth of HUD numbers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudSnapshot {
    pub wave: u32,
    pub hp: i32,
    /// Short label of the active weapon
    pub weapon_name: &'static str,
    /// Remaining ammo; `None` means unlimited
    pub ammo: Option<u32>,
    pub score: u32,
    /// Wave completion ratio in [0, 1]
    pub progress: f32,
    pub running: bool,
    /// Game-over overlay intensity in [0, 1]
    pub game_over_fade: f32,
}

impl HudSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let wave = &state.wave;
        let progress = if wave.total_this_wave > 0 {
            (wave.killed_this_wave as f32 / wave.total_this_wave as f32).clamp(0.0, 1.0)
        } else {
            0.0
        };
        let ammo = match state.player.ammo_remaining() {
            n if n < 0 => None,
            n => Some(n as u32),
        };

        Self {
            wave: wave.current_wave,
            hp: state.player.hp,
            weapon_name: state.player.weapon().name,
            ammo,
            score: state.score,
            progress,
            running: state.running,
            game_over_fade: (state.game_over_fade / GAME_OVER_FADE_SECS).clamp(0.0, 1.0),
        }
    }
}
