//! Horde Arena - a top-down wave-survival shooter core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, waves, game state)
//! - `config`: Optional tuning knobs loaded from disk
//!
//! Rendering, audio and input polling are external collaborators: they feed
//! `sim::TickInput` in and read entity positions and `sim::HudSnapshot` out.

pub mod config;
pub mod sim;

pub use config::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Frame dt ceiling - a stalled frame advances the sim by at most this
    pub const MAX_FRAME_DT: f32 = 0.033;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 960.0;
    pub const ARENA_HEIGHT: f32 = 540.0;
    /// Playable bounds inset from the arena edges
    pub const ARENA_MARGIN: f32 = 20.0;
    /// Enemies materialize this far inside the chosen edge
    pub const SPAWN_INSET: f32 = 18.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 14.0;
    pub const PLAYER_SPEED: f32 = 220.0;
    pub const PLAYER_START_HP: i32 = 3;
    /// Post-hit invulnerability window (seconds)
    pub const DAMAGE_COOLDOWN: f32 = 0.6;
    /// Enemy pushback distance on player contact
    pub const CONTACT_PUSHBACK: f32 = 6.0;
    /// Muzzle offset from player center along the aim direction
    pub const MUZZLE_OFFSET: f32 = 18.0;

    /// Enemy and projectile defaults
    pub const ENEMY_RADIUS: f32 = 14.0;
    pub const PROJECTILE_RADIUS: f32 = 4.0;

    /// Score per enemy killed
    pub const KILL_SCORE: u32 = 10;

    /// Pause between waves (seconds)
    pub const INTERMISSION_SECS: f32 = 3.0;
    /// Delay before the first spawn of a wave
    pub const FIRST_SPAWN_DELAY: f32 = 0.25;
    /// Retry backoff when the concurrency cap is saturated
    pub const CAP_RETRY_SECS: f32 = 0.15;

    /// Game-over overlay fade duration (seconds, cosmetic only)
    pub const GAME_OVER_FADE_SECS: f32 = 2.0;
}

/// Length below which a vector is considered degenerate
pub const NORMALIZE_EPSILON: f32 = 1e-4;

/// Normalize a vector, returning zero for near-zero inputs
///
/// glam's `normalize_or_zero` only rejects exact zero; steering and aiming
/// need the coarser epsilon so a pointer sitting on the player yields a
/// zero direction instead of a noise vector.
#[inline]
pub fn safe_normalize(v: Vec2) -> Vec2 {
    let len = v.length();
    if len < NORMALIZE_EPSILON {
        Vec2::ZERO
    } else {
        v / len
    }
}
