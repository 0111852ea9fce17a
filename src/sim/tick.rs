//! Per-frame simulation step
//!
//! The orchestrator ties input, movement, spawning, collisions and scoring
//! together. The step order inside [`tick`] is load-bearing: timers advance
//! before input, spawning happens before motion, collisions run after all
//! motion, and reaping runs after all damage logic.

use glam::Vec2;

use super::arena::{clamp_to_arena, edge_spawn_point};
use super::collision;
use super::state::{Enemy, GameState};

/// Input snapshot for a single frame
///
/// The driver sets `fire` on a pointer-down edge and clears it after the
/// frame consumes it; everything else is level state sampled each frame.
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    /// Pointer position in arena coordinates
    pub pointer: Vec2,
    /// Fire requested since the last frame
    pub fire: bool,
    /// Weapon select request, index 0-2
    pub select_weapon: Option<usize>,
}

/// Advance the simulation by one frame of `dt` seconds (dt clamped upstream)
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if !state.running {
        // Terminal state: only the cosmetic overlay timer still moves
        state.game_over_fade = (state.game_over_fade - dt).max(0.0);
        return;
    }

    state.damage_cooldown = (state.damage_cooldown - dt).max(0.0);

    if state.wave.update_intermission(dt) {
        let next = state.wave.current_wave + 1;
        state.wave.start_wave(next);
    }

    if let Some(index) = input.select_weapon {
        state.player.select_weapon(index);
    }
    state
        .player
        .update_input(dt, input.up, input.down, input.left, input.right, input.pointer);

    if input.fire {
        state.player.try_shoot(&mut state.projectiles, &mut state.rng);
    }

    if state.wave.update_spawn(dt, state.live_enemies()) {
        let pos = edge_spawn_point(&mut state.rng);
        state.enemies.push(Enemy::new(pos, state.wave.enemy_speed));
    }

    state.player.body.integrate(dt);
    clamp_to_arena(&mut state.player.body);

    let target = state.player.body.pos;
    for enemy in &mut state.enemies {
        enemy.steer_to(target);
        enemy.body.integrate(dt);
        clamp_to_arena(&mut enemy.body);
    }

    // Projectiles are not clamped; they expire by lifetime instead
    for proj in &mut state.projectiles {
        proj.update(dt);
    }

    collision::resolve(state);
    collision::reap(state);

    if state.wave.wave_complete(state.live_enemies()) {
        state.wave.begin_intermission();
    }

    state.survive_time += dt;
    // If the run ended this frame, resolve() armed the fade timer; it starts
    // decaying on the next call.
}
