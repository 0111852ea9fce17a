//! Circle-overlap testing, damage resolution and dead-entity reaping
//!
//! All checks run over the full pair cross-product each frame; entities are
//! marked dead in place and removed afterwards in a single reap pass, so
//! nothing is removed while a scan is still iterating.

use glam::Vec2;

use super::state::GameState;
use crate::consts::{CONTACT_PUSHBACK, DAMAGE_COOLDOWN, GAME_OVER_FADE_SECS, KILL_SCORE};
use crate::safe_normalize;

/// True iff the two circles overlap; tangency counts as overlap
#[inline]
pub fn circles_overlap(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> bool {
    let rr = radius_a + radius_b;
    a.distance_squared(b) <= rr * rr
}

/// Resolve every projectile/enemy and enemy/player contact for this frame
pub fn resolve(state: &mut GameState) {
    // Projectiles vs enemies: full cross-product, no early exit, so several
    // in-flight pellets can each claim a kill in the same frame
    for enemy in &mut state.enemies {
        for proj in &mut state.projectiles {
            if !enemy.body.alive || !proj.body.alive {
                continue;
            }
            if circles_overlap(
                enemy.body.pos,
                enemy.body.radius,
                proj.body.pos,
                proj.body.radius,
            ) {
                enemy.body.alive = false;
                proj.body.alive = false;
                state.score += KILL_SCORE;
                state.wave.killed_this_wave += 1;
            }
        }
    }

    // Enemies vs player: damage only outside the i-frame window, but the
    // pushback always applies so enemies cannot stack inside the player
    for enemy in &mut state.enemies {
        if !enemy.body.alive {
            continue;
        }
        if circles_overlap(
            enemy.body.pos,
            enemy.body.radius,
            state.player.body.pos,
            state.player.body.radius,
        ) {
            if state.damage_cooldown <= 0.0 {
                state.player.hp -= 1;
                state.damage_cooldown = DAMAGE_COOLDOWN;
                if state.player.hp <= 0 && state.running {
                    state.running = false;
                    state.game_over_fade = GAME_OVER_FADE_SECS;
                    log::info!(
                        "game over: wave {} score {} after {:.1}s",
                        state.wave.current_wave,
                        state.score,
                        state.survive_time
                    );
                }
            }
            let away = safe_normalize(enemy.body.pos - state.player.body.pos);
            enemy.body.pos += away * CONTACT_PUSHBACK;
        }
    }
}

/// Remove everything marked dead, once per frame after all damage logic
pub fn reap(state: &mut GameState) {
    state.projectiles.retain(|p| p.body.alive);
    state.enemies.retain(|e| e.body.alive);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tuning;
    use crate::sim::state::{Enemy, Projectile};

    fn test_state() -> GameState {
        GameState::new(42, &Tuning::default())
    }

    #[test]
    fn test_overlap_symmetric_and_tangent() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(2.0, 0.0);
        // Two unit circles exactly 2.0 apart are tangent: counts as overlap
        assert!(circles_overlap(a, 1.0, b, 1.0));
        assert!(circles_overlap(b, 1.0, a, 1.0));

        let c = Vec2::new(2.001, 0.0);
        assert!(!circles_overlap(a, 1.0, c, 1.0));
        assert!(!circles_overlap(c, 1.0, a, 1.0));
    }

    #[test]
    fn test_multiple_projectiles_each_score() {
        let mut state = test_state();
        state.player.body.pos = Vec2::new(480.0, 270.0);
        state.enemies.push(Enemy::new(Vec2::new(100.0, 100.0), 90.0));
        state.enemies.push(Enemy::new(Vec2::new(800.0, 400.0), 90.0));
        state
            .projectiles
            .push(Projectile::new(Vec2::new(100.0, 100.0), Vec2::ZERO, 1.0));
        state
            .projectiles
            .push(Projectile::new(Vec2::new(800.0, 400.0), Vec2::ZERO, 1.0));

        resolve(&mut state);
        reap(&mut state);

        assert!(state.enemies.is_empty());
        assert!(state.projectiles.is_empty());
        assert_eq!(state.score, 2 * KILL_SCORE);
        assert_eq!(state.wave.killed_this_wave, 2);
    }

    #[test]
    fn test_dead_pair_cannot_double_score() {
        let mut state = test_state();
        state.enemies.push(Enemy::new(Vec2::new(100.0, 100.0), 90.0));
        // Two pellets on the same enemy: only the first pair scores
        state
            .projectiles
            .push(Projectile::new(Vec2::new(100.0, 100.0), Vec2::ZERO, 1.0));
        state
            .projectiles
            .push(Projectile::new(Vec2::new(101.0, 100.0), Vec2::ZERO, 1.0));

        resolve(&mut state);
        assert_eq!(state.score, KILL_SCORE);
        assert_eq!(state.wave.killed_this_wave, 1);

        reap(&mut state);
        // The second pellet flies on
        assert_eq!(state.projectiles.len(), 1);
    }

    #[test]
    fn test_contact_damage_with_iframes() {
        let mut state = test_state();
        let ppos = state.player.body.pos;
        state.enemies.push(Enemy::new(ppos + Vec2::new(5.0, 0.0), 90.0));

        resolve(&mut state);
        assert_eq!(state.player.hp, 2);
        assert!((state.damage_cooldown - DAMAGE_COOLDOWN).abs() < 1e-6);

        // Still overlapping within the window: no second decrement,
        // but the pushback keeps applying
        let pushed = state.enemies[0].body.pos;
        assert!((pushed - ppos).length() > 5.0);
        resolve(&mut state);
        assert_eq!(state.player.hp, 2);
    }

    #[test]
    fn test_reap_is_a_pure_filter() {
        let mut state = test_state();
        state.enemies.push(Enemy::new(Vec2::new(100.0, 100.0), 90.0));
        state.enemies.push(Enemy::new(Vec2::new(200.0, 100.0), 90.0));
        state.enemies[0].body.alive = false;

        reap(&mut state);
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].body.pos, Vec2::new(200.0, 100.0));
    }
}
