//! Arena containment and edge spawn points
//!
//! The arena is a fixed axis-aligned rectangle. Players and enemies are
//! clamped inside it after every motion integration; projectiles are exempt
//! and expire by lifetime instead.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::state::Body;
use crate::consts::*;

/// Clamp a body's position into the playable bounds, each axis independently
pub fn clamp_to_arena(body: &mut Body) {
    body.pos.x = body.pos.x.clamp(ARENA_MARGIN, ARENA_WIDTH - ARENA_MARGIN);
    body.pos.y = body.pos.y.clamp(ARENA_MARGIN, ARENA_HEIGHT - ARENA_MARGIN);
}

/// Pick a spawn point on one of the four arena edges
///
/// Uniform side choice, then uniform position along that edge within the
/// playable margins. The point sits slightly inside the edge so a fresh
/// enemy is already in bounds.
pub fn edge_spawn_point(rng: &mut Pcg32) -> Vec2 {
    let x = rng.random_range(ARENA_MARGIN..=ARENA_WIDTH - ARENA_MARGIN);
    let y = rng.random_range(ARENA_MARGIN..=ARENA_HEIGHT - ARENA_MARGIN);
    match rng.random_range(0..4u32) {
        0 => Vec2::new(x, SPAWN_INSET),
        1 => Vec2::new(x, ARENA_HEIGHT - SPAWN_INSET),
        2 => Vec2::new(SPAWN_INSET, y),
        _ => Vec2::new(ARENA_WIDTH - SPAWN_INSET, y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_clamp_pulls_back_inside() {
        let mut body = Body::new(Vec2::new(-50.0, 1000.0), 14.0);
        clamp_to_arena(&mut body);
        assert_eq!(body.pos, Vec2::new(ARENA_MARGIN, ARENA_HEIGHT - ARENA_MARGIN));

        // Interior positions are untouched
        let mut inside = Body::new(Vec2::new(480.0, 270.0), 14.0);
        clamp_to_arena(&mut inside);
        assert_eq!(inside.pos, Vec2::new(480.0, 270.0));
    }

    #[test]
    fn test_spawn_points_sit_on_an_edge() {
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..100 {
            let p = edge_spawn_point(&mut rng);
            let on_horizontal =
                p.y == SPAWN_INSET || p.y == ARENA_HEIGHT - SPAWN_INSET;
            let on_vertical = p.x == SPAWN_INSET || p.x == ARENA_WIDTH - SPAWN_INSET;
            assert!(on_horizontal || on_vertical, "spawn not on an edge: {p}");
            if on_horizontal {
                assert!(p.x >= ARENA_MARGIN && p.x <= ARENA_WIDTH - ARENA_MARGIN);
            } else {
                assert!(p.y >= ARENA_MARGIN && p.y <= ARENA_HEIGHT - ARENA_MARGIN);
            }
        }
    }
}
