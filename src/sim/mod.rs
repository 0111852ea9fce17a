//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, dt clamped by the driver
//! - Seeded RNG only, threaded explicitly into spawn and fire paths
//! - No rendering or platform dependencies

pub mod arena;
pub mod collision;
pub mod hud;
pub mod state;
pub mod tick;
pub mod waves;
pub mod weapons;

pub use arena::{clamp_to_arena, edge_spawn_point};
pub use collision::circles_overlap;
pub use hud::HudSnapshot;
pub use state::{Body, Enemy, GameState, Player, Projectile};
pub use tick::{TickInput, tick};
pub use waves::WaveState;
pub use weapons::{WeaponKind, WeaponSpec};
