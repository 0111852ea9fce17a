//! Game state and core entity types
//!
//! Entity variants share the [`Body`] record; per-variant behavior lives in
//! methods on the variant structs. The whole simulation is owned by
//! [`GameState`].

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::waves::WaveState;
use super::weapons::{WeaponKind, WeaponSpec};
use crate::config::Tuning;
use crate::consts::*;
use crate::safe_normalize;

/// Shared moving-circle record for every entity variant
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Once false, the entity is removed at the next reap point
    pub alive: bool,
}

impl Body {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            alive: true,
        }
    }

    /// Base update rule: `pos += vel * dt`
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }
}

/// A bullet pellet in flight
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub body: Body,
    pub age: f32,
    /// Seconds until auto-expiry
    pub lifetime: f32,
}

impl Projectile {
    pub fn new(pos: Vec2, vel: Vec2, lifetime: f32) -> Self {
        let mut body = Body::new(pos, PROJECTILE_RADIUS);
        body.vel = vel;
        Self {
            body,
            age: 0.0,
            lifetime,
        }
    }

    /// Age, expire, then integrate
    pub fn update(&mut self, dt: f32) {
        self.age += dt;
        if self.age >= self.lifetime {
            self.body.alive = false;
        }
        self.body.integrate(dt);
    }
}

/// A pursuing enemy
#[derive(Debug, Clone, Copy)]
pub struct Enemy {
    pub body: Body,
    pub speed: f32,
}

impl Enemy {
    pub fn new(pos: Vec2, speed: f32) -> Self {
        Self {
            body: Body::new(pos, ENEMY_RADIUS),
            speed,
        }
    }

    /// Pure pursuit: velocity points at the target every frame
    ///
    /// A degenerate direction (target on top of us) leaves velocity zero for
    /// the frame rather than producing NaNs.
    pub fn steer_to(&mut self, target: Vec2) {
        self.body.vel = safe_normalize(target - self.body.pos) * self.speed;
    }
}

/// The player character (exactly one per run)
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    pub hp: i32,
    pub speed: f32,
    /// Unit vector toward the pointer; holds its last value on degenerate aim
    pub aim_dir: Vec2,
    /// Seconds until the next shot is allowed
    pub shoot_timer: f32,
    pub selected: WeaponKind,
    /// Remaining ammo per weapon, -1 = unlimited
    pub ammo: [i32; WeaponKind::COUNT],
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body::new(pos, PLAYER_RADIUS),
            hp: PLAYER_START_HP,
            speed: PLAYER_SPEED,
            aim_dir: Vec2::X,
            shoot_timer: 0.0,
            selected: WeaponKind::Pistol,
            ammo: WeaponKind::starting_ammo(),
        }
    }

    /// Apply one frame of directional input and pointer aim
    ///
    /// Velocity is assigned instantaneously (no acceleration model); diagonal
    /// input is normalized so diagonal speed equals axial speed.
    pub fn update_input(
        &mut self,
        dt: f32,
        up: bool,
        down: bool,
        left: bool,
        right: bool,
        pointer: Vec2,
    ) {
        let mut axis = Vec2::ZERO;
        if up {
            axis.y -= 1.0;
        }
        if down {
            axis.y += 1.0;
        }
        if left {
            axis.x -= 1.0;
        }
        if right {
            axis.x += 1.0;
        }
        self.body.vel = safe_normalize(axis) * self.speed;

        let aim = safe_normalize(pointer - self.body.pos);
        if aim != Vec2::ZERO {
            self.aim_dir = aim;
        }

        self.shoot_timer = (self.shoot_timer - dt).max(0.0);
    }

    /// Select the active weapon; out-of-range indices clamp to the ends
    pub fn select_weapon(&mut self, index: usize) {
        self.selected = WeaponKind::from_index(index);
    }

    pub fn weapon(&self) -> &'static WeaponSpec {
        self.selected.spec()
    }

    /// Remaining ammo for the active weapon (-1 = unlimited)
    pub fn ammo_remaining(&self) -> i32 {
        self.ammo[self.selected as usize]
    }

    /// Attempt to fire the active weapon, emitting pellets into `out`
    ///
    /// Refused (zero pellets, cooldown untouched) while the cooldown runs or
    /// when ammo is exactly 0. A successful shot consumes one ammo unit if
    /// the capacity is finite, regardless of pellet count.
    pub fn try_shoot(&mut self, out: &mut Vec<Projectile>, rng: &mut Pcg32) -> usize {
        use rand::Rng;

        let spec = self.weapon();
        if self.shoot_timer > 0.0 {
            return 0;
        }
        let slot = self.selected as usize;
        if self.ammo[slot] == 0 {
            return 0;
        }

        self.shoot_timer = 1.0 / spec.fire_rate;
        if self.ammo[slot] > 0 {
            self.ammo[slot] -= 1;
        }

        let aim_angle = self.aim_dir.y.atan2(self.aim_dir.x);
        let muzzle = self.body.pos + self.aim_dir * MUZZLE_OFFSET;
        for _ in 0..spec.pellets {
            let jitter: f32 = rng.random_range(-spec.spread_deg..=spec.spread_deg);
            let angle = aim_angle + jitter.to_radians();
            let dir = Vec2::new(angle.cos(), angle.sin());
            out.push(Projectile::new(muzzle, dir * spec.bullet_speed, spec.bullet_life));
        }
        spec.pellets as usize
    }
}

/// Complete simulation state for one run
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Single RNG threaded into spawn and fire paths
    pub rng: Pcg32,
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub projectiles: Vec<Projectile>,
    pub wave: WaveState,
    pub score: u32,
    /// Total simulated seconds survived
    pub survive_time: f32,
    /// False once the run has ended; never flips back
    pub running: bool,
    /// i-frame timer, counts down to 0
    pub damage_cooldown: f32,
    /// Cosmetic game-over overlay timer, advisory only
    pub game_over_fade: f32,
}

impl GameState {
    /// Create a fresh run with wave 1 already started
    pub fn new(seed: u64, tuning: &Tuning) -> Self {
        let center = Vec2::new(ARENA_WIDTH * 0.5, ARENA_HEIGHT * 0.5);
        let mut wave = WaveState::new(tuning);
        wave.start_wave(1);

        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::new(center),
            enemies: Vec::with_capacity(tuning.max_enemies),
            projectiles: Vec::new(),
            wave,
            score: 0,
            survive_time: 0.0,
            running: true,
            damage_cooldown: 0.0,
            game_over_fade: 0.0,
        }
    }

    /// Enemies not yet marked for reaping
    pub fn live_enemies(&self) -> usize {
        self.enemies.iter().filter(|e| e.body.alive).count()
    }
}
