//! Weapon definitions and firing parameters
//!
//! Weapons are static config records; all mutable firing state (cooldown,
//! ammo counters) lives on the player.

/// The three carried weapons, indexed 0-2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeaponKind {
    #[default]
    Pistol = 0,
    Shotgun = 1,
    Rifle = 2,
}

/// Static firing parameters for one weapon
#[derive(Debug, Clone, Copy)]
pub struct WeaponSpec {
    /// Short HUD label
    pub name: &'static str,
    /// Shots per second; cooldown between shots is 1/fire_rate
    pub fire_rate: f32,
    pub bullet_speed: f32,
    /// Projectile lifetime in seconds
    pub bullet_life: f32,
    /// Per-pellet angular jitter, +/- degrees
    pub spread_deg: f32,
    /// Pellets emitted per shot
    pub pellets: u32,
    /// Total ammo, -1 = unlimited
    pub capacity: i32,
}

const PISTOL: WeaponSpec = WeaponSpec {
    name: "PST",
    fire_rate: 7.0,
    bullet_speed: 620.0,
    bullet_life: 0.9,
    spread_deg: 4.0,
    pellets: 1,
    capacity: -1,
};

const SHOTGUN: WeaponSpec = WeaponSpec {
    name: "SG",
    fire_rate: 1.2,
    bullet_speed: 520.0,
    bullet_life: 0.7,
    spread_deg: 22.0,
    pellets: 6,
    capacity: 24,
};

const RIFLE: WeaponSpec = WeaponSpec {
    name: "RF",
    fire_rate: 10.0,
    bullet_speed: 780.0,
    bullet_life: 1.0,
    spread_deg: 2.0,
    pellets: 1,
    capacity: 90,
};

impl WeaponKind {
    pub const COUNT: usize = 3;

    pub fn spec(self) -> &'static WeaponSpec {
        match self {
            WeaponKind::Pistol => &PISTOL,
            WeaponKind::Shotgun => &SHOTGUN,
            WeaponKind::Rifle => &RIFLE,
        }
    }

    /// Map a select request to a weapon; out-of-range clamps to the last slot
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => WeaponKind::Pistol,
            1 => WeaponKind::Shotgun,
            _ => WeaponKind::Rifle,
        }
    }

    /// Initial per-weapon ammo counters, taken from each spec's capacity
    pub fn starting_ammo() -> [i32; Self::COUNT] {
        [PISTOL.capacity, SHOTGUN.capacity, RIFLE.capacity]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cooldown_from_fire_rate() {
        let cd = 1.0 / WeaponKind::Rifle.spec().fire_rate;
        assert!((cd - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_select_clamps_out_of_range() {
        assert_eq!(WeaponKind::from_index(0), WeaponKind::Pistol);
        assert_eq!(WeaponKind::from_index(2), WeaponKind::Rifle);
        assert_eq!(WeaponKind::from_index(99), WeaponKind::Rifle);
    }

    #[test]
    fn test_starting_ammo_matches_capacity() {
        let ammo = WeaponKind::starting_ammo();
        assert_eq!(ammo, [-1, 24, 90]);
    }
}
