//! Wave progression state machine
//!
//! Two phases: active (spawning/fighting) and intermission (timed pause).
//! The scheduler owns only its counters; the frame orchestrator performs the
//! actual enemy inserts when a spawn decision fires.

use crate::config::Tuning;
use crate::consts::{CAP_RETRY_SECS, FIRST_SPAWN_DELAY, INTERMISSION_SECS};

/// Mutable scheduler state for the current run
#[derive(Debug, Clone)]
pub struct WaveState {
    /// Base spawn interval before per-wave decay (from tuning)
    base_interval: f32,
    /// Base enemy speed before per-wave ramp (from tuning)
    base_speed: f32,

    pub current_wave: u32,
    /// Quota of enemies for this wave
    pub total_this_wave: u32,
    pub spawned_this_wave: u32,
    pub killed_this_wave: u32,
    /// Max enemies alive at once
    pub simultaneous_cap: u32,
    pub pending_to_spawn: u32,
    /// Seconds between successful spawns this wave
    pub spawn_interval: f32,
    pub spawn_timer: f32,
    /// Speed assigned to enemies spawned this wave
    pub enemy_speed: f32,
    pub in_intermission: bool,
    pub intermission_timer: f32,
}

impl WaveState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            base_interval: tuning.spawn_interval,
            base_speed: tuning.enemy_speed,
            current_wave: 0,
            total_this_wave: 0,
            spawned_this_wave: 0,
            killed_this_wave: 0,
            simultaneous_cap: 0,
            pending_to_spawn: 0,
            spawn_interval: tuning.spawn_interval,
            spawn_timer: 0.0,
            enemy_speed: tuning.enemy_speed,
            in_intermission: false,
            intermission_timer: 0.0,
        }
    }

    /// (Re)initialize the scheduler for wave `n`
    ///
    /// Wave numbers are 1-based; 0 is not a wave. Quota grows linearly, the
    /// concurrency cap grows linearly up to 40, the spawn interval decays
    /// geometrically with a 0.20s floor, and enemy speed ramps 6% per wave.
    pub fn start_wave(&mut self, n: u32) {
        debug_assert!(n >= 1, "wave numbers are 1-based");
        self.current_wave = n;
        self.total_this_wave = 8 + (n - 1) * 5;
        self.simultaneous_cap = (6 + (n - 1) * 2).min(40);
        self.spawn_interval = (self.base_interval * 0.92f32.powi(n as i32 - 1)).max(0.20);
        self.enemy_speed = self.base_speed * (1.0 + 0.06 * (n - 1) as f32);

        self.spawned_this_wave = 0;
        self.killed_this_wave = 0;
        self.pending_to_spawn = self.total_this_wave;
        self.spawn_timer = FIRST_SPAWN_DELAY;
        self.in_intermission = false;
        self.intermission_timer = 0.0;

        log::info!(
            "wave {} started: quota={} cap={} interval={:.3}s speed={:.1}",
            n,
            self.total_this_wave,
            self.simultaneous_cap,
            self.spawn_interval,
            self.enemy_speed
        );
    }

    /// Per-frame spawn decision; returns true when one enemy should spawn now
    ///
    /// When the cap is saturated the timer is reset to a short retry backoff
    /// without consuming a spawn slot, so freed capacity is refilled promptly
    /// but not in a burst.
    pub fn update_spawn(&mut self, dt: f32, live_enemies: usize) -> bool {
        self.spawn_timer -= dt;
        if self.in_intermission || self.pending_to_spawn == 0 || self.spawn_timer > 0.0 {
            return false;
        }
        if (live_enemies as u32) < self.simultaneous_cap {
            self.pending_to_spawn -= 1;
            self.spawned_this_wave += 1;
            self.spawn_timer = self.spawn_interval;
            true
        } else {
            self.spawn_timer = CAP_RETRY_SECS;
            false
        }
    }

    /// Whether the wave-completion invariant holds
    pub fn wave_complete(&self, live_enemies: usize) -> bool {
        !self.in_intermission
            && self.spawned_this_wave >= self.total_this_wave
            && self.killed_this_wave >= self.total_this_wave
            && live_enemies == 0
    }

    /// Enter the timed pause before the next wave
    pub fn begin_intermission(&mut self) {
        self.in_intermission = true;
        self.intermission_timer = INTERMISSION_SECS;
        log::info!("wave {} cleared, intermission", self.current_wave);
    }

    /// Advance the intermission timer; returns true when the next wave is due
    pub fn update_intermission(&mut self, dt: f32) -> bool {
        if !self.in_intermission {
            return false;
        }
        self.intermission_timer -= dt;
        self.intermission_timer <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wave_at(n: u32) -> WaveState {
        let mut w = WaveState::new(&Tuning::default());
        w.start_wave(n);
        w
    }

    #[test]
    fn test_wave_scaling_curves() {
        let w1 = wave_at(1);
        assert_eq!(w1.total_this_wave, 8);
        assert_eq!(w1.simultaneous_cap, 6);
        assert!((w1.spawn_interval - 1.0).abs() < 1e-6);
        assert!((w1.enemy_speed - 90.0).abs() < 1e-3);

        let w5 = wave_at(5);
        assert_eq!(w5.total_this_wave, 28);
        assert_eq!(w5.simultaneous_cap, 14);
        assert!((w5.spawn_interval - 0.92f32.powi(4)).abs() < 1e-4);

        // Cap saturates at 40, interval floors at 0.20
        let w30 = wave_at(30);
        assert_eq!(w30.simultaneous_cap, 40);
        assert!((w30.spawn_interval - 0.20).abs() < 1e-6);
    }

    #[test]
    #[should_panic(expected = "1-based")]
    fn test_wave_zero_is_rejected() {
        let mut w = WaveState::new(&Tuning::default());
        w.start_wave(0);
    }

    #[test]
    fn test_spawn_waits_for_initial_delay() {
        let mut w = wave_at(1);
        assert!(!w.update_spawn(0.1, 0));
        assert!(!w.update_spawn(0.1, 0));
        assert!(w.update_spawn(0.1, 0));
        assert_eq!(w.spawned_this_wave, 1);
        assert_eq!(w.pending_to_spawn, 7);
        assert!((w.spawn_timer - w.spawn_interval).abs() < 1e-6);
    }

    #[test]
    fn test_cap_saturation_backs_off_without_consuming() {
        let mut w = wave_at(1);
        w.spawn_timer = 0.0;
        let cap = w.simultaneous_cap as usize;

        assert!(!w.update_spawn(0.01, cap));
        assert_eq!(w.pending_to_spawn, w.total_this_wave);
        assert_eq!(w.spawned_this_wave, 0);
        assert!((w.spawn_timer - CAP_RETRY_SECS).abs() < 1e-6);

        // Capacity frees up: the retry spawns without a full interval wait
        assert!(!w.update_spawn(0.1, cap - 1));
        assert!(w.update_spawn(0.1, cap - 1));
        assert_eq!(w.spawned_this_wave, 1);
    }

    #[test]
    fn test_completion_requires_zero_live_enemies() {
        let mut w = wave_at(1);
        w.spawned_this_wave = w.total_this_wave;
        w.killed_this_wave = w.total_this_wave;

        assert!(!w.wave_complete(1));
        assert!(w.wave_complete(0));
    }

    #[test]
    fn test_completion_requires_full_quota() {
        let mut w = wave_at(1);
        w.spawned_this_wave = w.total_this_wave;
        w.killed_this_wave = w.total_this_wave - 1;
        assert!(!w.wave_complete(0));
    }

    #[test]
    fn test_intermission_times_out() {
        let mut w = wave_at(1);
        w.begin_intermission();
        assert!((w.intermission_timer - INTERMISSION_SECS).abs() < 1e-6);

        assert!(!w.update_intermission(1.5));
        assert!(w.update_intermission(1.5));
    }

    #[test]
    fn test_no_spawns_during_intermission() {
        let mut w = wave_at(1);
        w.pending_to_spawn = 3;
        w.spawn_timer = 0.0;
        w.begin_intermission();
        assert!(!w.update_spawn(0.1, 0));
        assert_eq!(w.spawned_this_wave, 0);
    }
}
