//! Timers driven by frame time, built on the character timing constants.

use crate::constants::{REGEN_INTERVAL, SLOWEST_ATTACK_INTERVAL};

/// Accumulates elapsed seconds and fires once per interval.
///
/// Overshoot is dropped when the timer fires, so a long frame never
/// produces more than one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntervalTimer {
    interval: f64,
    elapsed: f64,
}

impl IntervalTimer {
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            elapsed: 0.0,
        }
    }

    /// Timer for HP/SP regeneration ticks.
    pub fn regen() -> Self {
        Self::new(REGEN_INTERVAL)
    }

    pub fn interval(&self) -> f64 {
        self.interval
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Advances the timer by `dt` seconds. Returns true if it fired.
    pub fn tick(&mut self, dt: f64) -> bool {
        if !dt.is_finite() || dt < 0.0 {
            return false;
        }

        self.elapsed += dt;
        if self.elapsed >= self.interval {
            self.elapsed = 0.0;
            tracing::trace!(interval = self.interval, "interval timer fired");
            return true;
        }
        false
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

/// Clamps an attack cooldown to `[0, SLOWEST_ATTACK_INTERVAL]`.
pub fn clamp_attack_interval(seconds: f64) -> f64 {
    if seconds.is_nan() {
        return SLOWEST_ATTACK_INTERVAL;
    }
    seconds.clamp(0.0, SLOWEST_ATTACK_INTERVAL)
}
