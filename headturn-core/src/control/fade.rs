//! LED fade controller
//!
//! Steps the duty cycle by a fixed increment on every tick, up while fading
//! is enabled and down otherwise, clamped at both ends. The fixed step
//! divides the range exactly, so both ends are reached in
//! [`FADE_TICKS`](crate::config::FADE_TICKS) ticks.

use crate::config::{DUTY_MAX, FADE_STEP};

/// Result of one fade step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FadeStep {
    /// Duty increased to the contained value
    Rising(u16),
    /// Fading on, but already at full brightness
    Holding,
    /// Duty decreased to the contained value
    Falling(u16),
    /// Fading off and fully dark; the tick can stop
    Parked,
}

/// Duty cycle owner for the eye LED
#[derive(Debug, Clone, Default)]
pub struct FadeController {
    duty: u16,
}

impl FadeController {
    /// Create a controller with the LED off
    pub const fn new() -> Self {
        Self { duty: 0 }
    }

    /// Current duty cycle
    pub fn duty(&self) -> u16 {
        self.duty
    }

    /// Advance the fade by one tick
    ///
    /// Only one of the rising or falling branches runs per call.
    pub fn step(&mut self, enabled: bool) -> FadeStep {
        if enabled {
            if self.duty < DUTY_MAX {
                self.duty = self.duty.saturating_add(FADE_STEP).min(DUTY_MAX);
                FadeStep::Rising(self.duty)
            } else {
                FadeStep::Holding
            }
        } else if self.duty > 0 {
            self.duty = self.duty.saturating_sub(FADE_STEP);
            FadeStep::Falling(self.duty)
        } else {
            FadeStep::Parked
        }
    }
}
