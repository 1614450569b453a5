//! Shared context between the interrupt and foreground contexts
//!
//! Every field is a single-word atomic with one logical writer:
//!
//! | Field             | Written by                                   | Read by            |
//! |-------------------|----------------------------------------------|--------------------|
//! | motor state       | edge (direction), conversion (idle)          | foreground         |
//! | fade enabled      | edge (true), conversion (false)              | tick               |
//! | tick armed        | edge (arm), tick (park)                      | tick               |
//! | sampler powered   | edge (power up), conversion (power down)     | tick, conversion   |
//! | duty              | tick                                         | diagnostics        |
//!
//! Edge and conversion handlers never run at the same time (they share
//! one interrupt priority), so the two-writer fields never race. Readers
//! may see a value one tick stale but never a torn one.
//!
//! Mutators are crate-private: the handlers in [`crate::control`] are the
//! only code allowed to write.

use portable_atomic::{AtomicBool, AtomicU16, AtomicU8, Ordering};

use crate::state::MotorState;

/// Cross-context control state
pub struct SharedState {
    motor_state: AtomicU8,
    fade_enabled: AtomicBool,
    tick_armed: AtomicBool,
    sampler_powered: AtomicBool,
    duty: AtomicU16,
}

impl Default for SharedState {
    fn default() -> Self {
        Self::new()
    }
}

impl SharedState {
    /// Power-on state: idle, LED off, tick parked, sampler unpowered
    pub const fn new() -> Self {
        Self {
            motor_state: AtomicU8::new(MotorState::Idle.as_u8()),
            fade_enabled: AtomicBool::new(false),
            tick_armed: AtomicBool::new(false),
            sampler_powered: AtomicBool::new(false),
            duty: AtomicU16::new(0),
        }
    }

    /// Current motor state
    pub fn motor_state(&self) -> MotorState {
        MotorState::from_u8(self.motor_state.load(Ordering::Acquire))
    }

    /// Whether the LED should be fading on
    pub fn fade_enabled(&self) -> bool {
        self.fade_enabled.load(Ordering::Acquire)
    }

    /// Whether the periodic tick should be running
    pub fn tick_armed(&self) -> bool {
        self.tick_armed.load(Ordering::Acquire)
    }

    /// Whether the analog front end is converting
    pub fn sampler_powered(&self) -> bool {
        self.sampler_powered.load(Ordering::Acquire)
    }

    /// Last duty cycle written by the tick
    pub fn duty(&self) -> u16 {
        self.duty.load(Ordering::Relaxed)
    }

    pub(crate) fn set_motor_state(&self, state: MotorState) {
        self.motor_state.store(state.as_u8(), Ordering::Release);
    }

    pub(crate) fn set_fade_enabled(&self, enabled: bool) {
        self.fade_enabled.store(enabled, Ordering::Release);
    }

    pub(crate) fn set_tick_armed(&self, armed: bool) {
        self.tick_armed.store(armed, Ordering::Release);
    }

    pub(crate) fn set_sampler_powered(&self, powered: bool) {
        self.sampler_powered.store(powered, Ordering::Release);
    }

    pub(crate) fn publish_duty(&self, duty: u16) {
        self.duty.store(duty, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_power_on_state() {
        let shared = SharedState::new();
        assert_eq!(shared.motor_state(), MotorState::Idle);
        assert!(!shared.fade_enabled());
        assert!(!shared.tick_armed());
        assert!(!shared.sampler_powered());
        assert_eq!(shared.duty(), 0);
    }

    #[test]
    fn test_static_construction() {
        static SHARED: SharedState = SharedState::new();
        SHARED.set_motor_state(MotorState::CounterClockwise);
        assert_eq!(SHARED.motor_state(), MotorState::CounterClockwise);
    }

    #[test]
    fn test_setters() {
        let shared = SharedState::default();
        shared.set_fade_enabled(true);
        shared.set_tick_armed(true);
        shared.set_sampler_powered(true);
        shared.publish_duty(0x1234);

        assert!(shared.fade_enabled());
        assert!(shared.tick_armed());
        assert!(shared.sampler_powered());
        assert_eq!(shared.duty(), 0x1234);
    }
}
