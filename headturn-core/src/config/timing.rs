//! Timing and threshold constants
//!
//! Values were tuned empirically on the prototype head. They are kept
//! as-is rather than derived from motor or sensor datasheets.

/// Period of the control tick in microseconds
pub const TICK_PERIOD_US: u64 = 209;

/// Duty cycle change applied on every fading tick
pub const FADE_STEP: u16 = 0x40;

/// Full-on LED duty cycle
pub const DUTY_MAX: u16 = 0xFF00;

/// Ticks needed for a complete fade between off and full-on
pub const FADE_TICKS: u16 = DUTY_MAX / FADE_STEP;

/// Highest 8-bit receiver code that still counts as quiet (~40 mV)
pub const QUIET_CODE_MAX: u8 = 0b0000_1010;

/// Consecutive dual-quiet conversions before motion is declared over
pub const QUIET_STREAK_LIMIT: u8 = 4;

/// Number of sampler slots: select A, convert A, select B, convert B
pub const SAMPLE_SLOTS: u8 = 4;

/// Delay after each drive step in milliseconds
///
/// Deliberately slow so the head visibly ticks round.
pub const STEP_DELAY_MS: u64 = 1000;

/// Drive steps per revolution of the head
pub const STEPS_PER_REV: i32 = 2048;

const _: () = assert!(DUTY_MAX % FADE_STEP == 0, "fade step must divide the duty range");
const _: () = assert!(FADE_STEP > 0);
const _: () = assert!(QUIET_STREAK_LIMIT > 0);
const _: () = assert!(SAMPLE_SLOTS == 4);
