//! Output traits
//!
//! The controller drives two kinds of outputs: the PWM line behind the
//! eye LED and the four coil lines of the stepper bus.

use crate::drive::DrivePattern;

/// Errors reported by output implementations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    /// A digital output pin could not be driven
    Pin,
    /// The PWM peripheral rejected the duty cycle
    Pwm,
}

/// PWM output reflecting the LED duty cycle
///
/// There is no separate "apply" step: whatever was last written is what
/// the pulse generator emits.
pub trait DutyOutput {
    /// Set the duty cycle, in `0..=DUTY_MAX`
    ///
    /// Implementations scale this to their native resolution.
    fn set_duty(&mut self, duty: u16) -> Result<(), OutputError>;
}

/// Four-line stepper drive bus
pub trait DriveBus {
    /// Drive all four coil lines to match `pattern`
    fn write_pattern(&mut self, pattern: DrivePattern) -> Result<(), OutputError>;
}
