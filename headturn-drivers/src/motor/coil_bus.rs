//! Four-coil drive bus on GPIO lines
//!
//! Line 0 drives coil A through line 3 driving coil D, matching the bit
//! order of [`DrivePattern`].

use embedded_hal::digital::{OutputPin, PinState};
use headturn_core::drive::pattern::LINE_COUNT;
use headturn_core::drive::DrivePattern;
use headturn_core::traits::{DriveBus, OutputError};

/// Drive bus over four output pins of the same type
pub struct GpioDriveBus<P> {
    lines: [P; LINE_COUNT],
}

impl<P: OutputPin> GpioDriveBus<P> {
    /// Create a bus from the coil A..D lines
    pub fn new(coil_a: P, coil_b: P, coil_c: P, coil_d: P) -> Self {
        Self {
            lines: [coil_a, coil_b, coil_c, coil_d],
        }
    }

    /// Release the output pins
    pub fn release(self) -> [P; LINE_COUNT] {
        self.lines
    }
}

impl<P: OutputPin> DriveBus for GpioDriveBus<P> {
    fn write_pattern(&mut self, pattern: DrivePattern) -> Result<(), OutputError> {
        // De-energise first so two coils are never on together
        for (index, line) in self.lines.iter_mut().enumerate() {
            if !pattern.line(index) {
                line.set_state(PinState::Low).map_err(|_| OutputError::Pin)?;
            }
        }
        for (index, line) in self.lines.iter_mut().enumerate() {
            if pattern.line(index) {
                line.set_state(PinState::High).map_err(|_| OutputError::Pin)?;
            }
        }
        Ok(())
    }
}
