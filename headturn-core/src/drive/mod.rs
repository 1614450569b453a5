//! Stepper drive sequencing
//!
//! The head motor is driven directly from four coil lines. Stepping is a
//! one-hot pattern walking across the lines, reseeded at the far end so the
//! bus behaves as a circular shift register.

pub mod pattern;
pub mod sequencer;

pub use pattern::DrivePattern;
pub use sequencer::DriveSequencer;

/// Motor rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Clockwise rotation (coil A towards D)
    Clockwise,
    /// Counter-clockwise rotation (coil D towards A)
    CounterClockwise,
}

impl Direction {
    /// Position change of one step in this direction
    pub fn delta(self) -> i32 {
        match self {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => -1,
        }
    }
}
