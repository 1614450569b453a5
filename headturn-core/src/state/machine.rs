//! Motor state definition
//!
//! Transitions are level-free: every event maps straight to its target
//! state with no intermediate states.

use super::events::Event;
use crate::drive::Direction;
use crate::traits::Polarity;

/// Motor drive states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum MotorState {
    /// No motion; drive bus left as-is
    #[default]
    Idle = 0,
    /// Stepping clockwise
    Clockwise = 1,
    /// Stepping counter-clockwise
    CounterClockwise = 2,
}

impl MotorState {
    /// Decode a state stored in a shared byte
    ///
    /// Unknown values decode as `Idle` so a corrupted byte never drives
    /// the motor.
    pub const fn from_u8(value: u8) -> Self {
        match value {
            1 => MotorState::Clockwise,
            2 => MotorState::CounterClockwise,
            _ => MotorState::Idle,
        }
    }

    /// Encode for storage in a shared byte
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Drive direction, or `None` when idle
    pub fn direction(&self) -> Option<Direction> {
        match self {
            MotorState::Idle => None,
            MotorState::Clockwise => Some(Direction::Clockwise),
            MotorState::CounterClockwise => Some(Direction::CounterClockwise),
        }
    }

    /// Check if the foreground loop should be stepping
    pub fn is_driving(&self) -> bool {
        !matches!(self, MotorState::Idle)
    }

    /// Process an event and return the next state
    ///
    /// An edge always re-decides direction from its polarity, whatever
    /// the motor was doing before.
    pub fn transition(self, event: Event) -> Self {
        match event {
            Event::MotionEdge(Polarity::High) => MotorState::Clockwise,
            Event::MotionEdge(Polarity::Low) => MotorState::CounterClockwise,
            Event::MotionCeased => MotorState::Idle,
        }
    }
}
