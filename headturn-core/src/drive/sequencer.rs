//! Foreground drive sequencer
//!
//! Polled continuously by the foreground loop. While the motor state is
//! idle nothing changes and the loop spins; otherwise each poll produces
//! one step, after which the caller waits
//! [`STEP_DELAY_MS`](crate::config::STEP_DELAY_MS).

use super::{Direction, DrivePattern};
use crate::config::STEPS_PER_REV;
use crate::state::MotorState;
use crate::traits::{DriveBus, OutputError};

/// Drive pattern and head position owned by the foreground loop
#[derive(Debug, Clone)]
pub struct DriveSequencer {
    pattern: DrivePattern,
    /// Steps from power-on position, wrapped to one revolution
    position: i32,
}

impl Default for DriveSequencer {
    fn default() -> Self {
        Self::new()
    }
}

impl DriveSequencer {
    /// Create a sequencer at the power-on pattern
    pub const fn new() -> Self {
        Self {
            pattern: DrivePattern::CW_SEED,
            position: 0,
        }
    }

    /// Pattern currently on the bus
    pub fn pattern(&self) -> DrivePattern {
        self.pattern
    }

    /// Head position in steps, `0..STEPS_PER_REV`
    pub fn position(&self) -> i32 {
        self.position
    }

    /// Head position in whole degrees
    pub fn position_degrees(&self) -> i32 {
        self.position * 360 / STEPS_PER_REV
    }

    /// Compute the next step for a motor state
    ///
    /// Returns `None` when idle.
    pub fn advance(&mut self, state: MotorState) -> Option<DrivePattern> {
        let direction = state.direction()?;
        self.pattern = match direction {
            Direction::Clockwise => self.pattern.clockwise(),
            Direction::CounterClockwise => self.pattern.counter_clockwise(),
        };
        self.position = (self.position + direction.delta()).rem_euclid(STEPS_PER_REV);
        Some(self.pattern)
    }

    /// Advance and write the new pattern to the bus
    ///
    /// Returns the pattern written, or `None` when idle (nothing written).
    pub fn step<B: DriveBus + ?Sized>(
        &mut self,
        state: MotorState,
        bus: &mut B,
    ) -> Result<Option<DrivePattern>, OutputError> {
        match self.advance(state) {
            Some(pattern) => {
                bus.write_pattern(pattern)?;
                Ok(Some(pattern))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[derive(Default)]
    struct MockBus {
        written: [u8; 16],
        count: usize,
    }

    impl DriveBus for MockBus {
        fn write_pattern(&mut self, pattern: DrivePattern) -> Result<(), OutputError> {
            self.written[self.count] = pattern.bits();
            self.count += 1;
            Ok(())
        }
    }

    struct BrokenBus;

    impl DriveBus for BrokenBus {
        fn write_pattern(&mut self, _pattern: DrivePattern) -> Result<(), OutputError> {
            Err(OutputError::Pin)
        }
    }

    #[test]
    fn test_power_on_pattern() {
        let seq = DriveSequencer::new();
        assert_eq!(seq.pattern().bits(), 0b1000);
        assert_eq!(seq.position(), 0);
    }

    #[test]
    fn test_idle_does_nothing() {
        let mut seq = DriveSequencer::new();
        let mut bus = MockBus::default();
        assert_eq!(seq.step(MotorState::Idle, &mut bus), Ok(None));
        assert_eq!(bus.count, 0);
        assert_eq!(seq.pattern(), DrivePattern::CW_SEED);
    }

    #[test]
    fn test_clockwise_boundary_reseed() {
        let mut seq = DriveSequencer::new();
        let mut bus = MockBus::default();
        for _ in 0..4 {
            seq.step(MotorState::Clockwise, &mut bus).unwrap();
        }
        assert_eq!(&bus.written[..4], &[0b0100, 0b0010, 0b0001, 0b1000]);
        assert_eq!(seq.position(), 4);
    }

    #[test]
    fn test_counter_clockwise_from_power_on() {
        let mut seq = DriveSequencer::new();
        let mut bus = MockBus::default();
        for _ in 0..5 {
            seq.step(MotorState::CounterClockwise, &mut bus).unwrap();
        }
        assert_eq!(
            &bus.written[..5],
            &[0b0001, 0b0010, 0b0100, 0b1000, 0b0001]
        );
        assert_eq!(seq.position(), STEPS_PER_REV - 5);
    }

    #[test]
    fn test_position_wraps() {
        let mut seq = DriveSequencer::new();
        for _ in 0..STEPS_PER_REV {
            seq.advance(MotorState::Clockwise);
        }
        assert_eq!(seq.position(), 0);

        for _ in 0..STEPS_PER_REV / 4 {
            seq.advance(MotorState::Clockwise);
        }
        assert_eq!(seq.position_degrees(), 90);
    }

    #[test]
    fn test_bus_error_propagates() {
        let mut seq = DriveSequencer::new();
        assert_eq!(
            seq.step(MotorState::Clockwise, &mut BrokenBus),
            Err(OutputError::Pin)
        );
        // Sequencer still advanced; the next write retries from there
        assert_eq!(seq.pattern().bits(), 0b0100);
    }

    fn any_state() -> impl Strategy<Value = MotorState> {
        prop_oneof![
            Just(MotorState::Idle),
            Just(MotorState::Clockwise),
            Just(MotorState::CounterClockwise),
        ]
    }

    proptest! {
        #[test]
        fn prop_always_one_hot(states in proptest::collection::vec(any_state(), 0..200)) {
            let mut seq = DriveSequencer::new();
            for state in states {
                seq.advance(state);
                prop_assert!(seq.pattern().is_one_hot());
                prop_assert!(seq.position() >= 0 && seq.position() < STEPS_PER_REV);
            }
        }
    }
}
