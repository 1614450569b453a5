//! Motion-stop debouncer
//!
//! Each completed conversion updates that receiver's "clear" flag. When both
//! flags are set the quiet streak grows, otherwise it resets. Hitting
//! [`QUIET_STREAK_LIMIT`] declares motion over, which rejects single
//! misreads: at least two back-to-back A+B scans must read quiet.

use crate::config::{QUIET_CODE_MAX, QUIET_STREAK_LIMIT};
use crate::traits::Receiver;

/// Result of recording one conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceOutcome {
    /// Motion may still be present; current streak length
    Counting(u8),
    /// Streak reached the limit and was reset
    MotionCeased,
}

/// Quiet-streak state owned by the conversion context
#[derive(Debug, Clone, Default)]
pub struct QuietDebouncer {
    a_clear: bool,
    b_clear: bool,
    streak: u8,
}

impl QuietDebouncer {
    /// Create a debouncer with both receivers considered active
    pub const fn new() -> Self {
        Self {
            a_clear: false,
            b_clear: false,
            streak: 0,
        }
    }

    /// Check if an 8-bit code counts as quiet
    pub fn is_quiet(code: u8) -> bool {
        code <= QUIET_CODE_MAX
    }

    /// Current quiet streak
    pub fn streak(&self) -> u8 {
        self.streak
    }

    /// Last clear flag recorded for a receiver
    pub fn is_clear(&self, receiver: Receiver) -> bool {
        match receiver {
            Receiver::A => self.a_clear,
            Receiver::B => self.b_clear,
        }
    }

    /// Record a conversion result for one receiver
    pub fn record(&mut self, receiver: Receiver, code: u8) -> DebounceOutcome {
        let quiet = Self::is_quiet(code);
        match receiver {
            Receiver::A => self.a_clear = quiet,
            Receiver::B => self.b_clear = quiet,
        }

        if self.a_clear && self.b_clear {
            self.streak += 1;
        } else {
            self.streak = 0;
        }

        if self.streak >= QUIET_STREAK_LIMIT {
            self.streak = 0;
            DebounceOutcome::MotionCeased
        } else {
            DebounceOutcome::Counting(self.streak)
        }
    }
}
