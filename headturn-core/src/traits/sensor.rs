//! Sensor-side types
//!
//! The two IR receivers are read twice: their difference through an
//! edge-triggered comparator (direction) and each one on its own ADC
//! channel (is there still motion?).

/// One of the two IR motion receivers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Receiver {
    /// First receiver (comparator non-inverting input)
    A,
    /// Second receiver (comparator inverting input)
    B,
}

/// Comparator output level sampled right after an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Receiver A above receiver B
    High,
    /// Receiver B above receiver A
    Low,
}

impl Polarity {
    /// Polarity from a digital comparator level
    pub fn from_level(high: bool) -> Self {
        if high {
            Polarity::High
        } else {
            Polarity::Low
        }
    }
}
