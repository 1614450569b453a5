//! Events that trigger motor state transitions

use crate::traits::Polarity;

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Comparator edge between the two receivers (motion started or
    /// changed direction)
    MotionEdge(Polarity),
    /// Both receivers stayed quiet long enough
    MotionCeased,
}
