//! Dual-channel ADC sequencer
//!
//! Each receiver gets two ticks, a select and a start, leaving room for
//! an acquisition delay on front ends that route the input separately:
//!
//! ```text
//! slot 0: select A   slot 1: convert A   slot 2: select B   slot 3: convert B
//! ```
//!
//! One full A+B scan completes every four ticks. Boards whose ADC driver
//! routes the input at conversion time treat the select as bookkeeping.

use crate::config::SAMPLE_SLOTS;
use crate::traits::Receiver;

/// Work requested from the ADC on a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcRequest {
    /// Route the receiver to the ADC input
    Select(Receiver),
    /// Start a conversion; the result belongs to this receiver
    Start(Receiver),
}

impl AdcRequest {
    /// Receiver this request concerns
    pub fn receiver(&self) -> Receiver {
        match self {
            AdcRequest::Select(r) | AdcRequest::Start(r) => *r,
        }
    }

    /// Request for a given slot
    fn for_slot(slot: u8) -> Self {
        match slot {
            0 => AdcRequest::Select(Receiver::A),
            1 => AdcRequest::Start(Receiver::A),
            2 => AdcRequest::Select(Receiver::B),
            _ => AdcRequest::Start(Receiver::B),
        }
    }
}

/// Reduce a raw ADC reading to the 8-bit code the quiet threshold uses
///
/// Keeps the most significant eight bits, like a left-justified result
/// register read through its high byte.
pub fn to_code(raw: u16, resolution_bits: u8) -> u8 {
    let shift = resolution_bits.saturating_sub(8) as u32;
    (raw >> shift).min(u8::MAX as u16) as u8
}

/// Slot counter owned by the tick context
#[derive(Debug, Clone, Default)]
pub struct SampleSequencer {
    slot: u8,
}

impl SampleSequencer {
    /// Create a sequencer at slot 0
    pub const fn new() -> Self {
        Self { slot: 0 }
    }

    /// Slot the next tick will service
    pub fn slot(&self) -> u8 {
        self.slot
    }

    /// Service the current slot and move to the next one
    ///
    /// The slot advances on every tick; while the front end is powered
    /// down no ADC work is requested.
    pub fn advance(&mut self, powered: bool) -> Option<AdcRequest> {
        let request = AdcRequest::for_slot(self.slot);
        self.slot = (self.slot + 1) % SAMPLE_SLOTS;
        powered.then_some(request)
    }
}
