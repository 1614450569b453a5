//! Cross-context shared state and channels
//!
//! The control context (tick, edge, conversion tasks) and the foreground
//! drive loop communicate only through these statics.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;

use headturn_core::control::AdcRequest;
use headturn_core::shared::SharedState;

/// Channel capacity for ADC requests (one full scan)
const ADC_REQUEST_CHANNEL_SIZE: usize = 4;

/// Motor state, fade and power flags shared by every context
pub static SHARED: SharedState = SharedState::new();

/// ADC work produced by the tick, consumed by the conversion task
pub static ADC_REQUESTS: Channel<CriticalSectionRawMutex, AdcRequest, ADC_REQUEST_CHANNEL_SIZE> =
    Channel::new();

/// Wakes the parked tick task after a comparator edge
pub static TICK_REARM: Signal<CriticalSectionRawMutex, ()> = Signal::new();
