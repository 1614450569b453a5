//! Interrupt-context control logic
//!
//! One periodic tick multiplexes two duties, always in this order:
//!
//! 1. [`fade::FadeController`] steps the LED duty cycle
//! 2. [`sampler::SampleSequencer`] walks the ADC through both receivers
//!
//! Conversion results arrive separately and feed
//! [`debounce::QuietDebouncer`]. The comparator edge handler re-arms
//! everything. [`handlers`] ties these to the [`crate::shared::SharedState`].

pub mod debounce;
pub mod fade;
pub mod handlers;
pub mod sampler;

pub use debounce::{DebounceOutcome, QuietDebouncer};
pub use fade::{FadeController, FadeStep};
pub use handlers::{on_motion_edge, ConversionHandler, TickDispatcher, TickReport};
pub use sampler::{to_code, AdcRequest, SampleSequencer};
