//! Motor state machine
//!
//! The motor state is the only thing the foreground drive loop looks at.
//! It changes in exactly two ways: a comparator edge picks a direction,
//! and the motion sampler returns it to idle.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::MotorState;
