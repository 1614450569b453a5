//! LED driver implementations

pub mod pwm;

pub use pwm::PwmLed;
