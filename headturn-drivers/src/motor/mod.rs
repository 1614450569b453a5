//! Motor driver implementations
//!
//! The head motor is a four-coil stepper driven one line per coil.

pub mod coil_bus;

pub use coil_bus::GpioDriveBus;
