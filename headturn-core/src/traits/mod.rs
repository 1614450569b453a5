//! Hardware abstraction traits
//!
//! These traits define the interface between the control logic
//! and board-specific implementations.

pub mod output;
pub mod sensor;

pub use output::{DriveBus, DutyOutput, OutputError};
pub use sensor::{Polarity, Receiver};
