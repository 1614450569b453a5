//! Configuration constants
//!
//! The controller has no runtime configuration; everything is fixed at
//! compile time.

pub mod timing;

pub use timing::*;
