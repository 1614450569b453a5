//! Output driver implementations
//!
//! This crate provides concrete implementations of the output traits
//! defined in headturn-core on top of `embedded-hal` 1.0:
//!
//! - Eye LED on any `SetDutyCycle` PWM channel
//! - Four-coil drive bus on `OutputPin` lines

#![no_std]
#![deny(unsafe_code)]

pub mod led;
pub mod motor;
