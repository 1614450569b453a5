//! Board-agnostic control core for the animatronic head
//!
//! This crate contains all control logic that does not depend on
//! specific hardware implementations:
//!
//! - Fixed timing constants
//! - Motor state machine and motion events
//! - Shared context between the interrupt and foreground contexts
//! - Tick-driven LED fade and dual-channel motion sampling
//! - Drive pattern sequencing for the 4-coil stepper bus
//! - Hardware abstraction traits for the outputs

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod drive;
pub mod shared;
pub mod state;
pub mod traits;
