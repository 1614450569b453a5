//! Foreground drive loop
//!
//! Runs in thread mode below the control executor. Reads the motor state
//! published by the control context, steps the coil pattern one position
//! at a time, and blocks between steps so the motor keeps pace.

use defmt::*;
use embassy_rp::gpio::Output;
use embassy_time::{block_for, Duration};

use headturn_core::config::STEP_DELAY_MS;
use headturn_core::drive::DriveSequencer;
use headturn_core::state::MotorState;
use headturn_core::traits::DriveBus;
use headturn_drivers::motor::GpioDriveBus;

use crate::channels::SHARED;

/// Step the drive bus forever
pub fn run(mut bus: GpioDriveBus<Output<'static>>) -> ! {
    let mut sequencer = DriveSequencer::new();
    let step_delay = Duration::from_millis(STEP_DELAY_MS);

    if let Err(e) = bus.write_pattern(sequencer.pattern()) {
        warn!("Initial drive pattern write failed: {:?}", e);
    }
    info!("Drive loop started ({} ms per step)", STEP_DELAY_MS);

    let mut last_state = MotorState::Idle;
    loop {
        let state = SHARED.motor_state();
        if state != last_state {
            info!(
                "Drive {:?} -> {:?} at {} deg",
                last_state,
                state,
                sequencer.position_degrees()
            );
            last_state = state;
        }

        match sequencer.step(state, &mut bus) {
            Ok(Some(pattern)) => {
                trace!("Step {=u8:b} position={}", pattern.bits(), sequencer.position());
                block_for(step_delay);
            }
            Ok(None) => {}
            Err(e) => {
                warn!("Drive bus write failed: {:?}", e);
                block_for(step_delay);
            }
        }
    }
}
