//! Comparator edge handling
//!
//! Any edge on the comparator output means a hand moved past the
//! receivers. The level right after the edge says which way.

use defmt::*;
use embassy_rp::gpio::Input;

use headturn_core::control::on_motion_edge;
use headturn_core::traits::Polarity;

use crate::channels::{SHARED, TICK_REARM};

/// Edge task - direction decisions and re-arming
#[embassy_executor::task]
pub async fn edge_task(mut comparator: Input<'static>) {
    info!("Edge task started");

    loop {
        comparator.wait_for_any_edge().await;

        let polarity = Polarity::from_level(comparator.is_high());
        let state = on_motion_edge(&SHARED, polarity);
        TICK_REARM.signal(());

        info!("Motion edge {:?}: motor {:?}", polarity, state);
    }
}
