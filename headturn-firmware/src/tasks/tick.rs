//! Periodic control tick
//!
//! Each tick steps the LED fade, then hands the sampler's ADC request to
//! the conversion task. The ticker is free running; once the LED has faded
//! out the task parks until the next comparator edge.

use defmt::*;
use embassy_rp::pwm::PwmOutput;
use embassy_time::{Duration, Ticker};

use headturn_core::config::TICK_PERIOD_US;
use headturn_core::control::{FadeStep, TickDispatcher};
use headturn_drivers::led::PwmLed;

use crate::channels::{ADC_REQUESTS, SHARED, TICK_REARM};

/// Tick task - fade and sampler sequencing
#[embassy_executor::task]
pub async fn tick_task(mut led: PwmLed<PwmOutput<'static>>) {
    info!("Tick task started ({} us period)", TICK_PERIOD_US);

    let mut dispatcher = TickDispatcher::new();
    let mut ticker = Ticker::every(Duration::from_micros(TICK_PERIOD_US));

    loop {
        if !SHARED.tick_armed() {
            debug!("Tick parked");
            TICK_REARM.wait().await;
            ticker.reset();
            debug!("Tick re-armed");
            continue;
        }

        ticker.next().await;

        let report = dispatcher.on_tick(&SHARED, &mut led);

        if let Err(e) = report.output {
            warn!("LED duty write failed: {:?}", e);
        }
        if report.parked() {
            debug!("LED faded out, parking tick");
        } else if let FadeStep::Rising(duty) = report.fade {
            trace!("LED rising: duty={=u16:#x}", duty);
        }

        if let Some(request) = report.request {
            if ADC_REQUESTS.try_send(request).is_err() {
                warn!("ADC request queue full, dropping slot for {:?}", request.receiver());
            }
        }
    }
}
