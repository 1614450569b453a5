//! ADC conversion handling
//!
//! Receives slot requests from the tick. embassy-rp routes the ADC input
//! inside `Adc::read`, so a select is bookkeeping only: it records which
//! receiver the following start may convert. The select/start tick pair
//! still paces one receiver per two ticks. A start runs the conversion and
//! feeds the result to the debouncer.

use defmt::*;
use embassy_rp::adc::{self, Adc, Channel};

use headturn_core::control::{to_code, AdcRequest, ConversionHandler, DebounceOutcome};
use headturn_core::traits::Receiver;

use crate::board::ADC_BITS;
use crate::channels::{ADC_REQUESTS, SHARED};

/// Conversion task - motion-stop debouncing
#[embassy_executor::task]
pub async fn conversion_task(
    mut adc: Adc<'static, adc::Async>,
    mut receiver_a: Channel<'static>,
    mut receiver_b: Channel<'static>,
) {
    info!("Conversion task started");

    let mut handler = ConversionHandler::new();
    let mut selected: Option<Receiver> = None;

    loop {
        let request = ADC_REQUESTS.receive().await;
        let receiver = request.receiver();
        if let AdcRequest::Select(_) = request {
            selected = Some(receiver);
            continue;
        }

        if selected != Some(receiver) {
            // Select was dropped; skip rather than read an unsettled input
            warn!("Start for {:?} without selection, skipping", receiver);
            continue;
        }

        let channel = match receiver {
            Receiver::A => &mut receiver_a,
            Receiver::B => &mut receiver_b,
        };
        let raw = match adc.read(channel).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!("ADC read failed on {:?}: {:?}", receiver, Debug2Format(&e));
                continue;
            }
        };

        let code = to_code(raw, ADC_BITS);
        match handler.on_conversion(&SHARED, receiver, code) {
            Some(DebounceOutcome::MotionCeased) => info!("Motion ceased, fading out"),
            Some(DebounceOutcome::Counting(streak)) => {
                trace!("Receiver {:?}: code={} streak={}", receiver, code, streak)
            }
            None => trace!("Discarded late conversion for {:?}", receiver),
        }
    }
}
