//! Entry points for the three interrupt-side events
//!
//! - [`TickDispatcher::on_tick`]: periodic tick (fade, then sampler)
//! - [`on_motion_edge`]: comparator edge
//! - [`ConversionHandler::on_conversion`]: ADC conversion complete
//!
//! The board layer calls these from whatever executes its interrupt
//! context and applies the returned ADC requests to the hardware.

use super::debounce::{DebounceOutcome, QuietDebouncer};
use super::fade::{FadeController, FadeStep};
use super::sampler::{AdcRequest, SampleSequencer};
use crate::shared::SharedState;
use crate::state::{Event, MotorState};
use crate::traits::{DutyOutput, OutputError, Polarity, Receiver};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickReport {
    /// Fade step taken
    pub fade: FadeStep,
    /// ADC work for this slot, if the front end is powered
    pub request: Option<AdcRequest>,
    /// Result of writing the duty cycle to the LED
    pub output: Result<(), OutputError>,
}

impl TickReport {
    /// Check if this tick parked the tick source
    pub fn parked(&self) -> bool {
        self.fade == FadeStep::Parked
    }
}

/// Tick-context state: fade controller and ADC slot counter
#[derive(Debug, Clone, Default)]
pub struct TickDispatcher {
    fade: FadeController,
    sequencer: SampleSequencer,
}

impl TickDispatcher {
    /// Create a dispatcher with the LED off at slot 0
    pub const fn new() -> Self {
        Self {
            fade: FadeController::new(),
            sequencer: SampleSequencer::new(),
        }
    }

    /// Current LED duty cycle
    pub fn duty(&self) -> u16 {
        self.fade.duty()
    }

    /// Slot the next tick will service
    pub fn slot(&self) -> u8 {
        self.sequencer.slot()
    }

    /// Run one tick
    ///
    /// Call only while [`SharedState::tick_armed`] is set. Once the LED has
    /// faded fully off with fading disabled, the tick disarms itself and
    /// stays parked until the next comparator edge.
    pub fn on_tick<O: DutyOutput + ?Sized>(
        &mut self,
        shared: &SharedState,
        output: &mut O,
    ) -> TickReport {
        let fade = self.fade.step(shared.fade_enabled());
        let duty = self.fade.duty();
        shared.publish_duty(duty);
        let written = output.set_duty(duty);

        if fade == FadeStep::Parked {
            shared.set_tick_armed(false);
        }

        let request = self.sequencer.advance(shared.sampler_powered());

        TickReport {
            fade,
            request,
            output: written,
        }
    }
}

/// Handle a comparator edge
///
/// Powers the sampler, enables fading, arms the tick and picks the
/// direction from the comparator level. This is the only place a
/// non-idle motor state or an enabled fade is ever written.
pub fn on_motion_edge(shared: &SharedState, polarity: Polarity) -> MotorState {
    shared.set_sampler_powered(true);
    shared.set_fade_enabled(true);
    shared.set_tick_armed(true);

    let next = shared
        .motor_state()
        .transition(Event::MotionEdge(polarity));
    shared.set_motor_state(next);
    next
}

/// Conversion-context state
#[derive(Debug, Clone, Default)]
pub struct ConversionHandler {
    debouncer: QuietDebouncer,
}

impl ConversionHandler {
    /// Create a handler with an empty quiet streak
    pub const fn new() -> Self {
        Self {
            debouncer: QuietDebouncer::new(),
        }
    }

    /// Debouncer state, for diagnostics
    pub fn debouncer(&self) -> &QuietDebouncer {
        &self.debouncer
    }

    /// Handle a completed conversion
    ///
    /// Returns `None` when the front end was powered down while the
    /// conversion was in flight; such late results are discarded. When the
    /// debouncer declares motion over, the motor goes idle, fading is
    /// disabled and the front end powers down.
    pub fn on_conversion(
        &mut self,
        shared: &SharedState,
        receiver: Receiver,
        code: u8,
    ) -> Option<DebounceOutcome> {
        if !shared.sampler_powered() {
            return None;
        }

        let outcome = self.debouncer.record(receiver, code);
        if outcome == DebounceOutcome::MotionCeased {
            let next = shared.motor_state().transition(Event::MotionCeased);
            shared.set_motor_state(next);
            shared.set_fade_enabled(false);
            shared.set_sampler_powered(false);
        }
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DUTY_MAX, FADE_STEP, QUIET_CODE_MAX};

    const QUIET: u8 = QUIET_CODE_MAX;
    const LOUD: u8 = 0x80;

    #[derive(Default)]
    struct MockLed {
        duty: u16,
        writes: usize,
        fail: bool,
    }

    impl DutyOutput for MockLed {
        fn set_duty(&mut self, duty: u16) -> Result<(), OutputError> {
            if self.fail {
                return Err(OutputError::Pwm);
            }
            self.duty = duty;
            self.writes += 1;
            Ok(())
        }
    }

    /// Tick, edge and conversion contexts wired together, with an ADC
    /// that completes every conversion before the next tick
    struct Rig {
        shared: SharedState,
        tick: TickDispatcher,
        conversion: ConversionHandler,
        led: MockLed,
        codes: [u8; 2],
    }

    impl Rig {
        fn new() -> Self {
            Self {
                shared: SharedState::new(),
                tick: TickDispatcher::new(),
                conversion: ConversionHandler::new(),
                led: MockLed::default(),
                codes: [LOUD, LOUD],
            }
        }

        fn set_codes(&mut self, a: u8, b: u8) {
            self.codes = [a, b];
        }

        /// Returns the report, or `None` if the tick source is parked
        fn tick(&mut self) -> Option<TickReport> {
            if !self.shared.tick_armed() {
                return None;
            }
            let report = self.tick.on_tick(&self.shared, &mut self.led);
            if let Some(AdcRequest::Start(receiver)) = report.request {
                let code = match receiver {
                    Receiver::A => self.codes[0],
                    Receiver::B => self.codes[1],
                };
                self.conversion.on_conversion(&self.shared, receiver, code);
            }
            Some(report)
        }

        fn ticks(&mut self, n: usize) {
            for _ in 0..n {
                self.tick();
            }
        }
    }

    #[test]
    fn test_parked_at_power_on() {
        let mut rig = Rig::new();
        assert!(rig.tick().is_none());
        assert_eq!(rig.led.writes, 0);
    }

    #[test]
    fn test_edge_arms_everything() {
        let shared = SharedState::new();
        let state = on_motion_edge(&shared, Polarity::High);

        assert_eq!(state, MotorState::Clockwise);
        assert_eq!(shared.motor_state(), MotorState::Clockwise);
        assert!(shared.fade_enabled());
        assert!(shared.tick_armed());
        assert!(shared.sampler_powered());
    }

    #[test]
    fn test_edge_polarity_wins_over_prior_state() {
        let shared = SharedState::new();
        for prior in [Polarity::High, Polarity::Low] {
            on_motion_edge(&shared, prior);

            assert_eq!(on_motion_edge(&shared, Polarity::High), MotorState::Clockwise);
            assert!(shared.fade_enabled());

            on_motion_edge(&shared, prior);
            assert_eq!(
                on_motion_edge(&shared, Polarity::Low),
                MotorState::CounterClockwise
            );
            assert!(shared.fade_enabled());
        }
    }

    #[test]
    fn test_fade_runs_before_sampler() {
        let mut rig = Rig::new();
        on_motion_edge(&rig.shared, Polarity::High);

        let report = rig.tick().unwrap();
        assert_eq!(report.fade, FadeStep::Rising(FADE_STEP));
        assert_eq!(report.request, Some(AdcRequest::Select(Receiver::A)));
        assert_eq!(rig.shared.duty(), FADE_STEP);
        assert_eq!(rig.led.duty, FADE_STEP);
    }

    #[test]
    fn test_scenario_edge_then_fade_on() {
        let mut rig = Rig::new();
        assert_eq!(rig.shared.duty(), 0);

        on_motion_edge(&rig.shared, Polarity::High);
        assert_eq!(rig.shared.motor_state(), MotorState::Clockwise);
        assert!(rig.shared.fade_enabled());

        for k in 1..=1100u32 {
            rig.tick();
            let expected = (k * FADE_STEP as u32).min(DUTY_MAX as u32) as u16;
            assert_eq!(rig.tick.duty(), expected);
        }
        assert_eq!(rig.led.duty, DUTY_MAX);
        assert_eq!(rig.shared.motor_state(), MotorState::Clockwise);
    }

    #[test]
    fn test_scenario_quiet_then_fade_off() {
        let mut rig = Rig::new();
        on_motion_edge(&rig.shared, Polarity::High);
        rig.ticks(400);
        assert_eq!(rig.tick.slot(), 0);

        rig.set_codes(QUIET, QUIET);

        // Quiet conversions land on ticks 2, 4, 6, 8, 10; the first only
        // clears A, the next four build the streak
        rig.ticks(9);
        assert_eq!(rig.shared.motor_state(), MotorState::Clockwise);
        assert!(rig.shared.fade_enabled());
        assert_eq!(rig.conversion.debouncer().streak(), 3);

        rig.tick();
        assert_eq!(rig.shared.motor_state(), MotorState::Idle);
        assert!(!rig.shared.fade_enabled());
        assert!(!rig.shared.sampler_powered());

        // Decay to zero in duty / step ticks, no ADC work meanwhile
        let remaining = rig.tick.duty() / FADE_STEP;
        assert_eq!(remaining, 410);
        for _ in 0..remaining {
            let report = rig.tick().unwrap();
            assert!(matches!(report.fade, FadeStep::Falling(_)));
            assert_eq!(report.request, None);
        }
        assert_eq!(rig.tick.duty(), 0);
        assert!(rig.shared.tick_armed());

        let report = rig.tick().unwrap();
        assert!(report.parked());
        assert!(!rig.shared.tick_armed());
        assert!(rig.tick().is_none());
    }

    #[test]
    fn test_quiet_within_four_scans() {
        let mut rig = Rig::new();
        on_motion_edge(&rig.shared, Polarity::Low);
        rig.ticks(7);

        rig.set_codes(QUIET, QUIET);
        rig.ticks(16);
        assert_eq!(rig.shared.motor_state(), MotorState::Idle);
        assert!(!rig.shared.fade_enabled());
    }

    #[test]
    fn test_one_noisy_receiver_keeps_motion() {
        let mut rig = Rig::new();
        on_motion_edge(&rig.shared, Polarity::Low);
        rig.set_codes(QUIET, LOUD);
        rig.ticks(200);

        assert_eq!(rig.shared.motor_state(), MotorState::CounterClockwise);
        assert_eq!(rig.conversion.debouncer().streak(), 0);
    }

    #[test]
    fn test_edge_during_decay_fades_back_on() {
        let mut rig = Rig::new();
        on_motion_edge(&rig.shared, Polarity::High);
        rig.ticks(100);
        rig.set_codes(QUIET, QUIET);
        rig.ticks(16);
        assert_eq!(rig.shared.motor_state(), MotorState::Idle);

        rig.ticks(20);
        let dimmed = rig.tick.duty();

        rig.set_codes(LOUD, LOUD);
        on_motion_edge(&rig.shared, Polarity::Low);
        let report = rig.tick().unwrap();
        assert_eq!(report.fade, FadeStep::Rising(dimmed + FADE_STEP));
        assert_eq!(rig.shared.motor_state(), MotorState::CounterClockwise);
        assert!(rig.shared.sampler_powered());
    }

    #[test]
    fn test_edge_rearms_parked_tick() {
        let mut rig = Rig::new();
        on_motion_edge(&rig.shared, Polarity::High);
        rig.set_codes(QUIET, QUIET);
        rig.ticks(2000);
        assert!(!rig.shared.tick_armed());
        assert_eq!(rig.led.duty, 0);

        on_motion_edge(&rig.shared, Polarity::High);
        assert!(rig.tick().is_some());
        assert_eq!(rig.led.duty, FADE_STEP);
    }

    #[test]
    fn test_late_conversion_discarded() {
        let shared = SharedState::new();
        let mut handler = ConversionHandler::new();
        assert_eq!(handler.on_conversion(&shared, Receiver::A, QUIET), None);
        assert!(!handler.debouncer().is_clear(Receiver::A));

        on_motion_edge(&shared, Polarity::High);
        assert_eq!(
            handler.on_conversion(&shared, Receiver::A, QUIET),
            Some(DebounceOutcome::Counting(0))
        );
    }

    #[test]
    fn test_output_error_does_not_stall_tick() {
        let mut rig = Rig::new();
        rig.led.fail = true;
        on_motion_edge(&rig.shared, Polarity::High);

        let report = rig.tick().unwrap();
        assert_eq!(report.output, Err(OutputError::Pwm));
        assert_eq!(report.fade, FadeStep::Rising(FADE_STEP));
        assert_eq!(rig.tick.slot(), 1);
    }
}
